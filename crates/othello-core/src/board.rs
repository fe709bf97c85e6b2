//! Othello board representation using bitboards.

use std::fmt;

use crate::bitboard::Bitboard;
use crate::disc::Disc;
use crate::flip;
use crate::square::Square;

/// An Othello position: one bitboard per color plus the side to move.
///
/// `Board` is a pure value type. Every move-producing operation returns a new
/// board; nothing is mutated in place.
///
/// # Invariants
///
/// * `black & white` is empty (no square holds two discs).
/// * `to_move` is never [`Disc::Empty`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    /// Bitboard of the black discs.
    pub black: Bitboard,
    /// Bitboard of the white discs.
    pub white: Bitboard,
    /// The color whose turn it is.
    pub to_move: Disc,
}

impl Default for Board {
    /// Creates a board with the standard starting position: white on D4 and
    /// E5, black on E4 and D5, black to move.
    fn default() -> Self {
        Board {
            black: Square::E4.bitboard() | Square::D5.bitboard(),
            white: Square::D4.bitboard() | Square::E5.bitboard(),
            to_move: Disc::Black,
        }
    }
}

impl Board {
    /// Creates a board with the standard starting position.
    pub fn initial() -> Board {
        Default::default()
    }

    /// Creates a board from explicit bitboards and a side to move.
    ///
    /// # Panics
    ///
    /// In debug builds only, panics if the bitboards overlap or `to_move` is
    /// [`Disc::Empty`]. Release builds accept the arguments unchecked.
    pub fn new(black: impl Into<Bitboard>, white: impl Into<Bitboard>, to_move: Disc) -> Board {
        let black = black.into();
        let white = white.into();
        debug_assert!(
            (black & white).is_empty(),
            "black and white bitboards must not overlap"
        );
        debug_assert!(to_move != Disc::Empty, "side to move must be a color");
        Board {
            black,
            white,
            to_move,
        }
    }

    /// Creates a board from a 64-character string of `X` (black), `O`
    /// (white), and `-` (empty), row-major from A1.
    ///
    /// # Errors
    ///
    /// - [`BoardError::InvalidSideToMove`] if `to_move` is [`Disc::Empty`].
    /// - [`BoardError::BadLength`] if the string is not 64 characters.
    /// - [`BoardError::InvalidChar`] on any other character.
    pub fn from_string(board_string: &str, to_move: Disc) -> Result<Board, BoardError> {
        if to_move == Disc::Empty {
            return Err(BoardError::InvalidSideToMove);
        }

        let chars: Vec<char> = board_string.chars().collect();
        if chars.len() != 64 {
            return Err(BoardError::BadLength {
                actual: chars.len(),
            });
        }

        let mut black = Bitboard::EMPTY;
        let mut white = Bitboard::EMPTY;
        for (i, &c) in chars.iter().enumerate() {
            let sq = Square::from_index_unchecked(i);
            match Disc::from_char(c) {
                Some(Disc::Black) => black = black.set(sq),
                Some(Disc::White) => white = white.set(sq),
                Some(Disc::Empty) => {}
                None => {
                    return Err(BoardError::InvalidChar {
                        char: c,
                        position: i,
                    });
                }
            }
        }

        Ok(Board {
            black,
            white,
            to_move,
        })
    }

    /// Returns the disc occupying the given square.
    #[inline]
    pub fn piece_at(&self, sq: Square) -> Disc {
        if self.black.contains(sq) {
            Disc::Black
        } else if self.white.contains(sq) {
            Disc::White
        } else {
            Disc::Empty
        }
    }

    /// Returns the bitboard of the given color's discs.
    #[inline(always)]
    pub fn discs_of(&self, color: Disc) -> Bitboard {
        match color {
            Disc::Black => self.black,
            Disc::White => self.white,
            Disc::Empty => Bitboard::EMPTY,
        }
    }

    /// Bitboard of the side to move's discs.
    #[inline(always)]
    pub fn own(&self) -> Bitboard {
        self.discs_of(self.to_move)
    }

    /// Bitboard of the waiting side's discs.
    #[inline(always)]
    pub fn opp(&self) -> Bitboard {
        self.discs_of(self.to_move.opposite())
    }

    /// Bitboard of the empty squares.
    #[inline(always)]
    pub fn get_empty(&self) -> Bitboard {
        !(self.black | self.white)
    }

    /// Number of empty squares.
    #[inline(always)]
    pub fn empty_count(&self) -> u32 {
        self.get_empty().count()
    }

    /// Checks whether the given square is empty.
    #[inline]
    pub fn is_square_empty(&self, sq: Square) -> bool {
        self.get_empty().contains(sq)
    }

    /// Returns the legal placements for the side to move.
    ///
    /// # Returns
    ///
    /// A bitboard where each set bit marks a square the side to move may
    /// play on. Iterating it yields squares in ascending index order.
    #[inline(always)]
    pub fn legal_moves(&self) -> Bitboard {
        self.own().get_moves(self.opp())
    }

    /// Checks whether the side to move has at least one legal move.
    #[inline(always)]
    pub fn has_legal_moves(&self) -> bool {
        !self.legal_moves().is_empty()
    }

    /// Checks whether a move on the given square is legal for the side to
    /// move.
    #[inline(always)]
    pub fn is_legal_move(&self, sq: Square) -> bool {
        self.legal_moves().contains(sq)
    }

    /// Returns the discs that placing on `sq` would flip.
    ///
    /// Empty iff the move is illegal.
    #[inline]
    pub fn flip_mask(&self, sq: Square) -> Bitboard {
        flip::flip(sq, self.own(), self.opp())
    }

    /// Plays a move for the side to move and returns the resulting board.
    ///
    /// # Panics
    ///
    /// In debug builds only, panics if the move flips nothing. Release
    /// builds produce an incorrect board for an illegal move; validate with
    /// [`is_legal_move`](Self::is_legal_move) or use
    /// [`try_make_move`](Self::try_make_move) when validity is uncertain.
    #[inline]
    pub fn make_move(&self, sq: Square) -> Board {
        let flipped = self.flip_mask(sq);
        debug_assert!(!flipped.is_empty(), "make_move requires a legal move");
        self.place(sq, flipped)
    }

    /// Attempts to play a move for the side to move.
    ///
    /// # Returns
    ///
    /// `Some(Board)` with the position after the move if it is legal,
    /// `None` otherwise.
    #[inline]
    pub fn try_make_move(&self, sq: Square) -> Option<Board> {
        if !self.is_square_empty(sq) {
            return None;
        }
        let flipped = self.flip_mask(sq);
        if flipped.is_empty() {
            return None;
        }
        Some(self.place(sq, flipped))
    }

    /// Applies a placement plus its flips and hands the turn over.
    #[inline(always)]
    fn place(&self, sq: Square, flipped: Bitboard) -> Board {
        let own = self.own() | sq.bitboard() | flipped;
        let opp = self.opp() & !flipped;
        match self.to_move {
            Disc::White => Board {
                black: opp,
                white: own,
                to_move: Disc::Black,
            },
            _ => Board {
                black: own,
                white: opp,
                to_move: Disc::White,
            },
        }
    }

    /// Passes the turn: same discs, opposite side to move.
    #[inline(always)]
    pub fn pass_turn(&self) -> Board {
        Board {
            black: self.black,
            white: self.white,
            to_move: self.to_move.opposite(),
        }
    }

    /// Checks whether the game is over (neither side has a legal move).
    #[inline]
    pub fn is_game_over(&self) -> bool {
        !self.has_legal_moves() && !self.pass_turn().has_legal_moves()
    }

    /// Determines the winner by disc count.
    ///
    /// Only meaningful once [`is_game_over`](Self::is_game_over) holds.
    ///
    /// # Returns
    ///
    /// The color with more discs, or `None` on a tie.
    pub fn winner(&self) -> Option<Disc> {
        use std::cmp::Ordering;
        match self.black.count().cmp(&self.white.count()) {
            Ordering::Greater => Some(Disc::Black),
            Ordering::Less => Some(Disc::White),
            Ordering::Equal => None,
        }
    }

    /// Calculates a 64-bit fingerprint of the position, side to move
    /// included.
    ///
    /// Used to index the transposition table; entries store the full
    /// position for verification, so a rare collision costs a probe miss,
    /// never a wrong score.
    #[inline]
    pub fn hash(&self) -> u64 {
        use rapidhash::v3;
        let words = [self.black.bits(), self.white.bits(), self.to_move as u64];
        let bytes: &[u8] =
            unsafe { std::slice::from_raw_parts(words.as_ptr() as *const u8, 24) };
        v3::rapidhash_v3_nano_inline::<true, false>(bytes, &v3::DEFAULT_RAPID_SECRETS)
    }
}

impl fmt::Display for Board {
    /// Formats the board as eight 8-character rows of `X`, `O`, and `-`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, sq) in Square::iter().enumerate() {
            if i > 0 && i % 8 == 0 {
                writeln!(f)?;
            }
            write!(f, "{}", self.piece_at(sq).to_char())?;
        }
        Ok(())
    }
}

/// Error type for board parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    /// The side to move was given as `Disc::Empty`.
    #[error("side to move must be Black or White")]
    InvalidSideToMove,
    /// The board string does not have exactly 64 characters.
    #[error("board string must have 64 characters, got {actual}")]
    BadLength {
        /// Number of characters actually supplied.
        actual: usize,
    },
    /// The board string contains a character other than `X`, `O`, or `-`.
    #[error("invalid character '{char}' at position {position}: must be 'X', 'O', or '-'")]
    InvalidChar {
        /// The offending character.
        char: char,
        /// Its 0-indexed position in the string.
        position: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_board() {
        let board = Board::initial();
        assert_eq!(board.black.count(), 2);
        assert_eq!(board.white.count(), 2);
        assert_eq!(board.empty_count(), 60);
        assert_eq!(board.to_move, Disc::Black);

        assert_eq!(board.piece_at(Square::D4), Disc::White);
        assert_eq!(board.piece_at(Square::E5), Disc::White);
        assert_eq!(board.piece_at(Square::E4), Disc::Black);
        assert_eq!(board.piece_at(Square::D5), Disc::Black);
        assert_eq!(board.piece_at(Square::A1), Disc::Empty);
    }

    #[test]
    fn test_from_string() {
        let board = Board::from_string(
            "--------\
             --------\
             --------\
             ---OX---\
             ---XO---\
             --------\
             --------\
             --------",
            Disc::Black,
        )
        .unwrap();
        assert_eq!(board, Board::initial());
    }

    #[test]
    fn test_from_string_errors() {
        assert_eq!(
            Board::from_string("X", Disc::Black),
            Err(BoardError::BadLength { actual: 1 })
        );
        let long = "-".repeat(65);
        assert_eq!(
            Board::from_string(&long, Disc::Black),
            Err(BoardError::BadLength { actual: 65 })
        );
        let bad = format!("{}Z{}", "-".repeat(10), "-".repeat(53));
        assert_eq!(
            Board::from_string(&bad, Disc::Black),
            Err(BoardError::InvalidChar {
                char: 'Z',
                position: 10
            })
        );
        assert_eq!(
            Board::from_string(&"-".repeat(64), Disc::Empty),
            Err(BoardError::InvalidSideToMove)
        );
    }

    #[test]
    fn test_display_round_trip() {
        let board = Board::initial();
        let rendered = board.to_string().replace('\n', "");
        assert_eq!(Board::from_string(&rendered, Disc::Black).unwrap(), board);
    }

    #[test]
    fn test_legal_moves_initial() {
        let moves = Board::initial().legal_moves();
        assert_eq!(moves.count(), 4);
        assert!(moves.contains(Square::D3));
        assert!(moves.contains(Square::C4));
        assert!(moves.contains(Square::F5));
        assert!(moves.contains(Square::E6));
    }

    #[test]
    fn test_make_move_first_move() {
        let board = Board::initial().make_move(Square::D3);

        assert_eq!(board.to_move, Disc::White);
        let expected_black = Square::D3.bitboard()
            | Square::D4.bitboard()
            | Square::D5.bitboard()
            | Square::E4.bitboard();
        assert_eq!(board.black, expected_black);
        assert_eq!(board.white, Square::E5.bitboard());
    }

    #[test]
    fn test_make_move_preserves_invariants() {
        let board = Board::initial();
        for sq in board.legal_moves() {
            let next = board.make_move(sq);
            assert!((next.black & next.white).is_empty());
            assert_eq!(
                next.black.count() + next.white.count(),
                board.black.count() + board.white.count() + 1
            );
            assert_eq!(next.to_move, Disc::White);
        }
    }

    #[test]
    fn test_try_make_move() {
        let board = Board::initial();
        assert!(board.try_make_move(Square::D3).is_some());
        // Occupied square.
        assert!(board.try_make_move(Square::D4).is_none());
        // Empty square that flips nothing.
        assert!(board.try_make_move(Square::A1).is_none());
    }

    #[test]
    fn test_pass_turn() {
        let board = Board::initial();
        let passed = board.pass_turn();
        assert_eq!(passed.black, board.black);
        assert_eq!(passed.white, board.white);
        assert_eq!(passed.to_move, Disc::White);
        assert_eq!(passed.pass_turn(), board);
    }

    #[test]
    fn test_flip_mask_subset_of_opponent() {
        let board = Board::initial();
        for sq in board.legal_moves() {
            let flips = board.flip_mask(sq);
            assert!(!flips.is_empty());
            assert!((flips & !board.opp()).is_empty());
        }
    }

    #[test]
    fn test_is_game_over() {
        assert!(!Board::initial().is_game_over());

        // Full board.
        let full = Board::new(0xFFFF_FFFF_0000_0000u64, 0x0000_0000_FFFF_FFFFu64, Disc::Black);
        assert!(full.is_game_over());

        // Wipeout: a color with no discs cannot move, and neither can the
        // other side (every move must flip something).
        let wiped = Board::new(0u64, Square::D4.bitboard() | Square::E4.bitboard(), Disc::Black);
        assert!(wiped.legal_moves().is_empty());
        assert!(wiped.is_game_over());
    }

    #[test]
    fn test_one_sided_pass() {
        // Black A1 and C1 surround white B1; black has no move anywhere,
        // while white can play D1 after the pass.
        let board = Board::new(
            Square::A1.bitboard() | Square::C1.bitboard(),
            Square::B1.bitboard(),
            Disc::Black,
        );
        assert!(board.legal_moves().is_empty());
        assert!(!board.is_game_over());

        let passed = board.pass_turn();
        assert_eq!(passed.to_move, Disc::White);
        assert!(passed.is_legal_move(Square::D1));
    }

    #[test]
    fn test_winner() {
        let full = Board::new(0xFFFF_FFFF_0000_0000u64, 0x0000_0000_FFFF_FFFFu64, Disc::Black);
        assert_eq!(full.winner(), None);

        let black_ahead = Board::new(0x7u64, 0x8u64, Disc::Black);
        assert_eq!(black_ahead.winner(), Some(Disc::Black));

        let white_ahead = Board::new(0x1u64, 0x6u64, Disc::Black);
        assert_eq!(white_ahead.winner(), Some(Disc::White));
    }

    #[test]
    fn test_hash_distinguishes_side_to_move() {
        let board = Board::initial();
        assert_eq!(board.hash(), Board::initial().hash());
        assert_ne!(board.hash(), board.pass_turn().hash());
        assert_ne!(board.hash(), board.make_move(Square::D3).hash());
    }
}

use std::fmt;
use std::str::FromStr;

use crate::bitboard::Bitboard;

/// Represents a square on the board, ranging from A1 to H8.
///
/// Files (columns) are labeled A-H and ranks (rows) 1-8. Squares are numbered
/// row-major from the top-left corner:
///
/// ```text
///   A  B  C  D  E  F  G  H
/// 1 00 01 02 03 04 05 06 07
/// 2 08 09 10 11 12 13 14 15
/// 3 16 17 18 19 20 21 22 23
/// 4 24 25 26 27 28 29 30 31
/// 5 32 33 34 35 36 37 38 39
/// 6 40 41 42 43 44 45 46 47
/// 7 48 49 50 51 52 53 54 55
/// 8 56 57 58 59 60 61 62 63
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
#[rustfmt::skip]
pub enum Square {
    A1, B1, C1, D1, E1, F1, G1, H1,
    A2, B2, C2, D2, E2, F2, G2, H2,
    A3, B3, C3, D3, E3, F3, G3, H3,
    A4, B4, C4, D4, E4, F4, G4, H4,
    A5, B5, C5, D5, E5, F5, G5, H5,
    A6, B6, C6, D6, E6, F6, G6, H6,
    A7, B7, C7, D7, E7, F7, G7, H7,
    A8, B8, C8, D8, E8, F8, G8, H8,
}

/// Number of squares along one edge of the board.
pub const BOARD_SIZE: usize = 8;

/// Total number of squares on the board.
pub const TOTAL_SQUARES: usize = BOARD_SIZE * BOARD_SIZE;

impl Square {
    /// Returns a bitboard with only this square's bit set.
    #[inline]
    pub const fn bitboard(self) -> Bitboard {
        Bitboard::new(1 << self as u8)
    }

    /// Returns the square's index (0 for A1 through 63 for H8).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Converts a `usize` index into a `Square` without bounds checking.
    ///
    /// # Panics
    ///
    /// In debug builds only, panics if `index` >= 64.
    #[inline]
    pub fn from_index_unchecked(index: usize) -> Square {
        debug_assert!(
            index < TOTAL_SQUARES,
            "index out of bounds for Square: {index}"
        );
        unsafe { std::mem::transmute(index as u8) }
    }

    /// Safely converts a `usize` index into a `Square`.
    ///
    /// # Returns
    ///
    /// `Some(Square)` if the index is in `0..64`, `None` otherwise.
    #[inline]
    pub fn from_index(index: usize) -> Option<Square> {
        if index < TOTAL_SQUARES {
            Some(Square::from_index_unchecked(index))
        } else {
            None
        }
    }

    /// Returns the file (column) of this square, 0 for file A through 7 for H.
    #[inline]
    pub const fn file(self) -> usize {
        self.index() % BOARD_SIZE
    }

    /// Returns the rank (row) of this square, 0 for rank 1 through 7 for 8.
    #[inline]
    pub const fn rank(self) -> usize {
        self.index() / BOARD_SIZE
    }

    /// Iterates over all squares in ascending index order (A1 to H8).
    pub fn iter() -> impl Iterator<Item = Square> {
        (0..TOTAL_SQUARES).map(Square::from_index_unchecked)
    }
}

impl fmt::Display for Square {
    /// Formats the square in algebraic notation, e.g. `D3`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = (b'A' + self.file() as u8) as char;
        let rank = (b'1' + self.rank() as u8) as char;
        write!(f, "{file}{rank}")
    }
}

/// Error returned when parsing an algebraic square fails.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid square notation '{0}': expected a file A-H and a rank 1-8")]
pub struct ParseSquareError(pub String);

impl FromStr for Square {
    type Err = ParseSquareError;

    /// Parses case-insensitive algebraic notation, e.g. `"d3"` or `"D3"`.
    fn from_str(s: &str) -> Result<Square, ParseSquareError> {
        let mut chars = s.chars();
        let (Some(file_char), Some(rank_char), None) =
            (chars.next(), chars.next(), chars.next())
        else {
            return Err(ParseSquareError(s.to_string()));
        };

        let file = match file_char.to_ascii_uppercase() {
            c @ 'A'..='H' => c as usize - 'A' as usize,
            _ => return Err(ParseSquareError(s.to_string())),
        };
        let rank = match rank_char {
            c @ '1'..='8' => c as usize - '1' as usize,
            _ => return Err(ParseSquareError(s.to_string())),
        };

        Ok(Square::from_index_unchecked(rank * BOARD_SIZE + file))
    }
}

//! Disc flip calculation for move execution.

use crate::bitboard::{Bitboard, Direction};
use crate::square::Square;

/// Calculates which opponent discs would be flipped by placing a disc at the
/// given square.
///
/// Each of the eight rays from `sq` is walked one step at a time: opponent
/// discs are collected tentatively, and the run is committed only when it is
/// capped by one of the player's own discs. Running onto an empty square or
/// off the board discards the run. A single-bit cursor shifted with the
/// file-masked [`Bitboard::shift`] cannot wrap, so no per-step wrap checks
/// are needed.
///
/// # Arguments
///
/// * `sq` - The square where the disc is being placed
/// * `own` - Bitboard of the moving player's discs
/// * `opp` - Bitboard of the opponent's discs
///
/// # Returns
///
/// A bitboard of all opponent discs flipped by this move. Empty if the move
/// flips nothing (i.e. the move is illegal).
pub fn flip(sq: Square, own: Bitboard, opp: Bitboard) -> Bitboard {
    let mut flipped = Bitboard::EMPTY;

    for dir in Direction::ALL {
        let mut run = Bitboard::EMPTY;
        let mut cursor = sq.bitboard().shift(dir);
        while !(cursor & opp).is_empty() {
            run |= cursor;
            cursor = cursor.shift(dir);
        }
        if !(cursor & own).is_empty() {
            flipped |= run;
        }
    }

    flipped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flip_initial_moves() {
        let black = Square::E4.bitboard() | Square::D5.bitboard();
        let white = Square::D4.bitboard() | Square::E5.bitboard();

        assert_eq!(flip(Square::D3, black, white), Square::D4.bitboard());
        assert_eq!(flip(Square::C4, black, white), Square::D4.bitboard());
        assert_eq!(flip(Square::F5, black, white), Square::E5.bitboard());
        assert_eq!(flip(Square::E6, black, white), Square::E5.bitboard());
    }

    #[test]
    fn test_flip_illegal_square_is_empty() {
        let black = Square::E4.bitboard() | Square::D5.bitboard();
        let white = Square::D4.bitboard() | Square::E5.bitboard();

        // No bracketing line from A1.
        assert_eq!(flip(Square::A1, black, white), Bitboard::EMPTY);
        // E3 reaches a white disc but no own disc caps the run.
        assert_eq!(flip(Square::E3, black, white), Bitboard::EMPTY);
    }

    #[test]
    fn test_flip_long_diagonal() {
        // Own disc on H8, opponent chain B2..G7: placing at A1 flips all six.
        let own = Square::H8.bitboard();
        let opp = Square::B2.bitboard()
            | Square::C3.bitboard()
            | Square::D4.bitboard()
            | Square::E5.bitboard()
            | Square::F6.bitboard()
            | Square::G7.bitboard();

        assert_eq!(flip(Square::A1, own, opp), opp);
    }

    #[test]
    fn test_flip_does_not_wrap() {
        // Opponent on H4, own on G5: from A5 the raw offsets line up but the
        // squares sit on opposite edges, so nothing may flip.
        let own = Square::G5.bitboard();
        let opp = Square::H4.bitboard();
        assert_eq!(flip(Square::A5, own, opp), Bitboard::EMPTY);
    }

    #[test]
    fn test_flip_multiple_directions() {
        // Placing at D4 flips runs both east and north.
        let own = Square::F4.bitboard() | Square::D6.bitboard();
        let opp = Square::E4.bitboard() | Square::D5.bitboard();

        let flipped = flip(Square::D4, own, opp);
        assert_eq!(flipped, Square::E4.bitboard() | Square::D5.bitboard());
    }

    #[test]
    fn test_flip_run_discarded_on_empty() {
        // Opponent run east of D4 ends on an empty square, not an own disc.
        let own = Square::A4.bitboard();
        let opp = Square::E4.bitboard() | Square::F4.bitboard();
        assert_eq!(flip(Square::D4, own, opp), Bitboard::EMPTY);
    }
}

//! Board masks and evaluation constants.

use crate::bitboard::Bitboard;
use crate::square::Square;
use crate::types::Score;

/// Bitboard mask of the four corner squares (A1, H1, A8, H8).
pub const CORNERS: Bitboard = Bitboard::new(0x8100_0000_0000_0081);

/// Bitboard mask of the X-squares (B2, G2, B7, G7), the diagonal neighbors
/// of the corners.
pub const X_SQUARES: Bitboard = Bitboard::new(0x0042_0000_0000_4200);

/// Each X-square paired with its diagonally adjacent corner.
pub const X_SQUARE_CORNERS: [(Square, Square); 4] = [
    (Square::B2, Square::A1),
    (Square::G2, Square::H1),
    (Square::B7, Square::A8),
    (Square::G7, Square::H8),
];

/// Base score awarded for a won terminal position; the disc margin is added
/// on top so larger wins order ahead of narrow ones.
pub const SCORE_WIN: Score = 10_000.0;

/// Number of empty squares below which the parity term applies.
pub const PARITY_EMPTY_THRESHOLD: u32 = 20;

/// Static positional weight of each square, row-major from A1.
///
/// Corners dominate, the squares adjacent to them are liabilities while the
/// corner is contested, and edge/center squares carry small positive values.
#[rustfmt::skip]
pub const POSITIONAL_WEIGHTS: [i32; 64] = [
    120, -20,  20,  10,  10,  20, -20, 120,
    -20, -40,  -5,  -5,  -5,  -5, -40, -20,
     20,  -5,  15,   5,   5,  15,  -5,  20,
     10,  -5,   5,   3,   3,   5,  -5,  10,
     10,  -5,   5,   3,   3,   5,  -5,  10,
     20,  -5,  15,   5,   5,  15,  -5,  20,
    -20, -40,  -5,  -5,  -5,  -5, -40, -20,
    120, -20,  20,  10,  10,  20, -20, 120,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corner_mask() {
        assert_eq!(CORNERS.count(), 4);
        assert!(CORNERS.contains(Square::A1));
        assert!(CORNERS.contains(Square::H1));
        assert!(CORNERS.contains(Square::A8));
        assert!(CORNERS.contains(Square::H8));
    }

    #[test]
    fn test_x_square_mask() {
        assert_eq!(X_SQUARES.count(), 4);
        assert!(X_SQUARES.contains(Square::B2));
        assert!(X_SQUARES.contains(Square::G2));
        assert!(X_SQUARES.contains(Square::B7));
        assert!(X_SQUARES.contains(Square::G7));
    }

    #[test]
    fn test_x_square_corner_pairing() {
        for (x, corner) in X_SQUARE_CORNERS {
            assert!(X_SQUARES.contains(x));
            assert!(CORNERS.contains(corner));
            // The corner is the X-square's diagonal neighbor.
            assert_eq!(x.file().abs_diff(corner.file()), 1);
            assert_eq!(x.rank().abs_diff(corner.rank()), 1);
        }
    }

    #[test]
    fn test_weight_table_symmetry() {
        // The table is symmetric under horizontal and vertical reflection.
        for rank in 0..8 {
            for file in 0..8 {
                let w = POSITIONAL_WEIGHTS[rank * 8 + file];
                assert_eq!(w, POSITIONAL_WEIGHTS[rank * 8 + (7 - file)]);
                assert_eq!(w, POSITIONAL_WEIGHTS[(7 - rank) * 8 + file]);
            }
        }
    }
}

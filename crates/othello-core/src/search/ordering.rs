//! Move ordering for alpha-beta search.
//!
//! Ordering only affects how quickly the search prunes, never the score it
//! returns. Priority: principal-variation move, corner moves, killer moves,
//! remaining moves by descending history weight, X-square moves last. A move
//! falls into exactly one category, earliest match wins.

use std::cmp::Reverse;

use arrayvec::ArrayVec;

use crate::bitboard::Bitboard;
use crate::constants::{CORNERS, X_SQUARES};
use crate::search::heuristics::HistoryTable;
use crate::square::Square;

/// Maximum number of legal moves in any reachable position.
pub const MAX_MOVES: usize = 34;

/// Ordered move list, fixed-capacity so the hot path never allocates.
pub type MoveVec = ArrayVec<Square, MAX_MOVES>;

/// Category ranks; lower sorts earlier.
const RANK_PV: u8 = 0;
const RANK_CORNER: u8 = 1;
const RANK_KILLER: u8 = 2;
const RANK_REGULAR: u8 = 3;
const RANK_X_SQUARE: u8 = 4;

/// Orders legal moves with the full heuristic set.
///
/// # Arguments
///
/// * `moves` - Legal-move bitboard for the position.
/// * `pv_move` - Best move from the previous iteration, if any.
/// * `killers` - The killer pair recorded at this ply.
/// * `history` - Session history weights for regular-move ordering.
///
/// # Returns
///
/// A permutation of `moves`; ties within a category keep ascending square
/// order.
pub fn order_moves(
    moves: Bitboard,
    pv_move: Option<Square>,
    killers: &[Option<Square>; 2],
    history: &HistoryTable,
) -> MoveVec {
    let mut ordered: MoveVec = moves.iter().collect();
    ordered.sort_by_key(|&sq| {
        let rank = if pv_move == Some(sq) {
            RANK_PV
        } else if CORNERS.contains(sq) {
            RANK_CORNER
        } else if killers[0] == Some(sq) || killers[1] == Some(sq) {
            RANK_KILLER
        } else if X_SQUARES.contains(sq) {
            RANK_X_SQUARE
        } else {
            RANK_REGULAR
        };
        // History only discriminates among regular moves.
        let weight = if rank == RANK_REGULAR {
            history.score(sq)
        } else {
            0
        };
        (rank, Reverse(weight))
    });
    ordered
}

/// Orders legal moves without search-state heuristics: corners first,
/// X-squares last, ascending square order in between.
///
/// Used by the endgame solver, which carries no PV hint, killers, or
/// history.
pub fn order_moves_static(moves: Bitboard) -> MoveVec {
    let mut ordered: MoveVec = moves.iter().collect();
    ordered.sort_by_key(|&sq| {
        if CORNERS.contains(sq) {
            RANK_CORNER
        } else if X_SQUARES.contains(sq) {
            RANK_X_SQUARE
        } else {
            RANK_REGULAR
        }
    });
    ordered
}

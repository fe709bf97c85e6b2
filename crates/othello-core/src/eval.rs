//! Heuristic position evaluation.
//!
//! The evaluator scores a non-terminal position as a weighted sum of eight
//! terms: mobility, stability, frontier exposure, static positional weights,
//! corner control, X-square risk, endgame parity, and raw disc count.
//! Terminal positions are scored exactly from the final disc difference.

use crate::bitboard::{Bitboard, Direction};
use crate::board::Board;
use crate::constants::{
    CORNERS, PARITY_EMPTY_THRESHOLD, POSITIONAL_WEIGHTS, SCORE_WIN, X_SQUARE_CORNERS,
};
use crate::disc::Disc;
use crate::stability;
use crate::types::Score;

/// Term weights for the heuristic evaluation.
///
/// [`Default`] is the production tuning. Frontier and X-square weights are
/// negative: frontier discs invite flips and an X-square next to an open
/// corner hands the corner to the opponent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EvalWeights {
    /// Per legal-move advantage.
    pub mobility: Score,
    /// Per stable-disc advantage.
    pub stability: Score,
    /// Per frontier-disc advantage (negative).
    pub frontier: Score,
    /// Multiplier on the positional weight table.
    pub positional: Score,
    /// Per corner advantage, on top of the table's corner weight.
    pub corners: Score,
    /// Per own X-square whose corner is still empty (negative).
    pub x_square: Score,
    /// Bonus for holding the move when few empties remain and their count is
    /// odd.
    pub parity: Score,
    /// Per disc advantage.
    pub disc_count: Score,
}

impl Default for EvalWeights {
    fn default() -> Self {
        EvalWeights {
            mobility: 15.0,
            stability: 25.0,
            frontier: -8.0,
            positional: 1.0,
            corners: 120.0,
            x_square: -60.0,
            parity: 15.0,
            disc_count: 1.0,
        }
    }
}

/// Position evaluator with configurable term weights.
#[derive(Debug, Clone, Default)]
pub struct Evaluator {
    weights: EvalWeights,
}

impl Evaluator {
    /// Creates an evaluator with the production weights.
    pub fn new() -> Evaluator {
        Default::default()
    }

    /// Creates an evaluator with custom weights.
    pub fn with_weights(weights: EvalWeights) -> Evaluator {
        Evaluator { weights }
    }

    /// Scores a position from the given player's perspective.
    ///
    /// Higher is better for `player`. The search negates across recursion
    /// levels, so it always evaluates for the side to move; the perspective
    /// argument exists for callers that want the other view of the same
    /// position.
    ///
    /// # Arguments
    ///
    /// * `board` - The position to score.
    /// * `player` - The color whose advantage is measured.
    pub fn evaluate(&self, board: &Board, player: Disc) -> Score {
        let w = &self.weights;
        let own = board.discs_of(player);
        let opp = board.discs_of(player.opposite());
        let empty = board.get_empty();

        let mut score = 0.0;

        let own_mobility = own.get_moves(opp).count() as Score;
        let opp_mobility = opp.get_moves(own).count() as Score;
        score += (own_mobility - opp_mobility) * w.mobility;

        let own_stable = stability::stable_discs(own).count() as Score;
        let opp_stable = stability::stable_discs(opp).count() as Score;
        score += (own_stable - opp_stable) * w.stability;

        let own_frontier = frontier(own, empty).count() as Score;
        let opp_frontier = frontier(opp, empty).count() as Score;
        score += (own_frontier - opp_frontier) * w.frontier;

        score += (positional(own) - positional(opp)) * w.positional;

        let own_corners = (own & CORNERS).count() as Score;
        let opp_corners = (opp & CORNERS).count() as Score;
        score += (own_corners - opp_corners) * w.corners;

        let own_risky = exposed_x_squares(board, own) as Score;
        let opp_risky = exposed_x_squares(board, opp) as Score;
        score += (own_risky - opp_risky) * w.x_square;

        let empties = board.empty_count();
        if empties < PARITY_EMPTY_THRESHOLD && empties % 2 == 1 {
            score += if board.to_move == player {
                w.parity
            } else {
                -w.parity
            };
        }

        score += (own.count() as Score - opp.count() as Score) * w.disc_count;

        score
    }

    /// Scores a finished game from the given player's perspective.
    ///
    /// Wins score `SCORE_WIN` plus the disc margin so that, among winning
    /// lines, the search prefers the larger margin; losses mirror this and
    /// ties score zero.
    pub fn terminal(board: &Board, player: Disc) -> Score {
        let own = board.discs_of(player).count() as i32;
        let opp = board.discs_of(player.opposite()).count() as i32;
        let diff = own - opp;

        if diff > 0 {
            SCORE_WIN + diff as Score
        } else if diff < 0 {
            -SCORE_WIN + diff as Score
        } else {
            0.0
        }
    }
}

/// Scores a position with the production weights.
///
/// Convenience wrapper over [`Evaluator::evaluate`].
pub fn evaluate(board: &Board, player: Disc) -> Score {
    Evaluator::new().evaluate(board, player)
}

/// Discs of `discs` with at least one empty neighbor in any direction.
#[inline]
fn frontier(discs: Bitboard, empty: Bitboard) -> Bitboard {
    let mut adjacent_to_empty = Bitboard::EMPTY;
    for dir in Direction::ALL {
        adjacent_to_empty |= empty.shift(dir);
    }
    adjacent_to_empty & discs
}

/// Sum of the positional table over the given discs.
#[inline]
fn positional(discs: Bitboard) -> Score {
    discs
        .iter()
        .map(|sq| POSITIONAL_WEIGHTS[sq.index()])
        .sum::<i32>() as Score
}

/// Counts `discs`' X-squares whose adjacent corner is still empty.
#[inline]
fn exposed_x_squares(board: &Board, discs: Bitboard) -> u32 {
    X_SQUARE_CORNERS
        .iter()
        .filter(|&&(x, corner)| discs.contains(x) && board.piece_at(corner) == Disc::Empty)
        .count() as u32
}

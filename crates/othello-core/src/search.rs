//! Negamax alpha-beta search.
//!
//! The searcher maximizes for whichever color is to move at each node and
//! negates child scores on the way back up, so a single routine serves both
//! sides. Nodes near the end of the game are handed to the perfect solver in
//! [`endgame`].

pub mod endgame;
pub mod heuristics;
pub mod ordering;

use crate::board::Board;
use crate::eval::Evaluator;
use crate::search::heuristics::{HistoryTable, KillerTable};
use crate::square::Square;
use crate::transposition_table::TranspositionTable;
use crate::types::{Depth, Score};

/// Mutable search state threaded through the recursion.
///
/// The tables are owned by the engine and borrowed per search; the context
/// adds the node counter and the endgame handoff threshold.
pub struct SearchContext<'a> {
    /// Transposition table, shared between midgame search and solver.
    pub tt: &'a mut TranspositionTable,
    /// Killer table, indexed by ply.
    pub killers: &'a mut KillerTable,
    /// History weights, kept across searches within a session.
    pub history: &'a mut HistoryTable,
    /// Evaluator applied at the horizon.
    pub evaluator: &'a Evaluator,
    /// Empty-square count at or below which the solver takes over.
    pub endgame_threshold: u32,
    /// Nodes visited by this search.
    pub n_nodes: u64,
}

impl<'a> SearchContext<'a> {
    /// Creates a context borrowing the engine's tables.
    pub fn new(
        tt: &'a mut TranspositionTable,
        killers: &'a mut KillerTable,
        history: &'a mut HistoryTable,
        evaluator: &'a Evaluator,
        endgame_threshold: u32,
    ) -> Self {
        SearchContext {
            tt,
            killers,
            history,
            evaluator,
            endgame_threshold,
            n_nodes: 0,
        }
    }
}

/// Negamax search with alpha-beta pruning, killer moves, and the history
/// heuristic.
///
/// Scores are from the perspective of the side to move of `board`; children
/// are searched with swapped, negated bounds and their scores negated back.
/// Positions with at most the context's endgame threshold of empties are
/// solved exactly instead of searched to a horizon.
///
/// # Arguments
///
/// * `ctx` - Search state (tables, evaluator, counters).
/// * `board` - Position to search.
/// * `depth` - Remaining depth; the horizon evaluates heuristically.
/// * `alpha`, `beta` - Pruning window.
/// * `pv_move` - Move to try first (principal variation from the previous
///   iteration); only meaningful at the root.
/// * `ply` - Distance from the root, for the killer table.
///
/// # Returns
///
/// The best score and the move achieving it (`None` at horizon, terminal,
/// and forced-pass nodes).
pub fn negamax(
    ctx: &mut SearchContext,
    board: &Board,
    depth: Depth,
    mut alpha: Score,
    beta: Score,
    pv_move: Option<Square>,
    ply: usize,
) -> (Score, Option<Square>) {
    ctx.n_nodes += 1;

    if board.empty_count() <= ctx.endgame_threshold {
        return endgame::solve(ctx, board, alpha, beta);
    }

    if let Some(entry) = ctx.tt.probe(board) {
        if entry.depth >= depth {
            return (entry.score, entry.best_move);
        }
    }

    if depth == 0 {
        return (ctx.evaluator.evaluate(board, board.to_move), None);
    }

    if board.is_game_over() {
        return (Evaluator::terminal(board, board.to_move), None);
    }

    let moves = board.legal_moves();
    if moves.is_empty() {
        let (score, _) = negamax(ctx, &board.pass_turn(), depth - 1, -beta, -alpha, None, ply + 1);
        return (-score, None);
    }

    let killers = ctx.killers.at(ply);
    let ordered = ordering::order_moves(moves, pv_move, &killers, ctx.history);

    let mut best_score = Score::NEG_INFINITY;
    let mut best_move = ordered[0];

    for &sq in &ordered {
        let next = board.make_move(sq);
        let (child, _) = negamax(ctx, &next, depth - 1, -beta, -alpha, None, ply + 1);
        let score = -child;

        if score > best_score {
            best_score = score;
            best_move = sq;
        }
        alpha = alpha.max(score);

        if alpha >= beta {
            ctx.killers.store(ply, sq);
            ctx.history.reward(sq, depth);
            break;
        }
    }

    ctx.tt.store(board, depth, best_score, Some(best_move));

    (best_score, Some(best_move))
}

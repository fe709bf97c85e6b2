//! Perfect endgame solver.
//!
//! Structurally the same negamax as the midgame search, but with no horizon:
//! recursion ends only at game over, and positions are scored exclusively by
//! the exact terminal evaluation. Results are stored in the shared
//! transposition table with the [`DEPTH_ENDGAME`] sentinel so the midgame
//! search treats them as usable at any depth.

use crate::board::Board;
use crate::eval::Evaluator;
use crate::search::{SearchContext, ordering};
use crate::square::Square;
use crate::transposition_table::DEPTH_ENDGAME;
use crate::types::Score;

/// Solves a position exactly.
///
/// Intended for positions with few empty squares (the search hands over at
/// its endgame threshold); the recursion explores every line to the end of
/// the game under alpha-beta pruning.
///
/// # Arguments
///
/// * `ctx` - Search state; only the transposition table and node counter are
///   touched.
/// * `board` - Position to solve.
/// * `alpha`, `beta` - Pruning window.
///
/// # Returns
///
/// The game-theoretic score for the side to move and the move achieving it
/// (`None` at terminal and forced-pass nodes).
pub fn solve(
    ctx: &mut SearchContext,
    board: &Board,
    mut alpha: Score,
    beta: Score,
) -> (Score, Option<Square>) {
    ctx.n_nodes += 1;

    // Solver entries are exact regardless of depth, so any hit is usable.
    // Midgame entries cannot appear here: the search delegates positions at
    // or below the threshold before reaching its store.
    if let Some(entry) = ctx.tt.probe(board) {
        return (entry.score, entry.best_move);
    }

    if board.is_game_over() {
        return (Evaluator::terminal(board, board.to_move), None);
    }

    let moves = board.legal_moves();
    if moves.is_empty() {
        let (score, _) = solve(ctx, &board.pass_turn(), -beta, -alpha);
        return (-score, None);
    }

    let ordered = ordering::order_moves_static(moves);

    let mut best_score = Score::NEG_INFINITY;
    let mut best_move = ordered[0];

    for &sq in &ordered {
        let next = board.make_move(sq);
        let (child, _) = solve(ctx, &next, -beta, -alpha);
        let score = -child;

        if score > best_score {
            best_score = score;
            best_move = sq;
        }
        alpha = alpha.max(score);

        if alpha >= beta {
            break;
        }
    }

    ctx.tt.store(board, DEPTH_ENDGAME, best_score, Some(best_move));

    (best_score, Some(best_move))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::disc::Disc;
    use crate::eval::Evaluator;
    use crate::search::heuristics::{HistoryTable, KillerTable};
    use crate::transposition_table::TranspositionTable;

    fn solve_fresh(board: &Board) -> (Score, Option<Square>) {
        let mut tt = TranspositionTable::new(1);
        let mut killers = KillerTable::new();
        let mut history = HistoryTable::new();
        let evaluator = Evaluator::new();
        let mut ctx = SearchContext::new(&mut tt, &mut killers, &mut history, &evaluator, 15);
        solve(&mut ctx, board, Score::NEG_INFINITY, Score::INFINITY)
    }

    #[test]
    fn test_terminal_position() {
        let board = Board::from_string(
            &("X".repeat(32) + &"O".repeat(32)),
            Disc::Black,
        )
        .unwrap();
        let (score, mv) = solve_fresh(&board);
        assert_eq!(score, 0.0);
        assert_eq!(mv, None);
    }

    #[test]
    fn test_last_move_taken() {
        // One empty square left at H8; black plays it, flipping G8 and the
        // seventh-rank diagonal fodder, and the game ends immediately.
        let board = Board::from_string(
            "XXXXXXXX\
             XXXXXXXX\
             XXXXXXXX\
             XXXXXXXX\
             XXXXXXXX\
             XXXXXXXX\
             XXXXXXXX\
             XXXXXXO-",
            Disc::Black,
        )
        .unwrap();
        let (score, mv) = solve_fresh(&board);
        assert_eq!(mv, Some(Square::H8));
        // 64-0 sweep after the flip.
        assert_eq!(score, 10_000.0 + 64.0);
    }

    #[test]
    fn test_solver_result_is_cached_as_endgame_entry() {
        let board = Board::from_string(
            "XXXXXXXX\
             XXXXXXXX\
             XXXXXXXX\
             XXXXXXXX\
             XXXXXXXX\
             XXXXXXXX\
             XXXXXXXX\
             XXXXXXO-",
            Disc::Black,
        )
        .unwrap();

        let mut tt = TranspositionTable::new(1);
        let mut killers = KillerTable::new();
        let mut history = HistoryTable::new();
        let evaluator = Evaluator::new();
        let mut ctx = SearchContext::new(&mut tt, &mut killers, &mut history, &evaluator, 15);
        solve(&mut ctx, &board, Score::NEG_INFINITY, Score::INFINITY);

        let entry = tt.probe(&board).expect("solved root should be stored");
        assert_eq!(entry.depth, DEPTH_ENDGAME);
    }
}

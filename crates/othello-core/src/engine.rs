//! Iterative-deepening engine driver.
//!
//! [`Engine`] owns the search tables and turns a wall-clock budget into a
//! move: it searches at increasing depth, seeding each iteration with the
//! previous one's best move and an aspiration window around its score, until
//! the budget runs out or the depth cap is hit.

use std::time::{Duration, Instant};

use crate::board::Board;
use crate::eval::Evaluator;
use crate::search::heuristics::{HistoryTable, KillerTable};
use crate::search::{SearchContext, negamax};
use crate::square::Square;
use crate::transposition_table::TranspositionTable;
use crate::types::{Depth, Score};

/// Engine configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EngineOptions {
    /// Transposition table size in megabytes.
    pub tt_mb_size: usize,
    /// Empty-square count at or below which the perfect solver takes over.
    pub endgame_threshold: u32,
    /// Half-width of the aspiration window placed around the previous
    /// iteration's score (used from depth 3 onward).
    pub aspiration_window: Score,
    /// Iterative-deepening depth cap.
    pub max_depth: Depth,
}

impl Default for EngineOptions {
    fn default() -> Self {
        EngineOptions {
            tt_mb_size: 16,
            endgame_threshold: 15,
            aspiration_window: 50.0,
            max_depth: 50,
        }
    }
}

/// Result of a [`Engine::best_move`] call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoveResult {
    /// The chosen move, or `None` when the side to move has no legal move.
    pub best_move: Option<Square>,
    /// Score of the chosen move from the side to move's perspective.
    pub score: Score,
    /// Depth of the last completed iteration (0 when no search was needed).
    pub depth: Depth,
}

/// Othello engine: iterative deepening over [`negamax`] with aspiration
/// windows and cooperative time control.
///
/// The engine owns the transposition, killer, and history tables. TT and
/// killers are cleared at the start of every [`best_move`](Self::best_move)
/// call; history persists across calls so move ordering keeps improving
/// within a session. A single `best_move` call is atomic from the caller's
/// perspective; the engine is not reentrant.
pub struct Engine {
    options: EngineOptions,
    tt: TranspositionTable,
    killers: KillerTable,
    history: HistoryTable,
    evaluator: Evaluator,
    n_nodes: u64,
}

impl Engine {
    /// Creates an engine with default options.
    pub fn new() -> Engine {
        Engine::with_options(EngineOptions::default())
    }

    /// Creates an engine with the given options.
    pub fn with_options(options: EngineOptions) -> Engine {
        Engine {
            options,
            tt: TranspositionTable::new(options.tt_mb_size),
            killers: KillerTable::new(),
            history: HistoryTable::new(),
            evaluator: Evaluator::new(),
            n_nodes: 0,
        }
    }

    /// Finds the best move within a wall-clock budget.
    ///
    /// Searches at depth 1, 2, ... until the budget is exhausted or the
    /// depth cap is reached. Time is checked between iterations only, so the
    /// final iteration may overrun the budget; its completed result is still
    /// used. From depth 3 each iteration opens with a window of
    /// `aspiration_window` around the previous score and re-searches once
    /// with the failed side of the window removed if the score lands
    /// outside.
    ///
    /// # Arguments
    ///
    /// * `board` - Position to move in; never mutated.
    /// * `time_limit_seconds` - Wall-clock budget. Zero (or negative) still
    ///   completes one depth-1 iteration.
    ///
    /// # Returns
    ///
    /// The best move with its score and the depth reached. With no legal
    /// move the result is `(None, 0.0, 0)`; with exactly one legal move it
    /// is returned immediately with score 0 and depth 0.
    pub fn best_move(&mut self, board: &Board, time_limit_seconds: f64) -> MoveResult {
        self.n_nodes = 0;

        let moves = board.legal_moves();
        if moves.is_empty() {
            return MoveResult {
                best_move: None,
                score: 0.0,
                depth: 0,
            };
        }

        let mut best_move = moves.iter().next().expect("moves is non-empty");
        if moves.count() == 1 {
            return MoveResult {
                best_move: Some(best_move),
                score: 0.0,
                depth: 0,
            };
        }

        // Fresh tables for this move; history carries over.
        self.tt.clear();
        self.killers.clear();

        let start = Instant::now();
        let budget =
            Duration::try_from_secs_f64(time_limit_seconds.max(0.0)).unwrap_or(Duration::MAX);

        let mut best_score: Score = 0.0;
        let mut depth_reached: Depth = 0;
        let mut depth: Depth = 1;
        let mut pv_hint: Option<Square> = None;

        loop {
            if start.elapsed() >= budget && depth > 1 {
                break;
            }

            let window = self.options.aspiration_window;
            let (alpha, beta) = if depth <= 2 {
                (Score::NEG_INFINITY, Score::INFINITY)
            } else {
                (best_score - window, best_score + window)
            };

            let (score, mv) = self.search_once(board, depth, alpha, beta, pv_hint);

            // Aspiration misses get one re-search with the failed bound
            // opened up.
            let (score, mv) = if score <= alpha {
                self.search_once(board, depth, Score::NEG_INFINITY, beta, pv_hint)
            } else if score >= beta {
                self.search_once(board, depth, alpha, Score::INFINITY, pv_hint)
            } else {
                (score, mv)
            };

            if let Some(mv) = mv {
                best_move = mv;
                best_score = score;
                pv_hint = Some(mv);
                depth_reached = depth;
            }

            if start.elapsed() >= budget {
                break;
            }

            depth += 1;
            if depth > self.options.max_depth {
                break;
            }
        }

        MoveResult {
            best_move: Some(best_move),
            score: best_score,
            depth: depth_reached,
        }
    }

    /// Runs a single fixed-depth search and folds its node count into the
    /// engine's counter.
    fn search_once(
        &mut self,
        board: &Board,
        depth: Depth,
        alpha: Score,
        beta: Score,
        pv_hint: Option<Square>,
    ) -> (Score, Option<Square>) {
        let mut ctx = SearchContext::new(
            &mut self.tt,
            &mut self.killers,
            &mut self.history,
            &self.evaluator,
            self.options.endgame_threshold,
        );
        let result = negamax(&mut ctx, board, depth, alpha, beta, pv_hint, 0);
        let nodes = ctx.n_nodes;
        self.n_nodes += nodes;
        result
    }

    /// Nodes visited by the most recent [`best_move`](Self::best_move) call.
    pub fn nodes_searched(&self) -> u64 {
        self.n_nodes
    }

    /// Clears all engine state: transposition table, killers, history, and
    /// the node counter.
    pub fn reset(&mut self) {
        self.tt.clear();
        self.killers.clear();
        self.history.clear();
        self.n_nodes = 0;
    }
}

impl Default for Engine {
    fn default() -> Self {
        Engine::new()
    }
}

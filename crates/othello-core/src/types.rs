//! Common type aliases used throughout the engine.

/// Search depth in plies.
pub type Depth = u32;

/// Heuristic score. Positive values favor the evaluated player.
pub type Score = f64;

/// Maximum ply the searcher can reach; sizes the killer table.
///
/// The iterative-deepening driver caps depth at 50 and the endgame solver
/// does not consult per-ply state, so 64 leaves headroom for pass plies.
pub const MAX_PLY: usize = 64;

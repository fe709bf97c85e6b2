//! Move-path enumeration for validating the move generator.

use crate::board::Board;

/// Executes a perft run from the standard initial position.
///
/// # Arguments
///
/// * `depth` - Number of plies to expand; `1` counts the immediate legal
///   moves.
///
/// # Returns
///
/// The number of move paths of the given length.
pub fn perft_root(depth: u32) -> u64 {
    perft(&Board::initial(), depth)
}

/// Counts move paths of length `depth` from `board`.
///
/// A forced pass does not consume depth, and a finished game counts as a
/// single path regardless of remaining depth.
pub fn perft(board: &Board, depth: u32) -> u64 {
    let moves = board.legal_moves();

    if moves.is_empty() {
        let passed = board.pass_turn();
        if passed.has_legal_moves() {
            return perft(&passed, depth);
        }
        return 1;
    }

    if depth <= 1 {
        return moves.count() as u64;
    }

    moves
        .iter()
        .map(|sq| perft(&board.make_move(sq), depth - 1))
        .sum()
}

//! Approximate stable-disc detection.
//!
//! A disc is stable when no sequence of moves can flip it. Full stability
//! analysis needs all four lines through every disc; this module uses the
//! cheaper corner-anchored approximation: corners are stable by definition,
//! and a disc backed by a stable neighbor along a ray is treated as stable
//! too. The result under-approximates true stability (discs held only by
//! filled edges or lines are missed) but is monotonic and fast enough for
//! the evaluator's inner loop.

use crate::bitboard::{Bitboard, Direction};
use crate::constants::CORNERS;

/// Growth passes before the set is declared converged.
const MAX_PASSES: u32 = 10;

/// Estimates the stable discs among `own`.
///
/// Seeds the set with `own`'s corner discs and repeatedly extends it to own
/// discs adjacent to an already-stable disc along any of the eight
/// directions, stopping when the set no longer grows or after
/// [`MAX_PASSES`] passes.
///
/// # Arguments
///
/// * `own` - Bitboard of the discs to analyze.
///
/// # Returns
///
/// Bitboard of the discs considered stable.
pub fn stable_discs(own: Bitboard) -> Bitboard {
    let mut stable = own & CORNERS;
    if stable.is_empty() {
        return stable;
    }

    for _ in 0..MAX_PASSES {
        let mut grown = stable;
        for dir in Direction::ALL {
            grown |= stable.shift(dir) & own;
        }
        if grown == stable {
            break;
        }
        stable = grown;
    }

    stable
}

// Opponent targeting: uniform choice over every cell not yet fired upon.
// The policy is memoryless and never looks at ship occupancy.

use crate::{board::Board, common::Cell};
use rand::Rng;

/// Cells the opponent may still fire at on `board`.
pub fn candidate_cells(board: &Board) -> alloc::vec::Vec<Cell> {
    board.unresolved_cells()
}

/// Pick a target uniformly at random among unresolved cells.
///
/// Returns `None` when every cell is resolved; callers treat that as "no move".
pub fn pick_target<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Option<Cell> {
    let candidates = candidate_cells(board);
    if candidates.is_empty() {
        return None;
    }
    let idx = rng.random_range(0..candidates.len());
    Some(candidates[idx])
}

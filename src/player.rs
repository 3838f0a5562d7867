use crate::{ai, board::Board, common::Cell, common::ShotOutcome};
use rand::rngs::SmallRng;

/// Policy that drives the scripted side of a match.
pub trait Opponent: Send {
    /// Choose the next cell to fire at on the human player's board.
    ///
    /// `None` means there is nothing left to fire at.
    fn select_target(&mut self, rng: &mut SmallRng, board: &Board) -> Option<Cell>;

    /// Inform the opponent of the result of its last shot.
    fn handle_shot_result(&mut self, _cell: Cell, _outcome: ShotOutcome) {}
}

/// Opponent firing uniformly at random over unresolved cells.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomOpponent;

impl RandomOpponent {
    pub fn new() -> Self {
        Self
    }
}

impl Opponent for RandomOpponent {
    fn select_target(&mut self, rng: &mut SmallRng, board: &Board) -> Option<Cell> {
        ai::pick_target(board, rng)
    }
}

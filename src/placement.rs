//! Random fleet placement.
//!
//! Each ship gets a bounded number of trials: pick an orientation and an origin
//! anywhere on the grid, keep the first run of cells that is fully on the board
//! and unoccupied. Randomness is always injected so seeded runs reproduce.

use rand::Rng;

use crate::board::{within_bounds, Board};
use crate::common::{BoardError, Cell};
use crate::ship::Orientation;

/// Find a free spot for a ship of `size` on `board`.
///
/// Returns the origin and orientation, or [`BoardError::PlacementExhausted`]
/// after `attempts` failed trials. The board is not modified.
pub fn random_placement<R: Rng + ?Sized>(
    board: &Board,
    size: usize,
    rng: &mut R,
    attempts: usize,
) -> Result<(Cell, Orientation), BoardError> {
    let n = board.size();
    for _ in 0..attempts {
        let orientation = if rng.random() {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        };
        let origin = Cell::new(rng.random_range(0..n), rng.random_range(0..n));
        let fits = (0..size).all(|k| match orientation.step(origin, k) {
            Some(c) => within_bounds(c.x, c.y, n) && !board.is_occupied(c.x, c.y),
            None => false,
        });
        if fits {
            return Ok((origin, orientation));
        }
    }
    let ship_id = u8::try_from(board.fleet().len() + 1).unwrap_or(u8::MAX);
    log::warn!(
        "no room for ship {} (size {}) after {} attempts",
        ship_id,
        size,
        attempts
    );
    Err(BoardError::PlacementExhausted {
        ship_id,
        size,
        attempts,
    })
}

/// Place every ship of `sizes`, in order, onto `board`.
///
/// On error the board may hold the ships placed so far; callers that need
/// all-or-nothing should use [`random_board`].
pub fn place_fleet<R: Rng + ?Sized>(
    board: &mut Board,
    sizes: &[usize],
    rng: &mut R,
    attempts: usize,
) -> Result<(), BoardError> {
    for &size in sizes {
        let (origin, orientation) = random_placement(board, size, rng, attempts)?;
        board.place_ship(size, origin, orientation)?;
    }
    Ok(())
}

/// Build a fully populated board, or fail without exposing a partial one.
pub fn random_board<R: Rng + ?Sized>(
    sizes: &[usize],
    rng: &mut R,
    attempts: usize,
) -> Result<Board, BoardError> {
    let mut board = Board::new();
    place_fleet(&mut board, sizes, rng, attempts)?;
    Ok(board)
}

//! Common types: cells, shot outcomes and the error enums shared by the engine.

use core::fmt;

use crate::bitboard::BitBoardError;

/// A board coordinate. Origin top-left, `x` grows rightward, `y` downward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub x: usize,
    pub y: usize,
}

impl Cell {
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

impl From<(usize, usize)> for Cell {
    fn from((x, y): (usize, usize)) -> Self {
        Cell { x, y }
    }
}

/// Result of resolving one shot against a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ShotOutcome {
    /// The cell was already resolved; nothing changed.
    pub duplicate: bool,
    pub hit: bool,
    /// This shot sank the ship it hit.
    pub sunk: bool,
    /// Id of the ship that was hit.
    pub ship_id: Option<u8>,
}

impl ShotOutcome {
    pub(crate) const DUPLICATE: ShotOutcome = ShotOutcome {
        duplicate: true,
        hit: false,
        sunk: false,
        ship_id: None,
    };

    pub(crate) const MISS: ShotOutcome = ShotOutcome {
        duplicate: false,
        hit: false,
        sunk: false,
        ship_id: None,
    };
}

/// Errors returned by board and placement operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Underlying bitboard error.
    BitBoardError(BitBoardError),
    /// Coordinates lie outside the board.
    OutOfBounds { x: usize, y: usize },
    /// Ship placement overlaps another ship.
    ShipOverlaps,
    /// Ship size is zero, larger than the board, or the fleet is full.
    InvalidShip,
    /// No free spot was found for a ship within the trial budget.
    PlacementExhausted {
        ship_id: u8,
        size: usize,
        attempts: usize,
    },
}

impl From<BitBoardError> for BoardError {
    fn from(err: BitBoardError) -> Self {
        BoardError::BitBoardError(err)
    }
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::BitBoardError(e) => write!(f, "BitBoard error: {}", e),
            BoardError::OutOfBounds { x, y } => write!(f, "Cell ({}, {}) is off the board", x, y),
            BoardError::ShipOverlaps => write!(f, "Ship placement overlaps with another ship"),
            BoardError::InvalidShip => write!(f, "Ship does not fit this board"),
            BoardError::PlacementExhausted {
                ship_id,
                size,
                attempts,
            } => write!(
                f,
                "Unable to place ship {} (size {}) after {} attempts",
                ship_id, size, attempts
            ),
        }
    }
}

/// Errors surfaced by [`GameEngine`](crate::GameEngine) commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// Shot coordinates outside the enemy board. Nothing was mutated.
    InvalidShotTarget { x: usize, y: usize },
    Board(BoardError),
}

impl From<BoardError> for GameError {
    fn from(err: BoardError) -> Self {
        GameError::Board(err)
    }
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::InvalidShotTarget { x, y } => {
                write!(f, "Invalid shot target ({}, {})", x, y)
            }
            GameError::Board(e) => write!(f, "{}", e),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BitBoardError {}
#[cfg(feature = "std")]
impl std::error::Error for BoardError {}
#[cfg(feature = "std")]
impl std::error::Error for GameError {}

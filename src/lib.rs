#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod ai;
mod bitboard;
mod board;
#[cfg(feature = "std")]
pub mod cli;
mod common;
mod config;
mod game;
#[cfg(feature = "std")]
mod logging;
pub mod placement;
mod player;
pub mod scheduler;
mod ship;
pub mod snapshot;

pub use ai::{candidate_cells, pick_target};
pub use bitboard::{BitBoard, BitBoardError, Cells};
pub use board::{within_bounds, Board, BB};
pub use common::{BoardError, Cell, GameError, ShotOutcome};
pub use config::*;
pub use game::{Command, Event, GameEngine, Mode, Session, Turn, Winner};
#[cfg(feature = "std")]
pub use logging::{init_logging, level_from_env};
pub use placement::{place_fleet, random_board, random_placement};
pub use player::{Opponent, RandomOpponent};
pub use ship::{Orientation, Ship, ShipDef};
pub use snapshot::Snapshot;

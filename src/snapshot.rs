//! Serializable read-out of the engine state for observers and tests.
//!
//! Only shot outcomes are exposed: enemy ship positions never leave the
//! engine through this view.

use alloc::string::String;
use alloc::vec::Vec;

use crate::{
    board::Board,
    common::Cell,
    config::BOARD_SIZE,
    game::{Mode, Session, Turn, Winner},
};

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
#[cfg_attr(feature = "std", serde(rename_all = "camelCase"))]
pub struct Snapshot {
    pub mode: Mode,
    pub turn: Turn,
    pub message: String,
    pub board: BoardFrame,
    pub fleets: FleetCounts,
    pub shots: ShotMap,
    pub history: ShotHistory,
    pub hover_cell: Option<Cell>,
    pub winner: Winner,
}

/// Board size and coordinate convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
#[cfg_attr(feature = "std", serde(rename_all = "camelCase"))]
pub struct BoardFrame {
    pub size: usize,
    pub origin: &'static str,
    pub x_direction: &'static str,
    pub y_direction: &'static str,
}

impl Default for BoardFrame {
    fn default() -> Self {
        Self {
            size: BOARD_SIZE,
            origin: "top-left",
            x_direction: "right",
            y_direction: "down",
        }
    }
}

/// Ships still afloat per side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
#[cfg_attr(feature = "std", serde(rename_all = "camelCase"))]
pub struct FleetCounts {
    pub player_ships_afloat: usize,
    pub enemy_ships_afloat: usize,
}

/// Resolved cells per board, row-major.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
#[cfg_attr(feature = "std", serde(rename_all = "camelCase"))]
pub struct ShotMap {
    pub enemy_board_hits: Vec<Cell>,
    pub enemy_board_misses: Vec<Cell>,
    pub player_board_hits: Vec<Cell>,
    pub player_board_misses: Vec<Cell>,
}

/// Shots per side in the order they were fired.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct ShotHistory {
    pub player: Vec<Cell>,
    pub enemy: Vec<Cell>,
}

impl Snapshot {
    pub(crate) fn capture(mode: Mode, message: &str, session: Option<&Session>) -> Self {
        let Some(session) = session else {
            return Snapshot {
                mode,
                turn: Turn::Player,
                message: String::from(message),
                board: BoardFrame::default(),
                fleets: FleetCounts::default(),
                shots: ShotMap::default(),
                history: ShotHistory::default(),
                hover_cell: None,
                winner: Winner::None,
            };
        };
        let (player, enemy) = (session.player_board(), session.enemy_board());
        Snapshot {
            mode,
            turn: session.turn(),
            message: String::from(message),
            board: BoardFrame::default(),
            fleets: FleetCounts {
                player_ships_afloat: player.alive_count(),
                enemy_ships_afloat: enemy.alive_count(),
            },
            shots: shot_map(player, enemy),
            history: ShotHistory {
                player: session.player_shots().to_vec(),
                enemy: session.enemy_shots().to_vec(),
            },
            hover_cell: session.hover(),
            winner: session.winner(),
        }
    }
}

fn shot_map(player: &Board, enemy: &Board) -> ShotMap {
    ShotMap {
        enemy_board_hits: enemy.hit_cells(),
        enemy_board_misses: enemy.miss_cells(),
        player_board_hits: player.hit_cells(),
        player_board_misses: player.miss_cells(),
    }
}

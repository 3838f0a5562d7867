//! Board state: ship occupancy, fleet records and shot outcomes.

use alloc::vec::Vec;
use core::fmt;

use crate::bitboard::BitBoard;
use crate::common::{BoardError, Cell, ShotOutcome};
use crate::config::BOARD_SIZE;
use crate::ship::{Orientation, Ship};

pub type BB = BitBoard<u64, BOARD_SIZE>;

/// `true` iff `0 <= x, y < size`.
pub fn within_bounds(x: usize, y: usize, size: usize) -> bool {
    x < size && y < size
}

/// One side's grid: which ship sits where, and every shot resolved against it.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    ships: [[u8; BOARD_SIZE]; BOARD_SIZE],
    hits: BB,
    misses: BB,
    fleet: Vec<Ship>,
    alive: usize,
}

impl Board {
    /// Empty board: no ships, no shots, nothing afloat.
    pub fn new() -> Self {
        Board {
            ships: [[0; BOARD_SIZE]; BOARD_SIZE],
            hits: BB::new(),
            misses: BB::new(),
            fleet: Vec::new(),
            alive: 0,
        }
    }

    pub fn size(&self) -> usize {
        BOARD_SIZE
    }

    /// Id of the ship covering (x, y), `0` for open water or off-board cells.
    pub fn ship_at(&self, x: usize, y: usize) -> u8 {
        if within_bounds(x, y, BOARD_SIZE) {
            self.ships[y][x]
        } else {
            0
        }
    }

    pub fn is_occupied(&self, x: usize, y: usize) -> bool {
        self.ship_at(x, y) != 0
    }

    /// Place the next ship of the fleet. Its id is its 1-based placement index.
    ///
    /// The board is left untouched on error.
    pub fn place_ship(
        &mut self,
        size: usize,
        origin: Cell,
        orientation: Orientation,
    ) -> Result<u8, BoardError> {
        let id = u8::try_from(self.fleet.len() + 1).map_err(|_| BoardError::InvalidShip)?;
        let ship = Ship::new(id, size, origin, orientation, BOARD_SIZE)?;
        if ship.cells().iter().any(|c| self.is_occupied(c.x, c.y)) {
            return Err(BoardError::ShipOverlaps);
        }
        for c in ship.cells() {
            self.ships[c.y][c.x] = id;
        }
        self.fleet.push(ship);
        self.alive += 1;
        Ok(id)
    }

    /// Fire at (x, y).
    ///
    /// A cell is resolved at most once: repeat shots report `duplicate` and
    /// change nothing. Sinking a ship decrements the afloat count exactly once.
    pub fn resolve_shot(&mut self, x: usize, y: usize) -> Result<ShotOutcome, BoardError> {
        if !within_bounds(x, y, BOARD_SIZE) {
            return Err(BoardError::OutOfBounds { x, y });
        }
        if self.is_resolved(x, y) {
            return Ok(ShotOutcome::DUPLICATE);
        }
        let id = self.ships[y][x];
        if id == 0 {
            self.misses.set(x, y)?;
            return Ok(ShotOutcome::MISS);
        }
        let ship = self
            .fleet
            .iter_mut()
            .find(|s| s.id() == id)
            .ok_or(BoardError::InvalidShip)?;
        self.hits.set(x, y)?;
        let sunk = ship.register_hit();
        if sunk {
            self.alive -= 1;
        }
        Ok(ShotOutcome {
            duplicate: false,
            hit: true,
            sunk,
            ship_id: Some(id),
        })
    }

    /// Whether a shot already landed on (x, y). Off-board cells are never resolved.
    pub fn is_resolved(&self, x: usize, y: usize) -> bool {
        self.hits.get(x, y).unwrap_or(false) || self.misses.get(x, y).unwrap_or(false)
    }

    pub fn hits(&self) -> BB {
        self.hits
    }

    pub fn misses(&self) -> BB {
        self.misses
    }

    /// Every cell no shot has touched yet, in row-major order.
    pub fn unresolved_cells(&self) -> Vec<Cell> {
        (!(self.hits | self.misses)).cells().map(Cell::from).collect()
    }

    pub fn hit_cells(&self) -> Vec<Cell> {
        self.hits.cells().map(Cell::from).collect()
    }

    pub fn miss_cells(&self) -> Vec<Cell> {
        self.misses.cells().map(Cell::from).collect()
    }

    pub fn fleet(&self) -> &[Ship] {
        &self.fleet
    }

    pub fn ship(&self, id: u8) -> Option<&Ship> {
        self.fleet.iter().find(|s| s.id() == id)
    }

    /// Ships not yet sunk.
    pub fn alive_count(&self) -> usize {
        self.alive
    }

    pub fn all_sunk(&self) -> bool {
        self.alive == 0
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Board {{\n  hits: {:?},\n  misses: {:?},\n  alive: {},\n  fleet: {:?}\n}}",
            self.hits, self.misses, self.alive, self.fleet
        )
    }
}

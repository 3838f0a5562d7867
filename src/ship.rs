//! Ship definitions and the per-ship damage record.

use alloc::vec::Vec;
use core::fmt;

use crate::common::{BoardError, Cell};

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Cells run rightward from the origin (same `y`).
    Horizontal,
    /// Cells run downward from the origin (same `x`).
    Vertical,
}

impl Orientation {
    /// The `k`-th cell of a run starting at `origin`, or `None` on overflow.
    pub(crate) fn step(self, origin: Cell, k: usize) -> Option<Cell> {
        match self {
            Orientation::Horizontal => origin.x.checked_add(k).map(|x| Cell::new(x, origin.y)),
            Orientation::Vertical => origin.y.checked_add(k).map(|y| Cell::new(origin.x, y)),
        }
    }
}

/// Type of ship: name and length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShipDef {
    name: &'static str,
    length: usize,
}

impl ShipDef {
    pub const fn new(name: &'static str, length: usize) -> Self {
        Self { name, length }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn length(&self) -> usize {
        self.length
    }
}

/// A ship placed on a board.
#[derive(Clone, PartialEq, Eq)]
pub struct Ship {
    id: u8,
    size: usize,
    orientation: Orientation,
    cells: Vec<Cell>,
    hit_count: usize,
    sunk: bool,
}

impl Ship {
    /// Lay out a ship of `size` cells from `origin` on a `board_size` grid.
    ///
    /// Fails with [`BoardError::OutOfBounds`] if any cell falls off the grid.
    pub fn new(
        id: u8,
        size: usize,
        origin: Cell,
        orientation: Orientation,
        board_size: usize,
    ) -> Result<Self, BoardError> {
        if size == 0 || size > board_size {
            return Err(BoardError::InvalidShip);
        }
        let mut cells = Vec::with_capacity(size);
        for k in 0..size {
            let cell = orientation
                .step(origin, k)
                .filter(|c| crate::board::within_bounds(c.x, c.y, board_size))
                .ok_or(BoardError::OutOfBounds {
                    x: origin.x,
                    y: origin.y,
                })?;
            cells.push(cell);
        }
        Ok(Ship {
            id,
            size,
            orientation,
            cells,
            hit_count: 0,
            sunk: false,
        })
    }

    pub fn id(&self) -> u8 {
        self.id
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Occupied cells, ordered from the origin.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn origin(&self) -> Cell {
        self.cells[0]
    }

    pub fn contains(&self, cell: Cell) -> bool {
        self.cells.contains(&cell)
    }

    pub fn hit_count(&self) -> usize {
        self.hit_count
    }

    pub fn is_sunk(&self) -> bool {
        self.sunk
    }

    /// Count one hit. Returns `true` only on the hit that sinks the ship.
    pub(crate) fn register_hit(&mut self) -> bool {
        self.hit_count += 1;
        if self.hit_count >= self.size && !self.sunk {
            self.sunk = true;
            return true;
        }
        false
    }
}

impl fmt::Debug for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ship {{ id: {}, size: {}, origin: ({}, {}), orientation: {:?}, hits: {}, sunk: {} }}",
            self.id,
            self.size,
            self.cells[0].x,
            self.cells[0].y,
            self.orientation,
            self.hit_count,
            self.sunk,
        )
    }
}

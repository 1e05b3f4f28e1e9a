//! Cell simulation
//!
//! The viewport consumes the simulation only through [`CellEngine`]:
//! - Step one generation
//! - Read a cell by linear index
//! - Map (col, row) to a linear index
//! - Toggle a cell by linear index

pub mod board;

pub use board::{Board, GridPos};

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// State of a single cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Dead,
    Alive,
}

impl Cell {
    #[inline]
    pub fn is_alive(self) -> bool {
        self == Cell::Alive
    }

    #[inline]
    pub fn toggled(self) -> Self {
        match self {
            Cell::Dead => Cell::Alive,
            Cell::Alive => Cell::Dead,
        }
    }
}

/// Contract between the viewport and a square-grid cell simulation
pub trait CellEngine {
    /// Side length of the (square) grid, in cells
    fn size(&self) -> usize;

    /// Advance one generation
    fn tick(&mut self);

    /// State of the cell at a linear (row-major) index
    fn cell_state(&self, index: usize) -> Option<Cell>;

    /// Row-major linear index of `(col, row)`; callers pass on-grid coordinates
    fn index_from_coords(&self, col: usize, row: usize) -> usize;

    /// Toggle the cell at `index`, returning its new state
    fn set_cell(&mut self, index: usize) -> Result<Cell>;
}

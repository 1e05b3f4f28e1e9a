//! Bounded Game of Life board
//!
//! Square grid, row-major storage, no wraparound at the edges. Neighbours
//! past the border simply do not exist.

use std::fmt;

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::{Cell, CellEngine};
use crate::error::{Error, Result};

/// Row/column position on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridPos {
    pub row: usize,
    pub col: usize,
}

impl GridPos {
    pub fn new(col: usize, row: usize) -> Self {
        Self { row, col }
    }

    /// Step by a signed offset; `None` if it would go below zero
    pub fn offset(&self, d_row: isize, d_col: isize) -> Option<GridPos> {
        let row = self.row.checked_add_signed(d_row)?;
        let col = self.col.checked_add_signed(d_col)?;
        Some(Self { row, col })
    }
}

/// Moore neighbourhood as (row, col) offsets
const NEIGHBOURS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    size: usize,
    cells: Vec<Cell>,
    /// Generations stepped since creation
    generation: u64,
}

impl Board {
    /// Create an all-dead board of `size` x `size` cells
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![Cell::Dead; size * size],
            generation: 0,
        }
    }

    /// Create a board with the given indices alive; out-of-range indices are skipped
    pub fn from_alive(size: usize, alive: impl IntoIterator<Item = usize>) -> Self {
        let mut board = Self::new(size);
        for idx in alive {
            match board.cells.get_mut(idx) {
                Some(cell) => *cell = Cell::Alive,
                None => log::debug!("Ignoring seed cell {} outside {}x{} board", idx, size, size),
            }
        }
        board
    }

    /// Randomly populate a board. Same seed, same board.
    pub fn seeded(size: usize, seed: u64, density: f64) -> Self {
        let density = if density.is_finite() {
            density.clamp(0.0, 1.0)
        } else {
            0.0
        };
        let mut rng = Pcg32::seed_from_u64(seed);
        let cells = (0..size * size)
            .map(|_| {
                if rng.random_bool(density) {
                    Cell::Alive
                } else {
                    Cell::Dead
                }
            })
            .collect();

        Self {
            size,
            cells,
            generation: 0,
        }
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Number of live cells
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|c| c.is_alive()).count()
    }

    /// Kill every cell
    pub fn clear(&mut self) {
        self.cells.fill(Cell::Dead);
    }

    pub fn row_col(&self, idx: usize) -> GridPos {
        GridPos {
            row: idx.checked_div(self.size).unwrap_or(0),
            col: idx.checked_rem(self.size).unwrap_or(0),
        }
    }

    /// Linear index of an on-board position
    pub fn index_of(&self, pos: GridPos) -> Option<usize> {
        (pos.row < self.size && pos.col < self.size).then(|| pos.row * self.size + pos.col)
    }

    pub fn query(&self, pos: Option<GridPos>) -> Option<Cell> {
        let idx = self.index_of(pos?)?;
        self.cells.get(idx).copied()
    }

    fn live_neighbours(&self, idx: usize) -> usize {
        let pos = self.row_col(idx);
        NEIGHBOURS
            .iter()
            .filter_map(|&(d_row, d_col)| self.query(pos.offset(d_row, d_col)))
            .filter(|c| c.is_alive())
            .count()
    }
}

impl CellEngine for Board {
    fn size(&self) -> usize {
        self.size
    }

    fn tick(&mut self) {
        let next: Vec<Cell> = self
            .cells
            .iter()
            .enumerate()
            .map(|(idx, &cell)| match (cell, self.live_neighbours(idx)) {
                (Cell::Alive, 2 | 3) => Cell::Alive,
                (Cell::Dead, 3) => Cell::Alive,
                _ => Cell::Dead,
            })
            .collect();

        self.cells = next;
        self.generation += 1;
    }

    fn cell_state(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    fn index_from_coords(&self, col: usize, row: usize) -> usize {
        row * self.size + col
    }

    fn set_cell(&mut self, index: usize) -> Result<Cell> {
        let len = self.cells.len();
        let cell = self
            .cells
            .get_mut(index)
            .ok_or(Error::IndexOutOfRange { index, len })?;

        *cell = cell.toggled();
        Ok(*cell)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.size == 0 {
            return Ok(());
        }
        for row in self.cells.chunks(self.size) {
            for cell in row {
                match cell {
                    Cell::Dead => write!(f, "◻")?,
                    Cell::Alive => write!(f, "◼")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset() {
        let pos = GridPos { row: 1, col: 1 };
        assert_eq!(pos.offset(-1, 0), Some(GridPos { row: 0, col: 1 }));
        assert_eq!(pos.offset(1, 0), Some(GridPos { row: 2, col: 1 }));
        assert_eq!(pos.offset(0, 1), Some(GridPos { row: 1, col: 2 }));
        assert_eq!(pos.offset(0, -1), Some(GridPos { row: 1, col: 0 }));

        let corner = GridPos { row: 0, col: 0 };
        assert_eq!(corner.offset(-1, 0), None);
        assert_eq!(corner.offset(0, -1), None);
    }

    #[test]
    fn test_index_mapping() {
        let board = Board::new(64);
        assert_eq!(board.index_from_coords(0, 0), 0);
        assert_eq!(board.index_from_coords(2, 0), 2);
        assert_eq!(board.index_from_coords(0, 1), 64);
        assert_eq!(board.index_from_coords(2, 1), 66);

        assert_eq!(board.row_col(0), GridPos { row: 0, col: 0 });
        assert_eq!(board.row_col(63), GridPos { row: 0, col: 63 });
        assert_eq!(board.row_col(129), GridPos { row: 2, col: 1 });

        assert_eq!(board.index_of(GridPos { row: 0, col: 64 }), None);
    }

    #[test]
    fn test_query_past_edge() {
        let board = Board::new(4);
        assert_eq!(board.query(GridPos::new(3, 3).offset(0, 1)), None);
        assert_eq!(board.query(GridPos::new(3, 3).offset(0, -1)), Some(Cell::Dead));
    }

    #[test]
    fn test_blinker_oscillates() {
        // Horizontal blinker centred on (2, 2) of a 5x5 board
        let mut board = Board::from_alive(5, [11, 12, 13]);
        board.tick();

        let vertical = [7, 12, 17];
        for idx in 0..25 {
            let expected = if vertical.contains(&idx) { Cell::Alive } else { Cell::Dead };
            assert_eq!(board.cell_state(idx), Some(expected), "cell {idx}");
        }

        board.tick();
        assert_eq!(board, {
            let mut b = Board::from_alive(5, [11, 12, 13]);
            b.generation = 2;
            b
        });
    }

    #[test]
    fn test_block_in_corner_is_stable() {
        // 2x2 still life touching the top-left edge
        let mut board = Board::from_alive(4, [0, 1, 4, 5]);
        board.tick();
        assert_eq!(board.population(), 4);
        assert_eq!(board.generation(), 1);
    }

    #[test]
    fn test_set_cell_toggles() {
        let mut board = Board::new(3);
        assert_eq!(board.set_cell(4), Ok(Cell::Alive));
        assert_eq!(board.cell_state(4), Some(Cell::Alive));
        assert_eq!(board.set_cell(4), Ok(Cell::Dead));

        assert_eq!(
            board.set_cell(9),
            Err(Error::IndexOutOfRange { index: 9, len: 9 })
        );
    }

    #[test]
    fn test_clear_kills_everything() {
        let mut board = Board::seeded(8, 7, 1.0);
        board.tick();
        let generation = board.generation();

        board.clear();
        assert_eq!(board.population(), 0);
        assert_eq!(board.generation(), generation);
        board.tick();
        assert_eq!(board.population(), 0);
    }

    #[test]
    fn test_seeded_is_deterministic() {
        let a = Board::seeded(16, 42, 0.3);
        let b = Board::seeded(16, 42, 0.3);
        assert_eq!(a, b);

        assert_eq!(Board::seeded(8, 1, 0.0).population(), 0);
        assert_eq!(Board::seeded(8, 1, 1.0).population(), 64);
        assert_eq!(Board::seeded(8, 1, f64::NAN).population(), 0);
    }

    #[test]
    fn test_display() {
        let board = Board::from_alive(2, [1, 2]);
        assert_eq!(board.to_string(), "◻◼\n◼◻\n");
        assert_eq!(Board::new(0).to_string(), "");
    }
}

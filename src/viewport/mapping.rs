//! Screen-to-grid mapping
//!
//! Stateless: recomputed on every pointer event from the pointer position,
//! the current pan offset and the grid layout.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::geom::Vector2d;
use crate::sim::CellEngine;

/// Cell geometry in world (unscaled) pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridLayout {
    cell_size: f64,
    cell_margin: f64,
    /// Side length of the grid, in cells
    extent: usize,
}

impl GridLayout {
    pub fn new(cell_size: f64, cell_margin: f64, extent: usize) -> Result<Self> {
        let pitch = cell_size + cell_margin;
        let valid = cell_size.is_finite()
            && cell_size > 0.0
            && cell_margin.is_finite()
            && cell_margin >= 0.0;
        if !valid {
            return Err(Error::InvalidLayout { pitch });
        }

        Ok(Self {
            cell_size,
            cell_margin,
            extent,
        })
    }

    /// Same geometry for a grid of a different side length
    pub fn with_extent(self, extent: usize) -> Self {
        Self { extent, ..self }
    }

    #[inline]
    pub fn cell_size(&self) -> f64 {
        self.cell_size
    }

    #[inline]
    pub fn cell_margin(&self) -> f64 {
        self.cell_margin
    }

    #[inline]
    pub fn extent(&self) -> usize {
        self.extent
    }

    /// Distance between adjacent cell origins
    #[inline]
    pub fn pitch(&self) -> f64 {
        self.cell_size + self.cell_margin
    }

    /// World-space top-left corner of a cell
    pub fn cell_origin(&self, col: usize, row: usize) -> Vector2d {
        Vector2d::new(col as f64, row as f64) * self.pitch()
    }
}

/// Result of mapping a pointer onto the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GridHit {
    Cell {
        col: usize,
        row: usize,
        index: usize,
    },
    /// Pointer is off the grid. Distinct from index 0.
    #[default]
    OutOfBounds,
}

impl GridHit {
    #[inline]
    pub fn index(&self) -> Option<usize> {
        match *self {
            GridHit::Cell { index, .. } => Some(index),
            GridHit::OutOfBounds => None,
        }
    }

    #[inline]
    pub fn is_in_bounds(&self) -> bool {
        matches!(self, GridHit::Cell { .. })
    }
}

/// Floor a pointer position into `(col, row)`, or `None` off the grid.
///
/// `scale` is the render scale (zoom, when zoom is applied; otherwise 1).
pub fn grid_coords(
    pointer: Vector2d,
    pan_offset: Vector2d,
    scale: f64,
    layout: &GridLayout,
) -> Option<(usize, usize)> {
    if !scale.is_finite() || scale <= 0.0 {
        return None;
    }

    let client = (pointer - pan_offset) / scale;
    let cell = (client / layout.pitch()).floor();
    if !cell.is_finite() {
        return None;
    }

    let extent = layout.extent() as f64;
    let on_grid = |v: f64| v >= 0.0 && v < extent;
    if !on_grid(cell.x) || !on_grid(cell.y) {
        return None;
    }

    Some((cell.x as usize, cell.y as usize))
}

/// Map a pointer to a grid hit, delegating index computation to the engine
pub fn locate<E: CellEngine + ?Sized>(
    pointer: Vector2d,
    pan_offset: Vector2d,
    scale: f64,
    layout: &GridLayout,
    engine: &E,
) -> GridHit {
    match grid_coords(pointer, pan_offset, scale, layout) {
        Some((col, row)) => GridHit::Cell {
            col,
            row,
            index: engine.index_from_coords(col, row),
        },
        None => GridHit::OutOfBounds,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::Board;

    fn layout() -> GridLayout {
        GridLayout::new(50.0, 1.0, 16).unwrap()
    }

    #[test]
    fn test_pointer_at_pan_offset_is_origin_cell() {
        let board = Board::new(16);
        let pan = Vector2d::new(120.0, -40.0);

        let hit = locate(pan, pan, 1.0, &layout(), &board);
        assert_eq!(hit, GridHit::Cell { col: 0, row: 0, index: 0 });
    }

    #[test]
    fn test_row_major_index() {
        let board = Board::new(16);
        // Column 3, row 2
        let pointer = Vector2d::new(3.0 * 51.0 + 10.0, 2.0 * 51.0 + 49.0);
        let hit = locate(pointer, Vector2d::ORIGIN, 1.0, &layout(), &board);
        assert_eq!(hit, GridHit::Cell { col: 3, row: 2, index: 35 });
    }

    #[test]
    fn test_margin_belongs_to_preceding_cell() {
        // x = 50.5 lies in the 1px margin after column 0
        assert_eq!(
            grid_coords(Vector2d::new(50.5, 0.0), Vector2d::ORIGIN, 1.0, &layout()),
            Some((0, 0))
        );
        assert_eq!(
            grid_coords(Vector2d::new(51.0, 0.0), Vector2d::ORIGIN, 1.0, &layout()),
            Some((1, 0))
        );
    }

    #[test]
    fn test_out_of_bounds() {
        let board = Board::new(16);
        let pan = Vector2d::new(100.0, 100.0);

        // Column -1
        let left = pan - Vector2d::new(1.0, 0.0);
        assert_eq!(locate(left, pan, 1.0, &layout(), &board), GridHit::OutOfBounds);

        // Column 17 and column 16 (one past the last)
        let far = pan + Vector2d::new(17.0 * 51.0, 0.0);
        assert_eq!(locate(far, pan, 1.0, &layout(), &board), GridHit::OutOfBounds);
        let edge = pan + Vector2d::new(16.0 * 51.0, 0.0);
        assert_eq!(locate(edge, pan, 1.0, &layout(), &board), GridHit::OutOfBounds);

        // Row -1
        let above = pan - Vector2d::new(0.0, 0.5);
        assert_eq!(locate(above, pan, 1.0, &layout(), &board), GridHit::OutOfBounds);

        assert_eq!(GridHit::OutOfBounds.index(), None);
    }

    #[test]
    fn test_mapping_is_idempotent() {
        let board = Board::new(16);
        let pan = Vector2d::new(-37.0, 12.5);
        let pointer = Vector2d::new(400.25, 333.0);

        let first = locate(pointer, pan, 1.0, &layout(), &board);
        let second = locate(pointer, pan, 1.0, &layout(), &board);
        assert_eq!(first, second);
        assert!(first.is_in_bounds());
    }

    #[test]
    fn test_scaled_mapping() {
        // At zoom 2 each cell covers 102 screen pixels
        let pointer = Vector2d::new(150.0, 50.0);
        assert_eq!(
            grid_coords(pointer, Vector2d::ORIGIN, 2.0, &layout()),
            Some((1, 0))
        );
        assert_eq!(
            grid_coords(pointer, Vector2d::ORIGIN, 1.0, &layout()),
            Some((2, 0))
        );
    }

    #[test]
    fn test_degenerate_inputs() {
        assert!(GridLayout::new(0.0, 0.0, 16).is_err());
        assert!(GridLayout::new(-5.0, 1.0, 16).is_err());
        assert!(GridLayout::new(50.0, -1.0, 16).is_err());
        assert!(GridLayout::new(f64::INFINITY, 1.0, 16).is_err());

        let nan = Vector2d::new(f64::NAN, 0.0);
        assert_eq!(grid_coords(nan, Vector2d::ORIGIN, 1.0, &layout()), None);
        assert_eq!(
            grid_coords(Vector2d::new(10.0, 10.0), Vector2d::ORIGIN, 0.0, &layout()),
            None
        );

        let empty = layout().with_extent(0);
        assert_eq!(grid_coords(Vector2d::ORIGIN, Vector2d::ORIGIN, 1.0, &empty), None);
    }
}

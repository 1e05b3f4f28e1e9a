//! Color schemes

use serde::{Deserialize, Serialize};

use crate::sim::Cell;
use crate::surface::Color;

/// Colors used by the render pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    pub background: Color,
    pub dead: Color,
    pub alive: Color,
    /// Drag guide marker and line
    pub guide: Color,
}

impl Theme {
    /// Catppuccin Frappé
    pub const FRAPPE: Theme = Theme {
        background: Color::rgb(0x23, 0x26, 0x34),
        dead: Color::rgb(0x30, 0x34, 0x46),
        alive: Color::rgb(0xef, 0x9f, 0x76),
        guide: Color::rgb(0x77, 0x77, 0x77),
    };

    #[inline]
    pub fn cell_color(&self, cell: Cell) -> Color {
        match cell {
            Cell::Alive => self.alive,
            Cell::Dead => self.dead,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::FRAPPE
    }
}

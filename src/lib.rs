//! Cellscope - a pannable Game of Life canvas
//!
//! Core modules:
//! - `geom`: 2D vector algebra and entity transforms
//! - `scene`: Drawable entities (blocks, drag guide)
//! - `surface`: Immediate-mode drawing surface abstraction
//! - `sim`: Cell simulation engine contract and the Life board
//! - `viewport`: Pan/zoom state machine, grid mapping and render pass
//! - `clock`: Timed tick scheduling for the simulation
//! - `settings`: Persisted user preferences

pub mod clock;
pub mod error;
pub mod geom;
pub mod scene;
pub mod settings;
pub mod sim;
pub mod surface;
pub mod theme;
pub mod viewport;

pub use error::{Error, Result};
pub use geom::{Transform, Vector2d};
pub use scene::{Block, Entity, Guide, Scene};
pub use settings::Settings;
pub use sim::{Board, Cell, CellEngine};
pub use surface::{Color, RecordingSurface, Surface};
pub use theme::Theme;
pub use viewport::{GridHit, GridLayout, ViewportController, ViewportState};

/// Viewport and grid configuration constants
pub mod consts {
    /// Side length of a rendered cell, in pixels
    pub const CELL_SIZE: f64 = 50.0;
    /// Gap between adjacent cells, in pixels
    pub const CELL_MARGIN: f64 = 1.0;
    /// Default board side length, in cells
    pub const GRID_SIZE: usize = 16;
    pub const MIN_GRID_SIZE: usize = 4;
    pub const MAX_GRID_SIZE: usize = 256;

    /// Pointer travel (pixels) below which a press/release counts as a click
    pub const CLICK_THRESHOLD: f64 = 4.0;

    /// Simulation speed, in ticks per second
    pub const DEFAULT_SPEED: u32 = 10;
    pub const MIN_SPEED: u32 = 1;
    pub const MAX_SPEED: u32 = 60;
    /// Maximum ticks run in a single frame to avoid a catch-up spiral
    pub const MAX_CATCHUP_TICKS: u32 = 4;

    /// Side length of the drag anchor marker
    pub const GUIDE_MARKER_SIZE: f64 = 10.0;
}

//! Viewport transform and grid-index mapping
//!
//! - `state`: pan offset, zoom and the Idle/Dragging machine
//! - `mapping`: pure pointer -> grid cell mapping
//! - `controller`: turns pointer/wheel events into state changes and cell commands
//! - `render`: paints the grid through a `Surface`

pub mod controller;
pub mod mapping;
pub mod render;
pub mod state;

pub use controller::{DebugReadout, ViewportController, ViewportOptions};
pub use mapping::{GridHit, GridLayout, grid_coords, locate};
pub use render::{build_scene, render_frame};
pub use state::{DragPhase, ViewportState};

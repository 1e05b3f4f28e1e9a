//! Pan/zoom/drag state
//!
//! One `ViewportState` per canvas session, mutated only from pointer and
//! wheel handlers.

use serde::{Deserialize, Serialize};

use crate::geom::Vector2d;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DragPhase {
    #[default]
    Idle,
    Dragging,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewportState {
    /// Zoom level, never below 1
    pub zoom: u32,
    /// Translation applied to the whole scene
    pub pan_offset: Vector2d,
    /// Pointer position at drag start, relative to `pan_offset`
    pub drag_start: Vector2d,
    pub phase: DragPhase,
}

impl Default for ViewportState {
    fn default() -> Self {
        Self {
            zoom: 1,
            pan_offset: Vector2d::ORIGIN,
            drag_start: Vector2d::ORIGIN,
            phase: DragPhase::Idle,
        }
    }
}

impl ViewportState {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.phase == DragPhase::Dragging
    }

    /// Idle -> Dragging. The anchor is stored in pan-relative space so later
    /// moves stay consistent with whatever pan has already accumulated.
    pub fn begin_drag(&mut self, pointer: Vector2d) {
        self.drag_start = pointer - self.pan_offset;
        self.phase = DragPhase::Dragging;
    }

    /// Apply one pointer move while dragging. Returns the pan delta applied.
    pub fn drag_to(&mut self, pointer: Vector2d) -> Option<Vector2d> {
        if !self.is_dragging() {
            return None;
        }
        let client = pointer - self.pan_offset;
        let offset = client - self.drag_start;
        self.pan_offset = self.pan_offset + offset;
        Some(offset)
    }

    /// Dragging -> Idle
    pub fn end_drag(&mut self) {
        self.drag_start = Vector2d::ORIGIN;
        self.phase = DragPhase::Idle;
    }

    /// Step zoom by one per wheel notch: negative delta zooms in, positive
    /// zooms out (floored at 1), zero is ignored.
    pub fn zoom_by_wheel(&mut self, delta_y: f64, max_zoom: Option<u32>) -> u32 {
        if delta_y < 0.0 {
            let ceiling = max_zoom.unwrap_or(u32::MAX).max(1);
            self.zoom = self.zoom.saturating_add(1).min(ceiling);
        } else if delta_y > 0.0 {
            self.zoom = self.zoom.saturating_sub(1).max(1);
        }
        self.zoom
    }

    /// Scale factor for rendering and mapping
    #[inline]
    pub fn scale(&self, apply_zoom: bool) -> f64 {
        if apply_zoom { self.zoom as f64 } else { 1.0 }
    }
}

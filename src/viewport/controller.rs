//! Pointer/wheel input -> viewport state, grid hits and cell commands

use serde::{Deserialize, Serialize};

use super::mapping::{GridHit, GridLayout, locate};
use super::state::ViewportState;
use crate::consts::CLICK_THRESHOLD;
use crate::geom::Vector2d;
use crate::scene::{Entity, Guide};
use crate::settings::Settings;
use crate::sim::CellEngine;
use crate::surface::Color;

/// Tunables for input handling
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewportOptions {
    /// Max pointer travel (pixels) for a press/release to count as a click
    pub click_threshold: f64,
    /// Scale rendering and mapping by the zoom level
    pub apply_zoom: bool,
    pub max_zoom: Option<u32>,
    pub guide_color: Color,
}

impl Default for ViewportOptions {
    fn default() -> Self {
        Self {
            click_threshold: CLICK_THRESHOLD,
            apply_zoom: false,
            max_zoom: None,
            guide_color: crate::theme::Theme::FRAPPE.guide,
        }
    }
}

impl From<&Settings> for ViewportOptions {
    fn from(settings: &Settings) -> Self {
        Self {
            click_threshold: settings.click_threshold,
            apply_zoom: settings.apply_zoom,
            max_zoom: settings.max_zoom,
            guide_color: settings.theme.guide,
        }
    }
}

/// Snapshot of controller state for the debug panel
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DebugReadout {
    pub pointer: Vector2d,
    /// Screen-space drag anchor while a gesture is active
    pub drag_start: Option<Vector2d>,
    /// Distance from the drag anchor to the pointer
    pub magnitude: Option<f64>,
    pub pan_offset: Vector2d,
    pub zoom: u32,
    pub hovered: GridHit,
}

impl DebugReadout {
    pub fn pointer_text(&self) -> String {
        format!("Client X: {} | Client Y: {}", self.pointer.x, self.pointer.y)
    }

    pub fn drag_start_text(&self) -> String {
        match self.drag_start {
            Some(p) => format!("X: {} | Y: {}", p.x, p.y),
            None => "NULL".to_string(),
        }
    }

    pub fn magnitude_text(&self) -> String {
        match self.magnitude {
            Some(m) => format!("{:.1}", m),
            None => "NULL".to_string(),
        }
    }

    pub fn hovered_text(&self) -> String {
        match self.hovered {
            GridHit::Cell { col, row, index } => format!("#{} ({}, {})", index, col, row),
            GridHit::OutOfBounds => "out of bounds".to_string(),
        }
    }
}

/// Owns the viewport state for one canvas session and interprets gestures.
///
/// A press always starts a pan gesture. On release the gesture is a click
/// if the pointer travelled no more than `click_threshold`; only clicks on
/// an in-bounds cell reach `CellEngine::set_cell`.
#[derive(Debug, Clone)]
pub struct ViewportController {
    state: ViewportState,
    layout: GridLayout,
    options: ViewportOptions,
    pointer: Vector2d,
    /// Accumulated pointer path length since press
    travel: f64,
    hit: GridHit,
    guide: Option<Entity>,
}

impl ViewportController {
    pub fn new(layout: GridLayout, options: ViewportOptions) -> Self {
        Self {
            state: ViewportState::new(),
            layout,
            options,
            pointer: Vector2d::ORIGIN,
            travel: 0.0,
            hit: GridHit::OutOfBounds,
            guide: None,
        }
    }

    pub fn state(&self) -> &ViewportState {
        &self.state
    }

    pub fn layout(&self) -> &GridLayout {
        &self.layout
    }

    pub fn options(&self) -> &ViewportOptions {
        &self.options
    }

    /// Swap the grid geometry (e.g. after a board resize). Drops the stale hit.
    pub fn set_layout(&mut self, layout: GridLayout) {
        self.layout = layout;
        self.hit = GridHit::OutOfBounds;
    }

    pub fn set_options(&mut self, options: ViewportOptions) {
        self.options = options;
    }

    /// Last computed grid hit
    pub fn last_hit(&self) -> GridHit {
        self.hit
    }

    /// Drag guide entity, present once a gesture has started
    pub fn guide(&self) -> Option<&Entity> {
        self.guide.as_ref()
    }

    /// Current render/mapping scale
    pub fn scale(&self) -> f64 {
        self.state.scale(self.options.apply_zoom)
    }

    /// Map a pointer position with the current pan and zoom
    pub fn locate<E: CellEngine + ?Sized>(&self, pointer: Vector2d, engine: &E) -> GridHit {
        locate(pointer, self.state.pan_offset, self.scale(), &self.layout, engine)
    }

    pub fn pointer_down(&mut self, pointer: Vector2d) {
        self.state.begin_drag(pointer);
        self.pointer = pointer;
        self.travel = 0.0;
        self.guide = Some(Guide::new(pointer, self.options.guide_color).into());
        log::debug!("Drag start at {:?}, pan {:?}", pointer, self.state.pan_offset);
    }

    /// Pan if dragging, then re-map the pointer. Returns the new hit.
    pub fn pointer_move<E: CellEngine + ?Sized>(
        &mut self,
        pointer: Vector2d,
        engine: &E,
    ) -> GridHit {
        if self.state.is_dragging() {
            self.travel += (pointer - self.pointer).magnitude();
            self.state.drag_to(pointer);
            if let Some(guide) = self.guide.as_mut() {
                guide.update_position(pointer);
            }
        }
        self.pointer = pointer;
        self.hit = self.locate(pointer, engine);
        self.hit
    }

    /// End the gesture. Returns the toggled index if it was a click on a cell.
    pub fn pointer_up<E: CellEngine + ?Sized>(
        &mut self,
        pointer: Vector2d,
        engine: &mut E,
    ) -> Option<usize> {
        if !self.state.is_dragging() {
            return None;
        }
        self.travel += (pointer - self.pointer).magnitude();
        self.pointer = pointer;
        self.end_gesture();

        self.hit = self.locate(pointer, engine);
        if self.travel > self.options.click_threshold {
            log::debug!("Pan ended at {:?} after {:.1}px", self.state.pan_offset, self.travel);
            return None;
        }

        let index = self.hit.index()?;
        match engine.set_cell(index) {
            Ok(cell) => {
                log::info!("Cell {} set to {:?}", index, cell);
                Some(index)
            }
            Err(e) => {
                log::warn!("Select failed: {}", e);
                None
            }
        }
    }

    /// Pointer left the surface: end any gesture without selecting
    pub fn pointer_leave(&mut self) {
        if self.state.is_dragging() {
            self.end_gesture();
        }
        self.hit = GridHit::OutOfBounds;
    }

    /// Wheel notch; returns the new zoom level
    pub fn wheel(&mut self, delta_y: f64) -> u32 {
        let zoom = self.state.zoom_by_wheel(delta_y, self.options.max_zoom);
        log::debug!("Zoom {}", zoom);
        zoom
    }

    pub fn readout(&self) -> DebugReadout {
        let active = self
            .guide
            .as_ref()
            .filter(|_| self.state.is_dragging())
            .map(Entity::transform);

        DebugReadout {
            pointer: self.pointer,
            drag_start: active.map(|t| t.initial_position()),
            magnitude: active.map(|t| t.displacement().magnitude()),
            pan_offset: self.state.pan_offset,
            zoom: self.state.zoom,
            hovered: self.hit,
        }
    }

    fn end_gesture(&mut self) {
        self.state.end_drag();
        if let Some(guide) = self.guide.as_mut() {
            guide.reset_initial_position();
        }
    }
}

//! Drag guide overlay
//!
//! Drawn in screen space: a square marker at the gesture anchor and a line
//! from the anchor to the live pointer position.

use crate::consts::GUIDE_MARKER_SIZE;
use crate::geom::{Transform, Vector2d};
use crate::surface::{Color, Surface};

#[derive(Debug, Clone, PartialEq)]
pub struct Guide {
    pub transform: Transform,
    color: Color,
}

impl Guide {
    pub fn new(anchor: Vector2d, color: Color) -> Self {
        Self {
            transform: Transform::new(anchor),
            color,
        }
    }

    #[inline]
    pub fn anchor(&self) -> Vector2d {
        self.transform.initial_position()
    }

    #[inline]
    pub fn length(&self) -> f64 {
        self.transform.displacement().magnitude()
    }

    /// Unit direction from anchor to pointer; `None` while collapsed
    pub fn direction(&self) -> Option<Vector2d> {
        self.transform.displacement().normalized()
    }

    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S) {
        if self.transform.displacement().is_origin() {
            return;
        }

        let anchor = self.anchor();
        let tip = self.transform.position();
        let half = GUIDE_MARKER_SIZE / 2.0;

        surface.fill_rect(
            anchor.x - half,
            anchor.y - half,
            GUIDE_MARKER_SIZE,
            GUIDE_MARKER_SIZE,
            self.color,
        );
        surface.begin_stroke(self.color);
        surface.move_to(anchor.x, anchor.y);
        surface.line_to(tip.x, tip.y);
        surface.stroke();
    }
}

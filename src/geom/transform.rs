//! Positional state owned by a drawable entity

use serde::{Deserialize, Serialize};

use super::Vector2d;

/// Anchor plus live position.
///
/// `initial_position` is the anchor a gesture is measured from; `position`
/// is where the entity is drawn. Repeated gestures compose because the
/// anchor only moves when a gesture is committed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    initial_position: Vector2d,
    position: Vector2d,
}

impl Transform {
    pub fn new(position: Vector2d) -> Self {
        Self {
            initial_position: position,
            position,
        }
    }

    #[inline]
    pub fn initial_position(&self) -> Vector2d {
        self.initial_position
    }

    #[inline]
    pub fn position(&self) -> Vector2d {
        self.position
    }

    /// Move the live position; the anchor is left untouched
    pub fn update_position(&mut self, position: Vector2d) {
        self.position = position;
    }

    /// Commit the current position as the new anchor
    pub fn reset_initial_position(&mut self) {
        self.initial_position = self.position;
    }

    /// Live position relative to the anchor
    #[inline]
    pub fn displacement(&self) -> Vector2d {
        self.position - self.initial_position
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::new(Vector2d::ORIGIN)
    }
}

//! Fixed-size colored rectangle

use crate::error::{Error, Result};
use crate::geom::{Transform, Vector2d};
use crate::surface::{Color, Surface};

/// Fill color used when a block is created without one
pub const DEFAULT_BLOCK_COLOR: Color = Color::rgb(0x77, 0x77, 0x77);

#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    pub transform: Transform,
    width: f64,
    height: f64,
    color: Color,
}

impl Block {
    /// Create a block with its top-left corner at `(x, y)`.
    ///
    /// Fails unless both dimensions are positive and finite.
    pub fn new(x: f64, y: f64, width: f64, height: f64, color: Option<Color>) -> Result<Self> {
        let valid = |v: f64| v.is_finite() && v > 0.0;
        if !valid(width) || !valid(height) {
            return Err(Error::InvalidDimensions { width, height });
        }

        Ok(Self {
            transform: Transform::new(Vector2d::new(x, y)),
            width,
            height,
            color: color.unwrap_or(DEFAULT_BLOCK_COLOR),
        })
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.height
    }

    #[inline]
    pub fn color(&self) -> Color {
        self.color
    }

    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S) {
        let pos = self.transform.position();
        surface.fill_rect(pos.x, pos.y, self.width, self.height, self.color);
    }
}

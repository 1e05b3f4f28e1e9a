//! Immediate-mode drawing surface
//!
//! The viewport core only ever talks to a [`Surface`]; the browser canvas and
//! the in-memory recorder are interchangeable behind it.

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod recording;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;
pub use recording::{DrawCommand, RecordingSurface};

use std::fmt;
use std::str::FromStr;

use peniko::color;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Opaque sRGB color
///
/// Parsing and CSS formatting go through [`peniko::color`], so anything a
/// canvas accepts as a solid color (`#rgb`, `#rrggbb`, `rgb(...)`, named
/// colors) is accepted here as long as it is fully opaque.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a CSS color string
    pub fn parse(css: &str) -> Result<Self> {
        let parsed = color::parse_color(css.trim()).map_err(|e| {
            log::debug!("Rejected color {:?}: {}", css, e);
            Error::InvalidColor(css.to_string())
        })?;
        let rgba = parsed.to_alpha_color::<color::Srgb>().to_rgba8();
        if rgba.a != u8::MAX {
            return Err(Error::InvalidColor(css.to_string()));
        }
        Ok(Self::rgb(rgba.r, rgba.g, rgba.b))
    }

    /// CSS notation understood by `CanvasRenderingContext2d`
    pub fn to_css(&self) -> String {
        peniko::Color::from(*self).to_rgba8().to_string()
    }
}

impl From<Color> for peniko::Color {
    fn from(c: Color) -> Self {
        peniko::Color::from_rgba8(c.r, c.g, c.b, u8::MAX)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css())
    }
}

impl FromStr for Color {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Color {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        Self::parse(&s)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_css()
    }
}

/// Primitive draw calls in surface pixel space (origin top-left)
pub trait Surface {
    /// Surface size in pixels
    fn size(&self) -> (f64, f64);

    /// Fill the whole surface, ignoring the current transform
    fn clear(&mut self, color: Color);

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64, color: Color);

    /// Start a new path that will be stroked with `color`
    fn begin_stroke(&mut self, color: Color);
    fn move_to(&mut self, x: f64, y: f64);
    fn line_to(&mut self, x: f64, y: f64);
    fn stroke(&mut self);

    fn save(&mut self);
    fn translate(&mut self, x: f64, y: f64);
    fn scale(&mut self, sx: f64, sy: f64);
    fn restore(&mut self);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_css_forms() {
        assert_eq!(Color::parse("#ef9f76").unwrap(), Color::rgb(0xef, 0x9f, 0x76));
        assert_eq!(Color::parse("#777").unwrap(), Color::rgb(0x77, 0x77, 0x77));
        let padded = Color::parse(" rgb(35, 38, 52) ").unwrap();
        assert_eq!(padded, Color::rgb(0x23, 0x26, 0x34));
        assert_eq!("white".parse::<Color>().unwrap(), Color::rgb(255, 255, 255));
    }

    #[test]
    fn test_reject_bad_colors() {
        assert!(matches!(Color::parse("#12345"), Err(Error::InvalidColor(_))));
        assert!(matches!(Color::parse("#gggggg"), Err(Error::InvalidColor(_))));
        assert!(Color::parse("#éé").is_err());
        // Translucent colors are not solid fills
        assert!(matches!(Color::parse("#ff000080"), Err(Error::InvalidColor(_))));
    }

    #[test]
    fn test_css_output_parses_back() {
        let colors = [
            Color::rgb(0, 0, 0),
            Color::rgb(0xef, 0x9f, 0x76),
            Color::rgb(1, 2, 3),
        ];
        for color in colors {
            assert_eq!(color.to_css().parse::<Color>().unwrap(), color);
        }
    }

    #[test]
    fn test_serde_as_string() {
        let json = serde_json::to_string(&Color::rgb(1, 2, 3)).unwrap();
        assert!(json.starts_with('"'));
        let back: Color = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Color::rgb(1, 2, 3));
        let hex: Color = serde_json::from_str("\"#010203\"").unwrap();
        assert_eq!(hex, Color::rgb(1, 2, 3));
        assert!(serde_json::from_str::<Color>("\"nope\"").is_err());
    }
}

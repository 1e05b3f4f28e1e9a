//! Browser canvas surface (WASM only)

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::{Color, Surface};
use crate::error::{Error, Result};

/// `Surface` backed by a `CanvasRenderingContext2d`
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|_| Error::ContextUnavailable)?
            .ok_or(Error::ContextUnavailable)?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| Error::ContextUnavailable)?;

        Ok(Self { canvas, ctx })
    }

    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.canvas.set_width(width);
        self.canvas.set_height(height);
    }
}

impl Surface for CanvasSurface {
    fn size(&self) -> (f64, f64) {
        (self.canvas.width() as f64, self.canvas.height() as f64)
    }

    fn clear(&mut self, color: Color) {
        let (w, h) = self.size();
        self.ctx.save();
        if let Err(e) = self.ctx.set_transform(1.0, 0.0, 0.0, 1.0, 0.0, 0.0) {
            log::warn!("Canvas transform reset failed: {:?}", e);
        }
        self.ctx.set_fill_style_str(&color.to_css());
        self.ctx.fill_rect(0.0, 0.0, w, h);
        self.ctx.restore();
    }

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64, color: Color) {
        self.ctx.set_fill_style_str(&color.to_css());
        self.ctx.fill_rect(x, y, width, height);
    }

    fn begin_stroke(&mut self, color: Color) {
        self.ctx.begin_path();
        self.ctx.set_stroke_style_str(&color.to_css());
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.ctx.move_to(x, y);
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.ctx.line_to(x, y);
    }

    fn stroke(&mut self) {
        self.ctx.stroke();
    }

    fn save(&mut self) {
        self.ctx.save();
    }

    fn translate(&mut self, x: f64, y: f64) {
        if let Err(e) = self.ctx.translate(x, y) {
            log::warn!("Canvas translate failed: {:?}", e);
        }
    }

    fn scale(&mut self, sx: f64, sy: f64) {
        if let Err(e) = self.ctx.scale(sx, sy) {
            log::warn!("Canvas scale failed: {:?}", e);
        }
    }

    fn restore(&mut self) {
        self.ctx.restore();
    }
}

//! Canvas 2D backend (WASM only)

use glam::Vec2;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement};

use super::surface::Surface;
use crate::error::{Error, Result};

/// Draws onto a canvas element through its 2D context
pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
    /// The rock sprite; may still be loading
    image: HtmlImageElement,
    size: Vec2,
}

impl CanvasSurface {
    pub fn new(canvas: &HtmlCanvasElement, image: HtmlImageElement) -> Result<Self> {
        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")?
            .ok_or(Error::NoContext2d)?
            .dyn_into()
            .map_err(|_| Error::NoContext2d)?;
        let size = Vec2::new(canvas.width() as f32, canvas.height() as f32);
        Ok(Self { ctx, image, size })
    }

    pub fn image(&self) -> &HtmlImageElement {
        &self.image
    }
}

/// Canvas calls only fail on bad arguments; log and keep drawing
fn check(op: &str, result: std::result::Result<(), JsValue>) {
    if let Err(e) = result {
        log::warn!("Canvas {} failed: {:?}", op, e);
    }
}

impl Surface for CanvasSurface {
    fn size(&self) -> Vec2 {
        self.size
    }

    fn fill_rect(&mut self, origin: Vec2, size: Vec2, color: &str) {
        self.ctx.set_fill_style_str(color);
        self.ctx
            .fill_rect(origin.x as f64, origin.y as f64, size.x as f64, size.y as f64);
    }

    fn save(&mut self) {
        self.ctx.save();
    }

    fn restore(&mut self) {
        self.ctx.restore();
    }

    fn translate(&mut self, offset: Vec2) {
        check("translate", self.ctx.translate(offset.x as f64, offset.y as f64));
    }

    fn rotate(&mut self, radians: f32) {
        check("rotate", self.ctx.rotate(radians as f64));
    }

    fn scale(&mut self, factor: Vec2) {
        check("scale", self.ctx.scale(factor.x as f64, factor.y as f64));
    }

    fn draw_sprite(&mut self) {
        check(
            "drawImage",
            self.ctx
                .draw_image_with_html_image_element(&self.image, 0.0, 0.0),
        );
    }
}

//! `Surface` backed by a 2D canvas context

use game_core::{Aabb, Surface};
use glam::Vec2;
use std::f64::consts::TAU;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn from_canvas(canvas: &HtmlCanvasElement) -> Result<Self, String> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| format!("Failed to get 2d context: {:?}", e))?
            .ok_or_else(|| "Canvas has no 2d context".to_string())?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| "Context is not a CanvasRenderingContext2d".to_string())?;
        Ok(Self { ctx })
    }
}

impl Surface for CanvasSurface {
    fn clear(&mut self, area: Aabb) {
        let size = area.size();
        self.ctx.clear_rect(
            area.min.x as f64,
            area.min.y as f64,
            size.x as f64,
            size.y as f64,
        );
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: &str) {
        self.ctx.begin_path();
        if let Err(e) = self
            .ctx
            .arc(center.x as f64, center.y as f64, radius as f64, 0.0, TAU)
        {
            log::error!("Canvas arc failed: {:?}", e);
        }
        self.ctx.set_fill_style_str(color);
        self.ctx.fill();
        self.ctx.close_path();
    }

    fn fill_rect(&mut self, rect: Aabb, color: &str) {
        let size = rect.size();
        self.ctx.set_fill_style_str(color);
        self.ctx.fill_rect(
            rect.min.x as f64,
            rect.min.y as f64,
            size.x as f64,
            size.y as f64,
        );
    }

    fn fill_text(&mut self, text: &str, pos: Vec2, font: &str, color: &str) {
        self.ctx.set_font(font);
        self.ctx.set_fill_style_str(color);
        if let Err(e) = self.ctx.fill_text(text, pos.x as f64, pos.y as f64) {
            log::error!("Canvas fill_text failed: {:?}", e);
        }
    }
}

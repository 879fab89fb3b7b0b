use crate::core::{Rect, Viewport};
use crate::draw::{Surface, TextAlign};
use glam::DVec2;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// [`Surface`] over a canvas 2D context, drawing in CSS pixels.
///
/// The backing store is sized in device pixels; [`CanvasSurface::begin_frame`]
/// installs the device-pixel-ratio transform so callers never see it.
pub struct CanvasSurface {
    ctx: web::CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(canvas: &web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow::anyhow!("get_context failed: {:?}", e))?
            .ok_or_else(|| anyhow::anyhow!("canvas has no 2d context"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        Ok(Self { ctx })
    }

    pub fn begin_frame(&self, device_pixel_ratio: f64) {
        let dpr = if device_pixel_ratio.is_finite() && device_pixel_ratio > 0.0 {
            device_pixel_ratio
        } else {
            1.0
        };
        _ = self.ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0);
    }
}

fn add_stops(gradient: &web::CanvasGradient, stops: &[(f64, &str)]) {
    for (offset, color) in stops {
        _ = gradient.add_color_stop(*offset as f32, color);
    }
}

impl Surface for CanvasSurface {
    fn clear(&mut self, viewport: Viewport) {
        self.ctx
            .clear_rect(0.0, 0.0, viewport.width, viewport.height);
    }

    fn fill_rect(&mut self, rect: Rect, style: &str) {
        self.ctx.set_fill_style_str(style);
        self.ctx.fill_rect(rect.x, rect.y, rect.w, rect.h);
    }

    fn stroke_rect(&mut self, rect: Rect, style: &str, line_width: f64) {
        self.ctx.set_stroke_style_str(style);
        self.ctx.set_line_width(line_width);
        self.ctx.stroke_rect(rect.x, rect.y, rect.w, rect.h);
    }

    fn fill_radial_gradient(
        &mut self,
        rect: Rect,
        center: DVec2,
        radius: f64,
        stops: &[(f64, &str)],
    ) {
        match self
            .ctx
            .create_radial_gradient(center.x, center.y, 0.0, center.x, center.y, radius.max(1.0))
        {
            Ok(gradient) => {
                add_stops(&gradient, stops);
                self.ctx.set_fill_style_canvas_gradient(&gradient);
                self.ctx.fill_rect(rect.x, rect.y, rect.w, rect.h);
            }
            Err(e) => log::debug!("radial gradient skipped: {:?}", e),
        }
    }

    fn fill_vertical_gradient(&mut self, rect: Rect, stops: &[(f64, &str)]) {
        let gradient = self
            .ctx
            .create_linear_gradient(rect.x, rect.y, rect.x, rect.y + rect.h);
        add_stops(&gradient, stops);
        self.ctx.set_fill_style_canvas_gradient(&gradient);
        self.ctx.fill_rect(rect.x, rect.y, rect.w, rect.h);
    }

    fn line(&mut self, from: DVec2, to: DVec2, style: &str, line_width: f64) {
        self.ctx.set_stroke_style_str(style);
        self.ctx.set_line_width(line_width);
        self.ctx.begin_path();
        self.ctx.move_to(from.x, from.y);
        self.ctx.line_to(to.x, to.y);
        self.ctx.stroke();
    }

    fn fill_circle(&mut self, center: DVec2, radius: f64, style: &str) {
        self.ctx.set_fill_style_str(style);
        self.ctx.begin_path();
        _ = self
            .ctx
            .arc(center.x, center.y, radius, 0.0, std::f64::consts::TAU);
        self.ctx.fill();
    }

    fn set_line_dash(&mut self, segments: &[f64]) {
        let arr = js_sys::Array::new();
        for s in segments {
            arr.push(&JsValue::from_f64(*s));
        }
        _ = self.ctx.set_line_dash(&arr);
    }

    fn fill_text(&mut self, text: &str, at: DVec2, font: &str, style: &str, align: TextAlign) {
        self.ctx.set_font(font);
        self.ctx.set_fill_style_str(style);
        self.ctx.set_text_align(match align {
            TextAlign::Left => "left",
            TextAlign::Center => "center",
            TextAlign::Right => "right",
        });
        self.ctx.set_text_baseline("middle");
        _ = self.ctx.fill_text(text, at.x, at.y);
    }
}

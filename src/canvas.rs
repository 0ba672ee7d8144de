use dotfield_core::Surface;
use glam::DVec2;
use std::f64::consts::TAU;
use web_sys as web;

/// [`Surface`] over a canvas 2D context. Dimensions are captured at bind time.
pub struct CanvasSurface {
    ctx: web::CanvasRenderingContext2d,
    width: u32,
    height: u32,
}

impl CanvasSurface {
    pub fn new(canvas: &web::HtmlCanvasElement, ctx: web::CanvasRenderingContext2d) -> Self {
        Self {
            ctx,
            width: canvas.width(),
            height: canvas.height(),
        }
    }
}

impl Surface for CanvasSurface {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn clear(&mut self) {
        self.ctx
            .clear_rect(0.0, 0.0, self.width as f64, self.height as f64);
    }

    fn set_fill_color(&mut self, color: &str) {
        self.ctx.set_fill_style_str(color);
    }

    fn set_stroke_color(&mut self, color: &str) {
        self.ctx.set_stroke_style_str(color);
    }

    fn set_global_alpha(&mut self, alpha: f64) {
        self.ctx.set_global_alpha(alpha);
    }

    fn fill_circle(&mut self, center: DVec2, radius: f64) {
        self.ctx.begin_path();
        _ = self.ctx.arc(center.x, center.y, radius, 0.0, TAU);
        self.ctx.close_path();
        self.ctx.fill();
    }

    fn stroke_line(&mut self, from: DVec2, to: DVec2) {
        self.ctx.begin_path();
        self.ctx.move_to(from.x, from.y);
        self.ctx.line_to(to.x, to.y);
        self.ctx.stroke();
    }
}

use crate::{Point, Surface};

/// Line opacity for two points `distance` apart: `1 - round(distance / threshold, 2)`.
#[inline]
pub fn connector_opacity(distance: f64, threshold: f64) -> f64 {
    let ratio = (distance / threshold * 100.0).round() / 100.0;
    1.0 - ratio
}

/// A transient pairing of two nearby points, drawn as a fading line.
#[derive(Clone, Copy, Debug)]
pub struct Connector<'a> {
    a: &'a Point,
    b: &'a Point,
}

impl<'a> Connector<'a> {
    /// Pair two points only when they are strictly closer than `threshold`.
    pub fn between(a: &'a Point, b: &'a Point, threshold: f64) -> Option<Self> {
        (a.distance_to(b) < threshold).then_some(Self { a, b })
    }

    pub fn opacity(&self, threshold: f64) -> f64 {
        connector_opacity(self.a.distance_to(self.b), threshold)
    }

    pub fn render<S: Surface>(&self, surface: &mut S, threshold: f64, color: &str) {
        surface.set_global_alpha(self.opacity(threshold));
        surface.set_stroke_color(color);
        surface.stroke_line(self.a.position, self.b.position);
    }
}

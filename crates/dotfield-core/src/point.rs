use crate::{FieldParams, SignPolicy, Surface};
use glam::DVec2;
use rand::Rng;

/// A drifting dot. Velocity magnitude per axis lies in `[0.01, 0.10]`; the
/// sign gives the direction of travel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub position: DVec2,
    pub velocity: DVec2,
}

impl Point {
    pub fn new(position: DVec2, velocity: DVec2) -> Self {
        Self { position, velocity }
    }

    /// Random position on the surface (integer draws) and random velocity.
    pub fn random<R: Rng + ?Sized>(rng: &mut R, width: u32, height: u32, policy: SignPolicy) -> Self {
        let position = DVec2::new(
            rng.gen_range(0..width.max(1)) as f64,
            rng.gen_range(0..height.max(1)) as f64,
        );
        let velocity = DVec2::new(random_speed(rng, policy), random_speed(rng, policy));
        Self { position, velocity }
    }

    /// Create a random point and draw it immediately.
    pub fn spawn<S: Surface, R: Rng + ?Sized>(surface: &mut S, rng: &mut R, params: &FieldParams) -> Self {
        let p = Self::random(rng, surface.width(), surface.height(), params.sign_policy);
        p.render(surface, params.point_radius, params.point_color);
        p
    }

    pub fn render<S: Surface>(&self, surface: &mut S, radius: f64, color: &str) {
        surface.set_global_alpha(1.0);
        surface.set_fill_color(color);
        surface.fill_circle(self.position, radius);
    }

    /// Bounce off the edges, advance one step, then redraw.
    ///
    /// The flip happens before the move, so a fast point may overshoot an
    /// edge by up to one velocity step before turning back.
    pub fn step<S: Surface>(&mut self, surface: &mut S, radius: f64, color: &str) {
        let far = DVec2::new(surface.width() as f64, surface.height() as f64) - radius;
        if self.position.x >= far.x {
            self.velocity.x = -self.velocity.x;
        }
        if self.position.y >= far.y {
            self.velocity.y = -self.velocity.y;
        }
        if self.position.x <= radius {
            self.velocity.x = -self.velocity.x;
        }
        if self.position.y <= radius {
            self.velocity.y = -self.velocity.y;
        }
        self.position += self.velocity;
        self.render(surface, radius, color);
    }

    #[inline]
    pub fn distance_to(&self, other: &Point) -> f64 {
        self.position.distance(other.position)
    }
}

fn random_speed<R: Rng + ?Sized>(rng: &mut R, policy: SignPolicy) -> f64 {
    let magnitude = (rng.gen_range(0..10) + 1) as f64 / 100.0;
    let negate = match policy {
        SignPolicy::Legacy => rng.gen_range(0..10) > 5,
        SignPolicy::Uniform => rng.gen_bool(0.5),
    };
    if negate {
        -magnitude
    } else {
        magnitude
    }
}

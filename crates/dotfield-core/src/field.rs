//! The owning collection of points and the per-frame orchestration.

use crate::{adjusted_threshold, Connector, FieldError, FieldParams, Point, Surface};
use rand::Rng;

/// What one tick drew.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TickReport {
    pub connectors: usize,
}

pub struct Field<S: Surface> {
    surface: S,
    params: FieldParams,
    threshold: f64,
    points: Vec<Point>,
}

impl<S: Surface> Field<S> {
    /// Spawn `params.point_count` random points on `surface` (each drawn once)
    /// and fix the proximity threshold.
    pub fn seed<R: Rng + ?Sized>(
        mut surface: S,
        params: FieldParams,
        rng: &mut R,
    ) -> Result<Self, FieldError> {
        params.validate()?;
        check_surface(&surface)?;
        let points = (0..params.point_count)
            .map(|_| Point::spawn(&mut surface, &mut *rng, &params))
            .collect::<Vec<_>>();
        let field = Self::assemble(surface, params, points);
        log::info!(
            "[field] seeded {} points on {}x{} threshold={:.1}",
            field.points.len(),
            field.surface.width(),
            field.surface.height(),
            field.threshold
        );
        Ok(field)
    }

    /// Build a field from explicit points. `params.point_count` is replaced by
    /// the number of points given.
    pub fn from_points(
        surface: S,
        mut params: FieldParams,
        points: Vec<Point>,
    ) -> Result<Self, FieldError> {
        params.point_count = points.len();
        params.validate()?;
        check_surface(&surface)?;
        Ok(Self::assemble(surface, params, points))
    }

    fn assemble(surface: S, params: FieldParams, points: Vec<Point>) -> Self {
        let threshold = adjusted_threshold(params.point_radius, params.threshold);
        if threshold != params.threshold {
            log::debug!(
                "[field] threshold {:.1} too small for radius {:.1}; raised to {:.1}",
                params.threshold,
                params.point_radius,
                threshold
            );
        }
        Self {
            surface,
            params,
            threshold,
            points,
        }
    }

    /// One animation frame: clear, advance every point, and draw a connector
    /// for each unordered pair closer than the threshold.
    ///
    /// Point `i` is stepped before it is compared with points `i+1..`, which
    /// have not moved yet this frame.
    pub fn tick(&mut self) -> TickReport {
        let radius = self.params.point_radius;
        let mut report = TickReport::default();
        self.surface.clear();
        for i in 0..self.points.len() {
            self.points[i].step(&mut self.surface, radius, self.params.point_color);
            let (head, tail) = self.points.split_at(i + 1);
            let a = &head[i];
            for b in tail {
                if let Some(line) = Connector::between(a, b, self.threshold) {
                    line.render(&mut self.surface, self.threshold, self.params.line_color);
                    report.connectors += 1;
                }
            }
        }
        report
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn params(&self) -> &FieldParams {
        &self.params
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }
}

fn check_surface<S: Surface>(surface: &S) -> Result<(), FieldError> {
    let (width, height) = (surface.width(), surface.height());
    if width == 0 || height == 0 {
        return Err(FieldError::EmptySurface { width, height });
    }
    Ok(())
}

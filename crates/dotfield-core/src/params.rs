//! Fixed startup parameters for a point field.

use crate::FieldError;

// Above this many points the all-pairs scan gets sluggish in a browser.
pub const RECOMMENDED_MAX_POINTS: usize = 300;

pub const DEFAULT_POINT_COUNT: usize = 100;
pub const DEFAULT_POINT_RADIUS: f64 = 3.0;
pub const DEFAULT_POINT_COLOR: &str = "#FFFFFF";
pub const DEFAULT_LINE_COLOR: &str = "#FFFFFF";
pub const DEFAULT_THRESHOLD: f64 = 100.0;

/// How the direction of each initial velocity component is drawn.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SignPolicy {
    /// Negate when an integer draw in `[0, 10)` exceeds 5 (a 4/10 chance).
    #[default]
    Legacy,
    /// Negate with probability 1/2.
    Uniform,
}

#[derive(Clone, Debug, PartialEq)]
pub struct FieldParams {
    pub point_count: usize,
    pub point_radius: f64,
    pub point_color: &'static str,
    pub line_color: &'static str,
    pub threshold: f64,
    pub sign_policy: SignPolicy,
}

impl Default for FieldParams {
    fn default() -> Self {
        Self {
            point_count: DEFAULT_POINT_COUNT,
            point_radius: DEFAULT_POINT_RADIUS,
            point_color: DEFAULT_POINT_COLOR,
            line_color: DEFAULT_LINE_COLOR,
            threshold: DEFAULT_THRESHOLD,
            sign_policy: SignPolicy::default(),
        }
    }
}

impl FieldParams {
    /// Threshold after the one-time startup adjustment: when a dot's
    /// diameter reaches 80% of the threshold, the threshold becomes four
    /// radii.
    pub fn effective_threshold(&self) -> f64 {
        adjusted_threshold(self.point_radius, self.threshold)
    }

    pub fn validate(&self) -> Result<(), FieldError> {
        if !self.point_radius.is_finite() || self.point_radius <= 0.0 {
            return Err(FieldError::InvalidRadius(self.point_radius));
        }
        if !self.threshold.is_finite() || self.threshold <= 0.0 {
            return Err(FieldError::InvalidThreshold(self.threshold));
        }
        if self.point_count == 0 {
            return Err(FieldError::NoPoints);
        }
        if self.point_count > RECOMMENDED_MAX_POINTS {
            log::warn!(
                "[params] {} points exceeds the recommended {}; frames may stall",
                self.point_count,
                RECOMMENDED_MAX_POINTS
            );
        }
        Ok(())
    }
}

#[inline]
pub fn adjusted_threshold(radius: f64, threshold: f64) -> f64 {
    if 2.0 * radius >= 0.8 * threshold {
        4.0 * radius
    } else {
        threshold
    }
}

use thiserror::Error;

/// Errors raised while binding a field to a surface or starting a driver.
#[derive(Debug, Error, PartialEq)]
pub enum FieldError {
    #[error("surface has no area ({width}x{height})")]
    EmptySurface { width: u32, height: u32 },

    #[error("point radius must be finite and positive, got {0}")]
    InvalidRadius(f64),

    #[error("proximity threshold must be finite and positive, got {0}")]
    InvalidThreshold(f64),

    #[error("a field needs at least one point")]
    NoPoints,

    #[error("trigger rate must be non-zero")]
    ZeroRate,

    #[error("failed to spawn trigger thread: {0}")]
    TickerSpawn(String),
}

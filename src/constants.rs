/// Page wiring and driver tuning for the web front-end.
///
/// Field parameters themselves come from `dotfield_core::FieldParams::default()`.
// Id of the canvas element the field draws into
pub const CANVAS_ELEMENT_ID: &str = "dot-canvas";

// Worker trigger rate; one field tick per trigger
pub const TRIGGER_RATE_HZ: u32 = 500;
pub const TRIGGER_INTERVAL_MS: u32 = 1000 / TRIGGER_RATE_HZ;

// How often the achieved tick rate is logged
pub const RATE_REPORT_INTERVAL_SEC: f64 = 5.0;

// Console log level
pub const LOG_LEVEL: log::Level = log::Level::Info;

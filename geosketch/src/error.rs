//! Error type shared by every sketchpad operation.
//!
//! All variants are user-input validation failures. None of them leave the
//! session in a partially mutated state.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SketchError {
    #[error("Unknown command \"{0}\"\nType \"help\" for available commands")]
    UnknownCommand(String),

    #[error("{command} requires 2 point labels\nUsage: {command} pointA pointB")]
    MissingLabels { command: &'static str },

    #[error("Point \"{0}\" not found")]
    PointNotFound(String),

    #[error("No point near ({x:.2}, {y:.2})")]
    NoPointNearby { x: f64, y: f64 },

    #[error("parameter '{0}' must be finite")]
    NonFinite(&'static str),

    #[error("parameter '{param}' out of range [{min}, {max}], got {got}")]
    OutOfRange { param: &'static str, min: f64, max: f64, got: f64 },

    #[error("invalid {kind} id {id}")]
    InvalidId { kind: &'static str, id: u32 },

    #[error("{kind} limit of {max} reached")]
    LimitReached { kind: &'static str, max: usize },

    #[error("clear was not requested or the confirmation is stale")]
    StaleClearToken,

    #[error("unknown mode \"{0}\"")]
    InvalidMode(String),

    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
}

pub type SketchResult<T> = Result<T, SketchError>;

impl SketchError {
    /// Stable machine-readable code, used by bindings to tag errors.
    pub fn code(&self) -> &'static str {
        match self {
            SketchError::UnknownCommand(_) => "unknown_command",
            SketchError::MissingLabels { .. } => "missing_labels",
            SketchError::PointNotFound(_) => "point_not_found",
            SketchError::NoPointNearby { .. } => "no_point_nearby",
            SketchError::NonFinite(_) => "non_finite",
            SketchError::OutOfRange { .. } => "out_of_range",
            SketchError::InvalidId { .. } => "invalid_id",
            SketchError::LimitReached { .. } => "limit_reached",
            SketchError::StaleClearToken => "stale_clear_token",
            SketchError::InvalidMode(_) => "invalid_mode",
            SketchError::Config(_) => "invalid_config",
        }
    }
}

/// Validates a user-space coordinate before it reaches the engine.
pub(crate) fn check_coord(param: &'static str, v: f64) -> SketchResult<()> {
    use crate::limits::{in_coord_bounds, COORD_MAX, COORD_MIN};
    if !v.is_finite() {
        return Err(SketchError::NonFinite(param));
    }
    if !in_coord_bounds(v) {
        return Err(SketchError::OutOfRange { param, min: COORD_MIN, max: COORD_MAX, got: v });
    }
    Ok(())
}

// Centralized bounds on untrusted input (clicks, command text, config)

// Scene size caps
pub const MAX_POINTS: usize = 10_000;
pub const MAX_SHAPES: usize = 20_000;

// Command line
pub const MAX_COMMAND_LEN: usize = 1024;

// Numeric bounds, in board user units
pub const COORD_MIN: f64 = -10_000_000.0;
pub const COORD_MAX: f64 = 10_000_000.0;

pub const DEFAULT_SNAP_THRESHOLD: f64 = 0.3;
pub const MAX_SNAP_THRESHOLD: f64 = 1_000.0;

#[inline]
pub fn in_coord_bounds(x: f64) -> bool { x.is_finite() && (COORD_MIN..=COORD_MAX).contains(&x) }

#[inline]
pub fn in_threshold_bounds(t: f64) -> bool { t.is_finite() && t > 0.0 && t <= MAX_SNAP_THRESHOLD }

//! Numeric constants shared across the crate.

/// Default step, in normalized global parameter, used for arclength sampling
pub const DEFAULT_LENGTH_STEP: f64 = 0.01;

/// Vectors shorter than this are treated as zero when normalizing
pub const EPSILON: f64 = 1e-5;

/// Number of control points per segment, not counting the shared start anchor
pub const POINTS_PER_SEGMENT: usize = 3;

/// `remove_segment` is rejected at or below this many segments
pub const MIN_SEGMENT_COUNT: usize = 2;

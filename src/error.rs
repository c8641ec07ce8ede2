//! Error types for spline operations.
//!
//! Degenerate geometry (zero-length velocity, coincident control points, a
//! tangent parallel to the up reference) is not an error: frame queries
//! return zero vectors in that case and callers guard for it themselves.

use thiserror::Error;

/// Errors raised by spline accessors, topology edits and data loading
#[derive(Debug, Error)]
pub enum SplineError {
    /// A point or mode accessor was given an index outside the valid range
    #[error("index {index} out of range (len {len})")]
    IndexOutOfRange { index: usize, len: usize },

    /// A topology edit that would break the spline's invariants
    #[error("invalid operation: {0}")]
    InvalidOperation(String),

    /// Serialized point/mode lists that do not describe a valid spline
    #[error("invalid spline data: {0}")]
    InvalidData(String),

    /// Configuration values outside their accepted range
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result alias used throughout the crate
pub type SplineResult<T> = Result<T, SplineError>;

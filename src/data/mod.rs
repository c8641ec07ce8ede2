//! Core data types: points, continuity modes, segments and the spline itself.

pub mod macros;
pub mod frame;
pub mod mode;
pub mod point;
pub mod segment;
pub mod spline;

pub use frame::Frame;
pub use mode::ContinuityMode;
pub use point::Point;
pub use segment::CubicSegment;
pub use spline::{BezierSpline, SplineConfig, SplineData};

// Module definitions
pub mod constants;
pub mod data;
pub mod error;
pub mod modules;

// export the core data structure at crate level
pub use data::frame::Frame;
pub use data::mode::ContinuityMode;
pub use data::point::Point;
pub use data::segment::CubicSegment;
pub use data::spline::{BezierSpline, SplineConfig, SplineData};
pub use error::{SplineError, SplineResult};

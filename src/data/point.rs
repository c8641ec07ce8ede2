//! Control point type.
//!
//! Points live in spline-local space; any world transform is applied by the
//! caller.

use nalgebra::Vector3;

/// A 3D position or displacement
pub type Point = Vector3<f64>;

/// Default reference direction used to build orientation frames
pub fn world_up() -> Point {
    Vector3::y()
}

/// Normalize `v`, or return the zero vector when it is too short to have a direction
pub fn normalize_or_zero(v: &Point) -> Point {
    v.try_normalize(crate::constants::EPSILON)
        .unwrap_or_else(Point::zeros)
}

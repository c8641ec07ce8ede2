//! Orientation frame sampled along a spline.

use crate::data::point::{normalize_or_zero, Point};

/// Position plus tangent/normal/binormal at one global parameter.
///
/// The frame is built against a fixed up reference: `binormal = up × tangent`
/// and `normal = tangent × binormal`. When the tangent is zero or parallel to
/// `up` the binormal and normal come out as zero vectors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub position: Point,
    pub tangent: Point,
    pub normal: Point,
    pub binormal: Point,
}

impl Frame {
    /// Build a frame from a position, an unnormalized velocity and the up reference
    pub fn from_velocity(position: Point, velocity: &Point, up: &Point) -> Self {
        let tangent = normalize_or_zero(velocity);
        let binormal = up.cross(&tangent);
        let normal = tangent.cross(&binormal);
        Self {
            position,
            tangent,
            normal,
            binormal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::point::world_up;
    use approx::assert_relative_eq;

    #[test]
    fn test_frame_along_x() {
        let frame = Frame::from_velocity(Point::zeros(), &Point::new(5.0, 0.0, 0.0), &world_up());

        assert_relative_eq!(frame.tangent, Point::new(1.0, 0.0, 0.0), epsilon = 1e-12);
        // up × x = -z
        assert_relative_eq!(frame.binormal, Point::new(0.0, 0.0, -1.0), epsilon = 1e-12);
        // x × -z = y
        assert_relative_eq!(frame.normal, Point::new(0.0, 1.0, 0.0), epsilon = 1e-12);
    }

    #[test]
    fn test_frame_degenerate_when_parallel_to_up() {
        let frame = Frame::from_velocity(Point::zeros(), &Point::new(0.0, 2.0, 0.0), &world_up());
        assert_relative_eq!(frame.tangent, Point::new(0.0, 1.0, 0.0), epsilon = 1e-12);
        assert_eq!(frame.binormal, Point::zeros());
        assert_eq!(frame.normal, Point::zeros());
    }

    #[test]
    fn test_frame_degenerate_zero_velocity() {
        let frame = Frame::from_velocity(Point::zeros(), &Point::zeros(), &world_up());
        assert_eq!(frame.tangent, Point::zeros());
        assert_eq!(frame.normal, Point::zeros());
    }
}

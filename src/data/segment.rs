//! Cubic bezier segment: position and first derivative of a single piece

use crate::data::point::Point;

/// Position on the cubic bezier `p0..p3` at parameter t, clamped to [0, 1]
///
/// B(t) = (1-t)^3 * p0 + 3(1-t)^2 * t * p1 + 3(1-t) * t^2 * p2 + t^3 * p3
pub fn cubic_point(p0: &Point, p1: &Point, p2: &Point, p3: &Point, t: f64) -> Point {
    let t = t.clamp(0.0, 1.0);
    let t1 = 1.0 - t;
    let t1_sq = t1 * t1;
    let t_sq = t * t;

    p0 * (t1_sq * t1) + p1 * (3.0 * t1_sq * t) + p2 * (3.0 * t1 * t_sq) + p3 * (t_sq * t)
}

/// First derivative of the cubic bezier `p0..p3` at parameter t, clamped to [0, 1]
///
/// B'(t) = 3(1-t)^2 * (p1 - p0) + 6(1-t) * t * (p2 - p1) + 3t^2 * (p3 - p2)
///
/// The result is not normalized.
pub fn cubic_velocity(p0: &Point, p1: &Point, p2: &Point, p3: &Point, t: f64) -> Point {
    let t = t.clamp(0.0, 1.0);
    let t1 = 1.0 - t;

    (p1 - p0) * (3.0 * t1 * t1) + (p2 - p1) * (6.0 * t1 * t) + (p3 - p2) * (3.0 * t * t)
}

/// A cubic bezier segment with 4 control points
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicSegment {
    /// Control points: start anchor, handle 1, handle 2, end anchor
    pub points: [Point; 4],
}

impl CubicSegment {
    /// Create a cubic segment with 4 control points
    pub fn new(p0: Point, p1: Point, p2: Point, p3: Point) -> Self {
        Self {
            points: [p0, p1, p2, p3],
        }
    }

    /// Build a segment from the first 4 points of a slice
    pub fn from_slice(points: &[Point]) -> Option<Self> {
        match points {
            [p0, p1, p2, p3, ..] => Some(Self::new(*p0, *p1, *p2, *p3)),
            _ => None,
        }
    }

    pub fn start(&self) -> Point {
        self.points[0]
    }

    pub fn end(&self) -> Point {
        self.points[3]
    }

    /// Get a point on the bezier curve at parameter t (0 <= t <= 1)
    pub fn point_at(&self, t: f64) -> Point {
        let [p0, p1, p2, p3] = &self.points;
        cubic_point(p0, p1, p2, p3, t)
    }

    /// Get the first derivative at parameter t (0 <= t <= 1)
    pub fn velocity_at(&self, t: f64) -> Point {
        let [p0, p1, p2, p3] = &self.points;
        cubic_velocity(p0, p1, p2, p3, t)
    }

    /// Generate a series of points along the bezier curve
    pub fn sample_points(&self, num_points: usize) -> Vec<Point> {
        match num_points {
            0 => Vec::new(),
            1 => vec![self.point_at(0.0)],
            _ => (0..num_points)
                .map(|i| {
                    let t = i as f64 / (num_points - 1) as f64;
                    self.point_at(t)
                })
                .collect(),
        }
    }
}

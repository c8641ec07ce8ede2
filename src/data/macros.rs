//! This module provides convenient macros for creating points, segments, and splines.

/// Macro for creating a Point
#[macro_export]
macro_rules! pt {
    ($x:expr, $y:expr, $z:expr) => {
        $crate::data::Point::new($x as f64, $y as f64, $z as f64)
    };
}

/// Macro for creating a cubic bezier segment
#[macro_export]
macro_rules! cubic {
    ([$($point:expr),*]) => {{
        let points = [$($point),*];
        assert_eq!(points.len(), 4, "Cubic bezier requires exactly 4 points");
        $crate::data::CubicSegment::new(
            $crate::pt!(points[0].0, points[0].1, points[0].2),
            $crate::pt!(points[1].0, points[1].1, points[1].2),
            $crate::pt!(points[2].0, points[2].1, points[2].2),
            $crate::pt!(points[3].0, points[3].1, points[3].2),
        )
    }};
}

/// Macro for creating an open spline with all anchors `Free`.
///
/// Expands to a `SplineResult<BezierSpline>`; the point count must be
/// `3 * segments + 1`.
#[macro_export]
macro_rules! spline {
    ([$(($x:expr, $y:expr, $z:expr)),* $(,)?]) => {
        $crate::data::BezierSpline::from_points(vec![$($crate::pt!($x, $y, $z)),*])
    };
}

//! Arclength estimation by fixed-step polyline sampling.
//!
//! The spline is sampled at `n + 1` evenly spaced global parameters from 0 to
//! 1 inclusive, with `n = round(1 / step)`, and the distances between
//! consecutive samples are summed. The estimate is deterministic and never
//! exceeds the true length; its error shrinks with the step.

use crate::constants::DEFAULT_LENGTH_STEP;
use crate::data::{BezierSpline, Point};

/// Number of polyline pieces used for a given step
pub fn step_count(step: f64) -> usize {
    if !(step.is_finite() && step > 0.0) {
        return 1;
    }
    ((1.0 / step).round() as usize).max(1)
}

/// Length of the polyline through `sample(i / steps)` for `i in 0..=steps`
pub fn polyline_length<F>(steps: usize, sample: F) -> f64
where
    F: Fn(f64) -> Point,
{
    let steps = steps.max(1);
    let mut previous = sample(0.0);
    let mut length = 0.0;

    for i in 1..=steps {
        let current = sample(i as f64 / steps as f64);
        length += (current - previous).norm();
        previous = current;
    }

    length
}

/// Estimate the arclength of `spline` sampling every `step` in global parameter
pub fn estimate_length(spline: &BezierSpline, step: f64) -> f64 {
    polyline_length(step_count(step), |t| spline.point_at(t))
}

/// Estimate the arclength of `spline` with the default step of 0.01
pub fn estimate_length_default(spline: &BezierSpline) -> f64 {
    estimate_length(spline, DEFAULT_LENGTH_STEP)
}

//! Bezier spline: a chain of cubic segments sharing their end anchors.
//!
//! Control points are stored flat, `3 * segments + 1` of them. Index `i` is an
//! anchor when `i % 3 == 0`; the points in between are handles. Every anchor
//! carries a [`ContinuityMode`] that is re-applied after each mutation, and a
//! looped spline keeps its first and last anchors identical.
//!
//! # Example
//!
//! ```rust
//! use bezier_spline::{BezierSpline, ContinuityMode, pt};
//!
//! let mut spline = BezierSpline::new();
//! spline.add_segment();
//! assert_eq!(spline.segment_count(), 2);
//!
//! spline.set_continuity_mode(3, ContinuityMode::Mirrored).unwrap();
//! spline.set_control_point(2, pt!(3, 1, 0)).unwrap();
//!
//! // The handle after anchor 3 now mirrors the one before it
//! assert_eq!(spline.control_point(4).unwrap(), pt!(5, -1, 0));
//! ```

use std::cell::Cell;

use log::{debug, trace, warn};
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_LENGTH_STEP, MIN_SEGMENT_COUNT, POINTS_PER_SEGMENT};
use crate::data::frame::Frame;
use crate::data::mode::ContinuityMode;
use crate::data::point::{normalize_or_zero, world_up, Point};
use crate::data::segment::{cubic_point, cubic_velocity, CubicSegment};
use crate::error::{SplineError, SplineResult};
use crate::modules::arclength::estimate_length;
use crate::modules::continuity::{enforce, mode_slot, neighbor};

/// Tunables for a spline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SplineConfig {
    /// Global-parameter step used when estimating arclength
    pub length_step: f64,
    /// Displacement between consecutive points appended by `add_segment`
    pub segment_offset: Point,
    /// Reference direction for binormal and normal
    pub up: Point,
}

impl Default for SplineConfig {
    fn default() -> Self {
        Self {
            length_step: DEFAULT_LENGTH_STEP,
            segment_offset: Point::x(),
            up: world_up(),
        }
    }
}

impl SplineConfig {
    /// Check that every value is usable
    pub fn validate(&self) -> SplineResult<()> {
        if !(self.length_step.is_finite() && self.length_step > 0.0 && self.length_step <= 1.0) {
            return Err(SplineError::InvalidConfig(format!(
                "length_step must be in (0, 1], got {}",
                self.length_step
            )));
        }
        if !self.segment_offset.iter().all(|c| c.is_finite()) {
            return Err(SplineError::InvalidConfig(
                "segment_offset must be finite".to_string(),
            ));
        }
        if !self.up.iter().all(|c| c.is_finite()) {
            return Err(SplineError::InvalidConfig("up must be finite".to_string()));
        }
        Ok(())
    }
}

/// Plain point/mode lists describing a spline, as exchanged with loaders
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SplineData {
    pub points: Vec<Point>,
    pub modes: Vec<ContinuityMode>,
    #[serde(default)]
    pub looped: bool,
}

impl SplineData {
    /// Check the length relations between points and modes
    pub fn validate(&self) -> SplineResult<()> {
        let count = self.points.len();
        if count < POINTS_PER_SEGMENT + 1 || count % POINTS_PER_SEGMENT != 1 {
            return Err(SplineError::InvalidData(format!(
                "point count must be 3 * segments + 1 with at least one segment, got {}",
                count
            )));
        }
        let expected_modes = (count - 1) / POINTS_PER_SEGMENT + 1;
        if self.modes.len() != expected_modes {
            return Err(SplineError::InvalidData(format!(
                "expected {} continuity modes for {} points, got {}",
                expected_modes,
                count,
                self.modes.len()
            )));
        }
        Ok(())
    }
}

/// A piecewise cubic bezier spline with per-anchor continuity constraints.
///
/// The spline is a plain owned value with no interior locking. Arclength is
/// cached lazily behind a `Cell`, so the type is not `Sync`; mutate and query
/// it from a single owner.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "SplineData", into = "SplineData")]
pub struct BezierSpline {
    points: Vec<Point>,
    modes: Vec<ContinuityMode>,
    looped: bool,
    config: SplineConfig,
    cached_length: Cell<Option<f64>>,
}

impl BezierSpline {
    /// Create the default single-segment line from (1, 0, 0) to (4, 0, 0)
    pub fn new() -> Self {
        Self {
            points: default_points(),
            modes: vec![ContinuityMode::Free; 2],
            looped: false,
            config: SplineConfig::default(),
            cached_length: Cell::new(None),
        }
    }

    /// Create the default line with a custom config
    pub fn with_config(config: SplineConfig) -> SplineResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            ..Self::new()
        })
    }

    /// Create an open spline from raw points with every anchor `Free`
    pub fn from_points(points: Vec<Point>) -> SplineResult<Self> {
        let modes = vec![ContinuityMode::Free; points.len() / POINTS_PER_SEGMENT + 1];
        Self::from_data(
            SplineData {
                points,
                modes,
                looped: false,
            },
            SplineConfig::default(),
        )
    }

    /// Load a spline from point/mode lists.
    ///
    /// Stored positions are taken as-is; a looped input is re-closed the same
    /// way [`set_looped`](Self::set_looped) closes a spline.
    pub fn from_data(data: SplineData, config: SplineConfig) -> SplineResult<Self> {
        config.validate()?;
        if let Err(err) = data.validate() {
            warn!("rejected spline data: {}", err);
            return Err(err);
        }

        let mut spline = Self {
            points: data.points,
            modes: data.modes,
            looped: false,
            config,
            cached_length: Cell::new(None),
        };
        spline.set_looped(data.looped);
        Ok(spline)
    }

    /// Copy out the point/mode lists
    pub fn to_data(&self) -> SplineData {
        SplineData {
            points: self.points.clone(),
            modes: self.modes.clone(),
            looped: self.looped,
        }
    }

    /// Restore the default single-segment line and clear the loop flag
    pub fn reset(&mut self) {
        self.points = default_points();
        self.modes = vec![ContinuityMode::Free; 2];
        self.looped = false;
        self.invalidate_length();
        debug!("spline reset to default line");
    }

    pub fn config(&self) -> &SplineConfig {
        &self.config
    }

    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    pub fn segment_count(&self) -> usize {
        (self.points.len() - 1) / POINTS_PER_SEGMENT
    }

    /// Raw control point sequence, unchanged
    pub fn control_points(&self) -> &[Point] {
        &self.points
    }

    /// One continuity mode per anchor
    pub fn continuity_modes(&self) -> &[ContinuityMode] {
        &self.modes
    }

    pub fn is_anchor(index: usize) -> bool {
        index % POINTS_PER_SEGMENT == 0
    }

    pub fn control_point(&self, index: usize) -> SplineResult<Point> {
        self.check_index(index)?;
        Ok(self.points[index])
    }

    /// Move one control point.
    ///
    /// Moving an anchor carries both of its handles along by the same delta,
    /// and on a looped spline moving either end anchor moves the other one
    /// too. The owning anchor's continuity is re-applied afterwards.
    pub fn set_control_point(&mut self, index: usize, position: Point) -> SplineResult<()> {
        self.check_index(index)?;
        self.move_point(index, position);
        trace!("control point {} set to {:?}", index, position);
        Ok(())
    }

    /// Continuity mode of the anchor owning `index`
    pub fn continuity_mode(&self, index: usize) -> SplineResult<ContinuityMode> {
        self.check_index(index)?;
        Ok(self.modes[mode_slot(index)])
    }

    /// Set the continuity mode of the anchor owning `index` and re-apply it
    pub fn set_continuity_mode(&mut self, index: usize, mode: ContinuityMode) -> SplineResult<()> {
        self.check_index(index)?;

        let slot = mode_slot(index);
        let last_slot = self.modes.len() - 1;
        self.modes[slot] = mode;

        if self.looped {
            if slot == 0 {
                self.modes[last_slot] = mode;
            } else if slot == last_slot {
                self.modes[0] = mode;
            }
        }

        self.enforce(index);
        self.invalidate_length();
        trace!("continuity mode of slot {} set to {:?}", slot, mode);
        Ok(())
    }

    /// Append a segment using the configured offset
    pub fn add_segment(&mut self) {
        let offset = self.config.segment_offset;
        self.add_segment_with_offset(offset);
    }

    /// Append a segment whose three new points each step `offset` from the previous one.
    ///
    /// The new end anchor inherits the previous end anchor's mode. On a looped
    /// spline the new end anchor is snapped back onto the start anchor.
    pub fn add_segment_with_offset(&mut self, offset: Point) {
        let mut point = self.points[self.points.len() - 1];
        for _ in 0..POINTS_PER_SEGMENT {
            point += offset;
            self.points.push(point);
        }

        let mode = self.modes[self.modes.len() - 1];
        self.modes.push(mode);
        self.enforce(self.points.len() - 1 - POINTS_PER_SEGMENT);

        if self.looped {
            self.close_loop();
        }
        self.invalidate_length();
        debug!("added segment, now {} segments", self.segment_count());
    }

    /// Remove the last segment.
    ///
    /// Fails without touching the spline when only two segments are left.
    pub fn remove_segment(&mut self) -> SplineResult<()> {
        if self.segment_count() <= MIN_SEGMENT_COUNT {
            warn!(
                "refusing to remove a segment from a spline with {} segments",
                self.segment_count()
            );
            return Err(SplineError::InvalidOperation(
                "cannot remove the last segment".to_string(),
            ));
        }

        self.points.truncate(self.points.len() - POINTS_PER_SEGMENT);
        self.modes.pop();

        if self.looped {
            self.close_loop();
        }
        self.invalidate_length();
        debug!("removed segment, now {} segments", self.segment_count());
        Ok(())
    }

    pub fn is_looped(&self) -> bool {
        self.looped
    }

    /// Turn looping on or off.
    ///
    /// Turning it on copies the start anchor's mode and position onto the end
    /// anchor. Turning it off leaves the points where they are.
    pub fn set_looped(&mut self, looped: bool) {
        if self.looped == looped {
            return;
        }
        self.looped = looped;

        if looped {
            let last_slot = self.modes.len() - 1;
            self.modes[last_slot] = self.modes[0];
            let start = self.points[0];
            self.move_point(0, start);
        }
        self.invalidate_length();
        debug!("loop set to {}", looped);
    }

    /// The 4 control points of segment `index`
    pub fn segment(&self, index: usize) -> SplineResult<CubicSegment> {
        let count = self.segment_count();
        if index >= count {
            return Err(SplineError::IndexOutOfRange { index, len: count });
        }
        let start = index * POINTS_PER_SEGMENT;
        CubicSegment::from_slice(&self.points[start..]).ok_or(SplineError::IndexOutOfRange {
            index,
            len: count,
        })
    }

    /// Iterate over all segments in order
    pub fn segments(&self) -> impl Iterator<Item = CubicSegment> + '_ {
        self.points
            .windows(POINTS_PER_SEGMENT + 1)
            .step_by(POINTS_PER_SEGMENT)
            .map(|w| CubicSegment::new(w[0], w[1], w[2], w[3]))
    }

    /// Position at global parameter t in [0, 1]
    pub fn point_at(&self, t: f64) -> Point {
        let (i, local_t) = self.segment_parameter(t);
        let p = &self.points;
        cubic_point(&p[i], &p[i + 1], &p[i + 2], &p[i + 3], local_t)
    }

    /// Unnormalized first derivative at global parameter t, with respect to the segment-local parameter
    pub fn velocity_at(&self, t: f64) -> Point {
        let (i, local_t) = self.segment_parameter(t);
        let p = &self.points;
        cubic_velocity(&p[i], &p[i + 1], &p[i + 2], &p[i + 3], local_t)
    }

    /// Unit direction of travel, or zero where the velocity vanishes
    pub fn tangent_at(&self, t: f64) -> Point {
        normalize_or_zero(&self.velocity_at(t))
    }

    /// `up × tangent`; zero when the tangent is zero or parallel to up
    pub fn binormal_at(&self, t: f64) -> Point {
        self.config.up.cross(&self.tangent_at(t))
    }

    /// `tangent × binormal`
    pub fn normal_at(&self, t: f64) -> Point {
        let tangent = self.tangent_at(t);
        tangent.cross(&self.config.up.cross(&tangent))
    }

    /// Position, tangent, normal and binormal in one evaluation
    pub fn frame_at(&self, t: f64) -> Frame {
        Frame::from_velocity(self.point_at(t), &self.velocity_at(t), &self.config.up)
    }

    /// Generate `num_points` positions evenly spaced in global parameter
    pub fn sample_points(&self, num_points: usize) -> Vec<Point> {
        match num_points {
            0 => Vec::new(),
            1 => vec![self.point_at(0.0)],
            _ => (0..num_points)
                .map(|i| self.point_at(i as f64 / (num_points - 1) as f64))
                .collect(),
        }
    }

    /// Approximate arclength, recomputed only after a mutation
    pub fn length(&self) -> f64 {
        if let Some(length) = self.cached_length.get() {
            return length;
        }
        let length = estimate_length(self, self.config.length_step);
        self.cached_length.set(Some(length));
        trace!("recomputed spline length: {}", length);
        length
    }

    fn check_index(&self, index: usize) -> SplineResult<()> {
        if index >= self.points.len() {
            return Err(SplineError::IndexOutOfRange {
                index,
                len: self.points.len(),
            });
        }
        Ok(())
    }

    /// Map global t to (first point index of the segment, local t)
    fn segment_parameter(&self, t: f64) -> (usize, f64) {
        if t >= 1.0 {
            return (self.points.len() - 1 - POINTS_PER_SEGMENT, 1.0);
        }

        let count = self.segment_count();
        let scaled = t.clamp(0.0, 1.0) * count as f64;
        let index = (scaled as usize).min(count - 1);
        (index * POINTS_PER_SEGMENT, scaled - index as f64)
    }

    /// The other end anchor of a looped spline, if `index` is one
    fn loop_twin(&self, index: usize) -> Option<usize> {
        let last = self.points.len() - 1;
        match index {
            0 => Some(last),
            i if i == last => Some(0),
            _ => None,
        }
    }

    fn move_point(&mut self, index: usize, position: Point) {
        if Self::is_anchor(index) {
            let delta = position - self.points[index];
            let len = self.points.len();

            for offset in [-1, 1] {
                if let Some(handle) = neighbor(index, offset, len, self.looped) {
                    self.points[handle] += delta;
                }
            }
            if self.looped {
                if let Some(twin) = self.loop_twin(index) {
                    self.points[twin] = position;
                }
            }
        }

        self.points[index] = position;
        self.enforce(index);
        self.invalidate_length();
    }

    /// Snap the end anchor and its mode back onto the start anchor
    fn close_loop(&mut self) {
        let last = self.points.len() - 1;
        let last_slot = self.modes.len() - 1;
        self.points[last] = self.points[0];
        self.modes[last_slot] = self.modes[0];
        self.enforce(0);
    }

    fn enforce(&mut self, index: usize) {
        enforce(&mut self.points, &self.modes, self.looped, index);
    }

    fn invalidate_length(&self) {
        self.cached_length.set(None);
    }
}

impl Default for BezierSpline {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for BezierSpline {
    fn eq(&self, other: &Self) -> bool {
        self.points == other.points && self.modes == other.modes && self.looped == other.looped
    }
}

impl TryFrom<SplineData> for BezierSpline {
    type Error = SplineError;

    fn try_from(data: SplineData) -> SplineResult<Self> {
        Self::from_data(data, SplineConfig::default())
    }
}

impl From<BezierSpline> for SplineData {
    fn from(spline: BezierSpline) -> Self {
        SplineData {
            points: spline.points,
            modes: spline.modes,
            looped: spline.looped,
        }
    }
}

fn default_points() -> Vec<Point> {
    vec![
        Point::new(1.0, 0.0, 0.0),
        Point::new(2.0, 0.0, 0.0),
        Point::new(3.0, 0.0, 0.0),
        Point::new(4.0, 0.0, 0.0),
    ]
}

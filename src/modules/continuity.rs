//! Continuity enforcement around anchors.
//!
//! Each anchor owns a mode slot, `slot = (control_point_index + 1) / 3`, so the
//! handle just before an anchor and the handle just after it both map to that
//! anchor's slot. After a point or mode mutation, [`enforce`] rewrites the
//! handle opposite the edited side so the anchor satisfies its mode.
//!
//! When the spline is looped the control points are treated as circular
//! modulo `len - 1`: the first and last anchors are the same point, and the
//! handle before anchor 0 is `len - 2`.

use log::trace;

use crate::constants::POINTS_PER_SEGMENT;
use crate::data::point::{normalize_or_zero, Point};
use crate::data::ContinuityMode;

/// Mode slot owning `control_point_index`
pub fn mode_slot(control_point_index: usize) -> usize {
    (control_point_index + 1) / POINTS_PER_SEGMENT
}

/// Index of the anchor owning `control_point_index`
pub fn owning_anchor(control_point_index: usize) -> usize {
    mode_slot(control_point_index) * POINTS_PER_SEGMENT
}

/// Wrap `index` onto a looped control point sequence of length `len`.
///
/// The sequence is circular modulo `len - 1`, so `-1` maps to `len - 2` and
/// `len` maps to `1`.
pub fn wrap_index(index: isize, len: usize) -> usize {
    let period = len.saturating_sub(1).max(1) as isize;
    index.rem_euclid(period) as usize
}

/// Neighbor of `index` at `offset`, wrapping only when `looped`.
///
/// Returns `None` when an open spline runs off either end.
pub fn neighbor(index: usize, offset: isize, len: usize, looped: bool) -> Option<usize> {
    let target = index as isize + offset;
    if looped {
        Some(wrap_index(target, len))
    } else if target >= 0 && (target as usize) < len {
        Some(target as usize)
    } else {
        None
    }
}

/// Restore the continuity constraint of the anchor owning `control_point_index`.
///
/// The handle on the same side as `control_point_index` drives; the opposite
/// handle is recomputed. An edit on the anchor itself drives from the handle
/// before it. No-op for `Free` anchors and for the endpoints of an open spline.
///
/// `modes` must have one slot per anchor, and `control_point_index` must be a
/// valid index into `points`.
pub fn enforce(
    points: &mut [Point],
    modes: &[ContinuityMode],
    looped: bool,
    control_point_index: usize,
) {
    let slot = mode_slot(control_point_index);
    let mode = modes[slot];
    let last_slot = modes.len() - 1;

    if !mode.is_constrained() || (!looped && (slot == 0 || slot == last_slot)) {
        return;
    }

    let len = points.len();
    let anchor = owning_anchor(control_point_index);
    let before = wrap_index(anchor as isize - 1, len);
    let after = wrap_index(anchor as isize + 1, len);

    let (driving, dependent) = if control_point_index <= anchor {
        (before, after)
    } else {
        (after, before)
    };

    let anchor_position = points[anchor];
    let mut tangent = anchor_position - points[driving];

    if mode == ContinuityMode::Aligned {
        let distance = (anchor_position - points[dependent]).norm();
        tangent = normalize_or_zero(&tangent) * distance;
    }

    points[dependent] = anchor_position + tangent;
    trace!(
        "enforced {:?} at anchor {} (driving {}, dependent {})",
        mode,
        anchor,
        driving,
        dependent
    );
}

use approx::assert_relative_eq;
use bezier_spline::{pt, BezierSpline, ContinuityMode, SplineError};

#[test]
fn test_complete_editing_workflow() {
    // Start from the default line and grow it into a closed track
    let mut spline = BezierSpline::new();
    spline.add_segment();
    spline.add_segment_with_offset(pt!(0, 0, 1));
    spline.add_segment_with_offset(pt!(-1, 0, 0));
    assert_eq!(spline.segment_count(), 4);
    assert_eq!(spline.point_count(), 13);

    let open_length = spline.length();
    assert!(open_length > 0.0);

    // Smooth every interior anchor
    for anchor in [3, 6, 9] {
        spline
            .set_continuity_mode(anchor, ContinuityMode::Mirrored)
            .unwrap();
    }
    spline
        .set_continuity_mode(0, ContinuityMode::Aligned)
        .unwrap();
    spline.set_looped(true);

    let last = spline.point_count() - 1;
    assert_eq!(spline.control_point(0).unwrap(), spline.control_point(last).unwrap());
    assert_eq!(
        spline.continuity_mode(last).unwrap(),
        ContinuityMode::Aligned
    );

    // Drag a handle like an editor would
    spline.set_control_point(5, pt!(6, 1, -1)).unwrap();
    let anchor = spline.control_point(6).unwrap();
    let before = spline.control_point(5).unwrap() - anchor;
    let after = spline.control_point(7).unwrap() - anchor;
    assert_relative_eq!(before, -after, epsilon = 1e-12);

    // The closed curve starts and ends at the same place
    assert_relative_eq!(spline.point_at(0.0), spline.point_at(1.0), epsilon = 1e-12);

    // Frames along the track are orthogonal where the tangent is well defined
    for sample in 0..=20 {
        let t = sample as f64 / 20.0;
        let frame = spline.frame_at(t);
        if frame.tangent.norm() == 0.0 {
            continue;
        }
        assert_relative_eq!(frame.tangent.norm(), 1.0, epsilon = 1e-9);
        assert_relative_eq!(frame.tangent.dot(&frame.binormal), 0.0, epsilon = 1e-9);
        assert_relative_eq!(frame.tangent.dot(&frame.normal), 0.0, epsilon = 1e-9);
    }

    // Shrink back down to the minimum
    spline.remove_segment().unwrap();
    spline.remove_segment().unwrap();
    assert_eq!(spline.segment_count(), 2);
    assert!(matches!(
        spline.remove_segment(),
        Err(SplineError::InvalidOperation(_))
    ));
    assert_eq!(spline.segment_count(), 2);
    assert_eq!(
        spline.control_point(0).unwrap(),
        spline.control_point(spline.point_count() - 1).unwrap()
    );
}

#[test]
fn test_shader_passthrough_view() {
    let mut spline = BezierSpline::new();
    spline.add_segment();

    // Raw control points and length go out unchanged
    let raw = spline.control_points();
    assert_eq!(raw.len(), spline.point_count());
    assert_eq!(raw[0], pt!(1, 0, 0));
    assert_eq!(raw[6], pt!(7, 0, 0));
    assert_relative_eq!(spline.length(), 6.0, epsilon = 1e-9);
}

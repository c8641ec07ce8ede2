use bezier_spline::modules::export::json::ToJson;
use bezier_spline::modules::parse::json::FromJson;
use bezier_spline::{pt, BezierSpline, ContinuityMode, SplineData};

#[test]
fn test_load_edit_save() {
    let source = r#"{
        "points": [
            [0, 0, 0], [1, 2, 0], [3, 2, 0],
            [4, 0, 0], [5, -2, 0], [7, -2, 0],
            [8, 0, 0]
        ],
        "modes": ["Free", "Aligned", "Free"]
    }"#;

    let mut spline = BezierSpline::from_json(source).unwrap();
    assert_eq!(spline.segment_count(), 2);
    assert_eq!(spline.continuity_mode(3).unwrap(), ContinuityMode::Aligned);

    spline.set_control_point(3, pt!(4, 1, 0)).unwrap();
    spline.add_segment();

    let saved = spline.to_json().unwrap();
    let data = SplineData::from_json(&saved).unwrap();
    assert_eq!(data.points.len(), 10);
    assert_eq!(data.modes.len(), 4);
    assert_eq!(data.points[3], pt!(4, 1, 0));
    assert_eq!(data.points[9], pt!(11, 0, 0));
    assert!(!data.looped);

    let reloaded = BezierSpline::from_json(&saved).unwrap();
    assert_eq!(reloaded, spline);
    assert_eq!(reloaded.length(), spline.length());
}

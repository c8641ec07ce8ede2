//! JSON export of a spline's point/mode list
//!
//! ```rust
//! use bezier_spline::modules::export::json::ToJson;
//! use bezier_spline::BezierSpline;
//!
//! let json = BezierSpline::new().to_json().unwrap();
//! assert_eq!(
//!     json,
//!     r#"{"points":[[1.0,0.0,0.0],[2.0,0.0,0.0],[3.0,0.0,0.0],[4.0,0.0,0.0]],"modes":["Free","Free"],"looped":false}"#
//! );
//! ```

use crate::data::{BezierSpline, SplineData};
use crate::error::SplineResult;

/// Trait for types that can be written as JSON spline data
pub trait ToJson {
    /// Compact JSON string
    fn to_json(&self) -> SplineResult<String>;

    /// Indented JSON string
    fn to_json_pretty(&self) -> SplineResult<String>;
}

impl ToJson for SplineData {
    fn to_json(&self) -> SplineResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    fn to_json_pretty(&self) -> SplineResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl ToJson for BezierSpline {
    fn to_json(&self) -> SplineResult<String> {
        self.to_data().to_json()
    }

    fn to_json_pretty(&self) -> SplineResult<String> {
        self.to_data().to_json_pretty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::parse::json::FromJson;
    use crate::{pt, ContinuityMode};

    #[test]
    fn test_export_then_parse_keeps_spline() {
        let mut spline = BezierSpline::new();
        spline.add_segment_with_offset(pt!(0.5, 1.25, -2));
        spline.add_segment();
        spline
            .set_continuity_mode(3, ContinuityMode::Mirrored)
            .unwrap();
        spline.set_looped(true);

        let json = spline.to_json_pretty().unwrap();
        assert!(json.contains("\"Mirrored\""));
        assert!(json.contains("\"looped\": true"));

        let parsed = BezierSpline::from_json(&json).unwrap();
        assert_eq!(parsed, spline);
    }

    #[test]
    fn test_serde_goes_through_spline_data() {
        let spline = BezierSpline::new();
        let via_serde = serde_json::to_string(&spline).unwrap();
        assert_eq!(via_serde, spline.to_json().unwrap());

        let back: BezierSpline = serde_json::from_str(&via_serde).unwrap();
        assert_eq!(back, spline);

        let invalid = r#"{"points":[[0,0,0]],"modes":["Free"],"looped":false}"#;
        assert!(serde_json::from_str::<BezierSpline>(invalid).is_err());
    }
}

//! Load a spline from its JSON point/mode list
//!
//! The document holds the flat control point list, one continuity mode per
//! anchor and an optional loop flag:
//!
//! ```rust
//! use bezier_spline::modules::parse::json::FromJson;
//! use bezier_spline::{BezierSpline, ContinuityMode};
//!
//! let data = r#"{
//!     "points": [[0, 0, 0], [1, 1, 0], [2, 1, 0], [3, 0, 0]],
//!     "modes": ["Free", "Mirrored"]
//! }"#;
//!
//! let spline = BezierSpline::from_json(data).unwrap();
//! assert_eq!(spline.segment_count(), 1);
//! assert_eq!(spline.continuity_mode(3).unwrap(), ContinuityMode::Mirrored);
//! ```

use crate::data::{BezierSpline, SplineConfig, SplineData};
use crate::error::SplineResult;

/// Parse from a JSON spline description
pub trait FromJson: Sized {
    fn from_json(data: &str) -> SplineResult<Self>;
}

impl FromJson for SplineData {
    fn from_json(data: &str) -> SplineResult<Self> {
        Ok(serde_json::from_str(data)?)
    }
}

impl FromJson for BezierSpline {
    fn from_json(data: &str) -> SplineResult<Self> {
        from_json_with_config(data, SplineConfig::default())
    }
}

/// Parse a spline and attach `config` instead of the default one
pub fn from_json_with_config(data: &str, config: SplineConfig) -> SplineResult<BezierSpline> {
    let data = SplineData::from_json(data)?;
    BezierSpline::from_data(data, config)
}

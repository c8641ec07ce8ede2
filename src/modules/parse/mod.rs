//! Parsing module for bezier splines
//!
//! Now supported format:
//! - JSON:
//!     in the form of `{"points": [[1.0, 0.0, 0.0], ...], "modes": ["Free", ...], "looped": false}`.
//!     See the `json` module for more detailed information on the JSON format.

pub mod json;

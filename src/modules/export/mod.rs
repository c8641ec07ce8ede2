//! Export bezier splines to various formats
//!
//! # Available Export Formats
//!
//! - [JSON](json/index.html) - the point/mode list read back by `parse::json`

pub mod json;

//! Algorithms operating on splines, plus import/export.

pub mod arclength;
pub mod continuity;
pub mod export;
pub mod parse;

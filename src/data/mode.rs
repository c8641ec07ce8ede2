//! Continuity modes governing how an anchor's two handles relate.

use serde::{Deserialize, Serialize};

/// Constraint applied to the handles on either side of an anchor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ContinuityMode {
    /// Handles move independently
    #[default]
    Free,
    /// Handles stay colinear through the anchor, lengths independent
    Aligned,
    /// Handles stay colinear through the anchor at equal distance
    Mirrored,
}

impl ContinuityMode {
    /// Whether this mode couples the two handles at all
    pub fn is_constrained(self) -> bool {
        !matches!(self, Self::Free)
    }
}

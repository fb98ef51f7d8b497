// src/core/override_rule.rs
//
// Hard floor/ceiling for albums whose rated tracks are unanimously extreme.
// Shrinkage and coverage weighting both pull toward the neutral prior, which
// would otherwise soften a uniformly loved or hated album.

use crate::config::RatingScale;
use crate::decision::OverrideKind;

/// Check whether every rated track sits on the same end of the scale.
///
/// `ratings` must come from all well-formed tracks, not just the
/// duration-eligible ones. An empty or mixed set never triggers.
pub fn detect_override(ratings: &[u8], scale: &RatingScale) -> Option<OverrideKind> {
    let first = *ratings.first()?;
    if !ratings.iter().all(|&r| r == first) {
        return None;
    }

    if first == scale.min {
        Some(OverrideKind::Floor)
    } else if first == scale.max {
        Some(OverrideKind::Ceiling)
    } else {
        None
    }
}

impl OverrideKind {
    /// Output-scale value forced by this override
    pub fn output_rating(&self, scale: &RatingScale) -> u8 {
        match self {
            OverrideKind::Floor => scale.output_min(),
            OverrideKind::Ceiling => scale.output_max(),
        }
    }
}

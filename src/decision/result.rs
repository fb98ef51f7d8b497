//! Engine decision types and their diagnostics

use serde::{Deserialize, Serialize};

/// What should happen to an album's stored rating
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum EngineDecision {
    /// Store this value (output scale, half-star units)
    SetRating(u8),
    /// Remove the stored rating
    ClearRating,
    /// Leave whatever is stored untouched
    NoChange,
}

impl EngineDecision {
    pub fn symbol(&self) -> &'static str {
        match self {
            EngineDecision::SetRating(_) => "★",
            EngineDecision::ClearRating => "✗",
            EngineDecision::NoChange => "—",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            EngineDecision::SetRating(_) => "Set rating",
            EngineDecision::ClearRating => "Clear rating",
            EngineDecision::NoChange => "No change",
        }
    }
}

/// Which extreme an unanimous album was forced to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverrideKind {
    /// Every rated track sits at the scale minimum
    Floor,
    /// Every rated track sits at the scale maximum
    Ceiling,
}

/// Data problems found while evaluating one album. None of these abort the run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TrackAnomaly {
    /// Track rating outside the input scale; the track is ignored
    RatingOutOfScale { track_id: String, rating: i64 },
    /// Negative track duration; the track is ignored
    NegativeDuration { track_id: String, duration_secs: i64 },
    /// The album's stored rating is outside the output scale; the album is left alone
    StoredRatingOutOfScale { rating: i64 },
}

impl std::fmt::Display for TrackAnomaly {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TrackAnomaly::RatingOutOfScale { track_id, rating } => {
                write!(f, "track {} has out-of-scale rating {}", track_id, rating)
            }
            TrackAnomaly::NegativeDuration { track_id, duration_secs } => {
                write!(f, "track {} has negative duration {}s", track_id, duration_secs)
            }
            TrackAnomaly::StoredRatingOutOfScale { rating } => {
                write!(f, "stored album rating {} is out of scale", rating)
            }
        }
    }
}

/// Advisory numbers behind a decision. Nothing here feeds back into control flow.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Diagnostics {
    /// Tracks passing the duration filter
    pub eligible_tracks: usize,
    /// Eligible tracks carrying a rating
    pub rated_eligible_tracks: usize,
    /// `rated_eligible_tracks / eligible_tracks`, 0 when nothing is eligible
    pub coverage: f64,
    /// Bayesian-shrunk mean, absent when the override fired
    pub shrunk: Option<f64>,
    /// Coverage-weighted score before quantization
    pub final_score: Option<f64>,
    pub override_kind: Option<OverrideKind>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub anomalies: Vec<TrackAnomaly>,
}

impl Diagnostics {
    pub fn override_triggered(&self) -> bool {
        self.override_kind.is_some()
    }
}

/// Engine output for one album
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    pub decision: EngineDecision,
    pub diagnostics: Diagnostics,
}

/// What the write-back layer has to do given a decision and the stored value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum WriteAction {
    Keep,
    Rate(u8),
    Unrate,
}

impl WriteAction {
    pub fn plan(decision: EngineDecision, current: Option<i64>) -> Self {
        match decision {
            EngineDecision::SetRating(value) if current == Some(i64::from(value)) => WriteAction::Keep,
            EngineDecision::SetRating(value) => WriteAction::Rate(value),
            EngineDecision::ClearRating if current.is_none() => WriteAction::Keep,
            EngineDecision::ClearRating => WriteAction::Unrate,
            EngineDecision::NoChange => WriteAction::Keep,
        }
    }

    pub fn is_write(&self) -> bool {
        !matches!(self, WriteAction::Keep)
    }

    /// Rating to hand to a [`crate::library::RatingStore`], if this action writes
    pub fn target(&self) -> Option<Option<u8>> {
        match self {
            WriteAction::Keep => None,
            WriteAction::Rate(value) => Some(Some(*value)),
            WriteAction::Unrate => Some(None),
        }
    }
}

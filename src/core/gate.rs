// src/core/gate.rs
//
// Decides whether an album has enough signal to be rated at all.

use crate::config::EngineConfig;
use crate::decision::EngineDecision;

/// Result of the coverage gate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gate {
    /// Enough of the album is rated; continue to quantization
    Open,
    /// Not enough signal; this is the final decision
    Closed(EngineDecision),
}

/// Apply the minimum-coverage gate.
///
/// The threshold is inclusive. An album with no rated eligible tracks never
/// passes, even with a zero threshold. When the gate closes, an existing
/// rating is only cleared if `unrate_on_low_coverage` is set.
pub fn coverage_gate(
    eligible_tracks: usize,
    rated_eligible_tracks: usize,
    coverage: f64,
    has_stored_rating: bool,
    config: &EngineConfig,
) -> Gate {
    if eligible_tracks > 0 && rated_eligible_tracks > 0 && coverage >= config.min_coverage {
        return Gate::Open;
    }

    if has_stored_rating && config.unrate_on_low_coverage {
        Gate::Closed(EngineDecision::ClearRating)
    } else {
        Gate::Closed(EngineDecision::NoChange)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(unrate: bool) -> EngineConfig {
        EngineConfig::builder()
            .unrate_on_low_coverage(unrate)
            .build()
            .unwrap()
    }

    #[test]
    fn test_threshold_is_inclusive() {
        assert_eq!(coverage_gate(10, 2, 2.0 / 10.0, false, &config(false)), Gate::Open);
        assert_eq!(coverage_gate(5, 1, 1.0 / 5.0, false, &config(false)), Gate::Open);
        assert_eq!(
            coverage_gate(10, 1, 1.0 / 10.0, false, &config(false)),
            Gate::Closed(EngineDecision::NoChange)
        );
    }

    #[test]
    fn test_no_eligible_tracks_closes() {
        let zero_threshold = EngineConfig::builder().min_coverage(0.0).build().unwrap();
        assert_eq!(
            coverage_gate(0, 0, 0.0, false, &zero_threshold),
            Gate::Closed(EngineDecision::NoChange)
        );
    }

    #[test]
    fn test_no_rated_tracks_closes_at_zero_threshold() {
        let zero_threshold = EngineConfig::builder()
            .min_coverage(0.0)
            .unrate_on_low_coverage(true)
            .build()
            .unwrap();
        assert_eq!(
            coverage_gate(5, 0, 0.0, false, &zero_threshold),
            Gate::Closed(EngineDecision::NoChange)
        );
        assert_eq!(
            coverage_gate(5, 0, 0.0, true, &zero_threshold),
            Gate::Closed(EngineDecision::ClearRating)
        );
        assert_eq!(coverage_gate(5, 1, 0.2, false, &zero_threshold), Gate::Open);
    }

    #[test]
    fn test_unrate_requires_flag_and_stored_rating() {
        assert_eq!(
            coverage_gate(10, 1, 0.1, true, &config(false)),
            Gate::Closed(EngineDecision::NoChange)
        );
        assert_eq!(
            coverage_gate(10, 1, 0.1, true, &config(true)),
            Gate::Closed(EngineDecision::ClearRating)
        );
        assert_eq!(
            coverage_gate(10, 1, 0.1, false, &config(true)),
            Gate::Closed(EngineDecision::NoChange)
        );
    }
}

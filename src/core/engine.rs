// src/core/engine.rs
//
// Album rating engine: override -> shrinkage -> coverage -> gate -> quantize.

use log::debug;

use super::coverage::{coverage_fraction, weight_by_coverage};
use super::eligibility::partition_tracks;
use super::gate::{coverage_gate, Gate};
use super::override_rule::detect_override;
use super::quantizer::quantize;
use super::shrinkage::shrunk_mean;
use crate::config::{ConfigError, EngineConfig};
use crate::decision::{Diagnostics, EngineDecision, Evaluation, TrackAnomaly};
use crate::library::Album;

/// Pure, stateless album rater bound to one validated configuration
#[derive(Debug, Clone)]
pub struct RatingEngine {
    config: EngineConfig,
}

impl RatingEngine {
    /// Validate the configuration and build an engine around it
    pub fn new(config: EngineConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Compute the decision for one album
    pub fn evaluate(&self, album: &Album) -> Evaluation {
        evaluate_album(album, &self.config)
    }
}

/// Compute the decision for one album under `config`.
///
/// `config` is assumed to be validated; [`RatingEngine`] guarantees that.
pub fn evaluate_album(album: &Album, config: &EngineConfig) -> Evaluation {
    let scale = config.scale;
    let views = partition_tracks(&album.tracks, config.min_track_duration_secs, &scale);
    let mut diagnostics = Diagnostics {
        eligible_tracks: views.eligible.len(),
        anomalies: views.anomalies.clone(),
        ..Default::default()
    };

    let eligible_ratings = views.eligible_ratings();
    diagnostics.rated_eligible_tracks = eligible_ratings.len();
    diagnostics.coverage = coverage_fraction(eligible_ratings.len(), views.eligible.len());

    if let Some(stored) = album.rating {
        if !scale.contains_output(stored) {
            diagnostics
                .anomalies
                .push(TrackAnomaly::StoredRatingOutOfScale { rating: stored });
            return Evaluation {
                decision: EngineDecision::NoChange,
                diagnostics,
            };
        }
    }

    // Unanimous extremes bypass shrinkage, coverage weighting, the gate and rounding
    if let Some(kind) = detect_override(&views.all_ratings(), &scale) {
        diagnostics.override_kind = Some(kind);
        let decision = EngineDecision::SetRating(kind.output_rating(&scale));
        debug!("Album {}: {:?} override -> {:?}", album.id, kind, decision);
        return Evaluation {
            decision,
            diagnostics,
        };
    }

    let prior = config.neutral_rating;
    let shrunk = shrunk_mean(&eligible_ratings, prior, config.confidence_weight);
    let final_score = weight_by_coverage(shrunk, prior, diagnostics.coverage);
    diagnostics.shrunk = Some(shrunk);
    diagnostics.final_score = Some(final_score);

    let decision = match coverage_gate(
        views.eligible.len(),
        diagnostics.rated_eligible_tracks,
        diagnostics.coverage,
        album.rating.is_some(),
        config,
    ) {
        Gate::Open => EngineDecision::SetRating(quantize(final_score, config)),
        Gate::Closed(decision) => decision,
    };

    debug!(
        "Album {}: {}/{} eligible rated, coverage {:.2}, shrunk {:.3}, final {:.3} -> {:?}",
        album.id,
        diagnostics.rated_eligible_tracks,
        diagnostics.eligible_tracks,
        diagnostics.coverage,
        shrunk,
        final_score,
        decision
    );

    Evaluation {
        decision,
        diagnostics,
    }
}

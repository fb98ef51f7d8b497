// src/config/engine.rs
//
// Tunable parameters for the album rating engine, validated once per run.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Discrete rating scales used by the engine.
///
/// Tracks are rated in whole stars (`min..=max`); albums are stored in
/// half-star units, so every input star maps to `factor` output units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatingScale {
    pub min: u8,
    pub max: u8,
    pub factor: u8,
}

/// 1..5 stars in, 2..10 half-star units out
pub const STAR_SCALE: RatingScale = RatingScale {
    min: 1,
    max: 5,
    factor: 2,
};

impl RatingScale {
    pub fn output_min(&self) -> u8 {
        self.min * self.factor
    }

    pub fn output_max(&self) -> u8 {
        self.max * self.factor
    }

    /// Whether a raw track rating lies on the input scale
    pub fn contains_input(&self, rating: i64) -> bool {
        rating >= i64::from(self.min) && rating <= i64::from(self.max)
    }

    /// Whether a stored album rating lies on the output scale
    pub fn contains_output(&self, rating: i64) -> bool {
        rating >= i64::from(self.output_min()) && rating <= i64::from(self.output_max())
    }

    /// Convert an output-scale value back to stars for display
    pub fn to_stars(&self, output: i64) -> f64 {
        output as f64 / f64::from(self.factor)
    }

    /// "3.5 stars", or "None" when unrated
    pub fn stars_label(&self, output: Option<i64>) -> String {
        match output {
            Some(value) => format!("{:.1} stars", self.to_stars(value)),
            None => "None".to_string(),
        }
    }
}

impl Default for RatingScale {
    fn default() -> Self {
        STAR_SCALE
    }
}

/// Configuration problems. Any of these halts the run before an album is processed.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("neutral rating {value} is outside the rating scale {min}..={max}")]
    NeutralOutOfScale { value: f64, min: u8, max: u8 },

    #[error("confidence weight must be a non-negative number, got {0}")]
    NegativeConfidenceWeight(f64),

    #[error("{field} must be within 0.0..=1.0, got {value}")]
    FractionOutOfRange { field: &'static str, value: f64 },

    #[error("minimum track duration must be non-negative, got {0}s")]
    NegativeDuration(i64),

    #[error("minimum track duration {0}s is too large")]
    DurationTooLarge(i64),
}

/// Validated engine configuration.
///
/// Construct through [`EngineConfigBuilder`]; the fields are public for
/// reading but a config that did not come out of `build()` is not guaranteed
/// to be in range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Prior used when there is little or no signal (input scale)
    pub neutral_rating: f64,
    /// Bayesian confidence weight `k` (higher = more conservative)
    pub confidence_weight: f64,
    /// Minimum fraction of eligible tracks that must be rated
    pub min_coverage: f64,
    /// Tracks shorter than this are ignored for coverage and shrinkage
    pub min_track_duration_secs: u32,
    /// Rounding threshold for albums below the neutral rating
    pub rounding_bias_bad: f64,
    /// Rounding threshold for albums at or above the neutral rating
    pub rounding_bias_good: f64,
    /// Clear an existing album rating when coverage drops below the minimum
    pub unrate_on_low_coverage: bool,
    pub scale: RatingScale,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            neutral_rating: 3.0,
            confidence_weight: 4.0,
            min_coverage: 0.2,
            min_track_duration_secs: 60,
            rounding_bias_bad: 0.65,
            rounding_bias_good: 0.45,
            unrate_on_low_coverage: false,
            scale: STAR_SCALE,
        }
    }
}

impl EngineConfig {
    pub fn builder() -> EngineConfigBuilder {
        EngineConfigBuilder::new()
    }

    /// Check every tunable against its documented range
    pub fn validate(&self) -> Result<(), ConfigError> {
        let scale = self.scale;
        let neutral = self.neutral_rating;
        if !neutral.is_finite() || neutral < f64::from(scale.min) || neutral > f64::from(scale.max) {
            return Err(ConfigError::NeutralOutOfScale {
                value: neutral,
                min: scale.min,
                max: scale.max,
            });
        }

        if !self.confidence_weight.is_finite() || self.confidence_weight < 0.0 {
            return Err(ConfigError::NegativeConfidenceWeight(self.confidence_weight));
        }

        check_fraction("min_coverage", self.min_coverage)?;
        check_fraction("rounding_bias_bad", self.rounding_bias_bad)?;
        check_fraction("rounding_bias_good", self.rounding_bias_good)?;

        Ok(())
    }
}

fn check_fraction(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::FractionOutOfRange { field, value })
    }
}

/// Fluent builder for [`EngineConfig`]
#[derive(Debug, Clone)]
pub struct EngineConfigBuilder {
    config: EngineConfig,
    min_track_duration_secs: i64,
}

impl EngineConfigBuilder {
    pub fn new() -> Self {
        let config = EngineConfig::default();
        let min_track_duration_secs = i64::from(config.min_track_duration_secs);
        Self {
            config,
            min_track_duration_secs,
        }
    }

    pub fn neutral_rating(mut self, rating: f64) -> Self {
        self.config.neutral_rating = rating;
        self
    }

    pub fn confidence_weight(mut self, weight: f64) -> Self {
        self.config.confidence_weight = weight;
        self
    }

    pub fn min_coverage(mut self, coverage: f64) -> Self {
        self.config.min_coverage = coverage;
        self
    }

    pub fn min_track_duration_secs(mut self, secs: i64) -> Self {
        self.min_track_duration_secs = secs;
        self
    }

    pub fn rounding_bias_bad(mut self, bias: f64) -> Self {
        self.config.rounding_bias_bad = bias;
        self
    }

    pub fn rounding_bias_good(mut self, bias: f64) -> Self {
        self.config.rounding_bias_good = bias;
        self
    }

    pub fn unrate_on_low_coverage(mut self, unrate: bool) -> Self {
        self.config.unrate_on_low_coverage = unrate;
        self
    }

    pub fn build(mut self) -> Result<EngineConfig, ConfigError> {
        let secs = self.min_track_duration_secs;
        if secs < 0 {
            return Err(ConfigError::NegativeDuration(secs));
        }
        self.config.min_track_duration_secs =
            u32::try_from(secs).map_err(|_| ConfigError::DurationTooLarge(secs))?;

        self.config.validate()?;
        Ok(self.config)
    }
}

impl Default for EngineConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

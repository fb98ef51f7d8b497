//! CLI argument parsing. Every engine tunable can also come from the environment.

use std::path::PathBuf;

use clap::builder::BoolishValueParser;
use clap::{ArgAction, Parser, ValueEnum};

use crate::config::{ConfigError, EngineConfig};

#[derive(Parser, Debug, Clone)]
#[command(name = "albumrater")]
#[command(version)]
#[command(about = "Derive album ratings from track ratings with Bayesian shrinkage")]
pub struct Args {
    /// Library snapshot file, or a directory searched recursively for *.json snapshots
    #[arg(short, long, env = "ALBUMRATER_INPUT")]
    pub input: PathBuf,

    /// Only process the library with this name
    #[arg(short, long, env = "PLEX_MUSIC_LIBRARY", default_value = "Music")]
    pub library: String,

    /// Log decisions without writing them back
    #[arg(
        long,
        env = "DRY_RUN",
        default_value = "true",
        action = ArgAction::Set,
        value_parser = BoolishValueParser::new()
    )]
    pub dry_run: bool,

    /// Neutral prior rating in stars
    #[arg(long, env = "NEUTRAL_RATING", default_value_t = 3.0)]
    pub neutral_rating: f64,

    /// Bayesian confidence weight (higher = more conservative)
    #[arg(long, env = "CONFIDENCE_WEIGHT", default_value_t = 4.0, allow_negative_numbers = true)]
    pub confidence_weight: f64,

    /// Minimum fraction of eligible tracks that must be rated (0.0-1.0)
    #[arg(long, env = "MIN_COVERAGE", default_value_t = 0.2, allow_negative_numbers = true)]
    pub min_coverage: f64,

    /// Tracks shorter than this many seconds are ignored (intros, skits)
    #[arg(long, env = "MIN_TRACK_DURATION", default_value_t = 60, allow_negative_numbers = true)]
    pub min_track_duration: i64,

    /// Round-up threshold for albums below the neutral rating
    #[arg(long, env = "ROUNDING_BIAS_BAD_ALBUM", default_value_t = 0.65)]
    pub rounding_bias_bad: f64,

    /// Round-up threshold for albums at or above the neutral rating
    #[arg(long, env = "ROUNDING_BIAS_GOOD_ALBUM", default_value_t = 0.45)]
    pub rounding_bias_good: f64,

    /// Remove ratings from albums that no longer meet the coverage minimum
    #[arg(
        long,
        env = "UNRATE_EMPTY_ALBUMS",
        default_value = "false",
        action = ArgAction::Set,
        value_parser = BoolishValueParser::new()
    )]
    pub unrate_empty_albums: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Show per-album diagnostics and debug logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Disable the progress bar
    #[arg(long)]
    pub no_progress: bool,
}

#[derive(ValueEnum, Clone, Debug, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable text output
    #[default]
    Text,
    /// JSON run report
    Json,
}

impl Args {
    /// Build and validate the engine configuration from the parsed tunables
    pub fn engine_config(&self) -> Result<EngineConfig, ConfigError> {
        EngineConfig::builder()
            .neutral_rating(self.neutral_rating)
            .confidence_weight(self.confidence_weight)
            .min_coverage(self.min_coverage)
            .min_track_duration_secs(self.min_track_duration)
            .rounding_bias_bad(self.rounding_bias_bad)
            .rounding_bias_good(self.rounding_bias_good)
            .unrate_on_low_coverage(self.unrate_empty_albums)
            .build()
    }
}

pub fn parse_args() -> Args {
    Args::parse()
}

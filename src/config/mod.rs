//! Configuration module for AlbumRater

mod engine;

pub use engine::{ConfigError, EngineConfig, EngineConfigBuilder, RatingScale, STAR_SCALE};

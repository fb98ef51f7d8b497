//! Decision module for AlbumRater

mod result;

pub use result::{Diagnostics, EngineDecision, Evaluation, OverrideKind, TrackAnomaly, WriteAction};

//! Core rating engine modules

pub mod batch;
pub mod coverage;
pub mod eligibility;
pub mod engine;
pub mod gate;
pub mod override_rule;
pub mod quantizer;
pub mod shrinkage;

pub use batch::{apply_reports, evaluate_library, update_line, AlbumReport, RunSummary};
pub use eligibility::{partition_tracks, TrackViews};
pub use engine::{evaluate_album, RatingEngine};
pub use gate::Gate;

//! AlbumRater - Confidence-aware album ratings from track ratings
//!
//! Recomputes an album's score from the ratings of its tracks and decides
//! whether the stored album rating should be set, changed, or cleared.
//!
//! ## Algorithm
//!
//! 1. **Eligibility**: tracks shorter than the minimum duration (intros,
//!    skits) are ignored for the math; unknown durations count as eligible.
//! 2. **Override**: if every rated track (of any length) is 1★ or every one
//!    is 5★, the album is forced to that extreme.
//! 3. **Shrinkage**: `(n·mean + k·C) / (n + k)` pulls small samples toward
//!    the neutral prior `C`.
//! 4. **Coverage weighting**: the shrunk value is blended toward `C` again by
//!    the fraction of eligible tracks that are rated.
//! 5. **Gate**: below the minimum coverage nothing is rated (and, optionally,
//!    an existing rating is cleared).
//! 6. **Asymmetric rounding**: the 1-5★ score becomes half-star units (2-10),
//!    rounding up more reluctantly below neutral than at/above it.
//!
//! ## Module Structure
//!
//! - `core` - Rating engine and parallel batch runner
//! - `cli` - Command-line interface
//! - `config` - Engine configuration and validation
//! - `decision` - Decision and diagnostic types
//! - `library` - Library data model and snapshot I/O
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use albumrater::{Album, EngineConfig, RatingEngine, Track};
//!
//! let engine = RatingEngine::new(EngineConfig::default())?;
//! let album = Album::new("a1").with_tracks(vec![
//!     Track::new("t1").with_duration(210).with_rating(4),
//!     Track::new("t2").with_duration(185),
//! ]);
//!
//! let eval = engine.evaluate(&album);
//! println!("{:?} (coverage {:.0}%)", eval.decision, eval.diagnostics.coverage * 100.0);
//! ```

// Rating engine
pub mod core;

// Command-line interface
pub mod cli;

// Configuration
pub mod config;

// Decision types
pub mod decision;

// Library model and snapshots
pub mod library;

// Re-export commonly used types at crate root for convenience
pub use crate::config::{ConfigError, EngineConfig, EngineConfigBuilder, RatingScale, STAR_SCALE};
pub use crate::core::{evaluate_album, AlbumReport, RatingEngine, RunSummary};
pub use crate::decision::{Diagnostics, EngineDecision, Evaluation, OverrideKind, TrackAnomaly, WriteAction};
pub use crate::library::{Album, Library, LibraryError, RatingStore, Track};

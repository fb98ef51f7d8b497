//! Library data model and snapshot I/O

mod model;
mod snapshot;

pub use model::{Album, Library, Track};
pub use snapshot::{collect_snapshot_files, load_snapshot, save_snapshot, LibraryError, RatingStore};

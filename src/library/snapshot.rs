//! JSON library snapshots: discovery, loading, and write-back

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use thiserror::Error;
use walkdir::WalkDir;

use super::model::Library;

/// Errors raised while reading or writing library snapshots
#[derive(Error, Debug)]
pub enum LibraryError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid snapshot {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Album not found: {0}")]
    AlbumNotFound(String),
}

/// Write-back seam for computed album ratings.
///
/// `None` clears the stored rating.
pub trait RatingStore {
    fn set_album_rating(&mut self, album_id: &str, rating: Option<u8>) -> Result<(), LibraryError>;
}

impl RatingStore for Library {
    fn set_album_rating(&mut self, album_id: &str, rating: Option<u8>) -> Result<(), LibraryError> {
        let album = self
            .albums
            .iter_mut()
            .find(|a| a.id == album_id)
            .ok_or_else(|| LibraryError::AlbumNotFound(album_id.to_string()))?;
        album.rating = rating.map(i64::from);
        Ok(())
    }
}

/// Collect snapshot files from a file or directory path
pub fn collect_snapshot_files(path: &Path) -> Vec<PathBuf> {
    let mut files = Vec::new();

    if path.is_file() {
        files.push(path.to_path_buf());
    } else if path.is_dir() {
        for entry in WalkDir::new(path)
            .follow_links(true)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();
            let is_json = path
                .extension()
                .and_then(|ext| ext.to_str())
                .map(|ext| ext.eq_ignore_ascii_case("json"))
                .unwrap_or(false);
            if path.is_file() && is_json {
                files.push(path.to_path_buf());
            }
        }
    }

    files
}

pub fn load_snapshot(path: &Path) -> Result<Library, LibraryError> {
    let raw = fs::read_to_string(path).map_err(|source| LibraryError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let library: Library = serde_json::from_str(&raw).map_err(|source| LibraryError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(
        "Loaded library '{}' with {} album(s) from {}",
        library.name,
        library.albums.len(),
        path.display()
    );
    Ok(library)
}

/// Persist a snapshot, replacing the target only once the new file is complete
pub fn save_snapshot(library: &Library, path: &Path) -> Result<(), LibraryError> {
    let write_err = |source| LibraryError::Write {
        path: path.to_path_buf(),
        source,
    };

    let json = serde_json::to_string_pretty(library).map_err(|source| LibraryError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, json).map_err(write_err)?;
    fs::rename(&tmp, path).map_err(write_err)?;
    Ok(())
}

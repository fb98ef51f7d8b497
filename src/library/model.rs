// src/library/model.rs
//
// Music library data model as supplied by the media server snapshot.

use serde::{Deserialize, Serialize};

/// A single track. Values are kept raw so that malformed entries can be
/// reported per track instead of failing the whole snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Track {
    pub id: String,
    #[serde(default)]
    pub title: String,
    /// Duration in whole seconds, if known
    #[serde(default)]
    pub duration_secs: Option<i64>,
    /// Rating in whole stars, if rated
    #[serde(default)]
    pub rating: Option<i64>,
}

impl Track {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: String::new(),
            duration_secs: None,
            rating: None,
        }
    }

    pub fn with_duration(mut self, secs: i64) -> Self {
        self.duration_secs = Some(secs);
        self
    }

    pub fn with_rating(mut self, rating: i64) -> Self {
        self.rating = Some(rating);
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }
}

/// An album and the rating currently stored for it (half-star units)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Album {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub artist: String,
    #[serde(default)]
    pub rating: Option<i64>,
    #[serde(default)]
    pub tracks: Vec<Track>,
}

impl Album {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: String::new(),
            artist: String::new(),
            rating: None,
            tracks: Vec::new(),
        }
    }

    pub fn with_rating(mut self, rating: i64) -> Self {
        self.rating = Some(rating);
        self
    }

    pub fn with_tracks(mut self, tracks: Vec<Track>) -> Self {
        self.tracks = tracks;
        self
    }

    pub fn with_title(mut self, artist: impl Into<String>, title: impl Into<String>) -> Self {
        self.artist = artist.into();
        self.title = title.into();
        self
    }

    /// "Artist - Title", falling back to the id when untitled
    pub fn display_name(&self) -> String {
        match (self.artist.is_empty(), self.title.is_empty()) {
            (_, true) => self.id.clone(),
            (true, false) => self.title.clone(),
            (false, false) => format!("{} - {}", self.artist, self.title),
        }
    }
}

/// A named music library
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Library {
    pub name: String,
    #[serde(default)]
    pub albums: Vec<Album>,
}

impl Library {
    pub fn new(name: impl Into<String>, albums: Vec<Album>) -> Self {
        Self {
            name: name.into(),
            albums,
        }
    }
}

// src/core/eligibility.rs
//
// Splits an album's tracks into the views used by the rest of the engine.

use crate::config::RatingScale;
use crate::decision::TrackAnomaly;
use crate::library::Track;

/// Two views over the well-formed tracks of one album.
///
/// `eligible` drops tracks known to be shorter than the minimum duration
/// (intros, skits, interludes). `all` keeps every well-formed track and is
/// only consulted by the override check.
#[derive(Debug, Default)]
pub struct TrackViews<'a> {
    pub eligible: Vec<&'a Track>,
    pub all: Vec<&'a Track>,
    pub anomalies: Vec<TrackAnomaly>,
}

impl<'a> TrackViews<'a> {
    /// Ratings of the eligible tracks that have one
    pub fn eligible_ratings(&self) -> Vec<u8> {
        rated_values(&self.eligible)
    }

    /// Ratings of every well-formed rated track, regardless of duration
    pub fn all_ratings(&self) -> Vec<u8> {
        rated_values(&self.all)
    }
}

/// Partition tracks by duration eligibility, setting malformed ones aside
pub fn partition_tracks<'a>(
    tracks: &'a [Track],
    min_duration_secs: u32,
    scale: &RatingScale,
) -> TrackViews<'a> {
    let mut views = TrackViews::default();

    for track in tracks {
        if let Some(anomaly) = check_track(track, scale) {
            views.anomalies.push(anomaly);
            continue;
        }

        views.all.push(track);
        if is_duration_eligible(track, min_duration_secs) {
            views.eligible.push(track);
        }
    }

    views
}

/// Unknown durations count as eligible: they cannot be confirmed to be short.
pub fn is_duration_eligible(track: &Track, min_duration_secs: u32) -> bool {
    match track.duration_secs {
        Some(secs) => secs >= i64::from(min_duration_secs),
        None => true,
    }
}

fn check_track(track: &Track, scale: &RatingScale) -> Option<TrackAnomaly> {
    if let Some(rating) = track.rating {
        if !scale.contains_input(rating) {
            return Some(TrackAnomaly::RatingOutOfScale {
                track_id: track.id.clone(),
                rating,
            });
        }
    }
    if let Some(secs) = track.duration_secs {
        if secs < 0 {
            return Some(TrackAnomaly::NegativeDuration {
                track_id: track.id.clone(),
                duration_secs: secs,
            });
        }
    }
    None
}

fn rated_values(tracks: &[&Track]) -> Vec<u8> {
    tracks
        .iter()
        .filter_map(|t| t.rating)
        .filter_map(|r| u8::try_from(r).ok())
        .collect()
}

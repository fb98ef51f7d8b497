// src/core/batch.rs
//
// Library-wide evaluation. Albums are independent, so they are rated in
// parallel; write-back runs afterwards, sequentially, against a RatingStore.

use indicatif::{ParallelProgressIterator, ProgressBar};
use log::{error, info, warn};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use super::engine::RatingEngine;
use crate::config::RatingScale;
use crate::decision::{Evaluation, WriteAction};
use crate::library::{Album, Library, RatingStore};

/// Per-album result of a run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlbumReport {
    pub album_id: String,
    pub name: String,
    pub current_rating: Option<i64>,
    pub evaluation: Evaluation,
    pub action: WriteAction,
}

impl AlbumReport {
    pub fn from_evaluation(album: &Album, evaluation: Evaluation) -> Self {
        let action = WriteAction::plan(evaluation.decision, album.rating);
        Self {
            album_id: album.id.clone(),
            name: album.display_name(),
            current_rating: album.rating,
            evaluation,
            action,
        }
    }
}

/// "Artist - Title (rating: 3.0 stars → 3.5 stars)"
pub fn update_line(report: &AlbumReport, target: Option<u8>, scale: &RatingScale) -> String {
    format!(
        "{} (rating: {} → {})",
        report.name,
        scale.stars_label(report.current_rating),
        scale.stars_label(target.map(i64::from))
    )
}

/// Counters for the end-of-run summary
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    /// Albums whose stored rating should change
    pub evaluated: usize,
    /// Albums actually written (always 0 in dry run)
    pub updated: usize,
    /// Albums left as they are
    pub skipped: usize,
    /// Writes that failed
    pub failed: usize,
    pub overrides: usize,
    pub anomalies: usize,
}

impl RunSummary {
    pub fn merge(&mut self, other: &RunSummary) {
        self.evaluated += other.evaluated;
        self.updated += other.updated;
        self.skipped += other.skipped;
        self.failed += other.failed;
        self.overrides += other.overrides;
        self.anomalies += other.anomalies;
    }
}

/// Evaluate every album of a library. Output order matches the library.
pub fn evaluate_library(
    library: &Library,
    engine: &RatingEngine,
    progress: Option<ProgressBar>,
) -> Vec<AlbumReport> {
    let rate = |album: &Album| AlbumReport::from_evaluation(album, engine.evaluate(album));

    match progress {
        Some(pb) => library.albums.par_iter().progress_with(pb).map(rate).collect(),
        None => library.albums.par_iter().map(rate).collect(),
    }
}

/// Apply planned actions to `store`, or only log them when `dry_run` is set.
///
/// A failed write is logged and counted; it does not stop the remaining albums.
pub fn apply_reports<S: RatingStore>(
    reports: &[AlbumReport],
    store: &mut S,
    scale: &RatingScale,
    dry_run: bool,
) -> RunSummary {
    let mut summary = RunSummary::default();

    for report in reports {
        let diagnostics = &report.evaluation.diagnostics;
        if diagnostics.override_triggered() {
            summary.overrides += 1;
        }
        summary.anomalies += diagnostics.anomalies.len();
        for anomaly in &diagnostics.anomalies {
            warn!("{}: {}", report.name, anomaly);
        }

        let target = match report.action.target() {
            Some(target) => target,
            None => {
                summary.skipped += 1;
                continue;
            }
        };
        summary.evaluated += 1;
        info!("Album update needed: {}", update_line(report, target, scale));

        if dry_run {
            match target {
                Some(_) => info!("[DRY RUN] {}: album rating not updated", report.name),
                None => info!("[DRY RUN] {}: album rating not removed", report.name),
            }
            continue;
        }

        match store.set_album_rating(&report.album_id, target) {
            Ok(()) => {
                summary.updated += 1;
                match target {
                    Some(_) => info!("Successfully rated album {}", report.name),
                    None => info!("Successfully unrated album {}", report.name),
                }
            }
            Err(e) => {
                summary.failed += 1;
                error!("Failed to update album {}: {}", report.name, e);
            }
        }
    }

    summary
}

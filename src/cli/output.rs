//! Output formatting for CLI results

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use colorful::Colorful;
use serde::Serialize;
use uuid::Uuid;

use crate::config::{EngineConfig, RatingScale};
use crate::core::{AlbumReport, RunSummary};
use crate::decision::WriteAction;

/// Results for one library snapshot
#[derive(Debug, Clone, Serialize)]
pub struct LibraryRun {
    pub name: String,
    pub path: PathBuf,
    pub albums: Vec<AlbumReport>,
    pub summary: RunSummary,
}

/// Full run report, serialized for `--format json`
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub run_id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub dry_run: bool,
    pub config: EngineConfig,
    pub libraries: Vec<LibraryRun>,
    pub summary: RunSummary,
}

impl RunReport {
    pub fn new(config: EngineConfig, dry_run: bool) -> Self {
        Self {
            run_id: Uuid::new_v4(),
            generated_at: Utc::now(),
            dry_run,
            config,
            libraries: Vec::new(),
            summary: RunSummary::default(),
        }
    }

    pub fn push(&mut self, run: LibraryRun) {
        self.summary.merge(&run.summary);
        self.libraries.push(run);
    }
}

/// Format one album for terminal output. Albums that need no write are
/// only shown in verbose mode.
pub fn format_album(report: &AlbumReport, scale: &RatingScale, verbose: bool) -> Option<String> {
    if !report.action.is_write() && !verbose {
        return None;
    }

    let eval = &report.evaluation;
    let diag = &eval.diagnostics;
    let mut output = String::new();

    let header = format!("{} {}", eval.decision.symbol(), report.name);
    let header = match report.action {
        WriteAction::Rate(_) => header.green().to_string(),
        WriteAction::Unrate => header.red().to_string(),
        WriteAction::Keep => header.dim().to_string(),
    };
    output.push_str(&header);
    output.push('\n');

    let new_rating = match report.action {
        WriteAction::Rate(value) => scale.stars_label(Some(i64::from(value))),
        WriteAction::Unrate => "None".to_string(),
        WriteAction::Keep => scale.stars_label(report.current_rating),
    };
    output.push_str(&format!(
        "  Rated tracks : {}/{}\n",
        diag.rated_eligible_tracks, diag.eligible_tracks
    ));
    output.push_str(&format!("  New rating   : {}\n", new_rating));
    output.push_str(&format!("  Old rating   : {}\n", scale.stars_label(report.current_rating)));

    if verbose {
        output.push_str(&format!("  Decision     : {}\n", eval.decision.description()));
        output.push_str(&format!("  Coverage     : {:.0}%\n", diag.coverage * 100.0));
        if let Some(shrunk) = diag.shrunk {
            output.push_str(&format!("  Shrunk       : {:.3}\n", shrunk));
        }
        if let Some(final_score) = diag.final_score {
            output.push_str(&format!("  Final score  : {:.3}\n", final_score));
        }
        if let Some(kind) = diag.override_kind {
            output.push_str(&format!("  Override     : {:?}\n", kind).yellow().to_string());
        }
        for anomaly in &diag.anomalies {
            output.push_str(&format!("  Anomaly      : {}\n", anomaly).yellow().to_string());
        }
    }

    Some(output)
}

pub fn format_summary(summary: &RunSummary, dry_run: bool) -> String {
    let mut output = String::new();
    output.push_str(&"-".repeat(60));
    output.push('\n');
    output.push_str(&format!("Albums evaluated : {}\n", summary.evaluated));
    output.push_str(&format!("Albums updated   : {}\n", summary.updated));
    output.push_str(&format!("Albums skipped   : {}\n", summary.skipped));
    if summary.failed > 0 {
        output.push_str(&format!("Albums failed    : {}\n", summary.failed).red().to_string());
    }
    if dry_run {
        output.push_str(&"Dry run: no ratings were written\n".yellow().to_string());
    }
    output
}

/// Print a library run to stdout
pub fn print_report(run: &LibraryRun, scale: &RatingScale, verbose: bool) {
    println!("{}", format!("Library: {} ({})", run.name, run.path.display()).cyan());
    for album in &run.albums {
        if let Some(text) = format_album(album, scale, verbose) {
            println!("{}", text);
        }
    }
}

pub fn format_json(report: &RunReport) -> serde_json::Result<String> {
    serde_json::to_string_pretty(report)
}

pub fn print_json(report: &RunReport) -> serde_json::Result<()> {
    println!("{}", format_json(report)?);
    Ok(())
}

// src/main.rs
use std::path::Path;

use anyhow::{Context, Result};
use colorful::Colorful;
use indicatif::{ProgressBar, ProgressStyle};
use log::{info, warn};

use albumrater::cli::{self, Args, LibraryRun, OutputFormat, RunReport};
use albumrater::config::EngineConfig;
use albumrater::core::{apply_reports, evaluate_library, RatingEngine};
use albumrater::library::{collect_snapshot_files, load_snapshot, save_snapshot};

fn main() -> Result<()> {
    let args = cli::parse_args();

    let level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let config = args.engine_config().context("Invalid configuration")?;
    let engine = RatingEngine::new(config).context("Invalid configuration")?;
    log_configuration(&args, engine.config());

    let snapshots = collect_snapshot_files(&args.input);
    if snapshots.is_empty() {
        if args.format == OutputFormat::Text {
            println!("{}", "No library snapshots found!".red());
        }
        warn!("No library snapshots found under {}", args.input.display());
        return Ok(());
    }

    let mut report = RunReport::new(engine.config().clone(), args.dry_run);
    for path in &snapshots {
        if let Some(run) = process_snapshot(path, &engine, &args)? {
            if args.format == OutputFormat::Text {
                cli::print_report(&run, &engine.config().scale, args.verbose);
            }
            report.push(run);
        }
    }

    log_summary(&report);
    match args.format {
        OutputFormat::Text => print!("{}", cli::format_summary(&report.summary, args.dry_run)),
        OutputFormat::Json => cli::print_json(&report).context("Failed to serialize run report")?,
    }

    Ok(())
}

fn process_snapshot(path: &Path, engine: &RatingEngine, args: &Args) -> Result<Option<LibraryRun>> {
    let mut library = load_snapshot(path)
        .with_context(|| format!("Failed to load library snapshot {}", path.display()))?;

    if library.name != args.library {
        warn!(
            "Skipping library '{}' from {} (looking for '{}')",
            library.name,
            path.display(),
            args.library
        );
        return Ok(None);
    }

    info!("Evaluating {} album(s) in '{}'", library.albums.len(), library.name);

    let progress = if args.no_progress || args.format == OutputFormat::Json {
        None
    } else {
        Some(progress_bar(library.albums.len() as u64)?)
    };
    let albums = evaluate_library(&library, engine, progress.clone());
    if let Some(pb) = progress {
        pb.finish_and_clear();
    }

    let summary = apply_reports(&albums, &mut library, &engine.config().scale, args.dry_run);
    if !args.dry_run && summary.updated > 0 {
        save_snapshot(&library, path)
            .with_context(|| format!("Failed to write ratings back to {}", path.display()))?;
        info!("Wrote {} rating change(s) to {}", summary.updated, path.display());
    }

    Ok(Some(LibraryRun {
        name: library.name,
        path: path.to_path_buf(),
        albums,
        summary,
    }))
}

fn progress_bar(len: u64) -> Result<ProgressBar> {
    let pb = ProgressBar::new(len);
    pb.set_style(
        ProgressStyle::with_template("{spinner} [{bar:40}] {pos}/{len} albums")?
            .progress_chars("=> "),
    );
    Ok(pb)
}

fn log_configuration(args: &Args, config: &EngineConfig) {
    info!("Starting album auto-rater");
    info!("Library              : {}", args.library);
    info!("Dry run              : {}", args.dry_run);
    info!("Neutral rating       : {:.2}", config.neutral_rating);
    info!("Confidence weight    : {}", config.confidence_weight);
    info!("Min coverage         : {:.0}%", config.min_coverage * 100.0);
    info!("Min track duration   : {}s", config.min_track_duration_secs);
    info!(
        "Rounding bias        : {:.2} below neutral, {:.2} at/above",
        config.rounding_bias_bad, config.rounding_bias_good
    );
    info!("Unrate empty albums  : {}", config.unrate_on_low_coverage);
}

fn log_summary(report: &RunReport) {
    let summary = &report.summary;
    info!("{}", "-".repeat(60));
    info!("Albums evaluated : {}", summary.evaluated);
    info!("Albums updated   : {}", summary.updated);
    info!("Albums skipped   : {}", summary.skipped);
    if summary.overrides > 0 || summary.anomalies > 0 {
        info!(
            "Overrides        : {} | Data anomalies: {}",
            summary.overrides, summary.anomalies
        );
    }
    info!("Album auto-rating complete.");
}

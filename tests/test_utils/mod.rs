#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use albumrater::{Album, Library, Track};

/// Environment variables the binary reads; cleared so the host shell can't leak in
const ENV_VARS: &[&str] = &[
    "ALBUMRATER_INPUT",
    "PLEX_MUSIC_LIBRARY",
    "DRY_RUN",
    "NEUTRAL_RATING",
    "CONFIDENCE_WEIGHT",
    "MIN_COVERAGE",
    "MIN_TRACK_DURATION",
    "ROUNDING_BIAS_BAD_ALBUM",
    "ROUNDING_BIAS_GOOD_ALBUM",
    "UNRATE_EMPTY_ALBUMS",
];

pub fn albumrater() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_albumrater"));
    for var in ENV_VARS {
        cmd.env_remove(var);
    }
    cmd.env("RUST_LOG", "warn");
    cmd
}

pub fn run_json(input: &Path, extra: &[&str]) -> Output {
    albumrater()
        .arg("--input")
        .arg(input)
        .args(["--format", "json", "--no-progress"])
        .args(extra)
        .output()
        .expect("Failed to execute albumrater")
}

pub fn stdout_json(output: &Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).expect("stdout is not a JSON report")
}

/// Album with `ratings` on full-length tracks plus `unrated` full-length unrated tracks
pub fn album(id: &str, ratings: &[i64], unrated: usize) -> Album {
    let mut tracks: Vec<Track> = ratings
        .iter()
        .enumerate()
        .map(|(i, &r)| Track::new(format!("{}-r{}", id, i)).with_duration(200).with_rating(r))
        .collect();
    tracks.extend((0..unrated).map(|i| Track::new(format!("{}-u{}", id, i)).with_duration(200)));
    Album::new(id).with_title("Artist", id).with_tracks(tracks)
}

pub fn write_library(dir: &Path, file: &str, library: &Library) -> PathBuf {
    let path = dir.join(file);
    fs::write(&path, serde_json::to_string_pretty(library).unwrap()).unwrap();
    path
}

pub fn read_library(path: &Path) -> Library {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

// src/cli/mod.rs
//
// Command-line interface module

mod args;
mod output;

pub use args::{parse_args, Args, OutputFormat};
pub use output::{
    format_album, format_json, format_summary, print_json, print_report, LibraryRun, RunReport,
};

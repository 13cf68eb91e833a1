//! Command-line configuration.

use clap::Parser;
use std::path::PathBuf;

/// Interactive min/avg/max report over a PurpleAir particulate export.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// CSV file read by the "Load Data" menu option
    ///
    /// Columns 1, 4 and 5 must hold the zip code, time of day and
    /// concentration; the first row is treated as a header.
    #[arg(
        short,
        long,
        value_name = "FILE",
        default_value = "purple_air.csv",
        env = "AIR_REPORT_FILE"
    )]
    pub file: PathBuf,

    /// Start with a small built-in sample dataset already loaded
    #[arg(long)]
    pub sample: bool,

    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    pub fn log_level(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else {
            "warn"
        }
    }
}

//! CLI configuration
//!
//! Command-line arguments for the batch simulator binary.

use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments for the smart home batch simulator
#[derive(Debug, Clone, Parser)]
#[command(
    name = "smart-home-sim",
    about = "Simulates smart home devices over a virtual timeline driven by a command file"
)]
pub struct CliArgs {
    /// Path to the command input file
    pub input: PathBuf,

    /// Path the result lines are written to (overwritten on every run)
    pub output: PathBuf,

    /// Mirror every output line to stdout as well
    #[arg(long)]
    pub echo: bool,

    /// Write a JSON rendition of the run summary and final report to this path
    #[arg(long, value_name = "PATH")]
    pub json_report: Option<PathBuf>,

    /// Enable verbose logging (INFO level)
    #[arg(short, long)]
    pub verbose: bool,

    /// Enable debug logging (DEBUG level, overrides --verbose)
    #[arg(long)]
    pub debug: bool,

    /// Also write logs to daily-rolled files in this directory
    #[arg(long, value_name = "DIR")]
    pub log_dir: Option<PathBuf>,
}

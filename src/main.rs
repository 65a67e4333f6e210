// Smart Home Simulator - Main Entry Point
//
// Runs a batch of commands against a fresh engine:
//
// ```console
// $ cargo build --release
// $ ./target/release/smart-home-sim input.txt output.txt
// ```
//
// Add `--echo` to mirror the transcript to stdout, or `--json-report FILE`
// to also export a machine-readable run summary.

use anyhow::Context;
use clap::Parser;
use smart_home_sim::{BatchRunner, CliArgs, LoggingConfig};
use std::fs;
use std::process;
use tracing::info;

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();

    let logging_result = if args.debug {
        LoggingConfig::init_debug()
    } else if args.verbose {
        LoggingConfig::init_verbose()
    } else if let Some(log_dir) = &args.log_dir {
        LoggingConfig::new().with_file_logging(log_dir).init()
    } else {
        // Default: minimal logging, batch output is the product
        LoggingConfig::new().init()
    };
    if let Err(e) = logging_result {
        eprintln!("Failed to initialize logging: {}", e);
        process::exit(1);
    }

    info!("Starting Smart Home Simulator");

    let runner = BatchRunner::new().with_echo(args.echo);
    let summary = runner
        .run(&args.input, &args.output)
        .with_context(|| format!("running batch {}", args.input.display()))?;

    if let Some(path) = &args.json_report {
        let json = serde_json::to_string_pretty(&summary)
            .context("serializing the run summary")?;
        fs::write(path, json)
            .with_context(|| format!("writing run summary to {}", path.display()))?;
    }

    info!(
        commands = summary.commands,
        errors = summary.errors,
        "Smart Home Simulator completed"
    );
    Ok(())
}

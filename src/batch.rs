//! Batch runner
//!
//! Drives a whole simulation run from an input file to an output file. Each
//! non-blank input line is echoed as `COMMAND: <line>`, then parsed and
//! executed; parse and engine errors become single output lines and the run
//! continues. Only a broken first command terminates the run early. The
//! output is collected in memory and written once at the end.

use crate::command::parse_line;
use crate::report::ZReport;
use crate::simulation::{Outcome, SmartHome};
use crate::types::Timestamp;
use serde::Serialize;
use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::{debug, info, warn};

const FIRST_COMMAND_FATAL: &str =
    "ERROR: First command must be set initial time! Program is going to terminate!";
const INITIAL_DATE_FATAL: &str =
    "ERROR: Format of the initial date is wrong! Program is going to terminate!";

/// Errors surfacing from the batch runner itself (the simulation never
/// aborts a run; only I/O can)
#[derive(Debug, Error)]
pub enum BatchError {
    /// Reading the input or writing the output failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Machine-readable summary of one batch run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunSummary {
    /// Number of command lines processed
    pub commands: usize,
    /// Number of error lines produced
    pub errors: usize,
    /// Whether a broken first command terminated the run
    pub terminated_early: bool,
    /// The device state at the end of the run, absent on early termination
    pub final_report: Option<ZReport>,
}

/// Runs batch files through a fresh engine
#[derive(Debug, Clone, Default)]
pub struct BatchRunner {
    echo: bool,
}

impl BatchRunner {
    /// Create a runner that only writes the output file.
    pub fn new() -> Self {
        Self::default()
    }

    /// Also echo output lines to stdout.
    pub fn with_echo(mut self, echo: bool) -> Self {
        self.echo = echo;
        self
    }

    /// Run the batch in `input`, writing the transcript to `output`.
    pub fn run(&self, input: &Path, output: &Path) -> Result<RunSummary, BatchError> {
        info!(input = %input.display(), output = %output.display(), "batch run starting");
        let text = fs::read_to_string(input)?;
        let (lines, summary) = self.process(&text);

        let mut transcript = lines.join("\n");
        transcript.push('\n');
        fs::write(output, transcript)?;

        if self.echo {
            for line in &lines {
                println!("{line}");
            }
        }
        info!(commands = summary.commands, errors = summary.errors, "batch run finished");
        Ok(summary)
    }

    /// Execute every command line in `text` against a fresh engine and
    /// return the transcript lines plus the run summary.
    pub fn process(&self, text: &str) -> (Vec<String>, RunSummary) {
        let commands: Vec<&str> = text
            .lines()
            .map(str::trim_end)
            .filter(|line| !line.is_empty())
            .collect();

        let mut out = Vec::new();
        let mut summary = RunSummary {
            commands: 0,
            errors: 0,
            terminated_early: false,
            final_report: None,
        };
        let mut home = SmartHome::new();

        // The first command must assign the initial time; anything else is
        // one of the two fatal conditions.
        let Some((&first, rest)) = commands.split_first() else {
            out.push(FIRST_COMMAND_FATAL.to_string());
            summary.errors = 1;
            summary.terminated_early = true;
            return (out, summary);
        };
        out.push(format!("COMMAND: {first}"));
        summary.commands = 1;
        let tokens: Vec<&str> = first.split('\t').collect();
        if tokens[0] != "SetInitialTime" || tokens.len() != 2 {
            warn!(line = first, "first command is not SetInitialTime, terminating");
            out.push(FIRST_COMMAND_FATAL.to_string());
            summary.errors = 1;
            summary.terminated_early = true;
            return (out, summary);
        }
        let Ok(start) = Timestamp::parse(tokens[1]) else {
            warn!(line = first, "initial time does not parse, terminating");
            out.push(INITIAL_DATE_FATAL.to_string());
            summary.errors = 1;
            summary.terminated_early = true;
            return (out, summary);
        };
        // Infallible on a fresh engine.
        if home.set_initial_time(start).is_ok() {
            out.push(format!("SUCCESS: Time has been set to {start}!"));
        }

        let mut last_was_report = false;
        for &line in rest {
            out.push(format!("COMMAND: {line}"));
            summary.commands += 1;
            // The closing rule keys on the raw keyword of the last line, not
            // on whether the command succeeded.
            last_was_report = line.split('\t').next() == Some("ZReport");

            let outcome = match parse_line(line) {
                Err(error) => Err(error.to_string()),
                Ok(command) => home.execute(&command).map_err(|error| {
                    if error.is_no_change() {
                        debug!(line, %error, "requested change already in effect");
                    }
                    error.to_string()
                }),
            };
            match outcome {
                Ok(Outcome::Done) => {}
                Ok(Outcome::TimeSet(time)) => {
                    out.push(format!("SUCCESS: Time has been set to {time}!"));
                }
                Ok(Outcome::Removed(device)) => {
                    out.push("SUCCESS: Information about removed smart device is as follows:"
                        .to_string());
                    out.push(device.to_string());
                }
                Ok(Outcome::Report(report)) => out.extend(report.render_lines()),
                Err(message) => {
                    out.push(message);
                    summary.errors += 1;
                }
            }
        }

        // A run that does not end with a report gets one appended.
        if let Ok(report) = home.report() {
            if !last_was_report {
                out.push("ZReport:".to_string());
                out.extend(report.render_lines());
            }
            summary.final_report = Some(report);
        }
        (out, summary)
    }
}

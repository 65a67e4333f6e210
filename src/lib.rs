//! Smart Home Simulator
//!
//! A discrete-event smart home simulator. A batch of commands drives a
//! single virtual clock forward; devices carry scheduled on/off switches
//! that fire in chronological order as time advances, and accruing devices
//! (cameras, plugs) account for their usage over the exact intervals they
//! spent in the accruing state.
//!
//! # Overview
//!
//! The simulator reads tab-separated commands from an input file, executes
//! them strictly in order against an in-memory engine and writes a
//! transcript of echoes, results and error lines to an output file. Time
//! never advances on its own: only explicit time commands move the clock,
//! and every advance drains the pending-switch queue so that no scheduled
//! switch is skipped, however far the clock jumps.
//!
//! ## Quick Start
//!
//! ```rust
//! use smart_home_sim::{BatchRunner, Device, SmartHome, Timestamp};
//!
//! // Drive the engine directly...
//! let mut home = SmartHome::new();
//! home.set_initial_time(Timestamp::parse("2024-01-01_08:00:00")?)?;
//! home.add_device(Device::camera("Porch", 2.0, true))?;
//! home.skip_minutes(30)?;
//! home.switch_now("Porch", false)?;
//! assert_eq!(home.find_device("Porch")?.total_accrued(), 60.0);
//!
//! // ...or run a whole batch in one call.
//! let (lines, summary) = BatchRunner::new()
//!     .process("SetInitialTime\t2024-01-01_08:00:00\nZReport\n");
//! assert_eq!(lines[3], "Time is:\t2024-01-01_08:00:00");
//! assert_eq!(summary.errors, 0);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Module Organization
//!
//! - [`types`]: timestamps and CLI configuration
//! - [`device`]: the device record and kind-specific configuration
//! - [`command`]: command payloads, parser and validation errors
//! - [`simulation`]: clock, registry, scheduler, accrual and the engine
//! - [`report`]: Z-report snapshots
//! - [`batch`]: the file-to-file batch runner
#![warn(missing_docs, missing_debug_implementations, unreachable_pub)]

pub mod batch;
pub mod command;
pub mod device;
pub mod report;
pub mod simulation;
pub mod types;

pub use batch::{BatchError, BatchRunner, RunSummary};
pub use command::{parse_line, Command, CommandError};
pub use device::{ColorSetting, Device, DeviceKind};
pub use report::{DeviceSnapshot, ZReport};
pub use simulation::{Clock, EngineError, EngineResult, LoggingConfig, Outcome, SmartHome};
pub use types::{CliArgs, Timestamp};

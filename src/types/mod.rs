//! Core types for the smart home simulator
//!
//! This module contains the virtual timestamp type and the CLI configuration.

pub mod config;
pub mod timestamp;

pub use config::CliArgs;
pub use timestamp::{Timestamp, TIMESTAMP_FORMAT};

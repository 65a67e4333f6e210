//! Command parsing and validation errors
//!
//! These cover everything that goes wrong before the engine is invoked:
//! unknown keywords, wrong argument counts, unparseable numbers and values
//! outside their allowed ranges. Each maps to one reported line; the engine
//! never sees a payload that failed validation.

use thiserror::Error;

/// Errors reported by the command parsing layer
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    /// Unknown keyword, wrong argument count or unparseable value
    #[error("ERROR: Erroneous command!")]
    Erroneous,

    /// A timestamp argument not in `yyyy-MM-dd_HH:mm:ss` format
    #[error("ERROR: Time format is not correct!")]
    TimeFormat,

    /// Kelvin value outside 2000–6500
    #[error("ERROR: Kelvin value must be in range of 2000K-6500K!")]
    KelvinRange,

    /// Brightness outside 0–100
    #[error("ERROR: Brightness must be in range of 0%-100%!")]
    BrightnessRange,

    /// Color code outside 0x0–0xFFFFFF
    #[error("ERROR: Color code value must be in range of 0x0-0xFFFFFF!")]
    ColorCodeRange,

    /// Non-positive ampere value
    #[error("ERROR: Ampere value must be a positive number!")]
    AmpereNotPositive,

    /// Non-positive megabyte rate
    #[error("ERROR: Megabyte value must be a positive number!")]
    MegabyteNotPositive,
}

/// Result type for the parsing layer
pub type ParseResult<T> = Result<T, CommandError>;

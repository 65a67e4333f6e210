//! Engine error taxonomy
//!
//! Every engine operation returns a typed result; none of these variants is
//! fatal to a run. The batch layer formats the message and moves on to the
//! next command, leaving the engine state untouched.

use thiserror::Error;

/// Errors reported by the simulation engine
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// The initial time was set more than once
    #[error("ERROR: Erroneous command!")]
    InitialTimeAlreadySet,

    /// The clock was queried before the initial time was set
    #[error("ERROR: Time has not been set yet!")]
    ClockUninitialized,

    /// The requested clock value precedes the current time
    #[error("ERROR: Time cannot be reversed!")]
    NonMonotonic,

    /// The requested clock value equals the current time
    #[error("ERROR: There is nothing to change!")]
    TimeUnchanged,

    /// A skip of zero minutes was requested
    #[error("ERROR: There is nothing to skip!")]
    NothingToSkip,

    /// The device is already in the requested on/off state
    #[error("ERROR: This device is already switched {0}!")]
    AlreadySwitched(&'static str),

    /// A no-op advance was requested but no device has a pending switch
    #[error("ERROR: There is nothing to switch!")]
    NothingToSwitch,

    /// A device with the same name already exists
    #[error("ERROR: There is already a smart device with same name!")]
    DuplicateName,

    /// No device with the given name exists
    #[error("ERROR: There is not such a device!")]
    NotFound,

    /// A rename where the old and new names are identical
    #[error("ERROR: Both of the names are the same, nothing changed!")]
    SameName,

    /// A scheduled switch time that precedes the current clock
    #[error("ERROR: Switch time cannot be in the past!")]
    PastTime,

    /// A kind-specific command addressed a device of another kind
    #[error("ERROR: This device is not a {0}!")]
    WrongKind(&'static str),

    /// Plug-in on a plug that is already occupied
    #[error("ERROR: There is already an item plugged in to that plug!")]
    AlreadyPlugged,

    /// Plug-out on a plug with nothing plugged in
    #[error("ERROR: This plug has no item to plug out from that plug!")]
    NothingPlugged,
}

impl EngineError {
    /// Whether this error reports a requested change that is already in
    /// effect (time unchanged, zero-minute skip, device already in the
    /// requested state). These are benign by definition.
    pub fn is_no_change(&self) -> bool {
        matches!(
            self,
            EngineError::TimeUnchanged
                | EngineError::NothingToSkip
                | EngineError::AlreadySwitched(_)
        )
    }
}

/// Result type for engine operations
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_match_the_reporting_format() {
        assert_eq!(
            EngineError::NonMonotonic.to_string(),
            "ERROR: Time cannot be reversed!"
        );
        assert_eq!(
            EngineError::AlreadySwitched("on").to_string(),
            "ERROR: This device is already switched on!"
        );
        assert_eq!(
            EngineError::WrongKind("smart plug").to_string(),
            "ERROR: This device is not a smart plug!"
        );
    }

    #[test]
    fn no_change_classification() {
        assert!(EngineError::TimeUnchanged.is_no_change());
        assert!(EngineError::NothingToSkip.is_no_change());
        assert!(EngineError::AlreadySwitched("off").is_no_change());
        assert!(!EngineError::NonMonotonic.is_no_change());
        assert!(!EngineError::NotFound.is_no_change());
    }
}

//! Parsed command payloads
//!
//! Every variant carries fully validated, typed values; string-to-number and
//! range checking happens in the parser, so the engine never sees raw text.

use crate::device::ColorSetting;
use crate::types::Timestamp;

/// A single parsed command from the batch input
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Assign the initial (and current) time; must be the first command
    SetInitialTime(Timestamp),
    /// Advance the clock to an explicit time
    SetTime(Timestamp),
    /// Advance the clock by a number of minutes
    SkipMinutes(i64),
    /// Jump the clock to the next pending switch
    Nop,
    /// Add a camera
    AddCamera {
        /// Device name
        name: String,
        /// Storage rate per elapsed minute
        megabytes_per_minute: f64,
        /// Initial on/off state
        initially_on: bool,
    },
    /// Add a plug
    AddPlug {
        /// Device name
        name: String,
        /// Initial on/off state
        initially_on: bool,
        /// Current of an item plugged in from the start
        ampere: Option<f64>,
    },
    /// Add a white lamp
    AddLamp {
        /// Device name
        name: String,
        /// Initial on/off state
        initially_on: bool,
        /// Kelvin/brightness pair when both were supplied
        white: Option<(u32, u8)>,
    },
    /// Add a color lamp
    AddColorLamp {
        /// Device name
        name: String,
        /// Initial on/off state
        initially_on: bool,
        /// Color-or-kelvin setting plus brightness when supplied
        color: Option<(ColorSetting, u8)>,
    },
    /// Remove a device (switch off, flush accrual, report the snapshot)
    Remove {
        /// Device name
        name: String,
    },
    /// Rename a device in place
    ChangeName {
        /// Current name
        old: String,
        /// New name
        new: String,
    },
    /// Immediate user-issued switch
    Switch {
        /// Device name
        name: String,
        /// Requested state
        on: bool,
    },
    /// Schedule a future switch
    SetSwitchTime {
        /// Device name
        name: String,
        /// When the switch fires
        time: Timestamp,
    },
    /// Plug an item into a plug
    PlugIn {
        /// Device name
        name: String,
        /// Current drawn by the item
        ampere: f64,
    },
    /// Remove the plugged item from a plug
    PlugOut {
        /// Device name
        name: String,
    },
    /// Set a lamp's white temperature
    SetKelvin {
        /// Device name
        name: String,
        /// Temperature in kelvin
        kelvin: u32,
    },
    /// Set a lamp's brightness
    SetBrightness {
        /// Device name
        name: String,
        /// Brightness in percent
        brightness: u8,
    },
    /// Set a lamp's white temperature and brightness together
    SetWhite {
        /// Device name
        name: String,
        /// Temperature in kelvin
        kelvin: u32,
        /// Brightness in percent
        brightness: u8,
    },
    /// Set a color lamp's hex color code
    SetColorCode {
        /// Device name
        name: String,
        /// `0x`-prefixed hex code
        color: String,
    },
    /// Set a color lamp's color code and brightness together
    SetColor {
        /// Device name
        name: String,
        /// `0x`-prefixed hex code
        color: String,
        /// Brightness in percent
        brightness: u8,
    },
    /// Emit the Z-report
    ZReport,
}

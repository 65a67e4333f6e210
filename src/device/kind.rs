//! Device kinds and kind-specific configuration
//!
//! The scheduler and accrual engine only look at the shared device record;
//! everything kind-specific lives in the tagged variant defined here.

use serde::Serialize;
use std::fmt;

/// Default mains voltage assumed for plugs, in volts.
pub const DEFAULT_VOLTAGE: f64 = 220.0;

/// Default white temperature for lamps, in kelvin.
pub const DEFAULT_KELVIN: u32 = 4000;

/// Default lamp brightness, in percent.
pub const DEFAULT_BRIGHTNESS: u8 = 100;

/// The color configuration of a color lamp: either a white temperature or a
/// hex color code. The code keeps the exact text it was set with (range
/// checked upstream) so reports echo the user's spelling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum ColorSetting {
    /// White mode, temperature in kelvin
    Kelvin(u32),
    /// Color mode, `0x`-prefixed hex code
    Color(String),
}

impl fmt::Display for ColorSetting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorSetting::Kelvin(kelvin) => write!(f, "{kelvin}K"),
            ColorSetting::Color(code) => write!(f, "{code}"),
        }
    }
}

/// Kind-specific configuration of a device
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum DeviceKind {
    /// Security camera, accrues storage while switched on
    Camera {
        /// Storage rate applied per elapsed minute of recording
        megabytes_per_minute: f64,
    },
    /// Smart plug, accrues energy while on with something plugged in
    Plug {
        /// Current drawn by the plugged item; zero means nothing is plugged
        ampere: f64,
        /// Mains voltage used in the consumption formula
        voltage: f64,
    },
    /// White lamp
    Lamp {
        /// White temperature in kelvin
        kelvin: u32,
        /// Brightness in percent
        brightness: u8,
    },
    /// Lamp supporting both white and color modes
    ColorLamp {
        /// Current color or white setting
        color: ColorSetting,
        /// Brightness in percent
        brightness: u8,
    },
}

impl DeviceKind {
    /// Human-readable kind name used in report lines.
    pub fn display_name(&self) -> &'static str {
        match self {
            DeviceKind::Camera { .. } => "Smart Camera",
            DeviceKind::Plug { .. } => "Smart Plug",
            DeviceKind::Lamp { .. } => "Smart Lamp",
            DeviceKind::ColorLamp { .. } => "Smart Color Lamp",
        }
    }

    /// Usage or consumption accrued over `minutes` whole minutes in the
    /// accruing state. Lamps never accrue.
    pub(crate) fn accrued_over(&self, minutes: i64) -> f64 {
        match self {
            DeviceKind::Camera { megabytes_per_minute } => {
                megabytes_per_minute * minutes as f64
            }
            DeviceKind::Plug { ampere, voltage } => ampere * voltage * minutes as f64 / 60.0,
            DeviceKind::Lamp { .. } | DeviceKind::ColorLamp { .. } => 0.0,
        }
    }
}

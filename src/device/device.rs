//! The device record
//!
//! One shared record per device carries everything the scheduler and the
//! accrual engine care about (`is_on`, the pending switch, the accrual
//! marks); kind-specific configuration sits behind the [`DeviceKind`] tag.

use crate::device::kind::{ColorSetting, DeviceKind, DEFAULT_BRIGHTNESS, DEFAULT_KELVIN, DEFAULT_VOLTAGE};
use crate::simulation::error::{EngineError, EngineResult};
use crate::types::Timestamp;
use std::fmt;

/// A live smart home device
#[derive(Debug, Clone, PartialEq)]
pub struct Device {
    pub(crate) name: String,
    pub(crate) is_on: bool,
    pub(crate) pending_switch: Option<Timestamp>,
    pub(crate) accrual_start: Option<Timestamp>,
    pub(crate) total_accrued: f64,
    pub(crate) kind: DeviceKind,
}

impl Device {
    fn new(name: impl Into<String>, is_on: bool, kind: DeviceKind) -> Self {
        Self {
            name: name.into(),
            is_on,
            pending_switch: None,
            accrual_start: None,
            total_accrued: 0.0,
            kind,
        }
    }

    /// Create a camera with the given storage rate.
    pub fn camera(name: impl Into<String>, megabytes_per_minute: f64, initially_on: bool) -> Self {
        Self::new(name, initially_on, DeviceKind::Camera { megabytes_per_minute })
    }

    /// Create a plug; `ampere` is the current of an item plugged in from the
    /// start, absent means the socket starts empty.
    pub fn plug(name: impl Into<String>, initially_on: bool, ampere: Option<f64>) -> Self {
        Self::new(
            name,
            initially_on,
            DeviceKind::Plug { ampere: ampere.unwrap_or(0.0), voltage: DEFAULT_VOLTAGE },
        )
    }

    /// Create a white lamp; `white` overrides the default kelvin/brightness
    /// pair when both were supplied.
    pub fn lamp(name: impl Into<String>, initially_on: bool, white: Option<(u32, u8)>) -> Self {
        let (kelvin, brightness) = white.unwrap_or((DEFAULT_KELVIN, DEFAULT_BRIGHTNESS));
        Self::new(name, initially_on, DeviceKind::Lamp { kelvin, brightness })
    }

    /// Create a color lamp; `color` overrides the default white setting.
    pub fn color_lamp(
        name: impl Into<String>,
        initially_on: bool,
        color: Option<(ColorSetting, u8)>,
    ) -> Self {
        let (color, brightness) =
            color.unwrap_or((ColorSetting::Kelvin(DEFAULT_KELVIN), DEFAULT_BRIGHTNESS));
        Self::new(name, initially_on, DeviceKind::ColorLamp { color, brightness })
    }

    /// The device's unique name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether the device is currently switched on.
    pub fn is_on(&self) -> bool {
        self.is_on
    }

    /// The on/off state as the report word.
    pub fn status(&self) -> &'static str {
        if self.is_on {
            "on"
        } else {
            "off"
        }
    }

    /// The scheduled switch time, if any. At most one per device.
    pub fn pending_switch(&self) -> Option<Timestamp> {
        self.pending_switch
    }

    /// Running usage/consumption total, in MB or watts depending on kind.
    pub fn total_accrued(&self) -> f64 {
        self.total_accrued
    }

    /// Kind tag and kind-specific configuration.
    pub fn kind(&self) -> &DeviceKind {
        &self.kind
    }

    /// Whether the device is in its accruing condition: a camera accrues
    /// while on, a plug while on with something plugged in. Lamps never do.
    pub fn is_accruing(&self) -> bool {
        match &self.kind {
            DeviceKind::Camera { .. } => self.is_on,
            DeviceKind::Plug { ampere, .. } => self.is_on && *ampere != 0.0,
            DeviceKind::Lamp { .. } | DeviceKind::ColorLamp { .. } => false,
        }
    }

    /// Set the white temperature. Switches a color lamp back to white mode.
    pub fn set_kelvin(&mut self, value: u32) -> EngineResult<()> {
        match &mut self.kind {
            DeviceKind::Lamp { kelvin, .. } => {
                *kelvin = value;
                Ok(())
            }
            DeviceKind::ColorLamp { color, .. } => {
                *color = ColorSetting::Kelvin(value);
                Ok(())
            }
            _ => Err(EngineError::WrongKind("smart lamp")),
        }
    }

    /// Set the brightness of a lamp or color lamp.
    pub fn set_brightness(&mut self, value: u8) -> EngineResult<()> {
        match &mut self.kind {
            DeviceKind::Lamp { brightness, .. } | DeviceKind::ColorLamp { brightness, .. } => {
                *brightness = value;
                Ok(())
            }
            _ => Err(EngineError::WrongKind("smart lamp")),
        }
    }

    /// Set white temperature and brightness together.
    pub fn set_white(&mut self, kelvin: u32, brightness: u8) -> EngineResult<()> {
        self.set_kelvin(kelvin)?;
        self.set_brightness(brightness)
    }

    /// Set the hex color code. Switches the lamp into color mode.
    pub fn set_color_code(&mut self, code: String) -> EngineResult<()> {
        match &mut self.kind {
            DeviceKind::ColorLamp { color, .. } => {
                *color = ColorSetting::Color(code);
                Ok(())
            }
            _ => Err(EngineError::WrongKind("smart color lamp")),
        }
    }

    /// Set color code and brightness together.
    pub fn set_color(&mut self, code: String, brightness: u8) -> EngineResult<()> {
        match &mut self.kind {
            DeviceKind::ColorLamp { color, brightness: current } => {
                *color = ColorSetting::Color(code);
                *current = brightness;
                Ok(())
            }
            _ => Err(EngineError::WrongKind("smart color lamp")),
        }
    }
}

impl fmt::Display for Device {
    /// Renders the device's report line, matching the batch output format.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let switch = match self.pending_switch {
            Some(time) => time.to_string(),
            None => "null".to_string(),
        };
        match &self.kind {
            DeviceKind::Camera { .. } => write!(
                f,
                "Smart Camera {} is {} and used {:.2} MB of storage so far (excluding current \
                 status), and its time to switch its status is {}.",
                self.name, self.status(), self.total_accrued, switch
            ),
            DeviceKind::Plug { .. } => write!(
                f,
                "Smart Plug {} is {} and consumed {:.2}W so far (excluding current device), and \
                 its time to switch its status is {}.",
                self.name, self.status(), self.total_accrued, switch
            ),
            DeviceKind::Lamp { kelvin, brightness } => write!(
                f,
                "Smart Lamp {} is {} and its kelvin value is {}K with {}% brightness, and its \
                 time to switch its status is {}.",
                self.name, self.status(), kelvin, brightness, switch
            ),
            DeviceKind::ColorLamp { color, brightness } => write!(
                f,
                "Smart Color Lamp {} is {} and its color value is {} with {}% brightness, and \
                 its time to switch its status is {}.",
                self.name, self.status(), color, brightness, switch
            ),
        }
    }
}

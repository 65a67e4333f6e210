//! Smart home devices
//!
//! This module contains the shared device record and the kind-tagged
//! configuration for cameras, plugs, lamps and color lamps.

pub mod device;
pub mod kind;

pub use device::Device;
pub use kind::{ColorSetting, DeviceKind, DEFAULT_BRIGHTNESS, DEFAULT_KELVIN, DEFAULT_VOLTAGE};

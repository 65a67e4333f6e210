//! Z-report snapshots
//!
//! A report captures the current time and one entry per live device in
//! registry sort order. The text rendering matches the batch output format;
//! the structures also serialize for the `--json-report` export.

use crate::device::Device;
use crate::simulation::engine::SmartHome;
use crate::simulation::error::EngineResult;
use crate::types::Timestamp;
use serde::Serialize;

/// A point-in-time view of one device
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeviceSnapshot {
    /// Device name
    pub name: String,
    /// Kind name as reported to the user
    pub kind: String,
    /// On/off state at capture time
    pub is_on: bool,
    /// Scheduled switch time, if any
    pub pending_switch: Option<Timestamp>,
    /// Usage/consumption total at capture time
    pub total_accrued: f64,
    /// The rendered report line
    pub line: String,
}

impl DeviceSnapshot {
    fn of(device: &Device) -> Self {
        Self {
            name: device.name().to_string(),
            kind: device.kind().display_name().to_string(),
            is_on: device.is_on(),
            pending_switch: device.pending_switch(),
            total_accrued: device.total_accrued(),
            line: device.to_string(),
        }
    }
}

/// The full Z-report: current time plus all devices in registry order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ZReport {
    /// The clock value at capture time
    pub time: Timestamp,
    /// Devices in registry sort order
    pub devices: Vec<DeviceSnapshot>,
}

impl ZReport {
    /// Capture a report from the engine.
    pub fn capture(home: &SmartHome) -> EngineResult<Self> {
        Ok(Self {
            time: home.clock().current()?,
            devices: home.devices().iter().map(DeviceSnapshot::of).collect(),
        })
    }

    /// Render the report as output lines.
    pub fn render_lines(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(self.devices.len() + 1);
        lines.push(format!("Time is:\t{}", self.time));
        lines.extend(self.devices.iter().map(|snapshot| snapshot.line.clone()));
        lines
    }
}

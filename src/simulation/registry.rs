//! Device registry
//!
//! An ordered collection of live devices keyed by name. The backing vector is
//! always kept sorted by pending switch time ascending, devices without a
//! pending switch last; ties and the no-switch tail preserve their previous
//! relative order (the sort is stable and re-applied after every mutation
//! that can affect the ordering).

use crate::device::Device;
use crate::simulation::error::{EngineError, EngineResult};
use crate::types::Timestamp;
use std::cmp::Ordering;
use tracing::debug;

/// The set of all live devices, ordered by pending switch time
#[derive(Debug, Clone, Default)]
pub struct DeviceRegistry {
    pub(crate) devices: Vec<Device>,
}

impl DeviceRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live devices.
    pub fn len(&self) -> usize {
        self.devices.len()
    }

    /// Whether the registry holds no devices.
    pub fn is_empty(&self) -> bool {
        self.devices.is_empty()
    }

    /// Whether a device with this name exists. Names are case-sensitive.
    pub fn contains(&self, name: &str) -> bool {
        self.devices.iter().any(|device| device.name() == name)
    }

    /// Insert a new device and restore the ordering.
    pub fn add(&mut self, device: Device) -> EngineResult<()> {
        if self.contains(device.name()) {
            return Err(EngineError::DuplicateName);
        }
        debug!(name = device.name(), kind = device.kind().display_name(), "device added");
        self.devices.push(device);
        self.resort();
        Ok(())
    }

    /// Remove the device with this name and hand it back.
    pub fn take(&mut self, name: &str) -> EngineResult<Device> {
        let index = self
            .devices
            .iter()
            .position(|device| device.name() == name)
            .ok_or(EngineError::NotFound)?;
        debug!(name, "device removed");
        Ok(self.devices.remove(index))
    }

    /// Change a device's name in place. Order and all other state are kept.
    pub fn rename(&mut self, old: &str, new: &str) -> EngineResult<()> {
        if old == new {
            return Err(EngineError::SameName);
        }
        let index = self
            .devices
            .iter()
            .position(|device| device.name() == old)
            .ok_or(EngineError::NotFound)?;
        if self.contains(new) {
            return Err(EngineError::DuplicateName);
        }
        debug!(old, new, "device renamed");
        self.devices[index].name = new.to_string();
        Ok(())
    }

    /// Borrow the device with this name.
    pub fn find(&self, name: &str) -> EngineResult<&Device> {
        self.devices
            .iter()
            .find(|device| device.name() == name)
            .ok_or(EngineError::NotFound)
    }

    /// Mutably borrow the device with this name.
    pub fn find_mut(&mut self, name: &str) -> EngineResult<&mut Device> {
        self.devices
            .iter_mut()
            .find(|device| device.name() == name)
            .ok_or(EngineError::NotFound)
    }

    /// All devices in the current sort order.
    pub fn devices(&self) -> &[Device] {
        &self.devices
    }

    /// The earliest pending switch time across all devices, if any. Because
    /// the vector is sorted with no-switch devices last, this is the first
    /// element's pending time.
    pub fn first_pending_switch_time(&self) -> Option<Timestamp> {
        self.devices.first().and_then(Device::pending_switch)
    }

    /// Re-derive the ordering after a mutation that can affect it. Stable:
    /// equal switch times and the no-switch tail keep their relative order.
    pub fn resort(&mut self) {
        self.devices.sort_by(|a, b| match (a.pending_switch(), b.pending_switch()) {
            (None, None) => Ordering::Equal,
            (None, Some(_)) => Ordering::Greater,
            (Some(_), None) => Ordering::Less,
            (Some(a), Some(b)) => a.cmp(&b),
        });
    }
}

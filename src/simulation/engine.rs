//! The engine context
//!
//! [`SmartHome`] owns the clock and the device registry and is threaded by
//! reference through every operation; there is no global state, so a fresh
//! engine per test or per run is trivial. Command dispatch maps each parsed
//! payload onto the matching engine operation and reports a typed outcome.

use crate::command::Command;
use crate::device::{Device, DeviceKind};
use crate::report::ZReport;
use crate::simulation::accrual;
use crate::simulation::clock::Clock;
use crate::simulation::error::{EngineError, EngineResult};
use crate::simulation::registry::DeviceRegistry;
use crate::types::Timestamp;
use tracing::{debug, info};

/// What a successfully executed command produced
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// State changed, nothing to report
    Done,
    /// The initial time was assigned
    TimeSet(Timestamp),
    /// A device was removed; the snapshot is reported to the user
    Removed(Device),
    /// A Z-report was requested
    Report(ZReport),
}

/// The simulation engine: one clock, one registry, strictly sequential
#[derive(Debug, Clone, Default)]
pub struct SmartHome {
    pub(crate) clock: Clock,
    pub(crate) registry: DeviceRegistry,
}

impl SmartHome {
    /// Create an engine with an uninitialized clock and an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// The virtual clock.
    pub fn clock(&self) -> &Clock {
        &self.clock
    }

    /// All live devices in registry sort order.
    pub fn devices(&self) -> &[Device] {
        self.registry.devices()
    }

    /// Borrow a device by name.
    pub fn find_device(&self, name: &str) -> EngineResult<&Device> {
        self.registry.find(name)
    }

    /// Assign the initial time. The first mutation of any run.
    pub fn set_initial_time(&mut self, time: Timestamp) -> EngineResult<Timestamp> {
        self.clock.set_initial(time)?;
        info!(%time, "simulation timeline starts");
        Ok(time)
    }

    /// Register a new device. A device created in its accruing condition
    /// starts its accrual interval at the current time.
    pub fn add_device(&mut self, mut device: Device) -> EngineResult<()> {
        let now = self.clock.current()?;
        accrual::on_transition(&mut device, now);
        self.registry.add(device)
    }

    /// Remove a device: force it off (a direct flip, not a switch event),
    /// flush its accrual at the current instant and hand back the snapshot.
    /// The snapshot keeps its pending switch time; it never fires.
    pub fn remove_device(&mut self, name: &str) -> EngineResult<Device> {
        let now = self.clock.current()?;
        let device = self.registry.find_mut(name)?;
        device.is_on = false;
        accrual::on_transition(device, now);
        let removed = self.registry.take(name)?;
        info!(name, "device removed");
        Ok(removed)
    }

    /// Rename a device in place; identity, schedule and accrual state are
    /// untouched.
    pub fn rename_device(&mut self, old: &str, new: &str) -> EngineResult<()> {
        self.registry.rename(old, new)
    }

    /// Plug an item into a plug. Plugging in while the plug is switched on
    /// starts the consumption interval.
    pub fn plug_in(&mut self, name: &str, ampere: f64) -> EngineResult<()> {
        let now = self.clock.current()?;
        let device = self.registry.find_mut(name)?;
        match &mut device.kind {
            DeviceKind::Plug { ampere: slot, .. } => {
                if *slot != 0.0 {
                    return Err(EngineError::AlreadyPlugged);
                }
                *slot = ampere;
            }
            _ => return Err(EngineError::WrongKind("smart plug")),
        }
        accrual::on_transition(device, now);
        Ok(())
    }

    /// Unplug the item from a plug. The open consumption interval is flushed
    /// with the item's ampere before the socket empties.
    pub fn plug_out(&mut self, name: &str) -> EngineResult<()> {
        let now = self.clock.current()?;
        let device = self.registry.find_mut(name)?;
        match &device.kind {
            DeviceKind::Plug { ampere, .. } => {
                if *ampere == 0.0 {
                    return Err(EngineError::NothingPlugged);
                }
            }
            _ => return Err(EngineError::WrongKind("smart plug")),
        }
        accrual::flush(device, now);
        if let DeviceKind::Plug { ampere, .. } = &mut device.kind {
            *ampere = 0.0;
        }
        Ok(())
    }

    /// Produce the Z-report: the current time plus one line per device in
    /// registry sort order.
    pub fn report(&self) -> EngineResult<ZReport> {
        ZReport::capture(self)
    }

    /// Execute one parsed command against the engine.
    ///
    /// Per-command errors never abort a run; the engine state is unchanged
    /// whenever an error is returned.
    pub fn execute(&mut self, command: &Command) -> EngineResult<Outcome> {
        debug!(?command, "executing");
        match command {
            Command::SetInitialTime(time) => self.set_initial_time(*time).map(Outcome::TimeSet),
            Command::SetTime(time) => self.advance_to(*time).map(|()| Outcome::Done),
            Command::SkipMinutes(minutes) => self.skip_minutes(*minutes).map(|()| Outcome::Done),
            Command::Nop => self.advance_to_next().map(|_| Outcome::Done),
            Command::AddCamera { name, megabytes_per_minute, initially_on } => self
                .add_device(Device::camera(name, *megabytes_per_minute, *initially_on))
                .map(|()| Outcome::Done),
            Command::AddPlug { name, initially_on, ampere } => self
                .add_device(Device::plug(name, *initially_on, *ampere))
                .map(|()| Outcome::Done),
            Command::AddLamp { name, initially_on, white } => self
                .add_device(Device::lamp(name, *initially_on, *white))
                .map(|()| Outcome::Done),
            Command::AddColorLamp { name, initially_on, color } => self
                .add_device(Device::color_lamp(name, *initially_on, color.clone()))
                .map(|()| Outcome::Done),
            Command::Remove { name } => self.remove_device(name).map(Outcome::Removed),
            Command::ChangeName { old, new } => {
                self.rename_device(old, new).map(|()| Outcome::Done)
            }
            Command::Switch { name, on } => self.switch_now(name, *on).map(|()| Outcome::Done),
            Command::SetSwitchTime { name, time } => {
                self.schedule_switch(name, *time).map(|()| Outcome::Done)
            }
            Command::PlugIn { name, ampere } => {
                self.plug_in(name, *ampere).map(|()| Outcome::Done)
            }
            Command::PlugOut { name } => self.plug_out(name).map(|()| Outcome::Done),
            Command::SetKelvin { name, kelvin } => self
                .registry
                .find_mut(name)?
                .set_kelvin(*kelvin)
                .map(|()| Outcome::Done),
            Command::SetBrightness { name, brightness } => self
                .registry
                .find_mut(name)?
                .set_brightness(*brightness)
                .map(|()| Outcome::Done),
            Command::SetWhite { name, kelvin, brightness } => self
                .registry
                .find_mut(name)?
                .set_white(*kelvin, *brightness)
                .map(|()| Outcome::Done),
            Command::SetColorCode { name, color } => self
                .registry
                .find_mut(name)?
                .set_color_code(color.clone())
                .map(|()| Outcome::Done),
            Command::SetColor { name, color, brightness } => self
                .registry
                .find_mut(name)?
                .set_color(color.clone(), *brightness)
                .map(|()| Outcome::Done),
            Command::ZReport => self.report().map(Outcome::Report),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine_at(start: &str) -> SmartHome {
        let mut home = SmartHome::new();
        home.set_initial_time(Timestamp::parse(start).unwrap()).unwrap();
        home
    }

    #[test]
    fn add_rejects_duplicates_and_keeps_state() {
        let mut home = engine_at("2023-03-01_12:00:00");
        home.add_device(Device::lamp("l", false, None)).unwrap();
        assert_eq!(
            home.add_device(Device::plug("l", false, None)),
            Err(EngineError::DuplicateName)
        );
        assert_eq!(home.devices().len(), 1);
    }

    #[test]
    fn add_before_initial_time_is_rejected() {
        let mut home = SmartHome::new();
        assert_eq!(
            home.add_device(Device::lamp("l", false, None)),
            Err(EngineError::ClockUninitialized)
        );
    }

    #[test]
    fn camera_added_on_starts_accruing_immediately() {
        let mut home = engine_at("2023-03-01_12:00:00");
        home.add_device(Device::camera("cam", 2.0, true)).unwrap();
        home.skip_minutes(10).unwrap();
        home.switch_now("cam", false).unwrap();
        assert_eq!(home.find_device("cam").unwrap().total_accrued(), 20.0);
    }

    #[test]
    fn plug_in_and_out_bound_the_consumption_interval() {
        let mut home = engine_at("2023-03-01_12:00:00");
        home.add_device(Device::plug("p", true, None)).unwrap();
        home.plug_in("p", 2.0).unwrap();
        home.skip_minutes(30).unwrap();
        home.plug_out("p").unwrap();
        assert_eq!(home.find_device("p").unwrap().total_accrued(), 220.0);

        // Another 30 minutes with an empty socket adds nothing.
        home.skip_minutes(30).unwrap();
        home.switch_now("p", false).unwrap();
        assert_eq!(home.find_device("p").unwrap().total_accrued(), 220.0);
    }

    #[test]
    fn plug_occupancy_errors() {
        let mut home = engine_at("2023-03-01_12:00:00");
        home.add_device(Device::plug("p", false, Some(2.0))).unwrap();
        assert_eq!(home.plug_in("p", 1.0), Err(EngineError::AlreadyPlugged));
        home.plug_out("p").unwrap();
        assert_eq!(home.plug_out("p"), Err(EngineError::NothingPlugged));

        home.add_device(Device::lamp("l", false, None)).unwrap();
        assert_eq!(home.plug_in("l", 1.0), Err(EngineError::WrongKind("smart plug")));
    }

    #[test]
    fn remove_flushes_accrual_and_reports_snapshot() {
        let mut home = engine_at("2023-03-01_12:00:00");
        home.add_device(Device::camera("cam", 1.0, true)).unwrap();
        home.skip_minutes(45).unwrap();

        let removed = home.remove_device("cam").unwrap();
        assert!(!removed.is_on());
        assert_eq!(removed.total_accrued(), 45.0);
        assert!(home.devices().is_empty());
    }

    #[test]
    fn removed_snapshot_keeps_its_pending_switch() {
        let mut home = engine_at("2023-03-01_12:00:00");
        home.add_device(Device::lamp("l", false, None)).unwrap();
        let later = Timestamp::parse("2023-03-01_13:00:00").unwrap();
        home.schedule_switch("l", later).unwrap();

        let removed = home.remove_device("l").unwrap();
        assert_eq!(removed.pending_switch(), Some(later));

        // The schedule died with the device.
        assert_eq!(home.advance_to_next(), Err(EngineError::NothingToSwitch));
    }

    #[test]
    fn removing_an_off_device_accrues_nothing() {
        let mut home = engine_at("2023-03-01_12:00:00");
        home.add_device(Device::plug("p", false, Some(2.0))).unwrap();
        home.skip_minutes(60).unwrap();
        let removed = home.remove_device("p").unwrap();
        assert_eq!(removed.total_accrued(), 0.0);
    }

    #[test]
    fn rename_keeps_schedule_and_totals() {
        let mut home = engine_at("2023-03-01_12:00:00");
        home.add_device(Device::camera("old", 1.0, true)).unwrap();
        home.rename_device("old", "new").unwrap();
        assert!(home.find_device("old").is_err());
        assert!(home.find_device("new").unwrap().is_on());
    }

    #[test]
    fn dispatch_covers_config_commands() {
        let mut home = engine_at("2023-03-01_12:00:00");
        home.execute(&Command::AddLamp { name: "l".into(), initially_on: false, white: None })
            .unwrap();
        home.execute(&Command::SetWhite { name: "l".into(), kelvin: 3000, brightness: 50 })
            .unwrap();
        assert_eq!(
            home.find_device("l").unwrap().kind(),
            &DeviceKind::Lamp { kelvin: 3000, brightness: 50 }
        );

        let err = home
            .execute(&Command::SetColorCode { name: "l".into(), color: "0xFF0000".into() })
            .unwrap_err();
        assert_eq!(err, EngineError::WrongKind("smart color lamp"));
    }
}

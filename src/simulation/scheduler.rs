//! Switch scheduler
//!
//! The clock-advance algorithms. Advancing time drains due switches in two
//! phases: catch-up steps that move the clock to the earliest pending switch
//! time and fire *every* device due at that instant, then a final phase that
//! moves the clock to the requested target and fires switches due exactly at
//! the boundary. The registry ordering is re-derived after every step, so no
//! switch is skipped even when several pending times fall strictly between
//! the old and new clock value, and same-instant switches fire together in
//! their current registry order.

use crate::simulation::accrual;
use crate::simulation::engine::SmartHome;
use crate::simulation::error::{EngineError, EngineResult};
use crate::types::Timestamp;
use tracing::debug;

impl SmartHome {
    /// Advance the clock to `target`, firing every switch due at or before
    /// it in chronological order.
    pub fn advance_to(&mut self, target: Timestamp) -> EngineResult<()> {
        let current = self.clock.current()?;
        if target < current {
            return Err(EngineError::NonMonotonic);
        }
        if target == current {
            return Err(EngineError::TimeUnchanged);
        }

        // Catch-up phase: walk the queue one instant at a time.
        while let Some(first) = self.registry.first_pending_switch_time() {
            if first >= target {
                break;
            }
            self.catch_up_step(first);
        }

        // Final phase: land on the target and fire boundary switches as part
        // of this same advance.
        self.clock.jump_to(target);
        self.fire_due_at(target);
        self.registry.resort();
        debug!(%target, "clock advanced");
        Ok(())
    }

    /// Advance the clock by `minutes`. Zero minutes is a reported no-op;
    /// negative values fall through to the monotonicity check.
    pub fn skip_minutes(&mut self, minutes: i64) -> EngineResult<()> {
        if minutes == 0 {
            return Err(EngineError::NothingToSkip);
        }
        let target = self.clock.current()?.plus_minutes(minutes);
        self.advance_to(target)
    }

    /// Jump the clock to the earliest pending switch time and fire that
    /// batch. Returns the instant jumped to.
    pub fn advance_to_next(&mut self) -> EngineResult<Timestamp> {
        self.clock.current()?;
        let first = self
            .registry
            .first_pending_switch_time()
            .ok_or(EngineError::NothingToSwitch)?;
        self.catch_up_step(first);
        Ok(first)
    }

    /// Schedule a future switch for a device. A time equal to the current
    /// clock is accepted but not fired here; the next clock-affecting
    /// operation drains it. Replaces any previously pending switch.
    pub fn schedule_switch(&mut self, name: &str, time: Timestamp) -> EngineResult<()> {
        let now = self.clock.current()?;
        let device = self.registry.find_mut(name)?;
        if time < now {
            return Err(EngineError::PastTime);
        }
        debug!(name, %time, "switch scheduled");
        device.pending_switch = Some(time);
        self.registry.resort();
        Ok(())
    }

    /// Switch a device on or off right now. A direct user-issued flip, not a
    /// scheduled event: it bypasses the scheduler and supersedes any pending
    /// switch the device had.
    pub fn switch_now(&mut self, name: &str, desired_on: bool) -> EngineResult<()> {
        let now = self.clock.current()?;
        let device = self.registry.find_mut(name)?;
        if device.is_on == desired_on {
            return Err(EngineError::AlreadySwitched(device.status()));
        }
        debug!(name, on = desired_on, "switched");
        device.is_on = desired_on;
        device.pending_switch = None;
        accrual::on_transition(device, now);
        self.registry.resort();
        Ok(())
    }

    /// One catch-up step: move the clock to `instant`, fire every device due
    /// exactly then, re-derive the ordering.
    fn catch_up_step(&mut self, instant: Timestamp) {
        self.clock.jump_to(instant);
        self.fire_due_at(instant);
        self.registry.resort();
    }

    /// Fire every device whose pending switch time equals `instant`, in
    /// their current registry order: toggle, clear the schedule, reconcile
    /// accrual. The due set is snapshotted up front, so a device whose
    /// schedule changes mid-batch is deferred to the next step.
    fn fire_due_at(&mut self, instant: Timestamp) {
        let due: Vec<usize> = self
            .registry
            .devices
            .iter()
            .enumerate()
            .filter(|(_, device)| device.pending_switch() == Some(instant))
            .map(|(index, _)| index)
            .collect();

        for index in due {
            let device = &mut self.registry.devices[index];
            device.is_on = !device.is_on;
            device.pending_switch = None;
            debug!(name = device.name(), %instant, on = device.is_on, "switch fired");
            accrual::on_transition(device, instant);
        }
    }
}

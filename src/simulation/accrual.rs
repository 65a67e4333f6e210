//! Accrual engine
//!
//! Keeps each device's running usage/consumption total correct across
//! arbitrary sequences of switches and time jumps. A device accrues only
//! while in its accruing condition (camera: on; plug: on with something
//! plugged in); entering the condition stamps the start time, leaving it
//! folds the elapsed whole minutes into the total exactly once.

use crate::device::Device;
use crate::types::Timestamp;
use tracing::debug;

/// Reconcile the accrual marks with the device's current state.
///
/// Call after any mutation of the on/off or plugged state. Entering the
/// accruing condition records `now` as the start; leaving it flushes the
/// open interval. Anything else is a no-op, so repeated calls are safe.
pub fn on_transition(device: &mut Device, now: Timestamp) {
    if device.is_accruing() {
        if device.accrual_start.is_none() {
            debug!(name = device.name(), %now, "accrual started");
            device.accrual_start = Some(now);
        }
    } else {
        flush(device, now);
    }
}

/// Close the open accrual interval, if any, applying the device's rate
/// formula to the elapsed whole minutes and adding the result to the total.
///
/// Must run *before* a mutation that changes the rate itself (plug-out),
/// otherwise the interval would be valued at the new rate.
pub fn flush(device: &mut Device, now: Timestamp) {
    if let Some(start) = device.accrual_start.take() {
        let minutes = start.minutes_until(now);
        let amount = device.kind.accrued_over(minutes);
        debug!(name = device.name(), minutes, amount, "accrual flushed");
        device.total_accrued += amount;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::device::DeviceKind;

    fn at(minute: i64) -> Timestamp {
        Timestamp::parse("2023-03-01_12:00:00").unwrap().plus_minutes(minute)
    }

    #[test]
    fn camera_interval_accrues_on_leave() {
        let mut camera = Device::camera("cam", 2.0, true);
        on_transition(&mut camera, at(0));
        assert_eq!(camera.accrual_start, Some(at(0)));

        camera.is_on = false;
        on_transition(&mut camera, at(15));
        assert_eq!(camera.total_accrued(), 30.0);
        assert_eq!(camera.accrual_start, None);
    }

    #[test]
    fn plug_energy_formula() {
        let mut plug = Device::plug("p", true, Some(2.0));
        on_transition(&mut plug, at(0));

        plug.is_on = false;
        on_transition(&mut plug, at(30));
        assert_eq!(plug.total_accrued(), 2.0 * 220.0 * 30.0 / 60.0);
    }

    #[test]
    fn repeated_transitions_accrue_once_per_interval() {
        let mut camera = Device::camera("cam", 1.0, true);
        on_transition(&mut camera, at(0));
        on_transition(&mut camera, at(5));
        assert_eq!(camera.accrual_start, Some(at(0)), "re-sync must not restart the interval");

        camera.is_on = false;
        on_transition(&mut camera, at(10));
        on_transition(&mut camera, at(20));
        assert_eq!(camera.total_accrued(), 10.0);
    }

    #[test]
    fn flush_without_open_interval_is_a_no_op() {
        let mut plug = Device::plug("p", false, Some(2.0));
        flush(&mut plug, at(60));
        assert_eq!(plug.total_accrued(), 0.0);
    }

    #[test]
    fn flush_before_rate_change_values_the_old_rate() {
        let mut plug = Device::plug("p", true, Some(2.0));
        on_transition(&mut plug, at(0));

        // Unplug at t+30: flush first, then zero the ampere.
        flush(&mut plug, at(30));
        if let DeviceKind::Plug { ampere, .. } = &mut plug.kind {
            *ampere = 0.0;
        }
        assert_eq!(plug.total_accrued(), 220.0);
    }

    #[test]
    fn lamp_never_accrues() {
        let mut lamp = Device::lamp("l", true, None);
        on_transition(&mut lamp, at(0));
        assert_eq!(lamp.accrual_start, None);
        lamp.is_on = false;
        on_transition(&mut lamp, at(100));
        assert_eq!(lamp.total_accrued(), 0.0);
    }
}

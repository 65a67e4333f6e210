//! The virtual clock
//!
//! One clock per engine owns the simulated timeline: an initial time that can
//! be assigned exactly once and a current time that never moves backwards.
//! Advancing the clock is the scheduler's job, because due switches have to
//! fire before the clock passes them; the clock itself only stores values.

use crate::simulation::error::{EngineError, EngineResult};
use crate::types::Timestamp;
use tracing::debug;

/// The single monotonic virtual timestamp driving the simulation
#[derive(Debug, Clone, Default)]
pub struct Clock {
    initial: Option<Timestamp>,
    current: Option<Timestamp>,
}

impl Clock {
    /// Create an uninitialized clock.
    pub fn new() -> Self {
        Self::default()
    }

    /// Assign the initial time. Allowed exactly once, before any advance.
    pub fn set_initial(&mut self, time: Timestamp) -> EngineResult<()> {
        if self.initial.is_some() {
            return Err(EngineError::InitialTimeAlreadySet);
        }
        debug!(%time, "initial time set");
        self.initial = Some(time);
        self.current = Some(time);
        Ok(())
    }

    /// The current simulated time.
    pub fn current(&self) -> EngineResult<Timestamp> {
        self.current.ok_or(EngineError::ClockUninitialized)
    }

    /// Move the current time. Callers guarantee monotonicity; the scheduler
    /// is the only mutation path and validates targets before draining.
    pub(crate) fn jump_to(&mut self, time: Timestamp) {
        debug_assert!(self.current.is_some_and(|current| time >= current));
        self.current = Some(time);
    }
}

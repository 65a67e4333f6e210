//! The simulation engine
//!
//! This module contains the core of the simulator:
//!
//! - **Clock**: the single monotonic virtual timestamp
//! - **DeviceRegistry**: the ordered device collection
//! - **Scheduler** (on [`SmartHome`]): the drain-then-advance algorithm that
//!   fires due switches in chronological order
//! - **Accrual**: per-kind usage/consumption accounting
//! - **SmartHome**: the engine context owning clock and registry
//! - **EngineError**: the recoverable error taxonomy
//! - **LoggingConfig**: tracing setup for the binary

pub mod accrual;
pub mod clock;
pub mod engine;
pub mod error;
pub mod logging;
pub mod registry;
pub mod scheduler;

pub use clock::Clock;
pub use engine::{Outcome, SmartHome};
pub use error::{EngineError, EngineResult};
pub use logging::LoggingConfig;
pub use registry::DeviceRegistry;

//! Deterministic test doubles for driving Dragwise sensors without a
//! platform: a scripted event source, a manually advanced timer driver,
//! and a controller that records every command it receives.

pub mod clock;
pub mod controller;
pub mod events;
pub mod harness;

pub use clock::ManualTimerDriver;
pub use controller::{Command, RecordingController};
pub use events::TestEventSource;
pub use harness::SensorHarness;

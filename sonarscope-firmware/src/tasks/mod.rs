//! Embassy async tasks
//!
//! The scanner is a single logical thread of control: one task owns
//! the sensor, the servo and the display and runs the sweep forever.

pub mod sweep;

pub use sweep::{sweep_task, Engine, UptimeClock};

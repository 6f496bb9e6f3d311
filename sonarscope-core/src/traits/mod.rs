//! Hardware abstraction traits
//!
//! These traits define the interface between the scan logic and the
//! three hardware collaborators: the ultrasonic range sensor, the sweep
//! servo, and the display canvas. Tests substitute simulators for each.

pub mod actuator;
pub mod canvas;
pub mod sensor;

pub use actuator::{ActuatorError, SweepActuator};
pub use canvas::{DisplayError, Quadrant, RadarCanvas, TextAlign};
pub use sensor::{RangeSensor, SensorError};

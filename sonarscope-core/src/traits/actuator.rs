//! Sweep actuator trait

/// Errors that can occur when commanding the sweep actuator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ActuatorError {
    /// Commanded angle is outside the actuator's travel
    OutOfRange,
    /// PWM channel rejected the duty cycle
    Pwm,
}

/// Trait for the servo that carries the range sensor
///
/// Accepts an absolute angle command in degrees [0, 180]. The physical
/// motion is fire-and-forget; the caller paces the sweep so the horn
/// has time to arrive before the next measurement.
pub trait SweepActuator {
    /// Command the actuator to the given angle in degrees
    fn set_angle(&mut self, degrees: u8) -> Result<(), ActuatorError>;
}

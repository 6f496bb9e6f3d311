//! PWM hobby servo
//!
//! Standard 50 Hz servo drive: angle maps linearly onto a 500-2500 µs
//! pulse width inside the 20 ms frame. The sweep only ever commands
//! [15, 165] but the driver accepts the servo's full travel.

use embedded_hal::pwm::SetDutyCycle;

use sonarscope_core::traits::{ActuatorError, SweepActuator};

/// PWM frame period at 50 Hz
pub const PERIOD_US: u32 = 20_000;

/// Pulse width at 0 degrees
pub const MIN_PULSE_US: u32 = 500;

/// Pulse width at 180 degrees
pub const MAX_PULSE_US: u32 = 2_500;

/// Maximum commandable angle
pub const MAX_ANGLE_DEG: u8 = 180;

/// Pulse width for an angle command, in microseconds
pub fn pulse_width_us(degrees: u8) -> u32 {
    MIN_PULSE_US + degrees as u32 * (MAX_PULSE_US - MIN_PULSE_US) / MAX_ANGLE_DEG as u32
}

/// Servo on a PWM channel configured for a 20 ms period
pub struct PwmServo<P> {
    pwm: P,
}

impl<P: SetDutyCycle> PwmServo<P> {
    pub fn new(pwm: P) -> Self {
        Self { pwm }
    }

    /// Release the PWM channel
    pub fn release(self) -> P {
        self.pwm
    }
}

impl<P: SetDutyCycle> SweepActuator for PwmServo<P> {
    fn set_angle(&mut self, degrees: u8) -> Result<(), ActuatorError> {
        if degrees > MAX_ANGLE_DEG {
            return Err(ActuatorError::OutOfRange);
        }

        let max_duty = self.pwm.max_duty_cycle() as u32;
        let duty = max_duty * pulse_width_us(degrees) / PERIOD_US;
        self.pwm
            .set_duty_cycle(duty as u16)
            .map_err(|_| ActuatorError::Pwm)
    }
}

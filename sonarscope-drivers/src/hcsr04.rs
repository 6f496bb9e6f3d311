//! HC-SR04 ultrasonic rangefinder
//!
//! Classic two-pin driver: a 10 µs trigger pulse starts a ranging
//! cycle, the sensor answers with an echo pulse whose width encodes the
//! round-trip time. Both echo edges are waited for with a bounded
//! busy-poll so a missing target can never wedge the sweep.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{InputPin, OutputPin};

use sonarscope_core::range::echo_to_cm;
use sonarscope_core::traits::{RangeSensor, SensorError};

/// Default echo timeout in microseconds
///
/// 30 ms of round trip is roughly 5 m, past the sensor's rated range.
pub const DEFAULT_TIMEOUT_US: u64 = 30_000;

/// Monotonic microsecond clock
///
/// Platform abstraction for pulse-width timing; the firmware backs it
/// with `embassy_time::Instant`, tests with a scripted counter.
pub trait MicrosClock {
    /// Current monotonic time in microseconds
    fn now_us(&mut self) -> u64;
}

/// HC-SR04 driver over a trigger output, an echo input and a clock
pub struct Hcsr04<Trig, Echo, Clock, Delay> {
    trig: Trig,
    echo: Echo,
    clock: Clock,
    delay: Delay,
    timeout_us: u64,
}

impl<Trig, Echo, Clock, Delay> Hcsr04<Trig, Echo, Clock, Delay>
where
    Trig: OutputPin,
    Echo: InputPin,
    Clock: MicrosClock,
    Delay: DelayNs,
{
    /// Create a driver with the default 30 ms echo timeout
    pub fn new(trig: Trig, echo: Echo, clock: Clock, delay: Delay) -> Self {
        Self {
            trig,
            echo,
            clock,
            delay,
            timeout_us: DEFAULT_TIMEOUT_US,
        }
    }

    /// Create a driver with a custom echo timeout
    pub fn with_timeout(trig: Trig, echo: Echo, clock: Clock, delay: Delay, timeout_us: u64) -> Self {
        Self {
            trig,
            echo,
            clock,
            delay,
            timeout_us,
        }
    }

    /// Emit the 10 µs trigger pulse
    fn trigger(&mut self) -> Result<(), SensorError> {
        self.trig.set_low().map_err(|_| SensorError::Pin)?;
        self.delay.delay_us(2);
        self.trig.set_high().map_err(|_| SensorError::Pin)?;
        self.delay.delay_us(10);
        self.trig.set_low().map_err(|_| SensorError::Pin)
    }

    /// Busy-wait until the echo pin reaches `level` or the deadline passes
    ///
    /// Returns the timestamp at which the level was observed.
    fn wait_for_level(&mut self, level: bool, deadline_us: u64) -> Result<u64, SensorError> {
        loop {
            let now = self.clock.now_us();
            if self.echo.is_high().map_err(|_| SensorError::Pin)? == level {
                return Ok(now);
            }
            if now >= deadline_us {
                return Err(SensorError::EchoTimeout);
            }
        }
    }
}

impl<Trig, Echo, Clock, Delay> RangeSensor for Hcsr04<Trig, Echo, Clock, Delay>
where
    Trig: OutputPin,
    Echo: InputPin,
    Clock: MicrosClock,
    Delay: DelayNs,
{
    fn measure_cm(&mut self) -> Result<u16, SensorError> {
        self.trigger()?;

        let start = self.clock.now_us();
        let rise = self.wait_for_level(true, start + self.timeout_us)?;
        let fall = self.wait_for_level(false, rise + self.timeout_us)?;

        Ok(echo_to_cm((fall - rise) as u32))
    }
}

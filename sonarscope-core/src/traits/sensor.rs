//! Range sensor trait

/// Errors that can occur while taking a range measurement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SensorError {
    /// No echo edge was observed before the timeout elapsed
    ///
    /// Either the target is out of range or the sensor is disconnected.
    /// The caller should log the miss and skip the reading; a single
    /// lost echo must never stall the sweep.
    EchoTimeout,
    /// GPIO fault while driving the trigger or reading the echo pin
    Pin,
}

/// Trait for a pulsed time-of-flight range sensor
///
/// One measurement per sweep step: emit a trigger pulse, wait for the
/// echo, convert round-trip time to centimeters. No retries.
pub trait RangeSensor {
    /// Take a single distance measurement in centimeters
    fn measure_cm(&mut self) -> Result<u16, SensorError>;
}

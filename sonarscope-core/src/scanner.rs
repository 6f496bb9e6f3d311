//! Scan engine
//!
//! Ties the three hardware collaborators together and executes the
//! eternal measure/move/draw cycle one event per tick. The caller (the
//! firmware task, or a test harness) paces the ticks and reports the
//! readings.

use crate::render::RadarScene;
use crate::sweep::{ScanCycle, ScanEvent};
use crate::traits::{ActuatorError, DisplayError, RadarCanvas, RangeSensor, SweepActuator};

/// Errors that abort a scan tick
///
/// A sensor timeout is not among them: it degrades the step to a
/// measurement-less frame instead of failing the tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ScanError {
    /// Display transport failed
    Display(DisplayError),
    /// Actuator rejected the command
    Actuator(ActuatorError),
}

impl From<DisplayError> for ScanError {
    fn from(e: DisplayError) -> Self {
        ScanError::Display(e)
    }
}

impl From<ActuatorError> for ScanError {
    fn from(e: ActuatorError) -> Self {
        ScanError::Actuator(e)
    }
}

/// Outcome of one sweep step, for the diagnostic log
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Reading {
    /// Display angle of the step, in [0, 180]
    pub display_deg: u8,
    /// Measured distance, or None when the echo timed out
    pub distance_cm: Option<u16>,
}

/// The sweep/measure/render engine
pub struct ScanEngine<S, A, C> {
    sensor: S,
    actuator: A,
    scene: RadarScene<C>,
    cycle: ScanCycle,
}

impl<S, A, C> ScanEngine<S, A, C>
where
    S: RangeSensor,
    A: SweepActuator,
    C: RadarCanvas,
{
    pub fn new(sensor: S, actuator: A, canvas: C) -> Self {
        Self {
            sensor,
            actuator,
            scene: RadarScene::new(canvas),
            cycle: ScanCycle::new(),
        }
    }

    /// Access the canvas, e.g. to flush a buffered display
    pub fn canvas_mut(&mut self) -> &mut C {
        self.scene.canvas_mut()
    }

    /// Execute the next scan event
    ///
    /// A half-sweep boundary redraws the background and yields no
    /// reading. A step measures, commands the servo, renders the frame
    /// and returns the reading for the caller to log.
    pub fn tick(&mut self) -> Result<Option<Reading>, ScanError> {
        match self.cycle.advance() {
            ScanEvent::BeginSweep(_) => {
                self.scene.draw_background()?;
                Ok(None)
            }
            ScanEvent::Step(step) => {
                // A failed measurement degrades the step instead of
                // aborting the tick; the sweep must keep moving.
                let distance_cm = self.sensor.measure_cm().ok();
                self.actuator.set_angle(step.servo_deg)?;

                let detection = match distance_cm {
                    Some(cm) => step.direction.is_detection(cm),
                    None => false,
                };
                self.scene.draw_frame(&step, distance_cm, detection)?;

                Ok(Some(Reading {
                    display_deg: step.display_deg,
                    distance_cm,
                }))
            }
        }
    }
}

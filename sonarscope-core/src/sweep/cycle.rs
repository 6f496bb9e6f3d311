//! Infinite scan cycle
//!
//! Unrolls the eternal two-phase sweep into a stream of events: one
//! `BeginSweep` per half-sweep (the background redraw point), then one
//! `Step` per logical degree.

use super::SweepDirection;

/// One sweep step with all derived angles precomputed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SweepStep {
    /// Direction of the half-sweep this step belongs to
    pub direction: SweepDirection,
    /// Logical sweep angle in [10, 80]
    pub logical_deg: u8,
    /// Physical servo command in [15, 165]
    pub servo_deg: u8,
    /// Human-readable angle in [0, 180]
    pub display_deg: u8,
}

/// Event produced by the scan cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ScanEvent {
    /// A new half-sweep starts; redraw the radar background
    BeginSweep(SweepDirection),
    /// Measure, move and draw at this step's angles
    Step(SweepStep),
}

/// Infinite iterator over the sweep's events
///
/// Starts with `BeginSweep(RightToLeft)` and never ends.
#[derive(Debug, Clone)]
pub struct ScanCycle {
    direction: SweepDirection,
    /// Next logical angle, or None when a half-sweep boundary is due
    cursor: Option<u8>,
}

impl Default for ScanCycle {
    fn default() -> Self {
        Self::new()
    }
}

impl ScanCycle {
    pub fn new() -> Self {
        Self {
            direction: SweepDirection::default(),
            cursor: None,
        }
    }

    /// Direction of the half-sweep currently in progress
    pub fn direction(&self) -> SweepDirection {
        self.direction
    }

    /// Produce the next event
    pub fn advance(&mut self) -> ScanEvent {
        match self.cursor {
            None => {
                self.cursor = Some(self.direction.start_angle());
                ScanEvent::BeginSweep(self.direction)
            }
            Some(x) => {
                let step = SweepStep {
                    direction: self.direction,
                    logical_deg: x,
                    servo_deg: self.direction.servo_angle(x),
                    display_deg: self.direction.display_angle(x),
                };
                if x == self.direction.end_angle() {
                    self.direction = self.direction.flip();
                    self.cursor = None;
                } else {
                    self.cursor = Some(match self.direction {
                        SweepDirection::RightToLeft => x - 1,
                        SweepDirection::LeftToRight => x + 1,
                    });
                }
                ScanEvent::Step(step)
            }
        }
    }
}

impl Iterator for ScanCycle {
    type Item = ScanEvent;

    fn next(&mut self) -> Option<ScanEvent> {
        Some(self.advance())
    }
}

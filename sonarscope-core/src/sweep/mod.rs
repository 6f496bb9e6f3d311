//! Sweep direction state machine and angle remapping
//!
//! The scanner alternates forever between two half-sweeps over the
//! logical angle range [10, 80]. Each logical angle is remapped two
//! ways per step: to a physical servo command in [15, 165] and to a
//! human-readable display angle in [0, 180].

pub mod cycle;

pub use cycle::{ScanCycle, ScanEvent, SweepStep};

/// Lowest logical sweep angle, inclusive
pub const SWEEP_MIN_DEG: u8 = 10;

/// Highest logical sweep angle, inclusive
pub const SWEEP_MAX_DEG: u8 = 80;

/// Servo command at the start of a right-to-left sweep
pub const SERVO_MIN_DEG: u8 = 15;

/// Servo command at the end of a right-to-left sweep
pub const SERVO_MAX_DEG: u8 = 165;

/// Display angle at the end of each half-sweep
pub const DISPLAY_MAX_DEG: u8 = 180;

/// Integer division rounded to nearest
///
/// Truncating division would make the two directions' servo commands
/// disagree by a degree at most angles; rounding keeps the mappings
/// exact inverses without moving any endpoint.
fn div_rounded(numerator: u32, denominator: u32) -> u32 {
    (numerator + denominator / 2) / denominator
}

/// Direction of the current half-sweep
///
/// Two states, entered in fixed alternation forever. There is no
/// terminal state; the scanner has no shutdown path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SweepDirection {
    /// Logical angle runs 80 down to 10
    #[default]
    RightToLeft,
    /// Logical angle runs 10 up to 80
    LeftToRight,
}

impl SweepDirection {
    /// The direction of the following half-sweep
    pub fn flip(self) -> Self {
        match self {
            SweepDirection::RightToLeft => SweepDirection::LeftToRight,
            SweepDirection::LeftToRight => SweepDirection::RightToLeft,
        }
    }

    /// First logical angle of this half-sweep
    pub fn start_angle(self) -> u8 {
        match self {
            SweepDirection::RightToLeft => SWEEP_MAX_DEG,
            SweepDirection::LeftToRight => SWEEP_MIN_DEG,
        }
    }

    /// Last logical angle of this half-sweep
    pub fn end_angle(self) -> u8 {
        match self {
            SweepDirection::RightToLeft => SWEEP_MIN_DEG,
            SweepDirection::LeftToRight => SWEEP_MAX_DEG,
        }
    }

    /// Degrees of sweep completed at logical angle `x`, in [0, 70]
    fn progress(self, x: u8) -> u32 {
        match self {
            SweepDirection::RightToLeft => (SWEEP_MAX_DEG - x) as u32,
            SweepDirection::LeftToRight => (x - SWEEP_MIN_DEG) as u32,
        }
    }

    /// Physical servo command for logical angle `x`
    ///
    /// Both directions give the same command at the same logical angle:
    /// 80 maps to 15 and 10 maps to 165 regardless of travel direction.
    pub fn servo_angle(self, x: u8) -> u8 {
        let span = (SERVO_MAX_DEG - SERVO_MIN_DEG) as u32;
        let sweep = (SWEEP_MAX_DEG - SWEEP_MIN_DEG) as u32;
        let offset = div_rounded(span * (SWEEP_MAX_DEG - x) as u32, sweep);
        SERVO_MIN_DEG + offset as u8
    }

    /// Human-readable display angle for logical angle `x`
    ///
    /// Monotonic over the half-sweep: 0 at its first step, 180 at its
    /// last.
    pub fn display_angle(self, x: u8) -> u8 {
        let sweep = (SWEEP_MAX_DEG - SWEEP_MIN_DEG) as u32;
        div_rounded(DISPLAY_MAX_DEG as u32 * self.progress(x), sweep) as u8
    }

    /// Distance below which a step counts as a detection, in cm
    ///
    /// The asymmetry (30 vs 10) is preserved from observed behavior.
    pub fn near_threshold_cm(self) -> u16 {
        match self {
            SweepDirection::RightToLeft => 30,
            SweepDirection::LeftToRight => 10,
        }
    }

    /// Whether a measured distance triggers the highlighted line
    pub fn is_detection(self, distance_cm: u16) -> bool {
        distance_cm < self.near_threshold_cm()
    }

    /// Angular offset of the detection line from the sweep line
    pub fn detection_bias_deg(self) -> i32 {
        match self {
            SweepDirection::RightToLeft => 6,
            SweepDirection::LeftToRight => -5,
        }
    }

    /// Angular lag of the trail-erase line behind the sweep line
    pub fn trail_lag_deg(self) -> i32 {
        match self {
            SweepDirection::RightToLeft => 5,
            SweepDirection::LeftToRight => -4,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_direction_alternates() {
        let d = SweepDirection::default();
        assert_eq!(d, SweepDirection::RightToLeft);
        assert_eq!(d.flip(), SweepDirection::LeftToRight);
        assert_eq!(d.flip().flip(), SweepDirection::RightToLeft);
    }

    #[test]
    fn test_servo_mapping_endpoints() {
        // Sweep start at logical 80 commands the servo to 15.
        assert_eq!(SweepDirection::RightToLeft.servo_angle(80), 15);
        assert_eq!(SweepDirection::RightToLeft.servo_angle(10), 165);
        assert_eq!(SweepDirection::LeftToRight.servo_angle(10), 165);
        assert_eq!(SweepDirection::LeftToRight.servo_angle(80), 15);
        // Midpoint of the sweep is the midpoint of the travel.
        assert_eq!(SweepDirection::RightToLeft.servo_angle(45), 90);
    }

    #[test]
    fn test_display_mapping_endpoints() {
        assert_eq!(SweepDirection::RightToLeft.display_angle(80), 0);
        assert_eq!(SweepDirection::RightToLeft.display_angle(10), 180);
        assert_eq!(SweepDirection::LeftToRight.display_angle(10), 0);
        assert_eq!(SweepDirection::LeftToRight.display_angle(80), 180);
    }

    #[test]
    fn test_display_mapping_monotonic() {
        for dir in [SweepDirection::RightToLeft, SweepDirection::LeftToRight] {
            let mut prev = None;
            let mut x = dir.start_angle();
            loop {
                let d = dir.display_angle(x);
                if let Some(p) = prev {
                    assert!(d > p, "display angle not monotonic at {x}");
                }
                prev = Some(d);
                if x == dir.end_angle() {
                    break;
                }
                match dir {
                    SweepDirection::RightToLeft => x -= 1,
                    SweepDirection::LeftToRight => x += 1,
                }
            }
            assert_eq!(prev, Some(180));
        }
    }

    #[test]
    fn test_detection_thresholds() {
        let rtl = SweepDirection::RightToLeft;
        assert!(rtl.is_detection(29));
        assert!(!rtl.is_detection(30));

        let ltr = SweepDirection::LeftToRight;
        assert!(ltr.is_detection(9));
        assert!(!ltr.is_detection(10));
        assert!(!ltr.is_detection(29));
    }

    proptest! {
        #[test]
        fn prop_servo_mappings_agree(x in 10u8..=80) {
            // Same physical command at the same logical angle,
            // regardless of travel direction.
            prop_assert_eq!(
                SweepDirection::RightToLeft.servo_angle(x),
                SweepDirection::LeftToRight.servo_angle(x)
            );
        }

        #[test]
        fn prop_servo_command_in_travel(x in 10u8..=80) {
            let k = SweepDirection::RightToLeft.servo_angle(x);
            prop_assert!((SERVO_MIN_DEG..=SERVO_MAX_DEG).contains(&k));
        }
    }
}

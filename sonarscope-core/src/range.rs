//! Echo-time to distance conversion
//!
//! Sound travels 0.034 cm/µs at room temperature; the echo covers the
//! distance twice, so `cm = us * 0.034 / 2`. Kept in integer math as
//! `us * 17 / 1000`, truncating toward zero.

/// Convert an echo pulse width in microseconds to centimeters
pub fn echo_to_cm(pulse_us: u32) -> u16 {
    (pulse_us * 17 / 1000) as u16
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_pulse() {
        // 1000 us round trip is the canonical 17 cm.
        assert_eq!(echo_to_cm(1000), 17);
    }

    #[test]
    fn test_truncation() {
        assert_eq!(echo_to_cm(0), 0);
        assert_eq!(echo_to_cm(58), 0); // 0.986 cm truncates
        assert_eq!(echo_to_cm(59), 1);
        assert_eq!(echo_to_cm(2941), 50);
    }

    #[test]
    fn test_max_plausible_echo() {
        // 30 ms timeout ceiling corresponds to roughly 5 m.
        assert_eq!(echo_to_cm(30_000), 510);
    }
}

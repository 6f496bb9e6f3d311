//! Screen geometry and integer trigonometry
//!
//! All geometry is integer-only: angles are whole degrees and the sine
//! table is scaled by 1000, so the crate needs neither floats nor libm.

/// A point in display coordinates (origin top-left, y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// An 8-bit-per-channel RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const RED: Rgb = Rgb::new(255, 0, 0);
    pub const BLUE: Rgb = Rgb::new(0, 0, 255);
}

/// Quarter-wave sine table, one entry per degree, scaled by 1000
///
/// sin(0°) through sin(90°); the other quadrants fold onto this range.
const SIN_X1000: [i32; 91] = [
    0, 17, 35, 52, 70, 87, 105, 122, 139, 156, //
    174, 191, 208, 225, 242, 259, 276, 292, 309, 326, //
    342, 358, 375, 391, 407, 423, 438, 454, 469, 485, //
    500, 515, 530, 545, 559, 574, 588, 602, 616, 629, //
    643, 656, 669, 682, 695, 707, 719, 731, 743, 755, //
    766, 777, 788, 799, 809, 819, 829, 839, 848, 857, //
    866, 875, 883, 891, 899, 906, 914, 921, 927, 934, //
    940, 946, 951, 956, 961, 966, 970, 974, 978, 982, //
    985, 988, 990, 993, 995, 996, 998, 999, 999, 1000, //
    1000,
];

/// Sine of an integer angle in degrees, scaled by 1000
pub fn sin_x1000(degrees: i32) -> i32 {
    let d = degrees.rem_euclid(360);
    match d {
        0..=90 => SIN_X1000[d as usize],
        91..=180 => SIN_X1000[(180 - d) as usize],
        181..=270 => -SIN_X1000[(d - 180) as usize],
        _ => -SIN_X1000[(360 - d) as usize],
    }
}

/// Cosine of an integer angle in degrees, scaled by 1000
pub fn cos_x1000(degrees: i32) -> i32 {
    sin_x1000(degrees + 90)
}

/// Endpoint of a radar ray of the given length at a logical sweep angle
///
/// The factor of 2 compresses the 180° logical sweep into the display's
/// available arc: `x = px - len*cos(2a)`, `y = py + len*sin(2a)`.
pub fn ray_end(pivot: Point, length: i32, sweep_deg: i32) -> Point {
    let a2 = 2 * sweep_deg;
    Point::new(
        pivot.x - length * cos_x1000(a2) / 1000,
        pivot.y + length * sin_x1000(a2) / 1000,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cardinal_sines() {
        assert_eq!(sin_x1000(0), 0);
        assert_eq!(sin_x1000(30), 500);
        assert_eq!(sin_x1000(90), 1000);
        assert_eq!(sin_x1000(150), 500);
        assert_eq!(sin_x1000(180), 0);
        assert_eq!(sin_x1000(270), -1000);
        assert_eq!(sin_x1000(360), 0);
    }

    #[test]
    fn test_cosine_is_shifted_sine() {
        assert_eq!(cos_x1000(0), 1000);
        assert_eq!(cos_x1000(60), 500);
        assert_eq!(cos_x1000(90), 0);
        assert_eq!(cos_x1000(180), -1000);
    }

    #[test]
    fn test_negative_angles_wrap() {
        assert_eq!(sin_x1000(-90), -1000);
        assert_eq!(sin_x1000(-360), 0);
        assert_eq!(cos_x1000(-180), -1000);
    }

    #[test]
    fn test_ray_end_quarter_sweep() {
        // At logical 45° the doubled angle is 90°: the ray points
        // straight down from the pivot.
        let pivot = Point::new(80, 14);
        let end = ray_end(pivot, 200, 45);
        assert_eq!(end, Point::new(80, 214));
    }

    #[test]
    fn test_ray_end_sweep_extremes() {
        let pivot = Point::new(80, 14);
        // Logical 0°: doubled 0°, ray points toward -x.
        assert_eq!(ray_end(pivot, 200, 0), Point::new(-120, 14));
        // Logical 90°: doubled 180°, ray points toward +x.
        assert_eq!(ray_end(pivot, 200, 90), Point::new(280, 14));
    }
}

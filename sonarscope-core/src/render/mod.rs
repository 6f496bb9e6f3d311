//! Radar picture layout
//!
//! Fixed screen geometry and palette for the 160x128 display in its
//! rotated landscape orientation. All values are in display pixels.

pub mod radar;

pub use radar::RadarScene;

use crate::geom::{Point, Rgb};

/// Display width in pixels
pub const SCREEN_WIDTH: u16 = 160;

/// Display height in pixels
pub const SCREEN_HEIGHT: u16 = 128;

/// Row of the horizontal baseline the arcs hang from
pub const BASELINE_Y: i32 = 8;

/// Center of the pivot disc and the range arcs
pub const ARC_CENTER: Point = Point::new(SCREEN_WIDTH as i32 / 2, BASELINE_Y);

/// Origin of every sweep and detection line
pub const PIVOT: Point = Point::new(SCREEN_WIDTH as i32 / 2, BASELINE_Y + 6);

/// Radius of the filled pivot half-disc
pub const PIVOT_DISC_RADIUS: u16 = 5;

/// Radii of the three concentric range-scale arcs, outermost first
pub const ARC_RADII: [u16; 3] = [115, 78, 40];

/// Length of the sweep line from the pivot
pub const SWEEP_LINE_LEN: i32 = 200;

/// Length of the highlighted detection line
///
/// Kept equal to the sweep line so the trail erase reclaims detection
/// pixels; nothing else ever clears them.
pub const DETECTION_LINE_LEN: i32 = 200;

/// Top-left corner of the box cleared before reprinting the numbers
pub const TEXT_CLEAR_ORIGIN: Point = Point::new(100, 0);

/// Size of the cleared text box
pub const TEXT_CLEAR_SIZE: (u16, u16) = (30, 8);

/// Anchor of the "Deg :" label (text extends leftward)
pub const DEG_LABEL_ANCHOR: Point = Point::new(160, 0);

/// Anchor of the numeric display angle
pub const DEG_VALUE_ANCHOR: Point = Point::new(120, 0);

/// Anchor of the numeric distance readout
pub const DISTANCE_ANCHOR: Point = Point::new(10, 0);

/// Range-scale legend labels and their anchors
pub const SCALE_LEGEND: [(&str, Point); 3] = [
    ("0.25", Point::new(90, 38)),
    ("0.50", Point::new(90, 70)),
    ("1.00", Point::new(90, 110)),
];

/// Sweep line green
pub const SWEEP_COLOR: Rgb = Rgb::new(0, 207, 0);

/// Range arc pale yellow
pub const CHROME_COLOR: Rgb = Rgb::new(225, 255, 50);

/// Detection line and readout red
pub const ALERT_COLOR: Rgb = Rgb::RED;

/// Scale legend blue
pub const LEGEND_COLOR: Rgb = Rgb::BLUE;

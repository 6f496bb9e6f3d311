//! Display canvas trait
//!
//! The renderer draws through this primitive set; implementations map
//! it onto a concrete graphics stack (the drivers crate provides an
//! embedded-graphics adapter, tests use a recording mock).

use crate::geom::{Point, Rgb};

/// Errors that can occur with display operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// Communication error with the display transport
    Communication,
    /// Coordinates or dimensions outside the drawable area
    InvalidCoordinates,
}

/// Quarter of a circle, used for the radar arcs and the pivot disc
///
/// The radar chrome only ever draws the half of each circle below the
/// baseline, one quadrant at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Quadrant {
    UpperLeft,
    UpperRight,
    LowerLeft,
    LowerRight,
}

/// Horizontal anchoring for text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TextAlign {
    /// Text extends rightward from the anchor point
    Left,
    /// Text extends leftward from the anchor point
    Right,
}

/// Trait for the radar display surface
///
/// A stateful drawing color plus the handful of primitives the radar
/// picture needs. All coordinates are in the display's rotated
/// landscape frame (160 wide, 128 tall, origin top-left).
pub trait RadarCanvas {
    /// Clear the whole screen to black
    fn clear(&mut self) -> Result<(), DisplayError>;

    /// Set the color used by subsequent drawing calls
    fn set_color(&mut self, color: Rgb);

    /// Draw a one-pixel line between two points
    fn line(&mut self, from: Point, to: Point) -> Result<(), DisplayError>;

    /// Draw one quadrant of a circle outline
    fn arc_quadrant(&mut self, center: Point, radius: u16, quadrant: Quadrant)
        -> Result<(), DisplayError>;

    /// Draw one quadrant of a filled disc
    fn disc_quadrant(&mut self, center: Point, radius: u16, quadrant: Quadrant)
        -> Result<(), DisplayError>;

    /// Fill an axis-aligned rectangle
    fn fill_rect(&mut self, top_left: Point, width: u16, height: u16)
        -> Result<(), DisplayError>;

    /// Draw a text run anchored at the given point
    fn text(&mut self, anchor: Point, align: TextAlign, text: &str)
        -> Result<(), DisplayError>;
}

//! Radar scene renderer
//!
//! Issues canvas primitives for the two drawing operations the scanner
//! needs: the static background chrome once per half-sweep, and the
//! sweep/detection/trail lines plus text overlays once per step.

use core::fmt::Write;

use heapless::String;

use super::{
    ALERT_COLOR, ARC_CENTER, ARC_RADII, CHROME_COLOR, DEG_LABEL_ANCHOR, DEG_VALUE_ANCHOR,
    DETECTION_LINE_LEN, DISTANCE_ANCHOR, LEGEND_COLOR, PIVOT, PIVOT_DISC_RADIUS, SCALE_LEGEND,
    SCREEN_WIDTH, SWEEP_COLOR, SWEEP_LINE_LEN, TEXT_CLEAR_ORIGIN, TEXT_CLEAR_SIZE,
};
use crate::geom::{ray_end, Point, Rgb};
use crate::sweep::SweepStep;
use crate::traits::{DisplayError, Quadrant, RadarCanvas, TextAlign};

/// Renderer over a [`RadarCanvas`]
///
/// Owns the canvas; the scan engine drives it through
/// [`draw_background`](RadarScene::draw_background) and
/// [`draw_frame`](RadarScene::draw_frame).
pub struct RadarScene<C> {
    canvas: C,
}

impl<C: RadarCanvas> RadarScene<C> {
    pub fn new(canvas: C) -> Self {
        Self { canvas }
    }

    /// Access the underlying canvas (for init and flushing)
    pub fn canvas_mut(&mut self) -> &mut C {
        &mut self.canvas
    }

    /// Draw the static radar chrome
    ///
    /// Called once at the start of each half-sweep: pivot half-disc,
    /// three concentric range arcs, the baseline, and a cleared box
    /// under the numeric readouts.
    pub fn draw_background(&mut self) -> Result<(), DisplayError> {
        self.canvas.set_color(ALERT_COLOR);
        self.canvas
            .disc_quadrant(ARC_CENTER, PIVOT_DISC_RADIUS, Quadrant::LowerRight)?;
        self.canvas
            .disc_quadrant(ARC_CENTER, PIVOT_DISC_RADIUS, Quadrant::LowerLeft)?;

        self.canvas.set_color(CHROME_COLOR);
        for radius in ARC_RADII {
            self.canvas
                .arc_quadrant(ARC_CENTER, radius, Quadrant::LowerRight)?;
            self.canvas
                .arc_quadrant(ARC_CENTER, radius, Quadrant::LowerLeft)?;
        }
        self.canvas.line(
            Point::new(0, super::BASELINE_Y),
            Point::new(SCREEN_WIDTH as i32, super::BASELINE_Y),
        )?;

        self.canvas.set_color(Rgb::BLACK);
        self.canvas
            .fill_rect(TEXT_CLEAR_ORIGIN, TEXT_CLEAR_SIZE.0, TEXT_CLEAR_SIZE.1)
    }

    /// Draw one sweep step
    ///
    /// Detection line (when triggered), sweep line, trail-erase line,
    /// then the text overlays. A timed-out reading leaves the distance
    /// field unprinted for this frame.
    pub fn draw_frame(
        &mut self,
        step: &SweepStep,
        distance_cm: Option<u16>,
        detection: bool,
    ) -> Result<(), DisplayError> {
        let dir = step.direction;
        let angle = step.logical_deg as i32;

        if detection {
            self.canvas.set_color(ALERT_COLOR);
            let biased = angle + dir.detection_bias_deg();
            self.canvas
                .line(PIVOT, ray_end(PIVOT, DETECTION_LINE_LEN, biased))?;
        }

        self.canvas.set_color(SWEEP_COLOR);
        self.canvas
            .line(PIVOT, ray_end(PIVOT, SWEEP_LINE_LEN, angle))?;

        // Retire the line drawn a few degrees back for the trail effect
        self.canvas.set_color(Rgb::BLACK);
        let lagged = angle + dir.trail_lag_deg();
        self.canvas
            .line(PIVOT, ray_end(PIVOT, SWEEP_LINE_LEN, lagged))?;

        self.canvas.set_color(ALERT_COLOR);
        self.canvas
            .text(DEG_LABEL_ANCHOR, TextAlign::Right, "Deg :")?;

        let mut buf: String<8> = String::new();
        let _ = write!(buf, "{}", step.display_deg);
        self.canvas.text(DEG_VALUE_ANCHOR, TextAlign::Right, &buf)?;

        if let Some(cm) = distance_cm {
            buf.clear();
            let _ = write!(buf, "{}", cm);
            self.canvas.text(DISTANCE_ANCHOR, TextAlign::Right, &buf)?;
        }

        self.canvas.set_color(LEGEND_COLOR);
        for (label, anchor) in SCALE_LEGEND {
            self.canvas.text(anchor, TextAlign::Left, label)?;
        }

        Ok(())
    }
}

//! embedded-graphics canvas adapter
//!
//! Implements the core `RadarCanvas` primitive set on top of any
//! `DrawTarget<Color = Rgb565>`. Lines, rectangles and text map onto
//! embedded-graphics primitives; the quadrant arcs and discs are
//! plotted directly with integer midpoint-circle math, which keeps the
//! output pixel-identical across targets.

use embedded_graphics::draw_target::DrawTarget;
use embedded_graphics::geometry::{Point as EgPoint, Size};
use embedded_graphics::mono_font::ascii::FONT_6X10;
use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::{Rgb565, RgbColor};
use embedded_graphics::primitives::{Line, Primitive, PrimitiveStyle, Rectangle};
use embedded_graphics::text::{Alignment, Baseline, Text, TextStyleBuilder};
use embedded_graphics::{Drawable, Pixel};

use sonarscope_core::geom::{Point, Rgb};
use sonarscope_core::traits::{DisplayError, Quadrant, RadarCanvas, TextAlign};

fn to_eg(p: Point) -> EgPoint {
    EgPoint::new(p.x, p.y)
}

fn to_rgb565(c: Rgb) -> Rgb565 {
    Rgb565::new(c.r >> 3, c.g >> 2, c.b >> 3)
}

/// Per-quadrant sign of the x and y offsets from the circle center
///
/// Display coordinates: y grows downward, so "lower" means +y.
fn quadrant_signs(q: Quadrant) -> (i32, i32) {
    match q {
        Quadrant::UpperLeft => (-1, -1),
        Quadrant::UpperRight => (1, -1),
        Quadrant::LowerLeft => (-1, 1),
        Quadrant::LowerRight => (1, 1),
    }
}

fn isqrt(v: u32) -> u32 {
    let mut r = 0;
    while (r + 1) * (r + 1) <= v {
        r += 1;
    }
    r
}

/// `RadarCanvas` over an embedded-graphics draw target
pub struct EgCanvas<D> {
    target: D,
    color: Rgb565,
}

impl<D: DrawTarget<Color = Rgb565>> EgCanvas<D> {
    pub fn new(target: D) -> Self {
        Self {
            target,
            color: Rgb565::BLACK,
        }
    }

    /// Access the draw target, e.g. to flush a buffered display
    pub fn target_mut(&mut self) -> &mut D {
        &mut self.target
    }

    fn plot(&mut self, x: i32, y: i32) -> Result<(), DisplayError> {
        Pixel(EgPoint::new(x, y), self.color)
            .draw(&mut self.target)
            .map_err(|_| DisplayError::Communication)
    }
}

impl<D: DrawTarget<Color = Rgb565>> RadarCanvas for EgCanvas<D> {
    fn clear(&mut self) -> Result<(), DisplayError> {
        self.target
            .clear(Rgb565::BLACK)
            .map_err(|_| DisplayError::Communication)
    }

    fn set_color(&mut self, color: Rgb) {
        self.color = to_rgb565(color);
    }

    fn line(&mut self, from: Point, to: Point) -> Result<(), DisplayError> {
        Line::new(to_eg(from), to_eg(to))
            .into_styled(PrimitiveStyle::with_stroke(self.color, 1))
            .draw(&mut self.target)
            .map_err(|_| DisplayError::Communication)
    }

    fn arc_quadrant(
        &mut self,
        center: Point,
        radius: u16,
        quadrant: Quadrant,
    ) -> Result<(), DisplayError> {
        let (sx, sy) = quadrant_signs(quadrant);
        let r = radius as i32;

        // Midpoint circle, one quadrant: two mirrored octants.
        let mut x = 0;
        let mut y = r;
        let mut d = 1 - r;
        while x <= y {
            self.plot(center.x + sx * x, center.y + sy * y)?;
            self.plot(center.x + sx * y, center.y + sy * x)?;
            if d < 0 {
                d += 2 * x + 3;
            } else {
                d += 2 * (x - y) + 5;
                y -= 1;
            }
            x += 1;
        }
        Ok(())
    }

    fn disc_quadrant(
        &mut self,
        center: Point,
        radius: u16,
        quadrant: Quadrant,
    ) -> Result<(), DisplayError> {
        let (sx, sy) = quadrant_signs(quadrant);
        let r = radius as u32;

        for dx in 0..=r {
            let height = isqrt(r * r - dx * dx) as i32;
            let x = center.x + sx * dx as i32;
            for dy in 0..=height {
                self.plot(x, center.y + sy * dy)?;
            }
        }
        Ok(())
    }

    fn fill_rect(&mut self, top_left: Point, width: u16, height: u16) -> Result<(), DisplayError> {
        Rectangle::new(to_eg(top_left), Size::new(width as u32, height as u32))
            .into_styled(PrimitiveStyle::with_fill(self.color))
            .draw(&mut self.target)
            .map_err(|_| DisplayError::Communication)
    }

    fn text(&mut self, anchor: Point, align: TextAlign, text: &str) -> Result<(), DisplayError> {
        let character_style = MonoTextStyle::new(&FONT_6X10, self.color);
        let text_style = TextStyleBuilder::new()
            .alignment(match align {
                TextAlign::Left => Alignment::Left,
                TextAlign::Right => Alignment::Right,
            })
            .baseline(Baseline::Top)
            .build();

        Text::with_text_style(text, to_eg(anchor), character_style, text_style)
            .draw(&mut self.target)
            .map(|_| ())
            .map_err(|_| DisplayError::Communication)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::convert::Infallible;
    use embedded_graphics::geometry::OriginDimensions;

    const SIDE: usize = 32;

    /// Tiny framebuffer target for pixel-exact assertions
    struct TestDisplay {
        pixels: [[Option<Rgb565>; SIDE]; SIDE],
    }

    impl TestDisplay {
        fn new() -> Self {
            Self {
                pixels: [[None; SIDE]; SIDE],
            }
        }

        fn at(&self, x: i32, y: i32) -> Option<Rgb565> {
            self.pixels[y as usize][x as usize]
        }
    }

    impl OriginDimensions for TestDisplay {
        fn size(&self) -> Size {
            Size::new(SIDE as u32, SIDE as u32)
        }
    }

    impl DrawTarget for TestDisplay {
        type Color = Rgb565;
        type Error = Infallible;

        fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Infallible>
        where
            I: IntoIterator<Item = Pixel<Rgb565>>,
        {
            for Pixel(p, c) in pixels {
                if (0..SIDE as i32).contains(&p.x) && (0..SIDE as i32).contains(&p.y) {
                    self.pixels[p.y as usize][p.x as usize] = Some(c);
                }
            }
            Ok(())
        }
    }

    const RED: Rgb = Rgb::RED;
    const RED565: Rgb565 = Rgb565::new(31, 0, 0);

    #[test]
    fn test_color_conversion() {
        assert_eq!(to_rgb565(Rgb::new(255, 255, 255)), Rgb565::new(31, 63, 31));
        assert_eq!(to_rgb565(Rgb::new(0, 207, 0)), Rgb565::new(0, 51, 0));
    }

    #[test]
    fn test_horizontal_line() {
        let mut canvas = EgCanvas::new(TestDisplay::new());
        canvas.set_color(RED);
        canvas.line(Point::new(0, 5), Point::new(3, 5)).unwrap();

        let display = canvas.target_mut();
        for x in 0..=3 {
            assert_eq!(display.at(x, 5), Some(RED565));
        }
        assert_eq!(display.at(4, 5), None);
    }

    #[test]
    fn test_offscreen_line_is_clipped() {
        let mut canvas = EgCanvas::new(TestDisplay::new());
        canvas.set_color(RED);
        // Endpoint far outside the target, as the radar rays are.
        canvas.line(Point::new(5, 5), Point::new(200, 5)).unwrap();
        assert_eq!(canvas.target_mut().at(31, 5), Some(RED565));
    }

    #[test]
    fn test_arc_quadrant_pixels() {
        let mut canvas = EgCanvas::new(TestDisplay::new());
        canvas.set_color(RED);
        canvas
            .arc_quadrant(Point::new(10, 10), 2, Quadrant::LowerRight)
            .unwrap();

        let display = canvas.target_mut();
        for (x, y) in [(10, 12), (11, 12), (12, 11), (12, 10)] {
            assert_eq!(display.at(x, y), Some(RED565), "missing arc pixel at ({x},{y})");
        }
        // The opposite quadrant stays untouched.
        assert_eq!(display.at(8, 10), None);
        assert_eq!(display.at(10, 8), None);
    }

    #[test]
    fn test_disc_quadrant_fill() {
        let mut canvas = EgCanvas::new(TestDisplay::new());
        canvas.set_color(RED);
        canvas
            .disc_quadrant(Point::new(10, 10), 2, Quadrant::LowerLeft)
            .unwrap();

        let display = canvas.target_mut();
        // Full-height column at the center, shrinking toward the rim.
        assert_eq!(display.at(10, 12), Some(RED565));
        assert_eq!(display.at(9, 11), Some(RED565));
        assert_eq!(display.at(8, 10), Some(RED565));
        assert_eq!(display.at(9, 12), None);
        assert_eq!(display.at(11, 11), None);
    }

    #[test]
    fn test_right_aligned_text_ends_at_anchor() {
        let mut canvas = EgCanvas::new(TestDisplay::new());
        canvas.set_color(RED);
        canvas
            .text(Point::new(20, 0), TextAlign::Right, "AB")
            .unwrap();

        let display = canvas.target_mut();
        let mut leftward = false;
        for y in 0..SIDE as i32 {
            for x in 0..SIDE as i32 {
                if display.at(x, y).is_some() {
                    assert!(x < 20, "glyph pixel at ({x},{y}) crosses the anchor");
                    leftward = true;
                }
            }
        }
        assert!(leftward, "no glyph pixels drawn");
    }
}

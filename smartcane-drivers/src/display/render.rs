//! Screen layout
//!
//! 128x64 panel, 6x10 font:
//!
//! ```text
//! y=0   header
//! y=12  ─────────── (rule, optional)
//! y=16  line 0
//! y=28  line 1
//! y=40  line 2
//! y=52  line 3
//! ```

use embedded_graphics::{
    mono_font::{ascii::FONT_6X10, MonoTextStyle},
    pixelcolor::BinaryColor,
    prelude::*,
    primitives::{Line, PrimitiveStyle},
    text::{Baseline, Text},
};
use smartcane_core::alert::Screen;

/// Panel width in pixels
pub const WIDTH: i32 = 128;
/// Row of the header rule
pub const RULE_Y: i32 = 12;
/// Top of the first body line
pub const FIRST_LINE_Y: i32 = 16;
/// Body line pitch
pub const LINE_PITCH: i32 = 12;

/// Draw a screen onto a cleared target
pub fn draw_screen<D>(target: &mut D, screen: &Screen) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    let style = MonoTextStyle::new(&FONT_6X10, BinaryColor::On);

    Text::with_baseline(screen.header(), Point::zero(), style, Baseline::Top).draw(target)?;

    if screen.has_rule() {
        Line::new(Point::new(0, RULE_Y), Point::new(WIDTH - 1, RULE_Y))
            .into_styled(PrimitiveStyle::with_stroke(BinaryColor::On, 1))
            .draw(target)?;
    }

    let mut y = FIRST_LINE_Y;
    for line in screen.lines() {
        Text::with_baseline(line, Point::new(0, y), style, Baseline::Top).draw(target)?;
        y += LINE_PITCH;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::convert::Infallible;
    use smartcane_core::sensor::SensorSnapshot;

    /// 128x64 frame buffer that remembers lit pixels
    struct Canvas {
        lit: [[bool; 128]; 64],
    }

    impl Canvas {
        fn new() -> Self {
            Self {
                lit: [[false; 128]; 64],
            }
        }

        fn row_count(&self, y: usize) -> usize {
            self.lit[y].iter().filter(|on| **on).count()
        }

        fn band_lit(&self, rows: core::ops::Range<usize>) -> bool {
            rows.into_iter().any(|y| self.row_count(y) > 0)
        }
    }

    impl OriginDimensions for Canvas {
        fn size(&self) -> Size {
            Size::new(128, 64)
        }
    }

    impl DrawTarget for Canvas {
        type Color = BinaryColor;
        type Error = Infallible;

        fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
        where
            I: IntoIterator<Item = Pixel<Self::Color>>,
        {
            for Pixel(point, color) in pixels {
                let in_bounds = (0..128).contains(&point.x) && (0..64).contains(&point.y);
                if in_bounds && color.is_on() {
                    self.lit[point.y as usize][point.x as usize] = true;
                }
            }
            Ok(())
        }
    }

    #[test]
    fn test_alert_layout() {
        let mut canvas = Canvas::new();
        let screen = Screen::alert(&SensorSnapshot::default());
        draw_screen(&mut canvas, &screen).unwrap();

        // Header
        assert!(canvas.band_lit(0..10));
        // Full-width rule
        assert_eq!(canvas.row_count(12), 128);
        // Four body lines
        for i in 0..4 {
            let top = 16 + i * 12;
            assert!(canvas.band_lit(top..top + 10), "line {i} empty");
        }
    }

    #[test]
    fn test_welcome_has_no_rule() {
        let mut canvas = Canvas::new();
        draw_screen(&mut canvas, &Screen::welcome()).unwrap();

        assert!(canvas.band_lit(0..10));
        assert_eq!(canvas.row_count(12), 0);
        assert!(canvas.band_lit(16..26));
        assert!(!canvas.band_lit(28..64));
    }

    #[test]
    fn test_empty_screen_draws_nothing() {
        let mut canvas = Canvas::new();
        draw_screen(&mut canvas, &Screen::new()).unwrap();
        assert!(!canvas.band_lit(0..64));
    }
}

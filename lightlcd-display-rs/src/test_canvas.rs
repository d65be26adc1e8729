//! In-memory 128×32 frame buffer for host tests.

use core::convert::Infallible;

use embedded_graphics::{pixelcolor::BinaryColor, prelude::*};

const WIDTH: usize = 128;
const HEIGHT: usize = 32;

/// Monochrome frame buffer that silently drops off-panel pixels, like the
/// SSD1306 buffer does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Canvas {
    pixels: [[bool; WIDTH]; HEIGHT],
}

impl Canvas {
    pub(crate) fn new() -> Self {
        Self {
            pixels: [[false; WIDTH]; HEIGHT],
        }
    }

    pub(crate) fn set(&mut self, x: usize, y: usize) {
        self.pixels[y][x] = true;
    }

    pub(crate) fn is_on(&self, x: usize, y: usize) -> bool {
        self.pixels[y][x]
    }

    /// Rows lit in column `x`.
    pub(crate) fn lit_rows(&self, x: usize) -> impl Iterator<Item = usize> + '_ {
        (0..HEIGHT).filter(move |&y| self.pixels[y][x])
    }

    /// Total lit pixels.
    pub(crate) fn lit(&self) -> usize {
        self.pixels
            .iter()
            .map(|row| row.iter().filter(|&&p| p).count())
            .sum()
    }
}

impl OriginDimensions for Canvas {
    fn size(&self) -> Size {
        Size::new(WIDTH as u32, HEIGHT as u32)
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
            if let (Ok(x), Ok(y)) = (usize::try_from(point.x), usize::try_from(point.y)) {
                if x < WIDTH && y < HEIGHT {
                    self.pixels[y][x] = color.is_on();
                }
            }
        }
        Ok(())
    }
}

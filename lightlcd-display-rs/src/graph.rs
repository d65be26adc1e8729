//! Scrolling column plot of the light level.
//!
//! Each [`GraphRenderer::render_step`] plots one point and moves one column
//! right. The renderer never waits for a new sample: if none has arrived
//! since the last step, the same row is plotted again and the trace shows a
//! flat segment.

use embedded_graphics::{pixelcolor::BinaryColor, prelude::*, primitives::Rectangle};

use lightlcd::pipeline::{Cursor, ScaledSample};

use crate::layout::DisplayConfig;

/// Column-by-column plotter that wraps at the right edge.
///
/// # Example
///
/// ```no_run
/// # use lightlcd_display_rs::{DisplayConfig, GraphRenderer};
/// # use lightlcd::pipeline::ScaledSample;
/// # fn example(display: &mut impl embedded_graphics::draw_target::DrawTarget<Color = embedded_graphics::pixelcolor::BinaryColor>) {
/// let mut graph = GraphRenderer::new(&DisplayConfig::default());
/// graph.render_step(display, ScaledSample::from_value(12)).ok();
/// assert_eq!(graph.cursor(), 1);
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct GraphRenderer {
    cursor: Cursor,
    height: u8,
    clear_ahead: u32,
}

impl GraphRenderer {
    /// A renderer with its cursor at column 0.
    pub fn new(config: &DisplayConfig) -> Self {
        debug_assert!(
            config.clear_ahead_columns > 1,
            "clear-ahead width must exceed one column"
        );
        Self {
            cursor: Cursor::new(config.display_width),
            height: config.display_height,
            clear_ahead: config.clear_ahead_columns,
        }
    }

    /// Column the next point will be plotted in.
    pub fn cursor(&self) -> u32 {
        self.cursor.x()
    }

    /// Move the cursor back to column 0.
    pub fn reset(&mut self) {
        self.cursor.reset();
    }

    /// Plot one point and advance.
    ///
    /// 1. Clear `clear_ahead_columns` full-height columns starting at the
    ///    cursor (clipped at the right edge) to erase the previous pass.
    /// 2. Set the pixel at `(cursor, sample.row(height))`.
    /// 3. Advance the cursor, wrapping to column 0 at the right edge.
    pub fn render_step<D>(&mut self, display: &mut D, sample: ScaledSample) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = BinaryColor>,
    {
        let x = self.cursor.x() as i32;

        let band = Rectangle::new(
            Point::new(x, 0),
            Size::new(self.clear_ahead, u32::from(self.height)),
        )
        .intersection(&display.bounding_box());
        display.fill_solid(&band, BinaryColor::Off)?;

        let y = i32::from(sample.row(self.height));
        Pixel(Point::new(x, y), BinaryColor::On).draw(display)?;

        self.cursor.advance();
        Ok(())
    }

    #[cfg(test)]
    pub(crate) fn set_cursor(&mut self, x: u32) {
        self.cursor.set(x);
    }
}

//! Display configuration and the text-mode view.
//!
//! This module defines [`DisplayConfig`], the single source of panel
//! geometry, and [`render_text`], which draws the latest reading as a
//! percentage using `embedded-graphics`.

use core::fmt::Write;

use embedded_graphics::{
    mono_font::{ascii::FONT_6X10, MonoTextStyle},
    pixelcolor::BinaryColor,
    prelude::*,
    text::{Alignment, Text},
};
use heapless::String;

use lightlcd::pipeline::{ScaledSample, CLEAR_AHEAD_COLUMNS, DISPLAY_HEIGHT, DISPLAY_WIDTH};

// ── DisplayConfig ────────────────────────────────────────────────────────

/// Configuration for the display views and update task.
///
/// [`DisplayConfig::default()`] reproduces the board geometry (128×32,
/// six columns cleared ahead of the plot, minimum contrast).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayConfig {
    // ── Panel geometry ───────────────────────────────────────────────
    /// Total display width in pixels. Default: 128.
    pub display_width: u32,
    /// Total display height in pixels. Default: 32.
    pub display_height: u8,
    /// Columns cleared at and ahead of the graph cursor each step. Must be
    /// greater than 1. Default: 6.
    pub clear_ahead_columns: u32,

    // ── Panel settings ───────────────────────────────────────────────
    /// Contrast level sent after initialisation. Default: 0 (minimum).
    pub contrast: u8,

    // ── Text view ────────────────────────────────────────────────────
    /// Baseline Y coordinate of the "Light" label. Default: 11.
    pub text_label_y: i32,
    /// Baseline Y coordinate of the percentage. Default: 26.
    pub text_value_y: i32,

    // ── Update task ──────────────────────────────────────────────────
    /// Pause after a failed render or flush, in milliseconds. Default: 10.
    pub retry_backoff_ms: u64,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            display_width: DISPLAY_WIDTH,
            display_height: DISPLAY_HEIGHT,
            clear_ahead_columns: CLEAR_AHEAD_COLUMNS,
            contrast: 0,
            text_label_y: 11,
            text_value_y: 26,
            retry_backoff_ms: 10,
        }
    }
}

// ── Text view ────────────────────────────────────────────────────────────

/// Render `sample` as a brightness percentage.
///
/// Clears the whole frame buffer first; the text view owns the panel.
///
/// # Layout
///
/// ```text
/// ┌──────────────────────────────────────┐
/// │                Light                 │  ← text_label_y
/// │                 52%                  │  ← text_value_y
/// └──────────────────────────────────────┘
/// ```
pub fn render_text<D>(
    display: &mut D,
    sample: ScaledSample,
    config: &DisplayConfig,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    display.clear(BinaryColor::Off)?;

    let text_style = MonoTextStyle::new(&FONT_6X10, BinaryColor::On);
    let centre_x = config.display_width as i32 / 2;

    Text::with_alignment(
        "Light",
        Point::new(centre_x, config.text_label_y),
        text_style,
        Alignment::Center,
    )
    .draw(display)?;

    let mut buf: String<8> = String::new();
    // core::fmt::Write — "100%" always fits.
    let _ = write!(buf, "{}%", sample.brightness_percent(config.display_height));
    Text::with_alignment(
        buf.as_str(),
        Point::new(centre_x, config.text_value_y),
        text_style,
        Alignment::Center,
    )
    .draw(display)?;

    Ok(())
}

// ── Tests ────────────────────────────────────────────────────────────────

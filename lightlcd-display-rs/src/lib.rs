//! Ambient-light graph for a 128×32 SSD1306 panel using Embassy.
//!
//! This crate provides [`LcdDriver`], a wrapper around the [`ssd1306`]
//! crate in async buffered-graphics mode with a backlight line and contrast
//! control; [`GraphRenderer`] and [`render_text`], the two views of the
//! latest light reading; [`LightView`], which switches between them; and
//! [`display_update_task`], the never-ending render loop.
//!
//! # Quick Start
//!
//! ```ignore
//! use lightlcd_display_rs::{display_update_task, DisplayConfig, LcdDriver};
//!
//! // In your Embassy main:
//! let lcd = LcdDriver::new(i2c, 0x3C, backlight);
//! spawner.spawn(lcd_task(lcd, latest, buttons, DisplayConfig::default()).unwrap());
//!
//! // Thin task wrapper (Embassy tasks cannot be generic):
//! #[embassy_executor::task]
//! async fn lcd_task(
//!     driver: LcdDriver<MyI2cType, Output<'static>>,
//!     latest: &'static LatestSample,
//!     buttons: Buttons,
//!     config: DisplayConfig,
//! ) {
//!     display_update_task(driver, latest, buttons, config).await;
//! }
//! ```
//!
//! # Crate Features
//!
//! - **`defmt`**: structured logging via [`defmt`].
//! - **`task`**: [`display_update_task`], which needs `embassy-time`.

#![no_std]

#[cfg(feature = "task")]
pub mod display_task;
pub mod driver;
pub mod error;
pub mod graph;
pub mod layout;
pub mod view;

#[cfg(test)]
pub(crate) mod test_bus;
#[cfg(test)]
pub(crate) mod test_canvas;

// ── Re-exports for convenience ───────────────────────────────────────────

#[cfg(feature = "task")]
pub use display_task::display_update_task;
pub use driver::{LcdDriver, PANEL_HEIGHT, PANEL_WIDTH};
pub use error::LcdError;
pub use graph::GraphRenderer;
pub use layout::{render_text, DisplayConfig};
pub use view::LightView;

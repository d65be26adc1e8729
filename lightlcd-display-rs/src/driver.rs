//! Core LCD driver wrapping the `ssd1306` crate in async buffered graphics mode.
//!
//! [`LcdDriver`] manages the panel lifecycle: construction without bus
//! traffic, explicit async initialisation, backlight and contrast control,
//! and frame buffer flush.

use display_interface_i2c::I2CInterface;
use embedded_hal::digital::OutputPin;
use embedded_hal_async::i2c::I2c;
use ssd1306::{
    mode::BufferedGraphicsModeAsync, prelude::*, size::DisplaySize, I2CDisplayInterface,
    Ssd1306Async,
};

use lightlcd::pipeline::{DISPLAY_HEIGHT, DISPLAY_WIDTH};

use crate::error::LcdError;

/// Concrete display type used internally by [`LcdDriver`].
pub type Display<I2C> = Ssd1306Async<
    I2CInterface<I2C>,
    DisplaySize128x32,
    BufferedGraphicsModeAsync<DisplaySize128x32>,
>;

/// Width of the panel [`Display`] drives, in pixels.
pub const PANEL_WIDTH: u32 = <DisplaySize128x32 as DisplaySize>::WIDTH as u32;

/// Height of the panel [`Display`] drives, in pixels.
pub const PANEL_HEIGHT: u8 = <DisplaySize128x32 as DisplaySize>::HEIGHT;

// Samples are scaled to the pipeline geometry; the panel must match it.
const _: () = assert!(PANEL_WIDTH == DISPLAY_WIDTH && PANEL_HEIGHT == DISPLAY_HEIGHT);

/// Pre-charge period sent with every contrast change.
const PRECHARGE: u8 = 0x1;

/// Async driver for a 128×32 SSD1306 panel over I2C with a separate
/// backlight enable line.
///
/// # Lifecycle
///
/// 1. [`LcdDriver::new()`]: constructs the driver without any I2C traffic.
/// 2. [`LcdDriver::init()`]: sends the controller initialisation sequence.
/// 3. [`LcdDriver::set_backlight()`] / [`LcdDriver::set_contrast()`].
/// 4. Draw into the frame buffer via [`LcdDriver::display_mut()`].
/// 5. [`LcdDriver::flush()`]: transfers the frame buffer to hardware.
///
/// # Example
///
/// ```no_run
/// use lightlcd_display_rs::LcdDriver;
///
/// # async fn example(
/// #     i2c: impl embedded_hal_async::i2c::I2c,
/// #     backlight: impl embedded_hal::digital::OutputPin,
/// # ) {
/// let mut lcd = LcdDriver::new(i2c, 0x3C, backlight);
/// lcd.init().await.unwrap();
/// lcd.set_backlight(true).unwrap();
/// lcd.set_contrast(0).await.unwrap();
/// lcd.clear_buffer();
/// lcd.flush().await.unwrap();
/// # }
/// ```
pub struct LcdDriver<I2C, BL> {
    display: Display<I2C>,
    backlight: BL,
    initialized: bool,
}

impl<I2C, BL> LcdDriver<I2C, BL>
where
    I2C: I2c,
    BL: OutputPin,
{
    /// Wrap the bus and backlight pin. Nothing is sent to the panel until
    /// [`init()`](Self::init).
    ///
    /// # Arguments
    /// * `i2c`: the bus, owned outright; nothing else talks on it.
    /// * `address`: 7-bit controller address, `0x3C` on this module.
    /// * `backlight`: active-high backlight enable.
    pub fn new(i2c: I2C, address: u8, backlight: BL) -> Self {
        let interface = I2CDisplayInterface::new_custom_address(i2c, address);
        let display = Ssd1306Async::new(interface, DisplaySize128x32, DisplayRotation::Rotate0)
            .into_buffered_graphics_mode();

        Self {
            display,
            backlight,
            initialized: false,
        }
    }

    /// Initialise the display controller.
    ///
    /// Must be called exactly once before any rendering or flush operations.
    ///
    /// # Errors
    ///
    /// Returns [`LcdError::InitializationFailed`] if the controller does not
    /// respond.
    pub async fn init(&mut self) -> Result<(), LcdError> {
        self.display
            .init()
            .await
            .map_err(|_| LcdError::InitializationFailed)?;
        self.initialized = true;
        Ok(())
    }

    /// Switch the backlight on or off.
    ///
    /// Works before [`init()`](Self::init); the backlight is independent of
    /// the display controller.
    ///
    /// # Errors
    ///
    /// Returns [`LcdError::Backlight`] if the pin cannot be driven.
    pub fn set_backlight(&mut self, on: bool) -> Result<(), LcdError> {
        let result = if on {
            self.backlight.set_high()
        } else {
            self.backlight.set_low()
        };
        result.map_err(|_| LcdError::Backlight)
    }

    /// Set the panel contrast, 0 (lowest) to 255.
    ///
    /// # Errors
    ///
    /// Returns [`LcdError::NotInitialized`] if [`init()`](Self::init) has
    /// not been called, or [`LcdError::Display`] on a bus-level failure.
    pub async fn set_contrast(&mut self, level: u8) -> Result<(), LcdError> {
        if !self.is_initialized() {
            return Err(LcdError::NotInitialized);
        }
        self.display
            .set_brightness(Brightness::custom(PRECHARGE, level))
            .await?;
        Ok(())
    }

    /// Blank the frame buffer.
    ///
    /// Does **not** send any I2C traffic; the panel is unchanged until
    /// [`flush()`](Self::flush) is called.
    pub fn clear_buffer(&mut self) {
        self.display.clear_buffer();
    }

    /// Transfer the frame buffer to the panel via I2C.
    ///
    /// # Errors
    ///
    /// Returns [`LcdError::NotInitialized`] if [`init()`](Self::init) has
    /// not been called, or [`LcdError::Display`] on a bus-level failure.
    pub async fn flush(&mut self) -> Result<(), LcdError> {
        if !self.is_initialized() {
            return Err(LcdError::NotInitialized);
        }
        self.display.flush().await?;
        Ok(())
    }

    /// The frame buffer as an `embedded-graphics` [`DrawTarget`], or `None`
    /// before a successful [`init()`](Self::init).
    ///
    /// [`DrawTarget`]: embedded_graphics::draw_target::DrawTarget
    pub fn display_mut(&mut self) -> Option<&mut Display<I2C>> {
        if self.is_initialized() {
            Some(&mut self.display)
        } else {
            None
        }
    }

    /// `true` once [`init()`](Self::init) has succeeded.
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }
}

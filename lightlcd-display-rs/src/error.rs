//! Error types for the LCD driver.

use display_interface::DisplayError;

/// Errors that can occur during display operations.
///
/// The `ssd1306` crate wraps all underlying I2C bus errors into
/// [`DisplayError`], so this enum is non-generic.
#[derive(Debug)]
pub enum LcdError {
    /// Display interface error (wraps I2C and other bus-level failures).
    Display(DisplayError),
    /// Display controller did not respond to initialisation.
    InitializationFailed,
    /// An operation was attempted before [`LcdDriver::init()`](crate::LcdDriver::init)
    /// was called.
    NotInitialized,
    /// The backlight pin could not be driven.
    Backlight,
}

impl From<DisplayError> for LcdError {
    fn from(e: DisplayError) -> Self {
        LcdError::Display(e)
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for LcdError {
    fn format(&self, f: defmt::Formatter) {
        match self {
            LcdError::Display(_e) => defmt::write!(f, "Display interface error"),
            LcdError::InitializationFailed => defmt::write!(f, "Initialization failed"),
            LcdError::NotInitialized => defmt::write!(f, "Not initialized"),
            LcdError::Backlight => defmt::write!(f, "Backlight pin error"),
        }
    }
}

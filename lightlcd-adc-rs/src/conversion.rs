//! Peripheral boundary for the sampler.
//!
//! This is the only part of the crate that touches hardware. Board crates
//! implement [`Conversion`] for their ADC and hand it to
//! [`Sampler`](crate::Sampler).

use crate::config::AdcConfig;

/// One analog input channel able to perform single, interrupt-completed
/// conversions.
#[allow(async_fn_in_trait)]
pub trait Conversion {
    /// Peripheral error type.
    type Error;

    /// Apply conversion parameters and register for completion interrupts.
    ///
    /// Called exactly once, before the first [`convert()`](Self::convert).
    /// Parameters the hardware fixes (some converters have a fixed clock or
    /// reference) may be ignored; parameters the hardware cannot honour at
    /// all must be reported as an error.
    fn configure(&mut self, config: &AdcConfig) -> Result<(), Self::Error>;

    /// Start one conversion and wait for its completion interrupt.
    ///
    /// Returns the raw result code.
    async fn convert(&mut self) -> Result<u16, Self::Error>;
}

//! Error types for the sampler.

use core::fmt;

use lightlcd::pipeline::SampleError;

/// Reasons an [`AdcConfig`](crate::AdcConfig) cannot drive the sampler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Resolution other than 12-bit.
    UnsupportedResolution,
    /// Signed (differential) conversions requested.
    SignedMode,
    /// Trigger is not software-started.
    NotManualTrigger,
    /// Completion interrupt disabled.
    NoCompletionInterrupt,
    /// ADC clock of 0 Hz.
    ZeroClockRate,
}

/// Errors that can occur while configuring or running the sampler.
#[derive(Debug)]
pub enum SamplerError<E> {
    /// Underlying ADC peripheral error.
    Adc(E),

    /// Conversion parameters rejected before reaching the peripheral.
    InvalidConfig(ConfigError),

    /// [`configure()`](crate::Sampler::configure) called a second time.
    AlreadyConfigured,

    /// A conversion was requested before
    /// [`configure()`](crate::Sampler::configure).
    NotConfigured,

    /// The peripheral returned a code outside the 12-bit range.
    Sample(SampleError),
}

// Allow ergonomic `?` propagation from raw ADC errors.
impl<E> From<E> for SamplerError<E> {
    fn from(error: E) -> Self {
        SamplerError::Adc(error)
    }
}

impl<E: fmt::Debug> fmt::Display for SamplerError<E> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SamplerError::Adc(e) => write!(f, "ADC error: {:?}", e),
            SamplerError::InvalidConfig(c) => write!(f, "Invalid ADC configuration: {:?}", c),
            SamplerError::AlreadyConfigured => write!(f, "ADC already configured"),
            SamplerError::NotConfigured => write!(f, "ADC not configured"),
            SamplerError::Sample(SampleError::OutOfRange(code)) => {
                write!(f, "ADC code {} out of 12-bit range", code)
            }
        }
    }
}

#[cfg(feature = "defmt")]
impl<E: defmt::Format> defmt::Format for SamplerError<E> {
    fn format(&self, f: defmt::Formatter) {
        match self {
            SamplerError::Adc(e) => defmt::write!(f, "ADC error: {}", e),
            SamplerError::InvalidConfig(c) => defmt::write!(f, "Invalid ADC configuration: {}", c),
            SamplerError::AlreadyConfigured => defmt::write!(f, "ADC already configured"),
            SamplerError::NotConfigured => defmt::write!(f, "ADC not configured"),
            SamplerError::Sample(e) => defmt::write!(f, "Bad sample: {}", e),
        }
    }
}

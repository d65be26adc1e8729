//! Conversion parameters for the light-sensor ADC channel.
//!
//! [`AdcConfig::default()`] is the only configuration the [`Sampler`]
//! accepts without modification: 12-bit unsigned conversions against the
//! internal bandgap reference, started by software, one completion
//! interrupt per conversion.
//!
//! [`Sampler`]: crate::Sampler

use crate::error::ConfigError;

// ---------------------------------------------------------------------------
// Defaults
// ---------------------------------------------------------------------------

/// ADC clock requested at configuration time.
pub const DEFAULT_CLOCK_RATE_HZ: u32 = 200_000;

/// Analog input the light sensor is wired to.
pub const LIGHT_SENSOR_CHANNEL: u8 = 0;

/// Delay before retrying after a failed conversion.
#[cfg_attr(not(feature = "task"), allow(dead_code))]
pub(crate) const RETRY_BACKOFF_MS: u64 = 10;

// ---------------------------------------------------------------------------
// Parameter enums
// ---------------------------------------------------------------------------

/// Conversion resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Resolution {
    /// 8-bit results.
    Bits8,
    /// 12-bit results, `0..=4095`.
    Bits12,
}

/// Voltage reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Reference {
    /// Internal bandgap.
    Bandgap,
    /// Supply rail.
    Vcc,
    /// External reference pin.
    External,
}

/// Result signedness.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SignMode {
    /// Single-ended, unsigned results.
    Unsigned,
    /// Differential, signed results.
    Signed,
}

/// What starts a conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Trigger {
    /// Software request, one conversion per request.
    Manual,
    /// Hardware restarts conversions on its own.
    FreeRunning,
}

/// Channel interrupt behaviour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InterruptMode {
    /// Interrupt when a conversion completes.
    Complete,
    /// No channel interrupt.
    Disabled,
}

// ---------------------------------------------------------------------------
// AdcConfig
// ---------------------------------------------------------------------------

/// Complete set of conversion parameters applied by
/// [`Sampler::configure()`](crate::Sampler::configure).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AdcConfig {
    /// Conversion resolution. Default: 12-bit.
    pub resolution: Resolution,
    /// Voltage reference. Default: internal bandgap.
    pub reference: Reference,
    /// Signedness. Default: unsigned.
    pub sign: SignMode,
    /// Conversion trigger. Default: manual.
    pub trigger: Trigger,
    /// ADC clock in Hz. Default: 200 kHz.
    pub clock_rate_hz: u32,
    /// Analog input channel. Default: [`LIGHT_SENSOR_CHANNEL`].
    pub channel: u8,
    /// Channel interrupt. Default: on completion.
    pub interrupt: InterruptMode,
}

impl Default for AdcConfig {
    fn default() -> Self {
        Self {
            resolution: Resolution::Bits12,
            reference: Reference::Bandgap,
            sign: SignMode::Unsigned,
            trigger: Trigger::Manual,
            clock_rate_hz: DEFAULT_CLOCK_RATE_HZ,
            channel: LIGHT_SENSOR_CHANNEL,
            interrupt: InterruptMode::Complete,
        }
    }
}

impl AdcConfig {
    /// Check that these parameters can drive the sampler.
    ///
    /// The scaling assumes 12-bit unsigned codes, and the sampler itself
    /// restarts every conversion from its completion handler, so the
    /// trigger must be manual and the completion interrupt enabled.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.resolution != Resolution::Bits12 {
            return Err(ConfigError::UnsupportedResolution);
        }
        if self.sign != SignMode::Unsigned {
            return Err(ConfigError::SignedMode);
        }
        if self.trigger != Trigger::Manual {
            return Err(ConfigError::NotManualTrigger);
        }
        if self.interrupt != InterruptMode::Complete {
            return Err(ConfigError::NoCompletionInterrupt);
        }
        if self.clock_rate_hz == 0 {
            return Err(ConfigError::ZeroClockRate);
        }
        Ok(())
    }
}

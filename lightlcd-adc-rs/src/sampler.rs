//! Configured sampler that scales and publishes every conversion.
//!
//! [`Sampler`] wraps a [`Conversion`] implementation with configuration
//! validation, 12-bit range checking, and the completion path that writes
//! into the shared [`LatestSample`].

use lightlcd::pipeline::{LatestSample, RawSample, ScaledSample};

use crate::config::AdcConfig;
use crate::conversion::Conversion;
use crate::error::SamplerError;

/// Free-running light sampler.
///
/// # Lifecycle
///
/// 1. [`Sampler::new()`] — no peripheral access.
/// 2. [`Sampler::configure()`] — exactly once.
/// 3. [`Sampler::start()`] followed by [`Sampler::on_complete()`], over and
///    over; [`Sampler::run()`] does this forever.
///
/// The sampler never waits for the display loop. Each completed conversion
/// replaces the previous value in [`LatestSample`] even if that value was
/// never drawn.
///
/// # Example
///
/// ```ignore
/// use light_sampler::{AdcConfig, Sampler};
///
/// let mut sampler = Sampler::new(adc, &LATEST, 32);
/// sampler.configure(&AdcConfig::default())?;
/// let raw = sampler.start().await?;
/// sampler.on_complete(raw);
/// ```
pub struct Sampler<'a, C> {
    converter: C,
    latest: &'a LatestSample,
    /// Panel height the readings are scaled to.
    height: u8,
    configured: bool,
    /// Completed conversions, wrapping.
    completed: u32,
}

impl<'a, C> Sampler<'a, C>
where
    C: Conversion,
{
    /// Construct an unconfigured sampler.
    ///
    /// # Arguments
    /// * `converter` — ADC channel (takes ownership for exclusive access).
    /// * `latest` — shared cell the scaled readings are published to.
    /// * `height` — display height in pixels the readings are scaled to.
    pub fn new(converter: C, latest: &'a LatestSample, height: u8) -> Self {
        Self {
            converter,
            latest,
            height,
            configured: false,
            completed: 0,
        }
    }

    // -----------------------------------------------------------------------
    // Configuration
    // -----------------------------------------------------------------------

    /// Validate `config` and apply it to the peripheral.
    ///
    /// # Errors
    /// * [`SamplerError::AlreadyConfigured`] on a second call.
    /// * [`SamplerError::InvalidConfig`] if [`AdcConfig::validate()`] fails.
    /// * [`SamplerError::Adc`] if the peripheral rejects the parameters.
    pub fn configure(&mut self, config: &AdcConfig) -> Result<(), SamplerError<C::Error>> {
        if self.configured {
            return Err(SamplerError::AlreadyConfigured);
        }

        config.validate().map_err(SamplerError::InvalidConfig)?;
        self.converter.configure(config)?;
        self.configured = true;

        #[cfg(feature = "defmt")]
        defmt::info!(
            "ADC configured: channel {}, {} Hz",
            config.channel,
            config.clock_rate_hz
        );

        Ok(())
    }

    /// Check whether [`configure()`](Self::configure) has succeeded.
    pub fn is_configured(&self) -> bool {
        self.configured
    }

    // -----------------------------------------------------------------------
    // Acquisition
    // -----------------------------------------------------------------------

    /// Start one conversion and wait for it to complete.
    ///
    /// # Errors
    /// * [`SamplerError::NotConfigured`] before [`configure()`](Self::configure).
    /// * [`SamplerError::Adc`] on a peripheral failure.
    /// * [`SamplerError::Sample`] if the code is outside the 12-bit range.
    pub async fn start(&mut self) -> Result<RawSample, SamplerError<C::Error>> {
        if !self.configured {
            return Err(SamplerError::NotConfigured);
        }

        let code = self.converter.convert().await?;
        RawSample::new(code).map_err(SamplerError::Sample)
    }

    /// Completion path: scale `raw` and publish it.
    ///
    /// Bounded and allocation-free. Returns the published value.
    pub fn on_complete(&mut self, raw: RawSample) -> ScaledSample {
        let scaled = ScaledSample::from_raw(raw, self.height);
        self.latest.publish(scaled);
        self.completed = self.completed.wrapping_add(1);
        scaled
    }

    /// Number of conversions published so far (wraps at `u32::MAX`).
    pub fn completed(&self) -> u32 {
        self.completed
    }

    /// Acquire forever: start, publish, start again.
    ///
    /// A failed conversion is logged and retried after a short back-off.
    /// The previously published value stays in [`LatestSample`], so the
    /// display keeps drawing the last good reading.
    #[cfg(feature = "task")]
    pub async fn run(&mut self) -> ! {
        #[cfg(feature = "defmt")]
        defmt::info!("Sampler running");

        loop {
            match self.start().await {
                Ok(raw) => {
                    self.on_complete(raw);
                }
                Err(_e) => {
                    #[cfg(feature = "defmt")]
                    match _e {
                        SamplerError::Sample(s) => defmt::warn!("Discarded sample: {}", s),
                        _ => defmt::error!(
                            "ADC conversion failed after {} samples",
                            self.completed()
                        ),
                    }
                    embassy_time::Timer::after(embassy_time::Duration::from_millis(
                        crate::config::RETRY_BACKOFF_MS,
                    ))
                    .await;
                }
            }
        }
    }
}

//! Free-running ADC sampler for the ambient-light graph.
//!
//! The crate is split into two layers:
//!
//! - **[`Conversion`]** — the peripheral boundary. A board crate implements
//!   it for its ADC: apply an [`AdcConfig`], then start one conversion and
//!   wait for its completion interrupt.
//! - **[`Sampler`]** — validated configuration, range checking, scaling and
//!   publication into the shared
//!   [`LatestSample`](lightlcd::pipeline::LatestSample).
//!
//! # Quick start
//!
//! ```ignore
//! use light_sampler::{AdcConfig, Sampler};
//!
//! let mut sampler = Sampler::new(adc, latest, DISPLAY_HEIGHT);
//! sampler.configure(&AdcConfig::default())?;
//!
//! // Never returns: start, publish, start again.
//! sampler.run().await;
//! ```
//!
//! # Features
//!
//! - **`defmt`** — [`defmt::Format`] implementations and log output.
//! - **`task`** — [`Sampler::run`], which needs `embassy-time` for its
//!   retry back-off.

#![no_std]

pub use config::{
    AdcConfig, InterruptMode, Reference, Resolution, SignMode, Trigger, DEFAULT_CLOCK_RATE_HZ,
    LIGHT_SENSOR_CHANNEL,
};
pub use conversion::Conversion;
pub use error::{ConfigError, SamplerError};
pub use sampler::Sampler;

mod config;
mod conversion;
mod error;
mod sampler;

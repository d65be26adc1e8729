//! Sample-acquisition-to-display pipeline state.
//!
//! Two independently paced sides meet here:
//!
//! ```text
//!   ADC completion ──► Sampler::on_complete ──► LatestSample ◄── display loop
//!   (interrupt)        scale + publish          (one byte)       load + draw
//! ```
//!
//! The sampler publishes every finished conversion, already scaled to
//! display rows, into a [`LatestSample`]. The display loop reads whatever
//! value is current each iteration and plots it at the [`Cursor`]. There is
//! no queue: a value may be overwritten before it is ever drawn, and the
//! same value is drawn repeatedly when no new conversion has completed.
//!
//! # Scaling
//!
//! Row 0 is the top of the panel, so brighter light must map to a *lower*
//! row index. [`ScaledSample::from_raw`] computes
//! `height - raw / (ADC_FULL_SCALE / height)`, which is non-increasing in
//! `raw` and lies in `[0, height]`. [`ScaledSample::row`] clamps the one
//! out-of-panel value (`height`, produced by `raw < divisor`) onto the last
//! visible row.
//!
//! # `no_std` Compatibility
//!
//! No allocation, no locks. [`LatestSample`] is a single `AtomicU8`, which
//! is why [`ScaledSample`] is byte-sized.

mod cursor;
mod error;
mod latest;
mod mode;
mod sample;

pub use cursor::Cursor;
pub use error::SampleError;
pub use latest::LatestSample;
pub use mode::{DisplayMode, ModeController, ModeInput, ModeInputs, ModeTransition, NoInputs};
pub use sample::{RawSample, ScaledSample};

/// ADC conversion resolution in bits.
pub const ADC_RESOLUTION_BITS: u32 = 12;

/// Number of distinct ADC codes (`2^ADC_RESOLUTION_BITS`).
pub const ADC_FULL_SCALE: u16 = 1 << ADC_RESOLUTION_BITS;

/// Largest code a conversion can produce.
pub const RAW_SAMPLE_MAX: u16 = ADC_FULL_SCALE - 1;

/// Panel width in pixels.
pub const DISPLAY_WIDTH: u32 = 128;

/// Panel height in pixels.
pub const DISPLAY_HEIGHT: u8 = 32;

/// Columns cleared ahead of the cursor on every graph step.
///
/// Must exceed 1 so the trail left by the previous pass across the same
/// columns is erased before the new point lands.
pub const CLEAR_AHEAD_COLUMNS: u32 = 6;

const _: () = assert!(DISPLAY_HEIGHT > 0);
const _: () = assert!(ADC_FULL_SCALE % DISPLAY_HEIGHT as u16 == 0);
const _: () = assert!(DISPLAY_WIDTH > 0);
const _: () = assert!(CLEAR_AHEAD_COLUMNS > 1);

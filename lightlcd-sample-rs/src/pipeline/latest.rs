use core::sync::atomic::{AtomicU8, Ordering};

use super::sample::ScaledSample;

/// Single-slot cell holding the most recent [`ScaledSample`].
///
/// Written only by the sampler's completion path, read only by the display
/// loop. A publish replaces the previous value whether or not it was ever
/// read; there is no history.
///
/// The value is one byte wide and stored in an [`AtomicU8`], so a reader
/// can never observe a torn value. Widening [`ScaledSample`] would require
/// a different cell.
///
/// # Example
///
/// ```
/// use lightlcd::pipeline::{LatestSample, ScaledSample};
///
/// let latest = LatestSample::new(ScaledSample::ZERO);
/// latest.publish(ScaledSample::from_value(7));
/// latest.publish(ScaledSample::from_value(9));
/// assert_eq!(latest.load().value(), 9);
/// ```
pub struct LatestSample {
    value: AtomicU8,
}

impl Default for LatestSample {
    fn default() -> Self {
        Self::new(ScaledSample::ZERO)
    }
}

impl LatestSample {
    /// Create a cell holding `initial`.
    pub const fn new(initial: ScaledSample) -> Self {
        Self {
            value: AtomicU8::new(initial.value()),
        }
    }

    /// Overwrite the stored sample.
    pub fn publish(&self, sample: ScaledSample) {
        // Nothing else is ordered against this byte.
        self.value.store(sample.value(), Ordering::Relaxed);
    }

    /// Read the most recently published sample.
    pub fn load(&self) -> ScaledSample {
        ScaledSample::from_value(self.value.load(Ordering::Relaxed))
    }
}

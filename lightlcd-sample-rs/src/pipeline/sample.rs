use super::error::SampleError;
use super::{ADC_FULL_SCALE, RAW_SAMPLE_MAX};

/// A single 12-bit conversion result, always within `[0, RAW_SAMPLE_MAX]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RawSample(u16);

impl RawSample {
    /// Wrap a raw ADC code.
    ///
    /// Returns [`SampleError::OutOfRange`] for codes above
    /// [`RAW_SAMPLE_MAX`], which a correctly configured 12-bit converter
    /// never produces.
    pub fn new(code: u16) -> Result<Self, SampleError> {
        if code > RAW_SAMPLE_MAX {
            return Err(SampleError::OutOfRange(code));
        }
        Ok(Self(code))
    }

    /// The raw ADC code.
    pub fn get(self) -> u16 {
        self.0
    }
}

/// A reading expressed as a display row, in `[0, height]`.
///
/// Larger raw readings (more light) give *smaller* values, so that the plot
/// rises towards the top of the panel as the light gets brighter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ScaledSample(u8);

impl ScaledSample {
    /// Top row; what the shared cell holds before the first conversion.
    pub const ZERO: Self = Self(0);

    /// Build from an already-scaled value.
    pub const fn from_value(value: u8) -> Self {
        Self(value)
    }

    /// Scale a raw reading onto a panel `height` pixels tall.
    ///
    /// Formula: `height - raw / (ADC_FULL_SCALE / height)`, saturating at 0
    /// for heights that do not divide the ADC full scale.
    ///
    /// # Examples
    ///
    /// ```
    /// use lightlcd::pipeline::{RawSample, ScaledSample};
    ///
    /// let dark = ScaledSample::from_raw(RawSample::new(0).unwrap(), 32);
    /// let bright = ScaledSample::from_raw(RawSample::new(4095).unwrap(), 32);
    /// assert_eq!(dark.value(), 32);
    /// assert_eq!(bright.value(), 1);
    /// ```
    pub fn from_raw(raw: RawSample, height: u8) -> Self {
        debug_assert!(height > 0, "display height must be non-zero");
        let divisor = ADC_FULL_SCALE / u16::from(height.max(1));
        let level = raw.get() / divisor;
        // `level` is at most 4095 / 16 = 255 and the result never exceeds `height`.
        let value = u16::from(height).saturating_sub(level);
        Self(value as u8)
    }

    /// The scaled value, in `[0, height]`.
    pub const fn value(self) -> u8 {
        self.0
    }

    /// The row to draw on, clamped to `[0, height - 1]`.
    pub fn row(self, height: u8) -> u8 {
        self.0.min(height.saturating_sub(1))
    }

    /// Brightness as a percentage, 0 (dark) to 100 (brightest).
    pub fn brightness_percent(self, height: u8) -> u8 {
        let span = u32::from(height.saturating_sub(1)).max(1);
        let level = u32::from(height.saturating_sub(self.0));
        ((level * 100) / span).min(100) as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::DISPLAY_HEIGHT;

    fn scale(code: u16) -> ScaledSample {
        ScaledSample::from_raw(RawSample::new(code).unwrap(), DISPLAY_HEIGHT)
    }

    #[test]
    fn raw_sample_accepts_full_range() {
        assert_eq!(RawSample::new(0).unwrap().get(), 0);
        assert_eq!(RawSample::new(4095).unwrap().get(), 4095);
    }

    #[test]
    fn raw_sample_rejects_above_12_bits() {
        assert_eq!(RawSample::new(4096), Err(SampleError::OutOfRange(4096)));
        assert_eq!(RawSample::new(u16::MAX), Err(SampleError::OutOfRange(u16::MAX)));
    }

    #[test]
    fn scale_stays_within_display_height() {
        for code in 0..=RAW_SAMPLE_MAX {
            let v = scale(code).value();
            assert!(v <= DISPLAY_HEIGHT, "code {} scaled to {}", code, v);
        }
    }

    #[test]
    fn scale_is_non_increasing() {
        let mut previous = scale(0);
        for code in 1..=RAW_SAMPLE_MAX {
            let current = scale(code);
            assert!(current <= previous, "code {} went up", code);
            previous = current;
        }
    }

    #[test]
    fn darkest_reading_scales_to_height() {
        assert_eq!(scale(0).value(), 32);
        // 127 / 128 == 0 as well.
        assert_eq!(scale(127).value(), 32);
        assert_eq!(scale(128).value(), 31);
    }

    #[test]
    fn brightest_reading_scales_to_one() {
        assert_eq!(scale(4095).value(), 1);
    }

    #[test]
    fn row_clamps_boundary_value_onto_panel() {
        assert_eq!(scale(0).row(DISPLAY_HEIGHT), 31);
        assert_eq!(scale(4095).row(DISPLAY_HEIGHT), 1);
        assert_eq!(ScaledSample::ZERO.row(DISPLAY_HEIGHT), 0);
    }

    #[test]
    fn scale_for_taller_panel() {
        let raw = RawSample::new(4095).unwrap();
        assert_eq!(ScaledSample::from_raw(raw, 64).value(), 1);
        let raw = RawSample::new(0).unwrap();
        assert_eq!(ScaledSample::from_raw(raw, 64).value(), 64);
    }

    #[test]
    fn scale_saturates_for_non_dividing_height() {
        // 4096 / 100 = 40, 4095 / 40 = 102 > 100.
        let raw = RawSample::new(4095).unwrap();
        assert_eq!(ScaledSample::from_raw(raw, 100).value(), 0);
    }

    #[test]
    fn brightness_percent_spans_full_range() {
        assert_eq!(scale(0).brightness_percent(DISPLAY_HEIGHT), 0);
        assert_eq!(scale(4095).brightness_percent(DISPLAY_HEIGHT), 100);
        assert_eq!(ScaledSample::ZERO.brightness_percent(DISPLAY_HEIGHT), 100);
    }

    #[test]
    fn brightness_percent_midpoint() {
        // 2048 / 128 = 16 → scaled 16 → level 16 of 31.
        assert_eq!(scale(2048).brightness_percent(DISPLAY_HEIGHT), 51);
    }
}

/// Errors that can occur when constructing pipeline values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SampleError {
    /// A raw conversion result exceeded [`RAW_SAMPLE_MAX`](super::RAW_SAMPLE_MAX).
    OutOfRange(u16),
}

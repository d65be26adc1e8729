/// Horizontal plot position, always in `[0, width - 1]`.
///
/// Advancing from the last column wraps back to column 0, so starting
/// from 0 the cursor returns to 0 after exactly `width` advances.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Cursor {
    x: u32,
    width: u32,
}

impl Cursor {
    /// A cursor at column 0 on a panel `width` pixels wide.
    pub fn new(width: u32) -> Self {
        debug_assert!(width > 0, "display width must be non-zero");
        Self {
            x: 0,
            width: width.max(1),
        }
    }

    /// Current column.
    pub fn x(&self) -> u32 {
        self.x
    }

    /// Move one column right, wrapping to 0 when the next column would be
    /// `width` or beyond.
    pub fn advance(&mut self) {
        let next = self.x + 1;
        self.x = if next >= self.width { 0 } else { next };
    }

    /// Jump to an arbitrary column. Positions past the panel wrap to 0.
    pub fn set(&mut self, x: u32) {
        self.x = if x >= self.width { 0 } else { x };
    }

    /// Return to column 0.
    pub fn reset(&mut self) {
        self.x = 0;
    }
}

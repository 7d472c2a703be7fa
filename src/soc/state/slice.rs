//! Inclusive bit ranges used to carve a state field into named slices.

/// Right-aligned mask covering `len` bits. Widths of 64 and above saturate to
/// all ones instead of shifting by the full word width.
#[inline]
pub fn mask_bits(len: u8) -> u64 {
    if len >= 64 {
        u64::MAX
    } else {
        (1u64 << len) - 1
    }
}

/// Inclusive `[start, end]` bit range inside a field, LSB0 numbered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SliceRange {
    start: u8,
    end: u8,
}

impl SliceRange {
    /// Callers validate `start <= end` before a range reaches the registry.
    pub fn new(start: u8, end: u8) -> Self {
        debug_assert!(start <= end, "slice range must not be inverted");
        Self { start, end }
    }

    #[inline(always)]
    pub fn start(&self) -> u8 {
        self.start
    }

    #[inline(always)]
    pub fn end(&self) -> u8 {
        self.end
    }

    /// Number of bits covered, 1..=64.
    #[inline(always)]
    pub fn width(&self) -> u8 {
        self.end - self.start + 1
    }

    pub fn contains(&self, bit: u8) -> bool {
        self.start <= bit && bit <= self.end
    }

    /// Right-aligned mask for values stored in this slice.
    pub fn mask(&self) -> u64 {
        mask_bits(self.width())
    }
}

//! A fixed-width state field (register) whose value can be accessed as a whole or through
//! named, non-overlapping bit slices. All writes funnel through the field mask so no bit above
//! the configured width is ever stored.

use std::fmt;

use smallvec::SmallVec;

use super::builder::StateFieldBuilder;
use super::error::{Endpoint, SliceError, SliceResult};
use super::slice::{SliceRange, mask_bits};

/// Widest field that can be stored.
pub const MAX_BITWIDTH: u8 = 64;

#[derive(Debug, Clone, PartialEq, Eq)]
struct FieldSlice {
    name: String,
    range: SliceRange,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateField {
    name: String,
    value: u64,
    reset_value: u64,
    bitwidth: u8,
    mask: u64,
    // Sorted by name so lookups can binary search.
    slices: SmallVec<[FieldSlice; 4]>,
}

impl StateField {
    /// Creates a field of `bitwidth` bits holding the masked `reset_value`. Widths above 64
    /// are clamped with a warning.
    pub fn new(name: impl Into<String>, bitwidth: u8, reset_value: u64) -> Self {
        let name = name.into();
        if bitwidth > MAX_BITWIDTH {
            tracing::warn!(
                field = %name,
                requested = bitwidth,
                "bitwidth too large, clamping to {MAX_BITWIDTH}"
            );
        }
        let bitwidth = bitwidth.min(MAX_BITWIDTH);
        let mask = mask_bits(bitwidth);
        Self {
            name,
            value: reset_value & mask,
            reset_value: reset_value & mask,
            bitwidth,
            mask,
            slices: SmallVec::new(),
        }
    }

    /// 64-bit field resetting to zero.
    pub fn with_defaults(name: impl Into<String>) -> Self {
        Self::new(name, MAX_BITWIDTH, 0)
    }

    pub fn builder(name: impl Into<String>) -> StateFieldBuilder {
        StateFieldBuilder::new(name)
    }

    #[inline(always)]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline(always)]
    pub fn bitwidth(&self) -> u8 {
        self.bitwidth
    }

    #[inline(always)]
    pub fn mask(&self) -> u64 {
        self.mask
    }

    #[inline(always)]
    pub fn reset_value(&self) -> u64 {
        self.reset_value
    }

    #[inline(always)]
    pub fn value(&self) -> u64 {
        self.value
    }

    /// Stores `value`, silently dropping bits above the field width.
    #[inline(always)]
    pub fn set_value(&mut self, value: u64) {
        self.value = value & self.mask;
    }

    pub fn reset(&mut self) {
        self.value = self.reset_value;
    }

    /// Registers a named inclusive bit range.
    ///
    /// A new slice is rejected when either of its own endpoints lands inside a registered
    /// slice. A new range that strictly encloses an existing one passes this check.
    pub fn add_slice(&mut self, name: impl Into<String>, start: u8, end: u8) -> SliceResult<()> {
        let name = name.into();
        match self.check_new_slice(&name, start, end) {
            Ok(index) => {
                self.slices.insert(
                    index,
                    FieldSlice {
                        name,
                        range: SliceRange::new(start, end),
                    },
                );
                Ok(())
            }
            Err(err) => {
                tracing::error!(operation = "add_slice", "{err}");
                Err(err)
            }
        }
    }

    /// Returns the insertion index for a valid new slice.
    fn check_new_slice(&self, name: &str, start: u8, end: u8) -> SliceResult<usize> {
        let index = match self.position(name) {
            Ok(_) => {
                return Err(SliceError::Duplicate {
                    field: self.name.clone(),
                    slice: name.to_string(),
                });
            }
            Err(index) => index,
        };

        if start > end {
            return Err(SliceError::InvertedRange {
                field: self.name.clone(),
                slice: name.to_string(),
                start,
                end,
            });
        }

        // end is inclusive, so the last valid bit is bitwidth - 1
        if end >= self.bitwidth {
            return Err(SliceError::ExceedsWidth {
                field: self.name.clone(),
                slice: name.to_string(),
                end,
                bitwidth: self.bitwidth,
            });
        }

        for existing in &self.slices {
            let (endpoint, bit) = if existing.range.contains(start) {
                (Endpoint::Start, start)
            } else if existing.range.contains(end) {
                (Endpoint::End, end)
            } else {
                continue;
            };
            return Err(SliceError::Overlap {
                field: self.name.clone(),
                slice: name.to_string(),
                existing: existing.name.clone(),
                endpoint,
                bit,
            });
        }

        Ok(index)
    }

    /// Reads the right-aligned contents of a named slice.
    pub fn slice_value(&self, name: &str) -> SliceResult<u64> {
        let range = self.lookup("slice_value", name)?;
        if range.width() == self.bitwidth {
            return Ok(self.value & self.mask);
        }
        assert!(
            range.width() < MAX_BITWIDTH,
            "partial slice '{name}' of field '{}' spans a full word",
            self.name
        );
        Ok((self.value >> range.start()) & range.mask())
    }

    /// Writes `value` into a named slice, truncated to the slice width. Bits outside the
    /// slice keep their current contents.
    pub fn set_slice_value(&mut self, name: &str, value: u64) -> SliceResult<()> {
        let range = self.lookup("set_slice_value", name)?;
        if range.width() == self.bitwidth {
            self.value = value & self.mask;
            return Ok(());
        }
        assert!(
            range.width() < MAX_BITWIDTH,
            "partial slice '{name}' of field '{}' spans a full word",
            self.name
        );
        let slice_mask = range.mask();
        self.value = (self.value & !(slice_mask << range.start()))
            | ((value & slice_mask) << range.start());
        Ok(())
    }

    pub fn slice(&self, name: &str) -> Option<SliceRange> {
        self.position(name)
            .ok()
            .map(|index| self.slices[index].range)
    }

    pub fn has_slice(&self, name: &str) -> bool {
        self.position(name).is_ok()
    }

    pub fn slice_count(&self) -> usize {
        self.slices.len()
    }

    /// Registered slices in ascending name order.
    pub fn slices(&self) -> impl Iterator<Item = (&str, SliceRange)> + '_ {
        self.slices
            .iter()
            .map(|slice| (slice.name.as_str(), slice.range))
    }

    /// Logs the field summary line at info level.
    pub fn print_field(&self) {
        tracing::info!("{self}");
    }

    fn position(&self, name: &str) -> Result<usize, usize> {
        self.slices
            .binary_search_by(|slice| slice.name.as_str().cmp(name))
    }

    fn lookup(&self, operation: &'static str, name: &str) -> SliceResult<SliceRange> {
        match self.slice(name) {
            Some(range) => Ok(range),
            None => {
                let err = SliceError::UnknownSlice {
                    field: self.name.clone(),
                    slice: name.to_string(),
                };
                tracing::error!(operation, "{err}");
                Err(err)
            }
        }
    }
}

impl fmt::Display for StateField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:>16}     {:>2}    0x{:016x}    (0x{:x})",
            self.name, self.bitwidth, self.value, self.reset_value
        )
    }
}

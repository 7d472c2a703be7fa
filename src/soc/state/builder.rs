use smallvec::SmallVec;

use super::error::SliceResult;
use super::field::{MAX_BITWIDTH, StateField};

#[derive(Clone, Debug, PartialEq, Eq)]
struct PendingSlice {
    name: String,
    start: u8,
    end: u8,
}

/// Declarative description of a field and its slices. Defaults to a 64-bit field that
/// resets to zero.
#[derive(Clone, Debug)]
pub struct StateFieldBuilder {
    name: String,
    bitwidth: u8,
    reset_value: u64,
    slices: SmallVec<[PendingSlice; 4]>,
}

impl StateFieldBuilder {
    pub(super) fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            bitwidth: MAX_BITWIDTH,
            reset_value: 0,
            slices: SmallVec::new(),
        }
    }

    pub fn bitwidth(mut self, bitwidth: u8) -> Self {
        self.bitwidth = bitwidth;
        self
    }

    pub fn reset_value(mut self, reset_value: u64) -> Self {
        self.reset_value = reset_value;
        self
    }

    pub fn slice(mut self, name: impl Into<String>, start: u8, end: u8) -> Self {
        self.slices.push(PendingSlice {
            name: name.into(),
            start,
            end,
        });
        self
    }

    /// Slices are registered in declaration order; the first rejected slice aborts the build.
    pub fn build(self) -> SliceResult<StateField> {
        let mut field = StateField::new(self.name, self.bitwidth, self.reset_value);
        for slice in self.slices {
            field.add_slice(slice.name, slice.start, slice.end)?;
        }
        Ok(field)
    }
}

//! Register-style state fields: fixed-width values with named bit slices, as used when
//! modelling the control and status registers of a processor or translation unit.

pub mod soc;
pub mod util;

pub use soc::state::{SliceError, SliceRange, SliceResult, StateField, StateFieldBuilder};

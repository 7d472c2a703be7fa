//! Register-style state fields with named bit slices.

pub mod builder;
pub mod error;
pub mod field;
pub mod slice;

pub use builder::StateFieldBuilder;
pub use error::{Endpoint, SliceError, SliceResult};
pub use field::{MAX_BITWIDTH, StateField};
pub use slice::{SliceRange, mask_bits};

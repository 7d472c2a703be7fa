use std::{error::Error, fmt};

pub type SliceResult<T> = Result<T, SliceError>;

/// Which endpoint of a new slice landed inside an already registered slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Start,
    End,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Endpoint::Start => f.write_str("start"),
            Endpoint::End => f.write_str("end"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SliceError {
    Duplicate {
        field: String,
        slice: String,
    },
    InvertedRange {
        field: String,
        slice: String,
        start: u8,
        end: u8,
    },
    ExceedsWidth {
        field: String,
        slice: String,
        end: u8,
        bitwidth: u8,
    },
    Overlap {
        field: String,
        slice: String,
        existing: String,
        endpoint: Endpoint,
        bit: u8,
    },
    UnknownSlice {
        field: String,
        slice: String,
    },
}

impl SliceError {
    /// Name of the slice the failed operation targeted.
    pub fn slice(&self) -> &str {
        match self {
            SliceError::Duplicate { slice, .. }
            | SliceError::InvertedRange { slice, .. }
            | SliceError::ExceedsWidth { slice, .. }
            | SliceError::Overlap { slice, .. }
            | SliceError::UnknownSlice { slice, .. } => slice,
        }
    }
}

impl fmt::Display for SliceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SliceError::Duplicate { field, slice } => {
                write!(f, "field '{field}': slice '{slice}' already exists")
            }
            SliceError::InvertedRange {
                field,
                slice,
                start,
                end,
            } => write!(
                f,
                "field '{field}': slice '{slice}' start bit {start} > end bit {end}"
            ),
            SliceError::ExceedsWidth {
                field,
                slice,
                end,
                bitwidth,
            } => write!(
                f,
                "field '{field}': slice '{slice}' end bit {end} exceeds bitwidth {bitwidth}"
            ),
            SliceError::Overlap {
                field,
                slice,
                existing,
                endpoint,
                bit,
            } => write!(
                f,
                "field '{field}': slice '{slice}' {endpoint} bit {bit} overlaps existing slice '{existing}'"
            ),
            SliceError::UnknownSlice { field, slice } => {
                write!(f, "field '{field}': slice '{slice}' does not exist")
            }
        }
    }
}

impl Error for SliceError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_field_and_slice() {
        let err = SliceError::Overlap {
            field: "satp".into(),
            slice: "asid".into(),
            existing: "ppn".into(),
            endpoint: Endpoint::End,
            bit: 43,
        };
        let text = err.to_string();
        assert!(text.contains("satp"), "message should name the field: {text}");
        assert!(text.contains("'asid'"), "message should name the new slice: {text}");
        assert!(text.contains("'ppn'"), "message should name the clashing slice: {text}");
        assert!(text.contains("end bit 43"), "message should report the endpoint: {text}");
        assert_eq!(err.slice(), "asid");
    }
}

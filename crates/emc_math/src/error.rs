//! Error types for fallible conversions

use std::fmt;

/// A flat float slice had the wrong number of components for the target type
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LengthError {
    /// Component count of the target type
    pub expected: usize,
    /// Length of the slice that was supplied
    pub found: usize,
}

impl LengthError {
    pub(crate) fn check(expected: usize, found: usize) -> Result<(), Self> {
        if expected == found {
            Ok(())
        } else {
            Err(Self { expected, found })
        }
    }
}

impl fmt::Display for LengthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "expected {} components, found {}",
            self.expected, self.found
        )
    }
}

impl std::error::Error for LengthError {}

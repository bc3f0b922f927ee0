//! Boundary Error Types
//!
//! Failures that happen before a request reaches the kernel, or while
//! handing a result back. The export layer logs them and returns the
//! failure sentinel (-1 or null).

use core::fmt;

/// Errors raised at the host boundary
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BoundaryError {
    /// Host passed a null pointer with a non-zero length
    NullPointer,

    /// Host passed bytes that are not UTF-8 where text is required
    InvalidUtf8,

    /// Owned buffer could not be allocated
    Allocation,

    /// Kernel configuration could not be parsed
    Config(String),
}

impl fmt::Display for BoundaryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundaryError::NullPointer => write!(f, "Null pointer"),
            BoundaryError::InvalidUtf8 => write!(f, "Invalid UTF-8"),
            BoundaryError::Allocation => write!(f, "Failed to allocate memory"),
            BoundaryError::Config(msg) => write!(f, "Invalid kernel config: {}", msg),
        }
    }
}

impl std::error::Error for BoundaryError {}

use std::fmt;

use crate::types::Width;

/// Error type for range domain operations.
///
/// All variants are contract violations: they can only be produced by a defect
/// in the caller (enumerator, algorithms), never by a property of the data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RangeError {
    /// Two ranges of different bit widths were combined.
    WidthMismatch { left: Width, right: Width },
    /// Minimum or maximum requested on an empty range.
    EmptyRange,
    /// Invalid construction parameters (bounds or width out of range).
    Domain(String),
}

impl RangeError {
    pub(crate) fn domain(msg: impl Into<String>) -> Self {
        RangeError::Domain(msg.into())
    }
}

impl fmt::Display for RangeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RangeError::WidthMismatch { left, right } => {
                write!(f, "Width mismatch: {} vs {}", left, right)
            }
            RangeError::EmptyRange => write!(f, "Operation requires a non-empty range"),
            RangeError::Domain(msg) => write!(f, "Domain error: {}", msg),
        }
    }
}

impl std::error::Error for RangeError {}

/// Checks that two widths agree.
pub(crate) fn check_width(left: Width, right: Width) -> Result<(), RangeError> {
    if left == right {
        Ok(())
    } else {
        Err(RangeError::WidthMismatch { left, right })
    }
}

//! Type-safe wrapper for bit widths.
//!
//! Every range carries the width of the machine integers it describes.
//! The newtype keeps widths from being confused with bounds or cardinalities,
//! which are all plain `u64` values.
use std::fmt;

use crate::error::RangeError;

/// A bit width of fixed-width unsigned integers.
///
/// # Invariants
///
/// - `1 <= bits <= Width::MAX_BITS`
/// - `2^bits` and the sum of any two values of this width fit into a `u64`
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Width(u32);

impl Width {
    /// Largest supported width.
    ///
    /// Enumeration is limited to much smaller widths, but the domain itself must
    /// be able to represent a 32-bit range extended by one bit.
    pub const MAX_BITS: u32 = 63;

    /// Creates a new width.
    ///
    /// Fails with [`RangeError::Domain`] if `bits` is zero or exceeds [`Width::MAX_BITS`].
    pub fn new(bits: u32) -> Result<Self, RangeError> {
        if bits == 0 || bits > Self::MAX_BITS {
            return Err(RangeError::domain(format!(
                "bit width {} is outside 1..={}",
                bits,
                Self::MAX_BITS
            )));
        }
        Ok(Width(bits))
    }

    /// Creates a width in a const context.
    ///
    /// # Panics
    ///
    /// Panics (at compile time, when evaluated as a constant) if `bits` is out of range.
    pub const fn new_const(bits: u32) -> Self {
        assert!(bits >= 1 && bits <= Self::MAX_BITS, "Bit width out of range");
        Width(bits)
    }

    /// Returns the raw number of bits.
    pub fn bits(self) -> u32 {
        self.0
    }

    /// Returns `2^bits`, the number of distinct values.
    pub fn modulus(self) -> u64 {
        1u64 << self.0
    }

    /// Returns `2^bits - 1`, the largest representable value.
    pub fn max_value(self) -> u64 {
        self.modulus() - 1
    }

    /// Returns the width one bit wider.
    pub fn extended(self) -> Result<Self, RangeError> {
        Width::new(self.0 + 1)
    }

    /// Checks whether `value` is representable at this width.
    pub fn fits(self, value: u64) -> bool {
        value <= self.max_value()
    }
}

impl fmt::Display for Width {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "i{}", self.0)
    }
}

impl From<Width> for u32 {
    fn from(width: Width) -> Self {
        width.0
    }
}

impl TryFrom<u32> for Width {
    type Error = RangeError;

    fn try_from(bits: u32) -> Result<Self, Self::Error> {
        Width::new(bits)
    }
}

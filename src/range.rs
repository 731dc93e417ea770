//! Unsigned range abstract domain.
//!
//! A [`Range`] describes a contiguous set of `w`-bit unsigned integers as a
//! half-open interval `[lower, upper)` taken modulo `2^w`.
//! When `lower > upper`, the interval wraps around: it contains
//! `{lower, ..., 2^w - 1}` followed by `{0, ..., upper - 1}`.
//!
//! Because the upper bound is exclusive, equal bounds cannot describe a
//! non-empty proper subset. They are reserved for the **full** range, and the
//! **empty** range is a separate state.
//!
//! # Example
//!
//! ```rust
//! use uaddsat_rs::range::Range;
//! use uaddsat_rs::types::Width;
//!
//! let w = Width::new(4).unwrap();
//! let x = Range::new(w, 14, 16).unwrap(); // {14, 15}
//! let y = Range::new(w, 1, 3).unwrap(); // {1, 2}
//!
//! // 14+1 .. 15+2 wraps past 16:
//! let sum = x.add(&y).unwrap();
//! assert_eq!(sum, Range::new(w, 15, 2).unwrap()); // {15, 0, 1}
//! assert_eq!(sum.cardinality(), 3);
//! assert_eq!(sum.unsigned_min().unwrap(), 0);
//! assert_eq!(sum.unsigned_max().unwrap(), 15);
//! ```

use std::fmt;

use crate::error::{check_width, RangeError};
use crate::types::Width;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
enum Repr {
    Empty,
    Full,
    /// `lower != upper`, both `< 2^w`.
    Bounded { lower: u64, upper: u64 },
}

/// A contiguous, possibly wrapping, set of fixed-width unsigned integers.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Range {
    width: Width,
    repr: Repr,
}

impl Range {
    /// Creates the range `[lower, upper)`.
    ///
    /// `lower` must be representable at `width`. `upper` may additionally be
    /// equal to `2^w`, meaning "one past the maximum"; it is stored as `0`.
    /// Equal bounds denote the full range.
    pub fn new(width: Width, lower: u64, upper: u64) -> Result<Self, RangeError> {
        if !width.fits(lower) {
            return Err(RangeError::domain(format!(
                "lower bound {} does not fit into {}",
                lower, width
            )));
        }
        if upper > width.modulus() {
            return Err(RangeError::domain(format!(
                "upper bound {} exceeds 2^{}",
                upper,
                width.bits()
            )));
        }
        let upper = upper & width.max_value();
        if lower == upper {
            return Ok(Self::full(width));
        }
        Ok(Self {
            width,
            repr: Repr::Bounded { lower, upper },
        })
    }

    /// Creates the range containing exactly `value`.
    pub fn singleton(width: Width, value: u64) -> Result<Self, RangeError> {
        if !width.fits(value) {
            return Err(RangeError::domain(format!("value {} does not fit into {}", value, width)));
        }
        Self::new(width, value, value + 1)
    }

    /// Creates the range with inclusive bounds `[lower, upper]`.
    ///
    /// Equal bounds give a singleton; `[0, 2^w - 1]` gives the full range.
    pub fn from_inclusive(width: Width, lower: u64, upper: u64) -> Result<Self, RangeError> {
        if lower == upper {
            return Self::singleton(width, lower);
        }
        if !width.fits(upper) {
            return Err(RangeError::domain(format!(
                "inclusive upper bound {} does not fit into {}",
                upper, width
            )));
        }
        Self::new(width, lower, upper + 1)
    }

    /// The empty range.
    pub fn empty(width: Width) -> Self {
        Self {
            width,
            repr: Repr::Empty,
        }
    }

    /// The range of all `2^w` values.
    pub fn full(width: Width) -> Self {
        Self {
            width,
            repr: Repr::Full,
        }
    }

    pub fn width(&self) -> Width {
        self.width
    }

    pub fn is_empty(&self) -> bool {
        matches!(self.repr, Repr::Empty)
    }

    pub fn is_full(&self) -> bool {
        matches!(self.repr, Repr::Full)
    }

    /// Checks whether the range contains exactly one value.
    pub fn is_singleton(&self) -> bool {
        self.cardinality() == 1
    }

    /// Checks whether `lower > upper`.
    ///
    /// This includes ranges like `[lower, 0)` which end exactly at `2^w - 1`.
    pub fn is_upper_wrapped(&self) -> bool {
        matches!(self.repr, Repr::Bounded { lower, upper } if lower > upper)
    }

    /// Checks whether the set straddles `2^w`, i.e. contains both `2^w - 1` and `0`.
    pub fn is_wrapped_set(&self) -> bool {
        matches!(self.repr, Repr::Bounded { lower, upper } if lower > upper && upper != 0)
    }

    /// Inclusive lower bound, `None` for empty and full ranges.
    pub fn lower(&self) -> Option<u64> {
        self.bounds().map(|(lower, _)| lower)
    }

    /// Exclusive upper bound (modulo `2^w`), `None` for empty and full ranges.
    pub fn upper(&self) -> Option<u64> {
        self.bounds().map(|(_, upper)| upper)
    }

    fn bounds(&self) -> Option<(u64, u64)> {
        match self.repr {
            Repr::Bounded { lower, upper } => Some((lower, upper)),
            _ => None,
        }
    }

    pub fn contains(&self, value: u64) -> bool {
        if !self.width.fits(value) {
            return false;
        }
        match self.repr {
            Repr::Empty => false,
            Repr::Full => true,
            Repr::Bounded { lower, upper } if lower < upper => lower <= value && value < upper,
            Repr::Bounded { lower, upper } => value >= lower || value < upper,
        }
    }

    /// Number of concrete values in the range.
    pub fn cardinality(&self) -> u64 {
        match self.repr {
            Repr::Empty => 0,
            Repr::Full => self.width.modulus(),
            Repr::Bounded { lower, upper } if lower < upper => upper - lower,
            Repr::Bounded { lower, upper } => self.width.modulus() - lower + upper,
        }
    }

    /// Smallest value of the range.
    pub fn unsigned_min(&self) -> Result<u64, RangeError> {
        match self.repr {
            Repr::Empty => Err(RangeError::EmptyRange),
            Repr::Full => Ok(0),
            Repr::Bounded { .. } if self.is_wrapped_set() => Ok(0),
            Repr::Bounded { lower, .. } => Ok(lower),
        }
    }

    /// Largest value of the range.
    pub fn unsigned_max(&self) -> Result<u64, RangeError> {
        match self.repr {
            Repr::Empty => Err(RangeError::EmptyRange),
            Repr::Full => Ok(self.width.max_value()),
            Repr::Bounded { .. } if self.is_upper_wrapped() => Ok(self.width.max_value()),
            Repr::Bounded { upper, .. } => Ok(upper - 1),
        }
    }

    /// Reinterprets the range at width `w + 1` with the same numeric bounds.
    ///
    /// Values are non-negative, so nothing is sign-extended. Ranges that reach
    /// `2^w - 1` get their upper bound spelled out as `2^w`. A wrapped set has
    /// no contiguous image at the wider width and becomes `[0, 2^w)`.
    pub fn extend_width(&self) -> Result<Self, RangeError> {
        let wide = self.width.extended()?;
        let top = self.width.modulus();
        match self.repr {
            Repr::Empty => Ok(Self::empty(wide)),
            Repr::Full => Self::new(wide, 0, top),
            Repr::Bounded { lower, upper } if lower < upper => Self::new(wide, lower, upper),
            Repr::Bounded { lower, upper: 0 } => Self::new(wide, lower, top),
            Repr::Bounded { .. } => Self::new(wide, 0, top),
        }
    }

    /// Wrapping addition: the exact set `{(a + b) mod 2^w | a ∈ self, b ∈ other}`.
    pub fn add(&self, other: &Range) -> Result<Self, RangeError> {
        check_width(self.width, other.width)?;
        let width = self.width;

        let ((lx, ux), (ly, uy)) = match (self.repr, other.repr) {
            (Repr::Empty, _) | (_, Repr::Empty) => return Ok(Self::empty(width)),
            (Repr::Full, _) | (_, Repr::Full) => return Ok(Self::full(width)),
            (Repr::Bounded { lower: lx, upper: ux }, Repr::Bounded { lower: ly, upper: uy }) => {
                ((lx, ux), (ly, uy))
            }
        };

        // Both cardinalities are below 2^63, so the sum cannot overflow.
        let size = self.cardinality() + other.cardinality() - 1;
        if size >= width.modulus() {
            return Ok(Self::full(width));
        }

        let mask = width.max_value();
        let lower = lx.wrapping_add(ly) & mask;
        let upper = ux.wrapping_add(uy).wrapping_sub(1) & mask;
        Self::new(width, lower, upper)
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.repr {
            Repr::Empty => write!(f, "{} empty", self.width),
            Repr::Full => write!(f, "{} full", self.width),
            Repr::Bounded { lower, upper } => write!(f, "{} [{}, {})", self.width, lower, upper),
        }
    }
}

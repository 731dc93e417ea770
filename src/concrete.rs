//! Concretization of ranges into the integers they stand for.
//!
//! Materializing values is only feasible for small widths. Precision
//! comparisons use [`cardinality`], which gives the same answer as counting
//! [`concretize`] without allocating.

use std::iter::FusedIterator;

use crate::error::RangeError;
use crate::range::Range;
use crate::types::Width;

/// Ascending iterator over the concrete values of a range.
///
/// A wrapped set `[lower, upper)` yields `0..upper` first and `lower..2^w` after.
#[derive(Debug, Clone)]
pub struct Values {
    head: std::ops::Range<u64>,
    tail: std::ops::Range<u64>,
}

impl Iterator for Values {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        self.head.next().or_else(|| self.tail.next())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = (self.head.end - self.head.start) + (self.tail.end - self.tail.start);
        match usize::try_from(n) {
            Ok(n) => (n, Some(n)),
            Err(_) => (usize::MAX, None),
        }
    }
}

impl ExactSizeIterator for Values {}

impl FusedIterator for Values {}

/// Returns a lazy iterator over the values in `r`, in ascending order.
pub fn values(r: &Range) -> Values {
    let width = r.width();
    let (head, tail) = match (r.lower(), r.upper()) {
        (Some(lower), Some(upper)) if lower < upper => (lower..upper, 0..0),
        (Some(lower), Some(upper)) => (0..upper, lower..width.modulus()),
        _ if r.is_full() => (0..width.modulus(), 0..0),
        _ => (0..0, 0..0),
    };
    Values { head, tail }
}

/// Materializes the values of `r`.
///
/// For a non-wrapping `[lo, hi)` this is `lo, lo + 1, ..., hi - 1`.
pub fn concretize(r: &Range) -> Vec<u64> {
    values(r).collect()
}

/// Number of values in `r`, computed without materializing them.
pub fn cardinality(r: &Range) -> u64 {
    r.cardinality()
}

/// Smallest non-wrapping range that contains all `values`.
///
/// Returns the empty range when there are no values.
pub fn hull(width: Width, values: impl IntoIterator<Item = u64>) -> Result<Range, RangeError> {
    let mut bounds: Option<(u64, u64)> = None;
    for v in values {
        if !width.fits(v) {
            return Err(RangeError::domain(format!("value {} does not fit into {}", v, width)));
        }
        bounds = Some(match bounds {
            None => (v, v),
            Some((lo, hi)) => (lo.min(v), hi.max(v)),
        });
    }
    match bounds {
        None => Ok(Range::empty(width)),
        Some((lo, hi)) => Range::from_inclusive(width, lo, hi),
    }
}

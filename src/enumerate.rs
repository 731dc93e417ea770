//! Exhaustive enumeration of non-wrapping ranges.

use log::debug;
use num_bigint::BigUint;

use crate::error::RangeError;
use crate::range::Range;
use crate::types::Width;

/// Largest width accepted for exhaustive enumeration.
pub const MAX_ENUM_BITS: u32 = 32;

fn check_enum_width(width: Width) -> Result<(), RangeError> {
    if width.bits() > MAX_ENUM_BITS {
        return Err(RangeError::domain(format!(
            "bit width {} is too large to enumerate (max {})",
            width.bits(),
            MAX_ENUM_BITS
        )));
    }
    Ok(())
}

/// Returns every range `[lo, hi)` with `0 <= lo < hi <= 2^w - 1`.
///
/// These are all the non-empty, non-full, non-wrapping ranges whose upper
/// bound is not `2^w`. The order is by `lo`, then by `hi`.
pub fn all_ranges(width: Width) -> Result<Vec<Range>, RangeError> {
    check_enum_width(width)?;
    let max = width.max_value();

    let mut ranges = Vec::new();
    for lo in 0..=max {
        for hi in (lo + 1)..=max {
            ranges.push(Range::new(width, lo, hi)?);
        }
    }

    debug!("Enumerated {} ranges of width {}", ranges.len(), width);
    Ok(ranges)
}

/// Number of ranges returned by [`all_ranges`]: `m * (m + 1) / 2` with `m = 2^w - 1`.
pub fn range_count(width: Width) -> Result<BigUint, RangeError> {
    check_enum_width(width)?;
    let m = BigUint::from(width.max_value());
    Ok(&m * (&m + 1u32) / 2u32)
}

/// Number of ordered range pairs the harness visits.
pub fn pair_count(width: Width) -> Result<BigUint, RangeError> {
    let n = range_count(width)?;
    Ok(&n * &n)
}

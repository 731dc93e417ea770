//! Brute-force soundness checking of saturating-add algorithms.
//!
//! A result range is sound if it contains `sat(a + b)` for every concrete `a`
//! and `b` drawn from the operands. This enumerates all such pairs, so it is
//! only practical for widths up to about 5.

use std::fmt;

use log::{info, warn};

use crate::concrete::values;
use crate::enumerate::all_ranges;
use crate::error::RangeError;
use crate::range::Range;
use crate::sat::{saturate, SaturatingAdd};
use crate::types::Width;

/// A concrete saturating sum missing from an abstract result.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Violation {
    pub algorithm: &'static str,
    pub x: Range,
    pub y: Range,
    pub result: Range,
    pub a: u64,
    pub b: u64,
    pub value: u64,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: sat({} + {}) = {} is not in {} for x = {}, y = {}",
            self.algorithm, self.a, self.b, self.value, self.result, self.x, self.y
        )
    }
}

/// Returns the first concrete sum of `x` and `y` that `alg` fails to cover.
pub fn check_pair(alg: &dyn SaturatingAdd, x: &Range, y: &Range) -> Result<Option<Violation>, RangeError> {
    let result = alg.uadd_sat(x, y)?;
    let width = result.width();
    for a in values(x) {
        for b in values(y) {
            let value = saturate(width, a + b);
            if !result.contains(value) {
                return Ok(Some(Violation {
                    algorithm: alg.name(),
                    x: *x,
                    y: *y,
                    result,
                    a,
                    b,
                    value,
                }));
            }
        }
    }
    Ok(None)
}

/// Checks `alg` on every ordered pair of ranges from [`all_ranges`].
pub fn check_all(alg: &dyn SaturatingAdd, width: Width) -> Result<Vec<Violation>, RangeError> {
    if width.bits() > 5 {
        warn!("Brute-force soundness check at width {} will be slow", width);
    }
    let ranges = all_ranges(width)?;
    let mut violations = Vec::new();
    for x in &ranges {
        for y in &ranges {
            if let Some(v) = check_pair(alg, x, y)? {
                warn!("{}", v);
                violations.push(v);
            }
        }
    }
    info!("Soundness of {} at width {}: {} violations", alg.name(), width, violations.len());
    Ok(violations)
}

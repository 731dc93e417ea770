//! Saturating unsigned addition over ranges.
//!
//! Two derivations of `uadd_sat` are provided. Both return a range containing
//! `sat(a + b)` for every `a ∈ x` and `b ∈ y`, where `sat` clamps to `2^w - 1`.
//!
//! - [`DirectSat`] uses monotonicity: `sat(a + b)` never decreases when either
//!   argument grows, so the result spans from `sat(min x + min y)` to
//!   `sat(max x + max y)`.
//! - [`DecomposedSat`] widens both operands by one bit, adds them with the
//!   ordinary wrapping [`Range::add`] (which cannot wrap at the wider width),
//!   then clamps the bounds of the sum back into `w` bits.
//!
//! # Example
//!
//! ```rust
//! use uaddsat_rs::range::Range;
//! use uaddsat_rs::sat::{DecomposedSat, DirectSat, SaturatingAdd};
//! use uaddsat_rs::types::Width;
//!
//! let w = Width::new(2).unwrap();
//! let x = Range::new(w, 1, 3).unwrap(); // {1, 2}
//! let y = Range::new(w, 2, 4).unwrap(); // {2, 3}
//!
//! let expected = Range::singleton(w, 3).unwrap();
//! assert_eq!(DirectSat.uadd_sat(&x, &y).unwrap(), expected);
//! assert_eq!(DecomposedSat.uadd_sat(&x, &y).unwrap(), expected);
//! ```

use log::trace;

use crate::error::{check_width, RangeError};
use crate::range::Range;
use crate::types::Width;

/// Clamps `value` to the largest value representable at `width`.
///
/// `value` is typically the sum of two `width`-bit values, which is exact in
/// `u64` for every supported width.
pub fn saturate(width: Width, value: u64) -> u64 {
    value.min(width.max_value())
}

/// A saturating-add transfer function on ranges.
pub trait SaturatingAdd {
    /// Short human-readable name, used in logs and reports.
    fn name(&self) -> &'static str;

    /// Over-approximates `{sat(a + b) | a ∈ x, b ∈ y}`.
    ///
    /// Empty operands give an empty result.
    /// Fails with [`RangeError::WidthMismatch`] if the widths differ.
    fn uadd_sat(&self, x: &Range, y: &Range) -> Result<Range, RangeError>;
}

/// Closed-form saturating add, derived from monotonicity.
#[derive(Debug, Copy, Clone, Default)]
pub struct DirectSat;

impl SaturatingAdd for DirectSat {
    fn name(&self) -> &'static str {
        "direct"
    }

    fn uadd_sat(&self, x: &Range, y: &Range) -> Result<Range, RangeError> {
        check_width(x.width(), y.width())?;
        let width = x.width();
        if x.is_empty() || y.is_empty() {
            return Ok(Range::empty(width));
        }

        let lower = saturate(width, x.unsigned_min()? + y.unsigned_min()?);
        let upper = saturate(width, x.unsigned_max()? + y.unsigned_max()?);
        Range::from_inclusive(width, lower, upper)
    }
}

/// Saturating add via a non-wrapping addition one bit wider, then clamping.
#[derive(Debug, Copy, Clone, Default)]
pub struct DecomposedSat;

impl SaturatingAdd for DecomposedSat {
    fn name(&self) -> &'static str {
        "decomposed"
    }

    fn uadd_sat(&self, x: &Range, y: &Range) -> Result<Range, RangeError> {
        check_width(x.width(), y.width())?;
        let width = x.width();
        if x.is_empty() || y.is_empty() {
            return Ok(Range::empty(width));
        }

        let sum = x.extend_width()?.add(&y.extend_width()?)?;
        trace!("{} + {} = {} (extended)", x, y, sum);

        let max = width.max_value();
        let lower = sum.unsigned_min()?.min(max);
        let upper = sum.unsigned_max()?.min(max);
        Range::from_inclusive(width, lower, upper)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use test_log::test;

    use crate::concrete::values;
    use crate::enumerate::all_ranges;

    fn w(bits: u32) -> Width {
        Width::new(bits).unwrap()
    }

    fn algorithms() -> [&'static dyn SaturatingAdd; 2] {
        [&DirectSat, &DecomposedSat]
    }

    #[test]
    fn test_saturate() {
        assert_eq!(saturate(w(6), 10), 10);
        assert_eq!(saturate(w(6), 63), 63);
        assert_eq!(saturate(w(6), 64), 63);
        assert_eq!(saturate(w(6), 126), 63);
    }

    #[test]
    fn test_scenario_width_2() {
        let x = Range::new(w(2), 1, 3).unwrap();
        let y = Range::new(w(2), 2, 4).unwrap();
        for alg in algorithms() {
            let r = alg.uadd_sat(&x, &y).unwrap();
            assert_eq!(r, Range::singleton(w(2), 3).unwrap(), "{}", alg.name());
        }
    }

    #[test]
    fn test_singletons_are_exact() {
        let width = w(4);
        for a in 0..16 {
            for b in 0..16 {
                let x = Range::singleton(width, a).unwrap();
                let y = Range::singleton(width, b).unwrap();
                let expected = Range::singleton(width, saturate(width, a + b)).unwrap();
                for alg in algorithms() {
                    assert_eq!(alg.uadd_sat(&x, &y).unwrap(), expected, "{}: {} + {}", alg.name(), a, b);
                }
            }
        }
    }

    #[test]
    fn test_no_saturation() {
        let x = Range::new(w(6), 1, 5).unwrap();
        let y = Range::new(w(6), 10, 20).unwrap();
        for alg in algorithms() {
            assert_eq!(alg.uadd_sat(&x, &y).unwrap(), Range::new(w(6), 11, 24).unwrap());
        }
    }

    #[test]
    fn test_partial_saturation() {
        let x = Range::new(w(6), 30, 40).unwrap();
        let y = Range::new(w(6), 20, 30).unwrap();
        for alg in algorithms() {
            // [50, 63] is [50, 64), stored with upper 0.
            let r = alg.uadd_sat(&x, &y).unwrap();
            assert_eq!(r, Range::new(w(6), 50, 64).unwrap());
            assert_eq!(r.unsigned_max().unwrap(), 63);
        }
    }

    #[test]
    fn test_saturating_to_full() {
        let x = Range::new(w(3), 0, 7).unwrap();
        let y = Range::new(w(3), 0, 2).unwrap();
        for alg in algorithms() {
            assert!(alg.uadd_sat(&x, &y).unwrap().is_full(), "{}", alg.name());
        }
    }

    #[test]
    fn test_empty_operands() {
        let x = Range::new(w(3), 1, 3).unwrap();
        let e = Range::empty(w(3));
        for alg in algorithms() {
            assert!(alg.uadd_sat(&x, &e).unwrap().is_empty());
            assert!(alg.uadd_sat(&e, &x).unwrap().is_empty());
        }
    }

    #[test]
    fn test_full_and_wrapped_operands() {
        let width = w(3);
        let full = Range::full(width);
        let wrapped = Range::new(width, 6, 2).unwrap();
        let x = Range::new(width, 2, 4).unwrap();
        for alg in algorithms() {
            for (a, b) in [(&full, &x), (&wrapped, &x), (&x, &wrapped), (&full, &wrapped)] {
                let r = alg.uadd_sat(a, b).unwrap();
                for va in values(a) {
                    for vb in values(b) {
                        assert!(r.contains(saturate(width, va + vb)), "{}: {} + {} = {}", alg.name(), a, b, r);
                    }
                }
            }
        }
    }

    #[test]
    fn test_width_mismatch() {
        let x = Range::new(w(3), 1, 3).unwrap();
        let y = Range::new(w(4), 1, 3).unwrap();
        for alg in algorithms() {
            assert!(matches!(alg.uadd_sat(&x, &y), Err(RangeError::WidthMismatch { .. })));
        }
    }

    #[test]
    fn test_sound_exhaustive() {
        for bits in 1..=4 {
            let width = w(bits);
            let ranges = all_ranges(width).unwrap();
            for x in &ranges {
                for y in &ranges {
                    for alg in algorithms() {
                        let r = alg.uadd_sat(x, y).unwrap();
                        for a in values(x) {
                            for b in values(y) {
                                assert!(r.contains(saturate(width, a + b)));
                            }
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn test_wide_widths() {
        let width = w(32);
        let max = width.max_value();
        let x = Range::new(width, max - 10, max).unwrap();
        let y = Range::new(width, 5, 100).unwrap();
        for alg in algorithms() {
            let r = alg.uadd_sat(&x, &y).unwrap();
            assert_eq!(r.unsigned_min().unwrap(), max - 5);
            assert_eq!(r.unsigned_max().unwrap(), max);
        }
    }
}

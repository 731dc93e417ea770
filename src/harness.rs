//! Exhaustive precision comparison of the two saturating-add algorithms.
//!
//! For every ordered pair `(x, y)` of ranges from [`all_ranges`], the harness
//! computes [`DirectSat`] (the reference) and [`DecomposedSat`], and classifies
//! the relation between the two results:
//!
//! - **Incomparable**: the results do not overlap at all. Both are supposed to
//!   contain the same concrete sums, so this means one of them is unsound.
//! - **Equal**, **DecomposedBetter**, **DecomposedWorse**: by cardinality,
//!   smaller being more precise.
//!
//! Pairs are independent, so the outer loop may be split across `rayon`
//! workers; each worker owns its [`Counters`] and the partial counts are summed.
//!
//! # Example
//!
//! ```rust
//! use uaddsat_rs::harness::{Harness, HarnessConfig};
//! use uaddsat_rs::types::Width;
//!
//! let config = HarnessConfig::new(Width::new(3).unwrap());
//! let counters = Harness::new(config).run().unwrap();
//! assert_eq!(counters.total, 28 * 28);
//! assert!(counters.is_conserved());
//! ```

use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};
use std::time::Instant;

use log::{debug, info, trace};
use rayon::prelude::*;

use crate::concrete::cardinality;
use crate::enumerate::{all_ranges, pair_count, MAX_ENUM_BITS};
use crate::error::RangeError;
use crate::range::Range;
use crate::sat::{DecomposedSat, DirectSat, SaturatingAdd};
use crate::types::Width;

/// Relative precision of the decomposed result with respect to the direct one.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Classification {
    Equal,
    DecomposedBetter,
    DecomposedWorse,
    Incomparable,
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Classification::Equal => "equal",
            Classification::DecomposedBetter => "decomposed better",
            Classification::DecomposedWorse => "decomposed worse",
            Classification::Incomparable => "incomparable",
        };
        write!(f, "{}", s)
    }
}

/// Classifies two results of the same saturating addition.
///
/// Fails with [`RangeError::EmptyRange`] if either result is empty, and with
/// [`RangeError::WidthMismatch`] if their widths differ.
pub fn classify(direct: &Range, decomposed: &Range) -> Result<Classification, RangeError> {
    crate::error::check_width(direct.width(), decomposed.width())?;

    let (d_min, d_max) = (direct.unsigned_min()?, direct.unsigned_max()?);
    let (c_min, c_max) = (decomposed.unsigned_min()?, decomposed.unsigned_max()?);
    if d_max < c_min || c_max < d_min {
        return Ok(Classification::Incomparable);
    }

    let class = match cardinality(decomposed).cmp(&cardinality(direct)) {
        std::cmp::Ordering::Equal => Classification::Equal,
        std::cmp::Ordering::Less => Classification::DecomposedBetter,
        std::cmp::Ordering::Greater => Classification::DecomposedWorse,
    };
    Ok(class)
}

/// Outcome of comparing the two algorithms on one pair of inputs.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Comparison {
    pub x: Range,
    pub y: Range,
    pub direct: Range,
    pub decomposed: Range,
    pub class: Classification,
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "x: {}, y: {}, direct: {}, decomposed: {} => {}",
            self.x, self.y, self.direct, self.decomposed, self.class
        )
    }
}

/// Runs both algorithms on `(x, y)` and classifies the results.
pub fn compare_pair(x: &Range, y: &Range) -> Result<Comparison, RangeError> {
    let direct = DirectSat.uadd_sat(x, y)?;
    let decomposed = DecomposedSat.uadd_sat(x, y)?;
    let class = classify(&direct, &decomposed)?;
    Ok(Comparison {
        x: *x,
        y: *y,
        direct,
        decomposed,
        class,
    })
}

/// Classification counts accumulated over a run.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct Counters {
    pub total: u64,
    pub equal: u64,
    pub decomposed_better: u64,
    pub decomposed_worse: u64,
    pub incomparable: u64,
}

impl Counters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one classified pair.
    pub fn record(&mut self, class: Classification) {
        self.total += 1;
        match class {
            Classification::Equal => self.equal += 1,
            Classification::DecomposedBetter => self.decomposed_better += 1,
            Classification::DecomposedWorse => self.decomposed_worse += 1,
            Classification::Incomparable => self.incomparable += 1,
        }
    }

    /// Checks that every recorded pair landed in exactly one class.
    pub fn is_conserved(&self) -> bool {
        self.equal + self.decomposed_better + self.decomposed_worse + self.incomparable == self.total
    }
}

impl AddAssign for Counters {
    fn add_assign(&mut self, rhs: Self) {
        self.total += rhs.total;
        self.equal += rhs.equal;
        self.decomposed_better += rhs.decomposed_better;
        self.decomposed_worse += rhs.decomposed_worse;
        self.incomparable += rhs.incomparable;
    }
}

impl Add for Counters {
    type Output = Counters;

    fn add(mut self, rhs: Self) -> Self::Output {
        self += rhs;
        self
    }
}

impl Sum for Counters {
    fn sum<I: Iterator<Item = Counters>>(iter: I) -> Self {
        iter.fold(Counters::default(), Add::add)
    }
}

/// Harness configuration.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct HarnessConfig {
    width: Width,
    parallel: bool,
}

impl HarnessConfig {
    /// Bit width used when none is given.
    pub const DEFAULT_WIDTH: Width = Width::new_const(6);

    pub fn new(width: Width) -> Self {
        Self { width, parallel: false }
    }

    /// Splits the outer enumeration across the `rayon` thread pool.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn width(&self) -> Width {
        self.width
    }

    pub fn parallel(&self) -> bool {
        self.parallel
    }

    fn validate(&self) -> Result<(), RangeError> {
        if self.width.bits() > MAX_ENUM_BITS {
            return Err(RangeError::domain(format!(
                "harness width {} exceeds {} bits",
                self.width.bits(),
                MAX_ENUM_BITS
            )));
        }
        Ok(())
    }
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_WIDTH)
    }
}

/// Drives the comparison over all range pairs of one width.
#[derive(Debug, Clone)]
pub struct Harness {
    config: HarnessConfig,
}

impl Harness {
    pub fn new(config: HarnessConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &HarnessConfig {
        &self.config
    }

    /// Compares the algorithms on every ordered pair of ranges.
    pub fn run(&self) -> Result<Counters, RangeError> {
        self.config.validate()?;
        let width = self.config.width;
        let ranges = all_ranges(width)?;
        info!(
            "Comparing {} range pairs of width {} ({})",
            pair_count(width)?,
            width,
            if self.config.parallel { "parallel" } else { "sequential" }
        );

        let start = Instant::now();
        let counters = if self.config.parallel {
            run_parallel(&ranges)?
        } else {
            let mut counters = Counters::new();
            for x in &ranges {
                compare_row(x, &ranges, &mut counters)?;
            }
            counters
        };

        debug_assert!(counters.is_conserved());
        info!("Finished {} pairs in {:.2?}", counters.total, start.elapsed());
        Ok(counters)
    }
}

/// Compares `x` against every range of `ys`.
fn compare_row(x: &Range, ys: &[Range], counters: &mut Counters) -> Result<(), RangeError> {
    for y in ys {
        let cmp = compare_pair(x, y)?;
        trace!("{}", cmp);
        if cmp.class != Classification::Equal {
            debug!("{}", cmp);
        }
        counters.record(cmp.class);
    }
    Ok(())
}

fn run_parallel(ranges: &[Range]) -> Result<Counters, RangeError> {
    ranges
        .par_iter()
        .map(|x| -> Result<Counters, RangeError> {
            let mut counters = Counters::new();
            compare_row(x, ranges, &mut counters)?;
            Ok(counters)
        })
        .try_reduce(Counters::new, |a, b| Ok(a + b))
}

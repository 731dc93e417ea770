//! # uaddsat-rs: precision of saturating addition over unsigned ranges
//!
//! **`uaddsat-rs`** measures how precise two derivations of saturating unsigned
//! addition are on an abstract domain of integer ranges.
//!
//! ## The domain
//!
//! A [`Range`][crate::range::Range] is a set of `w`-bit unsigned integers written
//! as a half-open interval `[lower, upper)` modulo `2^w`, or one of the two
//! distinguished values **empty** and **full**. An abstract operation is *sound*
//! if its result contains every concrete outcome, and more *precise* the fewer
//! extra values it contains.
//!
//! ## The algorithms
//!
//! - [`DirectSat`][crate::sat::DirectSat] saturates the sum of the minima and
//!   the sum of the maxima.
//! - [`DecomposedSat`][crate::sat::DecomposedSat] extends both operands by one
//!   bit, performs an ordinary range addition, then clamps.
//!
//! ## The harness
//!
//! The [`Harness`][crate::harness::Harness] enumerates every non-wrapping range
//! of a small width, runs both algorithms on every ordered pair and counts how
//! often the decomposed result is equal, tighter, looser, or disjoint.
//!
//! ```rust
//! use uaddsat_rs::harness::{Harness, HarnessConfig};
//! use uaddsat_rs::report::Report;
//! use uaddsat_rs::types::Width;
//!
//! let width = Width::new(4).unwrap();
//! let counters = Harness::new(HarnessConfig::new(width)).run().unwrap();
//! assert_eq!(counters.total, 120 * 120);
//! assert_eq!(counters.incomparable, 0);
//! println!("{}", Report::new(&counters));
//! ```
//!
//! ## Core Components
//!
//! - **[`range`]**: the range type, wrapping addition and width extension.
//! - **[`sat`]**: the two saturating-add algorithms.
//! - **[`harness`]**: enumeration of pairs and classification.
//! - **[`soundness`]**: brute-force checking against concrete sums.

pub mod concrete;
pub mod enumerate;
pub mod error;
pub mod harness;
pub mod range;
pub mod report;
pub mod sat;
pub mod soundness;
pub mod types;

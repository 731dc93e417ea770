//! End-to-end tests for the saturating-add comparison.

use num_bigint::BigUint;
use uaddsat_rs::concrete::{cardinality, concretize, hull, values};
use uaddsat_rs::enumerate::{all_ranges, pair_count};
use uaddsat_rs::harness::{compare_pair, Classification, Counters, Harness, HarnessConfig};
use uaddsat_rs::range::Range;
use uaddsat_rs::report::Report;
use uaddsat_rs::sat::{saturate, DecomposedSat, DirectSat, SaturatingAdd};
use uaddsat_rs::types::Width;

fn w(bits: u32) -> Width {
    Width::new(bits).unwrap()
}

fn run(bits: u32) -> Counters {
    Harness::new(HarnessConfig::new(w(bits))).run().unwrap()
}

// ─── Harness ───────────────────────────────────────────────────────────────────

#[test]
fn total_matches_pair_count() {
    for bits in 1..=5 {
        let counters = run(bits);
        assert_eq!(BigUint::from(counters.total), pair_count(w(bits)).unwrap());
        assert!(counters.is_conserved());
    }
}

#[test]
fn reference_width() {
    let counters = run(6);
    assert_eq!(counters.total, 2016 * 2016);
    assert_eq!(counters.incomparable, 0);
    assert!(counters.is_conserved());
}

#[test]
fn harness_is_deterministic() {
    assert_eq!(run(4), run(4));
    let par = HarnessConfig::new(w(5)).with_parallel(true);
    assert_eq!(Harness::new(par).run().unwrap(), run(5));
}

#[test]
fn both_algorithms_agree_on_non_wrapping_inputs() {
    // Neither derivation loses precision on non-wrapping operands: both end up
    // with the hull of the concrete saturating sums.
    let counters = run(5);
    assert_eq!(counters.equal, counters.total);
    assert_eq!(counters.decomposed_better, 0);
    assert_eq!(counters.decomposed_worse, 0);
}

#[test]
fn results_are_optimal_hulls() {
    let width = w(4);
    let ranges = all_ranges(width).unwrap();
    for x in &ranges {
        for y in &ranges {
            let sums = values(x).flat_map(|a| values(y).map(move |b| saturate(width, a + b)));
            let best = hull(width, sums).unwrap();
            assert_eq!(DirectSat.uadd_sat(x, y).unwrap(), best, "{} + {}", x, y);
            assert_eq!(DecomposedSat.uadd_sat(x, y).unwrap(), best, "{} + {}", x, y);
        }
    }
}

#[test]
fn concrete_scenario_width_2() {
    let x = Range::new(w(2), 1, 3).unwrap();
    let y = Range::new(w(2), 2, 4).unwrap();
    assert_eq!(concretize(&x), vec![1, 2]);
    assert_eq!(concretize(&y), vec![2, 3]);

    let cmp = compare_pair(&x, &y).unwrap();
    assert_eq!(concretize(&cmp.direct), vec![3]);
    assert_eq!(concretize(&cmp.decomposed), vec![3]);
    assert_eq!(cmp.class, Classification::Equal);
}

#[test]
fn enumerated_ranges_are_nonempty() {
    for r in all_ranges(w(6)).unwrap() {
        assert!(cardinality(&r) >= 1);
        assert_eq!(concretize(&r).len() as u64, cardinality(&r));
    }
}

#[test]
fn report_lists_counters_in_order() {
    let counters = run(3);
    let raw = Report::new(&counters).raw();
    let values: Vec<u64> = raw.lines().map(|l| l.parse().unwrap()).collect();
    assert_eq!(
        values,
        vec![
            counters.total,
            counters.equal,
            counters.decomposed_better,
            counters.decomposed_worse,
            counters.incomparable
        ]
    );
    assert_eq!(values[0], 28 * 28);
}

// ─── Boundaries ────────────────────────────────────────────────────────────────

#[test]
fn boundary_constructors() {
    let width = w(6);
    for lo in 0..64 {
        assert!(Range::new(width, lo, lo).unwrap().is_full());
        let single = Range::new(width, lo, lo + 1).unwrap();
        assert_eq!(concretize(&single), vec![lo]);
    }
}

#[test]
fn singleton_corners() {
    let width = w(6);
    for (a, b) in [(0, 0), (0, 63), (63, 63), (31, 32), (40, 40)] {
        let x = Range::singleton(width, a).unwrap();
        let y = Range::singleton(width, b).unwrap();
        let expected = Range::singleton(width, saturate(width, a + b)).unwrap();
        assert_eq!(DirectSat.uadd_sat(&x, &y).unwrap(), expected);
        assert_eq!(DecomposedSat.uadd_sat(&x, &y).unwrap(), expected);
    }
}

//! Plain-text rendering of harness counters.

use std::fmt;

use crate::harness::Counters;

/// Five-line report of a harness run.
///
/// The [`Display`](fmt::Display) form labels each line; [`Report::raw`] gives
/// the bare integers in the same order.
#[derive(Debug, Copy, Clone)]
pub struct Report<'a> {
    counters: &'a Counters,
}

impl<'a> Report<'a> {
    pub fn new(counters: &'a Counters) -> Self {
        Self { counters }
    }

    fn fields(&self) -> [(&'static str, u64); 5] {
        let c = self.counters;
        [
            ("Range pairs tested", c.total),
            ("Equal results", c.equal),
            ("Decomposed more precise", c.decomposed_better),
            ("Direct more precise", c.decomposed_worse),
            ("Incomparable results", c.incomparable),
        ]
    }

    /// Bare counters, one per line.
    pub fn raw(&self) -> String {
        let mut s = String::new();
        for (_, value) in self.fields() {
            s.push_str(&value.to_string());
            s.push('\n');
        }
        s
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (label, value) in self.fields() {
            writeln!(f, "{:<24} {}", format!("{}:", label), value)?;
        }
        Ok(())
    }
}

//! Cumulative arc-length tables.
//!
//! A table maps curve parameter to the length travelled from `t = 0`. It is
//! built from the speed samples of an arc-length integration and inverted by
//! binary search plus linear interpolation.

use crate::numeric::{stable_sum, KahanSum, Sample};
use num_traits::Float;

/// Parameter and the arc length accumulated up to it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcLengthEntry<F> {
    pub t: F,
    pub length: F,
}

/// Monotone table of `(t, cumulative length)` pairs.
#[derive(Debug, Clone, PartialEq)]
pub struct ArcLengthTable<F> {
    entries: Vec<ArcLengthEntry<F>>,
}

impl<F: Float> ArcLengthTable<F> {
    /// Builds a table from speed samples sorted by `t`.
    ///
    /// Consecutive sample pairs form Simpson panels; each panel adds
    /// `w/6·(f₀ + 4f₁ + f₂)` where `w` is the panel width, and one entry is
    /// emitted per panel boundary. Panel lengths are accumulated with a
    /// compensated running sum. A trailing lone interval falls back to the
    /// trapezoid rule. The last entry is pinned to `total` (never below the
    /// previous entry), so the table agrees with the integral it came from.
    pub fn from_samples(samples: &[Sample<F>], total: F) -> Self {
        let Some(first) = samples.first() else {
            return Self {
                entries: vec![ArcLengthEntry {
                    t: F::zero(),
                    length: total.max(F::zero()),
                }],
            };
        };

        let two = F::from(2.0).unwrap();
        let four = F::from(4.0).unwrap();
        let six = F::from(6.0).unwrap();

        let mut entries = Vec::with_capacity(samples.len() / 2 + 2);
        entries.push(ArcLengthEntry {
            t: first.t,
            length: F::zero(),
        });

        let mut cumulative = KahanSum::new();
        let mut i = 0;
        while i + 2 < samples.len() {
            let (s0, s1, s2) = (samples[i], samples[i + 1], samples[i + 2]);
            let width = s2.t - s0.t;
            let panel = width / six * stable_sum(&[s0.value, four * s1.value, s2.value]);
            entries.push(ArcLengthEntry {
                t: s2.t,
                length: cumulative.add(panel),
            });
            i += 2;
        }
        if i + 1 < samples.len() {
            let (s0, s1) = (samples[i], samples[i + 1]);
            let trapezoid = (s1.t - s0.t) * (s0.value + s1.value) / two;
            entries.push(ArcLengthEntry {
                t: s1.t,
                length: cumulative.add(trapezoid),
            });
        }

        let n = entries.len();
        if n > 1 {
            let floor = entries[n - 2].length;
            entries[n - 1].length = total.max(floor);
        }
        Self { entries }
    }

    /// Builds the exact table of a constant-speed path of length `length`
    /// over `[0, 1]`.
    pub fn linear(length: F) -> Self {
        Self {
            entries: vec![
                ArcLengthEntry {
                    t: F::zero(),
                    length: F::zero(),
                },
                ArcLengthEntry {
                    t: F::one(),
                    length: length.max(F::zero()),
                },
            ],
        }
    }

    /// Returns the table entries, increasing in both fields.
    pub fn entries(&self) -> &[ArcLengthEntry<F>] {
        &self.entries
    }

    /// Returns the length at the end of the table.
    pub fn total_length(&self) -> F {
        self.entries.last().map_or_else(F::zero, |e| e.length)
    }

    /// Maps an arc length back to the curve parameter.
    ///
    /// Returns `None` if `length` is outside `[0, total_length()]` or NaN.
    /// Zero maps to the first parameter; for a non-degenerate table the total
    /// length maps to the last one.
    pub fn parameter_at_length(&self, length: F) -> Option<F> {
        let total = self.total_length();
        if !(length >= F::zero() && length <= total) {
            return None;
        }
        let first = self.entries.first()?;
        let last = self.entries.last()?;
        if length == F::zero() {
            return Some(first.t);
        }
        if length == total {
            return Some(last.t);
        }

        let hi = self.entries.partition_point(|e| e.length < length);
        if hi == 0 {
            return Some(first.t);
        }
        let lo = &self.entries[hi - 1];
        let hi = &self.entries[hi];
        let span = hi.length - lo.length;
        if span <= F::zero() {
            return Some(hi.t);
        }
        let fraction = (length - lo.length) / span;
        Some(lo.t + (hi.t - lo.t) * fraction)
    }
}

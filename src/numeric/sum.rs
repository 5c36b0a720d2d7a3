//! Floating-point summation with controlled round-off.
//!
//! Adding two values whose exponents differ a lot drops the low bits of the
//! smaller one, and adding values of opposite sign and similar magnitude
//! cancels significant bits. [`stable_sum`] keeps like-signed terms together
//! and accumulates them smallest-magnitude first.

use num_traits::Float;
use std::cmp::Ordering;

/// Summation strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SumAlgorithm {
    /// Split by sign, sort by magnitude, add smallest first. See [`stable_sum`].
    #[default]
    SortAndAdd,
    /// Kahan compensated summation. See [`kahan_sum`].
    Kahan,
    /// Plain left-to-right accumulation. See [`naive_sum`].
    Naive,
}

impl SumAlgorithm {
    /// Sums `values` with this strategy.
    pub fn sum<F: Float>(self, values: &[F]) -> F {
        match self {
            SumAlgorithm::SortAndAdd => stable_sum(values),
            SumAlgorithm::Kahan => kahan_sum(values),
            SumAlgorithm::Naive => naive_sum(values),
        }
    }
}

/// Sums `values` minimizing cancellation and round-off error.
///
/// Negative and non-negative values are summed separately, each in order of
/// ascending magnitude, and the two partial sums are added last. Inputs of
/// length 0, 1 or 2 are returned directly.
///
/// # Example
///
/// ```
/// use bezum::numeric::stable_sum;
///
/// let mut values = vec![1.0];
/// values.extend(std::iter::repeat(1e-16).take(10));
///
/// // Naive left-to-right addition loses every small term.
/// assert_eq!(values.iter().fold(0.0, |acc, v| acc + v), 1.0);
/// assert!(stable_sum(&values) > 1.0);
/// ```
pub fn stable_sum<F: Float>(values: &[F]) -> F {
    match values {
        [] => F::zero(),
        [a] => *a,
        [a, b] => *a + *b,
        _ => {
            let (mut negative, mut positive): (Vec<F>, Vec<F>) =
                values.iter().copied().partition(|v| *v < F::zero());
            negative.sort_by(by_magnitude);
            positive.sort_by(by_magnitude);

            let negative_sum = negative.iter().fold(F::zero(), |acc, &v| acc + v);
            let positive_sum = positive.iter().fold(F::zero(), |acc, &v| acc + v);
            positive_sum + negative_sum
        }
    }
}

fn by_magnitude<F: Float>(a: &F, b: &F) -> Ordering {
    a.abs().partial_cmp(&b.abs()).unwrap_or(Ordering::Equal)
}

/// Sums `values` with Kahan's compensated summation.
pub fn kahan_sum<F: Float>(values: &[F]) -> F {
    let mut sum = KahanSum::new();
    for &v in values {
        sum.add(v);
    }
    sum.value()
}

/// Running Kahan sum, for totals that are read back after every term.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KahanSum<F> {
    sum: F,
    compensation: F,
}

impl<F: Float> Default for KahanSum<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: Float> KahanSum<F> {
    /// Starts an empty sum.
    pub fn new() -> Self {
        Self {
            sum: F::zero(),
            compensation: F::zero(),
        }
    }

    /// Adds `value` and returns the updated total.
    pub fn add(&mut self, value: F) -> F {
        let y = value - self.compensation;
        let t = self.sum + y;
        self.compensation = (t - self.sum) - y;
        self.sum = t;
        t
    }

    /// Returns the current total.
    pub fn value(&self) -> F {
        self.sum
    }
}

/// Sums `values` left to right.
pub fn naive_sum<F: Float>(values: &[F]) -> F {
    values.iter().fold(F::zero(), |acc, &v| acc + v)
}

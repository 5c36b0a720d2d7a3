//! Real roots of quadratic equations.

use super::stable_sum;
use num_traits::Float;

/// The equation `a·x² + b·x + c = 0`.
///
/// `a` must be non-zero; linear and constant equations are the caller's job.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadraticEquation<F> {
    pub a: F,
    pub b: F,
    pub c: F,
}

impl<F: Float> QuadraticEquation<F> {
    /// Creates a new equation.
    #[inline]
    pub fn new(a: F, b: F, c: F) -> Self {
        Self { a, b, c }
    }

    /// Returns `b² − 4ac`.
    #[inline]
    pub fn discriminant(&self) -> F {
        let four = F::from(4.0).unwrap();
        self.b * self.b - four * self.a * self.c
    }

    /// Evaluates `a·x² + b·x + c`.
    pub fn value_at(&self, x: F) -> F {
        stable_sum(&[self.a * x * x, self.b * x, self.c])
    }

    /// Evaluates the derivative `2a·x + b`.
    #[inline]
    pub fn derivative_at(&self, x: F) -> F {
        (self.a + self.a) * x + self.b
    }

    /// Returns the real roots in ascending order.
    ///
    /// Uses `q = −(b + sign(b)·√D) / 2` with roots `q/a` and `c/q`, which
    /// never subtracts nearly equal quantities when `b² ≫ 4ac`.
    ///
    /// # Example
    ///
    /// ```
    /// use bezum::numeric::QuadraticEquation;
    ///
    /// let roots = QuadraticEquation::new(1.0, -3.0, 2.0).real_roots();
    /// assert_eq!(roots, vec![1.0, 2.0]);
    /// ```
    pub fn real_roots(&self) -> Vec<F> {
        let discriminant = self.discriminant();
        let half = F::from(0.5).unwrap();

        if discriminant > F::zero() {
            let sign = if self.b > F::zero() {
                F::one()
            } else {
                -F::one()
            };
            let q = -half * (self.b + sign * discriminant.sqrt());
            let x1 = q / self.a;
            let x2 = self.c / q;
            if x1 < x2 {
                vec![x1, x2]
            } else {
                vec![x2, x1]
            }
        } else if discriminant == F::zero() {
            vec![-half * self.b / self.a]
        } else {
            Vec::new()
        }
    }
}

/// Returns the real roots of `a·x² + b·x + c = 0` in ascending order.
///
/// Shorthand for [`QuadraticEquation::real_roots`].
pub fn solve_quadratic<F: Float>(a: F, b: F, c: F) -> Vec<F> {
    QuadraticEquation::new(a, b, c).real_roots()
}

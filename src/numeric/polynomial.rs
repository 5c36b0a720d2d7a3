//! Scalar polynomials of low degree.

use super::stable_sum;
use crate::error::{CurveError, Result};
use num_traits::Float;

/// The polynomial `Σ coefficients[i]·tⁱ`, coefficients stored lowest degree first.
#[derive(Debug, Clone, PartialEq)]
pub struct Polynomial<F> {
    coefficients: Vec<F>,
}

impl<F: Float> Polynomial<F> {
    /// Creates a polynomial from coefficients ordered from `t⁰` upwards.
    pub fn new(coefficients: Vec<F>) -> Self {
        Self { coefficients }
    }

    /// Returns the coefficients, lowest degree first.
    pub fn coefficients(&self) -> &[F] {
        &self.coefficients
    }

    /// Returns the declared degree (`coefficients.len() − 1`).
    ///
    /// Trailing zero coefficients are not stripped.
    pub fn degree(&self) -> usize {
        self.coefficients.len().saturating_sub(1)
    }

    /// Returns the coefficient of `tⁱ`, zero past the declared degree.
    pub fn coefficient(&self, i: usize) -> F {
        self.coefficients.get(i).copied().unwrap_or_else(F::zero)
    }

    /// Returns the same polynomial declared with degree `degree`.
    ///
    /// Pads with zero coefficients; never truncates.
    pub fn expand_degree(&self, degree: usize) -> Self {
        let mut coefficients = self.coefficients.clone();
        if coefficients.len() < degree + 1 {
            coefficients.resize(degree + 1, F::zero());
        }
        Self { coefficients }
    }

    /// Evaluates the polynomial at `t`, summing the terms with [`stable_sum`].
    pub fn value_at(&self, t: F) -> F {
        let mut power = F::one();
        let terms: Vec<F> = self
            .coefficients
            .iter()
            .map(|&c| {
                let term = c * power;
                power = power * t;
                term
            })
            .collect();
        stable_sum(&terms)
    }

    /// Computes the resultant of `f` and `g` from their Bézout matrix.
    ///
    /// Both polynomials are taken at the larger of their declared degrees.
    /// The resultant is zero iff they share a root (given non-zero leading
    /// coefficients).
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::InvalidDegree`] unless that degree is 1, 2 or 3.
    ///
    /// # Example
    ///
    /// ```
    /// use bezum::numeric::Polynomial;
    ///
    /// // (t − 3)(t − 4) and (t − 1)(t − 2) share no root.
    /// let f = Polynomial::new(vec![12.0, -7.0, 1.0]);
    /// let g = Polynomial::new(vec![2.0, -3.0, 1.0]);
    /// assert_eq!(Polynomial::resultant(&f, &g).unwrap(), -12.0);
    /// ```
    pub fn resultant(f: &Self, g: &Self) -> Result<F> {
        let degree = f.degree().max(g.degree());
        let a = f.expand_degree(degree).coefficients;
        let b = g.expand_degree(degree).coefficients;
        let ab = |i: usize, j: usize| a[i] * b[j] - a[j] * b[i];

        match degree {
            1 => Ok(ab(1, 0)),
            2 => {
                let a2b1 = ab(2, 1);
                let a2b0 = ab(2, 0);
                let a1b0 = ab(1, 0);
                Ok(det2(a2b1, a2b0, a2b0, a1b0))
            }
            3 => {
                let a3b2 = ab(3, 2);
                let a3b1 = ab(3, 1);
                let a3b0 = ab(3, 0);
                let a2b1 = ab(2, 1);
                let a2b0 = ab(2, 0);
                let a1b0 = ab(1, 0);
                Ok(det3(
                    [a3b2, a3b1, a3b0],
                    [a3b1, a3b0 + a2b1, a2b0],
                    [a3b0, a2b0, a1b0],
                ))
            }
            _ => Err(CurveError::InvalidDegree {
                points: degree + 1,
            }),
        }
    }
}

/// Determinant of the 2×2 matrix `[[a, b], [c, d]]`.
#[inline]
pub fn det2<F: Float>(a: F, b: F, c: F, d: F) -> F {
    a * d - b * c
}

/// Determinant of a 3×3 matrix given by rows, expanded with [`stable_sum`].
pub fn det3<F: Float>(r0: [F; 3], r1: [F; 3], r2: [F; 3]) -> F {
    let [a, b, c] = r0;
    let [d, e, f] = r1;
    let [g, h, i] = r2;
    stable_sum(&[
        a * e * i,
        -(a * f * h),
        b * f * g,
        -(b * d * i),
        c * d * h,
        -(c * e * g),
    ])
}

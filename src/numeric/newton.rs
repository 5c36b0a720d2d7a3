//! Newton–Raphson root refinement and float comparison.

use crate::error::{CurveError, Result};
use num_traits::Float;

/// Difference between 1 and the next representable `f64`.
pub const MACHINE_EPSILON: f64 = 2.220446049250313e-16;

/// Compares two numbers, within `epsilon` if given, exactly otherwise.
///
/// # Example
///
/// ```
/// use bezum::numeric::number_equals;
///
/// assert!(number_equals(1.0, 1.0 + 1e-12, Some(1e-9)));
/// assert!(!number_equals(1.0, 1.0 + 1e-12, None));
/// ```
#[inline]
pub fn number_equals<F: Float>(x: F, y: F, epsilon: Option<F>) -> bool {
    match epsilon {
        Some(epsilon) => (x - y).abs() <= epsilon,
        None => x == y,
    }
}

/// Newton–Raphson iteration with a bounded number of steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewtonRaphson {
    /// Steps taken before giving up.
    pub max_iterations: usize,
}

impl Default for NewtonRaphson {
    fn default() -> Self {
        Self {
            max_iterations: 1000,
        }
    }
}

impl NewtonRaphson {
    /// Creates a solver giving up after `max_iterations` steps.
    pub fn new(max_iterations: usize) -> Self {
        Self { max_iterations }
    }

    /// Refines `guess` towards a root of `f`, whose derivative is `df`.
    ///
    /// Stops as soon as two successive iterates compare equal under
    /// [`number_equals`] with `epsilon`, and returns the later one.
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::InvalidParameter`] if `guess` is not finite and
    /// [`CurveError::ConvergenceFailed`] if an iterate becomes non-finite or
    /// `max_iterations` steps pass without convergence.
    ///
    /// # Example
    ///
    /// ```
    /// use bezum::numeric::NewtonRaphson;
    ///
    /// let root = NewtonRaphson::default()
    ///     .find_root(|x: f64| x * x - 2.0, |x| 2.0 * x, 1.0, Some(1e-12))
    ///     .unwrap();
    /// assert!((root - 2f64.sqrt()).abs() < 1e-12);
    /// ```
    pub fn find_root<F, G, D>(&self, mut f: G, mut df: D, guess: F, epsilon: Option<F>) -> Result<F>
    where
        F: Float,
        G: FnMut(F) -> F,
        D: FnMut(F) -> F,
    {
        if !guess.is_finite() {
            return Err(CurveError::invalid_parameter("guess", guess));
        }

        let mut guess = guess;
        for iteration in 1..=self.max_iterations {
            let next = guess - f(guess) / df(guess);
            log::trace!("newton step {}: {:?} -> {:?}", iteration, guess.to_f64(), next.to_f64());

            if !next.is_finite() {
                log::warn!("newton iterate became non-finite at step {}", iteration);
                return Err(CurveError::ConvergenceFailed {
                    iterations: iteration,
                });
            }
            if number_equals(next, guess, epsilon) {
                return Ok(next);
            }
            guess = next;
        }

        log::warn!("newton did not converge in {} steps", self.max_iterations);
        Err(CurveError::ConvergenceFailed {
            iterations: self.max_iterations,
        })
    }
}

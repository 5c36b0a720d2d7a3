//! Numerical integration by repeated doubling of Simpson's rule.
//!
//! The integrator hands back every sample it evaluated, so callers that need
//! the integrand on a grid (arc-length tables, for one) get it without
//! re-evaluating or recording through side effects.

use super::stable_sum;
use crate::error::{CurveError, Result};
use num_traits::Float;

/// One evaluation of the integrand.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample<F> {
    /// Abscissa.
    pub t: F,
    /// Integrand value at `t`.
    pub value: F,
}

/// Result of a converged integration.
#[derive(Debug, Clone, PartialEq)]
pub struct Integral<F> {
    /// The final composite Simpson estimate.
    pub value: F,
    /// Every sample of the final grid, sorted by `t`.
    ///
    /// The grid is uniform with `panels + 1` points.
    pub samples: Vec<Sample<F>>,
    /// Number of panels of the final estimate (a power of two, at least 4).
    pub panels: usize,
    /// Number of doublings performed before convergence.
    pub doublings: usize,
}

/// Composite Simpson integration that doubles the panel count until two
/// successive estimates agree to a relative tolerance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimpsonIntegrator<F> {
    /// Stop once `|Sₖ − Sₖ₋₁| / |Sₖ₋₁|` falls below this.
    pub relative_tolerance: F,
    /// Give up after this many doublings.
    pub max_doublings: usize,
}

impl<F: Float> Default for SimpsonIntegrator<F> {
    fn default() -> Self {
        Self {
            relative_tolerance: F::from(1e-5).unwrap(),
            max_doublings: 20,
        }
    }
}

impl<F: Float> SimpsonIntegrator<F> {
    /// Creates an integrator with the given relative tolerance.
    pub fn new(relative_tolerance: F) -> Self {
        Self {
            relative_tolerance,
            ..Default::default()
        }
    }

    /// Sets the doubling cap.
    pub fn with_max_doublings(mut self, max_doublings: usize) -> Self {
        self.max_doublings = max_doublings;
        self
    }

    /// Integrates `f` over `[a, b]`.
    ///
    /// Starts from two panels and doubles until convergence. Samples from the
    /// previous grid are kept; only the new midpoints are evaluated. An
    /// integrand that is identically zero on two successive grids converges
    /// to zero.
    ///
    /// # Errors
    ///
    /// - [`CurveError::InvalidParameter`] if `a` or `b` is not finite, or the
    ///   tolerance is not a positive finite number.
    /// - [`CurveError::ConvergenceFailed`] if the tolerance is not met within
    ///   `max_doublings` doublings, or an estimate is not finite.
    ///
    /// # Example
    ///
    /// ```
    /// use bezum::numeric::SimpsonIntegrator;
    ///
    /// let result = SimpsonIntegrator::new(1e-10).integrate(|x: f64| x.sin(), 0.0, std::f64::consts::PI).unwrap();
    /// assert!((result.value - 2.0).abs() < 1e-9);
    /// assert_eq!(result.samples.len(), result.panels + 1);
    /// ```
    pub fn integrate<G>(&self, mut f: G, a: F, b: F) -> Result<Integral<F>>
    where
        G: FnMut(F) -> F,
    {
        if !a.is_finite() {
            return Err(CurveError::invalid_parameter("a", a));
        }
        if !b.is_finite() {
            return Err(CurveError::invalid_parameter("b", b));
        }
        let tolerance = self.relative_tolerance;
        if !(tolerance > F::zero() && tolerance.is_finite()) {
            return Err(CurveError::invalid_parameter("relative_tolerance", tolerance));
        }

        let two = F::from(2.0).unwrap();
        let three = F::from(3.0).unwrap();
        let four = F::from(4.0).unwrap();

        let mut panels = 2usize;
        let mut h = (b - a) / two;
        let mut samples = vec![
            Sample { t: a, value: f(a) },
            Sample {
                t: a + h,
                value: f(a + h),
            },
            Sample { t: b, value: f(b) },
        ];
        let mut previous =
            h / three * stable_sum(&[samples[0].value, four * samples[1].value, samples[2].value]);

        for doubling in 1..=self.max_doublings {
            panels *= 2;
            h = h / two;

            let mut refined = Vec::with_capacity(panels + 1);
            for (i, pair) in samples.windows(2).enumerate() {
                refined.push(pair[0]);
                let t = a + h * F::from(2 * i + 1).unwrap();
                refined.push(Sample { t, value: f(t) });
            }
            refined.extend(samples.last().copied());
            samples = refined;

            let current = h / three * simpson_sum(&samples);
            log::trace!("simpson panels={} estimate={:?}", panels, current.to_f64());

            if !current.is_finite() {
                log::warn!("simpson estimate became non-finite after {} doublings", doubling);
                return Err(CurveError::ConvergenceFailed {
                    iterations: doubling,
                });
            }

            if has_converged(current, previous, tolerance) {
                log::debug!(
                    "simpson converged: panels={} value={:?}",
                    panels,
                    current.to_f64()
                );
                if b < a {
                    samples.reverse();
                }
                return Ok(Integral {
                    value: current,
                    samples,
                    panels,
                    doublings: doubling,
                });
            }
            previous = current;
        }

        log::warn!(
            "simpson did not reach relative tolerance {:?} in {} doublings",
            tolerance.to_f64(),
            self.max_doublings
        );
        Err(CurveError::ConvergenceFailed {
            iterations: self.max_doublings,
        })
    }
}

/// `f₀ + 4·Σodd + 2·Σeven + fₙ` over a uniform grid.
fn simpson_sum<F: Float>(samples: &[Sample<F>]) -> F {
    let two = F::from(2.0).unwrap();
    let four = F::from(4.0).unwrap();
    let last = samples.len() - 1;
    let terms: Vec<F> = samples
        .iter()
        .enumerate()
        .map(|(i, s)| {
            if i == 0 || i == last {
                s.value
            } else if i % 2 == 1 {
                four * s.value
            } else {
                two * s.value
            }
        })
        .collect();
    stable_sum(&terms)
}

fn has_converged<F: Float>(current: F, previous: F, tolerance: F) -> bool {
    if previous == F::zero() {
        return current == F::zero();
    }
    ((current - previous) / previous).abs() < tolerance
}

/// Integrates `f` over `[a, b]` with the default doubling cap.
///
/// Shorthand for [`SimpsonIntegrator::integrate`].
pub fn integrate<F, G>(f: G, a: F, b: F, relative_tolerance: F) -> Result<Integral<F>>
where
    F: Float,
    G: FnMut(F) -> F,
{
    SimpsonIntegrator::new(relative_tolerance).integrate(f, a, b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_polynomial_is_exact() {
        // Simpson's rule integrates cubics exactly, so the first doubling agrees.
        let result = integrate(|x: f64| x * x * x - 2.0 * x + 1.0, 0.0, 2.0, 1e-8).unwrap();
        assert_relative_eq!(result.value, 2.0, epsilon = 1e-12);
        assert_eq!(result.doublings, 1);
        assert_eq!(result.panels, 4);
    }

    #[test]
    fn test_constant() {
        let result = integrate(|_| 5.0f64, 0.0, 1.0, 1e-12).unwrap();
        assert_relative_eq!(result.value, 5.0, epsilon = 1e-14);
    }

    #[test]
    fn test_transcendental() {
        let result = integrate(|x: f64| x.exp(), 0.0, 1.0, 1e-10).unwrap();
        assert_relative_eq!(result.value, std::f64::consts::E - 1.0, epsilon = 1e-9);
    }

    #[test]
    fn test_samples_cover_uniform_grid() {
        let result = integrate(|x: f64| x.sqrt(), 0.0, 1.0, 1e-6).unwrap();
        let n = result.panels;
        assert!(n.is_power_of_two());
        assert_eq!(result.samples.len(), n + 1);
        assert_eq!(result.samples[0].t, 0.0);
        assert_eq!(result.samples[n].t, 1.0);
        for (i, s) in result.samples.iter().enumerate() {
            assert_relative_eq!(s.t, i as f64 / n as f64, epsilon = 1e-15);
            assert_relative_eq!(s.value, s.t.sqrt(), epsilon = 1e-15);
        }
    }

    #[test]
    fn test_evaluates_each_point_once() {
        let mut calls = 0usize;
        let result = integrate(
            |x: f64| {
                calls += 1;
                x.cos()
            },
            0.0,
            3.0,
            1e-9,
        )
        .unwrap();
        assert_eq!(calls, result.panels + 1);
    }

    #[test]
    fn test_reversed_interval() {
        let result = integrate(|x: f64| x * x, 1.0, 0.0, 1e-10).unwrap();
        assert_relative_eq!(result.value, -1.0 / 3.0, epsilon = 1e-12);
        assert_eq!(result.samples.first().unwrap().t, 0.0);
        assert_eq!(result.samples.last().unwrap().t, 1.0);
    }

    #[test]
    fn test_zero_integrand_converges() {
        let result = integrate(|_| 0.0f64, 0.0, 1.0, 1e-5).unwrap();
        assert_eq!(result.value, 0.0);
    }

    #[test]
    fn test_unreachable_tolerance_hits_cap() {
        // √x converges slowly; 128 panels cannot resolve 1e-15.
        let integrator = SimpsonIntegrator::new(1e-15).with_max_doublings(6);
        let err = integrator
            .integrate(|x: f64| x.sqrt(), 0.0, 1.0)
            .unwrap_err();
        assert_eq!(err, CurveError::ConvergenceFailed { iterations: 6 });
    }

    #[test]
    fn test_non_finite_estimate() {
        let err = integrate(|x: f64| 1.0 / x, 0.0, 1.0, 1e-5).unwrap_err();
        assert_eq!(err, CurveError::ConvergenceFailed { iterations: 1 });
    }

    #[test]
    fn test_invalid_arguments() {
        assert!(matches!(
            integrate(|x: f64| x, f64::NAN, 1.0, 1e-5),
            Err(CurveError::InvalidParameter { name: "a", .. })
        ));
        assert!(matches!(
            integrate(|x: f64| x, 0.0, f64::INFINITY, 1e-5),
            Err(CurveError::InvalidParameter { name: "b", .. })
        ));
        assert!(matches!(
            integrate(|x: f64| x, 0.0, 1.0, 0.0),
            Err(CurveError::InvalidParameter {
                name: "relative_tolerance",
                ..
            })
        ));
    }

    #[test]
    fn test_f32() {
        let result = integrate(|x: f32| x * x, 0.0f32, 3.0, 1e-4).unwrap();
        assert_relative_eq!(result.value, 9.0, epsilon = 1e-4);
    }
}

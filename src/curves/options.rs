//! Per-curve configuration.

use crate::numeric::SimpsonIntegrator;
use num_traits::Float;

/// Options controlling the numerical queries of a [`BezierCurve`](super::BezierCurve).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveOptions<F> {
    /// Integrator used for arc length.
    pub integrator: SimpsonIntegrator<F>,
    /// Margin excluded at both ends when inflection points are asked for
    /// without endpoints.
    pub endpoint_epsilon: F,
}

impl<F: Float> Default for CurveOptions<F> {
    fn default() -> Self {
        Self {
            integrator: SimpsonIntegrator::default(),
            endpoint_epsilon: F::from(1e-6).unwrap(),
        }
    }
}

impl<F: Float> CurveOptions<F> {
    /// Creates options with the given arc-length relative tolerance.
    pub fn with_tolerance(tolerance: F) -> Self {
        Self {
            integrator: SimpsonIntegrator::new(tolerance),
            ..Default::default()
        }
    }

    /// Sets the doubling cap of the arc-length integrator.
    pub fn with_max_doublings(mut self, max_doublings: usize) -> Self {
        self.integrator.max_doublings = max_doublings;
        self
    }

    /// Sets the endpoint margin for inflection filtering.
    pub fn with_endpoint_epsilon(mut self, endpoint_epsilon: F) -> Self {
        self.endpoint_epsilon = endpoint_epsilon;
        self
    }
}

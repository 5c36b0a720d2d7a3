//! Error types for curve and numeric operations.

use thiserror::Error;

/// Errors that can occur while building or querying curves.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CurveError {
    /// A curve or polynomial of unsupported degree (outside 1 to 3).
    #[error("invalid degree: expected 2, 3 or 4 control points or coefficients, got {points}")]
    InvalidDegree {
        /// Number of control points or coefficients supplied.
        points: usize,
    },

    /// A parameter was outside the domain of the operation (NaN, infinite, ...).
    #[error("invalid parameter `{name}`: {value}")]
    InvalidParameter {
        /// Name of the offending parameter.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// Operands do not have matching arity.
    #[error("dimension mismatch: expected a multiple of {expected}, found {found}")]
    DimensionMismatch {
        /// Expected arity.
        expected: usize,
        /// Arity found.
        found: usize,
    },

    /// Algorithm did not converge within the iteration limit.
    #[error("convergence failed after {iterations} iterations")]
    ConvergenceFailed {
        /// Number of iterations attempted.
        iterations: usize,
    },
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, CurveError>;

impl CurveError {
    pub(crate) fn invalid_parameter<F: num_traits::Float>(name: &'static str, value: F) -> Self {
        CurveError::InvalidParameter {
            name,
            value: value.to_f64().unwrap_or(f64::NAN),
        }
    }
}

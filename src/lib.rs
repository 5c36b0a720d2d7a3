//! bezum - Bézier curve numerics
//!
//! A small kernel for 2D Bézier curves of degree 1 to 3: polynomial-form
//! evaluation, inflection points, de Casteljau subdivision, and arc length by
//! adaptive Simpson integration. Floating-point sums of three or more terms go
//! through [`numeric::stable_sum`].
//!
//! ```
//! use bezum::{BezierCurve, Vec2};
//!
//! let curve = BezierCurve::cubic(
//!     Vec2::new(0.0, 0.0),
//!     Vec2::new(0.0, 1.0),
//!     Vec2::new(1.0, 0.0),
//!     Vec2::new(1.0, 1.0),
//! );
//!
//! let pieces = curve.subdivide_at_inflection_points().unwrap();
//! assert_eq!(pieces.len(), 2);
//!
//! let length = curve.length().unwrap();
//! let t: f64 = curve.parameter_at_length(length / 2.0).unwrap().unwrap();
//! assert!((t - 0.5).abs() < 1e-6);
//! ```

pub mod curves;
pub mod error;
pub mod numeric;
pub mod primitives;

pub use curves::{BezierCurve, CurveOptions};
pub use error::{CurveError, Result};
pub use primitives::Vec2;

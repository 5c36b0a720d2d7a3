//! Bézier curves, arc-length tables and curve options.

mod arc_length;
mod bezier;
mod options;

pub use arc_length::{ArcLengthEntry, ArcLengthTable};
pub use bezier::BezierCurve;
pub use options::CurveOptions;

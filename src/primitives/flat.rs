//! Conversion between point lists and interleaved coordinate arrays.
//!
//! Path formatters downstream of this crate take coordinates as a flat
//! `[x0, y0, x1, y1, ...]` list.

use super::Vec2;
use crate::error::{CurveError, Result};
use num_traits::Float;

impl<F: Float> Vec2<F> {
    /// Builds points from an interleaved `[x0, y0, x1, y1, ...]` slice.
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::DimensionMismatch`] if the slice length is odd.
    ///
    /// # Example
    ///
    /// ```
    /// use bezum::Vec2;
    ///
    /// let points = Vec2::from_flat_array(&[0.0, 1.0, 2.0, 3.0]).unwrap();
    /// assert_eq!(points, vec![Vec2::new(0.0, 1.0), Vec2::new(2.0, 3.0)]);
    /// ```
    pub fn from_flat_array(xy: &[F]) -> Result<Vec<Self>> {
        if xy.len() % 2 != 0 {
            return Err(CurveError::DimensionMismatch {
                expected: 2,
                found: xy.len(),
            });
        }
        Ok(xy
            .chunks_exact(2)
            .map(|pair| Vec2::new(pair[0], pair[1]))
            .collect())
    }

    /// Flattens points into an interleaved `[x0, y0, x1, y1, ...]` list.
    pub fn to_flat_array(points: &[Self]) -> Vec<F> {
        points.iter().flat_map(|p| [p.x, p.y]).collect()
    }
}

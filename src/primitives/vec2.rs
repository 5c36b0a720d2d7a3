//! 2D vector type used for control points, coefficients and derivatives.

use num_traits::Float;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// An immutable 2D vector.
///
/// Positions, polynomial coefficients and derivatives all share this type.
/// Generic over floating-point types (`f32` or `f64`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vec2<F> {
    pub x: F,
    pub y: F,
}

impl<F: Float> Vec2<F> {
    /// Creates a new vector.
    #[inline]
    pub fn new(x: F, y: F) -> Self {
        Self { x, y }
    }

    /// Creates a zero vector.
    #[inline]
    pub fn zero() -> Self {
        Self {
            x: F::zero(),
            y: F::zero(),
        }
    }

    /// Multiplies both components by `s`.
    #[inline]
    pub fn scale(self, s: F) -> Self {
        Self {
            x: self.x * s,
            y: self.y * s,
        }
    }

    /// Computes the dot product with another vector.
    #[inline]
    pub fn dot(self, other: Self) -> F {
        self.x * other.x + self.y * other.y
    }

    /// Computes the 2D cross product (perpendicular dot product).
    ///
    /// Returns the z-component of the 3D cross product if the vectors
    /// were extended to 3D with z=0. Positive means `other` is counter-clockwise
    /// from `self`.
    #[inline]
    pub fn cross(self, other: Self) -> F {
        self.x * other.y - self.y * other.x
    }

    /// Returns the squared length.
    #[inline]
    pub fn length_squared(self) -> F {
        self.dot(self)
    }

    /// Returns the Euclidean length, `sqrt(x² + y²)` without intermediate
    /// overflow or underflow.
    #[inline]
    pub fn length(self) -> F {
        self.x.hypot(self.y)
    }

    /// Returns the distance to another point.
    #[inline]
    pub fn distance(self, other: Self) -> F {
        (other - self).length()
    }

    /// Linearly interpolates between `self` and `other`.
    ///
    /// When `t = 0`, returns `self`. When `t = 1`, returns `other`.
    #[inline]
    pub fn lerp(self, other: Self, t: F) -> Self {
        self + (other - self) * t
    }

    /// Returns `true` if both components are finite.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Component-wise comparison with an absolute tolerance.
    ///
    /// An `epsilon` of zero compares for exact equality.
    #[inline]
    pub fn approx_eq(self, other: Self, epsilon: F) -> bool {
        (self.x - other.x).abs() <= epsilon && (self.y - other.y).abs() <= epsilon
    }

    /// Evaluates the vector polynomial `Σ coefficients[i]·tⁱ` with Horner's method.
    ///
    /// An empty coefficient list evaluates to the zero vector.
    ///
    /// # Example
    ///
    /// ```
    /// use bezum::Vec2;
    ///
    /// // P(t) = (1, 0) + (0, 2)·t
    /// let c = [Vec2::new(1.0, 0.0), Vec2::new(0.0, 2.0)];
    /// assert_eq!(Vec2::polynomial(0.5, &c), Vec2::new(1.0, 1.0));
    /// ```
    pub fn polynomial(t: F, coefficients: &[Self]) -> Self {
        let mut iter = coefficients.iter().rev();
        let Some(&highest) = iter.next() else {
            return Self::zero();
        };
        iter.fold(highest, |p, &c| c + p * t)
    }
}

impl<F: Float> Add for Vec2<F> {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

impl<F: Float> Sub for Vec2<F> {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }
}

impl<F: Float> Mul<F> for Vec2<F> {
    type Output = Self;

    #[inline]
    fn mul(self, scalar: F) -> Self {
        self.scale(scalar)
    }
}

impl<F: Float> Div<F> for Vec2<F> {
    type Output = Self;

    #[inline]
    fn div(self, scalar: F) -> Self {
        Self {
            x: self.x / scalar,
            y: self.y / scalar,
        }
    }
}

impl<F: Float> Neg for Vec2<F> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self {
            x: -self.x,
            y: -self.y,
        }
    }
}

impl<F: Float> Default for Vec2<F> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<F: Float> From<(F, F)> for Vec2<F> {
    fn from((x, y): (F, F)) -> Self {
        Self::new(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_new() {
        let v: Vec2<f64> = Vec2::new(3.0, 4.0);
        assert_eq!(v.x, 3.0);
        assert_eq!(v.y, 4.0);
    }

    #[test]
    fn test_dot_product() {
        let a: Vec2<f64> = Vec2::new(1.0, 2.0);
        let b = Vec2::new(3.0, 4.0);
        assert_eq!(a.dot(b), 11.0);
    }

    #[test]
    fn test_cross_product() {
        let a: Vec2<f64> = Vec2::new(1.0, 0.0);
        let b = Vec2::new(0.0, 1.0);
        assert_eq!(a.cross(b), 1.0);
        assert_eq!(b.cross(a), -1.0);
        assert_eq!(a.cross(a), 0.0);
    }

    #[test]
    fn test_length() {
        let v: Vec2<f64> = Vec2::new(3.0, 4.0);
        assert_eq!(v.length_squared(), 25.0);
        assert_eq!(v.length(), 5.0);
        assert_eq!(Vec2::<f64>::zero().length(), 0.0);
    }

    #[test]
    fn test_length_extreme_magnitudes() {
        let big: Vec2<f64> = Vec2::new(3e200, 4e200);
        assert!(big.length_squared().is_infinite());
        assert_relative_eq!(big.length(), 5e200, max_relative = 1e-15);

        let tiny: Vec2<f64> = Vec2::new(3e-200, 4e-200);
        assert_relative_eq!(tiny.length(), 5e-200, max_relative = 1e-15);
        assert_relative_eq!(
            Vec2::new(0.0f64, 0.0).distance(big),
            5e200,
            max_relative = 1e-15
        );
    }

    #[test]
    fn test_lerp() {
        let a: Vec2<f64> = Vec2::new(0.0, 0.0);
        let b = Vec2::new(10.0, 20.0);
        let mid = a.lerp(b, 0.5);
        assert_eq!(mid.x, 5.0);
        assert_eq!(mid.y, 10.0);
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
    }

    #[test]
    fn test_approx_eq() {
        let a: Vec2<f64> = Vec2::new(1.0, 2.0);
        let b = Vec2::new(1.0 + 1e-9, 2.0 - 1e-9);
        assert!(a.approx_eq(b, 1e-8));
        assert!(!a.approx_eq(b, 0.0));
        assert!(a.approx_eq(a, 0.0));
    }

    #[test]
    fn test_polynomial_horner() {
        // P(t) = (1, 1) + (2, 0)t + (0, 3)t²
        let c: [Vec2<f64>; 3] = [
            Vec2::new(1.0, 1.0),
            Vec2::new(2.0, 0.0),
            Vec2::new(0.0, 3.0),
        ];
        let p = Vec2::polynomial(2.0, &c);
        assert_relative_eq!(p.x, 5.0);
        assert_relative_eq!(p.y, 13.0);
        assert_eq!(Vec2::polynomial(0.0, &c), c[0]);
    }

    #[test]
    fn test_polynomial_empty() {
        let p: Vec2<f64> = Vec2::polynomial(3.0, &[]);
        assert_eq!(p, Vec2::zero());
    }

    #[test]
    fn test_arithmetic() {
        let a: Vec2<f64> = Vec2::new(1.0, 2.0);
        let b = Vec2::new(3.0, 4.0);

        let sum = a + b;
        assert_eq!(sum.x, 4.0);
        assert_eq!(sum.y, 6.0);

        let diff = b - a;
        assert_eq!(diff.x, 2.0);
        assert_eq!(diff.y, 2.0);

        assert_eq!(a * 2.0, a.scale(2.0));
        assert_eq!(a.scale(2.0), Vec2::new(2.0, 4.0));

        let divided = b / 2.0;
        assert_eq!(divided.x, 1.5);
        assert_eq!(divided.y, 2.0);

        let neg = -a;
        assert_eq!(neg.x, -1.0);
        assert_eq!(neg.y, -2.0);
    }
}

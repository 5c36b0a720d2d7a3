//! Bézier curves of degree 1 to 3 in polynomial form.
//!
//! A curve is stored as its control points. The power-basis coefficients,
//! the derivative coefficients and the arc-length table are derived on first
//! use and cached for the lifetime of the curve.

use super::arc_length::ArcLengthTable;
use super::options::CurveOptions;
use crate::error::{CurveError, Result};
use crate::numeric::{solve_quadratic, stable_sum};
use crate::primitives::Vec2;
use num_traits::Float;
use std::sync::OnceLock;

/// A 2D Bézier curve with 2, 3 or 4 control points.
///
/// The curve is `P(t) = Σ cᵢ·tⁱ` where `cᵢ` are the [coefficients](Self::coefficients).
/// Queries accept any real `t`; only `[0, 1]` lies between the end points.
///
/// # Example
///
/// ```
/// use bezum::{BezierCurve, Vec2};
///
/// let curve = BezierCurve::cubic(
///     Vec2::new(0.0, 0.0),
///     Vec2::new(1.0, 2.0),
///     Vec2::new(3.0, 2.0),
///     Vec2::new(4.0, 0.0),
/// );
///
/// assert_eq!(curve.point_at(0.5), Vec2::new(2.0, 1.5));
/// let (left, right) = curve.subdivide_at(0.5).unwrap();
/// assert_eq!(left.end(), right.start());
/// ```
#[derive(Debug, Clone)]
pub struct BezierCurve<F> {
    points: Vec<Vec2<F>>,
    options: CurveOptions<F>,
    coefficients: OnceLock<Vec<Vec2<F>>>,
    derivative_coefficients: OnceLock<Vec<Vec2<F>>>,
    second_derivative_coefficients: OnceLock<Vec<Vec2<F>>>,
    arc_length: OnceLock<Result<ArcLengthTable<F>>>,
}

impl<F: Float> BezierCurve<F> {
    /// Creates a curve from 2, 3 or 4 control points with default options.
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::InvalidDegree`] for any other point count.
    pub fn new(points: Vec<Vec2<F>>) -> Result<Self> {
        Self::with_options(points, CurveOptions::default())
    }

    /// Creates a curve with explicit options.
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::InvalidDegree`] unless there are 2, 3 or 4 points.
    pub fn with_options(points: Vec<Vec2<F>>, options: CurveOptions<F>) -> Result<Self> {
        if !(2..=4).contains(&points.len()) {
            return Err(CurveError::InvalidDegree {
                points: points.len(),
            });
        }
        Ok(Self::from_parts(points, options))
    }

    /// Creates a curve from interleaved `[x0, y0, x1, y1, ...]` coordinates.
    pub fn from_flat_array(xy: &[F]) -> Result<Self> {
        Self::new(Vec2::from_flat_array(xy)?)
    }

    /// Creates a straight segment.
    pub fn line(p0: Vec2<F>, p1: Vec2<F>) -> Self {
        Self::from_parts(vec![p0, p1], CurveOptions::default())
    }

    /// Creates a quadratic curve.
    pub fn quadratic(p0: Vec2<F>, p1: Vec2<F>, p2: Vec2<F>) -> Self {
        Self::from_parts(vec![p0, p1, p2], CurveOptions::default())
    }

    /// Creates a cubic curve.
    pub fn cubic(p0: Vec2<F>, p1: Vec2<F>, p2: Vec2<F>, p3: Vec2<F>) -> Self {
        Self::from_parts(vec![p0, p1, p2, p3], CurveOptions::default())
    }

    fn from_parts(points: Vec<Vec2<F>>, options: CurveOptions<F>) -> Self {
        Self {
            points,
            options,
            coefficients: OnceLock::new(),
            derivative_coefficients: OnceLock::new(),
            second_derivative_coefficients: OnceLock::new(),
            arc_length: OnceLock::new(),
        }
    }

    /// Returns the control points.
    #[inline]
    pub fn points(&self) -> &[Vec2<F>] {
        &self.points
    }

    /// Returns the polynomial degree (1, 2 or 3).
    #[inline]
    pub fn degree(&self) -> usize {
        self.points.len() - 1
    }

    /// Returns the first control point.
    #[inline]
    pub fn start(&self) -> Vec2<F> {
        self.points[0]
    }

    /// Returns the last control point.
    #[inline]
    pub fn end(&self) -> Vec2<F> {
        self.points[self.points.len() - 1]
    }

    /// Returns the options this curve was built with.
    #[inline]
    pub fn options(&self) -> &CurveOptions<F> {
        &self.options
    }

    /// Returns the power-basis coefficients, `t⁰` first.
    ///
    /// Derived from finite differences of the control points:
    /// - line: `[P0, P1−P0]`
    /// - quadratic: `[P0, 2·D10, D21−D10]`
    /// - cubic: `[P0, 3·D10, 3·(D21−D10), (D32−D21)−(D21−D10)]`
    pub fn coefficients(&self) -> &[Vec2<F>] {
        self.coefficients.get_or_init(|| {
            let two = F::from(2.0).unwrap();
            let three = F::from(3.0).unwrap();
            match *self.points.as_slice() {
                [p0, p1] => vec![p0, p1 - p0],
                [p0, p1, p2] => {
                    let d10 = p1 - p0;
                    let d21 = p2 - p1;
                    vec![p0, d10 * two, d21 - d10]
                }
                [p0, p1, p2, p3] => {
                    let d10 = p1 - p0;
                    let d21 = p2 - p1;
                    let d32 = p3 - p2;
                    let d21_10 = d21 - d10;
                    let d32_21 = d32 - d21;
                    vec![p0, d10 * three, d21_10 * three, d32_21 - d21_10]
                }
                _ => unreachable!("point count is checked on construction"),
            }
        })
    }

    /// Returns the coefficients of `P'(t)`: `[c1, 2·c2, 3·c3]` up to the degree.
    pub fn derivative_coefficients(&self) -> &[Vec2<F>] {
        self.derivative_coefficients
            .get_or_init(|| differentiate(self.coefficients()))
    }

    /// Returns the coefficients of `P''(t)`: `[2·c2, 6·c3]` up to the degree,
    /// or a single zero vector for a line.
    pub fn second_derivative_coefficients(&self) -> &[Vec2<F>] {
        self.second_derivative_coefficients.get_or_init(|| {
            let c = differentiate(self.derivative_coefficients());
            if c.is_empty() {
                vec![Vec2::zero()]
            } else {
                c
            }
        })
    }

    /// Evaluates the curve at `t` with Horner's method.
    #[inline]
    pub fn point_at(&self, t: F) -> Vec2<F> {
        Vec2::polynomial(t, self.coefficients())
    }

    /// Evaluates the first derivative (velocity) at `t`.
    #[inline]
    pub fn derivative_at(&self, t: F) -> Vec2<F> {
        Vec2::polynomial(t, self.derivative_coefficients())
    }

    /// Evaluates the second derivative (acceleration) at `t`.
    #[inline]
    pub fn second_derivative_at(&self, t: F) -> Vec2<F> {
        Vec2::polynomial(t, self.second_derivative_coefficients())
    }

    /// Like [`point_at`](Self::point_at), rejecting non-finite `t`.
    pub fn try_point_at(&self, t: F) -> Result<Vec2<F>> {
        check_parameter(t)?;
        Ok(self.point_at(t))
    }

    /// Like [`derivative_at`](Self::derivative_at), rejecting non-finite `t`.
    pub fn try_derivative_at(&self, t: F) -> Result<Vec2<F>> {
        check_parameter(t)?;
        Ok(self.derivative_at(t))
    }

    /// Returns the parameters in `[0, 1]` where the curvature changes sign.
    ///
    /// Only cubics can inflect; lines and quadratics return an empty list.
    /// With `include_endpoints == false` the range shrinks to
    /// `[ε, 1 − ε]`, `ε` being [`CurveOptions::endpoint_epsilon`]. Sorted
    /// ascending. A cubic whose control points are collinear has none.
    ///
    /// With `a = c1/3`, `b = c2/3`, `c = c3`, the sign of `P'(t) × P''(t)`
    /// follows `(b×c)·t² + (a×c)·t + (a×b)`.
    pub fn inflection_points(&self, include_endpoints: bool) -> Vec<F> {
        if self.degree() != 3 {
            return Vec::new();
        }
        let coefficients = self.coefficients();
        let third = F::one() / F::from(3.0).unwrap();
        let a = coefficients[1] * third;
        let b = coefficients[2] * third;
        let c = coefficients[3];

        let qa = b.cross(c);
        let qb = a.cross(c);
        let qc = a.cross(b);

        // Cross products of (near-)parallel vectors are rounding noise.
        let scale = a.length() + b.length() + c.length();
        let negligible = F::epsilon() * F::from(8.0).unwrap() * scale * scale;

        let roots = if qa.abs() > negligible {
            solve_quadratic(qa, qb, qc)
        } else if qb.abs() > negligible {
            vec![-qc / qb]
        } else {
            Vec::new()
        };

        let margin = if include_endpoints {
            F::zero()
        } else {
            self.options.endpoint_epsilon
        };
        let (lo, hi) = (margin, F::one() - margin);
        roots.into_iter().filter(|&t| t >= lo && t <= hi).collect()
    }

    /// Splits the curve at `t` with de Casteljau's construction.
    ///
    /// Both halves keep the degree and options of this curve. The left half
    /// covers `[0, t]`, the right half `[t, 1]`, each reparametrized to `[0, 1]`.
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::InvalidParameter`] if `t` is not finite.
    pub fn subdivide_at(&self, t: F) -> Result<(Self, Self)> {
        check_parameter(t)?;

        let n = self.points.len();
        let mut left = Vec::with_capacity(n);
        let mut right = Vec::with_capacity(n);
        let mut level = self.points.clone();
        loop {
            left.push(level[0]);
            right.push(level[level.len() - 1]);
            if level.len() == 1 {
                break;
            }
            level = level.windows(2).map(|w| w[0].lerp(w[1], t)).collect();
        }
        right.reverse();

        Ok((
            Self::from_parts(left, self.options),
            Self::from_parts(right, self.options),
        ))
    }

    /// Splits the curve at its interior inflection points.
    ///
    /// Returns one, two or three curves, ordered from `t = 0` to `t = 1`.
    pub fn subdivide_at_inflection_points(&self) -> Result<Vec<Self>> {
        match *self.inflection_points(false).as_slice() {
            [] => Ok(vec![self.clone()]),
            [t] => {
                let (left, right) = self.subdivide_at(t)?;
                Ok(vec![left, right])
            }
            [t0, t1, ..] => {
                let (head, tail) = self.subdivide_at(t1)?;
                let (first, second) = head.subdivide_at(t0 / t1)?;
                Ok(vec![first, second, tail])
            }
        }
    }

    /// Returns the cumulative arc-length table, building it on first use.
    ///
    /// The speed `|P'(t)|` is integrated over `[0, 1]` with the configured
    /// [`SimpsonIntegrator`](crate::numeric::SimpsonIntegrator) and the
    /// samples of its final grid become the table.
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::ConvergenceFailed`] if the integration does not
    /// converge. The failure is cached like a success.
    pub fn arc_length_table(&self) -> Result<&ArcLengthTable<F>> {
        self.arc_length
            .get_or_init(|| self.build_arc_length_table())
            .as_ref()
            .map_err(Clone::clone)
    }

    fn build_arc_length_table(&self) -> Result<ArcLengthTable<F>> {
        if let [p0, p1] = *self.points.as_slice() {
            let length = p0.distance(p1);
            log::debug!("arc-length table: line length={:?}", length.to_f64());
            return Ok(ArcLengthTable::linear(length));
        }

        let integral = self
            .options
            .integrator
            .integrate(|t| self.derivative_at(t).length(), F::zero(), F::one())?;
        log::debug!(
            "arc-length table: degree={} panels={} length={:?}",
            self.degree(),
            integral.panels,
            integral.value.to_f64()
        );
        Ok(ArcLengthTable::from_samples(&integral.samples, integral.value))
    }

    /// Returns the arc length of the curve over `[0, 1]`.
    ///
    /// Lines are measured in closed form.
    ///
    /// # Example
    ///
    /// ```
    /// use bezum::{BezierCurve, Vec2};
    ///
    /// let line = BezierCurve::line(Vec2::new(0.0, 0.0), Vec2::new(3.0, 4.0));
    /// assert_eq!(line.length().unwrap(), 5.0);
    /// ```
    pub fn length(&self) -> Result<F> {
        Ok(self.arc_length_table()?.total_length())
    }

    /// Returns the parameter at which the arc length from the start equals `length`.
    ///
    /// `Ok(None)` if `length` lies outside `[0, self.length()]`.
    pub fn parameter_at_length(&self, length: F) -> Result<Option<F>> {
        Ok(self.arc_length_table()?.parameter_at_length(length))
    }

    /// Returns the point at arc length `length` from the start.
    pub fn point_at_length(&self, length: F) -> Result<Option<Vec2<F>>> {
        Ok(self.parameter_at_length(length)?.map(|t| self.point_at(t)))
    }

    /// Returns the length of the control polygon, an upper bound of the arc length.
    pub fn control_polygon_length(&self) -> F {
        let edges: Vec<F> = self
            .points
            .windows(2)
            .map(|w| w[0].distance(w[1]))
            .collect();
        stable_sum(&edges)
    }

    /// Returns the path command letter matching the degree: `L`, `Q` or `C`.
    pub fn path_command(&self) -> char {
        match self.degree() {
            1 => 'L',
            2 => 'Q',
            _ => 'C',
        }
    }

    /// Returns the flat coordinates a path command continuing from
    /// [`start`](Self::start) takes: every control point after the first.
    pub fn to_path_parameters(&self) -> Vec<F> {
        Vec2::to_flat_array(&self.points[1..])
    }
}

impl<F: Float> PartialEq for BezierCurve<F> {
    fn eq(&self, other: &Self) -> bool {
        self.points == other.points && self.options == other.options
    }
}

/// Drops the constant term and multiplies each remaining coefficient by its power.
fn differentiate<F: Float>(coefficients: &[Vec2<F>]) -> Vec<Vec2<F>> {
    coefficients
        .iter()
        .enumerate()
        .skip(1)
        .map(|(i, &c)| c * F::from(i).unwrap())
        .collect()
}

fn check_parameter<F: Float>(t: F) -> Result<()> {
    if t.is_finite() {
        Ok(())
    } else {
        Err(CurveError::invalid_parameter("t", t))
    }
}

//! Piecewise-polynomial curves on an ordered breakpoint grid.
//!
//! A [`PiecewisePolynomial`] stores strictly increasing breakpoints
//! `x0 < x1 < ... < x(n-1)` and one polynomial per breakpoint in the local
//! basis `p_i(x) = sum_k c[k][i] * (x - x_i)^k`. The polynomial attached to
//! breakpoint `i` applies on `[x_i, x_(i+1))`; the first and last polynomials
//! also extrapolate beyond the grid. Queries left of `x0` resolve to segment
//! 0 and queries right of `x(n-1)` to segment `n-1`.
//!
//! Integration is exact: definite integrals are accumulated from closed-form
//! per-segment antiderivatives, never from quadrature.

use std::cmp::Ordering;

use log::debug;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::error::{MathError, MathResult};

/// A piecewise polynomial of fixed degree on an ordered breakpoint grid.
///
/// # Example
///
/// ```rust
/// use contango_math::PiecewisePolynomial;
///
/// // Step function: 2 on [0, 1), 5 on [1, 2), 3 from 2 onwards
/// let curve = PiecewisePolynomial::new(&[0.0, 1.0, 2.0], &[2.0, 5.0, 3.0], 0).unwrap();
///
/// assert_eq!(curve.eval(0.5, 0), 2.0);
/// assert_eq!(curve.eval(10.0, 0), 3.0);
/// assert_eq!(curve.integral(0.0, 2.0), 7.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PiecewisePolynomial {
    /// Strictly increasing breakpoints.
    break_points: Vec<f64>,
    /// `(degree + 1) x n` local-basis coefficients; column `i` defines the
    /// polynomial attached to breakpoint `i`.
    coeffs: Array2<f64>,
}

impl PiecewisePolynomial {
    /// Creates a curve through the points `(xs[i], ys[i])`.
    ///
    /// Degree 0 attaches the constant `ys[i]` to breakpoint `i`. Degree 1
    /// attaches the line through `(xs[i], ys[i])` and `(xs[i+1], ys[i+1])`,
    /// with the last breakpoint's slope set to zero so the curve extrapolates
    /// flat beyond the grid.
    ///
    /// # Errors
    ///
    /// - [`MathError::InsufficientData`] for an empty grid
    /// - [`MathError::InvalidInput`] when `xs` and `ys` differ in length
    /// - [`MathError::NonMonotonic`] when `xs` is not strictly increasing
    /// - [`MathError::UnsupportedDegree`] for degree >= 2; only constant and
    ///   linear segments are constructible from point data
    pub fn new(xs: &[f64], ys: &[f64], degree: usize) -> MathResult<Self> {
        if xs.is_empty() {
            return Err(MathError::insufficient_data(1, 0));
        }
        if xs.len() != ys.len() {
            return Err(MathError::invalid_input(format!(
                "breakpoints and values must have same length: {} vs {}",
                xs.len(),
                ys.len()
            )));
        }
        for i in 1..xs.len() {
            if xs[i] <= xs[i - 1] {
                return Err(MathError::non_monotonic(i, xs[i - 1], xs[i]));
            }
        }

        let n = xs.len();
        let mut coeffs = Array2::zeros((degree + 1, n));
        match degree {
            0 => {
                for (i, &y) in ys.iter().enumerate() {
                    coeffs[[0, i]] = y;
                }
            }
            1 => {
                for (i, &y) in ys.iter().enumerate() {
                    coeffs[[0, i]] = y;
                }
                // Last slope stays zero: flat extrapolation past the grid.
                for i in 0..n - 1 {
                    coeffs[[1, i]] = (ys[i + 1] - ys[i]) / (xs[i + 1] - xs[i]);
                }
            }
            d => {
                return Err(MathError::UnsupportedDegree {
                    degree: d,
                    operation: "construction from point data",
                })
            }
        }

        Ok(Self {
            break_points: xs.to_vec(),
            coeffs,
        })
    }

    /// Returns the number of breakpoints.
    #[must_use]
    pub fn len(&self) -> usize {
        self.break_points.len()
    }

    /// Returns true if the curve has no breakpoints (never holds for a
    /// constructed curve).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.break_points.is_empty()
    }

    /// Returns the common degree of the segment polynomials.
    #[must_use]
    pub fn degree(&self) -> usize {
        self.coeffs.nrows() - 1
    }

    /// Returns the ordered breakpoint grid.
    #[must_use]
    pub fn break_points(&self) -> &[f64] {
        &self.break_points
    }

    /// Returns the value attached to breakpoint `i` (its constant-term
    /// coefficient).
    #[must_use]
    pub fn value(&self, i: usize) -> f64 {
        self.coeffs[[0, i]]
    }

    /// Index of the segment whose polynomial governs `x`.
    ///
    /// Queries left of the grid clamp to segment 0, right of the grid to the
    /// last segment.
    fn segment_index(&self, x: f64) -> usize {
        match self
            .break_points
            .binary_search_by(|probe| probe.partial_cmp(&x).unwrap_or(Ordering::Equal))
        {
            Ok(i) => i,
            Err(0) => 0,
            Err(i) => i - 1,
        }
    }

    /// `order`-th derivative of segment `seg`'s polynomial at `x`.
    fn eval_segment(&self, seg: usize, x: f64, order: usize) -> f64 {
        let dx = x - self.break_points[seg];
        let mut acc = 0.0;
        for k in (order..self.coeffs.nrows()).rev() {
            let mut factor = 1.0;
            for j in 0..order {
                factor *= (k - j) as f64;
            }
            acc = acc * dx + factor * self.coeffs[[k, seg]];
        }
        acc
    }

    /// Evaluates the `order`-th derivative of the curve at `x`.
    ///
    /// `order == 0` is plain evaluation. The containing segment is located by
    /// binary search; outside the grid the boundary segment's polynomial
    /// extrapolates.
    #[must_use]
    pub fn eval(&self, x: f64, order: usize) -> f64 {
        self.eval_segment(self.segment_index(x), x, order)
    }

    /// Evaluates the `order`-th derivative at each query point.
    ///
    /// Points are resolved independently and need not be sorted.
    #[must_use]
    pub fn eval_many(&self, xs: &[f64], order: usize) -> Vec<f64> {
        xs.iter().map(|&x| self.eval(x, order)).collect()
    }

    /// Antiderivative of segment `seg` taken from `a` to `b`; both limits
    /// must lie within the segment's span.
    fn segment_integral(&self, seg: usize, a: f64, b: f64) -> f64 {
        let x0 = self.break_points[seg];
        let da = a - x0;
        let db = b - x0;
        let mut total = 0.0;
        for k in 0..self.coeffs.nrows() {
            let p = k as i32 + 1;
            total += self.coeffs[[k, seg]] / f64::from(p) * (db.powi(p) - da.powi(p));
        }
        total
    }

    /// Exact definite integral of the curve from `from` to `to`.
    ///
    /// The integral is signed: reversed limits negate the result, and
    /// `integral(a, a) == 0` exactly. Limits outside the grid integrate the
    /// extrapolating boundary polynomial.
    #[must_use]
    pub fn integral(&self, from: f64, to: f64) -> f64 {
        if from == to {
            return 0.0;
        }
        if to < from {
            return -self.integral(to, from);
        }

        let last = self.break_points.len() - 1;
        let mut seg = self.segment_index(from);
        let mut lo = from;
        let mut total = 0.0;
        while seg < last && self.break_points[seg + 1] < to {
            total += self.segment_integral(seg, lo, self.break_points[seg + 1]);
            lo = self.break_points[seg + 1];
            seg += 1;
        }
        total + self.segment_integral(seg, lo, to)
    }

    /// Definite integral from `from` to each end point in `tos`.
    #[must_use]
    pub fn integral_many(&self, from: f64, tos: &[f64]) -> Vec<f64> {
        tos.iter().map(|&to| self.integral(from, to)).collect()
    }

    /// Returns a new curve equal to `self + other` on the common domain.
    ///
    /// The result's grid is the sorted, deduplicated union of both grids
    /// restricted to `[max(first_a, first_b), min(last_a, last_b)]`, its
    /// degree is the larger of the operand degrees, and its value at each
    /// union breakpoint is the sum of both evaluations there. When the
    /// operands share a degree the result reproduces the exact sum everywhere
    /// inside the common domain; a mixed constant/linear sum is exact at
    /// every union breakpoint and linear in between.
    ///
    /// # Errors
    ///
    /// - [`MathError::UnsupportedDegree`] when either operand has degree >= 2
    /// - [`MathError::InvalidInput`] when the operand domains are disjoint
    pub fn sum(&self, other: &PiecewisePolynomial) -> MathResult<PiecewisePolynomial> {
        for degree in [self.degree(), other.degree()] {
            if degree > 1 {
                return Err(MathError::UnsupportedDegree {
                    degree,
                    operation: "sum",
                });
            }
        }

        let lo = self.break_points[0].max(other.break_points[0]);
        let hi = self.break_points[self.len() - 1].min(other.break_points[other.len() - 1]);
        if lo > hi {
            return Err(MathError::invalid_input(format!(
                "curve domains are disjoint: no overlap between summand grids at [{lo}, {hi}]"
            )));
        }

        // Merge-by-key over the two sorted grids, restricted to [lo, hi].
        let (a, b) = (&self.break_points, &other.break_points);
        let mut xs: Vec<f64> = Vec::with_capacity(a.len() + b.len());
        let (mut i, mut j) = (0, 0);
        while i < a.len() || j < b.len() {
            let next = match (a.get(i), b.get(j)) {
                (Some(&x), Some(&y)) => {
                    if x <= y {
                        if x == y {
                            j += 1;
                        }
                        i += 1;
                        x
                    } else {
                        j += 1;
                        y
                    }
                }
                (Some(&x), None) => {
                    i += 1;
                    x
                }
                (None, Some(&y)) => {
                    j += 1;
                    y
                }
                (None, None) => break,
            };
            if next < lo || next > hi {
                continue;
            }
            if xs.last() == Some(&next) {
                continue;
            }
            xs.push(next);
        }

        let ys: Vec<f64> = xs
            .iter()
            .map(|&x| self.eval(x, 0) + other.eval(x, 0))
            .collect();
        debug!(
            "curve sum: {} + {} breakpoints -> {} on [{lo}, {hi}]",
            a.len(),
            b.len(),
            xs.len()
        );
        PiecewisePolynomial::new(&xs, &ys, self.degree().max(other.degree()))
    }
}

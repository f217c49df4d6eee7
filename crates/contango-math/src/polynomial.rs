//! Real-coefficient polynomials in the monomial basis.

use serde::{Deserialize, Serialize};

use crate::error::{MathError, MathResult};

/// A polynomial `c0 + c1*x + ... + cn*x^n` over `f64`.
///
/// This is the single-segment companion to
/// [`PiecewisePolynomial`](crate::piecewise::PiecewisePolynomial): the root
/// utilities in [`solvers`](crate::solvers) take any `Fn(f64) -> f64`, and a
/// `Polynomial` is the value type callers typically hand them when inverting
/// a curve.
///
/// # Example
///
/// ```rust
/// use contango_math::Polynomial;
///
/// // x^3 - 6x^2 + 11x - 6, roots at 1, 2, 3
/// let p = Polynomial::new(&[-6.0, 11.0, -6.0, 1.0]).unwrap();
/// assert_eq!(p.eval(2.0), 0.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polynomial {
    coeffs: Vec<f64>,
}

impl Polynomial {
    /// Creates a polynomial from monomial coefficients, constant term first.
    ///
    /// Trailing zero coefficients are permitted; the coefficient slice must
    /// be non-empty.
    pub fn new(coeffs: &[f64]) -> MathResult<Self> {
        if coeffs.is_empty() {
            return Err(MathError::insufficient_data(1, 0));
        }
        Ok(Self {
            coeffs: coeffs.to_vec(),
        })
    }

    /// Returns the nominal degree (coefficient count minus one).
    #[must_use]
    pub fn degree(&self) -> usize {
        self.coeffs.len() - 1
    }

    /// Returns the coefficient slice, constant term first.
    #[must_use]
    pub fn coeffs(&self) -> &[f64] {
        &self.coeffs
    }

    /// Evaluates the polynomial at `x` using Horner's scheme.
    #[must_use]
    pub fn eval(&self, x: f64) -> f64 {
        self.coeffs.iter().rev().fold(0.0, |acc, &c| acc * x + c)
    }

    /// Evaluates the `order`-th derivative at `x`.
    ///
    /// `order == 0` is plain evaluation; orders above the degree are
    /// identically zero.
    #[must_use]
    pub fn deriv_eval(&self, x: f64, order: usize) -> f64 {
        if order == 0 {
            return self.eval(x);
        }
        if order > self.degree() {
            return 0.0;
        }
        // Horner on the differentiated coefficients k!/(k-order)! * c_k.
        let mut acc = 0.0;
        for k in (order..self.coeffs.len()).rev() {
            let mut factor = 1.0;
            for j in 0..order {
                factor *= (k - j) as f64;
            }
            acc = acc * x + factor * self.coeffs[k];
        }
        acc
    }
}

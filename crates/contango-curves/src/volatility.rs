//! Volatility term structure.

use contango_math::PiecewisePolynomial;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{CurveError, CurveResult};
use crate::validation;

/// Input convention of the quotes handed to [`VolatilityTermStructure::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VolInput {
    /// Spot (cumulative, from time zero) volatilities to each maturity.
    SpotVol,
    /// Forward variance rates per segment, taken as-is: quote `i` applies
    /// from maturity `i` onward, the first also back to time zero.
    FwdVol,
}

impl TryFrom<i32> for VolInput {
    type Error = CurveError;

    /// Maps the external integer convention tag: 0 spot, 1 forward.
    fn try_from(tag: i32) -> Result<Self, Self::Error> {
        match tag {
            0 => Ok(Self::SpotVol),
            1 => Ok(Self::FwdVol),
            _ => Err(CurveError::UnknownInputType { tag }),
        }
    }
}

/// A volatility term structure in forward-variance form.
///
/// The curve owns one degree-0 [`PiecewisePolynomial`] of forward variance
/// rates (variance accrued per unit time). Integrating the stored curve over
/// a period yields the variance accrued over that period, so:
///
/// - spot vol: `sqrt(∫₀ᵀ v / T)`
/// - forward vol: `sqrt(∫ over the period / period length)`
///
/// Immutable after construction.
///
/// # Example
///
/// ```rust
/// use contango_curves::{VolInput, VolatilityTermStructure};
///
/// let vts =
///     VolatilityTermStructure::new(&[1.0, 2.0], &[0.2, 0.25], VolInput::SpotVol).unwrap();
///
/// let fv = vts.fwd_vol(1.0, 2.0).unwrap();
/// assert!((fv - 0.085f64.sqrt()).abs() < 1e-14);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VolatilityTermStructure {
    fwd_vars: PiecewisePolynomial,
}

impl VolatilityTermStructure {
    /// Builds a volatility term structure from quotes in the given input
    /// convention.
    ///
    /// Maturities must be strictly positive, strictly increasing, and as
    /// numerous as the values.
    ///
    /// - [`VolInput::SpotVol`]: pairwise forward variances are bootstrapped
    ///   between consecutive maturities,
    ///   `fvar = (v2²·T2 - v1²·T1) / (T2 - T1)`, the first segment (from
    ///   time zero) carrying `v0²`. The canonical grid is shifted one
    ///   maturity left, `{0, T0, ..., T(n-2)}`, so segment `i` spans the
    ///   period its variance was bootstrapped for.
    /// - [`VolInput::FwdVol`]: the values are forward variance rates already
    ///   and are stored unchanged on the maturity grid.
    ///
    /// # Errors
    ///
    /// Malformed quotes fail with the corresponding [`CurveError`]. A
    /// bootstrapped forward variance below zero — a decreasing spot-vol
    /// structure steeper than the accrual can absorb — fails with
    /// [`CurveError::NegativeForwardVariance`] at construction; the
    /// violation is never deferred to query time.
    pub fn new(maturities: &[f64], vols: &[f64], input: VolInput) -> CurveResult<Self> {
        validation::check_quotes(maturities, vols)?;

        let fwd_vars = match input {
            VolInput::FwdVol => PiecewisePolynomial::new(maturities, vols, 0)?,
            VolInput::SpotVol => Self::bootstrap_variances(maturities, vols)?,
        };

        debug!(
            "volatility term structure canonicalized from {} {:?} quotes",
            maturities.len(),
            input
        );
        Ok(Self { fwd_vars })
    }

    /// Left-to-right bootstrap of forward variance rates from spot vols.
    fn bootstrap_variances(maturities: &[f64], vols: &[f64]) -> CurveResult<PiecewisePolynomial> {
        let n = maturities.len();
        let mut grid = Vec::with_capacity(n);
        let mut vars = Vec::with_capacity(n);

        grid.push(0.0);
        vars.push(vols[0] * vols[0]);

        let mut t_prev = maturities[0];
        let mut v_prev = vols[0];
        for i in 1..n {
            let t = maturities[i];
            let v = vols[i];
            let fvar = (v * v * t - v_prev * v_prev * t_prev) / (t - t_prev);
            if fvar < 0.0 {
                return Err(CurveError::NegativeForwardVariance {
                    t1: t_prev,
                    t2: t,
                    variance: fvar,
                });
            }
            grid.push(t_prev);
            vars.push(fvar);
            t_prev = t;
            v_prev = v;
        }

        Ok(PiecewisePolynomial::new(&grid, &vars, 0)?)
    }

    /// Spot volatility to maturity `t`.
    ///
    /// `t == 0` returns the short-time limit, the vol of the first segment.
    ///
    /// # Errors
    ///
    /// [`CurveError::InvalidQuery`] when `t < 0`.
    pub fn spot_vol(&self, t: f64) -> CurveResult<f64> {
        if t < 0.0 {
            return Err(CurveError::invalid_query(format!(
                "spot vol requires a non-negative maturity, got {t}"
            )));
        }
        if t == 0.0 {
            return Ok(self.fwd_vars.eval(0.0, 0).sqrt());
        }
        Ok((self.fwd_vars.integral(0.0, t) / t).sqrt())
    }

    /// Forward volatility between `t1` and `t2`.
    ///
    /// # Errors
    ///
    /// [`CurveError::InvalidQuery`] unless `0 <= t1 < t2`.
    pub fn fwd_vol(&self, t1: f64, t2: f64) -> CurveResult<f64> {
        if t1 < 0.0 {
            return Err(CurveError::invalid_query(format!(
                "forward vol requires a non-negative start time, got {t1}"
            )));
        }
        if t1 >= t2 {
            return Err(CurveError::invalid_query(format!(
                "forward vol requires t1 < t2, got t1 = {t1}, t2 = {t2}"
            )));
        }
        Ok((self.fwd_vars.integral(t1, t2) / (t2 - t1)).sqrt())
    }

    /// Read-only view of the canonical forward-variance curve.
    #[must_use]
    pub fn variance_curve(&self) -> &PiecewisePolynomial {
        &self.fwd_vars
    }
}

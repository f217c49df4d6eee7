//! Interest-rate yield curve.

use contango_math::PiecewisePolynomial;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{CurveError, CurveResult};
use crate::validation;

/// Input convention of the quotes handed to [`YieldCurve::new`].
///
/// Whatever the convention, construction canonicalizes the quotes into
/// instantaneous continuously-compounded forward rates; the tag itself is
/// not retained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RateInput {
    /// Continuously-compounded spot (zero) rates to each maturity.
    SpotRate,
    /// Instantaneous forward rates at each maturity.
    FwdRate,
    /// Zero-coupon bond prices to each maturity, in (0, 1].
    ZeroBond,
}

impl TryFrom<i32> for RateInput {
    type Error = CurveError;

    /// Maps the external integer convention tag: 0 spot, 1 forward,
    /// 2 zero-bond price.
    fn try_from(tag: i32) -> Result<Self, Self::Error> {
        match tag {
            0 => Ok(Self::SpotRate),
            1 => Ok(Self::FwdRate),
            2 => Ok(Self::ZeroBond),
            _ => Err(CurveError::UnknownInputType { tag }),
        }
    }
}

/// An interest-rate yield curve in instantaneous-forward-rate form.
///
/// The curve owns one [`PiecewisePolynomial`] of instantaneous
/// continuously-compounded forward rates `f(t)`. Every query reduces to an
/// exact integral of that curve:
///
/// - discount factor: `exp(-∫₀ᵀ f)`
/// - spot rate: `∫₀ᵀ f / T`
/// - forward rate over a period: the average of `f` over the period
///
/// The curve is immutable after construction; concurrent readers need no
/// synchronization.
///
/// # Example
///
/// ```rust
/// use contango_curves::{RateInput, YieldCurve};
///
/// let curve = YieldCurve::new(
///     &[1.0, 2.0, 3.0],
///     &[0.02, 0.03, 0.035],
///     RateInput::SpotRate,
/// )
/// .unwrap();
///
/// // Spot rates are recovered exactly at the pillar maturities.
/// assert!((curve.spot_rate(2.0).unwrap() - 0.03).abs() < 1e-14);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YieldCurve {
    fwd_rates: PiecewisePolynomial,
}

impl YieldCurve {
    /// Builds a yield curve from quotes in the given input convention.
    ///
    /// Maturities must be strictly positive, strictly increasing, and as
    /// numerous as the values.
    ///
    /// - [`RateInput::FwdRate`]: the values are instantaneous forward rates,
    ///   stored on the maturity grid as a piecewise-linear curve that
    ///   extrapolates flat beyond the last maturity.
    /// - [`RateInput::SpotRate`]: pairwise forward rates are bootstrapped
    ///   between consecutive maturities and stored piecewise-flat; the first
    ///   segment (from time zero) carries the first spot rate.
    /// - [`RateInput::ZeroBond`]: prices are converted to spot rates
    ///   `-ln(P)/T` and bootstrapped the same way.
    ///
    /// # Errors
    ///
    /// Malformed quotes fail with the corresponding [`CurveError`];
    /// a bootstrap implying a negative forward rate fails with
    /// [`CurveError::NegativeForwardRate`]. Construction either yields a
    /// fully valid curve or nothing.
    pub fn new(maturities: &[f64], values: &[f64], input: RateInput) -> CurveResult<Self> {
        validation::check_quotes(maturities, values)?;

        let fwd_rates = match input {
            RateInput::FwdRate => PiecewisePolynomial::new(maturities, values, 1)?,
            RateInput::SpotRate => Self::bootstrap_forwards(maturities, values)?,
            RateInput::ZeroBond => {
                let spots = Self::spots_from_zero_bonds(maturities, values)?;
                Self::bootstrap_forwards(maturities, &spots)?
            }
        };

        debug!(
            "yield curve canonicalized from {} {:?} quotes (degree {})",
            maturities.len(),
            input,
            fwd_rates.degree()
        );
        Ok(Self { fwd_rates })
    }

    /// Converts zero-bond prices to continuously-compounded spot rates.
    fn spots_from_zero_bonds(maturities: &[f64], prices: &[f64]) -> CurveResult<Vec<f64>> {
        prices
            .iter()
            .zip(maturities.iter())
            .enumerate()
            .map(|(index, (&price, &t))| {
                if price <= 0.0 || price > 1.0 {
                    return Err(CurveError::InvalidZeroBondPrice { index, price });
                }
                Ok(-price.ln() / t)
            })
            .collect()
    }

    /// Left-to-right bootstrap of piecewise-flat forward rates from spot
    /// rates.
    ///
    /// The canonical grid is shifted one maturity left: segment `i` spans
    /// `[T(i-1), T(i))` (the first spans `[0, T0)`), so the curve's
    /// breakpoints are `{0, T0, ..., T(n-2)}` and its flat tail carries the
    /// last pairwise forward.
    fn bootstrap_forwards(maturities: &[f64], spots: &[f64]) -> CurveResult<PiecewisePolynomial> {
        let n = maturities.len();
        let mut grid = Vec::with_capacity(n);
        let mut fwds = Vec::with_capacity(n);

        if spots[0] < 0.0 {
            return Err(CurveError::NegativeForwardRate {
                t1: 0.0,
                t2: maturities[0],
                rate: spots[0],
            });
        }
        grid.push(0.0);
        fwds.push(spots[0]);

        let mut t_prev = maturities[0];
        let mut s_prev = spots[0];
        for i in 1..n {
            let t = maturities[i];
            let s = spots[i];
            let fwd = (s * t - s_prev * t_prev) / (t - t_prev);
            if fwd < 0.0 {
                return Err(CurveError::NegativeForwardRate {
                    t1: t_prev,
                    t2: t,
                    rate: fwd,
                });
            }
            grid.push(t_prev);
            fwds.push(fwd);
            t_prev = t;
            s_prev = s;
        }

        Ok(PiecewisePolynomial::new(&grid, &fwds, 0)?)
    }

    /// Discount factor from time zero to `t`.
    ///
    /// # Errors
    ///
    /// [`CurveError::InvalidQuery`] when `t < 0`.
    pub fn discount(&self, t: f64) -> CurveResult<f64> {
        if t < 0.0 {
            return Err(CurveError::invalid_query(format!(
                "discount requires a non-negative maturity, got {t}"
            )));
        }
        Ok((-self.fwd_rates.integral(0.0, t)).exp())
    }

    /// Forward discount factor between `t1` and `t2`.
    ///
    /// # Errors
    ///
    /// [`CurveError::InvalidQuery`] unless `t1 < t2`.
    pub fn fwd_discount(&self, t1: f64, t2: f64) -> CurveResult<f64> {
        if t1 >= t2 {
            return Err(CurveError::invalid_query(format!(
                "forward discount requires t1 < t2, got t1 = {t1}, t2 = {t2}"
            )));
        }
        Ok((-self.fwd_rates.integral(t1, t2)).exp())
    }

    /// Continuously-compounded spot rate to maturity `t`.
    ///
    /// # Errors
    ///
    /// [`CurveError::InvalidQuery`] unless `t > 0`.
    pub fn spot_rate(&self, t: f64) -> CurveResult<f64> {
        if t <= 0.0 {
            return Err(CurveError::invalid_query(format!(
                "spot rate requires a positive maturity, got {t}"
            )));
        }
        Ok(self.fwd_rates.integral(0.0, t) / t)
    }

    /// Continuously-compounded forward rate between `t1` and `t2`.
    ///
    /// # Errors
    ///
    /// [`CurveError::InvalidQuery`] unless `0 <= t1 < t2`.
    pub fn fwd_rate(&self, t1: f64, t2: f64) -> CurveResult<f64> {
        if t1 < 0.0 {
            return Err(CurveError::invalid_query(format!(
                "forward rate requires a non-negative start time, got {t1}"
            )));
        }
        if t1 >= t2 {
            return Err(CurveError::invalid_query(format!(
                "forward rate requires t1 < t2, got t1 = {t1}, t2 = {t2}"
            )));
        }
        Ok(self.fwd_rates.integral(t1, t2) / (t2 - t1))
    }

    /// Read-only view of the canonical forward-rate curve.
    #[must_use]
    pub fn forward_curve(&self) -> &PiecewisePolynomial {
        &self.fwd_rates
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_input_tag_mapping() {
        assert_eq!(RateInput::try_from(0).unwrap(), RateInput::SpotRate);
        assert_eq!(RateInput::try_from(1).unwrap(), RateInput::FwdRate);
        assert_eq!(RateInput::try_from(2).unwrap(), RateInput::ZeroBond);
        assert!(matches!(
            RateInput::try_from(3),
            Err(CurveError::UnknownInputType { tag: 3 })
        ));
    }

    #[test]
    fn test_spot_rate_bootstrap_grid() {
        let curve = YieldCurve::new(
            &[1.0, 2.0, 3.0],
            &[0.02, 0.03, 0.035],
            RateInput::SpotRate,
        )
        .unwrap();

        let fwd = curve.forward_curve();
        assert_eq!(fwd.break_points(), &[0.0, 1.0, 2.0]);
        assert_relative_eq!(fwd.value(0), 0.02);
        assert_relative_eq!(fwd.value(1), 0.04, epsilon = 1e-14);
        assert_relative_eq!(fwd.value(2), 0.045, epsilon = 1e-14);
    }

    #[test]
    fn test_discount_matches_reference_scenario() {
        let curve = YieldCurve::new(
            &[1.0, 2.0, 3.0],
            &[0.02, 0.03, 0.035],
            RateInput::SpotRate,
        )
        .unwrap();

        assert_relative_eq!(
            curve.discount(2.0).unwrap(),
            (-0.06f64).exp(),
            epsilon = 1e-12
        );
        assert_relative_eq!(curve.discount(0.0).unwrap(), 1.0);
    }

    #[test]
    fn test_spot_rates_recovered_at_pillars() {
        let maturities = [0.5, 1.0, 2.0, 5.0, 10.0];
        let spots = [0.015, 0.018, 0.022, 0.028, 0.031];
        let curve = YieldCurve::new(&maturities, &spots, RateInput::SpotRate).unwrap();

        for (t, s) in maturities.iter().zip(spots.iter()) {
            assert_relative_eq!(curve.spot_rate(*t).unwrap(), *s, epsilon = 1e-13);
        }
    }

    #[test]
    fn test_zero_bond_input_equivalent_to_spot_input() {
        let maturities = [1.0, 2.0, 3.0];
        let spots = [0.02, 0.03, 0.035];
        let prices: Vec<f64> = maturities
            .iter()
            .zip(spots.iter())
            .map(|(t, s): (&f64, &f64)| (-*s * *t).exp())
            .collect();

        let from_spots = YieldCurve::new(&maturities, &spots, RateInput::SpotRate).unwrap();
        let from_bonds = YieldCurve::new(&maturities, &prices, RateInput::ZeroBond).unwrap();

        for t in [0.5, 1.0, 1.7, 2.0, 3.0, 4.5] {
            assert_relative_eq!(
                from_spots.discount(t).unwrap(),
                from_bonds.discount(t).unwrap(),
                epsilon = 1e-12
            );
        }
    }

    #[test]
    fn test_fwd_rate_input_round_trip() {
        // Build from instantaneous forwards, read off the implied spot rates,
        // rebuild from those; discounts must agree at the pillars.
        let maturities = [1.0, 2.0, 3.0];
        let fwds = [0.02, 0.03, 0.025];
        let direct = YieldCurve::new(&maturities, &fwds, RateInput::FwdRate).unwrap();

        let spots: Vec<f64> = maturities
            .iter()
            .map(|&t| direct.spot_rate(t).unwrap())
            .collect();
        let rebuilt = YieldCurve::new(&maturities, &spots, RateInput::SpotRate).unwrap();

        for &t in &maturities {
            assert_relative_eq!(
                direct.discount(t).unwrap(),
                rebuilt.discount(t).unwrap(),
                epsilon = 1e-12
            );
        }
    }

    #[test]
    fn test_fwd_discount_consistency() {
        let curve = YieldCurve::new(
            &[1.0, 2.0, 3.0],
            &[0.02, 0.03, 0.035],
            RateInput::SpotRate,
        )
        .unwrap();

        let df1 = curve.discount(1.0).unwrap();
        let df2 = curve.discount(2.5).unwrap();
        assert_relative_eq!(
            curve.fwd_discount(1.0, 2.5).unwrap(),
            df2 / df1,
            epsilon = 1e-13
        );

        let fwd = curve.fwd_rate(1.0, 2.5).unwrap();
        assert_relative_eq!(
            (-fwd * 1.5).exp(),
            curve.fwd_discount(1.0, 2.5).unwrap(),
            epsilon = 1e-13
        );
    }

    #[test]
    fn test_negative_implied_forward_rejected() {
        // Spot curve dropping fast enough to imply a negative forward.
        let err = YieldCurve::new(&[1.0, 2.0], &[0.05, 0.01], RateInput::SpotRate).unwrap_err();
        assert!(matches!(err, CurveError::NegativeForwardRate { .. }));

        // Negative first spot rate is a negative forward over [0, T0].
        let err = YieldCurve::new(&[1.0, 2.0], &[-0.01, 0.02], RateInput::SpotRate).unwrap_err();
        assert!(matches!(
            err,
            CurveError::NegativeForwardRate { t1, .. } if t1 == 0.0
        ));
    }

    #[test]
    fn test_invalid_zero_bond_prices_rejected() {
        let err = YieldCurve::new(&[1.0, 2.0], &[0.98, 1.25], RateInput::ZeroBond).unwrap_err();
        assert!(matches!(
            err,
            CurveError::InvalidZeroBondPrice { index: 1, .. }
        ));

        let err = YieldCurve::new(&[1.0], &[0.0], RateInput::ZeroBond).unwrap_err();
        assert!(matches!(
            err,
            CurveError::InvalidZeroBondPrice { index: 0, .. }
        ));
    }

    #[test]
    fn test_malformed_quotes_rejected() {
        assert!(matches!(
            YieldCurve::new(&[1.0, 2.0], &[0.02], RateInput::SpotRate),
            Err(CurveError::LengthMismatch { .. })
        ));
        assert!(matches!(
            YieldCurve::new(&[-1.0, 2.0], &[0.02, 0.03], RateInput::SpotRate),
            Err(CurveError::NonPositiveMaturity { index: 0, .. })
        ));
        assert!(matches!(
            YieldCurve::new(&[2.0, 1.0], &[0.02, 0.03], RateInput::SpotRate),
            Err(CurveError::NonMonotonicMaturities { index: 1, .. })
        ));
    }

    #[test]
    fn test_query_domain_checks() {
        let curve = YieldCurve::new(&[1.0], &[0.02], RateInput::SpotRate).unwrap();

        assert!(curve.discount(-0.5).is_err());
        assert!(curve.spot_rate(0.0).is_err());
        assert!(curve.fwd_discount(2.0, 2.0).is_err());
        assert!(curve.fwd_rate(-1.0, 2.0).is_err());
        assert!(curve.fwd_rate(2.0, 1.0).is_err());
    }

    #[test]
    fn test_single_quote_curve_is_flat() {
        let curve = YieldCurve::new(&[1.0], &[0.03], RateInput::SpotRate).unwrap();

        assert_relative_eq!(curve.spot_rate(0.5).unwrap(), 0.03);
        assert_relative_eq!(curve.spot_rate(10.0).unwrap(), 0.03);
        assert_relative_eq!(curve.fwd_rate(3.0, 7.0).unwrap(), 0.03);
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        /// Maturities with per-period forward rates; the implied spot curve
        /// always bootstraps cleanly because the forwards are non-negative.
        fn forwards_and_maturities() -> impl Strategy<Value = (Vec<f64>, Vec<f64>)> {
            prop::collection::vec((0.05f64..2.0, 0.0f64..0.15), 1..10).prop_map(|steps| {
                let mut t = 0.0;
                let mut maturities = Vec::with_capacity(steps.len());
                let mut fwds = Vec::with_capacity(steps.len());
                for (dt, f) in steps {
                    t += dt;
                    maturities.push(t);
                    fwds.push(f);
                }
                (maturities, fwds)
            })
        }

        proptest! {
            #[test]
            fn bootstrap_recovers_spot_quotes(
                (maturities, fwds) in forwards_and_maturities()
            ) {
                // Spot rates implied by non-negative per-period forwards.
                let mut acc = 0.0;
                let mut prev_t = 0.0;
                let spots: Vec<f64> = maturities
                    .iter()
                    .zip(fwds.iter())
                    .map(|(&t, &f)| {
                        acc += f * (t - prev_t);
                        prev_t = t;
                        acc / t
                    })
                    .collect();

                let curve = YieldCurve::new(&maturities, &spots, RateInput::SpotRate).unwrap();
                for (t, s) in maturities.iter().zip(spots.iter()) {
                    prop_assert!((curve.spot_rate(*t).unwrap() - s).abs() < 1e-10);
                }
            }

            #[test]
            fn discount_factors_multiply(
                (maturities, fwds) in forwards_and_maturities(),
                t1 in 0.0f64..10.0,
                dt in 0.1f64..10.0,
            ) {
                let mut acc = 0.0;
                let mut prev_t = 0.0;
                let spots: Vec<f64> = maturities
                    .iter()
                    .zip(fwds.iter())
                    .map(|(&t, &f)| {
                        acc += f * (t - prev_t);
                        prev_t = t;
                        acc / t
                    })
                    .collect();
                let curve = YieldCurve::new(&maturities, &spots, RateInput::SpotRate).unwrap();

                let t2 = t1 + dt;
                let product = curve.discount(t1).unwrap() * curve.fwd_discount(t1, t2).unwrap();
                prop_assert!((product - curve.discount(t2).unwrap()).abs() < 1e-12);
            }
        }
    }
}

//! End-to-end scenarios combining quote canonicalization, curve queries,
//! and curve arithmetic.

use approx::assert_relative_eq;
use contango_curves::{RateInput, VolInput, VolatilityTermStructure, YieldCurve};

#[test]
fn spot_and_forward_inputs_agree_on_discounts() {
    // Canonical scenario: spot quotes 2% / 3% / 3.5% at 1y / 2y / 3y.
    let maturities = [1.0, 2.0, 3.0];
    let spots = [0.02, 0.03, 0.035];
    let curve = YieldCurve::new(&maturities, &spots, RateInput::SpotRate).unwrap();

    assert_relative_eq!(curve.discount(2.0).unwrap(), (-0.06f64).exp(), epsilon = 1e-12);

    // Feed the implied spot rates back in; discounts at the pillars must
    // survive the round trip.
    let implied: Vec<f64> = maturities
        .iter()
        .map(|&t| curve.spot_rate(t).unwrap())
        .collect();
    let rebuilt = YieldCurve::new(&maturities, &implied, RateInput::SpotRate).unwrap();
    for &t in &maturities {
        assert_relative_eq!(
            curve.discount(t).unwrap(),
            rebuilt.discount(t).unwrap(),
            epsilon = 1e-13
        );
    }
}

#[test]
fn curve_spread_via_forward_curve_sum() {
    // A base curve plus a piecewise-flat spread, combined by summing the
    // canonical forward curves on the union grid.
    let base = YieldCurve::new(&[1.0, 2.0, 4.0], &[0.02, 0.025, 0.03], RateInput::SpotRate)
        .unwrap();
    let spread = YieldCurve::new(&[0.5, 3.0], &[0.005, 0.005], RateInput::FwdRate).unwrap();

    let combined = base.forward_curve().sum(spread.forward_curve()).unwrap();

    for t in [0.5, 1.0, 2.0, 3.0] {
        assert_relative_eq!(
            combined.eval(t, 0),
            base.forward_curve().eval(t, 0) + 0.005,
            epsilon = 1e-14
        );
    }

    // Sum is commutative across the shared domain.
    let flipped = spread.forward_curve().sum(base.forward_curve()).unwrap();
    for t in [0.5, 0.9, 1.5, 2.2, 3.0] {
        assert_relative_eq!(combined.eval(t, 0), flipped.eval(t, 0), epsilon = 1e-14);
    }
}

#[test]
fn vol_structure_bootstrap_and_queries() {
    let vts = VolatilityTermStructure::new(
        &[0.5, 1.0, 2.0],
        &[0.18, 0.20, 0.22],
        VolInput::SpotVol,
    )
    .unwrap();

    // Spot vols are recovered at the pillars, and forward vols between
    // pillars are consistent with the accrued variances.
    assert_relative_eq!(vts.spot_vol(1.0).unwrap(), 0.20, epsilon = 1e-13);
    let fv = vts.fwd_vol(1.0, 2.0).unwrap();
    let expected = ((0.22f64.powi(2) * 2.0 - 0.20f64.powi(2)) / 1.0).sqrt();
    assert_relative_eq!(fv, expected, epsilon = 1e-13);
}

#[test]
fn inconsistent_vol_quotes_fail_at_construction() {
    let result = VolatilityTermStructure::new(&[1.0, 2.0], &[0.4, 0.2], VolInput::SpotVol);
    assert!(result.is_err());
}

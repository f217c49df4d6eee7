//! Quote validation shared by the term-structure constructors.

use contango_math::MathError;

use crate::error::{CurveError, CurveResult};

/// Checks a maturity/value quote pair: equal non-zero lengths, strictly
/// positive and strictly increasing maturities.
pub fn check_quotes(maturities: &[f64], values: &[f64]) -> CurveResult<()> {
    if maturities.len() != values.len() {
        return Err(CurveError::LengthMismatch {
            maturities: maturities.len(),
            values: values.len(),
        });
    }
    if maturities.is_empty() {
        return Err(MathError::insufficient_data(1, 0).into());
    }
    for (i, &t) in maturities.iter().enumerate() {
        if t <= 0.0 {
            return Err(CurveError::NonPositiveMaturity { index: i, value: t });
        }
        if i > 0 && t <= maturities[i - 1] {
            return Err(CurveError::NonMonotonicMaturities {
                index: i,
                prev: maturities[i - 1],
                current: t,
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_valid_quotes() {
        assert!(check_quotes(&[0.5, 1.0, 2.0], &[0.01, 0.02, 0.03]).is_ok());
        assert!(check_quotes(&[1.0], &[0.02]).is_ok());
    }

    #[test]
    fn test_rejects_length_mismatch() {
        assert!(matches!(
            check_quotes(&[1.0, 2.0], &[0.02]),
            Err(CurveError::LengthMismatch {
                maturities: 2,
                values: 1
            })
        ));
        assert!(matches!(
            check_quotes(&[], &[]),
            Err(CurveError::Math(_))
        ));
    }

    #[test]
    fn test_rejects_bad_maturities() {
        assert!(matches!(
            check_quotes(&[0.0, 1.0], &[0.1, 0.2]),
            Err(CurveError::NonPositiveMaturity { index: 0, .. })
        ));
        assert!(matches!(
            check_quotes(&[1.0, -2.0], &[0.1, 0.2]),
            Err(CurveError::NonPositiveMaturity { index: 1, .. })
        ));
        assert!(matches!(
            check_quotes(&[1.0, 1.0], &[0.1, 0.2]),
            Err(CurveError::NonMonotonicMaturities { index: 1, .. })
        ));
    }
}

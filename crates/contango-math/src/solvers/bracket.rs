//! Root bracketing by sign-change scan.

use log::{debug, trace};

use crate::error::{MathError, MathResult};

/// Scans `[xlo, xhi]` for sign changes of `f`.
///
/// The interval is split into `subdivisions` equal subintervals and `f` is
/// evaluated at every boundary. Each subinterval `(a, b)` where `f(a)` and
/// `f(b)` have strictly opposite signs contains at least one root by
/// continuity and is returned as a bracket. A root landing exactly on a
/// subdivision boundary is attributed to the subinterval that reaches it
/// from a nonzero value, so it is reported once rather than lost to the
/// strict sign test (or doubled into both neighbours).
///
/// Finding no bracket is a valid outcome: the result is an empty vector, not
/// an error.
///
/// # Errors
///
/// [`MathError::InvalidInput`] when `xlo >= xhi` or `subdivisions == 0`.
///
/// # Example
///
/// ```rust
/// use contango_math::solvers::bracket_roots;
/// use contango_math::Polynomial;
///
/// let p = Polynomial::new(&[-6.0, 11.0, -6.0, 1.0]).unwrap(); // roots 1, 2, 3
/// let brackets = bracket_roots(|x| p.eval(x), 0.0, 4.0, 8).unwrap();
/// assert_eq!(brackets.len(), 3);
/// ```
pub fn bracket_roots<F>(f: F, xlo: f64, xhi: f64, subdivisions: usize) -> MathResult<Vec<(f64, f64)>>
where
    F: Fn(f64) -> f64,
{
    if xlo >= xhi {
        return Err(MathError::invalid_input(format!(
            "scan interval must satisfy xlo < xhi, got [{xlo}, {xhi}]"
        )));
    }
    if subdivisions == 0 {
        return Err(MathError::invalid_input(
            "at least one subdivision is required",
        ));
    }

    let step = (xhi - xlo) / subdivisions as f64;
    let mut brackets = Vec::new();
    let mut a = xlo;
    let mut fa = f(a);
    for k in 1..=subdivisions {
        let b = if k == subdivisions {
            xhi
        } else {
            xlo + step * k as f64
        };
        let fb = f(b);
        if fa * fb < 0.0 || (fb == 0.0 && fa != 0.0) {
            trace!("sign change in [{a}, {b}]: f(a) = {fa:.3e}, f(b) = {fb:.3e}");
            brackets.push((a, b));
        }
        a = b;
        fa = fb;
    }

    debug!(
        "bracket scan over [{xlo}, {xhi}]: {} sign changes in {subdivisions} subintervals",
        brackets.len()
    );
    Ok(brackets)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::polynomial::Polynomial;

    #[test]
    fn test_three_roots_three_brackets() {
        // (x-1)(x-2)(x-3) over [0, 4] with 8 subdivisions of width 0.5; the
        // roots land exactly on subdivision boundaries and must each be
        // reported exactly once.
        let p = Polynomial::new(&[-6.0, 11.0, -6.0, 1.0]).unwrap();
        let brackets = bracket_roots(|x| p.eval(x), 0.0, 4.0, 8).unwrap();

        assert_eq!(brackets.len(), 3);
        for ((a, b), root) in brackets.iter().zip([1.0, 2.0, 3.0]) {
            assert!(*a <= root && root <= *b, "bracket ({a}, {b}) misses {root}");
        }
    }

    #[test]
    fn test_interior_roots_strictly_bracketed() {
        // Same polynomial scanned with 7 subintervals: no root touches a
        // boundary, every bracket holds its root in the interior.
        let p = Polynomial::new(&[-6.0, 11.0, -6.0, 1.0]).unwrap();
        let brackets = bracket_roots(|x| p.eval(x), 0.0, 4.0, 7).unwrap();

        assert_eq!(brackets.len(), 3);
        for ((a, b), root) in brackets.iter().zip([1.0, 2.0, 3.0]) {
            assert!(*a < root && root < *b, "bracket ({a}, {b}) misses {root}");
        }
    }

    #[test]
    fn test_no_roots_is_ok_empty() {
        let p = Polynomial::new(&[1.0, 0.0, 1.0]).unwrap(); // x^2 + 1
        let brackets = bracket_roots(|x| p.eval(x), -10.0, 10.0, 16).unwrap();
        assert!(brackets.is_empty());
    }

    #[test]
    fn test_invalid_interval_and_subdivisions() {
        let p = Polynomial::new(&[0.0, 1.0]).unwrap();
        assert!(bracket_roots(|x| p.eval(x), 1.0, 1.0, 4).is_err());
        assert!(bracket_roots(|x| p.eval(x), 2.0, 1.0, 4).is_err());
        assert!(bracket_roots(|x| p.eval(x), 0.0, 1.0, 0).is_err());
    }

    #[test]
    fn test_works_on_closures() {
        let brackets = bracket_roots(|x: f64| x.cos(), 0.0, 3.0, 6).unwrap();
        assert_eq!(brackets.len(), 1);
        let (a, b) = brackets[0];
        assert!(a < std::f64::consts::FRAC_PI_2 && std::f64::consts::FRAC_PI_2 < b);
    }
}

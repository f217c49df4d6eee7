//! Secant root refinement.

use log::debug;

use crate::error::{MathError, MathResult};
use crate::solvers::{SolverConfig, SolverResult};

/// Classic secant iteration seeded at `x0` and `x1`.
///
/// Each step replaces the older point with the secant-line root of the two
/// most recent iterates, stopping once `|f(x)| < config.tolerance`.
/// Convergence is superlinear (order ~1.618) when it converges.
///
/// This is pure secant: there is no bracket-preservation guarantee, and the
/// iteration may step outside `[x0, x1]` or diverge on unfavourable
/// functions. Callers wanting robustness should seed it from a bracket found
/// by [`bracket_roots`](crate::solvers::bracket_roots) and keep the interval
/// short.
///
/// # Errors
///
/// - [`MathError::ConvergenceFailed`] when the iteration budget is exhausted
///   with the residual still above tolerance
/// - [`MathError::DivisionByZero`] when consecutive iterates produce a
///   vanishing secant denominator
///
/// # Example
///
/// ```rust
/// use contango_math::solvers::{secant, SolverConfig};
/// use contango_math::Polynomial;
///
/// let p = Polynomial::new(&[-6.0, 11.0, -6.0, 1.0]).unwrap(); // roots 1, 2, 3
/// let config = SolverConfig::default().with_tolerance(1e-8);
/// let result = secant(|x| p.eval(x), 0.5, 1.5, &config).unwrap();
/// assert!((result.root - 1.0).abs() < 1e-8);
/// ```
pub fn secant<F>(f: F, x0: f64, x1: f64, config: &SolverConfig) -> MathResult<SolverResult>
where
    F: Fn(f64) -> f64,
{
    let mut x_prev = x0;
    let mut f_prev = f(x_prev);
    let mut x_curr = x1;
    let mut f_curr = f(x_curr);

    for iteration in 0..config.max_iterations {
        if f_curr.abs() < config.tolerance {
            debug!("secant converged to {x_curr} after {iteration} iterations");
            return Ok(SolverResult {
                root: x_curr,
                iterations: iteration,
                residual: f_curr,
            });
        }

        let denom = f_curr - f_prev;
        if denom.abs() < 1e-15 {
            return Err(MathError::DivisionByZero { value: denom });
        }

        let x_next = x_curr - f_curr * (x_curr - x_prev) / denom;
        x_prev = x_curr;
        f_prev = f_curr;
        x_curr = x_next;
        f_curr = f(x_curr);
    }

    Err(MathError::convergence_failed(
        config.max_iterations,
        f_curr.abs(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use crate::polynomial::Polynomial;
    use crate::solvers::bracket_roots;

    #[test]
    fn test_cubic_root_from_bracket() {
        let p = Polynomial::new(&[-6.0, 11.0, -6.0, 1.0]).unwrap();
        let config = SolverConfig::default().with_tolerance(1e-8);

        let result = secant(|x| p.eval(x), 0.5, 1.5, &config).unwrap();
        assert!((result.root - 1.0).abs() < 1e-8);
    }

    #[test]
    fn test_all_bracketed_roots_refine() {
        let p = Polynomial::new(&[-6.0, 11.0, -6.0, 1.0]).unwrap();
        let config = SolverConfig::default().with_tolerance(1e-10);

        let brackets = bracket_roots(|x| p.eval(x), 0.0, 4.0, 8).unwrap();
        let roots: Vec<f64> = brackets
            .iter()
            .map(|&(a, b)| secant(|x| p.eval(x), a, b, &config).unwrap().root)
            .collect();

        assert_eq!(roots.len(), 3);
        assert_relative_eq!(roots[0], 1.0, epsilon = 1e-8);
        assert_relative_eq!(roots[1], 2.0, epsilon = 1e-8);
        assert_relative_eq!(roots[2], 3.0, epsilon = 1e-8);
    }

    #[test]
    fn test_sqrt_two() {
        let result = secant(
            |x| x * x - 2.0,
            1.0,
            2.0,
            &SolverConfig::default(),
        )
        .unwrap();
        assert_relative_eq!(result.root, std::f64::consts::SQRT_2, epsilon = 1e-9);
        assert!(result.iterations < 15);
    }

    #[test]
    fn test_budget_exhaustion() {
        // exp has no root; the iteration walks left forever without the
        // residual ever reaching a tight tolerance in a handful of steps.
        let config = SolverConfig::new(1e-14, 5);
        let err = secant(|x: f64| x.exp(), 0.0, 1.0, &config).unwrap_err();
        assert!(matches!(err, MathError::ConvergenceFailed { iterations: 5, .. }));
    }

    #[test]
    fn test_flat_function_rejected() {
        let err = secant(|_| 1.0, 0.0, 1.0, &SolverConfig::default()).unwrap_err();
        assert!(matches!(err, MathError::DivisionByZero { .. }));
    }
}

//! Root-finding utilities.
//!
//! Two primitives cover the library's root-finding needs:
//!
//! - [`bracket_roots`]: scans an interval for sign changes, yielding the
//!   subintervals guaranteed (by continuity) to contain a root
//! - [`secant`]: refines a root from two seed points by secant iteration
//!
//! Both are generic over `Fn(f64) -> f64`, so they work on a
//! [`Polynomial`](crate::polynomial::Polynomial), a
//! [`PiecewisePolynomial`](crate::piecewise::PiecewisePolynomial) query, or
//! any other scalar function a caller needs to invert.

mod bracket;
mod secant;

pub use bracket::bracket_roots;
pub use secant::secant;

use serde::{Deserialize, Serialize};

/// Default tolerance for root-finding algorithms.
pub const DEFAULT_TOLERANCE: f64 = 1e-10;

/// Default maximum iterations for root-finding algorithms.
pub const DEFAULT_MAX_ITERATIONS: u32 = 100;

/// Configuration for root-finding algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SolverConfig {
    /// Residual tolerance for convergence: iteration stops once
    /// `|f(x)| < tolerance`.
    pub tolerance: f64,
    /// Maximum number of iterations before giving up.
    pub max_iterations: u32,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl SolverConfig {
    /// Creates a new solver configuration.
    #[must_use]
    pub fn new(tolerance: f64, max_iterations: u32) -> Self {
        Self {
            tolerance,
            max_iterations,
        }
    }

    /// Sets the tolerance.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Sets the maximum iterations.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.max_iterations = max_iterations;
        self
    }
}

/// Result of a root-finding iteration.
#[derive(Debug, Clone, Copy)]
pub struct SolverResult {
    /// The root found.
    pub root: f64,
    /// Number of iterations used.
    pub iterations: u32,
    /// Final residual (function value at the root).
    pub residual: f64,
}

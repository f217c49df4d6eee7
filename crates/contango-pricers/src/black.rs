//! Standard normal distribution helpers.

use statrs::distribution::{ContinuousCDF, Normal};

/// Standard normal cumulative distribution function.
#[must_use]
pub fn norm_cdf(x: f64) -> f64 {
    Normal::standard().cdf(x)
}

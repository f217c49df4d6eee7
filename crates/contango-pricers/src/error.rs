//! Error types for pricing operations.

use contango_curves::CurveError;
use thiserror::Error;

/// A specialized Result type for pricing operations.
pub type PricerResult<T> = Result<T, PricerError>;

/// Errors that can occur while pricing.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PricerError {
    /// A pricing argument violates its domain.
    #[error("Invalid input: {reason}")]
    InvalidInput {
        /// Description of the violated requirement.
        reason: String,
    },

    /// Failure propagated from a curve query.
    #[error(transparent)]
    Curve(#[from] CurveError),
}

impl PricerError {
    /// Creates an invalid input error.
    #[must_use]
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }
}

//! Error types for term-structure operations.

use contango_math::MathError;
use thiserror::Error;

/// A specialized Result type for term-structure operations.
pub type CurveResult<T> = Result<T, CurveError>;

/// Errors that can occur constructing or querying a term structure.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CurveError {
    /// Maturity and value sequences differ in length.
    #[error("Maturities and values must have same length: {maturities} vs {values}")]
    LengthMismatch {
        /// Number of maturities supplied.
        maturities: usize,
        /// Number of values supplied.
        values: usize,
    },

    /// Maturities are not strictly increasing.
    #[error("Non-monotonic maturities at index {index}: {prev:.4} >= {current:.4}")]
    NonMonotonicMaturities {
        /// Index where monotonicity fails.
        index: usize,
        /// Previous maturity.
        prev: f64,
        /// Offending maturity.
        current: f64,
    },

    /// A maturity is zero or negative.
    #[error("Non-positive maturity at index {index}: {value:.4}")]
    NonPositiveMaturity {
        /// Index of the offending maturity.
        index: usize,
        /// The offending maturity.
        value: f64,
    },

    /// An integer convention tag does not name a known input type.
    #[error("Unknown input-type tag: {tag}")]
    UnknownInputType {
        /// The unrecognized tag.
        tag: i32,
    },

    /// Bootstrapping implied a negative forward rate.
    #[error("Negative implied forward rate {rate:.6} between T1 = {t1:.4} and T2 = {t2:.4}")]
    NegativeForwardRate {
        /// Start of the offending period.
        t1: f64,
        /// End of the offending period.
        t2: f64,
        /// The negative forward rate.
        rate: f64,
    },

    /// Bootstrapping implied a negative forward variance.
    #[error(
        "Negative implied forward variance {variance:.6} between T1 = {t1:.4} and T2 = {t2:.4}"
    )]
    NegativeForwardVariance {
        /// Start of the offending period.
        t1: f64,
        /// End of the offending period.
        t2: f64,
        /// The negative forward variance.
        variance: f64,
    },

    /// A zero-bond price quote is outside (0, 1].
    #[error("Zero bond price at index {index} must be in (0, 1]: {price:.6}")]
    InvalidZeroBondPrice {
        /// Index of the offending price.
        index: usize,
        /// The offending price.
        price: f64,
    },

    /// A query argument violates the operation's domain.
    #[error("Invalid query: {reason}")]
    InvalidQuery {
        /// Description of the violated requirement.
        reason: String,
    },

    /// Failure propagated from the curve engine.
    #[error(transparent)]
    Math(#[from] MathError),
}

impl CurveError {
    /// Creates an invalid query error.
    #[must_use]
    pub fn invalid_query(reason: impl Into<String>) -> Self {
        Self::InvalidQuery {
            reason: reason.into(),
        }
    }
}

//! Error types for mathematical operations.

use thiserror::Error;

/// A specialized Result type for mathematical operations.
pub type MathResult<T> = Result<T, MathError>;

/// Errors that can occur during mathematical operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MathError {
    /// Root-finding algorithm failed to converge.
    #[error("Convergence failed after {iterations} iterations (residual: {residual:.2e})")]
    ConvergenceFailed {
        /// Number of iterations attempted.
        iterations: u32,
        /// Final residual value.
        residual: f64,
    },

    /// Division by zero or near-zero value.
    #[error("Division by zero or near-zero value: {value:.2e}")]
    DivisionByZero {
        /// The near-zero value.
        value: f64,
    },

    /// Grid values are not strictly increasing.
    #[error("Non-monotonic grid at index {index}: {prev:.6} >= {current:.6}")]
    NonMonotonic {
        /// Index where monotonicity fails.
        index: usize,
        /// Previous grid value.
        prev: f64,
        /// Offending grid value.
        current: f64,
    },

    /// Insufficient data points for operation.
    #[error("Insufficient data: need at least {required}, got {actual}")]
    InsufficientData {
        /// Minimum required points.
        required: usize,
        /// Actual number of points.
        actual: usize,
    },

    /// Invalid input parameter.
    #[error("Invalid input: {reason}")]
    InvalidInput {
        /// Description of the invalid input.
        reason: String,
    },

    /// Polynomial degree not supported by the requested operation.
    #[error("Degree {degree} not supported by {operation}")]
    UnsupportedDegree {
        /// The unsupported degree.
        degree: usize,
        /// The operation that rejected it.
        operation: &'static str,
    },
}

impl MathError {
    /// Creates a convergence failed error.
    #[must_use]
    pub fn convergence_failed(iterations: u32, residual: f64) -> Self {
        Self::ConvergenceFailed {
            iterations,
            residual,
        }
    }

    /// Creates an invalid input error.
    #[must_use]
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }

    /// Creates an insufficient data error.
    #[must_use]
    pub fn insufficient_data(required: usize, actual: usize) -> Self {
        Self::InsufficientData { required, actual }
    }

    /// Creates a non-monotonic grid error.
    #[must_use]
    pub fn non_monotonic(index: usize, prev: f64, current: f64) -> Self {
        Self::NonMonotonic {
            index,
            prev,
            current,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = MathError::convergence_failed(100, 1e-6);
        assert!(err.to_string().contains("100 iterations"));

        let err = MathError::non_monotonic(2, 3.0, 3.0);
        assert!(err.to_string().contains("index 2"));

        let err = MathError::UnsupportedDegree {
            degree: 3,
            operation: "sum",
        };
        assert!(err.to_string().contains("Degree 3"));
    }
}

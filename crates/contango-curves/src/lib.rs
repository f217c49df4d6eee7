//! # Contango Curves
//!
//! Term structures built on the piecewise-polynomial curve engine.
//!
//! This crate provides the two market term-structure types:
//!
//! - [`YieldCurve`]: instantaneous forward rates canonicalized from spot
//!   rate, forward rate, or zero-bond price quotes; answers discount factor
//!   and rate queries
//! - [`VolatilityTermStructure`]: forward variances canonicalized from spot
//!   or forward volatility quotes; answers spot and forward vol queries
//!
//! Whatever the input convention, construction converts the quotes into one
//! canonical curve (forward rates, forward variances) held in a
//! [`PiecewisePolynomial`](contango_math::PiecewisePolynomial); the input
//! convention is not retained. Queries integrate the stored curve exactly.
//!
//! ## Quick Start
//!
//! ```rust
//! use contango_curves::{RateInput, YieldCurve};
//!
//! let curve = YieldCurve::new(
//!     &[1.0, 2.0, 3.0],
//!     &[0.02, 0.03, 0.035],
//!     RateInput::SpotRate,
//! )
//! .unwrap();
//!
//! let df = curve.discount(2.0).unwrap();
//! assert!((df - (-0.06f64).exp()).abs() < 1e-12);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::float_cmp)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::similar_names)]
#![allow(clippy::uninlined_format_args)]

pub mod error;
pub mod validation;
pub mod volatility;
pub mod yield_curve;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{CurveError, CurveResult};
    pub use crate::volatility::{VolInput, VolatilityTermStructure};
    pub use crate::yield_curve::{RateInput, YieldCurve};
}

pub use error::{CurveError, CurveResult};
pub use volatility::{VolInput, VolatilityTermStructure};
pub use yield_curve::{RateInput, YieldCurve};

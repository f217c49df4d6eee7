//! # Contango Market
//!
//! A process-scoped store of named market objects.
//!
//! The [`Market`] owns one [`ObjectStore`] per term-structure kind (yield
//! curves, volatility term structures). Stores hand out [`Tag`]s on insert —
//! a name plus a version that bumps on every overwrite — and `Arc` handles
//! on lookup, so readers keep a curve alive even across a replace or
//! [`Market::clear`].
//!
//! The market is an explicit object: callers construct one and pass it where
//! it is needed. Nothing in this crate is a process-wide singleton, and
//! write access follows Rust's borrow rules (`&mut` to insert or clear,
//! `&` to read).
//!
//! ## Quick Start
//!
//! ```rust
//! use contango_curves::{RateInput, YieldCurve};
//! use contango_market::Market;
//!
//! let mut market = Market::new();
//!
//! let curve = YieldCurve::new(&[1.0, 2.0], &[0.02, 0.03], RateInput::SpotRate).unwrap();
//! let tag = market.yield_curves_mut().set("USD", curve);
//! assert_eq!(tag.to_string(), "USD.1");
//!
//! let handle = market.yield_curve("USD").unwrap();
//! assert!(handle.discount(1.5).unwrap() < 1.0);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]

pub mod market;
pub mod store;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::market::{Market, MarketError, MarketResult};
    pub use crate::store::{ObjectStore, Tag};
}

pub use market::{Market, MarketError, MarketResult};
pub use store::{ObjectStore, Tag};

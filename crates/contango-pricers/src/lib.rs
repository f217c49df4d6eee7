//! # Contango Pricers
//!
//! Closed-form pricers on top of the term-structure query surface.
//!
//! Everything here is a synchronous free function: forward prices, digital
//! and European options under Black-Scholes, caplets/floorlets priced off a
//! [`YieldCurve`](contango_curves::YieldCurve), and flat-hazard CDS leg
//! values. The pricers touch the curves only through the public query
//! surface (`discount`, `fwd_rate`), never their internals.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::similar_names)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]

pub mod black;
pub mod error;
pub mod simple;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{PricerError, PricerResult};
    pub use crate::simple::{
        cap_floorlet_bs, cds_pv, digital_option_bs, european_option_bs, fwd_price, CdsLegs,
        Payoff,
    };
}

pub use error::{PricerError, PricerResult};
pub use simple::{
    cap_floorlet_bs, cds_pv, digital_option_bs, european_option_bs, fwd_price, CdsLegs, Payoff,
};

//! The market object: one store per term-structure kind.

use std::sync::Arc;

use contango_curves::{VolatilityTermStructure, YieldCurve};
use thiserror::Error;

use crate::store::ObjectStore;

/// A specialized Result type for market lookups.
pub type MarketResult<T> = Result<T, MarketError>;

/// Errors raised by the market's `require`-style accessors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MarketError {
    /// No object of the given kind is stored under the name.
    #[error("{kind} '{name}' not found")]
    NotFound {
        /// The kind of object looked up.
        kind: &'static str,
        /// The missing name.
        name: String,
    },
}

/// The process-scoped market: named yield curves and volatility term
/// structures.
///
/// Constructed explicitly and passed to whoever needs it; this crate keeps
/// no global instance. Mutation (insert, clear) takes `&mut self`, reading
/// takes `&self`, so the single-writer/many-reader discipline is enforced by
/// the borrow checker rather than by locks. Lookups return `Arc` handles
/// that outlive later replacements.
#[derive(Debug, Default)]
pub struct Market {
    yield_curves: ObjectStore<YieldCurve>,
    volatilities: ObjectStore<VolatilityTermStructure>,
}

impl Market {
    /// Creates an empty market.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The yield-curve store.
    #[must_use]
    pub fn yield_curves(&self) -> &ObjectStore<YieldCurve> {
        &self.yield_curves
    }

    /// Mutable access to the yield-curve store.
    pub fn yield_curves_mut(&mut self) -> &mut ObjectStore<YieldCurve> {
        &mut self.yield_curves
    }

    /// The volatility store.
    #[must_use]
    pub fn volatilities(&self) -> &ObjectStore<VolatilityTermStructure> {
        &self.volatilities
    }

    /// Mutable access to the volatility store.
    pub fn volatilities_mut(&mut self) -> &mut ObjectStore<VolatilityTermStructure> {
        &mut self.volatilities
    }

    /// Looks up a yield curve, failing when the name is absent.
    pub fn yield_curve(&self, name: &str) -> MarketResult<Arc<YieldCurve>> {
        self.yield_curves.get(name).ok_or_else(|| MarketError::NotFound {
            kind: "yield curve",
            name: name.to_string(),
        })
    }

    /// Looks up a volatility term structure, failing when the name is
    /// absent.
    pub fn volatility(&self, name: &str) -> MarketResult<Arc<VolatilityTermStructure>> {
        self.volatilities.get(name).ok_or_else(|| MarketError::NotFound {
            kind: "volatility term structure",
            name: name.to_string(),
        })
    }

    /// Removes every stored object of every kind.
    pub fn clear(&mut self) {
        self.yield_curves.clear();
        self.volatilities.clear();
    }
}

//! Pricing
//!
//! [`PricingFacade`] is the single entry point for pricing an order line: it
//! resolves the strategy for a product kind and exposes the two-step contract
//! of computing the base price and then applying a coupon. Kinds without a
//! registered strategy price at zero and ignore coupons. No rounding happens
//! here; that is up to the caller.

use rust_decimal::Decimal;

use crate::{
    coupons::Coupon,
    products::ProductKind,
    registry::{self, StrategyRegistry},
    strategies::PricingStrategy,
};

/// Prices a quantity of one product kind.
#[derive(Debug)]
pub struct PricingFacade {
    kind: ProductKind,
    quantity: u64,
    strategy: Option<Box<dyn PricingStrategy>>,
}

impl PricingFacade {
    /// Create a facade resolving its strategy from the process-wide registry.
    pub fn new(kind: impl Into<ProductKind>, quantity: u64) -> Self {
        let kind = kind.into();
        let strategy = registry::resolve_strategy(kind.as_str());

        Self {
            kind,
            quantity,
            strategy,
        }
    }

    /// Create a facade resolving its strategy from an explicit registry.
    pub fn with_registry(
        registry: &StrategyRegistry,
        kind: impl Into<ProductKind>,
        quantity: u64,
    ) -> Self {
        let kind = kind.into();
        let strategy = registry.resolve(kind.as_str());

        Self {
            kind,
            quantity,
            strategy,
        }
    }

    /// Product kind being priced.
    pub fn kind(&self) -> &ProductKind {
        &self.kind
    }

    /// Quantity being priced.
    pub fn quantity(&self) -> u64 {
        self.quantity
    }

    /// Returns true if a strategy was found for the kind.
    pub fn is_resolved(&self) -> bool {
        self.strategy.is_some()
    }

    /// Price before coupons; zero when the kind has no strategy.
    pub fn compute_price(&self) -> Decimal {
        self.strategy
            .as_ref()
            .map_or(Decimal::ZERO, |strategy| strategy.compute_price(self.quantity))
    }

    /// Apply a coupon to `price`; unchanged when the kind has no strategy.
    pub fn apply_discount(&self, coupon: Option<&Coupon>, price: Decimal) -> Decimal {
        self.strategy
            .as_ref()
            .map_or(price, |strategy| strategy.apply_discount(price, coupon))
    }
}

//! Pricing strategies
//!
//! Each product kind prices its quantity with its own [`PricingStrategy`].
//! Strategies are stateless and created fresh for every computation through
//! the factories held in the [`StrategyRegistry`](crate::registry::StrategyRegistry).

use std::fmt;

use rust_decimal::Decimal;

use crate::{coupons::Coupon, products::ProductKind};

pub mod diesel;
pub mod ethanol;
pub mod gasoline;
pub mod lubricant;

pub use diesel::DieselStrategy;
pub use ethanol::EthanolStrategy;
pub use gasoline::GasolineStrategy;
pub use lubricant::LubricantStrategy;

/// Per-kind pricing algorithm.
pub trait PricingStrategy: fmt::Debug {
    /// The product kind this strategy prices.
    fn kind(&self) -> ProductKind;

    /// Price of `quantity` units before any coupon is applied.
    fn compute_price(&self, quantity: u64) -> Decimal;

    /// Apply a coupon to an already computed price.
    ///
    /// Defaults to the global coupon rule. Strategies that accept extra codes
    /// override this and fall back to
    /// [`apply_global_discount`](crate::coupons::apply_global_discount) for
    /// the codes they do not handle.
    fn apply_discount(&self, price: Decimal, coupon: Option<&Coupon>) -> Decimal {
        crate::coupons::apply_global_discount(price, coupon)
    }
}

/// Box a default-constructed strategy, for use as a registry factory.
pub fn boxed<S>() -> Box<dyn PricingStrategy>
where
    S: PricingStrategy + Default + 'static,
{
    Box::new(S::default())
}

#[cfg(test)]
mod tests {
    use crate::{prices::PriceTable, registry::StrategyRegistry};

    use super::*;

    #[test]
    fn single_unit_costs_the_table_price() {
        let registry = StrategyRegistry::with_defaults();

        for kind in &ProductKind::BUILT_IN {
            let strategy = registry.resolve(kind.as_str());

            assert_eq!(
                strategy.map(|strategy| strategy.compute_price(1)),
                PriceTable::base_price(kind),
                "{kind}"
            );
        }
    }
}

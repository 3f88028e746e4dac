//! Diesel pricing
//!
//! Two volume tiers: 5% off above 500 units and 10% off above 1000 units.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::{prices::PriceTable, products::ProductKind, strategies::PricingStrategy};

/// Quantity above which the 10% tier applies.
pub const LARGE_VOLUME: u64 = 1000;

/// Quantity above which the 5% tier applies.
pub const MEDIUM_VOLUME: u64 = 500;

/// Diesel pricing strategy.
#[derive(Debug, Clone, Copy, Default)]
pub struct DieselStrategy;

impl PricingStrategy for DieselStrategy {
    fn kind(&self) -> ProductKind {
        ProductKind::DIESEL
    }

    fn compute_price(&self, quantity: u64) -> Decimal {
        let gross = PriceTable::DIESEL * Decimal::from(quantity);

        if quantity > LARGE_VOLUME {
            gross * dec!(0.90)
        } else if quantity > MEDIUM_VOLUME {
            gross * dec!(0.95)
        } else {
            gross
        }
    }
}

//! Gasoline pricing

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::{prices::PriceTable, products::ProductKind, strategies::PricingStrategy};

/// Quantity above which the flat rebate applies.
pub const REBATE_VOLUME: u64 = 200;

/// Flat rebate for large gasoline orders.
pub const REBATE: Decimal = dec!(100);

/// Gasoline pricing strategy.
#[derive(Debug, Clone, Copy, Default)]
pub struct GasolineStrategy;

impl PricingStrategy for GasolineStrategy {
    fn kind(&self) -> ProductKind {
        ProductKind::GASOLINE
    }

    fn compute_price(&self, quantity: u64) -> Decimal {
        let gross = PriceTable::GASOLINE * Decimal::from(quantity);

        if quantity > REBATE_VOLUME {
            gross - REBATE
        } else {
            gross
        }
    }
}

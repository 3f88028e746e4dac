//! Ethanol pricing

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::{prices::PriceTable, products::ProductKind, strategies::PricingStrategy};

/// Quantity above which the 3% discount applies.
pub const DISCOUNT_VOLUME: u64 = 80;

/// Ethanol pricing strategy.
#[derive(Debug, Clone, Copy, Default)]
pub struct EthanolStrategy;

impl PricingStrategy for EthanolStrategy {
    fn kind(&self) -> ProductKind {
        ProductKind::ETHANOL
    }

    fn compute_price(&self, quantity: u64) -> Decimal {
        let price = PriceTable::ETHANOL * Decimal::from(quantity);

        if quantity > DISCOUNT_VOLUME {
            price * dec!(0.97)
        } else {
            price
        }
    }
}

//! Lubricant pricing
//!
//! Flat per-unit pricing. Lubricant is the one kind with its own coupon,
//! [`LUB2`], taking a flat 2.00 off the order; every other code goes through
//! the global rule, so `MEGA10` and `NOVO5` still work here.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::{
    coupons::{Coupon, LUB2, apply_global_discount},
    prices::PriceTable,
    products::ProductKind,
    strategies::PricingStrategy,
};

/// Amount taken off by the `LUB2` coupon.
pub const LUB2_AMOUNT_OFF: Decimal = dec!(2);

/// Lubricant pricing strategy.
#[derive(Debug, Clone, Copy, Default)]
pub struct LubricantStrategy;

impl PricingStrategy for LubricantStrategy {
    fn kind(&self) -> ProductKind {
        ProductKind::LUBRICANT
    }

    fn compute_price(&self, quantity: u64) -> Decimal {
        PriceTable::LUBRICANT * Decimal::from(quantity)
    }

    fn apply_discount(&self, price: Decimal, coupon: Option<&Coupon>) -> Decimal {
        match coupon {
            Some(coupon) if coupon.is(LUB2) => price - LUB2_AMOUNT_OFF,
            _ => apply_global_discount(price, coupon),
        }
    }
}

//! Coupons
//!
//! Coupon codes and the global discount rule shared by every pricing strategy.
//! Strategies may layer their own codes on top (see
//! [`PricingStrategy::apply_discount`](crate::strategies::PricingStrategy::apply_discount)).

use std::fmt;

use decimal_percentage::Percentage;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// 10% off any product.
pub const MEGA10: &str = "MEGA10";

/// 5% off any product.
pub const NOVO5: &str = "NOVO5";

/// Flat 2.00 off lubricant orders.
pub const LUB2: &str = "LUB2";

/// Global percentage coupons, in the order they are checked.
const GLOBAL_COUPONS: [(&str, Decimal); 2] = [(MEGA10, dec!(0.10)), (NOVO5, dec!(0.05))];

/// An opaque coupon code attached to an order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Coupon(String);

impl Coupon {
    /// Create a coupon from its code.
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// The coupon code.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if this coupon carries the given code.
    #[must_use]
    pub fn is(&self, code: &str) -> bool {
        self.0 == code
    }
}

impl fmt::Display for Coupon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Coupon {
    fn from(code: &str) -> Self {
        Self::new(code)
    }
}

impl From<String> for Coupon {
    fn from(code: String) -> Self {
        Self(code)
    }
}

/// Percentage taken off by a global coupon, if the code is one.
pub fn global_percentage_off(coupon: &Coupon) -> Option<Percentage> {
    GLOBAL_COUPONS
        .iter()
        .find(|(code, _)| coupon.is(code))
        .map(|&(_, rate)| Percentage::from(rate))
}

/// Apply the global coupon rule to a price.
///
/// `MEGA10` takes 10% off and `NOVO5` takes 5% off. A missing or
/// unrecognised coupon leaves the price unchanged.
pub fn apply_global_discount(price: Decimal, coupon: Option<&Coupon>) -> Decimal {
    coupon
        .and_then(global_percentage_off)
        .map_or(price, |percent| price - percent * price)
}

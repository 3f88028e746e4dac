//! Petrobahia
//!
//! Fuel order pricing engine. Each product kind is priced by its own
//! [`PricingStrategy`](strategies::PricingStrategy), looked up through a
//! [`StrategyRegistry`](registry::StrategyRegistry) so new kinds can be added
//! without touching existing ones. Coupons are applied after volume tiers,
//! and the [`OrderProcessor`](orders::OrderProcessor) rounds the result per
//! product kind.
//!
//! ```
//! use petrobahia::{coupons::Coupon, orders::{Order, OrderProcessor}};
//! use rust_decimal_macros::dec;
//!
//! let order = Order::new("TransLog", "diesel", 1200, Some(Coupon::from("MEGA10")));
//!
//! assert_eq!(OrderProcessor::new().process(&order), dec!(3878));
//! ```

pub mod config;
pub mod coupons;
pub mod customers;
pub mod fixtures;
pub mod logging;
pub mod orders;
pub mod prelude;
pub mod prices;
pub mod pricing;
pub mod products;
pub mod receipt;
pub mod registry;
pub mod strategies;

//! Petrobahia prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    coupons::Coupon,
    customers::{Customer, CustomerError, CustomerRepository, CustomersService},
    fixtures::{Fixture, FixtureError},
    orders::{Order, OrderProcessor, OrderSummary, ProcessedOrder, Rounding},
    prices::PriceTable,
    pricing::PricingFacade,
    products::ProductKind,
    receipt::{Receipt, ReceiptError},
    registry::{StrategyFactory, StrategyRegistry},
    strategies::{
        DieselStrategy, EthanolStrategy, GasolineStrategy, LubricantStrategy, PricingStrategy,
    },
};

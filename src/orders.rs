//! Orders
//!
//! Drives the [`PricingFacade`] for each order: zero quantities short-circuit,
//! negative strategy output is clamped, the coupon is applied and the result
//! is rounded according to the product kind.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::{
    coupons::Coupon, pricing::PricingFacade, products::ProductKind, registry::StrategyRegistry,
};

/// A customer's order for one product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    /// Customer name
    pub customer: String,

    /// Product ordered
    pub product: ProductKind,

    /// Units ordered
    pub quantity: u64,

    /// Coupon presented with the order
    #[serde(default)]
    pub coupon: Option<Coupon>,
}

impl Order {
    /// Create an order.
    pub fn new(
        customer: impl Into<String>,
        product: impl Into<ProductKind>,
        quantity: u64,
        coupon: Option<Coupon>,
    ) -> Self {
        Self {
            customer: customer.into(),
            product: product.into(),
            quantity,
            coupon,
        }
    }
}

/// How the final price of an order is rounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rounding {
    /// Round to the nearest whole unit.
    NearestInteger,

    /// Round to the nearest cent, ties away from zero.
    TwoDecimals,

    /// Drop everything past the cent, toward zero.
    TruncateTwoDecimals,
}

impl Rounding {
    /// Rounding rule used for a product kind.
    ///
    /// Diesel rounds to whole units and gasoline to cents; every other kind,
    /// including ones registered at runtime, is truncated to cents.
    pub fn for_kind(kind: &ProductKind) -> Self {
        match kind.as_str() {
            "diesel" => Self::NearestInteger,
            "gasolina" => Self::TwoDecimals,
            _ => Self::TruncateTwoDecimals,
        }
    }

    /// Apply the rule to a price.
    ///
    /// Whole-unit ties go to the even neighbour; cent ties go away from zero.
    #[must_use]
    pub fn apply(self, price: Decimal) -> Decimal {
        match self {
            Self::NearestInteger => {
                price.round_dp_with_strategy(0, RoundingStrategy::MidpointNearestEven)
            }
            Self::TwoDecimals => {
                price.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
            }
            Self::TruncateTwoDecimals => price.round_dp_with_strategy(2, RoundingStrategy::ToZero),
        }
    }
}

/// An order together with its computed prices.
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessedOrder {
    /// The order as received
    pub order: Order,

    /// Price before the coupon, after clamping
    pub base_price: Decimal,

    /// Price after the coupon and rounding
    pub final_price: Decimal,
}

/// Result of processing a batch of orders.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderSummary {
    lines: Vec<ProcessedOrder>,
    total: Decimal,
}

impl OrderSummary {
    /// Processed orders, in input order.
    pub fn lines(&self) -> &[ProcessedOrder] {
        &self.lines
    }

    /// Sum of all final prices.
    pub fn total(&self) -> Decimal {
        self.total
    }

    /// Number of processed orders.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Returns true if no orders were processed.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    fn push(&mut self, line: ProcessedOrder) {
        self.total += line.final_price;
        self.lines.push(line);
    }
}

/// Prices orders against a strategy registry.
#[derive(Debug, Clone, Copy, Default)]
pub struct OrderProcessor<'a> {
    registry: Option<&'a StrategyRegistry>,
}

impl<'a> OrderProcessor<'a> {
    /// Create a processor using the process-wide registry.
    #[must_use]
    pub fn new() -> Self {
        Self { registry: None }
    }

    /// Create a processor using an explicit registry.
    #[must_use]
    pub fn with_registry(registry: &'a StrategyRegistry) -> Self {
        Self {
            registry: Some(registry),
        }
    }

    /// Final price of an order.
    pub fn process(&self, order: &Order) -> Decimal {
        self.price(order).final_price
    }

    /// Price an order, keeping the intermediate base price.
    #[tracing::instrument(
        name = "order.price",
        skip_all,
        fields(
            customer = %order.customer,
            product = %order.product,
            quantity = order.quantity,
        )
    )]
    pub fn price(&self, order: &Order) -> ProcessedOrder {
        if order.quantity == 0 {
            debug!("zero quantity, pricing at zero");

            return ProcessedOrder {
                order: order.clone(),
                base_price: Decimal::ZERO,
                final_price: Decimal::ZERO,
            };
        }

        let facade = self.facade(order);

        if !facade.is_resolved() {
            debug!("no pricing strategy registered for product");
        }

        let mut base_price = facade.compute_price();

        if base_price.is_sign_negative() {
            warn!(%base_price, "strategy produced a negative price, clamping to zero");

            base_price = Decimal::ZERO;
        }

        let discounted = facade.apply_discount(order.coupon.as_ref(), base_price);
        let final_price = Rounding::for_kind(&order.product).apply(discounted);

        info!(
            coupon = order.coupon.as_ref().map(Coupon::as_str),
            %base_price,
            %final_price,
            "order priced"
        );

        ProcessedOrder {
            order: order.clone(),
            base_price,
            final_price,
        }
    }

    /// Price every order in turn and total them.
    pub fn process_all<'o>(&self, orders: impl IntoIterator<Item = &'o Order>) -> OrderSummary {
        let mut summary = OrderSummary::default();

        for order in orders {
            summary.push(self.price(order));
        }

        summary
    }

    fn facade(&self, order: &Order) -> PricingFacade {
        match self.registry {
            Some(registry) => {
                PricingFacade::with_registry(registry, order.product.clone(), order.quantity)
            }
            None => PricingFacade::new(order.product.clone(), order.quantity),
        }
    }
}

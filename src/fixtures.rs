//! Fixtures
//!
//! Batches of customers and orders loaded from YAML, plus the built-in sample
//! batch used when no fixture file is given.

use std::{fs, path::Path};

use serde::Deserialize;
use thiserror::Error;

use crate::{coupons::Coupon, customers::Customer, orders::Order, products::ProductKind};

/// Fixture Parsing Errors
#[derive(Debug, Error)]
pub enum FixtureError {
    /// IO error reading fixture files
    #[error("Failed to read fixture file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),
}

/// Customers to register and orders to price in one run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Fixture {
    /// Customers to register
    #[serde(default)]
    pub customers: Vec<Customer>,

    /// Orders to price
    #[serde(default)]
    pub orders: Vec<Order>,
}

impl Fixture {
    /// Load a fixture from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, FixtureError> {
        let contents = fs::read_to_string(path)?;

        Self::from_yaml(&contents)
    }

    /// Parse a fixture from YAML text.
    ///
    /// # Errors
    ///
    /// Returns [`FixtureError::Yaml`] if the text is not a valid fixture.
    pub fn from_yaml(contents: &str) -> Result<Self, FixtureError> {
        Ok(serde_norway::from_str(contents)?)
    }

    /// The built-in sample batch: two customers (one of them invalid) and one
    /// order per built-in product kind.
    pub fn sample() -> Self {
        Self {
            customers: vec![
                Customer::new("Carlos", "carlos@petrobahia.com", 12345),
                Customer::new("Ana Paula", "ana@@petrobahia", 123),
            ],
            orders: vec![
                Order::new(
                    "TransLog",
                    ProductKind::DIESEL,
                    1200,
                    Some(Coupon::from("MEGA10")),
                ),
                Order::new("MoveMais", ProductKind::GASOLINE, 300, None),
                Order::new(
                    "EcoFrota",
                    ProductKind::ETHANOL,
                    50,
                    Some(Coupon::from("NOVO5")),
                ),
                Order::new(
                    "PetroPark",
                    ProductKind::LUBRICANT,
                    12,
                    Some(Coupon::from("LUB2")),
                ),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn parses_customers_and_orders() -> TestResult {
        let yaml = r"
customers:
  - name: Carlos
    email: carlos@petrobahia.com
    cnpj: 12345
orders:
  - customer: TransLog
    product: diesel
    quantity: 1200
    coupon: MEGA10
  - customer: MoveMais
    product: gasolina
    quantity: 300
";

        let fixture = Fixture::from_yaml(yaml)?;

        assert_eq!(fixture.customers.len(), 1);
        assert_eq!(fixture.orders.len(), 2);
        assert_eq!(
            fixture.orders.first().and_then(|order| order.coupon.clone()),
            Some(Coupon::from("MEGA10"))
        );
        assert_eq!(
            fixture.orders.get(1).map(|order| order.coupon.is_none()),
            Some(true)
        );

        Ok(())
    }

    #[test]
    fn sections_are_optional() -> TestResult {
        let fixture = Fixture::from_yaml("orders: []\n")?;

        assert!(fixture.customers.is_empty());
        assert!(fixture.orders.is_empty());

        Ok(())
    }

    #[test]
    fn negative_quantity_is_rejected() {
        let yaml = "orders:\n  - customer: X\n    product: diesel\n    quantity: -1\n";

        assert!(matches!(
            Fixture::from_yaml(yaml),
            Err(FixtureError::Yaml(_))
        ));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        assert!(matches!(
            Fixture::from_path("does/not/exist.yml"),
            Err(FixtureError::Io(_))
        ));
    }

    #[test]
    fn sample_covers_every_built_in_kind() {
        let sample = Fixture::sample();
        let kinds: Vec<&ProductKind> = sample.orders.iter().map(|order| &order.product).collect();

        assert_eq!(kinds.len(), ProductKind::BUILT_IN.len());

        for kind in &ProductKind::BUILT_IN {
            assert!(kinds.contains(&kind), "{kind}");
        }
    }
}

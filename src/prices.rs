//! Prices
//!
//! Base unit prices for the built-in product kinds, in BRL per unit.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::products::ProductKind;

/// Static table of base unit prices.
///
/// Strategies read their kind's price from the associated constants;
/// [`PriceTable::base_price`] looks one up by key.
#[derive(Debug, Clone, Copy, Default)]
pub struct PriceTable;

impl PriceTable {
    /// Diesel base price.
    pub const DIESEL: Decimal = dec!(3.99);

    /// Gasoline base price.
    pub const GASOLINE: Decimal = dec!(5.19);

    /// Ethanol base price.
    pub const ETHANOL: Decimal = dec!(3.59);

    /// Lubricant base price.
    pub const LUBRICANT: Decimal = dec!(25.00);

    /// Returns the base unit price of a kind, or `None` for kinds outside the table.
    #[must_use]
    pub fn base_price(kind: &ProductKind) -> Option<Decimal> {
        match kind.as_str() {
            "diesel" => Some(Self::DIESEL),
            "gasolina" => Some(Self::GASOLINE),
            "etanol" => Some(Self::ETHANOL),
            "lubrificante" => Some(Self::LUBRICANT),
            _ => None,
        }
    }
}

//! Receipt
//!
//! Tabular rendering of a processed order batch, amounts in BRL.

use std::io;

use rust_decimal::Decimal;
use rusty_money::{
    Money,
    iso::{self, Currency},
};
use tabled::{
    builder::Builder,
    settings::{
        Alignment, Color, Style,
        object::{Columns, Rows},
    },
};
use thiserror::Error;

use crate::orders::{OrderSummary, ProcessedOrder};

/// Errors that can occur when writing a receipt.
#[derive(Debug, Error)]
pub enum ReceiptError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// One receipt row.
#[derive(Debug, Clone, PartialEq)]
pub struct ReceiptLine {
    /// Customer name
    pub customer: String,

    /// Product key
    pub product: String,

    /// Units ordered
    pub quantity: u64,

    /// Coupon code, empty when none was given
    pub coupon: String,

    /// Price before the coupon
    pub base_price: Money<'static, Currency>,

    /// Price charged
    pub final_price: Money<'static, Currency>,
}

/// Receipt for a processed batch of orders.
#[derive(Debug, Clone)]
pub struct Receipt {
    lines: Vec<ReceiptLine>,
    total: Money<'static, Currency>,
}

impl Receipt {
    /// Build a receipt from a processed batch.
    ///
    /// Amounts keep their full decimal range, so any batch the processor
    /// priced can be rendered.
    #[must_use]
    pub fn from_summary(summary: &OrderSummary) -> Self {
        Self {
            lines: summary.lines().iter().map(receipt_line).collect(),
            total: brl(summary.total()),
        }
    }

    /// Receipt rows, in order.
    pub fn lines(&self) -> &[ReceiptLine] {
        &self.lines
    }

    /// Total charged across every order.
    pub fn total(&self) -> Money<'static, Currency> {
        self.total
    }

    /// Writes the receipt table and total.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    pub fn write_to(&self, mut out: impl io::Write) -> Result<(), ReceiptError> {
        let mut builder = Builder::default();

        builder.push_record([
            "",
            "Customer",
            "Product",
            "Quantity",
            "Coupon",
            "Base Price",
            "Final Price",
        ]);

        for (idx, line) in self.lines.iter().enumerate() {
            builder.push_record([
                format!("#{:<3}", idx + 1),
                line.customer.clone(),
                line.product.clone(),
                line.quantity.to_string(),
                line.coupon.clone(),
                line.base_price.to_string(),
                line.final_price.to_string(),
            ]);
        }

        let mut table = builder.build();

        table.with(Style::modern_rounded());
        table.modify(Rows::first(), Color::BOLD);
        table.modify(Columns::new(3..4), Alignment::right());
        table.modify(Columns::new(5..7), Alignment::right());

        writeln!(out, "\n{table}")?;
        writeln!(out, " \x1b[1mTotal:\x1b[0m {}\n", self.total)?;

        Ok(())
    }
}

fn receipt_line(processed: &ProcessedOrder) -> ReceiptLine {
    let order = &processed.order;

    ReceiptLine {
        customer: order.customer.clone(),
        product: order.product.to_string(),
        quantity: order.quantity,
        coupon: order
            .coupon
            .as_ref()
            .map_or_else(String::new, ToString::to_string),
        base_price: brl(processed.base_price),
        final_price: brl(processed.final_price),
    }
}

/// Convert a decimal amount to BRL, rounding to the nearest centavo.
fn brl(amount: Decimal) -> Money<'static, Currency> {
    Money::from_decimal(amount.round_dp(2), iso::BRL)
}

//! Order summary
//!
//! Terminal rendering of a cart with its totals, as shown on the checkout
//! and payment screens.

use std::io;

use rust_decimal::Decimal;
use rusty_money::iso::Currency;
use tabled::{
    builder::Builder,
    grid::config::HorizontalLine,
    settings::{
        Alignment, Color, Style, Theme,
        object::{Columns, Rows},
    },
};
use thiserror::Error;

use crate::{
    cart::{Cart, LineItem},
    checkout::ShippingInfo,
    config::StoreConfig,
    pricing::{CartTotals, cart_totals, format_money},
};

/// Errors that can occur when writing an order summary.
#[derive(Debug, Error)]
pub enum ReceiptError {
    /// Writing to the output failed.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Cart lines with their totals, ready to print.
#[derive(Debug, Clone)]
pub struct OrderSummary<'a> {
    lines: &'a [LineItem],
    totals: CartTotals,
    tax_percent: Decimal,
    currency: &'static Currency,
    shipping: Option<&'a ShippingInfo>,
}

impl<'a> OrderSummary<'a> {
    /// Summarises the cart under the given store settings.
    pub fn new(cart: &'a Cart, config: &StoreConfig) -> Self {
        Self {
            lines: cart.lines(),
            totals: cart_totals(cart, config),
            tax_percent: (config.tax_fraction() * Decimal::ONE_HUNDRED)
                .round_dp(2)
                .normalize(),
            currency: config.currency,
            shipping: None,
        }
    }

    /// Adds the shipping address block.
    #[must_use]
    pub fn with_shipping(mut self, info: &'a ShippingInfo) -> Self {
        self.shipping = Some(info);
        self
    }

    /// Totals shown under the table.
    pub fn totals(&self) -> CartTotals {
        self.totals
    }

    /// Writes the summary table and totals.
    ///
    /// # Errors
    ///
    /// Returns an error if the output cannot be written.
    pub fn write_to(&self, mut out: impl io::Write) -> Result<(), ReceiptError> {
        if let Some(info) = self.shipping {
            writeln!(out, "\nShip to:")?;
            writeln!(out, "  {}", info.full_name)?;
            writeln!(out, "  {}", info.address)?;
            writeln!(out, "  {}", info.locality_line())?;
            writeln!(out, "  {}", info.country)?;
        }

        if self.lines.is_empty() {
            writeln!(out, "\nYour cart is empty")?;
        } else {
            self.write_table(&mut out)?;
        }

        self.write_totals(&mut out)
    }

    fn write_table(&self, out: &mut impl io::Write) -> Result<(), ReceiptError> {
        let mut builder = Builder::default();

        builder.push_record(["", "Item", "Category", "Price", "Qty", "Line Total"]);

        for (idx, line) in self.lines.iter().enumerate() {
            let quantity = line.quantity.get();

            builder.push_record([
                format!("#{:<3}", idx + 1),
                line.product.name.clone(),
                line.product.category.clone(),
                format_money(line.product.price, self.currency),
                quantity.to_string(),
                format_money(line.line_total(), self.currency),
            ]);
        }

        let mut table = builder.build();
        let mut theme = Theme::from(Style::modern_rounded());

        theme.remove_horizontal_lines();
        theme.insert_horizontal_line(
            1,
            HorizontalLine::new(Some('─'), Some('┼'), Some('├'), Some('┤')),
        );

        table.with(theme);
        table.modify(Rows::first(), Color::BOLD);
        table.modify(Columns::new(3..6), Alignment::right());
        table.modify(Columns::new(2..3), color_dark_grey());

        writeln!(out, "\n{}", colorize_borders(&table.to_string()))?;

        Ok(())
    }

    fn write_totals(&self, out: &mut impl io::Write) -> Result<(), ReceiptError> {
        let shipping = if self.totals.shipping_is_free() {
            "FREE".to_string()
        } else {
            format_money(self.totals.shipping, self.currency)
        };

        let rows = [
            ("Subtotal:".to_string(), format_money(self.totals.subtotal, self.currency)),
            ("Shipping:".to_string(), shipping),
            (
                format!("Tax ({}%):", self.tax_percent),
                format_money(self.totals.tax, self.currency),
            ),
            ("Total:".to_string(), format_money(self.totals.total, self.currency)),
        ];

        let label_width = rows.iter().map(|(label, _)| label.len()).max().unwrap_or(0);
        let value_width = rows.iter().map(|(_, value)| value.chars().count()).max().unwrap_or(0);

        for (label, value) in rows {
            writeln!(out, " {label:>label_width$}  {value:>value_width$}")?;
        }

        writeln!(out)?;

        Ok(())
    }
}

const DARK_GREY: &str = "\x1b[90m";
const RESET: &str = "\x1b[0m";

/// Dims the table's box-drawing characters (U+2500..U+257F).
fn colorize_borders(table: &str) -> String {
    let mut out = String::with_capacity(table.len() * 2);
    let mut dimmed = false;

    for ch in table.chars() {
        let border = matches!(ch, '\u{2500}'..='\u{257F}');

        if border != dimmed {
            out.push_str(if border { DARK_GREY } else { RESET });
            dimmed = border;
        }

        out.push(ch);
    }

    if dimmed {
        out.push_str(RESET);
    }

    out
}

fn color_dark_grey() -> Color {
    Color::new(DARK_GREY, RESET)
}

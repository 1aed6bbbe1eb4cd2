//! Pricing

use rust_decimal::{Decimal, RoundingStrategy, prelude::ToPrimitive};
use rusty_money::{Money, iso::Currency};

use crate::{cart::LineItem, config::StoreConfig};

/// Decimal places used when presenting amounts (all supported currencies use cents).
const DISPLAY_DP: u32 = 2;

/// Totals for a set of cart lines.
///
/// Amounts are exact; rounding happens only in [`format_money`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CartTotals {
    /// Sum of `price × quantity` over every line.
    pub subtotal: Decimal,

    /// Shipping charge (zero above the free-shipping threshold).
    pub shipping: Decimal,

    /// Tax charged on the subtotal.
    pub tax: Decimal,

    /// `subtotal + shipping + tax`
    pub total: Decimal,
}

impl CartTotals {
    /// Whether shipping was waived.
    pub fn shipping_is_free(&self) -> bool {
        self.shipping.is_zero()
    }
}

/// Sum of `price × quantity` over the given lines, saturating at [`Decimal::MAX`].
pub fn subtotal<'a>(lines: impl IntoIterator<Item = &'a LineItem>) -> Decimal {
    lines
        .into_iter()
        .map(LineItem::line_total)
        .fold(Decimal::ZERO, Decimal::saturating_add)
}

/// Computes subtotal, shipping, tax and total for the given lines.
pub fn cart_totals<'a>(
    lines: impl IntoIterator<Item = &'a LineItem>,
    config: &StoreConfig,
) -> CartTotals {
    let subtotal = subtotal(lines);

    let shipping = if subtotal > config.free_shipping_threshold {
        Decimal::ZERO
    } else {
        config.flat_shipping_fee
    };

    let tax = subtotal.saturating_mul(config.tax_fraction());

    CartTotals {
        subtotal,
        shipping,
        tax,
        total: subtotal.saturating_add(shipping).saturating_add(tax),
    }
}

/// Formats an amount in the given currency, rounding half away from zero to cents.
pub fn format_money(amount: Decimal, currency: &'static Currency) -> String {
    let rounded = amount.round_dp_with_strategy(DISPLAY_DP, RoundingStrategy::MidpointAwayFromZero);

    match rounded
        .checked_mul(Decimal::ONE_HUNDRED)
        .and_then(|minor_units| minor_units.to_i64())
    {
        Some(minor_units) => format!("{}", Money::from_minor(minor_units, currency)),
        None => format!("{rounded} {}", currency.iso_alpha_code),
    }
}

#[cfg(test)]
mod tests {
    use std::num::NonZeroU32;

    use rusty_money::iso;

    use super::*;
    use crate::products::{Product, ProductId};

    fn line(id: i64, price: Decimal, quantity: u32) -> LineItem {
        LineItem {
            product: Product {
                id: ProductId::new(id),
                name: format!("Product {id}"),
                price,
                image: String::new(),
                category: "Test".to_string(),
                description: String::new(),
            },
            quantity: NonZeroU32::new(quantity).unwrap_or(NonZeroU32::MIN),
        }
    }

    #[test]
    fn subtotal_multiplies_price_by_quantity() {
        let lines = [
            line(1, Decimal::new(1050, 2), 2),
            line(2, Decimal::new(399, 2), 3),
        ];

        assert_eq!(subtotal(&lines), Decimal::new(3297, 2));
    }

    #[test]
    fn single_cheap_line_pays_flat_shipping() {
        let lines = [line(1, Decimal::new(4599, 2), 1)];

        let totals = cart_totals(&lines, &StoreConfig::default());

        assert_eq!(totals.subtotal, Decimal::new(4599, 2));
        assert_eq!(totals.shipping, Decimal::new(999, 2));
        assert_eq!(totals.tax.round_dp(4), Decimal::new(36792, 4));
        assert_eq!(totals.total.round_dp(2), Decimal::new(5966, 2));
        assert!(!totals.shipping_is_free());
    }

    #[test]
    fn subtotal_over_threshold_ships_free() {
        let lines = [line(2, Decimal::new(8999, 2), 2)];

        let totals = cart_totals(&lines, &StoreConfig::default());

        assert_eq!(totals.subtotal, Decimal::new(17998, 2));
        assert_eq!(totals.shipping, Decimal::ZERO);
        assert_eq!(totals.tax.round_dp(4), Decimal::new(143_984, 4));
        assert_eq!(totals.total.round_dp(2), Decimal::new(19438, 2));
        assert!(totals.shipping_is_free());
    }

    #[test]
    fn subtotal_exactly_at_threshold_still_pays_shipping() {
        let lines = [line(1, Decimal::new(100, 0), 1)];

        let totals = cart_totals(&lines, &StoreConfig::default());

        assert_eq!(totals.shipping, Decimal::new(999, 2));
    }

    #[test]
    fn empty_cart_is_charged_flat_shipping() {
        let lines: [LineItem; 0] = [];

        let totals = cart_totals(&lines, &StoreConfig::default());

        assert_eq!(totals.subtotal, Decimal::ZERO);
        assert_eq!(totals.shipping, Decimal::new(999, 2));
        assert_eq!(totals.total, Decimal::new(999, 2));
    }

    #[test]
    fn total_is_sum_of_parts() {
        let lines = [
            line(1, Decimal::new(3850, 2), 1),
            line(2, Decimal::new(5200, 2), 1),
        ];

        let totals = cart_totals(&lines, &StoreConfig::default());

        assert_eq!(totals.total, totals.subtotal + totals.shipping + totals.tax);
    }

    #[test]
    fn huge_cart_saturates_instead_of_overflowing() {
        let lines = [line(1, Decimal::MAX, 2), line(2, Decimal::MAX, 1)];

        let totals = cart_totals(&lines, &StoreConfig::default());

        assert_eq!(totals.subtotal, Decimal::MAX);
        assert_eq!(totals.shipping, Decimal::ZERO);
        assert_eq!(totals.total, Decimal::MAX);
    }

    #[test]
    fn format_money_falls_back_beyond_minor_unit_range() {
        assert_eq!(
            format_money(Decimal::MAX, iso::USD),
            "79228162514264337593543950335 USD"
        );
    }

    #[test]
    fn format_money_rounds_half_away_from_zero() {
        assert_eq!(format_money(Decimal::new(59_665, 3), iso::USD), "$59.67");
        assert_eq!(format_money(Decimal::new(36792, 4), iso::USD), "$3.68");
    }

    #[test]
    fn format_money_pads_cents() {
        assert_eq!(format_money(Decimal::new(125, 0), iso::USD), "$125.00");
        assert_eq!(format_money(Decimal::ZERO, iso::USD), "$0.00");
    }

    #[test]
    fn format_money_uses_currency_symbol() {
        assert_eq!(format_money(Decimal::new(1250, 2), iso::GBP), "£12.50");
    }
}

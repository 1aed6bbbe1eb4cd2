//! Product Fixtures

use decimal_percentage::Percentage;
use rust_decimal::Decimal;
use rusty_money::iso::{Currency, EUR, GBP, USD};
use serde::Deserialize;

use crate::{
    config::StoreConfig,
    fixtures::FixtureError,
    products::{Product, ProductId},
};

/// Product Fixture
#[derive(Debug, Clone, Deserialize)]
pub struct ProductFixture {
    /// Product identifier
    pub id: i64,

    /// Product name
    pub name: String,

    /// Product price (e.g., "45.99 USD")
    pub price: String,

    /// Category label
    pub category: String,

    /// Short description
    pub description: String,

    /// Image URL; the store fallback image is used when absent
    #[serde(default)]
    pub image: Option<String>,
}

impl ProductFixture {
    /// Build the product, checking its price is in the store currency.
    ///
    /// # Errors
    ///
    /// Returns an error if the price is malformed, negative, or in another currency.
    pub fn into_product(self, config: &StoreConfig) -> Result<Product, FixtureError> {
        let (price, currency) = parse_price(&self.price)?;

        if currency != config.currency {
            return Err(FixtureError::CurrencyMismatch(
                config.currency.iso_alpha_code.to_string(),
                currency.iso_alpha_code.to_string(),
            ));
        }

        if price.is_sign_negative() {
            return Err(FixtureError::InvalidPrice(self.price));
        }

        let image = self
            .image
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| config.fallback_image.clone());

        Ok(Product {
            id: ProductId::new(self.id),
            name: self.name,
            price,
            image,
            category: self.category,
            description: self.description,
        })
    }
}

/// Parse price string (e.g., "45.99 USD") into an amount and currency
///
/// # Errors
///
/// Returns an error if the string is not in the format "AMOUNT CURRENCY",
/// if the amount cannot be parsed as a decimal, or if the currency code
/// is not recognized.
pub fn parse_price(s: &str) -> Result<(Decimal, &'static Currency), FixtureError> {
    let parts: Vec<&str> = s.split_whitespace().collect();

    let [amount, currency_code] = parts.as_slice() else {
        return Err(FixtureError::InvalidPrice(format!(
            "Expected format 'AMOUNT CURRENCY', got: {s}"
        )));
    };

    let amount = amount
        .parse::<Decimal>()
        .map_err(|_err| FixtureError::InvalidPrice(s.to_string()))?;

    Ok((amount, parse_currency(currency_code)?))
}

/// Parse a currency code supported by the store
///
/// # Errors
///
/// Returns an error if the code is not recognized.
pub fn parse_currency(code: &str) -> Result<&'static Currency, FixtureError> {
    match code.trim() {
        "GBP" => Ok(GBP),
        "USD" => Ok(USD),
        "EUR" => Ok(EUR),
        other => Err(FixtureError::UnknownCurrency(other.to_string())),
    }
}

/// Parse percentage string (e.g., "8%" or "0.08") into a `Percentage`
///
/// Accepts two formats:
/// - Percentage format: "8%" for 8%
/// - Decimal format: "0.08" for 8%
///
/// # Errors
///
/// Returns an error if the string cannot be parsed.
pub fn parse_percentage(s: &str) -> Result<Percentage, FixtureError> {
    let trimmed = s.trim();

    if let Some(percent_str) = trimmed.strip_suffix('%') {
        let value = percent_str
            .trim()
            .parse::<f64>()
            .map_err(|_err| FixtureError::InvalidPercentage(s.to_string()))?;

        Ok(Percentage::from(value / 100.0))
    } else {
        let value = trimmed
            .parse::<f64>()
            .map_err(|_err| FixtureError::InvalidPercentage(s.to_string()))?;

        Ok(Percentage::from(value))
    }
}

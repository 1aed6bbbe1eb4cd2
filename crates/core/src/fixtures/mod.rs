//! Fixtures
//!
//! The store fixture is a YAML document with an optional `settings` block and
//! the list of products the catalog is seeded with.

use std::{fs, path::Path, time::Duration};

use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::{
    catalog::Catalog,
    config::{ConfigError, StoreConfig},
    fixtures::products::{ProductFixture, parse_currency, parse_percentage, parse_price},
    products::ProductId,
};

pub mod products;

/// Store fixture bundled with the crate (the six seeded products).
pub const DEMO_STORE: &str = include_str!("../../fixtures/store/demo.yml");

/// Fixture Parsing Errors
#[derive(Debug, Error)]
pub enum FixtureError {
    /// IO error reading fixture files
    #[error("Failed to read fixture file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// Invalid price format
    #[error("Invalid price format: {0}")]
    InvalidPrice(String),

    /// Invalid percentage format
    #[error("Invalid percentage format: {0}")]
    InvalidPercentage(String),

    /// Unknown currency code
    #[error("Unknown currency code: {0}")]
    UnknownCurrency(String),

    /// A price is not in the store currency
    #[error("Currency mismatch: expected {0}, found {1}")]
    CurrencyMismatch(String, String),

    /// Two products share an identifier
    #[error("Duplicate product id: {0}")]
    DuplicateProduct(ProductId),

    /// The fixture lists no products
    #[error("No products in fixture")]
    NoProducts,

    /// The resulting settings are inconsistent
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Store fixture document
#[derive(Debug, Clone, Deserialize)]
pub struct StoreFixture {
    /// Overrides for the default store settings
    #[serde(default)]
    pub settings: Option<SettingsFixture>,

    /// Seeded products, in listing order
    pub products: Vec<ProductFixture>,
}

/// Store settings overrides. Anything left out keeps its default.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SettingsFixture {
    /// Currency code (e.g., "USD")
    pub currency: Option<String>,

    /// Tax rate (e.g., "8%" or "0.08")
    pub tax_rate: Option<String>,

    /// Free shipping threshold (e.g., "100.00 USD")
    pub free_shipping_threshold: Option<String>,

    /// Flat shipping fee (e.g., "9.99 USD")
    pub flat_shipping_fee: Option<String>,

    /// Simulated payment delays
    pub payment: Option<PaymentFixture>,

    /// Image used for seller products without one
    pub fallback_image: Option<String>,

    /// Products above this identifier belong to the seller
    pub seller_id_floor: Option<i64>,
}

/// Payment delay overrides in milliseconds
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PaymentFixture {
    /// Processing delay
    pub processing_ms: Option<u64>,

    /// Confirmation delay
    pub confirmation_ms: Option<u64>,
}

impl StoreFixture {
    /// Parse the bundled demo store.
    ///
    /// # Errors
    ///
    /// Returns an error if the bundled YAML fails to parse.
    pub fn demo() -> Result<Self, FixtureError> {
        Self::from_yaml(DEMO_STORE)
    }

    /// Parse a store fixture from YAML.
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML is malformed.
    pub fn from_yaml(yaml: &str) -> Result<Self, FixtureError> {
        Ok(serde_norway::from_str(yaml)?)
    }

    /// Read and parse a store fixture file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, FixtureError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)?;

        debug!(path = %path.display(), "loading store fixture");

        Self::from_yaml(&contents)
    }

    /// Store settings with the fixture's overrides applied.
    ///
    /// # Errors
    ///
    /// Returns an error for malformed values, amounts in another currency, or
    /// settings that fail [`StoreConfig::validate`].
    pub fn config(&self) -> Result<StoreConfig, FixtureError> {
        let mut config = StoreConfig::default();

        let Some(settings) = &self.settings else {
            return Ok(config);
        };

        if let Some(code) = &settings.currency {
            config.currency = parse_currency(code)?;
        }

        if let Some(rate) = &settings.tax_rate {
            config.tax_rate = parse_percentage(rate)?;
        }

        if let Some(threshold) = &settings.free_shipping_threshold {
            config.free_shipping_threshold = parse_amount(threshold, &config)?;
        }

        if let Some(fee) = &settings.flat_shipping_fee {
            config.flat_shipping_fee = parse_amount(fee, &config)?;
        }

        if let Some(payment) = &settings.payment {
            if let Some(ms) = payment.processing_ms {
                config.payment.processing = Duration::from_millis(ms);
            }

            if let Some(ms) = payment.confirmation_ms {
                config.payment.confirmation = Duration::from_millis(ms);
            }
        }

        if let Some(image) = &settings.fallback_image {
            config.fallback_image.clone_from(image);
        }

        if let Some(floor) = settings.seller_id_floor {
            config.seller_id_floor = ProductId::new(floor);
        }

        config.validate()?;

        Ok(config)
    }

    /// Catalog seeded with the fixture's products, priced in `config`'s currency.
    ///
    /// # Errors
    ///
    /// Returns an error if there are no products, a price is malformed or in
    /// another currency, or two products share an identifier.
    pub fn catalog(&self, config: &StoreConfig) -> Result<Catalog, FixtureError> {
        if self.products.is_empty() {
            return Err(FixtureError::NoProducts);
        }

        let mut catalog = Catalog::default();

        for fixture in &self.products {
            let product = fixture.clone().into_product(config)?;

            if catalog.contains(product.id) {
                return Err(FixtureError::DuplicateProduct(product.id));
            }

            catalog.append(product);
        }

        Ok(catalog)
    }
}

fn parse_amount(s: &str, config: &StoreConfig) -> Result<Decimal, FixtureError> {
    let (amount, currency) = parse_price(s)?;

    if currency != config.currency {
        return Err(FixtureError::CurrencyMismatch(
            config.currency.iso_alpha_code.to_string(),
            currency.iso_alpha_code.to_string(),
        ));
    }

    Ok(amount)
}

#[cfg(test)]
mod tests {
    use rusty_money::iso;
    use testresult::TestResult;

    use super::*;

    #[test]
    fn demo_store_seeds_six_products() -> TestResult {
        let fixture = StoreFixture::demo()?;
        let config = fixture.config()?;
        let catalog = fixture.catalog(&config)?;

        let names: Vec<&str> = catalog.iter().map(|p| p.name.as_str()).collect();

        assert_eq!(
            names,
            vec![
                "Rose Glow Serum",
                "Pearl Earrings",
                "Lavender Dreams Perfume",
                "Hydration Boost Cream",
                "Designer Handbag",
                "Velvet Lipstick Set",
            ]
        );

        assert_eq!(
            catalog.require(ProductId::new(4))?.price,
            Decimal::new(3850, 2)
        );
        assert_eq!(catalog.require(ProductId::new(6))?.category, "Makeup");

        Ok(())
    }

    #[test]
    fn demo_store_settings_match_defaults() -> TestResult {
        let config = StoreFixture::demo()?.config()?;
        let defaults = StoreConfig::default();

        assert_eq!(config.currency, defaults.currency);
        assert_eq!(config.free_shipping_threshold, defaults.free_shipping_threshold);
        assert_eq!(config.flat_shipping_fee, defaults.flat_shipping_fee);
        assert_eq!(config.payment, defaults.payment);
        assert_eq!(
            config.tax_fraction().round_dp(6),
            defaults.tax_fraction().round_dp(6)
        );

        Ok(())
    }

    #[test]
    fn missing_settings_use_defaults() -> TestResult {
        let fixture = StoreFixture::from_yaml(
            "products:\n  - id: 1\n    name: Lip Balm\n    price: \"4.50 USD\"\n    category: Makeup\n    description: Balm\n",
        )?;

        let config = fixture.config()?;
        let catalog = fixture.catalog(&config)?;

        assert_eq!(config.flat_shipping_fee, Decimal::new(999, 2));
        assert_eq!(
            catalog.require(ProductId::new(1))?.image,
            config.fallback_image
        );

        Ok(())
    }

    #[test]
    fn settings_override_currency_and_fees() -> TestResult {
        let fixture = StoreFixture::from_yaml(
            "settings:\n  currency: GBP\n  flat_shipping_fee: \"4.99 GBP\"\n  payment:\n    processing_ms: 10\nproducts:\n  - id: 1\n    name: Lip Balm\n    price: \"4.50 GBP\"\n    category: Makeup\n    description: Balm\n",
        )?;

        let config = fixture.config()?;

        assert_eq!(config.currency, iso::GBP);
        assert_eq!(config.flat_shipping_fee, Decimal::new(499, 2));
        assert_eq!(config.payment.processing, Duration::from_millis(10));
        assert_eq!(config.payment.confirmation, Duration::from_secs(2));

        Ok(())
    }

    #[test]
    fn fee_in_other_currency_is_rejected() -> TestResult {
        let fixture = StoreFixture::from_yaml(
            "settings:\n  flat_shipping_fee: \"4.99 EUR\"\nproducts: []\n",
        )?;

        assert!(matches!(
            fixture.config(),
            Err(FixtureError::CurrencyMismatch(expected, found)) if expected == "USD" && found == "EUR"
        ));

        Ok(())
    }

    #[test]
    fn negative_fee_fails_config_validation() -> TestResult {
        let fixture = StoreFixture::from_yaml(
            "settings:\n  flat_shipping_fee: \"-1.00 USD\"\nproducts: []\n",
        )?;

        assert!(matches!(
            fixture.config(),
            Err(FixtureError::Config(ConfigError::NegativeAmount("flat_shipping_fee")))
        ));

        Ok(())
    }

    #[test]
    fn empty_product_list_is_rejected() -> TestResult {
        let fixture = StoreFixture::from_yaml("products: []\n")?;

        assert!(matches!(
            fixture.catalog(&StoreConfig::default()),
            Err(FixtureError::NoProducts)
        ));

        Ok(())
    }

    #[test]
    fn duplicate_product_ids_are_rejected() -> TestResult {
        let fixture = StoreFixture::from_yaml(
            "products:\n  - id: 1\n    name: A\n    price: \"1.00 USD\"\n    category: C\n    description: D\n  - id: 1\n    name: B\n    price: \"2.00 USD\"\n    category: C\n    description: D\n",
        )?;

        assert!(matches!(
            fixture.catalog(&StoreConfig::default()),
            Err(FixtureError::DuplicateProduct(id)) if id == ProductId::new(1)
        ));

        Ok(())
    }

    #[test]
    fn malformed_yaml_is_reported() {
        assert!(matches!(
            StoreFixture::from_yaml("products: {"),
            Err(FixtureError::Yaml(_))
        ));
    }
}

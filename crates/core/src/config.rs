//! Store configuration

use std::time::Duration;

use decimal_percentage::Percentage;
use rust_decimal::Decimal;
use rusty_money::iso::{self, Currency};
use thiserror::Error;

use crate::products::ProductId;

/// Image shown for seller products submitted without an image URL.
pub const FALLBACK_IMAGE_URL: &str =
    "https://images.unsplash.com/photo-1590393802688-ab3fd7c186f2?w=400";

/// Errors raised by an inconsistent store configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A monetary setting was negative (setting name).
    #[error("{0} must not be negative")]
    NegativeAmount(&'static str),

    /// The tax rate was outside 0% to 100%.
    #[error("Tax rate must be between 0% and 100%, got {0}")]
    TaxRateOutOfRange(Decimal),
}

/// Delays used by the simulated payment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaymentTimings {
    /// Time spent "processing" before the payment succeeds.
    pub processing: Duration,

    /// Time the success screen is shown before the order completes.
    pub confirmation: Duration,
}

impl Default for PaymentTimings {
    fn default() -> Self {
        Self {
            processing: Duration::from_millis(2_000),
            confirmation: Duration::from_millis(2_000),
        }
    }
}

/// Store-wide settings.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Currency every price is expressed in.
    pub currency: &'static Currency,

    /// Sales tax applied to the subtotal.
    pub tax_rate: Percentage,

    /// Subtotal above which shipping is free.
    pub free_shipping_threshold: Decimal,

    /// Shipping charged at or below the threshold.
    pub flat_shipping_fee: Decimal,

    /// Simulated payment delays.
    pub payment: PaymentTimings,

    /// Image used when a seller leaves the image URL blank.
    pub fallback_image: String,

    /// Products with an identifier above this belong to the seller.
    pub seller_id_floor: ProductId,
}

impl StoreConfig {
    /// Tax rate as a plain decimal fraction (8% is `0.08`).
    pub fn tax_fraction(&self) -> Decimal {
        // decimal_percentage does not expose the inner Decimal directly.
        self.tax_rate * Decimal::ONE
    }

    /// Checks the monetary settings are usable.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] for negative amounts or a tax rate outside 0–100%.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.free_shipping_threshold.is_sign_negative() {
            return Err(ConfigError::NegativeAmount("free_shipping_threshold"));
        }

        if self.flat_shipping_fee.is_sign_negative() {
            return Err(ConfigError::NegativeAmount("flat_shipping_fee"));
        }

        let tax = self.tax_fraction();

        if tax.is_sign_negative() || tax > Decimal::ONE {
            return Err(ConfigError::TaxRateOutOfRange(tax));
        }

        Ok(())
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            currency: iso::USD,
            tax_rate: Percentage::from(0.08),
            free_shipping_threshold: Decimal::new(100, 0),
            flat_shipping_fee: Decimal::new(999, 2),
            payment: PaymentTimings::default(),
            fallback_image: FALLBACK_IMAGE_URL.to_string(),
            seller_id_floor: ProductId::new(1_000),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_matches_store_constants() {
        let config = StoreConfig::default();

        assert_eq!(config.currency, iso::USD);
        assert_eq!(config.free_shipping_threshold, Decimal::new(100, 0));
        assert_eq!(config.flat_shipping_fee, Decimal::new(999, 2));
        assert_eq!(config.tax_fraction().round_dp(6), Decimal::new(8, 2));
        assert_eq!(config.payment.processing, Duration::from_secs(2));
        assert_eq!(config.payment.confirmation, Duration::from_secs(2));
        assert_eq!(config.seller_id_floor, ProductId::new(1_000));
    }

    #[test]
    fn default_config_is_valid() {
        assert_eq!(StoreConfig::default().validate(), Ok(()));
    }

    #[test]
    fn validate_rejects_negative_fee() {
        let config = StoreConfig {
            flat_shipping_fee: Decimal::new(-1, 0),
            ..StoreConfig::default()
        };

        assert_eq!(
            config.validate(),
            Err(ConfigError::NegativeAmount("flat_shipping_fee"))
        );
    }

    #[test]
    fn validate_rejects_negative_threshold() {
        let config = StoreConfig {
            free_shipping_threshold: Decimal::new(-100, 0),
            ..StoreConfig::default()
        };

        assert_eq!(
            config.validate(),
            Err(ConfigError::NegativeAmount("free_shipping_threshold"))
        );
    }

    #[test]
    fn validate_rejects_tax_above_one_hundred_percent() {
        let config = StoreConfig {
            tax_rate: Percentage::from(1.5),
            ..StoreConfig::default()
        };

        assert!(matches!(
            config.validate(),
            Err(ConfigError::TaxRateOutOfRange(_))
        ));
    }
}

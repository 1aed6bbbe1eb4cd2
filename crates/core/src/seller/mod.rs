//! Seller session
//!
//! There is no real authentication: any complete login or registration form
//! produces an account. A logged-in seller can list new products.

use jiff::Timestamp;
use rust_decimal::Decimal;
use thiserror::Error;

use crate::{
    config::StoreConfig,
    products::{Product, ProductId},
    validation::{ValidationError, require_fields},
};

/// Name used when the seller leaves it blank.
pub const DEFAULT_SELLER_NAME: &str = "Seller";

/// Store name used when the seller leaves it blank.
pub const DEFAULT_STORE_NAME: &str = "My Store";

/// Highest unit price a seller can list.
pub const MAX_PRICE: Decimal = Decimal::from_parts(1_000_000_000, 0, 0, false, 0);

/// Errors raised by seller operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SellerError {
    /// A required field was blank.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The price was not a decimal number between zero and [`MAX_PRICE`].
    #[error("Invalid price: {0}")]
    InvalidPrice(String),

    /// The operation needs a logged-in seller.
    #[error("No seller is logged in")]
    NotLoggedIn,
}

/// Login form mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoginMode {
    /// Existing seller: email and password.
    #[default]
    Login,

    /// New seller: also name and store name.
    Register,
}

impl LoginMode {
    /// The other mode.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Login => Self::Register,
            Self::Register => Self::Login,
        }
    }
}

/// Seller login or registration form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SellerLoginForm {
    /// Login or register
    pub mode: LoginMode,

    /// Seller name (register only)
    pub name: String,

    /// Email
    pub email: String,

    /// Password; never stored
    pub password: String,

    /// Store name (register only)
    pub store_name: String,
}

impl SellerLoginForm {
    /// Checks the fields the current mode requires.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingFields`] naming the blank fields.
    pub fn validate(&self) -> Result<(), ValidationError> {
        match self.mode {
            LoginMode::Login => require_fields([
                ("email", self.email.as_str()),
                ("password", self.password.as_str()),
            ]),
            LoginMode::Register => require_fields([
                ("name", self.name.as_str()),
                ("email", self.email.as_str()),
                ("password", self.password.as_str()),
                ("store_name", self.store_name.as_str()),
            ]),
        }
    }

    /// Fabricates the seller account. The password is dropped.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingFields`] if a required field is blank.
    pub fn into_account(self, now: Timestamp) -> Result<SellerAccount, ValidationError> {
        self.validate()?;

        Ok(SellerAccount {
            id: now.as_millisecond().to_string(),
            name: or_default(self.name, DEFAULT_SELLER_NAME),
            email: self.email,
            store_name: or_default(self.store_name, DEFAULT_STORE_NAME),
        })
    }
}

fn or_default(value: String, default: &str) -> String {
    if value.trim().is_empty() {
        default.to_string()
    } else {
        value
    }
}

/// Logged-in seller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SellerAccount {
    /// Account identifier (creation time in milliseconds)
    pub id: String,

    /// Seller name
    pub name: String,

    /// Contact email
    pub email: String,

    /// Store name shown on the dashboard
    pub store_name: String,
}

/// Seller add-product form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductForm {
    /// Product name
    pub name: String,

    /// Price as typed
    pub price: String,

    /// Category label
    pub category: String,

    /// Description
    pub description: String,

    /// Image URL (optional)
    pub image_url: String,
}

impl ProductForm {
    /// Builds the product to list, identified by `now` in milliseconds.
    ///
    /// # Errors
    ///
    /// Returns [`SellerError::Validation`] for blank required fields, or
    /// [`SellerError::InvalidPrice`] if the price is negative, above
    /// [`MAX_PRICE`], or not a number.
    pub fn into_product(self, now: Timestamp, config: &StoreConfig) -> Result<Product, SellerError> {
        require_fields([
            ("name", self.name.as_str()),
            ("price", self.price.as_str()),
            ("category", self.category.as_str()),
            ("description", self.description.as_str()),
        ])?;

        let price = parse_price(&self.price)?;

        let image = if self.image_url.trim().is_empty() {
            config.fallback_image.clone()
        } else {
            self.image_url
        };

        Ok(Product {
            id: ProductId::new(now.as_millisecond()),
            name: self.name,
            price,
            image,
            category: self.category,
            description: self.description,
        })
    }
}

fn parse_price(raw: &str) -> Result<Decimal, SellerError> {
    let price = raw
        .trim()
        .parse::<Decimal>()
        .map_err(|_err| SellerError::InvalidPrice(raw.to_string()))?;

    if price.is_sign_negative() || price > MAX_PRICE {
        return Err(SellerError::InvalidPrice(raw.to_string()));
    }

    Ok(price)
}

/// Dashboard summary of the seller's products.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DashboardStats {
    /// Number of seller products
    pub product_count: usize,

    /// Sum of their unit prices
    pub total_value: Decimal,

    /// Completed sales (always zero: orders are not recorded)
    pub sales: u32,
}

impl<'a> FromIterator<&'a Product> for DashboardStats {
    fn from_iter<I: IntoIterator<Item = &'a Product>>(iter: I) -> Self {
        iter.into_iter().fold(Self::default(), |stats, product| Self {
            product_count: stats.product_count.saturating_add(1),
            total_value: stats.total_value.saturating_add(product.price),
            sales: stats.sales,
        })
    }
}

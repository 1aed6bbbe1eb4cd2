//! Products

use std::fmt;

use rust_decimal::Decimal;

/// Product identifier.
///
/// Seeded products use small sequential identifiers; products added by a
/// seller are identified by their creation time in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct ProductId(i64);

impl ProductId {
    /// Creates a product identifier from its raw value.
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Returns the raw identifier value.
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl From<i64> for ProductId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Product
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    /// Product identifier
    pub id: ProductId,

    /// Product name
    pub name: String,

    /// Unit price in the store currency
    pub price: Decimal,

    /// Image reference (opaque URL)
    pub image: String,

    /// Category label
    pub category: String,

    /// Short description
    pub description: String,
}

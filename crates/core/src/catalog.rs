//! Catalog

use thiserror::Error;
use tracing::info;

use crate::{
    config::StoreConfig,
    fixtures::{FixtureError, StoreFixture},
    products::{Product, ProductId},
};

/// Errors related to catalog lookups.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// No product has the given identifier.
    #[error("Product {0} not found in catalog")]
    UnknownProduct(ProductId),
}

/// Purchasable products, in the order they were listed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Creates a catalog holding the given products.
    pub fn with_products(products: impl Into<Vec<Product>>) -> Self {
        Self {
            products: products.into(),
        }
    }

    /// Catalog seeded with the bundled demo products.
    ///
    /// # Errors
    ///
    /// Returns a [`FixtureError`] if the bundled fixture does not load.
    pub fn seeded(config: &StoreConfig) -> Result<Self, FixtureError> {
        StoreFixture::demo()?.catalog(config)
    }

    /// Looks up a product by identifier.
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|product| product.id == id)
    }

    /// Looks up a product by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::UnknownProduct`] if nothing matches.
    pub fn require(&self, id: ProductId) -> Result<&Product, CatalogError> {
        self.get(id).ok_or(CatalogError::UnknownProduct(id))
    }

    /// Whether a product with this identifier is listed.
    pub fn contains(&self, id: ProductId) -> bool {
        self.get(id).is_some()
    }

    /// Appends a product, returning the identifier it was stored under.
    ///
    /// Identifiers stay unique: a clashing identifier is replaced with one
    /// greater than the largest identifier currently listed.
    pub fn append(&mut self, mut product: Product) -> ProductId {
        if self.contains(product.id) {
            let next = self
                .products
                .iter()
                .map(|listed| listed.id.get())
                .max()
                .unwrap_or_default()
                .saturating_add(1);

            product.id = ProductId::new(next);
        }

        let id = product.id;

        info!(product_id = %id, name = %product.name, "listed product");

        self.products.push(product);

        id
    }

    /// Products whose identifier is above `floor` (added by the seller).
    pub fn seller_products(&self, floor: ProductId) -> impl Iterator<Item = &Product> {
        self.products.iter().filter(move |product| product.id > floor)
    }

    /// Iterate over all products.
    pub fn iter(&self) -> std::slice::Iter<'_, Product> {
        self.products.iter()
    }

    /// Number of listed products.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Product;
    type IntoIter = std::slice::Iter<'a, Product>;

    fn into_iter(self) -> Self::IntoIter {
        self.products.iter()
    }
}

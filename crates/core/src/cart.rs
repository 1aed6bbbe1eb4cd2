//! Cart

use std::num::NonZeroU32;

use rust_decimal::Decimal;
use tracing::debug;

use crate::products::{Product, ProductId};

/// A cart entry pairing a product with a quantity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineItem {
    /// Product snapshot taken when the line was created.
    pub product: Product,

    /// Units of the product in the cart.
    pub quantity: NonZeroU32,
}

impl LineItem {
    /// Identifier of the product on this line.
    pub fn id(&self) -> ProductId {
        self.product.id
    }

    /// `price × quantity`, saturating at [`Decimal::MAX`].
    pub fn line_total(&self) -> Decimal {
        self.product
            .price
            .saturating_mul(Decimal::from(self.quantity.get()))
    }
}

/// Shopping cart.
///
/// Holds at most one line per product identifier, in the order products were
/// first added.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cart {
    lines: Vec<LineItem>,
}

impl Cart {
    /// Creates an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one unit of `product`, creating its line if needed.
    pub fn add(&mut self, product: &Product) {
        if let Some(line) = self.line_mut(product.id) {
            line.quantity = line.quantity.saturating_add(1);

            debug!(product_id = %product.id, quantity = line.quantity.get(), "incremented cart line");

            return;
        }

        self.lines.push(LineItem {
            product: product.clone(),
            quantity: NonZeroU32::MIN,
        });

        debug!(product_id = %product.id, "added cart line");
    }

    /// Replaces the quantity of the line for `id`. Unknown identifiers are ignored.
    pub fn update(&mut self, id: ProductId, quantity: NonZeroU32) {
        if let Some(line) = self.line_mut(id) {
            line.quantity = quantity;

            debug!(product_id = %id, quantity = quantity.get(), "updated cart line");
        }
    }

    /// Adds one unit to the line for `id`.
    pub fn increment(&mut self, id: ProductId) {
        if let Some(quantity) = self.quantity(id) {
            self.update(id, quantity.saturating_add(1));
        }
    }

    /// Removes one unit from the line for `id`, never going below one.
    pub fn decrement(&mut self, id: ProductId) {
        if let Some(quantity) = self.quantity(id) {
            let lowered = NonZeroU32::new(quantity.get() - 1).unwrap_or(NonZeroU32::MIN);

            self.update(id, lowered);
        }
    }

    /// Deletes the line for `id`. Unknown identifiers are ignored.
    pub fn remove(&mut self, id: ProductId) {
        let before = self.lines.len();

        self.lines.retain(|line| line.id() != id);

        if self.lines.len() != before {
            debug!(product_id = %id, "removed cart line");
        }
    }

    /// Empties the cart.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Cart lines in insertion order.
    pub fn lines(&self) -> &[LineItem] {
        &self.lines
    }

    /// Iterate over the cart lines.
    pub fn iter(&self) -> std::slice::Iter<'_, LineItem> {
        self.lines.iter()
    }

    /// Quantity currently held for `id`.
    pub fn quantity(&self, id: ProductId) -> Option<NonZeroU32> {
        self.lines
            .iter()
            .find(|line| line.id() == id)
            .map(|line| line.quantity)
    }

    /// Total number of units across all lines.
    pub fn item_count(&self) -> u32 {
        self.lines
            .iter()
            .fold(0_u32, |sum, line| sum.saturating_add(line.quantity.get()))
    }

    /// Number of distinct lines.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Whether the cart has no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    fn line_mut(&mut self, id: ProductId) -> Option<&mut LineItem> {
        self.lines.iter_mut().find(|line| line.id() == id)
    }
}

impl<'a> IntoIterator for &'a Cart {
    type Item = &'a LineItem;
    type IntoIter = std::slice::Iter<'a, LineItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.lines.iter()
    }
}

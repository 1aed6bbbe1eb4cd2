//! Pretty Shop
//!
//! In-memory storefront engine: a product catalog, a shopping cart with
//! totals, a shop → checkout → payment flow with a simulated payment, and a
//! mock seller session that can add products to the catalog.

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod config;
pub mod fixtures;
pub mod payment;
pub mod prelude;
pub mod pricing;
pub mod products;
pub mod receipt;
pub mod seller;
pub mod storefront;
pub mod validation;

//! Pretty Shop prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    cart::{Cart, LineItem},
    catalog::{Catalog, CatalogError},
    checkout::{CheckoutFlow, FlowAction, FlowError, PaymentStage, ShippingInfo, View},
    config::{ConfigError, PaymentTimings, StoreConfig},
    fixtures::{FixtureError, StoreFixture},
    payment::{
        PaymentForm, PaymentPhase, PaymentSimulation, PaymentTicket, format_card_number,
        format_cvv, format_expiry,
    },
    pricing::{CartTotals, cart_totals, format_money},
    products::{Product, ProductId},
    receipt::{OrderSummary, ReceiptError},
    seller::{
        DashboardStats, LoginMode, ProductForm, SellerAccount, SellerError, SellerLoginForm,
    },
    storefront::{Screen, Storefront},
    validation::ValidationError,
};

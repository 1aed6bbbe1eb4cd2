//! Storefront
//!
//! Application state for one shopping session. Every shopper and seller
//! action is a method here; the UI only renders what these accessors return.

use std::num::NonZeroU32;

use jiff::Timestamp;
use tracing::info;

use crate::{
    cart::Cart,
    catalog::{Catalog, CatalogError},
    checkout::{CheckoutFlow, FlowError, PaymentStage, ShippingInfo, View},
    config::StoreConfig,
    fixtures::{FixtureError, StoreFixture},
    payment::{PaymentForm, PaymentTicket},
    pricing::{CartTotals, cart_totals},
    products::{Product, ProductId},
    seller::{DashboardStats, ProductForm, SellerAccount, SellerError, SellerLoginForm},
    validation::ValidationError,
};

/// What the UI should render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Seller dashboard; replaces the shopper UI while a seller is logged in.
    Dashboard,

    /// Product listing.
    Shop,

    /// Shipping form.
    Checkout,

    /// Payment form and its stages.
    Payment(PaymentStage),
}

impl From<View> for Screen {
    fn from(view: View) -> Self {
        match view {
            View::Shop => Self::Shop,
            View::Checkout => Self::Checkout,
            View::Payment(stage) => Self::Payment(stage),
        }
    }
}

/// Session state: catalog, cart, checkout flow and seller session.
#[derive(Debug, Clone)]
pub struct Storefront {
    config: StoreConfig,
    catalog: Catalog,
    cart: Cart,
    flow: CheckoutFlow,
    seller: Option<SellerAccount>,
    seller_login_open: bool,
}

impl Storefront {
    /// Creates a session over the given catalog with an empty cart.
    pub fn new(config: StoreConfig, catalog: Catalog) -> Self {
        Self {
            config,
            catalog,
            cart: Cart::new(),
            flow: CheckoutFlow::default(),
            seller: None,
            seller_login_open: false,
        }
    }

    /// Creates a session from a store fixture.
    ///
    /// # Errors
    ///
    /// Returns a [`FixtureError`] if the settings or products are invalid.
    pub fn from_fixture(fixture: &StoreFixture) -> Result<Self, FixtureError> {
        let config = fixture.config()?;
        let catalog = fixture.catalog(&config)?;

        Ok(Self::new(config, catalog))
    }

    /// Creates a session seeded with the bundled demo store.
    ///
    /// # Errors
    ///
    /// Returns a [`FixtureError`] if the bundled fixture does not load.
    pub fn demo() -> Result<Self, FixtureError> {
        Self::from_fixture(&StoreFixture::demo()?)
    }

    /// Store settings.
    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Listed products.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Shopping cart.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Checkout flow state.
    pub fn flow(&self) -> &CheckoutFlow {
        &self.flow
    }

    /// Shopper view, ignoring the seller session.
    pub fn view(&self) -> View {
        self.flow.view()
    }

    /// Screen to render.
    pub fn screen(&self) -> Screen {
        if self.seller.is_some() {
            Screen::Dashboard
        } else {
            self.flow.view().into()
        }
    }

    /// Shipping details for the current checkout.
    pub fn shipping(&self) -> Option<&ShippingInfo> {
        self.flow.shipping()
    }

    /// Logged-in seller.
    pub fn seller(&self) -> Option<&SellerAccount> {
        self.seller.as_ref()
    }

    /// Cart totals, recomputed on every call.
    pub fn totals(&self) -> CartTotals {
        cart_totals(&self.cart, &self.config)
    }

    /// Units across all cart lines (the header badge).
    pub fn cart_item_count(&self) -> u32 {
        self.cart.item_count()
    }

    /// Adds one unit of a listed product to the cart.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::UnknownProduct`] if the product is not listed.
    pub fn add_to_cart(&mut self, id: ProductId) -> Result<(), CatalogError> {
        let product = self.catalog.require(id)?;

        self.cart.add(product);

        Ok(())
    }

    /// Sets the quantity of a cart line.
    pub fn update_quantity(&mut self, id: ProductId, quantity: NonZeroU32) {
        self.cart.update(id, quantity);
    }

    /// Adds one unit to a cart line.
    pub fn increment_quantity(&mut self, id: ProductId) {
        self.cart.increment(id);
    }

    /// Removes one unit from a cart line, keeping at least one.
    pub fn decrement_quantity(&mut self, id: ProductId) {
        self.cart.decrement(id);
    }

    /// Removes a cart line.
    pub fn remove_from_cart(&mut self, id: ProductId) {
        self.cart.remove(id);
    }

    /// Whether the cart panel is open.
    pub fn is_cart_open(&self) -> bool {
        self.flow.is_cart_open()
    }

    /// Opens the cart panel.
    pub fn open_cart(&mut self) {
        self.flow.open_cart();
    }

    /// Closes the cart panel.
    pub fn close_cart(&mut self) {
        self.flow.close_cart();
    }

    /// Moves from the cart to the shipping form.
    ///
    /// # Errors
    ///
    /// Returns a [`FlowError`] outside the shop view.
    pub fn begin_checkout(&mut self) -> Result<(), FlowError> {
        self.flow.begin_checkout()
    }

    /// Goes back one step in the checkout.
    ///
    /// # Errors
    ///
    /// Returns a [`FlowError`] from the shop view or while a payment runs.
    pub fn back(&mut self) -> Result<(), FlowError> {
        self.flow.back()
    }

    /// Submits the shipping form.
    ///
    /// # Errors
    ///
    /// Returns a [`FlowError`] for blank fields or outside the checkout view.
    pub fn submit_shipping(&mut self, info: ShippingInfo) -> Result<(), FlowError> {
        self.flow.submit_shipping(info)
    }

    /// Submits the payment form; the returned ticket is due after its delay.
    ///
    /// # Errors
    ///
    /// Returns a [`FlowError`] for blank fields, a running payment, or outside
    /// the payment view.
    pub fn submit_payment(&mut self, form: &PaymentForm) -> Result<PaymentTicket, FlowError> {
        self.flow.submit_payment(form, &self.config.payment)
    }

    /// Delivers a processing ticket; returns the confirmation ticket if current.
    pub fn payment_processed(&mut self, ticket: PaymentTicket) -> Option<PaymentTicket> {
        self.flow.payment_processed(ticket, &self.config.payment)
    }

    /// Delivers a confirmation ticket. When current, the order completes: the
    /// cart is emptied and the shop is shown again.
    pub fn complete_payment(&mut self, ticket: PaymentTicket) -> bool {
        if !self.flow.complete_payment(ticket) {
            return false;
        }

        let items = self.cart.item_count();
        self.cart.clear();

        info!(items, "order completed");

        true
    }

    /// Abandons a payment that is still processing.
    ///
    /// # Errors
    ///
    /// Returns a [`FlowError`] unless a payment is processing.
    pub fn cancel_payment(&mut self) -> Result<(), FlowError> {
        self.flow.cancel_payment()
    }

    /// Whether the seller login modal is open.
    pub fn is_seller_login_open(&self) -> bool {
        self.seller_login_open
    }

    /// Opens the seller login modal.
    pub fn open_seller_login(&mut self) {
        self.seller_login_open = true;
    }

    /// Closes the seller login modal.
    pub fn close_seller_login(&mut self) {
        self.seller_login_open = false;
    }

    /// Logs a seller in and closes the login modal.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingFields`] if the form is incomplete.
    pub fn login_seller(
        &mut self,
        form: SellerLoginForm,
        now: Timestamp,
    ) -> Result<&SellerAccount, ValidationError> {
        let account = form.into_account(now)?;

        info!(seller_id = %account.id, store = %account.store_name, "seller logged in");

        self.seller_login_open = false;

        Ok(self.seller.insert(account))
    }

    /// Logs the seller out, returning to the shop.
    pub fn logout_seller(&mut self) {
        if let Some(account) = self.seller.take() {
            info!(seller_id = %account.id, "seller logged out");
        }

        self.flow.reset();
    }

    /// Lists a product from the seller form, returning its identifier.
    ///
    /// # Errors
    ///
    /// Returns [`SellerError::NotLoggedIn`] without a seller session, or the
    /// form's validation and price errors. The catalog is unchanged on error.
    pub fn add_product(&mut self, form: ProductForm, now: Timestamp) -> Result<ProductId, SellerError> {
        if self.seller.is_none() {
            return Err(SellerError::NotLoggedIn);
        }

        let product = form.into_product(now, &self.config)?;

        Ok(self.catalog.append(product))
    }

    /// Products listed by the seller.
    pub fn seller_products(&self) -> impl Iterator<Item = &Product> {
        self.catalog.seller_products(self.config.seller_id_floor)
    }

    /// Dashboard summary of the seller's products.
    pub fn dashboard_stats(&self) -> DashboardStats {
        self.seller_products().collect()
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use rust_decimal::Decimal;
    use testresult::TestResult;

    use super::*;
    use crate::config::PaymentTimings;

    fn store() -> TestResult<Storefront> {
        let config = StoreConfig {
            payment: PaymentTimings {
                processing: Duration::from_millis(1),
                confirmation: Duration::from_millis(1),
            },
            ..StoreConfig::default()
        };
        let catalog = Catalog::seeded(&config)?;

        Ok(Storefront::new(config, catalog))
    }

    fn now() -> Timestamp {
        Timestamp::from_millisecond(1_767_015_104_000).unwrap_or(Timestamp::UNIX_EPOCH)
    }

    fn seller_form() -> SellerLoginForm {
        SellerLoginForm {
            email: "seller@example.com".to_string(),
            password: "pw".to_string(),
            ..SellerLoginForm::default()
        }
    }

    fn scarf(price: &str) -> ProductForm {
        ProductForm {
            name: "Silk Scarf".to_string(),
            price: price.to_string(),
            category: "Accessories".to_string(),
            description: "Hand-rolled silk".to_string(),
            image_url: String::new(),
        }
    }

    #[test]
    fn demo_store_starts_on_shop_with_empty_cart() -> TestResult {
        let store = Storefront::demo()?;

        assert_eq!(store.screen(), Screen::Shop);
        assert_eq!(store.catalog().len(), 6);
        assert!(store.cart().is_empty());
        assert!(!store.is_cart_open());
        assert!(!store.is_seller_login_open());

        Ok(())
    }

    #[test]
    fn add_to_cart_rejects_unlisted_product() -> TestResult {
        let mut store = store()?;

        assert_eq!(
            store.add_to_cart(ProductId::new(99)),
            Err(CatalogError::UnknownProduct(ProductId::new(99)))
        );
        assert!(store.cart().is_empty());

        Ok(())
    }

    #[test]
    fn item_count_sums_quantities() -> TestResult {
        let mut store = store()?;

        store.add_to_cart(ProductId::new(1))?;
        store.add_to_cart(ProductId::new(1))?;
        store.add_to_cart(ProductId::new(2))?;

        assert_eq!(store.cart_item_count(), 3);
        assert_eq!(store.cart().line_count(), 2);

        Ok(())
    }

    #[test]
    fn totals_follow_cart() -> TestResult {
        let mut store = store()?;

        store.add_to_cart(ProductId::new(1))?;

        let totals = store.totals();

        assert_eq!(totals.subtotal, Decimal::new(4599, 2));
        assert_eq!(totals.shipping, Decimal::new(999, 2));

        store.update_quantity(ProductId::new(1), NonZeroU32::new(3).ok_or("zero")?);

        assert!(store.totals().shipping_is_free());

        Ok(())
    }

    #[test]
    fn login_switches_to_dashboard_and_closes_modal() -> TestResult {
        let mut store = store()?;
        store.open_seller_login();

        let account = store.login_seller(seller_form(), now())?;

        assert_eq!(account.store_name, "My Store");
        assert!(!store.is_seller_login_open());
        assert_eq!(store.screen(), Screen::Dashboard);

        store.logout_seller();

        assert_eq!(store.screen(), Screen::Shop);
        assert!(store.seller().is_none());

        Ok(())
    }

    #[test]
    fn failed_login_keeps_modal_open() -> TestResult {
        let mut store = store()?;
        store.open_seller_login();

        let result = store.login_seller(SellerLoginForm::default(), now());

        assert!(result.is_err());
        assert!(store.is_seller_login_open());
        assert_eq!(store.screen(), Screen::Shop);

        Ok(())
    }

    #[test]
    fn add_product_requires_seller() -> TestResult {
        let mut store = store()?;

        assert_eq!(
            store.add_product(scarf("20.00"), now()),
            Err(SellerError::NotLoggedIn)
        );
        assert_eq!(store.catalog().len(), 6);

        Ok(())
    }

    #[test]
    fn added_product_is_listed_and_counted() -> TestResult {
        let mut store = store()?;
        store.login_seller(seller_form(), now())?;

        let id = store.add_product(scarf("20.00"), now())?;

        assert_eq!(id, ProductId::new(1_767_015_104_000));
        assert_eq!(store.catalog().len(), 7);

        let stats = store.dashboard_stats();

        assert_eq!(stats.product_count, 1);
        assert_eq!(stats.total_value, Decimal::new(2000, 2));
        assert_eq!(stats.sales, 0);

        Ok(())
    }

    #[test]
    fn same_millisecond_products_get_distinct_ids() -> TestResult {
        let mut store = store()?;
        store.login_seller(seller_form(), now())?;

        let first = store.add_product(scarf("20.00"), now())?;
        let second = store.add_product(scarf("30.00"), now())?;

        assert_ne!(first, second);
        assert_eq!(store.dashboard_stats().product_count, 2);

        Ok(())
    }

    #[test]
    fn malformed_price_leaves_catalog_unchanged() -> TestResult {
        let mut store = store()?;
        store.login_seller(seller_form(), now())?;

        let result = store.add_product(scarf("abc"), now());

        assert_eq!(result, Err(SellerError::InvalidPrice("abc".to_string())));
        assert_eq!(store.catalog().len(), 6);

        Ok(())
    }

    #[test]
    fn seeded_products_are_not_seller_products() -> TestResult {
        let store = store()?;

        assert_eq!(store.seller_products().count(), 0);
        assert_eq!(store.dashboard_stats(), DashboardStats::default());

        Ok(())
    }

    #[test]
    fn logout_abandons_checkout() -> TestResult {
        let mut store = store()?;
        store.add_to_cart(ProductId::new(1))?;
        store.begin_checkout()?;

        store.login_seller(seller_form(), now())?;
        store.logout_seller();

        assert_eq!(store.view(), View::Shop);
        assert_eq!(store.cart_item_count(), 1);

        Ok(())
    }
}

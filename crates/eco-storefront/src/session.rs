//! Storefront session state machine.

use crate::checkout::{
    AutoApprove, CheckoutGate, CheckoutOutcome, CheckoutStatus, MSG_EMPTY_CART, MSG_PAYMENT_FAILED,
    MSG_SUCCESS, MSG_VALIDATION_FAILED,
};
use crate::config::StorefrontConfig;
use crate::persist::CartStore;
use eco_commerce::prelude::*;
use eco_data::{FetchClient, FetchError};
use eco_kv::KeyValueStore;
use std::sync::Arc;

/// A user intent from the rendering surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    /// Change the category selector.
    SelectCategory(CategoryFilter),
    /// Change the price band selector.
    SelectPriceBand(PriceBand),
    /// Copy the identified catalog product into the cart.
    AddToCart(ProductId),
    /// Remove the cart entry at the given position.
    RemoveFromCart(usize),
}

/// A storefront session: the single state value the UI renders from.
///
/// The persisted cart is restored on construction; the catalog is fetched
/// once by [`Session::init`]. All cart mutations write through to the
/// store.
pub struct Session {
    catalog: Vec<Product>,
    cart: Cart,
    filter: FilterState,
    checkout: CheckoutStatus,
    catalog_loaded: bool,
    cart_store: CartStore,
    gate: Arc<dyn CheckoutGate>,
    client: FetchClient,
    config: StorefrontConfig,
}

impl Session {
    /// Create a session over the given store, restoring any persisted cart.
    pub fn new(config: StorefrontConfig, store: Arc<dyn KeyValueStore>) -> Self {
        let cart_store = CartStore::new(store);
        let cart = cart_store.load();

        Self {
            catalog: Vec::new(),
            cart,
            filter: FilterState::default(),
            checkout: CheckoutStatus::default(),
            catalog_loaded: false,
            cart_store,
            gate: Arc::new(AutoApprove),
            client: FetchClient::new(),
            config,
        }
    }

    /// Replace the checkout gate.
    pub fn with_gate(mut self, gate: Arc<dyn CheckoutGate>) -> Self {
        self.gate = gate;
        self
    }

    /// Seed the catalog without fetching (fixtures and tests).
    ///
    /// A seeded session treats the catalog as already loaded.
    pub fn with_catalog(mut self, catalog: Vec<Product>) -> Self {
        self.catalog = catalog;
        self.catalog_loaded = true;
        self
    }

    /// Fetch the catalog. Runs at most once per session; a failure leaves
    /// the catalog as it was and is only logged.
    pub async fn init(&mut self) {
        if self.catalog_loaded {
            return;
        }
        self.catalog_loaded = true;

        match self.fetch_catalog().await {
            Ok(products) => {
                tracing::info!(count = products.len(), "catalog loaded");
                self.catalog = products;
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to load catalog, continuing with an empty one");
            }
        }
    }

    async fn fetch_catalog(&self) -> Result<Vec<Product>, FetchError> {
        self.client
            .get(&self.config.catalog_url)
            .send()
            .await?
            .error_for_status()?
            .json()
    }

    /// The full catalog, in feed order.
    pub fn catalog(&self) -> &[Product] {
        &self.catalog
    }

    /// The cart.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Current filter selections.
    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    /// Current checkout status.
    pub fn checkout_status(&self) -> &CheckoutStatus {
        &self.checkout
    }

    /// Catalog entries matching the current filters, in catalog order.
    ///
    /// Derived on every call; filter changes never refetch the catalog.
    pub fn visible_products(&self) -> Vec<Product> {
        filter_products(&self.catalog, &self.filter)
    }

    /// Apply a synchronous user intent.
    pub fn apply(&mut self, intent: Intent) {
        match intent {
            Intent::SelectCategory(category) => self.filter.category = category,
            Intent::SelectPriceBand(band) => self.filter.price_band = band,
            Intent::AddToCart(id) => self.add_to_cart(id),
            Intent::RemoveFromCart(index) => self.remove_from_cart(index),
        }
    }

    fn add_to_cart(&mut self, id: ProductId) {
        let Some(product) = self.catalog.iter().find(|p| p.id == id) else {
            tracing::debug!(%id, "add-to-cart for unknown product ignored");
            return;
        };

        self.cart.add(product.clone());
        self.cart_store.save(&self.cart);
    }

    fn remove_from_cart(&mut self, index: usize) {
        self.cart.remove(index);
        self.cart_store.save(&self.cart);
    }

    /// Run the two-stage checkout pipeline.
    ///
    /// At most one attempt is in flight; the `loading` flag both disables
    /// the finalize trigger in the view and rejects re-entry here. On
    /// success the cart and its persisted value are cleared; on refusal the
    /// cart is left untouched and the user may retry.
    pub async fn checkout(&mut self) -> CheckoutOutcome {
        if self.checkout.loading {
            return CheckoutOutcome::AlreadyInFlight;
        }

        if self.cart.is_empty() {
            self.checkout.message = MSG_EMPTY_CART.to_string();
            return CheckoutOutcome::EmptyCart;
        }

        self.checkout.message.clear();
        self.checkout.loading = true;

        tracing::debug!("checkout: validating order");
        tokio::time::sleep(self.config.validation_delay).await;
        if !self.gate.validate_order(&self.cart).await {
            self.checkout.message = MSG_VALIDATION_FAILED.to_string();
            self.checkout.loading = false;
            return CheckoutOutcome::ValidationFailed;
        }

        tracing::debug!("checkout: processing payment");
        tokio::time::sleep(self.config.payment_delay).await;
        if !self.gate.authorize_payment(self.cart.total()).await {
            self.checkout.message = MSG_PAYMENT_FAILED.to_string();
            self.checkout.loading = false;
            return CheckoutOutcome::PaymentFailed;
        }

        self.checkout.message = MSG_SUCCESS.to_string();
        self.cart.clear();
        self.cart_store.clear();
        self.checkout.loading = false;
        tracing::info!("checkout completed");
        CheckoutOutcome::Completed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eco_kv::MemoryStore;

    fn sample_catalog() -> Vec<Product> {
        vec![
            Product::new(1, "Caneca de bambu", Money::from_reais(49.9), Category::Casa),
            Product::new(2, "Livro de receitas", Money::from_reais(400.0), Category::Livros),
        ]
    }

    fn session() -> Session {
        let store: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
        Session::new(StorefrontConfig::default(), store).with_catalog(sample_catalog())
    }

    #[test]
    fn test_filter_intents_update_selection() {
        let mut session = session();

        session.apply(Intent::SelectCategory(CategoryFilter::Only(Category::Casa)));
        session.apply(Intent::SelectPriceBand(PriceBand::UpTo100));

        assert_eq!(session.filter().category, CategoryFilter::Only(Category::Casa));
        assert_eq!(session.filter().price_band, PriceBand::UpTo100);
        assert_eq!(session.visible_products().len(), 1);
    }

    #[test]
    fn test_add_to_cart_copies_catalog_product() {
        let mut session = session();
        session.apply(Intent::AddToCart(ProductId::new(1)));

        assert_eq!(session.cart().len(), 1);
        assert_eq!(session.cart().items()[0].name, "Caneca de bambu");
    }

    #[test]
    fn test_add_unknown_product_is_noop() {
        let mut session = session();
        session.apply(Intent::AddToCart(ProductId::new(99)));
        assert!(session.cart().is_empty());
    }

    #[test]
    fn test_remove_out_of_bounds_is_noop() {
        let mut session = session();
        session.apply(Intent::AddToCart(ProductId::new(1)));
        session.apply(Intent::RemoveFromCart(5));
        assert_eq!(session.cart().len(), 1);
    }

    #[tokio::test]
    async fn test_checkout_rejected_while_in_flight() {
        let mut session = session();
        session.apply(Intent::AddToCart(ProductId::new(1)));
        session.checkout.loading = true;

        let outcome = session.checkout().await;
        assert_eq!(outcome, CheckoutOutcome::AlreadyInFlight);
        assert_eq!(session.cart().len(), 1);
        assert!(session.checkout_status().message.is_empty());
    }

    #[tokio::test]
    async fn test_empty_cart_checkout_never_loads() {
        let mut session = session();

        let outcome = session.checkout().await;
        assert_eq!(outcome, CheckoutOutcome::EmptyCart);
        assert!(!session.checkout_status().loading);
        assert_eq!(session.checkout_status().message, MSG_EMPTY_CART);
    }
}

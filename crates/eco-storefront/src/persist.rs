//! Cart persistence adapter.
//!
//! A single key holds the serialized cart, written through on every
//! mutation — the same contract the original storefront had with browser
//! storage. Nothing here is fatal: a missing or unreadable value degrades
//! to the empty cart, and write failures are logged and swallowed so the
//! in-memory session stays usable.

use eco_commerce::Cart;
use eco_kv::{KeyValueStore, KvError};
use std::sync::Arc;

/// Storage key for the serialized cart.
pub const CART_KEY: &str = "carrinho";

/// Write-through persistence for the cart collection.
pub struct CartStore {
    store: Arc<dyn KeyValueStore>,
}

impl CartStore {
    /// Create an adapter over the given store.
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Read the persisted cart.
    ///
    /// A missing key or an unreadable value yields the empty cart.
    pub fn load(&self) -> Cart {
        match self.store.get(CART_KEY) {
            Ok(Some(raw)) => match serde_json::from_str(&raw) {
                Ok(cart) => cart,
                Err(e) => {
                    tracing::warn!(error = %e, "stored cart is unreadable, starting empty");
                    Cart::new()
                }
            },
            Ok(None) => Cart::new(),
            Err(e) => {
                tracing::warn!(error = %e, "failed to read stored cart, starting empty");
                Cart::new()
            }
        }
    }

    /// Persist the full cart, overwriting the previous value.
    pub fn save(&self, cart: &Cart) {
        let result = serde_json::to_string(cart)
            .map_err(KvError::from)
            .and_then(|raw| self.store.set(CART_KEY, &raw));

        if let Err(e) = result {
            tracing::warn!(error = %e, "failed to persist cart");
        }
    }

    /// Remove the persisted cart entirely.
    pub fn clear(&self) {
        if let Err(e) = self.store.delete(CART_KEY) {
            tracing::warn!(error = %e, "failed to clear persisted cart");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eco_commerce::prelude::*;
    use eco_kv::MemoryStore;

    fn cart_store() -> (CartStore, Arc<MemoryStore>) {
        let store = Arc::new(MemoryStore::new());
        (CartStore::new(store.clone()), store)
    }

    fn sample_cart() -> Cart {
        let mut cart = Cart::new();
        cart.add(Product::new(1, "Caneca", Money::new(4990), Category::Casa));
        cart
    }

    #[test]
    fn test_load_missing_is_empty() {
        let (cart_store, _) = cart_store();
        assert!(cart_store.load().is_empty());
    }

    #[test]
    fn test_save_then_load_round_trips() {
        let (cart_store, _) = cart_store();
        let cart = sample_cart();

        cart_store.save(&cart);
        assert_eq!(cart_store.load(), cart);
    }

    #[test]
    fn test_load_unreadable_is_empty() {
        let (cart_store, store) = cart_store();
        store.set(CART_KEY, "not json").unwrap();

        assert!(cart_store.load().is_empty());
    }

    #[test]
    fn test_clear_removes_key() {
        let (cart_store, store) = cart_store();
        cart_store.save(&sample_cart());

        cart_store.clear();
        assert!(store.get(CART_KEY).unwrap().is_none());
    }

    #[test]
    fn test_save_overwrites_previous_value() {
        let (cart_store, store) = cart_store();
        let mut cart = sample_cart();
        cart_store.save(&cart);

        cart.clear();
        cart_store.save(&cart);
        assert_eq!(store.get(CART_KEY).unwrap().as_deref(), Some("[]"));
    }
}

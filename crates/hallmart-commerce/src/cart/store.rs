//! Persistent cart and wishlist store.
//!
//! The single source of truth for what the shopper is buying. Mutations are
//! synchronous; every mutation re-serializes the affected collection to the
//! session store so a restart within the same session recovers exact state.

use crate::cart::{Cart, Wishlist};
use crate::catalog::Product;
use crate::error::CommerceError;
use crate::ids::ProductId;
use hallmart_cache::{Cache, SessionId, Store};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

/// Session-store key for the cart snapshot.
pub const CART_KEY: &str = "hallmart_cart";
/// Session-store key for the wishlist snapshot.
pub const WISHLIST_KEY: &str = "hallmart_wishlist";

/// Owns the cart and wishlist and keeps them persisted.
///
/// Restored once at startup; missing or malformed snapshots fall back to
/// empty collections rather than failing. Mutations apply in memory first and
/// then persist, so a store failure never leaves a half-applied mutation
/// visible.
pub struct CartStore<S: Store> {
    cart: Cart,
    wishlist: Wishlist,
    cache: Cache<S>,
    session: SessionId,
}

impl<S: Store> CartStore<S> {
    /// Restore state from the session store, generating a fresh session id.
    pub fn restore(store: S) -> Self {
        Self::restore_with_session(store, SessionId::generate())
    }

    /// Restore state from the session store under a known session id.
    pub fn restore_with_session(store: S, session: SessionId) -> Self {
        let cache = Cache::new(store);
        let cart = load_or_default(&cache, CART_KEY, &session);
        let wishlist = load_or_default(&cache, WISHLIST_KEY, &session);
        debug!(session = %session, "cart store restored");
        Self {
            cart,
            wishlist,
            cache,
            session,
        }
    }

    /// The current cart.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// The current wishlist.
    pub fn wishlist(&self) -> &Wishlist {
        &self.wishlist
    }

    /// The shopper session this store belongs to.
    pub fn session(&self) -> &SessionId {
        &self.session
    }

    /// Add a product to the cart, merging into an existing line by id.
    pub fn add_to_cart(&mut self, product: &Product, quantity: i64) -> Result<(), CommerceError> {
        self.cart.add(product, quantity);
        self.persist_cart()
    }

    /// Remove a cart line by product id; absent ids are a no-op.
    pub fn remove_from_cart(&mut self, product_id: &ProductId) -> Result<(), CommerceError> {
        if self.cart.remove(product_id) {
            self.persist_cart()?;
        }
        Ok(())
    }

    /// Set a line's quantity; zero or less removes the line, absent ids are a
    /// no-op.
    pub fn update_quantity(
        &mut self,
        product_id: &ProductId,
        quantity: i64,
    ) -> Result<(), CommerceError> {
        if quantity <= 0 {
            return self.remove_from_cart(product_id);
        }
        if self.cart.set_quantity(product_id, quantity) {
            self.persist_cart()?;
        }
        Ok(())
    }

    /// Empty the cart and erase its persisted snapshot.
    pub fn clear_cart(&mut self) -> Result<(), CommerceError> {
        self.cart.clear();
        self.cache.delete(CART_KEY)?;
        debug!(session = %self.session, "cart cleared");
        Ok(())
    }

    /// Add a product to the wishlist; already-saved ids are a no-op.
    pub fn add_to_wishlist(&mut self, product: &Product) -> Result<(), CommerceError> {
        if self.wishlist.add(product) {
            self.persist_wishlist()?;
        }
        Ok(())
    }

    /// Remove a wishlist entry by product id; absent ids are a no-op.
    pub fn remove_from_wishlist(&mut self, product_id: &ProductId) -> Result<(), CommerceError> {
        if self.wishlist.remove(product_id) {
            self.persist_wishlist()?;
        }
        Ok(())
    }

    /// Borrow the session cache, for collaborators that stash their own
    /// transient state (e.g. the transfer hand-off payload).
    pub fn cache(&self) -> &Cache<S> {
        &self.cache
    }

    fn persist_cart(&self) -> Result<(), CommerceError> {
        self.cache.set(CART_KEY, &self.cart)?;
        Ok(())
    }

    fn persist_wishlist(&self) -> Result<(), CommerceError> {
        self.cache.set(WISHLIST_KEY, &self.wishlist)?;
        Ok(())
    }
}

/// Read a snapshot, treating absent or malformed data as empty.
fn load_or_default<S: Store, T: DeserializeOwned + Default>(
    cache: &Cache<S>,
    key: &str,
    session: &SessionId,
) -> T {
    match cache.get::<T>(key) {
        Ok(Some(value)) => value,
        Ok(None) => T::default(),
        Err(e) => {
            warn!(session = %session, key, error = %e, "discarding unreadable snapshot");
            T::default()
        }
    }
}

//! Storefront domain logic for Hallmart, a campus marketplace.
//!
//! This crate covers everything between "add to cart" and "order placed":
//!
//! - **Catalog**: product and account read models
//! - **Cart**: cart, wishlist, session-persistent store, pricing
//! - **Checkout**: delivery form, validation, order assembly, submission
//!
//! # Example
//!
//! ```rust,ignore
//! use hallmart_commerce::prelude::*;
//!
//! // Restore the shopper's cart from the session store.
//! let mut store = CartStore::restore(session_store);
//! store.add_to_cart(&product, 2)?;
//!
//! // Price the cart, redeeming referral credit if eligible.
//! let totals = quote(store.cart(), Some(&account), true);
//! println!("Total: {}", totals.total.display());
//!
//! // Validate the form and submit a cash-on-delivery order.
//! match prepare_checkout(store.cart(), &form, Some(&account), true)? {
//!     PreparedCheckout::Cod(request) => {
//!         let mut submitter = OrderSubmitter::new(HttpOrderGateway::new(order_url));
//!         submitter.submit(&request, &mut store).await;
//!     }
//!     PreparedCheckout::Transfer(handoff) => handoff.stash(store.cache())?,
//! }
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;
pub mod checkout;

pub use error::CommerceError;
pub use ids::*;
pub use money::Money;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::money::Money;

    // Catalog
    pub use crate::catalog::{Account, Product, CATEGORIES};

    // Cart
    pub use crate::cart::{
        quote, referral_eligible, Cart, CartLine, CartStore, CartTotals, LineTotal, Wishlist,
        REFERRAL_MIN_SUBTOTAL,
    };

    // Checkout
    pub use crate::checkout::{
        prepare_checkout, CheckoutForm, Hall, HttpOrderGateway, Location, OrderConfirmation,
        OrderGateway, OrderRequest, OrderSubmitter, PaymentMethod, PreparedCheckout, SubmitFailure,
        SubmitState, TransferHandoff, ValidationError, COD_MAX_AMOUNT,
    };
}

//! Shopping cart module.
//!
//! Contains the cart and wishlist collections, the persistent store that owns
//! them, and pricing.

mod cart;
mod pricing;
mod store;

pub use cart::{Cart, CartLine, Wishlist};
pub use pricing::{quote, referral_eligible, CartTotals, LineTotal, REFERRAL_MIN_SUBTOTAL};
pub use store::{CartStore, CART_KEY, WISHLIST_KEY};

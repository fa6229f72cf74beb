//! Catalog read models.
//!
//! Products and accounts are fetched elsewhere; the core only consumes them.

mod account;
mod product;

pub use account::Account;
pub use product::{Product, CATEGORIES};

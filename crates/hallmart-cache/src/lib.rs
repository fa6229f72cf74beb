//! Session-scoped Key-Value persistence for the Hallmart storefront.
//!
//! Provides a simple, ergonomic API for persisting storefront state (cart,
//! wishlist, checkout hand-off) in a session-scoped Key-Value store with
//! automatic JSON serialization.
//!
//! # Example
//!
//! ```rust
//! use hallmart_cache::{Cache, MemoryStore};
//! use serde::{Serialize, Deserialize};
//!
//! #[derive(Serialize, Deserialize)]
//! struct Snapshot {
//!     items: Vec<String>,
//! }
//!
//! let cache = Cache::new(MemoryStore::new());
//!
//! // Store a value
//! cache.set("hallmart_cart", &Snapshot { items: vec![] })?;
//!
//! // Retrieve a value
//! let snapshot: Option<Snapshot> = cache.get("hallmart_cart")?;
//!
//! // Delete a value
//! cache.delete("hallmart_cart")?;
//! # Ok::<(), hallmart_cache::CacheError>(())
//! ```

mod error;
mod kv;
mod session;

pub use error::CacheError;
pub use kv::{Cache, MemoryStore, Store};
pub use session::SessionId;

#[cfg(target_arch = "wasm32")]
pub use kv::SpinStore;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{Cache, CacheError, MemoryStore, SessionId, Store};
}

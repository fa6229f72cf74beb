//! Commerce error types.

use crate::checkout::ValidationError;
use thiserror::Error;

/// Errors that can occur in storefront operations.
#[derive(Error, Debug)]
pub enum CommerceError {
    /// Checkout entered with an empty cart; callers redirect to the cart view.
    #[error("Cart is empty")]
    EmptyCart,

    /// A checkout precondition failed.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Session store failure.
    #[error("Cache error: {0}")]
    Cache(String),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<hallmart_cache::CacheError> for CommerceError {
    fn from(e: hallmart_cache::CacheError) -> Self {
        CommerceError::Cache(e.to_string())
    }
}

impl From<serde_json::Error> for CommerceError {
    fn from(e: serde_json::Error) -> Self {
        CommerceError::Serialization(e.to_string())
    }
}

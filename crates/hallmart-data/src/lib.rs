//! Outbound HTTP plumbing for the Hallmart order API.
//!
//! The storefront talks to a single JSON-over-POST endpoint. This crate wraps
//! the transport behind a small client so the commerce layer can classify
//! outcomes without caring how bytes moved.
//!
//! # Example
//!
//! ```rust,ignore
//! use hallmart_data::ApiClient;
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct CreateOrder<'a> {
//!     action: &'a str,
//! }
//!
//! let client = ApiClient::new("https://orders.example.com/exec");
//! let response = client.post_json(&CreateOrder { action: "createOrder" }).await?;
//! if response.is_success() {
//!     // parse the envelope
//! }
//! ```

mod error;
mod response;

pub use error::FetchError;
pub use response::Response;

/// Content type used for order submissions.
///
/// The order endpoint only accepts simple (non-preflighted) requests, so the
/// JSON body is posted as `text/plain`.
pub const ORDER_CONTENT_TYPE: &str = "text/plain";

/// Client for the order-processing endpoint.
///
/// Bound to one configured URL; every call is a POST with a JSON body.
#[derive(Debug, Clone)]
pub struct ApiClient {
    url: String,
    content_type: String,
}

impl ApiClient {
    /// Create a client for the given endpoint URL.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            content_type: ORDER_CONTENT_TYPE.to_string(),
        }
    }

    /// Override the content type sent with the body.
    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = content_type.into();
        self
    }

    /// The configured endpoint URL.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// POST a JSON-serialized payload and return the raw response.
    ///
    /// Status classification is left to the caller; any status code comes back
    /// as `Ok(Response)`, while transport failures come back as
    /// [`FetchError::Network`]. No deadline is applied here; callers own the
    /// timeout.
    pub async fn post_json<T: serde::Serialize>(&self, payload: &T) -> Result<Response, FetchError> {
        let body = serde_json::to_vec(payload)?;
        self.post_bytes(body).await
    }

    #[cfg(target_arch = "wasm32")]
    async fn post_bytes(&self, body: Vec<u8>) -> Result<Response, FetchError> {
        use spin_sdk::http::{Method, Request};

        let request = Request::builder()
            .method(Method::Post)
            .uri(&self.url)
            .header("Content-Type", self.content_type.as_str())
            .body(body)
            .build();

        let response: spin_sdk::http::Response = spin_sdk::http::send(request)
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        let status = *response.status();
        let body = response.into_body();
        Ok(Response::new(status, body))
    }

    #[cfg(not(target_arch = "wasm32"))]
    async fn post_bytes(&self, _body: Vec<u8>) -> Result<Response, FetchError> {
        // No outbound HTTP outside the wasm runtime. Reporting a transport
        // failure keeps native callers honest; a faked 200 would look like a
        // placed order.
        Err(FetchError::Network(format!(
            "no HTTP transport available for {} outside the wasm runtime",
            self.url
        )))
    }
}

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{ApiClient, FetchError, Response};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_url() {
        let client = ApiClient::new("https://orders.example.com/exec");
        assert_eq!(client.url(), "https://orders.example.com/exec");
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[tokio::test]
    async fn test_native_transport_reports_network_error() {
        let client = ApiClient::new("https://orders.example.com/exec");
        let result = client.post_json(&serde_json::json!({})).await;
        assert!(matches!(result, Err(FetchError::Network(_))));
    }
}

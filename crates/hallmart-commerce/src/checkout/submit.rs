//! Order submission.
//!
//! Drives one order request through the gateway under a hard time ceiling,
//! classifies the outcome, and clears the cart on success.

use crate::cart::CartStore;
use crate::checkout::{EmailStatus, OrderRequest, OrderResponse};
use crate::ids::OrderId;
use crate::money::Money;
use async_trait::async_trait;
use hallmart_cache::Store;
use hallmart_data::{ApiClient, FetchError, Response};
use std::time::Duration;
use thiserror::Error;
use tracing::{info, warn};

/// Hard ceiling on a single submission attempt.
pub const SUBMIT_TIMEOUT: Duration = Duration::from_secs(45);

/// Transport seam for the order endpoint, mockable in tests.
#[async_trait]
pub trait OrderGateway: Send + Sync {
    /// Deliver one order request and return the raw response.
    async fn send(&self, request: &OrderRequest) -> Result<Response, FetchError>;
}

/// The real gateway: posts the order as JSON to the configured endpoint.
pub struct HttpOrderGateway {
    client: ApiClient,
}

impl HttpOrderGateway {
    /// Point the gateway at an order endpoint URL.
    pub fn new(order_url: impl Into<String>) -> Self {
        Self {
            client: ApiClient::new(order_url),
        }
    }
}

#[async_trait]
impl OrderGateway for HttpOrderGateway {
    async fn send(&self, request: &OrderRequest) -> Result<Response, FetchError> {
        self.client.post_json(request).await
    }
}

/// Why a submission did not produce an order.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SubmitFailure {
    /// No answer within [`SUBMIT_TIMEOUT`]. The order may still have been
    /// created server-side, so the shopper is told to check before retrying.
    #[error("The order is taking too long to confirm. Please check your orders before retrying.")]
    Timeout,
    /// The request never reached the endpoint.
    #[error("Could not reach the order service: {0}")]
    Network(String),
    /// The endpoint answered but refused or garbled the order.
    #[error("{0}")]
    Server(String),
}

/// Delivery promise shown on the confirmation screen.
pub const DELIVERY_WINDOW: &str = "2-4 working days";

/// A successfully placed order.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderConfirmation {
    /// Server-assigned order id.
    pub order_id: OrderId,
    /// Amount due on delivery.
    pub total: Money,
    /// Referral credit consumed by this order.
    pub referral_discount: Money,
    /// Confirmation email outcomes, when the server reported them.
    pub email_status: Option<EmailStatus>,
}

impl OrderConfirmation {
    /// A caveat for the confirmation screen when an email did not go out.
    pub fn email_warning(&self) -> Option<&'static str> {
        match self.email_status {
            Some(status) if !status.all_sent() => {
                Some("Your order is confirmed, but a confirmation email could not be sent.")
            }
            _ => None,
        }
    }
}

/// Where a submission currently stands.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SubmitState {
    /// Nothing in flight.
    #[default]
    Idle,
    /// A request is in flight; further submits are ignored.
    Submitting,
    /// The order was placed and the cart cleared.
    Succeeded(OrderConfirmation),
    /// The attempt failed; the cart is untouched and submit may be retried.
    Failed(SubmitFailure),
}

impl SubmitState {
    /// Whether a new submission may start.
    pub fn can_submit(&self) -> bool {
        !matches!(self, SubmitState::Submitting)
    }
}

/// Owns the submission state machine for one checkout.
pub struct OrderSubmitter<G: OrderGateway> {
    gateway: G,
    state: SubmitState,
}

impl<G: OrderGateway> OrderSubmitter<G> {
    /// Create an idle submitter over a gateway.
    pub fn new(gateway: G) -> Self {
        Self {
            gateway,
            state: SubmitState::Idle,
        }
    }

    /// Current submission state.
    pub fn state(&self) -> &SubmitState {
        &self.state
    }

    /// Submit an order.
    ///
    /// A no-op while a request is already in flight. On success the cart is
    /// cleared; on any failure the cart is left untouched so the shopper can
    /// retry.
    pub async fn submit<S: Store>(
        &mut self,
        request: &OrderRequest,
        cart_store: &mut CartStore<S>,
    ) -> &SubmitState {
        if !self.state.can_submit() {
            return &self.state;
        }
        self.state = SubmitState::Submitting;

        let outcome = tokio::time::timeout(SUBMIT_TIMEOUT, self.gateway.send(request)).await;
        self.state = match outcome {
            Err(_elapsed) => {
                warn!(timeout_secs = SUBMIT_TIMEOUT.as_secs(), "order submission timed out");
                SubmitState::Failed(SubmitFailure::Timeout)
            }
            Ok(Err(fetch)) => SubmitState::Failed(classify_fetch_error(fetch)),
            Ok(Ok(response)) => match interpret_response(request, response) {
                Ok(confirmation) => {
                    info!(order_id = %confirmation.order_id, "order placed");
                    if let Some(warning) = confirmation.email_warning() {
                        warn!(order_id = %confirmation.order_id, "{}", warning);
                    }
                    if let Err(e) = cart_store.clear_cart() {
                        // The order exists; a stale snapshot is the lesser harm.
                        warn!(error = %e, "order placed but cart snapshot not cleared");
                    }
                    SubmitState::Succeeded(confirmation)
                }
                Err(failure) => SubmitState::Failed(failure),
            },
        };

        &self.state
    }
}

fn classify_fetch_error(error: FetchError) -> SubmitFailure {
    match error {
        FetchError::Network(message) => SubmitFailure::Network(message),
        FetchError::Timeout => SubmitFailure::Timeout,
        other => SubmitFailure::Server(other.to_string()),
    }
}

fn interpret_response(
    request: &OrderRequest,
    response: Response,
) -> Result<OrderConfirmation, SubmitFailure> {
    if !response.is_success() {
        return Err(SubmitFailure::Server(format!(
            "Server error ({}): {}",
            response.status,
            response.text_lossy()
        )));
    }

    let parsed: OrderResponse = response
        .json()
        .map_err(|e| SubmitFailure::Server(format!("Unreadable order response: {e}")))?;

    if !parsed.success {
        return Err(SubmitFailure::Server(
            parsed
                .error
                .unwrap_or_else(|| "Server failed to process order".to_string()),
        ));
    }

    let order_id = parsed.order_id.ok_or_else(|| {
        SubmitFailure::Server("Order accepted but no order id returned".to_string())
    })?;

    Ok(OrderConfirmation {
        order_id,
        total: request.subtotal,
        referral_discount: request.referral_discount,
        email_status: parsed.email_status,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::Cart;
    use crate::catalog::Product;
    use crate::checkout::{CheckoutForm, Hall, Location, PaymentMethod};
    use crate::ids::ProductId;
    use hallmart_cache::MemoryStore;

    struct NeverCalledGateway;

    #[async_trait]
    impl OrderGateway for NeverCalledGateway {
        async fn send(&self, _request: &OrderRequest) -> Result<Response, FetchError> {
            panic!("gateway must not be called");
        }
    }

    fn request() -> OrderRequest {
        let mut cart = Cart::new();
        cart.add(
            &Product {
                id: ProductId::new("p1"),
                name: "Jollof Pack".to_string(),
                price: Money::new(6000),
                discount_price: None,
                images: vec![],
                category: "Food".to_string(),
                stock: 10,
                vendor_id: None,
            },
            2,
        );
        let form = CheckoutForm {
            name: "Ada O.".to_string(),
            email: "ada@example.com".to_string(),
            phone: "0801".to_string(),
            location_type: Some(Location::Hall(Hall::Kuti)),
            address: String::new(),
            room_no: "B1".to_string(),
            payment_method: Some(PaymentMethod::Cod),
        };
        let totals = crate::cart::quote(&cart, None, false);
        OrderRequest::from_checkout(
            &cart,
            &form,
            &totals,
            None,
            Location::Hall(Hall::Kuti),
            PaymentMethod::Cod,
        )
    }

    #[tokio::test]
    async fn test_submit_is_noop_while_in_flight() {
        let mut submitter = OrderSubmitter::new(NeverCalledGateway);
        submitter.state = SubmitState::Submitting;

        let mut cart_store = CartStore::restore(MemoryStore::new());
        let state = submitter.submit(&request(), &mut cart_store).await;
        assert_eq!(state, &SubmitState::Submitting);
    }

    #[test]
    fn test_fetch_error_classification() {
        assert_eq!(
            classify_fetch_error(FetchError::Network("dns failure".to_string())),
            SubmitFailure::Network("dns failure".to_string())
        );
        assert_eq!(
            classify_fetch_error(FetchError::Timeout),
            SubmitFailure::Timeout
        );
        assert!(matches!(
            classify_fetch_error(FetchError::Parse("bad utf-8".to_string())),
            SubmitFailure::Server(_)
        ));
    }

    #[test]
    fn test_non_2xx_reports_status_and_body() {
        let response = Response::new(503, b"upstream down".to_vec());
        let err = interpret_response(&request(), response).unwrap_err();
        assert_eq!(
            err,
            SubmitFailure::Server("Server error (503): upstream down".to_string())
        );
    }

    #[test]
    fn test_success_false_uses_server_message() {
        let response = Response::new(
            200,
            br#"{"success":false,"error":"Vendor is closed"}"#.to_vec(),
        );
        let err = interpret_response(&request(), response).unwrap_err();
        assert_eq!(err, SubmitFailure::Server("Vendor is closed".to_string()));
    }

    #[test]
    fn test_success_false_without_message_gets_default() {
        let response = Response::new(200, br#"{"success":false}"#.to_vec());
        let err = interpret_response(&request(), response).unwrap_err();
        assert_eq!(
            err,
            SubmitFailure::Server("Server failed to process order".to_string())
        );
    }

    #[test]
    fn test_success_without_order_id_is_server_failure() {
        let response = Response::new(200, br#"{"success":true}"#.to_vec());
        assert!(matches!(
            interpret_response(&request(), response),
            Err(SubmitFailure::Server(_))
        ));
    }

    #[test]
    fn test_unparseable_body_is_server_failure() {
        let response = Response::new(200, b"<html>proxy error</html>".to_vec());
        assert!(matches!(
            interpret_response(&request(), response),
            Err(SubmitFailure::Server(_))
        ));
    }

    #[test]
    fn test_confirmation_email_warning() {
        let response = Response::new(
            200,
            br#"{"success":true,"orderId":"ORD-9","emailStatus":{"customerEmailSent":false,"adminEmailSent":true}}"#
                .to_vec(),
        );
        let confirmation = interpret_response(&request(), response).unwrap();
        assert_eq!(confirmation.order_id, OrderId::new("ORD-9"));
        assert!(confirmation.email_warning().is_some());
    }

    #[test]
    fn test_confirmation_no_warning_when_all_sent() {
        let response = Response::new(
            200,
            br#"{"success":true,"orderId":"ORD-9","emailStatus":{"customerEmailSent":true,"adminEmailSent":true}}"#
                .to_vec(),
        );
        let confirmation = interpret_response(&request(), response).unwrap();
        assert_eq!(confirmation.email_warning(), None);
    }
}

//! End-to-end checkout flows against an in-memory session store and a
//! scripted order gateway.

use async_trait::async_trait;
use hallmart_cache::MemoryStore;
use hallmart_commerce::prelude::*;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Scripted stand-in for the order endpoint.
struct MockGateway {
    behavior: Behavior,
    calls: Arc<AtomicUsize>,
}

enum Behavior {
    Respond { status: u16, body: &'static str },
    Hang(Duration),
    FailNetwork(&'static str),
}

impl MockGateway {
    fn respond(status: u16, body: &'static str) -> Self {
        Self {
            behavior: Behavior::Respond { status, body },
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    fn hang(duration: Duration) -> Self {
        Self {
            behavior: Behavior::Hang(duration),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    fn fail_network(message: &'static str) -> Self {
        Self {
            behavior: Behavior::FailNetwork(message),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    fn call_count(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.calls)
    }
}

#[async_trait]
impl OrderGateway for MockGateway {
    async fn send(
        &self,
        _request: &OrderRequest,
    ) -> Result<hallmart_data::Response, hallmart_data::FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.behavior {
            Behavior::Respond { status, body } => {
                Ok(hallmart_data::Response::new(*status, body.as_bytes().to_vec()))
            }
            Behavior::Hang(duration) => {
                tokio::time::sleep(*duration).await;
                Ok(hallmart_data::Response::new(200, Vec::new()))
            }
            Behavior::FailNetwork(message) => {
                Err(hallmart_data::FetchError::Network(message.to_string()))
            }
        }
    }
}

fn product(id: &str, name: &str, price: i64) -> Product {
    Product {
        id: ProductId::new(id),
        name: name.to_string(),
        price: Money::new(price),
        discount_price: None,
        images: vec![],
        category: "Food".to_string(),
        stock: 20,
        vendor_id: Some(VendorId::new("v1")),
    }
}

fn filled_form(payment: PaymentMethod) -> CheckoutForm {
    CheckoutForm {
        name: "Ada O.".to_string(),
        email: "ada@example.com".to_string(),
        phone: "0801 234 5678".to_string(),
        location_type: Some(Location::Hall(Hall::Mellanby)),
        address: String::new(),
        room_no: "D07".to_string(),
        payment_method: Some(payment),
    }
}

fn cod_request(store: &CartStore<MemoryStore>) -> OrderRequest {
    match prepare_checkout(store.cart(), &filled_form(PaymentMethod::Cod), None, false) {
        Ok(PreparedCheckout::Cod(request)) => request,
        other => panic!("expected COD branch, got {other:?}"),
    }
}

#[tokio::test]
async fn cod_success_clears_cart_and_snapshot() {
    let backing = MemoryStore::new();
    let mut store = CartStore::restore(backing.clone());
    store.add_to_cart(&product("p1", "Jollof Pack", 6000), 2).unwrap();

    let request = cod_request(&store);
    let gateway = MockGateway::respond(
        200,
        r#"{"success":true,"orderId":"ORD-100","emailStatus":{"customerEmailSent":true,"adminEmailSent":true}}"#,
    );
    let mut submitter = OrderSubmitter::new(gateway);

    let state = submitter.submit(&request, &mut store).await;
    match state {
        SubmitState::Succeeded(confirmation) => {
            assert_eq!(confirmation.order_id, OrderId::new("ORD-100"));
            assert_eq!(confirmation.total, Money::new(12_000));
            assert_eq!(confirmation.email_warning(), None);
        }
        other => panic!("expected success, got {other:?}"),
    }

    assert!(store.cart().is_empty());
    // The persisted snapshot is gone too, so a restart stays empty.
    let revived = CartStore::restore(backing);
    assert!(revived.cart().is_empty());
}

#[tokio::test(start_paused = true)]
async fn slow_gateway_times_out_and_keeps_cart() {
    let backing = MemoryStore::new();
    let mut store = CartStore::restore(backing.clone());
    store.add_to_cart(&product("p1", "Jollof Pack", 6000), 1).unwrap();

    let request = cod_request(&store);
    let gateway = MockGateway::hang(Duration::from_secs(60));
    let mut submitter = OrderSubmitter::new(gateway);

    let state = submitter.submit(&request, &mut store).await;
    assert_eq!(state, &SubmitState::Failed(SubmitFailure::Timeout));

    // Nothing was confirmed, so the cart must survive for a retry.
    assert_eq!(store.cart().item_count(), 1);
    let revived = CartStore::restore(backing);
    assert_eq!(revived.cart().item_count(), 1);
}

#[tokio::test]
async fn network_failure_is_reported_and_cart_survives() {
    let mut store = CartStore::restore(MemoryStore::new());
    store.add_to_cart(&product("p1", "Jollof Pack", 6000), 1).unwrap();

    let request = cod_request(&store);
    let gateway = MockGateway::fail_network("connection refused");
    let mut submitter = OrderSubmitter::new(gateway);

    let state = submitter.submit(&request, &mut store).await;
    assert_eq!(
        state,
        &SubmitState::Failed(SubmitFailure::Network("connection refused".to_string()))
    );
    assert!(!store.cart().is_empty());
}

#[tokio::test]
async fn server_rejection_surfaces_message() {
    let mut store = CartStore::restore(MemoryStore::new());
    store.add_to_cart(&product("p1", "Jollof Pack", 6000), 1).unwrap();

    let request = cod_request(&store);
    let gateway = MockGateway::respond(200, r#"{"success":false,"error":"Vendor is closed"}"#);
    let mut submitter = OrderSubmitter::new(gateway);

    let state = submitter.submit(&request, &mut store).await;
    assert_eq!(
        state,
        &SubmitState::Failed(SubmitFailure::Server("Vendor is closed".to_string()))
    );
}

#[tokio::test]
async fn failed_attempt_can_be_retried() {
    let mut store = CartStore::restore(MemoryStore::new());
    store.add_to_cart(&product("p1", "Jollof Pack", 6000), 1).unwrap();
    let request = cod_request(&store);

    let mut failing = OrderSubmitter::new(MockGateway::fail_network("connection refused"));
    let state = failing.submit(&request, &mut store).await;
    assert!(matches!(state, SubmitState::Failed(_)));

    // A fresh submitter over a healthy gateway completes the same request.
    let mut retrying = OrderSubmitter::new(MockGateway::respond(
        200,
        r#"{"success":true,"orderId":"ORD-101"}"#,
    ));
    let state = retrying.submit(&request, &mut store).await;
    assert!(matches!(state, SubmitState::Succeeded(_)));
    assert!(store.cart().is_empty());
}

#[test]
fn cod_over_limit_is_rejected_before_any_network_traffic() {
    let mut store = CartStore::restore(MemoryStore::new());
    store.add_to_cart(&product("p1", "Mini Fridge", 60_000), 1).unwrap();

    let err = prepare_checkout(store.cart(), &filled_form(PaymentMethod::Cod), None, false)
        .unwrap_err();
    assert!(matches!(
        err,
        CommerceError::Validation(ValidationError::CodOverLimit { .. })
    ));
}

#[test]
fn referral_discount_can_bring_total_under_cod_limit() {
    let mut store = CartStore::restore(MemoryStore::new());
    store.add_to_cart(&product("p1", "Mini Fridge", 60_000), 1).unwrap();

    let account = Account {
        user_id: Some(UserId::new("u-9")),
        referral_balance: Money::new(15_000),
        ..Account::default()
    };

    let prepared = prepare_checkout(
        store.cart(),
        &filled_form(PaymentMethod::Cod),
        Some(&account),
        true,
    )
    .unwrap();

    match prepared {
        PreparedCheckout::Cod(request) => {
            assert_eq!(request.subtotal, Money::new(45_000));
            assert_eq!(request.referral_discount, Money::new(15_000));
        }
        other => panic!("expected COD branch, got {other:?}"),
    }
}

#[test]
fn transfer_flow_stashes_handoff_without_submitting() {
    let mut store = CartStore::restore(MemoryStore::new());
    store.add_to_cart(&product("p1", "Jollof Pack", 6000), 2).unwrap();

    let prepared = prepare_checkout(
        store.cart(),
        &filled_form(PaymentMethod::Transfer),
        None,
        false,
    )
    .unwrap();

    let handoff = match prepared {
        PreparedCheckout::Transfer(handoff) => handoff,
        other => panic!("expected transfer branch, got {other:?}"),
    };
    handoff.stash(store.cache()).unwrap();

    // The cart is untouched until the transfer completes elsewhere.
    assert_eq!(store.cart().item_count(), 2);

    let taken = TransferHandoff::take(store.cache()).unwrap().unwrap();
    assert_eq!(taken.total, Money::new(12_000));
    assert_eq!(taken.cart.item_count(), 2);
    assert_eq!(TransferHandoff::take(store.cache()).unwrap(), None);
}

#[tokio::test]
async fn gateway_called_exactly_once_per_submit() {
    let mut store = CartStore::restore(MemoryStore::new());
    store.add_to_cart(&product("p1", "Jollof Pack", 6000), 1).unwrap();
    let request = cod_request(&store);

    let gateway = MockGateway::respond(200, r#"{"success":true,"orderId":"ORD-102"}"#);
    let calls = gateway.call_count();
    let mut submitter = OrderSubmitter::new(gateway);

    submitter.submit(&request, &mut store).await;
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

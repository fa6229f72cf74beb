//! Checkout: form, validation, order assembly, and submission.

mod form;
mod order;
mod submit;
mod validate;

pub use form::{CheckoutForm, Hall, Location, PaymentMethod, OFF_CAMPUS_SENTINEL};
pub use order::{
    prepare_checkout, EmailStatus, OrderRequest, OrderResponse, PreparedCheckout, TransferHandoff,
    CHECKOUT_KEY,
};
pub use submit::{
    HttpOrderGateway, OrderConfirmation, OrderGateway, OrderSubmitter, SubmitFailure, SubmitState,
    DELIVERY_WINDOW, SUBMIT_TIMEOUT,
};
pub use validate::{begin_checkout, validate, ValidationError, COD_MAX_AMOUNT};

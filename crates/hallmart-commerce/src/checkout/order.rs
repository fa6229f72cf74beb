//! Order wire types and checkout preparation.
//!
//! [`prepare_checkout`] is the single entry point: it gates, prices, and
//! validates, then hands back either a ready-to-send order request (cash on
//! delivery) or a transfer hand-off payload for the bank-transfer flow.

use crate::cart::{quote, Cart, CartTotals};
use crate::catalog::Account;
use crate::checkout::{
    begin_checkout, validate, CheckoutForm, Location, PaymentMethod, ValidationError,
};
use crate::error::CommerceError;
use crate::ids::OrderId;
use crate::money::Money;
use hallmart_cache::{Cache, Store};
use serde::{Deserialize, Serialize};

/// Session-store key for an in-progress bank-transfer checkout.
pub const CHECKOUT_KEY: &str = "hallmart_checkout";

/// Fallback for wire fields that must not be empty.
const WIRE_NOT_AVAILABLE: &str = "N/A";

/// The payload the order endpoint accepts.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OrderRequest {
    /// Always `"createOrder"`; the endpoint dispatches on this.
    pub action: String,
    /// Vendor of the first cart line, or `"N/A"` when unknown.
    pub vendor_id: String,
    /// Recipient name, trimmed.
    pub customer_name: String,
    /// Contact email, trimmed.
    pub customer_email: String,
    /// Contact phone, trimmed.
    pub customer_phone: String,
    /// The chosen roster entry.
    pub location_type: Location,
    /// Where to deliver: the street address off campus, otherwise the roster
    /// entry again.
    pub location: String,
    /// Room number for hall delivery, `"N/A"` otherwise.
    pub room_no: String,
    /// Human-readable cart summary, `"name (xQ)"` per line, comma-joined.
    pub items: String,
    /// What the shopper pays, after any referral discount.
    pub subtotal: Money,
    /// Delivery is free for every order.
    pub delivery_fee: Money,
    /// Payment method label, e.g. `"Cash on Delivery"`.
    pub payment_method: String,
    /// Always `"Pending"` at creation.
    pub payment_status: String,
    /// Referral credit applied to this order.
    pub referral_discount: Money,
    /// Account id, or empty for guests.
    pub user_id: String,
}

impl OrderRequest {
    /// Assemble the wire payload from a validated checkout.
    pub fn from_checkout(
        cart: &Cart,
        form: &CheckoutForm,
        totals: &CartTotals,
        account: Option<&Account>,
        location: Location,
        payment: PaymentMethod,
    ) -> Self {
        let room_no = match form.room_no.trim() {
            "" => WIRE_NOT_AVAILABLE.to_string(),
            trimmed => trimmed.to_string(),
        };
        let delivery_target = if location.is_off_campus() {
            form.address.trim().to_string()
        } else {
            location.as_str().to_string()
        };

        Self {
            action: "createOrder".to_string(),
            vendor_id: cart
                .vendor_id()
                .map(|v| v.as_str().to_string())
                .unwrap_or_else(|| WIRE_NOT_AVAILABLE.to_string()),
            customer_name: form.name.trim().to_string(),
            customer_email: form.email.trim().to_string(),
            customer_phone: form.phone.trim().to_string(),
            location_type: location,
            location: delivery_target,
            room_no,
            items: summarize_items(cart),
            subtotal: totals.total,
            delivery_fee: Money::ZERO,
            payment_method: payment.label().to_string(),
            payment_status: "Pending".to_string(),
            referral_discount: totals.referral_discount,
            user_id: account
                .and_then(|a| a.user_id.as_ref())
                .map(|id| id.as_str().to_string())
                .unwrap_or_default(),
        }
    }
}

/// `"name (xQ)"` per cart line, comma-joined.
fn summarize_items(cart: &Cart) -> String {
    cart.lines()
        .iter()
        .map(|line| format!("{} (x{})", line.product.name, line.quantity))
        .collect::<Vec<_>>()
        .join(", ")
}

/// What the order endpoint sends back.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OrderResponse {
    /// Whether the order was created.
    pub success: bool,
    /// The created order's id; required when `success` is true.
    #[serde(default)]
    pub order_id: Option<OrderId>,
    /// Confirmation email outcomes, when reported.
    #[serde(default)]
    pub email_status: Option<EmailStatus>,
    /// Server-provided failure message, when `success` is false.
    #[serde(default)]
    pub error: Option<String>,
}

/// Whether the confirmation emails went out.
///
/// Email failures never fail the order; they only soften the confirmation
/// message.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct EmailStatus {
    #[serde(default)]
    pub customer_email_sent: bool,
    #[serde(default)]
    pub admin_email_sent: bool,
}

impl EmailStatus {
    /// Both confirmation emails delivered.
    pub fn all_sent(&self) -> bool {
        self.customer_email_sent && self.admin_email_sent
    }
}

/// Everything the bank-transfer flow needs to finish the order later.
///
/// Stashed in the session store under [`CHECKOUT_KEY`] and picked up by the
/// transfer page; the order itself is not submitted here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TransferHandoff {
    /// The validated form as entered.
    #[serde(flatten)]
    pub form: CheckoutForm,
    /// Cart snapshot at hand-off time.
    pub cart: Cart,
    /// Amount to transfer, after any referral discount.
    pub total: Money,
    /// Subtotal before the discount.
    pub original_total: Money,
    /// Referral credit applied.
    pub referral_discount: Money,
    /// Account id, or empty for guests.
    pub user_id: String,
}

impl TransferHandoff {
    /// Persist the hand-off for the transfer page.
    pub fn stash<S: Store>(&self, cache: &Cache<S>) -> Result<(), CommerceError> {
        cache.set(CHECKOUT_KEY, self)?;
        Ok(())
    }

    /// Pick up and consume a stashed hand-off, if one exists.
    pub fn take<S: Store>(cache: &Cache<S>) -> Result<Option<Self>, CommerceError> {
        let handoff = cache.get::<Self>(CHECKOUT_KEY)?;
        if handoff.is_some() {
            cache.delete(CHECKOUT_KEY)?;
        }
        Ok(handoff)
    }
}

/// Outcome of a validated checkout, branched by payment method.
#[derive(Debug, Clone, PartialEq)]
pub enum PreparedCheckout {
    /// Ready to submit to the order endpoint.
    Cod(OrderRequest),
    /// Ready to stash for the bank-transfer flow.
    Transfer(TransferHandoff),
}

/// Gate, price, and validate a checkout, then branch on payment method.
///
/// The referral opt-in is honored only when the account qualifies; pricing
/// and validation see the same totals the shopper saw.
pub fn prepare_checkout(
    cart: &Cart,
    form: &CheckoutForm,
    account: Option<&Account>,
    use_referral_balance: bool,
) -> Result<PreparedCheckout, CommerceError> {
    begin_checkout(cart)?;
    let totals = quote(cart, account, use_referral_balance);
    validate(form, &totals)?;

    // validate() has already confirmed both are set.
    let location = form
        .location_type
        .ok_or(ValidationError::MissingLocation)?;
    let payment = form
        .payment_method
        .ok_or(ValidationError::MissingPaymentMethod)?;

    match payment {
        PaymentMethod::Cod => Ok(PreparedCheckout::Cod(OrderRequest::from_checkout(
            cart, form, &totals, account, location, payment,
        ))),
        PaymentMethod::Transfer => Ok(PreparedCheckout::Transfer(TransferHandoff {
            form: form.clone(),
            cart: cart.clone(),
            total: totals.total,
            original_total: totals.subtotal,
            referral_discount: totals.referral_discount,
            user_id: account
                .and_then(|a| a.user_id.as_ref())
                .map(|id| id.as_str().to_string())
                .unwrap_or_default(),
        })),
    }
}

//! Checkout form validation.

use crate::cart::{Cart, CartTotals};
use crate::checkout::{CheckoutForm, Location, PaymentMethod};
use crate::error::CommerceError;
use crate::money::Money;
use thiserror::Error;

/// Largest total payable as cash on delivery, inclusive.
pub const COD_MAX_AMOUNT: Money = Money::new(50_000);

/// A reason the checkout form cannot be submitted.
///
/// Only the first problem found is reported, in form field order, so the
/// shopper fixes one thing at a time.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ValidationError {
    #[error("Please enter your name")]
    MissingName,
    #[error("Please enter your email")]
    MissingEmail,
    #[error("Please enter your phone number")]
    MissingPhone,
    #[error("Please choose a delivery location")]
    MissingLocation,
    #[error("Please enter your delivery address")]
    AddressRequired,
    #[error("Please enter your room number")]
    RoomNumberRequired,
    #[error("Please choose a payment method")]
    MissingPaymentMethod,
    #[error("Orders above {limit} cannot be paid on delivery; total is {total}")]
    CodOverLimit { total: Money, limit: Money },
}

impl ValidationError {
    /// The form field this error points at.
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::MissingName => "name",
            ValidationError::MissingEmail => "email",
            ValidationError::MissingPhone => "phone",
            ValidationError::MissingLocation => "locationType",
            ValidationError::AddressRequired => "address",
            ValidationError::RoomNumberRequired => "roomNo",
            ValidationError::MissingPaymentMethod => "paymentMethod",
            ValidationError::CodOverLimit { .. } => "paymentMethod",
        }
    }
}

/// Gate into checkout: an empty cart has nothing to check out.
pub fn begin_checkout(cart: &Cart) -> Result<(), CommerceError> {
    if cart.is_empty() {
        return Err(CommerceError::EmptyCart);
    }
    Ok(())
}

/// Check the form against the priced cart.
///
/// Whitespace-only input counts as empty. Which location detail is required
/// depends on the delivery location: off-campus needs an address, a hall
/// needs a room number. The cash-on-delivery cap applies to the discounted
/// total and is inclusive.
pub fn validate(form: &CheckoutForm, totals: &CartTotals) -> Result<(), ValidationError> {
    if form.name.trim().is_empty() {
        return Err(ValidationError::MissingName);
    }
    if form.email.trim().is_empty() {
        return Err(ValidationError::MissingEmail);
    }
    if form.phone.trim().is_empty() {
        return Err(ValidationError::MissingPhone);
    }

    let location = form.location_type.ok_or(ValidationError::MissingLocation)?;
    match location {
        Location::OffCampus => {
            if form.address.trim().is_empty() {
                return Err(ValidationError::AddressRequired);
            }
        }
        Location::Hall(_) => {
            if form.room_no.trim().is_empty() {
                return Err(ValidationError::RoomNumberRequired);
            }
        }
    }

    let payment = form
        .payment_method
        .ok_or(ValidationError::MissingPaymentMethod)?;
    if payment == PaymentMethod::Cod && totals.total > COD_MAX_AMOUNT {
        return Err(ValidationError::CodOverLimit {
            total: totals.total,
            limit: COD_MAX_AMOUNT,
        });
    }

    Ok(())
}

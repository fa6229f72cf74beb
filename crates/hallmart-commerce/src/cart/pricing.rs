//! Cart pricing calculations.
//!
//! `quote` is a pure function of the cart, the optional account, and the
//! shopper's referral opt-in; identical inputs always produce identical
//! totals.

use crate::cart::Cart;
use crate::catalog::Account;
use crate::ids::ProductId;
use crate::money::Money;
use serde::Serialize;

/// Minimum subtotal before referral balance may be redeemed.
pub const REFERRAL_MIN_SUBTOTAL: Money = Money::new(10_000);

/// Complete pricing breakdown for a cart.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CartTotals {
    /// Sum of line totals before any discount.
    pub subtotal: Money,
    /// Referral credit applied; never exceeds the subtotal.
    pub referral_discount: Money,
    /// What the shopper pays: `subtotal - referral_discount`.
    pub total: Money,
    /// Per-line breakdown for the summary panel.
    pub lines: Vec<LineTotal>,
}

impl CartTotals {
    /// Whether any referral discount was applied.
    pub fn has_referral_discount(&self) -> bool {
        self.referral_discount.is_positive()
    }
}

/// Pricing for a single line.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct LineTotal {
    /// The product this line prices.
    pub product_id: ProductId,
    /// Product name for display.
    pub name: String,
    /// Effective per-unit price.
    pub unit_price: Money,
    /// Units in the cart.
    pub quantity: i64,
    /// `unit_price * quantity`.
    pub line_total: Money,
}

/// Whether this cart and account qualify for referral redemption at all,
/// regardless of opt-in. Drives the summary panel's redemption checkbox.
pub fn referral_eligible(subtotal: Money, account: Option<&Account>) -> bool {
    match account {
        Some(account) => account.has_referral_balance() && subtotal >= REFERRAL_MIN_SUBTOTAL,
        None => false,
    }
}

/// Price a cart.
///
/// The referral discount is nonzero only when the account is eligible
/// (positive balance, subtotal at or above [`REFERRAL_MIN_SUBTOTAL`]) and the
/// shopper opted in; it is capped at the subtotal so the total never goes
/// negative.
pub fn quote(cart: &Cart, account: Option<&Account>, use_referral_balance: bool) -> CartTotals {
    let lines: Vec<LineTotal> = cart
        .lines()
        .iter()
        .map(|line| LineTotal {
            product_id: line.product.id.clone(),
            name: line.product.name.clone(),
            unit_price: line.unit_price(),
            quantity: line.quantity,
            line_total: line.line_total(),
        })
        .collect();

    let subtotal: Money = lines.iter().map(|l| l.line_total).sum();

    let referral_discount = match account {
        Some(account) if use_referral_balance && referral_eligible(subtotal, Some(account)) => {
            account.referral_balance.min(subtotal)
        }
        _ => Money::ZERO,
    };

    CartTotals {
        subtotal,
        referral_discount,
        total: subtotal - referral_discount,
        lines,
    }
}

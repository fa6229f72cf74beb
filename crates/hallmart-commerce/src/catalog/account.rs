//! Account read model.

use crate::ids::UserId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A signed-in shopper's account, as supplied by the account service.
///
/// Everything is optional except the referral balance; guests simply have no
/// `Account` at all.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    /// Account identifier, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<UserId>,
    /// Referral credit redeemable against order totals.
    #[serde(default)]
    pub referral_balance: Money,
    /// The hall the shopper registered with; free text, may or may not match
    /// the delivery roster.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hall: Option<String>,
    /// Full name, used for checkout prefill.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Email address, used for checkout prefill.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Phone number, used for checkout prefill.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

impl Account {
    /// Whether any referral credit is available.
    pub fn has_referral_balance(&self) -> bool {
        self.referral_balance.is_positive()
    }
}

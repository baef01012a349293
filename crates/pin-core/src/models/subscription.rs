//! Subscription model

use serde::{Deserialize, Serialize};

/// Cellular plan attached to the account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subscription {
    pub account_number: String,
    pub phone_number: String,
    pub status: String,
    pub plan_type: String,
    /// Monthly price in minor currency units (cents)
    pub plan_price: i64,
}

impl Subscription {
    /// Monthly price rendered in whole dollars, e.g. `"$24"`.
    ///
    /// Cents are truncated.
    pub fn monthly_price_label(&self) -> String {
        format!("${}", self.plan_price / 100)
    }
}

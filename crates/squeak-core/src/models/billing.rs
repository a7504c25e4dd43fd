use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The caller's individual subscription.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BillingAccountResponse {
    pub plan: String,
    pub expiration: DateTime<Utc>,
    pub canceled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutSessionResponse {
    /// Hosted checkout page to send the user to.
    pub redirect_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CancelSubscriptionResponse {
    pub success: bool,
    pub current_expiration: String,
    pub canceled_plan: String,
}

//! Individual subscriptions.

use tracing::instrument;

use squeak_core::ApiResult;
use squeak_core::models::{
    BillingAccountResponse, CancelSubscriptionResponse, CheckoutSessionResponse, Empty,
};

use crate::endpoints::{BILLING_CANCEL_EOP, BILLING_CHECKOUT, GET_BILLING_ACCOUNT};
use crate::gate::AccessGate;

#[derive(Debug, Clone, Copy)]
pub struct BillingApi<'a> {
    gate: &'a AccessGate,
}

impl<'a> BillingApi<'a> {
    pub(crate) fn new(gate: &'a AccessGate) -> Self {
        Self { gate }
    }

    #[instrument(skip(self))]
    pub async fn get_billing_account(&self) -> ApiResult<BillingAccountResponse> {
        self.gate
            .call_with_errors(&GET_BILLING_ACCOUNT, &Empty {})
            .await
    }

    #[instrument(skip(self))]
    pub async fn create_checkout_session(&self) -> ApiResult<CheckoutSessionResponse> {
        self.gate.call_with_errors(&BILLING_CHECKOUT, &Empty {}).await
    }

    #[instrument(skip(self))]
    pub async fn cancel_subscription_at_period_end(&self) -> ApiResult<CancelSubscriptionResponse> {
        self.gate
            .call_with_errors(&BILLING_CANCEL_EOP, &Empty {})
            .await
    }
}

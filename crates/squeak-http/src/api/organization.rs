//! Teacher organizations and their classroom subscription.

use tracing::instrument;

use squeak_core::ApiResult;
use squeak_core::models::{
    CancelSubscriptionResponse, CheckoutSessionResponse, CreateOrganizationResponse, Empty,
    JoinOrganizationRequest, JoinOrganizationResponse, OrganizationResponse,
};

use crate::endpoints::{
    CREATE_ORGANIZATION, GET_ORGANIZATION, JOIN_ORGANIZATION, ORGANIZATION_CANCEL_EOP,
    ORGANIZATION_CHECKOUT,
};
use crate::gate::AccessGate;

#[derive(Debug, Clone, Copy)]
pub struct OrganizationApi<'a> {
    gate: &'a AccessGate,
}

impl<'a> OrganizationApi<'a> {
    pub(crate) fn new(gate: &'a AccessGate) -> Self {
        Self { gate }
    }

    #[instrument(skip(self))]
    pub async fn get_organization(&self) -> ApiResult<OrganizationResponse> {
        self.gate.call_with_errors(&GET_ORGANIZATION, &Empty {}).await
    }

    #[instrument(skip(self))]
    pub async fn create_organization(&self) -> ApiResult<CreateOrganizationResponse> {
        self.gate
            .call_with_errors(&CREATE_ORGANIZATION, &Empty {})
            .await
    }

    #[instrument(skip(self))]
    pub async fn join_organization(
        &self,
        request: &JoinOrganizationRequest,
    ) -> ApiResult<JoinOrganizationResponse> {
        self.gate.call_with_errors(&JOIN_ORGANIZATION, request).await
    }

    /// Start a checkout for the organization plan; the response carries the redirect URL.
    #[instrument(skip(self))]
    pub async fn create_checkout_session(&self) -> ApiResult<CheckoutSessionResponse> {
        self.gate
            .call_with_errors(&ORGANIZATION_CHECKOUT, &Empty {})
            .await
    }

    /// Cancel the organization subscription at the end of the billing period.
    #[instrument(skip(self))]
    pub async fn cancel_subscription_at_period_end(&self) -> ApiResult<CancelSubscriptionResponse> {
        self.gate
            .call_with_errors(&ORGANIZATION_CANCEL_EOP, &Empty {})
            .await
    }
}

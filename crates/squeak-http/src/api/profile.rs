//! Learner profile.

use tracing::instrument;

use squeak_core::Result;
use squeak_core::models::{Empty, GetProfileResponse, UpsertProfileRequest, UpsertProfileResponse};

use crate::endpoints::{GET_PROFILE, UPSERT_PROFILE};
use crate::gate::AccessGate;

#[derive(Debug, Clone, Copy)]
pub struct ProfileApi<'a> {
    gate: &'a AccessGate,
}

impl<'a> ProfileApi<'a> {
    pub(crate) fn new(gate: &'a AccessGate) -> Self {
        Self { gate }
    }

    #[instrument(skip(self))]
    pub async fn get_profile(&self) -> Result<GetProfileResponse> {
        self.gate.call(&GET_PROFILE, &Empty {}).await
    }

    /// Create or replace the caller's profile.
    #[instrument(skip(self, profile))]
    pub async fn upsert_profile(
        &self,
        profile: &UpsertProfileRequest,
    ) -> Result<UpsertProfileResponse> {
        self.gate.call(&UPSERT_PROFILE, profile).await
    }
}

//! Daily question progress and streaks.

use tracing::instrument;

use squeak_core::Result;
use squeak_core::models::{Empty, IncrementProgressParams, ProgressResponse, StreakResponse};

use crate::endpoints::{GET_PROGRESS, GET_STREAK, INCREMENT_PROGRESS};
use crate::gate::AccessGate;

#[derive(Debug, Clone, Copy)]
pub struct ProgressApi<'a> {
    gate: &'a AccessGate,
}

impl<'a> ProgressApi<'a> {
    pub(crate) fn new(gate: &'a AccessGate) -> Self {
        Self { gate }
    }

    #[instrument(skip(self))]
    pub async fn get_progress(&self) -> Result<ProgressResponse> {
        self.gate.call(&GET_PROGRESS, &Empty {}).await
    }

    /// Record `amount` more answered questions for today.
    #[instrument(skip(self))]
    pub async fn increment_progress(&self, amount: u32) -> Result<ProgressResponse> {
        self.gate
            .call(&INCREMENT_PROGRESS, &IncrementProgressParams { amount })
            .await
    }

    #[instrument(skip(self))]
    pub async fn get_streak(&self) -> Result<StreakResponse> {
        self.gate.call(&GET_STREAK, &Empty {}).await
    }
}

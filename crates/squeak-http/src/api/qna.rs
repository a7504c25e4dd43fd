use tracing::instrument;

use squeak_core::Result;
use squeak_core::models::{
    EvaluateAnswerRequest, EvaluateAnswerResponse, GetQuestionRequest, GetQuestionResponse,
};

use crate::endpoints::{EVALUATE_ANSWER, GET_QUESTION};
use crate::gate::AccessGate;

#[derive(Debug, Clone, Copy)]
pub struct QnaApi<'a> {
    gate: &'a AccessGate,
}

impl<'a> QnaApi<'a> {
    pub(crate) fn new(gate: &'a AccessGate) -> Self {
        Self { gate }
    }

    /// Generate a comprehension question about a story or article.
    #[instrument(skip(self))]
    pub async fn get_question(&self, request: &GetQuestionRequest) -> Result<GetQuestionResponse> {
        self.gate.call(&GET_QUESTION, request).await
    }

    #[instrument(skip(self, request))]
    pub async fn evaluate_answer(
        &self,
        request: &EvaluateAnswerRequest,
    ) -> Result<EvaluateAnswerResponse> {
        self.gate.call(&EVALUATE_ANSWER, request).await
    }
}

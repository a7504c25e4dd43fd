use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetQuestionRequest {
    /// `Story` or `News`.
    pub content_type: String,
    pub id: String,
    pub cefr_level: String,
    pub question_type: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetQuestionResponse {
    pub question: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluateAnswerRequest {
    pub cefr: String,
    pub content: String,
    pub question: String,
    pub answer: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluateAnswerResponse {
    /// `PASS` or `FAIL`.
    pub evaluation: String,
    pub explanation: String,
}

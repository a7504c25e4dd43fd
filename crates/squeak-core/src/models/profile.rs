use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetProfileResponse {
    pub username: String,
    #[serde(default)]
    pub learning_language: String,
    /// CEFR level, e.g. `B1`.
    #[serde(default)]
    pub skill_level: String,
    #[serde(default)]
    pub interested_topics: Vec<String>,
    #[serde(default)]
    pub daily_questions_goal: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpsertProfileRequest {
    pub username: String,
    pub learning_language: String,
    pub skill_level: String,
    pub interested_topics: Vec<String>,
    pub daily_questions_goal: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpsertProfileResponse {
    pub message: String,
    pub id: i64,
}

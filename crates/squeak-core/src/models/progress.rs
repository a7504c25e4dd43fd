use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Questions answered today; returned by both the read and the increment endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressResponse {
    pub user_id: String,
    pub date: DateTime<Utc>,
    pub questions_completed: u32,
    pub goal_met: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncrementProgressParams {
    pub amount: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreakResponse {
    pub streak: u32,
    pub completed_today: bool,
}

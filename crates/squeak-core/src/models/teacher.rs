use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeacherStatusResponse {
    pub exists: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassroomListItem {
    pub classroom_id: String,
    pub name: String,
    #[serde(default)]
    pub students_count: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassroomListResponse {
    pub classrooms: Vec<ClassroomListItem>,
}

/// Filters for the moderation queue of a classroom.
///
/// The accessor always asks for every content type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassroomContentQuery {
    pub language: String,
    pub cefr: String,
    pub subject: String,
    pub page: u32,
    pub pagesize: u32,
    /// `true` lists accepted content, `false` the pending queue.
    pub whitelist: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub classroom_id: Option<String>,
}

/// Wire form of [`ClassroomContentQuery`] with the content type filter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassroomContentParams {
    #[serde(flatten)]
    pub query: ClassroomContentQuery,
    pub content_type: &'static str,
}

impl ClassroomContentParams {
    /// Ask for every content type (stories and news).
    pub fn all_types(query: ClassroomContentQuery) -> Self {
        Self {
            query,
            content_type: "All",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassroomContentItem {
    pub id: String,
    pub cefr_level: String,
    pub content_type: String,
    pub created_at: String,
    pub date_created: String,
    pub language: String,
    pub pages: u32,
    pub preview_text: String,
    pub title: String,
    pub topic: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModerateContentRequest {
    pub classroom_id: String,
    pub content_type: String,
    pub content_id: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateClassroomRequest {
    pub name: String,
    pub students_count: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateClassroomResponse {
    pub classroom_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateClassroomRequest {
    pub classroom_id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateClassroomResponse {
    #[serde(default)]
    pub message: Option<String>,
}

//! Reading content: stories and news articles.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Search filters shared by the story and news listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentQuery {
    pub language: String,
    pub cefr: String,
    pub subject: String,
    pub page: u32,
    pub pagesize: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentItem {
    pub id: String,
    pub cefr_level: String,
    pub created_at: String,
    pub date_created: String,
    pub language: String,
    pub preview_text: String,
    pub title: String,
    pub topic: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoryPageParams {
    pub id: String,
    pub page: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdParams {
    pub id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoryPageResponse {
    pub cefr_level: String,
    pub content: String,
    pub content_type: String,
    pub date_created: String,
    pub language: String,
    pub pages: u32,
    pub preview_text: String,
    pub title: String,
    pub topic: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoryContextResponse {
    pub context: String,
}

/// A full news article. Dictionary and sources are passed through untyped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsResponse {
    pub content_type: String,
    pub language: String,
    pub cefr_level: String,
    pub topic: String,
    pub date_created: String,
    pub title: String,
    pub preview_text: String,
    pub content: String,
    #[serde(default)]
    pub dictionary: Value,
    #[serde(default)]
    pub sources: Vec<Value>,
}

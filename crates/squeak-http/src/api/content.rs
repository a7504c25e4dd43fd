//! Stories and news articles.

use tracing::instrument;

use squeak_core::Result;
use squeak_core::models::{
    ContentItem, ContentQuery, IdParams, NewsResponse, StoryContextResponse, StoryPageParams,
    StoryPageResponse,
};

use crate::endpoints::{GET_NEWS, GET_STORY, QUERY_NEWS, QUERY_STORIES, STORY_CONTEXT};
use crate::gate::AccessGate;

#[derive(Debug, Clone, Copy)]
pub struct StoryApi<'a> {
    gate: &'a AccessGate,
}

impl<'a> StoryApi<'a> {
    pub(crate) fn new(gate: &'a AccessGate) -> Self {
        Self { gate }
    }

    /// Fetch one page of a story.
    #[instrument(skip(self))]
    pub async fn get_story(&self, id: &str, page: u32) -> Result<StoryPageResponse> {
        let params = StoryPageParams {
            id: id.to_string(),
            page,
        };
        self.gate.call(&GET_STORY, &params).await
    }

    /// Fetch the full story text used as question context.
    #[instrument(skip(self))]
    pub async fn get_story_context(&self, id: &str) -> Result<StoryContextResponse> {
        let params = IdParams { id: id.to_string() };
        self.gate.call(&STORY_CONTEXT, &params).await
    }

    #[instrument(skip(self))]
    pub async fn query_stories(&self, query: &ContentQuery) -> Result<Vec<ContentItem>> {
        self.gate.call(&QUERY_STORIES, query).await
    }
}

#[derive(Debug, Clone, Copy)]
pub struct NewsApi<'a> {
    gate: &'a AccessGate,
}

impl<'a> NewsApi<'a> {
    pub(crate) fn new(gate: &'a AccessGate) -> Self {
        Self { gate }
    }

    #[instrument(skip(self))]
    pub async fn get_news(&self, id: &str) -> Result<NewsResponse> {
        let params = IdParams { id: id.to_string() };
        self.gate.call(&GET_NEWS, &params).await
    }

    #[instrument(skip(self))]
    pub async fn query_news(&self, query: &ContentQuery) -> Result<Vec<ContentItem>> {
        self.gate.call(&QUERY_NEWS, query).await
    }
}

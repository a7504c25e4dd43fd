//! Story commands.

use anyhow::{Context, Result};
use clap::Subcommand;

use squeak_http::SqueakClient;

use crate::output;

use super::ContentFilter;

#[derive(Subcommand, Debug)]
pub enum StoryCommand {
    /// Fetch one page of a story
    Get {
        id: String,

        #[arg(long, default_value_t = 1)]
        page: u32,
    },

    /// Fetch the summary of a story so far
    Context { id: String },

    /// Search stories
    Query(ContentFilter),
}

pub async fn run(cmd: StoryCommand, client: &SqueakClient) -> Result<()> {
    let stories = client.stories();
    match cmd {
        StoryCommand::Get { id, page } => {
            let story = stories
                .get_story(&id, page)
                .await
                .context("Failed to fetch story")?;
            output::json_pretty(&story)
        }
        StoryCommand::Context { id } => {
            let context = stories
                .get_story_context(&id)
                .await
                .context("Failed to fetch story context")?;
            output::json_pretty(&context)
        }
        StoryCommand::Query(filter) => {
            let items = stories
                .query_stories(&filter.into())
                .await
                .context("Failed to search stories")?;
            output::json_pretty(&items)
        }
    }
}

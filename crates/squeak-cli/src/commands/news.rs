//! News commands.

use anyhow::{Context, Result};
use clap::Subcommand;

use squeak_http::SqueakClient;

use crate::output;

use super::ContentFilter;

#[derive(Subcommand, Debug)]
pub enum NewsCommand {
    /// Fetch one article
    Get { id: String },

    /// Search articles
    Query(ContentFilter),
}

pub async fn run(cmd: NewsCommand, client: &SqueakClient) -> Result<()> {
    let news = client.news();
    match cmd {
        NewsCommand::Get { id } => {
            let article = news.get_news(&id).await.context("Failed to fetch article")?;
            output::json_pretty(&article)
        }
        NewsCommand::Query(filter) => {
            let items = news
                .query_news(&filter.into())
                .await
                .context("Failed to search news")?;
            output::json_pretty(&items)
        }
    }
}

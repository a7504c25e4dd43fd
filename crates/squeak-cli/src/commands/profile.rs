//! Profile commands.

use anyhow::{Context, Result};
use clap::{Args, Subcommand};

use squeak_core::models::UpsertProfileRequest;
use squeak_http::SqueakClient;

use crate::output;

#[derive(Subcommand, Debug)]
pub enum ProfileCommand {
    /// Show the learner profile
    Get,

    /// Create or update the learner profile
    Upsert(UpsertArgs),
}

#[derive(Args, Debug)]
pub struct UpsertArgs {
    #[arg(long)]
    pub username: String,

    /// Language being learned
    #[arg(long)]
    pub language: String,

    /// CEFR level, e.g. B1
    #[arg(long)]
    pub level: String,

    /// Comma-separated topics of interest
    #[arg(long, value_delimiter = ',')]
    pub topics: Vec<String>,

    /// Questions to answer per day
    #[arg(long, default_value_t = 10)]
    pub daily_goal: u32,
}

pub async fn run(cmd: ProfileCommand, client: &SqueakClient) -> Result<()> {
    match cmd {
        ProfileCommand::Get => {
            let profile = client
                .profile()
                .get_profile()
                .await
                .context("Failed to fetch profile")?;
            output::json_pretty(&profile)
        }
        ProfileCommand::Upsert(args) => {
            let request = UpsertProfileRequest {
                username: args.username,
                learning_language: args.language,
                skill_level: args.level,
                interested_topics: args.topics,
                daily_questions_goal: args.daily_goal,
            };
            let response = client
                .profile()
                .upsert_profile(&request)
                .await
                .context("Failed to save profile")?;
            output::json_pretty(&response)
        }
    }
}

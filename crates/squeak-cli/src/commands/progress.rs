//! Progress commands.

use anyhow::{Context, Result};
use clap::Subcommand;

use squeak_http::SqueakClient;

use crate::output;

#[derive(Subcommand, Debug)]
pub enum ProgressCommand {
    /// Show today's progress
    Today,

    /// Record answered questions
    Increment {
        #[arg(long, default_value_t = 1)]
        amount: u32,
    },

    /// Show the current streak
    Streak,
}

pub async fn run(cmd: ProgressCommand, client: &SqueakClient) -> Result<()> {
    let progress = client.progress();
    match cmd {
        ProgressCommand::Today => {
            let today = progress
                .get_progress()
                .await
                .context("Failed to fetch progress")?;
            output::json_pretty(&today)
        }
        ProgressCommand::Increment { amount } => {
            let today = progress
                .increment_progress(amount)
                .await
                .context("Failed to record progress")?;
            output::json_pretty(&today)
        }
        ProgressCommand::Streak => {
            let streak = progress
                .get_streak()
                .await
                .context("Failed to fetch streak")?;
            output::json_pretty(&streak)
        }
    }
}

//! CLI argument definitions.

use clap::Parser;

use crate::commands::Command;

/// Command-line client for the Squeak language learning API.
#[derive(Parser, Debug)]
#[command(name = "squeak")]
#[command(author, version = env!("SQUEAK_VERSION"), about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    /// API base URL (defaults to the one saved at login)
    #[arg(long, env = "SQUEAK_API_BASE", global = true)]
    pub api_base: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_nested_subcommand() {
        let cli = Cli::try_parse_from([
            "squeak",
            "-vv",
            "--api-base",
            "http://localhost:8080",
            "progress",
            "increment",
            "--amount",
            "3",
        ])
        .unwrap();

        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.api_base.as_deref(), Some("http://localhost:8080"));
    }
}

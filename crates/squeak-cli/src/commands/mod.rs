//! Subcommand implementations.

mod audio;
mod billing;
mod login;
mod news;
mod org;
mod profile;
mod progress;
mod qna;
mod story;
mod student;
mod teacher;
mod whoami;

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use tracing::debug;

use squeak_core::ApiBaseUrl;
use squeak_core::models::ContentQuery;
use squeak_http::SqueakClient;

use crate::session::FileIdentityProvider;
use crate::session::storage::{self, StoredSession};

/// Base URL used when neither the flag nor a saved session names one.
pub const DEFAULT_API_BASE: &str = "http://localhost:8080";

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Save an access token for later commands
    Login(login::LoginArgs),

    /// Forget the saved access token
    Logout,

    /// Display the active session
    Whoami,

    /// Learner profile
    #[command(subcommand)]
    Profile(profile::ProfileCommand),

    /// Teacher organization and its subscription
    #[command(subcommand)]
    Org(org::OrgCommand),

    /// Teacher classrooms and content moderation
    #[command(subcommand)]
    Teacher(teacher::TeacherCommand),

    /// Individual subscription
    #[command(subcommand)]
    Billing(billing::BillingCommand),

    /// Student classroom membership
    #[command(subcommand)]
    Student(student::StudentCommand),

    /// Stories
    #[command(subcommand)]
    Story(story::StoryCommand),

    /// News articles
    #[command(subcommand)]
    News(news::NewsCommand),

    /// Daily question progress
    #[command(subcommand)]
    Progress(progress::ProgressCommand),

    /// Comprehension questions
    #[command(subcommand)]
    Qna(qna::QnaCommand),

    /// Translation and speech
    #[command(subcommand)]
    Audio(audio::AudioCommand),
}

/// Search filters shared by the story, news and classroom content listings.
#[derive(Args, Debug, Clone)]
pub struct ContentFilter {
    /// Content language, e.g. French
    #[arg(long)]
    pub language: String,

    /// CEFR level, e.g. B1
    #[arg(long)]
    pub cefr: String,

    /// Topic
    #[arg(long, default_value = "")]
    pub subject: String,

    /// Page number
    #[arg(long, default_value_t = 1)]
    pub page: u32,

    /// Items per page
    #[arg(long, default_value_t = 10)]
    pub pagesize: u32,
}

impl From<ContentFilter> for ContentQuery {
    fn from(filter: ContentFilter) -> Self {
        Self {
            language: filter.language,
            cefr: filter.cefr,
            subject: filter.subject,
            page: filter.page,
            pagesize: filter.pagesize,
        }
    }
}

pub async fn handle(command: Command, api_base: Option<&str>) -> Result<()> {
    match command {
        Command::Login(args) => login::run(args, api_base),
        Command::Logout => login::logout(),
        Command::Whoami => whoami::run(api_base).await,
        Command::Profile(cmd) => profile::run(cmd, &connect(api_base).await?).await,
        Command::Org(cmd) => org::run(cmd, &connect(api_base).await?).await,
        Command::Teacher(cmd) => teacher::run(cmd, &connect(api_base).await?).await,
        Command::Billing(cmd) => billing::run(cmd, &connect(api_base).await?).await,
        Command::Student(cmd) => student::run(cmd, &connect(api_base).await?).await,
        Command::Story(cmd) => story::run(cmd, &connect(api_base).await?).await,
        Command::News(cmd) => news::run(cmd, &connect(api_base).await?).await,
        Command::Progress(cmd) => progress::run(cmd, &connect(api_base).await?).await,
        Command::Qna(cmd) => qna::run(cmd, &connect(api_base).await?).await,
        Command::Audio(cmd) => audio::run(cmd, &connect(api_base).await?).await,
    }
}

/// Pick the base URL: explicit flag first, then the saved session, then the default.
fn resolve_api_base(flag: Option<&str>, stored: Option<&StoredSession>) -> Result<ApiBaseUrl> {
    let raw = flag
        .or(stored.map(|s| s.api_base.as_str()))
        .unwrap_or(DEFAULT_API_BASE);
    ApiBaseUrl::new(raw).with_context(|| format!("Invalid API base URL: {}", raw))
}

/// Build a client whose session comes from the saved login.
async fn connect(api_base: Option<&str>) -> Result<SqueakClient> {
    let (client, _) = connect_with_provider(api_base).await?;
    Ok(client)
}

async fn connect_with_provider(
    api_base: Option<&str>,
) -> Result<(SqueakClient, FileIdentityProvider)> {
    let path = storage::session_path()?;
    // An unreadable file is reported by the session holder when it loads the token.
    let stored = storage::load_session(&path).ok().flatten();
    let base = resolve_api_base(api_base, stored.as_ref())?;

    let provider = FileIdentityProvider::new(path);
    debug!(api_base = %base, source = provider.source(), "Connecting");
    let client = SqueakClient::connect(base, &provider)
        .await
        .context("Failed to set up API client")?;
    Ok((client, provider))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_overrides_stored_base() {
        let stored = StoredSession {
            access_token: "abc".to_string(),
            api_base: "https://api.squeak.app".to_string(),
        };

        let base = resolve_api_base(Some("http://localhost:9000"), Some(&stored)).unwrap();
        assert_eq!(base.host(), Some("localhost"));

        let base = resolve_api_base(None, Some(&stored)).unwrap();
        assert_eq!(base.host(), Some("api.squeak.app"));

        let base = resolve_api_base(None, None).unwrap();
        assert_eq!(base.host(), Some("localhost"));
    }

    #[test]
    fn rejects_plain_http_remote_base() {
        assert!(resolve_api_base(Some("http://api.squeak.app"), None).is_err());
    }
}

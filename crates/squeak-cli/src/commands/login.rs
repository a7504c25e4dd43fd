//! Login and logout.

use anyhow::{Context, Result};
use clap::Args;

use crate::output;
use crate::session::storage::{self, StoredSession};

use super::resolve_api_base;

#[derive(Args, Debug)]
pub struct LoginArgs {
    /// Access token issued by the identity provider
    #[arg(long)]
    pub token: String,
}

pub fn run(args: LoginArgs, api_base: Option<&str>) -> Result<()> {
    let path = storage::session_path()?;
    let previous = storage::load_session(&path).ok().flatten();
    let base = resolve_api_base(api_base, previous.as_ref())?;

    let stored = StoredSession {
        access_token: args.token,
        api_base: base.to_string(),
    };
    storage::save_session(&path, &stored).context("Failed to save session")?;

    output::success("Logged in");
    output::field("API", base.as_str());
    Ok(())
}

pub fn logout() -> Result<()> {
    let path = storage::session_path()?;
    if storage::clear_session(&path)? {
        output::success("Logged out");
    } else {
        output::success("No saved session");
    }
    Ok(())
}

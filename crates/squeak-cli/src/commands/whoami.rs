//! Whoami command implementation.

use anyhow::{Result, bail};

use crate::output;

use super::connect_with_provider;

pub async fn run(api_base: Option<&str>) -> Result<()> {
    let (client, provider) = connect_with_provider(api_base).await?;

    if !client.is_authenticated() {
        bail!("No active session. Run 'squeak login' first.");
    }

    output::field("API", client.gate().base_url().as_str());
    output::field("Token", provider.source());
    Ok(())
}

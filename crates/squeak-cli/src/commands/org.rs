//! Organization commands.

use anyhow::Result;
use clap::Subcommand;

use squeak_core::models::JoinOrganizationRequest;
use squeak_http::SqueakClient;

use crate::output;

#[derive(Subcommand, Debug)]
pub enum OrgCommand {
    /// Show the caller's organization
    Show,

    /// Create an organization owned by the caller
    Create,

    /// Join an existing organization
    Join {
        organization_id: String,
    },

    /// Start a checkout for the organization plan
    Checkout,

    /// Cancel the organization plan at the end of the period
    Cancel,
}

pub async fn run(cmd: OrgCommand, client: &SqueakClient) -> Result<()> {
    let org = client.organization();
    match cmd {
        OrgCommand::Show => output::api_result(org.get_organization().await),
        OrgCommand::Create => output::api_result(org.create_organization().await),
        OrgCommand::Join { organization_id } => {
            let request = JoinOrganizationRequest { organization_id };
            output::api_result(org.join_organization(&request).await)
        }
        OrgCommand::Checkout => output::api_result(org.create_checkout_session().await),
        OrgCommand::Cancel => output::api_result(org.cancel_subscription_at_period_end().await),
    }
}

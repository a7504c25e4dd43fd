//! Billing commands.

use anyhow::Result;
use clap::Subcommand;

use squeak_http::SqueakClient;

use crate::output;

#[derive(Subcommand, Debug)]
pub enum BillingCommand {
    /// Show the caller's plan
    Show,

    /// Start a checkout for a paid plan
    Checkout,

    /// Cancel the plan at the end of the period
    Cancel,
}

pub async fn run(cmd: BillingCommand, client: &SqueakClient) -> Result<()> {
    let billing = client.billing();
    match cmd {
        BillingCommand::Show => output::api_result(billing.get_billing_account().await),
        BillingCommand::Checkout => output::api_result(billing.create_checkout_session().await),
        BillingCommand::Cancel => {
            output::api_result(billing.cancel_subscription_at_period_end().await)
        }
    }
}

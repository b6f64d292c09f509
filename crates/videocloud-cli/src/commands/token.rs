//! Token command implementation.

use anyhow::{Context, Result};
use chrono::Utc;
use clap::Args;
use serde::Serialize;
use videocloud::Client;

use crate::output;

#[derive(Args, Debug)]
pub struct TokenArgs {
    /// Include the access token itself in the output
    #[arg(long)]
    pub show: bool,
}

#[derive(Serialize)]
struct TokenOutput<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    access_token: Option<&'a str>,
    expires_at: String,
    expires_in: i64,
}

pub fn run(client: &Client, args: TokenArgs) -> Result<()> {
    let session = client.session().context("No session after authentication")?;

    output::success("Authenticated");
    output::field("Account", client.config().account_id().as_str());

    let report = TokenOutput {
        access_token: args.show.then(|| session.access_token().as_str()),
        expires_at: session.expires_at().to_rfc3339(),
        expires_in: (session.expires_at() - Utc::now()).num_seconds().max(0),
    };

    output::json_pretty(&report)
}

//! CLI argument definitions.

use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use videocloud::{AccountId, ApiUrl, BasicAuthPolicy, ClientConfig, Credentials};

use crate::commands::{
    assets::AssetsCommand, folders::FoldersCommand, ingest::IngestCommand,
    playlists::PlaylistsCommand, request::RequestArgs, subscriptions::SubscriptionsCommand,
    token::TokenArgs, videos::VideosCommand,
};

/// Command-line client for the Video Cloud CMS and Dynamic Ingest APIs.
#[derive(Parser, Debug)]
#[command(name = "videocloud")]
#[command(author, version = env!("VIDEOCLOUD_VERSION"), about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(flatten)]
    pub connection: ConnectionArgs,

    #[command(subcommand)]
    pub command: Commands,
}

/// Account, credentials and hosts. Each falls back to its environment variable.
#[derive(Args, Debug)]
pub struct ConnectionArgs {
    /// Video Cloud account id
    #[arg(long, env = "VIDEOCLOUD_ACCOUNT_ID")]
    pub account_id: Option<String>,

    /// OAuth client id
    #[arg(long, env = "VIDEOCLOUD_CLIENT_ID")]
    pub client_id: Option<String>,

    /// OAuth client secret
    #[arg(long, env = "VIDEOCLOUD_CLIENT_SECRET", hide_env_values = true)]
    pub client_secret: Option<String>,

    /// CMS API base URL
    #[arg(long, env = "VIDEOCLOUD_CMS_URL")]
    pub cms_url: Option<String>,

    /// Dynamic Ingest API base URL
    #[arg(long, env = "VIDEOCLOUD_INGEST_URL")]
    pub ingest_url: Option<String>,

    /// OAuth API base URL
    #[arg(long, env = "VIDEOCLOUD_AUTH_URL")]
    pub auth_url: Option<String>,

    /// Request timeout in seconds
    #[arg(long, env = "VIDEOCLOUD_TIMEOUT_SECS")]
    pub timeout: Option<u64>,

    /// Send client credentials only with the token request
    #[arg(long)]
    pub token_only_basic_auth: bool,

    /// Fail on response bodies that are not valid JSON
    #[arg(long)]
    pub strict_json: bool,
}

impl ConnectionArgs {
    /// Build the library configuration from the parsed arguments.
    pub fn config(&self) -> Result<ClientConfig> {
        let account_id = required(&self.account_id, "--account-id", "VIDEOCLOUD_ACCOUNT_ID")?;
        let client_id = required(&self.client_id, "--client-id", "VIDEOCLOUD_CLIENT_ID")?;
        let client_secret = required(
            &self.client_secret,
            "--client-secret",
            "VIDEOCLOUD_CLIENT_SECRET",
        )?;

        let account_id = AccountId::new(account_id).context("Invalid account id")?;
        let mut builder =
            ClientConfig::builder(account_id, Credentials::new(client_id, client_secret))
                .strict_json(self.strict_json);

        if let Some(url) = &self.cms_url {
            builder = builder.cms_url(ApiUrl::new(url).context("Invalid CMS URL")?);
        }
        if let Some(url) = &self.ingest_url {
            builder = builder.ingest_url(ApiUrl::new(url).context("Invalid ingest URL")?);
        }
        if let Some(url) = &self.auth_url {
            builder = builder.auth_url(ApiUrl::new(url).context("Invalid auth URL")?);
        }
        if let Some(secs) = self.timeout {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        if self.token_only_basic_auth {
            builder = builder.basic_auth(BasicAuthPolicy::TokenRequestOnly);
        }

        Ok(builder.build()?)
    }
}

fn required<'a>(value: &'a Option<String>, flag: &str, env: &str) -> Result<&'a str> {
    value
        .as_deref()
        .filter(|v| !v.is_empty())
        .with_context(|| format!("Missing {} (or set {})", flag, env))
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch an access token and report when it expires
    Token(TokenArgs),

    /// Send a raw request to an account-scoped CMS or ingest path
    Request(RequestArgs),

    /// Video operations
    Videos(VideosCommand),

    /// Playlist operations
    Playlists(PlaylistsCommand),

    /// Folder operations
    Folders(FoldersCommand),

    /// Notification subscription operations
    Subscriptions(SubscriptionsCommand),

    /// Video asset operations
    Assets(AssetsCommand),

    /// Dynamic Ingest operations
    Ingest(IngestCommand),
}

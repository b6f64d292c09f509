//! Subcommand implementations.

pub mod assets;
pub mod folders;
pub mod ingest;
pub mod playlists;
pub mod request;
pub mod subscriptions;
pub mod token;
pub mod videos;

use anyhow::{Context, Result, bail};
use clap::Args;
use serde_json::Value;
use tracing::debug;
use videocloud::{AuthOutcome, Client, Params};

use crate::cli::{Cli, Commands, ConnectionArgs};
use crate::output;

pub async fn run(cli: Cli) -> Result<()> {
    let client = connect(&cli.connection).await?;

    match cli.command {
        Commands::Token(args) => token::run(&client, args),
        Commands::Request(args) => request::run(&client, args).await,
        Commands::Videos(cmd) => videos::handle(&client, cmd).await,
        Commands::Playlists(cmd) => playlists::handle(&client, cmd).await,
        Commands::Folders(cmd) => folders::handle(&client, cmd).await,
        Commands::Subscriptions(cmd) => subscriptions::handle(&client, cmd).await,
        Commands::Assets(cmd) => assets::handle(&client, cmd).await,
        Commands::Ingest(cmd) => ingest::handle(&client, cmd).await,
    }
}

/// Build a client and fetch a token.
async fn connect(args: &ConnectionArgs) -> Result<Client> {
    let config = args.config()?;
    debug!(account_id = %config.account_id(), "Connecting");

    let mut client = Client::new(config).context("Failed to create client")?;

    match client
        .authenticate()
        .await
        .context("Failed to reach the OAuth API")?
    {
        AuthOutcome::Granted(_) => Ok(client),
        AuthOutcome::Rejected(response) => {
            bail!("Authentication rejected: {}", response)
        }
    }
}

/// Request parameters given on the command line.
#[derive(Args, Debug, Default)]
pub struct ParamArgs {
    /// Parameter as key=value; repeatable. Values are sent as strings.
    #[arg(short = 'p', long = "param", value_name = "KEY=VALUE")]
    pub params: Vec<String>,

    /// Parameters as a JSON object. --param entries are merged on top.
    #[arg(long, value_name = "JSON")]
    pub body: Option<String>,
}

impl ParamArgs {
    pub fn into_params(self) -> Result<Params> {
        let mut params = match self.body {
            Some(body) => match serde_json::from_str::<Value>(&body).context("Invalid --body JSON")? {
                Value::Object(map) => map,
                other => bail!("--body must be a JSON object, got {}", other),
            },
            None => Params::new(),
        };

        for pair in self.params {
            let (key, value) = pair
                .split_once('=')
                .with_context(|| format!("Invalid --param '{}': expected KEY=VALUE", pair))?;
            params.insert(key.to_string(), Value::String(value.to_string()));
        }

        Ok(params)
    }
}

/// Print a response body.
pub fn print(value: &Value) -> Result<()> {
    if value.is_null() {
        output::success("Done (empty response)");
        return Ok(());
    }
    output::json_pretty(value)
}

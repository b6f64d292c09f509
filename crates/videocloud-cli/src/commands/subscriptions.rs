//! Notification subscription subcommands.

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use serde_json::Value;
use videocloud::{Client, Params, SubscriptionId};

use super::print;

#[derive(Args, Debug)]
pub struct SubscriptionsCommand {
    #[command(subcommand)]
    pub command: SubscriptionsSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum SubscriptionsSubcommand {
    /// List subscriptions
    List,

    /// Fetch a subscription
    Get { id: SubscriptionId },

    /// Subscribe an endpoint to account events
    Create {
        /// URL that receives the notifications
        #[arg(long)]
        endpoint: String,

        /// Event to subscribe to; repeatable
        #[arg(long = "event", default_value = "video-change")]
        events: Vec<String>,
    },

    /// Delete a subscription
    Delete { id: SubscriptionId },
}

fn subscription_params(endpoint: String, events: Vec<String>) -> Params {
    let mut params = Params::new();
    params.insert("endpoint".to_string(), Value::String(endpoint));
    params.insert(
        "events".to_string(),
        Value::Array(events.into_iter().map(Value::String).collect()),
    );
    params
}

pub async fn handle(client: &Client, cmd: SubscriptionsCommand) -> Result<()> {
    let notifications = client.notifications();

    let response = match cmd.command {
        SubscriptionsSubcommand::List => notifications.list().await,
        SubscriptionsSubcommand::Get { id } => notifications.get(&id).await,
        SubscriptionsSubcommand::Create { endpoint, events } => {
            notifications
                .create(subscription_params(endpoint, events))
                .await
        }
        SubscriptionsSubcommand::Delete { id } => notifications.delete(&id).await,
    }
    .context("Subscription request failed")?;

    print(&response)
}

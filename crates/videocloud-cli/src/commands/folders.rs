//! Folder subcommands.

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use serde_json::Value;
use videocloud::{Client, FolderId, Params, VideoId};

use super::{ParamArgs, print};

#[derive(Args, Debug)]
pub struct FoldersCommand {
    #[command(subcommand)]
    pub command: FoldersSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum FoldersSubcommand {
    /// List folders
    List(ParamArgs),

    /// Fetch a folder
    Get { id: FolderId },

    /// List the videos in a folder
    Videos {
        id: FolderId,
        #[command(flatten)]
        params: ParamArgs,
    },

    /// Move a video into a folder
    AddVideo { id: FolderId, video: VideoId },

    /// Take a video out of a folder
    RemoveVideo { id: FolderId, video: VideoId },

    /// Create a folder
    Create {
        #[arg(long)]
        name: String,
    },

    /// Rename a folder
    Rename {
        id: FolderId,
        #[arg(long)]
        name: String,
    },

    /// Delete a folder. Its videos are kept.
    Delete { id: FolderId },
}

fn name_param(name: String) -> Params {
    let mut params = Params::new();
    params.insert("name".to_string(), Value::String(name));
    params
}

pub async fn handle(client: &Client, cmd: FoldersCommand) -> Result<()> {
    let folders = client.folders();

    let response = match cmd.command {
        FoldersSubcommand::List(params) => folders.list(params.into_params()?).await,
        FoldersSubcommand::Get { id } => folders.get(&id).await,
        FoldersSubcommand::Videos { id, params } => {
            folders.videos(&id, params.into_params()?).await
        }
        FoldersSubcommand::AddVideo { id, video } => {
            folders.add_video(&id, &video, Params::new()).await
        }
        FoldersSubcommand::RemoveVideo { id, video } => folders.remove_video(&id, &video).await,
        FoldersSubcommand::Create { name } => folders.create(name_param(name)).await,
        FoldersSubcommand::Rename { id, name } => folders.rename(&id, name_param(name)).await,
        FoldersSubcommand::Delete { id } => folders.delete(&id).await,
    }
    .context("Folder request failed")?;

    print(&response)
}

//! Playlist subcommands.

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use videocloud::{Client, PlaylistId};

use super::{ParamArgs, print};

#[derive(Args, Debug)]
pub struct PlaylistsCommand {
    #[command(subcommand)]
    pub command: PlaylistsSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum PlaylistsSubcommand {
    /// List or search playlists
    List(ParamArgs),

    /// Count playlists
    Count(ParamArgs),

    /// Fetch a playlist
    Get { id: PlaylistId },

    /// Count the videos in a playlist
    VideoCount { id: PlaylistId },

    /// List the videos in a playlist
    Videos { id: PlaylistId },

    /// Create a playlist (name and type are required)
    Create(ParamArgs),

    /// Update a playlist
    Update {
        id: PlaylistId,
        #[command(flatten)]
        params: ParamArgs,
    },

    /// Delete a playlist
    Delete { id: PlaylistId },
}

pub async fn handle(client: &Client, cmd: PlaylistsCommand) -> Result<()> {
    let playlists = client.playlists();

    let response = match cmd.command {
        PlaylistsSubcommand::List(params) => playlists.list(params.into_params()?).await,
        PlaylistsSubcommand::Count(params) => playlists.count(params.into_params()?).await,
        PlaylistsSubcommand::Get { id } => playlists.get(&id).await,
        PlaylistsSubcommand::VideoCount { id } => playlists.video_count(&id).await,
        PlaylistsSubcommand::Videos { id } => playlists.videos(&id).await,
        PlaylistsSubcommand::Create(params) => playlists.create(params.into_params()?).await,
        PlaylistsSubcommand::Update { id, params } => {
            playlists.update(&id, params.into_params()?).await
        }
        PlaylistsSubcommand::Delete { id } => playlists.delete(&id).await,
    }
    .context("Playlist request failed")?;

    print(&response)
}

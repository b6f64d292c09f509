//! Video subcommands.

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use videocloud::{Client, VideoRef};

use super::{ParamArgs, print};

#[derive(Args, Debug)]
pub struct VideosCommand {
    #[command(subcommand)]
    pub command: VideosSubcommand,
}

/// Videos are addressed by id or by `ref:<reference_id>`.
#[derive(Subcommand, Debug)]
pub enum VideosSubcommand {
    /// List or search videos (q, sort, limit, offset)
    List(ParamArgs),

    /// Count videos matching a search
    Count(ParamArgs),

    /// Fetch a video
    Get { video: VideoRef },

    /// List playback sources
    Sources { video: VideoRef },

    /// Show poster and thumbnail images
    Images { video: VideoRef },

    /// Show the stored digital master
    DigitalMaster { video: VideoRef },

    /// List the manual playlists containing a video
    Playlists { video: VideoRef },

    /// Create a video object without media
    Create(ParamArgs),

    /// Update video metadata
    Update {
        video: VideoRef,
        #[command(flatten)]
        params: ParamArgs,
    },

    /// Remove a video from every manual playlist
    RemoveFromPlaylists { video: VideoRef },

    /// Delete a video
    Delete { video: VideoRef },

    /// List the account's custom metadata fields
    Fields,
}

pub async fn handle(client: &Client, cmd: VideosCommand) -> Result<()> {
    let videos = client.videos();

    let response = match cmd.command {
        VideosSubcommand::List(params) => videos.list(params.into_params()?).await,
        VideosSubcommand::Count(params) => videos.count(params.into_params()?).await,
        VideosSubcommand::Get { video } => videos.get(&video).await,
        VideosSubcommand::Sources { video } => videos.sources(&video).await,
        VideosSubcommand::Images { video } => videos.images(&video).await,
        VideosSubcommand::DigitalMaster { video } => videos.digital_master(&video).await,
        VideosSubcommand::Playlists { video } => videos.playlists(&video).await,
        VideosSubcommand::Create(params) => videos.create(params.into_params()?).await,
        VideosSubcommand::Update { video, params } => {
            videos.update(&video, params.into_params()?).await
        }
        VideosSubcommand::RemoveFromPlaylists { video } => {
            videos.remove_from_all_playlists(&video).await
        }
        VideosSubcommand::Delete { video } => videos.delete(&video).await,
        VideosSubcommand::Fields => videos.custom_fields().await,
    }
    .context("Video request failed")?;

    print(&response)
}

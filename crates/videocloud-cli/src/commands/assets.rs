//! Video asset subcommands.

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use videocloud::api::AssetKind;
use videocloud::{AssetId, Client, VideoRef};

use super::{ParamArgs, print};

#[derive(Args, Debug)]
pub struct AssetsCommand {
    #[command(subcommand)]
    pub command: AssetsSubcommand,
}

/// KIND is one of renditions, hls, hds, ism, ismc, dash, poster,
/// thumbnail or caption.
#[derive(Subcommand, Debug)]
pub enum AssetsSubcommand {
    /// List a video's assets of one kind
    List { kind: AssetKind, video: VideoRef },

    /// Fetch one asset
    Get {
        kind: AssetKind,
        video: VideoRef,
        asset: AssetId,
    },

    /// Record a remote asset (pass remote_url and friends as params)
    Add {
        kind: AssetKind,
        video: VideoRef,
        #[command(flatten)]
        params: ParamArgs,
    },

    /// Update a remote asset
    Update {
        kind: AssetKind,
        video: VideoRef,
        asset: AssetId,
        #[command(flatten)]
        params: ParamArgs,
    },

    /// Delete an asset
    Delete {
        kind: AssetKind,
        video: VideoRef,
        asset: AssetId,
    },
}

pub async fn handle(client: &Client, cmd: AssetsCommand) -> Result<()> {
    let assets = client.assets();

    let response = match cmd.command {
        AssetsSubcommand::List { kind, video } => assets.list(kind, &video).await,
        AssetsSubcommand::Get { kind, video, asset } => assets.get(kind, &video, &asset).await,
        AssetsSubcommand::Add {
            kind,
            video,
            params,
        } => assets.add(kind, &video, params.into_params()?).await,
        AssetsSubcommand::Update {
            kind,
            video,
            asset,
            params,
        } => {
            assets
                .update(kind, &video, &asset, params.into_params()?)
                .await
        }
        AssetsSubcommand::Delete { kind, video, asset } => {
            assets.delete(kind, &video, &asset).await
        }
    }
    .context("Asset request failed")?;

    print(&response)
}

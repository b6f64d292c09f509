//! Dynamic Ingest subcommands.

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use videocloud::api::{IngestRequest, IngestSource};
use videocloud::{Client, VideoId};

use super::{ParamArgs, print};

#[derive(Args, Debug)]
pub struct IngestCommand {
    #[command(subcommand)]
    pub command: IngestSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum IngestSubcommand {
    /// Create a video object through the ingest host
    CreateVideo(ParamArgs),

    /// Ingest media into an existing video
    Request(IngestRequestArgs),
}

#[derive(Args, Debug)]
pub struct IngestRequestArgs {
    /// Video to ingest into
    pub video: VideoId,

    /// URL of the master file
    #[arg(long)]
    pub master: Option<String>,

    /// Ingest profile name
    #[arg(long)]
    pub profile: Option<String>,

    /// URL notified when the job completes; repeatable
    #[arg(long = "callback")]
    pub callbacks: Vec<String>,

    /// Capture poster and thumbnail images from the video
    #[arg(long)]
    pub capture_images: Option<bool>,

    /// URL of a poster image
    #[arg(long)]
    pub poster: Option<String>,

    /// URL of a thumbnail image
    #[arg(long)]
    pub thumbnail: Option<String>,
}

impl IngestRequestArgs {
    fn request(&self) -> IngestRequest {
        let source = |url: &Option<String>| url.clone().map(|url| IngestSource { url });
        IngestRequest {
            master: source(&self.master),
            profile: self.profile.clone(),
            callbacks: self.callbacks.clone(),
            capture_images: self.capture_images,
            poster: source(&self.poster),
            thumbnail: source(&self.thumbnail),
        }
    }
}

pub async fn handle(client: &Client, cmd: IngestCommand) -> Result<()> {
    let ingest = client.ingest();

    let response = match cmd.command {
        IngestSubcommand::CreateVideo(params) => ingest.create_video(params.into_params()?).await,
        IngestSubcommand::Request(args) => {
            ingest.ingest(&args.video, args.request().into()).await
        }
    }
    .context("Ingest request failed")?;

    print(&response)
}

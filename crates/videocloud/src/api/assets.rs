//! CMS video asset endpoints.
//!
//! Every asset kind shares the same five operations below
//! `/videos/{video}/assets/{kind}`. Adding or updating an asset only records
//! the location of a remote file; ingested assets go through Dynamic Ingest.

use std::fmt;
use std::str::FromStr;

use reqwest::Method;
use serde_json::Value;
use tracing::instrument;

use crate::client::Client;
use crate::error::{Error, InvalidInputError};
use crate::http::Params;
use crate::types::{AssetId, VideoRef};

/// The kinds of asset a video can carry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AssetKind {
    /// Remote renditions.
    Rendition,
    /// HLS master manifest.
    HlsManifest,
    /// HDS manifest.
    HdsManifest,
    /// Smooth Streaming server manifest.
    IsmManifest,
    /// Smooth Streaming client manifest.
    IsmcManifest,
    /// DASH manifests.
    DashManifest,
    /// Poster image.
    Poster,
    /// Thumbnail image.
    Thumbnail,
    /// Text track.
    Caption,
}

impl AssetKind {
    /// Every kind, in path-segment order.
    pub const ALL: [AssetKind; 9] = [
        AssetKind::Rendition,
        AssetKind::HlsManifest,
        AssetKind::HdsManifest,
        AssetKind::IsmManifest,
        AssetKind::IsmcManifest,
        AssetKind::DashManifest,
        AssetKind::Poster,
        AssetKind::Thumbnail,
        AssetKind::Caption,
    ];

    /// The path segment the CMS API uses for this kind.
    pub fn path_segment(self) -> &'static str {
        match self {
            AssetKind::Rendition => "renditions",
            AssetKind::HlsManifest => "hls_manifest",
            AssetKind::HdsManifest => "hds_manifest",
            AssetKind::IsmManifest => "ism_manifest",
            AssetKind::IsmcManifest => "ismc_manifest",
            AssetKind::DashManifest => "dash_manifests",
            AssetKind::Poster => "poster",
            AssetKind::Thumbnail => "thumbnail",
            AssetKind::Caption => "caption",
        }
    }
}

impl fmt::Display for AssetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path_segment())
    }
}

/// Accepts the path segment (`hls_manifest`) or a short name (`hls`).
impl FromStr for AssetKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let kind = match s {
            "renditions" | "rendition" => AssetKind::Rendition,
            "hls_manifest" | "hls" => AssetKind::HlsManifest,
            "hds_manifest" | "hds" => AssetKind::HdsManifest,
            "ism_manifest" | "ism" => AssetKind::IsmManifest,
            "ismc_manifest" | "ismc" => AssetKind::IsmcManifest,
            "dash_manifests" | "dash_manifest" | "dash" => AssetKind::DashManifest,
            "poster" => AssetKind::Poster,
            "thumbnail" => AssetKind::Thumbnail,
            "caption" | "captions" => AssetKind::Caption,
            other => {
                return Err(InvalidInputError::Id {
                    kind: "asset kind",
                    value: other.to_string(),
                    reason: "unknown asset kind".to_string(),
                }
                .into());
            }
        };
        Ok(kind)
    }
}

/// Asset endpoints. Obtained from [`Client::assets`].
#[derive(Debug, Clone, Copy)]
pub struct Assets<'a> {
    client: &'a Client,
}

impl<'a> Assets<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// List the video's assets of one kind.
    #[instrument(skip(self))]
    pub async fn list(&self, kind: AssetKind, video: &VideoRef) -> Result<Value, Error> {
        let url = self.collection_url(kind, video);
        self.client.call(Method::GET, url, Params::new()).await
    }

    /// Fetch one asset.
    #[instrument(skip(self))]
    pub async fn get(
        &self,
        kind: AssetKind,
        video: &VideoRef,
        asset: &AssetId,
    ) -> Result<Value, Error> {
        let url = self.item_url(kind, video, asset);
        self.client.call(Method::GET, url, Params::new()).await
    }

    /// Record a remote asset. `params` usually carries `remote_url` plus
    /// kind-specific fields.
    #[instrument(skip(self, params))]
    pub async fn add(
        &self,
        kind: AssetKind,
        video: &VideoRef,
        params: Params,
    ) -> Result<Value, Error> {
        let url = self.collection_url(kind, video);
        self.client.call(Method::POST, url, params).await
    }

    /// Point an existing remote asset at new values.
    #[instrument(skip(self, params))]
    pub async fn update(
        &self,
        kind: AssetKind,
        video: &VideoRef,
        asset: &AssetId,
        params: Params,
    ) -> Result<Value, Error> {
        let url = self.item_url(kind, video, asset);
        self.client.call(Method::PATCH, url, params).await
    }

    /// Delete an asset.
    #[instrument(skip(self))]
    pub async fn delete(
        &self,
        kind: AssetKind,
        video: &VideoRef,
        asset: &AssetId,
    ) -> Result<Value, Error> {
        let url = self.item_url(kind, video, asset);
        self.client.call(Method::DELETE, url, Params::new()).await
    }

    fn collection_url(&self, kind: AssetKind, video: &VideoRef) -> String {
        self.client
            .cms_endpoint(&format!("videos/{}/assets/{}", video, kind))
    }

    fn item_url(&self, kind: AssetKind, video: &VideoRef, asset: &AssetId) -> String {
        self.client
            .cms_endpoint(&format!("videos/{}/assets/{}/{}", video, kind, asset))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_segments_round_trip_through_from_str() {
        for kind in AssetKind::ALL {
            assert_eq!(kind.path_segment().parse::<AssetKind>().unwrap(), kind);
        }
    }

    #[test]
    fn short_names_parse() {
        assert_eq!("hls".parse::<AssetKind>().unwrap(), AssetKind::HlsManifest);
        assert_eq!("dash".parse::<AssetKind>().unwrap(), AssetKind::DashManifest);
    }

    #[test]
    fn dash_uses_plural_segment() {
        assert_eq!(AssetKind::DashManifest.to_string(), "dash_manifests");
    }

    #[test]
    fn unknown_kind_is_rejected() {
        assert!("subtitles".parse::<AssetKind>().is_err());
    }
}

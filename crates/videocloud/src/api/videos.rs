//! CMS video endpoints.

use reqwest::Method;
use serde_json::Value;
use tracing::instrument;

use crate::client::Client;
use crate::error::Error;
use crate::http::Params;
use crate::types::VideoRef;

/// Video endpoints under `/v1/accounts/{account_id}/videos`.
///
/// Obtained from [`Client::videos`].
#[derive(Debug, Clone, Copy)]
pub struct Videos<'a> {
    client: &'a Client,
}

impl<'a> Videos<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Get a page of videos. `params` may carry `q`, `sort`, `limit`, `offset`.
    #[instrument(skip(self, params))]
    pub async fn list(&self, params: Params) -> Result<Value, Error> {
        let url = self.client.cms_endpoint("videos");
        self.client.call(Method::GET, url, params).await
    }

    /// Count the videos in the account, or those matching a search.
    #[instrument(skip(self, params))]
    pub async fn count(&self, params: Params) -> Result<Value, Error> {
        let url = self.client.cms_endpoint("counts/videos");
        self.client.call(Method::GET, url, params).await
    }

    /// Fetch one video.
    #[instrument(skip(self))]
    pub async fn get(&self, video: &VideoRef) -> Result<Value, Error> {
        self.get_path(video, "").await
    }

    /// Renditions available for playback.
    #[instrument(skip(self))]
    pub async fn sources(&self, video: &VideoRef) -> Result<Value, Error> {
        self.get_path(video, "/sources").await
    }

    /// Poster and thumbnail images.
    #[instrument(skip(self))]
    pub async fn images(&self, video: &VideoRef) -> Result<Value, Error> {
        self.get_path(video, "/images").await
    }

    /// The stored digital master, if any.
    #[instrument(skip(self))]
    pub async fn digital_master(&self, video: &VideoRef) -> Result<Value, Error> {
        self.get_path(video, "/digital_master").await
    }

    /// Manual playlists that contain the video.
    #[instrument(skip(self))]
    pub async fn playlists(&self, video: &VideoRef) -> Result<Value, Error> {
        self.get_path(video, "/references").await
    }

    /// Create a video object. This does not ingest media; see
    /// [`Ingest`](crate::api::Ingest).
    #[instrument(skip(self, params))]
    pub async fn create(&self, params: Params) -> Result<Value, Error> {
        let url = self.client.cms_endpoint("videos");
        self.client.call(Method::POST, url, params).await
    }

    /// Update video metadata.
    #[instrument(skip(self, params))]
    pub async fn update(&self, video: &VideoRef, params: Params) -> Result<Value, Error> {
        let url = self.client.cms_endpoint(&format!("videos/{}", video));
        self.client.call(Method::PATCH, url, params).await
    }

    /// Remove the video from every manual playlist.
    #[instrument(skip(self))]
    pub async fn remove_from_all_playlists(&self, video: &VideoRef) -> Result<Value, Error> {
        let url = self.client.cms_endpoint(&format!("videos/{}/references", video));
        self.client.call(Method::DELETE, url, Params::new()).await
    }

    /// Delete a video and its assets.
    #[instrument(skip(self))]
    pub async fn delete(&self, video: &VideoRef) -> Result<Value, Error> {
        let url = self.client.cms_endpoint(&format!("videos/{}", video));
        self.client.call(Method::DELETE, url, Params::new()).await
    }

    /// Custom metadata fields defined for the account.
    #[instrument(skip(self))]
    pub async fn custom_fields(&self) -> Result<Value, Error> {
        let url = self.client.cms_endpoint("video_fields");
        self.client.call(Method::GET, url, Params::new()).await
    }

    async fn get_path(&self, video: &VideoRef, suffix: &str) -> Result<Value, Error> {
        let url = self.client.cms_endpoint(&format!("videos/{}{}", video, suffix));
        self.client.call(Method::GET, url, Params::new()).await
    }
}

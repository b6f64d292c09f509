//! CMS playlist endpoints.

use reqwest::Method;
use serde_json::Value;
use tracing::instrument;

use crate::client::Client;
use crate::error::Error;
use crate::http::Params;
use crate::types::PlaylistId;

/// Playlist endpoints. Obtained from [`Client::playlists`].
#[derive(Debug, Clone, Copy)]
pub struct Playlists<'a> {
    client: &'a Client,
}

impl<'a> Playlists<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Get a page of playlists. `params` may carry `q`, `sort`, `limit`, `offset`.
    #[instrument(skip(self, params))]
    pub async fn list(&self, params: Params) -> Result<Value, Error> {
        let url = self.client.cms_endpoint("playlists");
        self.client.call(Method::GET, url, params).await
    }

    /// Count the playlists in the account, or those matching a search.
    #[instrument(skip(self, params))]
    pub async fn count(&self, params: Params) -> Result<Value, Error> {
        let url = self.client.cms_endpoint("counts/playlists");
        self.client.call(Method::GET, url, params).await
    }

    /// Fetch one playlist.
    #[instrument(skip(self))]
    pub async fn get(&self, id: &PlaylistId) -> Result<Value, Error> {
        let url = self.client.cms_endpoint(&format!("playlists/{}", id));
        self.client.call(Method::GET, url, Params::new()).await
    }

    /// Number of videos in the playlist.
    #[instrument(skip(self))]
    pub async fn video_count(&self, id: &PlaylistId) -> Result<Value, Error> {
        let url = self.client.cms_endpoint(&format!("counts/playlists/{}/videos", id));
        self.client.call(Method::GET, url, Params::new()).await
    }

    /// Video objects in the playlist.
    #[instrument(skip(self))]
    pub async fn videos(&self, id: &PlaylistId) -> Result<Value, Error> {
        let url = self.client.cms_endpoint(&format!("playlists/{}/videos", id));
        self.client.call(Method::GET, url, Params::new()).await
    }

    /// Create a playlist. `params` carries `name` and `type`.
    #[instrument(skip(self, params))]
    pub async fn create(&self, params: Params) -> Result<Value, Error> {
        let url = self.client.cms_endpoint("playlists");
        self.client.call(Method::POST, url, params).await
    }

    /// Update playlist fields.
    #[instrument(skip(self, params))]
    pub async fn update(&self, id: &PlaylistId, params: Params) -> Result<Value, Error> {
        let url = self.client.cms_endpoint(&format!("playlists/{}", id));
        self.client.call(Method::PATCH, url, params).await
    }

    /// Delete a playlist. Its videos are kept.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: &PlaylistId) -> Result<Value, Error> {
        let url = self.client.cms_endpoint(&format!("playlists/{}", id));
        self.client.call(Method::DELETE, url, Params::new()).await
    }
}

//! CMS folder endpoints.

use reqwest::Method;
use serde_json::Value;
use tracing::instrument;

use crate::client::Client;
use crate::error::Error;
use crate::http::Params;
use crate::types::{FolderId, VideoId};

/// Folder endpoints. Obtained from [`Client::folders`].
#[derive(Debug, Clone, Copy)]
pub struct Folders<'a> {
    client: &'a Client,
}

impl<'a> Folders<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// List the folders in the account.
    #[instrument(skip(self, params))]
    pub async fn list(&self, params: Params) -> Result<Value, Error> {
        let url = self.client.cms_endpoint("folders");
        self.client.call(Method::GET, url, params).await
    }

    /// Folder name and video count.
    #[instrument(skip(self))]
    pub async fn get(&self, id: &FolderId) -> Result<Value, Error> {
        let url = self.client.cms_endpoint(&format!("folders/{}", id));
        self.client.call(Method::GET, url, Params::new()).await
    }

    /// Videos in the folder. `params` may carry `limit` and `offset`.
    #[instrument(skip(self, params))]
    pub async fn videos(&self, id: &FolderId, params: Params) -> Result<Value, Error> {
        let url = self.client.cms_endpoint(&format!("folders/{}/videos", id));
        self.client.call(Method::GET, url, params).await
    }

    /// Move a video into the folder. A video lives in at most one folder.
    #[instrument(skip(self, params))]
    pub async fn add_video(
        &self,
        id: &FolderId,
        video: &VideoId,
        params: Params,
    ) -> Result<Value, Error> {
        let url = self
            .client
            .cms_endpoint(&format!("folders/{}/videos/{}", id, video));
        self.client.call(Method::PUT, url, params).await
    }

    /// Take a video out of the folder.
    #[instrument(skip(self))]
    pub async fn remove_video(&self, id: &FolderId, video: &VideoId) -> Result<Value, Error> {
        let url = self
            .client
            .cms_endpoint(&format!("folders/{}/videos/{}", id, video));
        self.client.call(Method::DELETE, url, Params::new()).await
    }

    /// Create a folder. `params` carries `name`.
    #[instrument(skip(self, params))]
    pub async fn create(&self, params: Params) -> Result<Value, Error> {
        let url = self.client.cms_endpoint("folders");
        self.client.call(Method::POST, url, params).await
    }

    /// Rename a folder. `params` carries the new `name`.
    #[instrument(skip(self, params))]
    pub async fn rename(&self, id: &FolderId, params: Params) -> Result<Value, Error> {
        let url = self.client.cms_endpoint(&format!("folders/{}", id));
        self.client.call(Method::PATCH, url, params).await
    }

    /// Delete a folder. Its videos are kept.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: &FolderId) -> Result<Value, Error> {
        let url = self.client.cms_endpoint(&format!("folders/{}", id));
        self.client.call(Method::DELETE, url, Params::new()).await
    }
}

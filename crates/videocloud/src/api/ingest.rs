//! Dynamic Ingest endpoints.
//!
//! Ingest requests are asynchronous: the API answers with a job id and the
//! outcome is reported later to the callback URLs, if any.

use reqwest::Method;
use serde::Serialize;
use serde_json::Value;
use tracing::instrument;

use crate::client::Client;
use crate::error::Error;
use crate::http::Params;
use crate::types::VideoId;

/// Dynamic Ingest endpoints. Obtained from [`Client::ingest`].
#[derive(Debug, Clone, Copy)]
pub struct Ingest<'a> {
    client: &'a Client,
}

impl<'a> Ingest<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Create a video object through the ingest host, ahead of ingesting
    /// media into it.
    #[instrument(skip(self, params))]
    pub async fn create_video(&self, params: Params) -> Result<Value, Error> {
        let url = self.client.ingest_endpoint("videos");
        self.client.call(Method::POST, url, params).await
    }

    /// Ask for media to be fetched and transcoded into an existing video.
    ///
    /// A bare "Internal Server Error" from this endpoint usually means the
    /// ingest profile in `params` does not exist for the account.
    #[instrument(skip(self, params))]
    pub async fn ingest(&self, video: &VideoId, params: Params) -> Result<Value, Error> {
        let url = self
            .client
            .ingest_endpoint(&format!("videos/{}/ingest-requests", video));
        self.client.call(Method::POST, url, params).await
    }
}

/// Location of a file to ingest.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct IngestSource {
    /// Publicly reachable URL of the file.
    pub url: String,
}

/// Typed body for [`Ingest::ingest`].
///
/// # Example
///
/// ```
/// use videocloud::api::IngestRequest;
///
/// let params = IngestRequest::master("https://example.com/master.mp4")
///     .profile("multi-platform-standard-static")
///     .callback("https://example.com/ingest-done")
///     .into_params();
///
/// assert_eq!(params["master"]["url"], "https://example.com/master.mp4");
/// assert_eq!(params["profile"], "multi-platform-standard-static");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct IngestRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    /// The video file to transcode.
    pub master: Option<IngestSource>,
    #[serde(skip_serializing_if = "Option::is_none")]
    /// Ingest profile name.
    pub profile: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    /// URLs notified when the job finishes.
    pub callbacks: Vec<String>,
    #[serde(rename = "capture-images", skip_serializing_if = "Option::is_none")]
    /// Capture poster and thumbnail from the video.
    pub capture_images: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    /// Poster image to attach.
    pub poster: Option<IngestSource>,
    #[serde(skip_serializing_if = "Option::is_none")]
    /// Thumbnail image to attach.
    pub thumbnail: Option<IngestSource>,
}

impl IngestRequest {
    /// Ingest the master file at `url`.
    pub fn master(url: impl Into<String>) -> Self {
        Self {
            master: Some(IngestSource { url: url.into() }),
            ..Self::default()
        }
    }

    /// Transcode with the named ingest profile.
    pub fn profile(mut self, profile: impl Into<String>) -> Self {
        self.profile = Some(profile.into());
        self
    }

    /// Notify `url` when the job finishes. May be called repeatedly.
    pub fn callback(mut self, url: impl Into<String>) -> Self {
        self.callbacks.push(url.into());
        self
    }

    /// Generate poster and thumbnail images from the video.
    pub fn capture_images(mut self, capture: bool) -> Self {
        self.capture_images = Some(capture);
        self
    }

    /// Attach the poster image at `url`.
    pub fn poster(mut self, url: impl Into<String>) -> Self {
        self.poster = Some(IngestSource { url: url.into() });
        self
    }

    /// Attach the thumbnail image at `url`.
    pub fn thumbnail(mut self, url: impl Into<String>) -> Self {
        self.thumbnail = Some(IngestSource { url: url.into() });
        self
    }

    /// Convert into request parameters.
    pub fn into_params(self) -> Params {
        match serde_json::to_value(self) {
            Ok(Value::Object(map)) => map,
            // A struct of strings, bools and vectors always serializes to an object.
            _ => Params::new(),
        }
    }
}

impl From<IngestRequest> for Params {
    fn from(request: IngestRequest) -> Self {
        request.into_params()
    }
}

//! videocloud - Video Cloud REST API client
//!
//! This library wraps the OAuth v3, CMS v1 and Dynamic Ingest v1 APIs.
//! A [`Client`] owns the configuration and the bearer-token [`Session`];
//! endpoint groups such as [`Client::videos`] borrow it and map one method
//! to one request.
//!
//! # Example
//!
//! ```no_run
//! use videocloud::{Client, PlaylistId};
//!
//! # async fn example() -> Result<(), videocloud::Error> {
//! let mut client = Client::from_env()?;
//! client.authenticate().await?;
//!
//! let playlist = PlaylistId::new("1234567890")?;
//! let videos = client.playlists().videos(&playlist).await?;
//!
//! for video in videos.as_array().into_iter().flatten() {
//!     println!("{}: {}", video["id"], video["name"]);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! Responses are returned as decoded [`serde_json::Value`]s whatever their
//! HTTP status; API errors arrive as JSON bodies for the caller to inspect.

pub mod api;
pub mod auth;
pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod types;

// Re-export primary types at crate root for convenience
pub use auth::{AccessToken, AuthOutcome, AuthState, Credentials, Session};
pub use client::Client;
pub use config::{BasicAuthPolicy, ClientConfig};
pub use error::Error;
pub use http::{Params, RequestSpec};
pub use reqwest::Method;
pub use types::{AccountId, ApiUrl, AssetId, FolderId, PlaylistId, SubscriptionId, VideoId, VideoRef};

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;

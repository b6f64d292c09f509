//! Endpoint groups.
//!
//! Each group borrows the [`Client`](crate::Client) and turns a method call
//! into one request against a fixed path template. They hold no state of
//! their own.

#![warn(missing_docs)]

mod assets;
mod folders;
mod ingest;
mod notifications;
mod playlists;
mod videos;

pub use assets::{AssetKind, Assets};
pub use folders::Folders;
pub use ingest::{Ingest, IngestRequest, IngestSource};
pub use notifications::Notifications;
pub use playlists::Playlists;
pub use videos::Videos;

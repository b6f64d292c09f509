//! Validated types for URLs and resource identifiers.

mod api_url;
mod ids;

pub use api_url::ApiUrl;
pub use ids::{AccountId, AssetId, FolderId, PlaylistId, SubscriptionId, VideoId, VideoRef};

//! Resource identifiers used as URL path segments.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, InvalidInputError};

/// Checks that `s` can be spliced into a URL path as a single segment.
fn validate_segment(kind: &'static str, s: &str) -> Result<(), Error> {
    let reject = |reason: String| -> Error {
        InvalidInputError::Id {
            kind,
            value: s.to_string(),
            reason,
        }
        .into()
    };

    if s.is_empty() {
        return Err(reject("cannot be empty".to_string()));
    }

    if s.len() > 256 {
        return Err(reject("exceeds maximum length of 256 characters".to_string()));
    }

    if s == "." || s == ".." {
        return Err(reject("cannot be '.' or '..'".to_string()));
    }

    for c in s.chars() {
        if c.is_whitespace() || c.is_control() || matches!(c, '/' | '?' | '#' | '%') {
            return Err(reject(format!("contains invalid character '{}'", c)));
        }
    }

    Ok(())
}

macro_rules! resource_id {
    ($(#[$meta:meta])* $name:ident, $kind:literal) => {
        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            #[doc = concat!("Create a new ", $kind, ", validating it as a path segment.")]
            pub fn new(s: impl Into<String>) -> Result<Self, Error> {
                let s = s.into();
                validate_segment($kind, &s)?;
                Ok(Self(s))
            }

            #[doc = concat!("Returns the ", $kind, " string.")]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::new(s)
            }
        }

        impl TryFrom<String> for $name {
            type Error = Error;

            fn try_from(s: String) -> Result<Self, Self::Error> {
                Self::new(s)
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

resource_id!(
    /// A Video Cloud publisher account id.
    AccountId,
    "account id"
);

resource_id!(
    /// A video id assigned by Video Cloud.
    VideoId,
    "video id"
);

resource_id!(
    /// A playlist id.
    PlaylistId,
    "playlist id"
);

resource_id!(
    /// A folder id.
    FolderId,
    "folder id"
);

resource_id!(
    /// A notification subscription id.
    SubscriptionId,
    "subscription id"
);

resource_id!(
    /// A video asset id (rendition, manifest, image or caption).
    AssetId,
    "asset id"
);

/// Addresses a video either by its id or by its reference id.
///
/// CMS endpoints accept `ref:{reference_id}` anywhere a video id goes.
///
/// # Example
///
/// ```
/// use videocloud::VideoRef;
///
/// let by_ref = VideoRef::reference("launch-trailer").unwrap();
/// assert_eq!(by_ref.to_string(), "ref:launch-trailer");
///
/// let by_id = VideoRef::id("4492075574001").unwrap();
/// assert_eq!(by_id.to_string(), "4492075574001");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum VideoRef {
    /// The Video Cloud assigned id.
    Id(VideoId),
    /// A publisher-assigned reference id.
    Reference(String),
}

impl VideoRef {
    /// Address a video by id.
    pub fn id(id: impl Into<String>) -> Result<Self, Error> {
        Ok(Self::Id(VideoId::new(id)?))
    }

    /// Address a video by reference id.
    pub fn reference(reference_id: impl Into<String>) -> Result<Self, Error> {
        let reference_id = reference_id.into();
        validate_segment("reference id", &reference_id)?;
        Ok(Self::Reference(reference_id))
    }
}

impl fmt::Display for VideoRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VideoRef::Id(id) => write!(f, "{}", id),
            VideoRef::Reference(reference_id) => write!(f, "ref:{}", reference_id),
        }
    }
}

/// Parses `ref:{reference_id}` as a reference, anything else as an id.
impl FromStr for VideoRef {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.strip_prefix("ref:") {
            Some(reference_id) => Self::reference(reference_id),
            None => Self::id(s),
        }
    }
}

impl From<VideoId> for VideoRef {
    fn from(id: VideoId) -> Self {
        VideoRef::Id(id)
    }
}

//! API base URL type.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use url::Url;

use crate::error::{Error, InvalidInputError};

/// A validated API base URL (CMS, Dynamic Ingest or OAuth host).
///
/// The URL must be absolute and use HTTPS; plain HTTP is accepted only for
/// localhost so that mock servers can stand in during tests.
///
/// # Example
///
/// ```
/// use videocloud::ApiUrl;
///
/// let cms = ApiUrl::new("https://cms.api.brightcove.com/").unwrap();
/// assert_eq!(cms.endpoint("/v1/accounts/123/videos"),
///            "https://cms.api.brightcove.com/v1/accounts/123/videos");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ApiUrl(Url);

impl ApiUrl {
    /// Create a new API URL from a string, validating the format.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is not valid or doesn't meet requirements.
    pub fn new(s: impl AsRef<str>) -> Result<Self, Error> {
        let s = s.as_ref();
        let url = Url::parse(s).map_err(|e| InvalidInputError::ApiUrl {
            value: s.to_string(),
            reason: e.to_string(),
        })?;

        Self::validate(&url, s)?;

        Ok(Self(url))
    }

    /// Returns the full URL for an absolute endpoint path.
    pub fn endpoint(&self, path: &str) -> String {
        // Url always renders a root path as "/", and a configured base may
        // carry its own trailing slash.
        let base = self.0.as_str().trim_end_matches('/');
        format!("{}/{}", base, path.trim_start_matches('/'))
    }

    /// Returns the base URL as a string.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Returns the host string.
    pub fn host(&self) -> Option<&str> {
        self.0.host_str()
    }

    fn validate(url: &Url, original: &str) -> Result<(), Error> {
        if url.cannot_be_a_base() {
            return Err(InvalidInputError::ApiUrl {
                value: original.to_string(),
                reason: "must be an absolute URL".to_string(),
            }
            .into());
        }

        let scheme = url.scheme();
        let is_localhost = url
            .host_str()
            .is_some_and(|h| h == "localhost" || h == "127.0.0.1" || h == "[::1]");

        if scheme != "https" && !(scheme == "http" && is_localhost) {
            return Err(InvalidInputError::ApiUrl {
                value: original.to_string(),
                reason: "must use HTTPS (HTTP allowed only for localhost)".to_string(),
            }
            .into());
        }

        if url.host_str().is_none() {
            return Err(InvalidInputError::ApiUrl {
                value: original.to_string(),
                reason: "must have a host".to_string(),
            }
            .into());
        }

        if url.query().is_some() || url.fragment().is_some() {
            return Err(InvalidInputError::ApiUrl {
                value: original.to_string(),
                reason: "must not carry a query or fragment".to_string(),
            }
            .into());
        }

        Ok(())
    }
}

impl fmt::Display for ApiUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ApiUrl {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl Serialize for ApiUrl {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.0.as_str())
    }
}

impl<'de> Deserialize<'de> for ApiUrl {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        ApiUrl::new(&s).map_err(serde::de::Error::custom)
    }
}

impl AsRef<str> for ApiUrl {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_https_url() {
        let url = ApiUrl::new("https://cms.api.brightcove.com").unwrap();
        assert_eq!(url.host(), Some("cms.api.brightcove.com"));
    }

    #[test]
    fn valid_localhost_http() {
        let url = ApiUrl::new("http://127.0.0.1:8080").unwrap();
        assert_eq!(url.host(), Some("127.0.0.1"));
    }

    #[test]
    fn endpoint_construction() {
        let url = ApiUrl::new("https://oauth.brightcove.com").unwrap();
        assert_eq!(
            url.endpoint("/v3/access_token"),
            "https://oauth.brightcove.com/v3/access_token"
        );
    }

    #[test]
    fn endpoint_keeps_base_path() {
        let url = ApiUrl::new("http://localhost:9000/proxy/").unwrap();
        assert_eq!(
            url.endpoint("v1/accounts/1/videos"),
            "http://localhost:9000/proxy/v1/accounts/1/videos"
        );
    }

    #[test]
    fn invalid_http_non_localhost() {
        assert!(ApiUrl::new("http://cms.api.brightcove.com").is_err());
    }

    #[test]
    fn invalid_relative_url() {
        assert!(ApiUrl::new("/v1/accounts").is_err());
    }

    #[test]
    fn invalid_with_query() {
        assert!(ApiUrl::new("https://cms.api.brightcove.com/?a=b").is_err());
    }

    #[test]
    fn deserializes_with_validation() {
        let url: ApiUrl = serde_json::from_str("\"https://ingest.api.brightcove.com\"").unwrap();
        assert_eq!(url.host(), Some("ingest.api.brightcove.com"));
        assert!(serde_json::from_str::<ApiUrl>("\"ftp://example.com\"").is_err());
    }
}

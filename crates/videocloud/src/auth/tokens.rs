//! Access token type.

use std::fmt;

/// A bearer token for authenticated CMS and Dynamic Ingest requests.
///
/// Access tokens are short-lived and obtained through the client-credentials
/// flow.
///
/// # Security
///
/// - Never logged or displayed in Debug output
/// - Treat as opaque; do not parse or inspect
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    /// Wrap a token value.
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Returns the token value.
    ///
    /// # Security
    ///
    /// Use only when constructing HTTP authorization headers or when
    /// handing the token to another trusted component.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the `Authorization` header line carrying this token.
    pub(crate) fn bearer_header(&self) -> String {
        format!("Authorization: Bearer {}", self.0)
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("AccessToken").field(&"[REDACTED]").finish()
    }
}

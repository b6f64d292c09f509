//! Client configuration.

use std::time::Duration;

use crate::auth::Credentials;
use crate::error::{Error, InvalidInputError};
use crate::types::{AccountId, ApiUrl};

/// Default CMS API base URL.
pub const DEFAULT_CMS_URL: &str = "https://cms.api.brightcove.com";

/// Default Dynamic Ingest API base URL.
pub const DEFAULT_INGEST_URL: &str = "https://ingest.api.brightcove.com";

/// Default OAuth API base URL.
pub const DEFAULT_AUTH_URL: &str = "https://oauth.brightcove.com";

/// Environment variables read by [`ClientConfig::from_env`].
pub mod env {
    pub const ACCOUNT_ID: &str = "VIDEOCLOUD_ACCOUNT_ID";
    pub const CLIENT_ID: &str = "VIDEOCLOUD_CLIENT_ID";
    pub const CLIENT_SECRET: &str = "VIDEOCLOUD_CLIENT_SECRET";
    pub const CMS_URL: &str = "VIDEOCLOUD_CMS_URL";
    pub const INGEST_URL: &str = "VIDEOCLOUD_INGEST_URL";
    pub const AUTH_URL: &str = "VIDEOCLOUD_AUTH_URL";
    pub const TIMEOUT_SECS: &str = "VIDEOCLOUD_TIMEOUT_SECS";
}

/// When the client id and secret are sent as HTTP basic authentication.
///
/// The token endpoint always receives basic auth. Whether the other
/// endpoints also receive it is configurable; sending it everywhere is the
/// long-standing behavior of this client, so it stays the default.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BasicAuthPolicy {
    /// Attach basic auth to every request.
    #[default]
    EveryRequest,
    /// Attach basic auth only to the token request.
    TokenRequestOnly,
}

/// Everything a [`Client`](crate::Client) needs to talk to the APIs.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    pub(crate) account_id: AccountId,
    pub(crate) credentials: Credentials,
    pub(crate) cms_url: ApiUrl,
    pub(crate) ingest_url: ApiUrl,
    pub(crate) auth_url: ApiUrl,
    pub(crate) timeout: Option<Duration>,
    pub(crate) basic_auth: BasicAuthPolicy,
    pub(crate) strict_json: bool,
    pub(crate) user_agent: String,
}

impl ClientConfig {
    /// Start building a configuration with the default API hosts.
    pub fn builder(account_id: AccountId, credentials: Credentials) -> ClientConfigBuilder {
        ClientConfigBuilder {
            account_id,
            credentials,
            cms_url: None,
            ingest_url: None,
            auth_url: None,
            timeout: None,
            basic_auth: BasicAuthPolicy::default(),
            strict_json: false,
            user_agent: None,
        }
    }

    /// Read a configuration from `VIDEOCLOUD_*` environment variables.
    ///
    /// The account id, client id and client secret are required; the base
    /// URLs and timeout are optional.
    pub fn from_env() -> Result<Self, Error> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> Result<Self, Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| {
            lookup(key)
                .filter(|v| !v.is_empty())
                .ok_or_else(|| -> Error {
                    InvalidInputError::Config {
                        key: key.to_string(),
                        reason: "not set".to_string(),
                    }
                    .into()
                })
        };

        let account_id = AccountId::new(required(env::ACCOUNT_ID)?)?;
        let credentials = Credentials::new(
            required(env::CLIENT_ID)?,
            required(env::CLIENT_SECRET)?,
        );

        let mut builder = Self::builder(account_id, credentials);

        if let Some(url) = lookup(env::CMS_URL) {
            builder = builder.cms_url(ApiUrl::new(url)?);
        }
        if let Some(url) = lookup(env::INGEST_URL) {
            builder = builder.ingest_url(ApiUrl::new(url)?);
        }
        if let Some(url) = lookup(env::AUTH_URL) {
            builder = builder.auth_url(ApiUrl::new(url)?);
        }
        if let Some(secs) = lookup(env::TIMEOUT_SECS) {
            let secs: u64 = secs.trim().parse().map_err(|_| InvalidInputError::Config {
                key: env::TIMEOUT_SECS.to_string(),
                reason: format!("'{}' is not a whole number of seconds", secs),
            })?;
            builder = builder.timeout(Duration::from_secs(secs));
        }

        builder.build()
    }

    /// Returns the account id used in every CMS and ingest path.
    pub fn account_id(&self) -> &AccountId {
        &self.account_id
    }

    /// Returns the client credentials.
    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Returns the CMS API base URL.
    pub fn cms_url(&self) -> &ApiUrl {
        &self.cms_url
    }

    /// Returns the Dynamic Ingest API base URL.
    pub fn ingest_url(&self) -> &ApiUrl {
        &self.ingest_url
    }

    /// Returns the OAuth API base URL.
    pub fn auth_url(&self) -> &ApiUrl {
        &self.auth_url
    }

    /// Returns the request timeout, if one is configured.
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Returns when basic auth is attached.
    pub fn basic_auth(&self) -> BasicAuthPolicy {
        self.basic_auth
    }

    /// Returns true if malformed JSON responses are reported as errors.
    pub fn strict_json(&self) -> bool {
        self.strict_json
    }
}

/// Builder for [`ClientConfig`].
#[derive(Debug)]
pub struct ClientConfigBuilder {
    account_id: AccountId,
    credentials: Credentials,
    cms_url: Option<ApiUrl>,
    ingest_url: Option<ApiUrl>,
    auth_url: Option<ApiUrl>,
    timeout: Option<Duration>,
    basic_auth: BasicAuthPolicy,
    strict_json: bool,
    user_agent: Option<String>,
}

impl ClientConfigBuilder {
    /// Override the CMS API base URL.
    pub fn cms_url(mut self, url: ApiUrl) -> Self {
        self.cms_url = Some(url);
        self
    }

    /// Override the Dynamic Ingest API base URL.
    pub fn ingest_url(mut self, url: ApiUrl) -> Self {
        self.ingest_url = Some(url);
        self
    }

    /// Override the OAuth API base URL.
    pub fn auth_url(mut self, url: ApiUrl) -> Self {
        self.auth_url = Some(url);
        self
    }

    /// Point all three APIs at one host. Handy for mock servers.
    pub fn all_urls(self, url: ApiUrl) -> Self {
        self.cms_url(url.clone())
            .ingest_url(url.clone())
            .auth_url(url)
    }

    /// Give up on a request after `timeout`. No retry follows.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Choose when basic auth is attached.
    pub fn basic_auth(mut self, policy: BasicAuthPolicy) -> Self {
        self.basic_auth = policy;
        self
    }

    /// Report malformed JSON responses as [`Error::Decode`] instead of
    /// decoding them to `null`.
    pub fn strict_json(mut self, strict: bool) -> Self {
        self.strict_json = strict;
        self
    }

    /// Override the `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Finish the configuration.
    pub fn build(self) -> Result<ClientConfig, Error> {
        let default_url = |url: Option<ApiUrl>, fallback: &str| match url {
            Some(url) => Ok(url),
            None => ApiUrl::new(fallback),
        };

        Ok(ClientConfig {
            account_id: self.account_id,
            credentials: self.credentials,
            cms_url: default_url(self.cms_url, DEFAULT_CMS_URL)?,
            ingest_url: default_url(self.ingest_url, DEFAULT_INGEST_URL)?,
            auth_url: default_url(self.auth_url, DEFAULT_AUTH_URL)?,
            timeout: self.timeout,
            basic_auth: self.basic_auth,
            strict_json: self.strict_json,
            user_agent: self
                .user_agent
                .unwrap_or_else(|| concat!("videocloud/", env!("CARGO_PKG_VERSION")).to_string()),
        })
    }
}

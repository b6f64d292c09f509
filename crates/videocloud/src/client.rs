//! The API client: configuration, transport and session in one place.

use chrono::Utc;
use reqwest::Method;
use serde_json::Value;
use tracing::{debug, info, instrument, warn};

use crate::api::{Assets, Folders, Ingest, Notifications, Playlists, Videos};
use crate::auth::{AuthOutcome, AuthState, Session};
use crate::config::{BasicAuthPolicy, ClientConfig};
use crate::error::{AuthError, Error};
use crate::http::{Connection, Params, RequestSpec};

const TOKEN_PATH: &str = "/v3/access_token?grant_type=client_credentials";
const FORM_CONTENT_TYPE: &str = "Content-type: application/x-www-form-urlencoded";
const JSON_CONTENT_TYPE: &str = "Content-type: application/json";

/// A client for one Video Cloud account.
///
/// The client owns its [`Session`]. [`Client::authenticate`] fills it in and
/// every endpoint call reads it; nothing refreshes it behind your back.
///
/// # Example
///
/// ```no_run
/// use videocloud::{AccountId, Client, ClientConfig, Credentials, VideoRef};
///
/// # async fn example() -> Result<(), videocloud::Error> {
/// let config = ClientConfig::builder(
///     AccountId::new("57838016001")?,
///     Credentials::new("client-id", "client-secret"),
/// )
/// .build()?;
///
/// let mut client = Client::new(config)?;
/// let outcome = client.authenticate().await?;
/// assert!(outcome.is_granted());
///
/// let video = client.videos().get(&VideoRef::id("4492075574001")?).await?;
/// println!("{}", video["name"]);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Client {
    config: ClientConfig,
    connection: Connection,
    session: Option<Session>,
}

impl Client {
    /// Create an unauthenticated client.
    pub fn new(config: ClientConfig) -> Result<Self, Error> {
        let connection = Connection::new(&config)?;
        Ok(Self {
            config,
            connection,
            session: None,
        })
    }

    /// Create a client from `VIDEOCLOUD_*` environment variables.
    pub fn from_env() -> Result<Self, Error> {
        Self::new(ClientConfig::from_env()?)
    }

    /// Returns the configuration this client was built with.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Returns the current session, if any.
    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    /// Install a session obtained elsewhere, replacing the current one.
    pub fn set_session(&mut self, session: Session) {
        self.session = Some(session);
    }

    /// Returns where the client stands in the token lifecycle.
    pub fn auth_state(&self) -> AuthState {
        AuthState::of(self.session.as_ref(), Utc::now())
    }

    /// Request an access token with the client-credentials grant.
    ///
    /// On success the token and its expiry are stored on the client. When
    /// the response carries no `access_token` the current session is left
    /// alone and the raw response comes back as [`AuthOutcome::Rejected`].
    ///
    /// # Errors
    ///
    /// Only transport failures are errors.
    #[instrument(skip(self), fields(client_id = %self.config.credentials.client_id()))]
    pub async fn authenticate(&mut self) -> Result<AuthOutcome, Error> {
        info!("Requesting access token");

        let spec = RequestSpec::new(Method::POST, self.config.auth_url.endpoint(TOKEN_PATH))
            .header(FORM_CONTENT_TYPE);

        let response = self.connection.execute(&spec, true).await?;

        match Session::from_token_response(&response, Utc::now()) {
            Some(session) => {
                debug!(expires_at = %session.expires_at(), "Access token granted");
                self.session = Some(session.clone());
                Ok(AuthOutcome::Granted(session))
            }
            None => {
                warn!("Token response carried no access_token");
                Ok(AuthOutcome::Rejected(response))
            }
        }
    }

    /// Issue one request and return the decoded JSON body.
    ///
    /// `headers` are `"Name: value"` lines applied verbatim. `params` become
    /// the query string of a GET and the JSON body of any other verb. Basic
    /// auth is attached according to the configured [`BasicAuthPolicy`].
    ///
    /// Non-2xx responses are returned like any other; a body that is not
    /// JSON comes back as `Value::Null` unless strict mode is on.
    pub async fn execute<I, H>(
        &self,
        method: Method,
        url: impl Into<String>,
        headers: I,
        params: Params,
    ) -> Result<Value, Error>
    where
        I: IntoIterator<Item = H>,
        H: Into<String>,
    {
        let mut spec = RequestSpec::new(method, url).params(params);
        spec.headers.extend(headers.into_iter().map(Into::into));
        self.send(&spec).await
    }

    /// Issue a prepared request. See [`Client::execute`].
    pub async fn send(&self, spec: &RequestSpec) -> Result<Value, Error> {
        let basic_auth = self.config.basic_auth == BasicAuthPolicy::EveryRequest;
        self.connection.execute(spec, basic_auth).await
    }

    /// Issue an endpoint call with the JSON content type and bearer token.
    pub(crate) async fn call(
        &self,
        method: Method,
        url: String,
        params: Params,
    ) -> Result<Value, Error> {
        let headers = self.bearer_headers()?;
        self.execute(method, url, headers, params).await
    }

    /// Header lines for an authenticated CMS or ingest call.
    pub fn bearer_headers(&self) -> Result<Vec<String>, Error> {
        let session = self.session.as_ref().ok_or(AuthError::NotAuthenticated)?;

        if session.is_expired() {
            debug!(expires_at = %session.expires_at(), "Using an expired access token");
        }

        Ok(vec![
            JSON_CONTENT_TYPE.to_string(),
            session.access_token().bearer_header(),
        ])
    }

    /// Absolute CMS URL for a path below `/v1/accounts/{account_id}/`.
    pub fn cms_endpoint(&self, path: &str) -> String {
        self.config.cms_url.endpoint(&self.account_path(path))
    }

    /// Absolute Dynamic Ingest URL for a path below `/v1/accounts/{account_id}/`.
    pub fn ingest_endpoint(&self, path: &str) -> String {
        self.config.ingest_url.endpoint(&self.account_path(path))
    }

    fn account_path(&self, path: &str) -> String {
        format!(
            "v1/accounts/{}/{}",
            self.config.account_id,
            path.trim_start_matches('/')
        )
    }

    /// Video endpoints.
    pub fn videos(&self) -> Videos<'_> {
        Videos::new(self)
    }

    /// Playlist endpoints.
    pub fn playlists(&self) -> Playlists<'_> {
        Playlists::new(self)
    }

    /// Folder endpoints.
    pub fn folders(&self) -> Folders<'_> {
        Folders::new(self)
    }

    /// Notification subscription endpoints.
    pub fn notifications(&self) -> Notifications<'_> {
        Notifications::new(self)
    }

    /// Video asset endpoints (renditions, manifests, images, captions).
    pub fn assets(&self) -> Assets<'_> {
        Assets::new(self)
    }

    /// Dynamic Ingest endpoints.
    pub fn ingest(&self) -> Ingest<'_> {
        Ingest::new(self)
    }
}

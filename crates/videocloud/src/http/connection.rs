//! The HTTP executor shared by every endpoint call.

use serde_json::Value;
use tracing::{debug, instrument, trace};

use crate::auth::Credentials;
use crate::config::ClientConfig;
use crate::error::Error;

use super::request::RequestSpec;

/// Builds and issues exactly one HTTP request per call and decodes the
/// JSON body.
///
/// There is no retry, no redirect following and no status classification:
/// a 3xx, 4xx or 5xx body is decoded and returned like any other.
#[derive(Debug, Clone)]
pub struct Connection {
    client: reqwest::Client,
    credentials: Credentials,
    strict_json: bool,
}

impl Connection {
    /// Create a connection from a client configuration.
    pub fn new(config: &ClientConfig) -> Result<Self, Error> {
        // A 3xx is returned to the caller like any other status, never followed.
        let mut builder = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .redirect(reqwest::redirect::Policy::none());
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(Self {
            client,
            credentials: config.credentials.clone(),
            strict_json: config.strict_json,
        })
    }

    /// Issue the request and decode the response body.
    ///
    /// When `basic_auth` is set the client id and secret are attached first;
    /// the request's own header lines are applied afterwards and replace any
    /// header of the same name, so an explicit `Authorization` line wins.
    ///
    /// An empty body decodes to `Value::Null`. So does a body that is not
    /// JSON, unless the connection is in strict mode.
    #[instrument(skip(self, spec), fields(method = %spec.method, url = %spec.url))]
    pub async fn execute(&self, spec: &RequestSpec, basic_auth: bool) -> Result<Value, Error> {
        let headers = spec.header_map()?;

        let mut request = self.client.request(spec.method.clone(), &spec.url);

        if basic_auth {
            request = request.basic_auth(
                self.credentials.client_id(),
                Some(self.credentials.client_secret()),
            );
        }

        request = request.headers(headers);

        if spec.params_in_query() {
            let pairs = spec.query_pairs();
            trace!(?pairs, "query parameters");
            if !pairs.is_empty() {
                request = request.query(&pairs);
            }
        } else if let Some(body) = spec.json_body()? {
            trace!(bytes = body.len(), "JSON body");
            request = request.body(body);
        }

        debug!(basic_auth, headers = spec.headers.len(), "sending request");
        let response = request.send().await?;

        let status = response.status();
        let body = response.bytes().await?;
        debug!(status = %status, bytes = body.len(), "response received");

        self.decode(&body)
    }

    fn decode(&self, body: &[u8]) -> Result<Value, Error> {
        // 204 responses and friends
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(Value::Null);
        }

        match serde_json::from_slice(body) {
            Ok(value) => Ok(value),
            Err(err) if self.strict_json => Err(Error::Decode(err)),
            Err(err) => {
                debug!(error = %err, "response body is not JSON; returning null");
                Ok(Value::Null)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::AccountId;
    use serde_json::json;

    fn connection(strict: bool) -> Connection {
        let config = ClientConfig::builder(
            AccountId::new("1").unwrap(),
            Credentials::new("id", "secret"),
        )
        .strict_json(strict)
        .build()
        .unwrap();
        Connection::new(&config).unwrap()
    }

    #[test]
    fn decodes_json() {
        let value = connection(false).decode(br#"{"id":"123"}"#).unwrap();
        assert_eq!(value, json!({"id": "123"}));
    }

    #[test]
    fn malformed_body_degrades_to_null() {
        let value = connection(false).decode(b"<html>502 Bad Gateway</html>").unwrap();
        assert_eq!(value, Value::Null);
    }

    #[test]
    fn empty_body_degrades_to_null() {
        assert_eq!(connection(false).decode(b"").unwrap(), Value::Null);
    }

    #[test]
    fn strict_mode_reports_malformed_body() {
        let err = connection(true).decode(b"not json").unwrap_err();
        assert!(matches!(err, Error::Decode(_)));
    }

    #[test]
    fn strict_mode_accepts_empty_body() {
        assert_eq!(connection(true).decode(b"").unwrap(), Value::Null);
    }
}

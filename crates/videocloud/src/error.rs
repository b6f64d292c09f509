//! Error types for the videocloud library.
//!
//! Non-2xx HTTP statuses are deliberately absent from this module: the API
//! reports failures in the response body, and callers inspect the decoded
//! value themselves. Only failures that leave no body to decode, or input
//! that can be rejected before a request is sent, become errors.

use thiserror::Error;

/// The unified error type for videocloud operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Network transport errors (DNS, TLS, connection, timeout).
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// Authentication errors detected on the client side.
    #[error("authentication error: {0}")]
    Auth(#[from] AuthError),

    /// Response body was not valid JSON (strict mode only).
    #[error("malformed JSON response: {0}")]
    Decode(#[from] serde_json::Error),

    /// Input validation errors (URLs, header lines, identifiers, config).
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInputError),
}

/// Transport-level errors.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Network connection failed.
    #[error("connection failed: {message}")]
    Connection { message: String },

    /// Request timed out.
    #[error("request timed out")]
    Timeout,

    /// The request could not be built (bad URL, body encoding).
    #[error("request could not be built: {message}")]
    Request { message: String },

    /// Generic HTTP error.
    #[error("HTTP error: {message}")]
    Http { message: String },
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            TransportError::Timeout
        } else if err.is_connect() {
            TransportError::Connection {
                message: err.to_string(),
            }
        } else if err.is_builder() {
            TransportError::Request {
                message: err.to_string(),
            }
        } else {
            TransportError::Http {
                message: err.to_string(),
            }
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Transport(TransportError::from(err))
    }
}

/// Authentication-related errors.
#[derive(Debug, Error)]
pub enum AuthError {
    /// An endpoint requiring a bearer token was called before any session
    /// was established.
    #[error("no access token; call authenticate() first")]
    NotAuthenticated,
}

/// Input validation errors.
#[derive(Debug, Error)]
pub enum InvalidInputError {
    /// Invalid API base URL.
    #[error("invalid API URL '{value}': {reason}")]
    ApiUrl { value: String, reason: String },

    /// Header line that is not a valid `Name: value` pair.
    #[error("invalid header '{value}': {reason}")]
    Header { value: String, reason: String },

    /// Invalid resource identifier (account, video, playlist, ...).
    #[error("invalid {kind} '{value}': {reason}")]
    Id {
        kind: &'static str,
        value: String,
        reason: String,
    },

    /// Missing or malformed configuration value.
    #[error("invalid configuration for {key}: {reason}")]
    Config { key: String, reason: String },
}

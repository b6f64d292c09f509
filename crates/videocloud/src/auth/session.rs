//! Session state produced by the client-credentials flow.

use chrono::{DateTime, Duration, Utc};
use serde_json::Value;

use super::tokens::AccessToken;

/// An access token together with the moment it stops being valid.
///
/// Sessions are never refreshed automatically. Once `expires_at` has passed
/// the token is still sent as-is; callers decide when to re-authenticate.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    access_token: AccessToken,
    expires_at: DateTime<Utc>,
}

impl Session {
    /// Create a session from a token and its expiry time.
    ///
    /// This allows restoring a session obtained elsewhere without calling
    /// the token endpoint again.
    pub fn new(access_token: AccessToken, expires_at: DateTime<Utc>) -> Self {
        Self {
            access_token,
            expires_at,
        }
    }

    /// Build a session from a decoded token response.
    ///
    /// Returns `None` when `access_token` is missing, empty or not a string.
    /// A missing or unreadable `expires_in` counts as zero seconds. A negative
    /// one yields an expiry in the past.
    pub(crate) fn from_token_response(response: &Value, now: DateTime<Utc>) -> Option<Self> {
        let token = response
            .get("access_token")
            .and_then(Value::as_str)
            .filter(|t| !t.is_empty())?;

        let expires_in = response
            .get("expires_in")
            .and_then(|v| {
                v.as_i64()
                    .or_else(|| v.as_f64().map(|f| f as i64))
                    .or_else(|| v.as_str().and_then(|s| s.trim().parse().ok()))
            })
            .unwrap_or(0)
            .clamp(i64::from(i32::MIN), i64::from(i32::MAX));

        Some(Self {
            access_token: AccessToken::new(token),
            expires_at: now + Duration::seconds(expires_in),
        })
    }

    /// Returns the access token.
    pub fn access_token(&self) -> &AccessToken {
        &self.access_token
    }

    /// Returns when the token expires.
    pub fn expires_at(&self) -> DateTime<Utc> {
        self.expires_at
    }

    /// Returns true once `now` has reached the expiry time.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }

    /// Returns true if the token has expired.
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }
}

/// Where a client stands in the token lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthState {
    /// No token has been obtained yet.
    Unauthenticated,
    /// A token is held and has not yet expired.
    Authenticated,
    /// A token is held but its expiry time has passed. It is still sent.
    Stale,
}

impl AuthState {
    pub(crate) fn of(session: Option<&Session>, now: DateTime<Utc>) -> Self {
        match session {
            None => AuthState::Unauthenticated,
            Some(s) if s.is_expired_at(now) => AuthState::Stale,
            Some(_) => AuthState::Authenticated,
        }
    }
}

/// Result of a token request.
///
/// A rejected request is not an error: the OAuth endpoint answered, just not
/// with a token. The raw response is kept for the caller to inspect.
#[derive(Clone, Debug, PartialEq)]
pub enum AuthOutcome {
    /// A token was issued and stored on the client.
    Granted(Session),
    /// No `access_token` in the response. The previous session is untouched.
    Rejected(Value),
}

impl AuthOutcome {
    /// Returns true if a token was issued.
    pub fn is_granted(&self) -> bool {
        matches!(self, AuthOutcome::Granted(_))
    }

    /// Returns the issued session, if any.
    pub fn session(&self) -> Option<&Session> {
        match self {
            AuthOutcome::Granted(session) => Some(session),
            AuthOutcome::Rejected(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn at(secs: i64) -> DateTime<Utc> {
        DateTime::from_timestamp(secs, 0).unwrap()
    }

    #[test]
    fn parses_token_and_expiry() {
        let now = at(1_700_000_000);
        let response = json!({"access_token": "T", "token_type": "Bearer", "expires_in": 3600});
        let session = Session::from_token_response(&response, now).unwrap();
        assert_eq!(session.access_token().as_str(), "T");
        assert_eq!(session.expires_at(), at(1_700_003_600));
    }

    #[test]
    fn missing_token_is_none() {
        let response = json!({"error": "invalid_client", "error_description": "bad secret"});
        assert!(Session::from_token_response(&response, at(0)).is_none());
    }

    #[test]
    fn empty_token_is_none() {
        let response = json!({"access_token": "", "expires_in": 300});
        assert!(Session::from_token_response(&response, at(0)).is_none());
    }

    #[test]
    fn null_response_is_none() {
        assert!(Session::from_token_response(&Value::Null, at(0)).is_none());
    }

    #[test]
    fn missing_expires_in_counts_as_zero() {
        let now = at(1_000);
        let session = Session::from_token_response(&json!({"access_token": "T"}), now).unwrap();
        assert_eq!(session.expires_at(), now);
        assert!(session.is_expired_at(now));
    }

    #[test]
    fn string_expires_in_is_accepted() {
        let now = at(1_000);
        let response = json!({"access_token": "T", "expires_in": "300"});
        let session = Session::from_token_response(&response, now).unwrap();
        assert_eq!(session.expires_at(), at(1_300));
    }

    #[test]
    fn negative_expires_in_is_already_stale() {
        let now = at(1_000);
        let response = json!({"access_token": "T", "expires_in": -60});
        let session = Session::from_token_response(&response, now).unwrap();
        assert_eq!(session.expires_at(), at(940));
        assert_eq!(AuthState::of(Some(&session), now), AuthState::Stale);
    }

    #[test]
    fn state_transitions_with_time() {
        let session = Session::new(AccessToken::new("T"), at(2_000));
        assert_eq!(AuthState::of(None, at(1_000)), AuthState::Unauthenticated);
        assert_eq!(AuthState::of(Some(&session), at(1_999)), AuthState::Authenticated);
        assert_eq!(AuthState::of(Some(&session), at(2_000)), AuthState::Stale);
    }

    #[test]
    fn outcome_accessors() {
        let granted = AuthOutcome::Granted(Session::new(AccessToken::new("T"), at(0)));
        assert!(granted.is_granted());
        assert!(granted.session().is_some());

        let rejected = AuthOutcome::Rejected(json!({"error": "invalid_client"}));
        assert!(!rejected.is_granted());
        assert!(rejected.session().is_none());
    }
}

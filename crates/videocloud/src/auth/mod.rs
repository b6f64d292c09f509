//! Authentication types and session state.
//!
//! Tokens come from the OAuth client-credentials flow. The [`Session`] is
//! owned by the [`Client`](crate::Client) and read by every endpoint call.

mod credentials;
mod session;
mod tokens;

pub use credentials::Credentials;
pub use session::{AuthOutcome, AuthState, Session};
pub use tokens::AccessToken;

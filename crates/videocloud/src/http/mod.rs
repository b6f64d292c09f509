//! HTTP transport.
//!
//! [`RequestSpec`] describes a call; [`Connection`] performs it.

mod connection;
mod request;

pub use connection::Connection;
pub use request::{Params, RequestSpec};

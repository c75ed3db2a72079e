//! Twitter connection: API access for the social platform.
//!
//! Settings come from `TWITTER_BEARER_TOKEN` and `TWITTER_ACCESS_TOKEN`.
//! The numeric user id embedded in the access-token prefix is the
//! connection's derived identity; the tokens themselves never leave the
//! settings.
//!
//! # Modules
//!
//! - [`settings`] -- field schema and typed settings
//! - [`client`] -- bearer-authenticated HTTP client for the v2 API
//! - [`connection`] -- the connection config and capability methods

mod client;
mod connection;
mod settings;

pub use client::{Tweet, TwitterClient, TwitterUser};
pub use connection::TwitterConnection;
pub use settings::{ENV_ACCESS_TOKEN, ENV_BEARER_TOKEN, TwitterSettings};

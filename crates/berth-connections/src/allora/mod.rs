//! Allora connection: inference API access.
//!
//! Settings come from `ALLORA_API_KEY` and optionally `ALLORA_CHAIN_SLUG`
//! (`testnet` by default). API-key connections carry no identity
//! material, so `identity()` fails with `IdentityUnavailable`.

mod client;
mod connection;
mod settings;

pub use client::{AlloraClient, Inference, Topic};
pub use connection::AlloraConnection;
pub use settings::{AlloraSettings, ChainSlug, ENV_API_KEY, ENV_CHAIN_SLUG};

//! Solana connection: RPC network access, wallet identity, Jupiter swaps.
//!
//! Settings come from `SOLANA_PRIVATE_KEY` (base58 keypair),
//! `SOLANA_RPC_URL`, and optionally `SOLANA_NETWORK`. Capability methods
//! on [`SolanaConnection`] construct the RPC client, expose the decoded
//! keypair, and compose the two into a [`JupiterClient`] for swap
//! routing.

mod connection;
mod jupiter;
mod key;
mod settings;

pub use connection::SolanaConnection;
pub use jupiter::{JupiterClient, JupiterEndpoints, QuoteResponse, SwapResponse};
pub use key::{KeyDecodeError, SolanaPrivateKey};
pub use settings::{ENV_NETWORK, ENV_PRIVATE_KEY, ENV_RPC_URL, SolanaSettings};

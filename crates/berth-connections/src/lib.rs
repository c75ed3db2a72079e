//! Connection configuration and validation layer for berth.
//!
//! Each connection type (Solana, Twitter, Allora) declares an explicit
//! field schema, one generic loader validates it against the environment,
//! and the [`ConnectionRegistry`] records per-name outcomes at startup.
//! Misconfiguration is recovered at the registry boundary; expensive
//! network clients are built lazily by capability methods.
//!
//! # Architecture
//!
//! ```text
//! FieldSpec schema ──load_settings()──> typed Settings
//!                                            │
//!                            Config::from_env(&dyn Environment)
//!                                            │
//!                      ConnectionRegistry.initialize_all()
//!                            │                         │
//!                  Available(Arc<dyn Connection>)   Unavailable(errors)
//!                            │
//!            capability methods: rpc_client() / client() / jupiter()
//! ```
//!
//! # Error handling
//!
//! Startup validation failures are aggregated into
//! [`ConfigValidationError`](berth_types::ConfigValidationError) and
//! recovered by the registry; capability-time failures
//! ([`ConnectionError`](berth_types::ConnectionError)) propagate to the
//! immediate caller.

pub mod allora;
pub mod loader;
pub mod registry;
pub mod schema;
pub mod solana;
pub mod traits;
pub mod twitter;

use std::sync::Arc;

use berth_platform::Environment;

pub use loader::{ConnectionSettings, load_settings};
pub use registry::{ConnectionRegistry, ConnectionState};
pub use schema::{FieldSpec, ResolvedFields};
pub use traits::{Connection, ConnectionKind};

pub use allora::AlloraConnection;
pub use solana::SolanaConnection;
pub use twitter::TwitterConnection;

/// A registry with every in-tree connection type registered.
///
/// Plain `register` calls; embedders that want a different set build
/// their own registry the same way. Call
/// [`initialize_all`](ConnectionRegistry::initialize_all) on the result
/// before use.
pub fn default_registry() -> ConnectionRegistry {
    let mut registry = ConnectionRegistry::new();
    registry.register(SolanaConnection::NAME, |env: &dyn Environment| {
        SolanaConnection::from_env(env).map(|c| Arc::new(c) as Arc<dyn Connection>)
    });
    registry.register(TwitterConnection::NAME, |env: &dyn Environment| {
        TwitterConnection::from_env(env).map(|c| Arc::new(c) as Arc<dyn Connection>)
    });
    registry.register(AlloraConnection::NAME, |env: &dyn Environment| {
        AlloraConnection::from_env(env).map(|c| Arc::new(c) as Arc<dyn Connection>)
    });
    registry
}

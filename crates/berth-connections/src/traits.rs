//! Connection trait definitions.
//!
//! Every connection type (Solana, Twitter, Allora, ...) implements
//! [`Connection`]: the uniform surface the registry stores and the
//! command router discovers capabilities through. Typed capability
//! methods (RPC clients, keypairs, swap routers) live on the concrete
//! config types and are reached via
//! [`ConnectionRegistry::get_as`](crate::registry::ConnectionRegistry::get_as).

use std::any::Any;
use std::fmt;

use berth_types::{ConnectionError, PublicView};

/// What kind of external platform a connection talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionKind {
    /// A blockchain RPC network.
    Blockchain,
    /// A social-media platform API.
    Social,
    /// An inference/data API.
    Inference,
}

impl ConnectionKind {
    /// Lowercase identifier used in public views and CLI output.
    pub fn as_str(&self) -> &'static str {
        match self {
            ConnectionKind::Blockchain => "blockchain",
            ConnectionKind::Social => "social",
            ConnectionKind::Inference => "inference",
        }
    }
}

impl fmt::Display for ConnectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The trait every configured connection implements.
///
/// A `Connection` only exists in the VALID state: construction consumed
/// fully validated settings, and instances are immutable afterwards, so
/// they are shared across concurrent callers without locking.
pub trait Connection: Send + Sync + fmt::Debug {
    /// Unique connection identifier (registry key), e.g. `"solana"`.
    fn name(&self) -> &str;

    /// The kind of platform this connection talks to.
    fn kind(&self) -> ConnectionKind;

    /// Secret-free serializable state. The only form of connection
    /// configuration safe to log, display, or send over any boundary.
    fn public_view(&self) -> PublicView;

    /// Derived public identity (wallet address, user id).
    ///
    /// Fails with [`ConnectionError::IdentityUnavailable`] for
    /// connections that carry no identity material.
    fn identity(&self) -> Result<String, ConnectionError>;

    /// Downcast support for typed capability access through the registry.
    fn as_any(&self) -> &dyn Any;
}

//! Secret-free serialization of connection state.
//!
//! [`PublicView`] is the only form of connection configuration that may
//! cross a boundary -- logs, UI, telemetry. Fields are plain data;
//! secret material cannot be put here because
//! [`SecretString`](crate::secret::SecretString) does not implement
//! `Serialize`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// The secret-free public state of one connection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PublicView {
    /// Connection name (registry key), e.g. `"solana"`.
    pub connection: String,

    /// Connection kind, e.g. `"blockchain"` or `"social"`.
    pub kind: String,

    /// The endpoint the connection talks to (RPC URL, API base URL).
    pub endpoint: String,

    /// Derived public identity, when the connection has one
    /// (wallet address, user id). Never the material it derives from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identity: Option<String>,

    /// Additional non-secret parameters (network name, chain slug).
    /// `BTreeMap` keeps serialized output stable.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub params: BTreeMap<String, String>,
}

impl PublicView {
    /// Serialize to a JSON value.
    ///
    /// Infallible in practice: every field is plain data.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }
}

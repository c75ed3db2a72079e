//! The Solana connection config and its capability methods.

use std::any::Any;
use std::sync::Arc;

use solana_client::nonblocking::rpc_client::RpcClient;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::Keypair;

use berth_platform::Environment;
use berth_types::{ConfigValidationError, ConnectionError, PublicView};

use crate::loader::load_settings;
use crate::traits::{Connection, ConnectionKind};

use super::jupiter::JupiterClient;
use super::settings::SolanaSettings;

const EXPLORER_BASE: &str = "https://explorer.solana.com/tx";

/// A validated Solana connection.
///
/// Exists only in the fully-validated state: construction either decodes
/// every required setting or fails with the aggregated field errors.
/// Capability methods rebuild their clients per call -- construction does
/// no I/O, and no session affinity is promised to callers.
#[derive(Debug)]
pub struct SolanaConnection {
    settings: SolanaSettings,
}

impl SolanaConnection {
    /// Registry key for this connection type.
    pub const NAME: &'static str = "solana";

    /// Build from the environment.
    ///
    /// Fails with every broken field aggregated into one
    /// [`ConfigValidationError`]; never panics and never logs secrets.
    pub fn from_env(env: &dyn Environment) -> Result<Self, ConfigValidationError> {
        let settings = load_settings::<SolanaSettings>(env)?;
        Ok(Self { settings })
    }

    /// The validated settings.
    pub fn settings(&self) -> &SolanaSettings {
        &self.settings
    }

    /// A non-blocking RPC client bound to the configured endpoint.
    ///
    /// Rebuilt on every call; `RpcClient::new` performs no I/O. Network
    /// errors and timeouts surface on the returned client's own methods.
    pub fn rpc_client(&self) -> RpcClient {
        RpcClient::new(self.settings.rpc_url().as_str().to_owned())
    }

    /// A shared handle to the signing keypair.
    pub fn keypair(&self) -> Arc<Keypair> {
        self.settings.private_key().keypair()
    }

    /// The wallet's public key.
    pub fn pubkey(&self) -> Pubkey {
        self.settings.private_key().pubkey()
    }

    /// A Jupiter swap-routing client composed from [`Self::rpc_client`]
    /// and [`Self::keypair`]. Rebuilt on every call, like the inputs it
    /// is composed from.
    pub fn jupiter(&self) -> JupiterClient {
        JupiterClient::new(self.rpc_client(), self.keypair())
    }

    /// Solana explorer URL for a transaction signature.
    ///
    /// Non-mainnet networks get a `?cluster=` query so the explorer
    /// resolves the signature against the right cluster.
    pub fn explorer_url(&self, signature: &str) -> String {
        match self.settings.network() {
            "mainnet-beta" => format!("{EXPLORER_BASE}/{signature}"),
            network => format!("{EXPLORER_BASE}/{signature}?cluster={network}"),
        }
    }
}

impl Connection for SolanaConnection {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn kind(&self) -> ConnectionKind {
        ConnectionKind::Blockchain
    }

    fn public_view(&self) -> PublicView {
        PublicView {
            connection: Self::NAME.to_owned(),
            kind: self.kind().as_str().to_owned(),
            endpoint: self.settings.rpc_url().as_str().to_owned(),
            identity: Some(self.pubkey().to_string()),
            params: [("network".to_owned(), self.settings.network().to_owned())]
                .into_iter()
                .collect(),
        }
    }

    fn identity(&self) -> Result<String, ConnectionError> {
        Ok(self.pubkey().to_string())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use berth_platform::MapEnvironment;

    use crate::solana::settings::{ENV_NETWORK, ENV_PRIVATE_KEY, ENV_RPC_URL};

    fn valid_env() -> (Keypair, MapEnvironment) {
        let keypair = Keypair::new();
        let env = MapEnvironment::new()
            .with_var(ENV_PRIVATE_KEY, bs58::encode(keypair.to_bytes()).into_string())
            .with_var(ENV_RPC_URL, "https://api.mainnet-beta.solana.com");
        (keypair, env)
    }

    #[test]
    fn builds_from_valid_environment() {
        use solana_sdk::signer::Signer;

        let (keypair, env) = valid_env();
        let conn = SolanaConnection::from_env(&env).unwrap();
        assert_eq!(conn.name(), "solana");
        assert_eq!(conn.kind(), ConnectionKind::Blockchain);
        assert_eq!(conn.pubkey(), keypair.pubkey());
    }

    #[test]
    fn construction_failure_aggregates_fields() {
        let err = SolanaConnection::from_env(&MapEnvironment::new()).unwrap_err();
        assert_eq!(err.connection, "solana");
        assert_eq!(err.errors.len(), 2);
    }

    #[test]
    fn rpc_client_bound_to_configured_endpoint() {
        let (_, env) = valid_env();
        let conn = SolanaConnection::from_env(&env).unwrap();
        assert_eq!(conn.rpc_client().url(), "https://api.mainnet-beta.solana.com/");
    }

    #[test]
    fn identity_is_deterministic_across_calls() {
        let (_, env) = valid_env();
        let conn = SolanaConnection::from_env(&env).unwrap();
        assert_eq!(conn.identity().unwrap(), conn.identity().unwrap());
        assert_eq!(conn.identity().unwrap(), conn.pubkey().to_string());
    }

    #[test]
    fn jupiter_client_uses_the_connection_wallet() {
        let (_, env) = valid_env();
        let conn = SolanaConnection::from_env(&env).unwrap();
        assert_eq!(conn.jupiter().wallet(), conn.pubkey());
    }

    #[test]
    fn explorer_url_mainnet_has_no_cluster_query() {
        let (_, env) = valid_env();
        let conn = SolanaConnection::from_env(&env).unwrap();
        assert_eq!(
            conn.explorer_url("5KtP1"),
            "https://explorer.solana.com/tx/5KtP1",
        );
    }

    #[test]
    fn explorer_url_carries_cluster_for_other_networks() {
        let (_, env) = valid_env();
        let conn = SolanaConnection::from_env(&env.with_var(ENV_NETWORK, "devnet")).unwrap();
        assert_eq!(
            conn.explorer_url("5KtP1"),
            "https://explorer.solana.com/tx/5KtP1?cluster=devnet",
        );
    }

    #[test]
    fn public_view_contains_pubkey_but_never_the_private_key() {
        let (keypair, env) = valid_env();
        let encoded = bs58::encode(keypair.to_bytes()).into_string();

        let conn = SolanaConnection::from_env(&env).unwrap();
        let json = serde_json::to_string(&conn.public_view()).unwrap();

        assert!(json.contains(&conn.pubkey().to_string()));
        assert!(!json.contains(&encoded));
    }
}

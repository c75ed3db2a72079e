//! Solana settings schema and typed settings.

use berth_types::FieldError;
use url::Url;

use crate::loader::ConnectionSettings;
use crate::schema::{FieldSpec, ResolvedFields};

use super::key::SolanaPrivateKey;

/// Environment variable holding the base58-encoded keypair.
pub const ENV_PRIVATE_KEY: &str = "SOLANA_PRIVATE_KEY";
/// Environment variable holding the RPC endpoint URL.
pub const ENV_RPC_URL: &str = "SOLANA_RPC_URL";
/// Environment variable holding the cluster name (optional).
pub const ENV_NETWORK: &str = "SOLANA_NETWORK";

const DEFAULT_NETWORK: &str = "mainnet-beta";

/// Validated Solana connection settings.
#[derive(Debug, Clone)]
pub struct SolanaSettings {
    private_key: SolanaPrivateKey,
    rpc_url: Url,
    network: String,
}

impl SolanaSettings {
    /// The decoded signing keypair.
    pub fn private_key(&self) -> &SolanaPrivateKey {
        &self.private_key
    }

    /// The RPC endpoint.
    pub fn rpc_url(&self) -> &Url {
        &self.rpc_url
    }

    /// The cluster name, e.g. `mainnet-beta` or `devnet`.
    pub fn network(&self) -> &str {
        &self.network
    }
}

impl ConnectionSettings for SolanaSettings {
    const CONNECTION: &'static str = "solana";

    fn schema() -> &'static [FieldSpec] {
        const SCHEMA: &[FieldSpec] = &[
            FieldSpec::required("private_key", ENV_PRIVATE_KEY).secret(),
            FieldSpec::required("rpc_url", ENV_RPC_URL),
            FieldSpec::optional("network", ENV_NETWORK),
        ];
        SCHEMA
    }

    fn decode(fields: &ResolvedFields) -> Result<Self, Vec<FieldError>> {
        let mut errors = Vec::new();

        let private_key = fields.get("private_key").and_then(|raw| {
            match SolanaPrivateKey::from_base58(raw.expose()) {
                Ok(key) => Some(key),
                Err(e) => {
                    errors.push(FieldError::invalid("private_key", ENV_PRIVATE_KEY, e.to_string()));
                    None
                }
            }
        });

        let rpc_url = fields.get("rpc_url").and_then(|raw| {
            match Url::parse(raw.expose()) {
                Ok(url) if matches!(url.scheme(), "http" | "https") => Some(url),
                Ok(url) => {
                    errors.push(FieldError::invalid(
                        "rpc_url",
                        ENV_RPC_URL,
                        format!("unsupported scheme `{}`", url.scheme()),
                    ));
                    None
                }
                Err(e) => {
                    errors.push(FieldError::invalid("rpc_url", ENV_RPC_URL, e.to_string()));
                    None
                }
            }
        });

        let network = fields
            .get("network")
            .map(|raw| raw.expose().to_owned())
            .unwrap_or_else(|| DEFAULT_NETWORK.to_owned());

        match (private_key, rpc_url) {
            (Some(private_key), Some(rpc_url)) if errors.is_empty() => Ok(Self {
                private_key,
                rpc_url,
                network,
            }),
            _ => Err(errors),
        }
    }
}

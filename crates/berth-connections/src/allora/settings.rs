//! Allora settings schema and typed settings.

use std::fmt;

use berth_types::{FieldError, SecretString};

use crate::loader::ConnectionSettings;
use crate::schema::{FieldSpec, ResolvedFields};

/// Environment variable holding the API key.
pub const ENV_API_KEY: &str = "ALLORA_API_KEY";
/// Environment variable selecting the chain (optional).
pub const ENV_CHAIN_SLUG: &str = "ALLORA_CHAIN_SLUG";

/// Which Allora chain the connection queries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ChainSlug {
    /// The test network (default).
    #[default]
    Testnet,
    /// The main network.
    Mainnet,
}

impl ChainSlug {
    /// The slug as it appears in API paths.
    pub fn as_str(&self) -> &'static str {
        match self {
            ChainSlug::Testnet => "testnet",
            ChainSlug::Mainnet => "mainnet",
        }
    }

    fn parse(raw: &str) -> Option<Self> {
        match raw {
            "testnet" => Some(ChainSlug::Testnet),
            "mainnet" => Some(ChainSlug::Mainnet),
            _ => None,
        }
    }
}

impl fmt::Display for ChainSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validated Allora connection settings.
#[derive(Debug, Clone)]
pub struct AlloraSettings {
    api_key: SecretString,
    chain_slug: ChainSlug,
}

impl AlloraSettings {
    /// The API key sent with every request.
    pub fn api_key(&self) -> &SecretString {
        &self.api_key
    }

    /// The configured chain.
    pub fn chain_slug(&self) -> ChainSlug {
        self.chain_slug
    }
}

impl ConnectionSettings for AlloraSettings {
    const CONNECTION: &'static str = "allora";

    fn schema() -> &'static [FieldSpec] {
        const SCHEMA: &[FieldSpec] = &[
            FieldSpec::required("api_key", ENV_API_KEY).secret(),
            FieldSpec::optional("chain_slug", ENV_CHAIN_SLUG),
        ];
        SCHEMA
    }

    fn decode(fields: &ResolvedFields) -> Result<Self, Vec<FieldError>> {
        let mut errors = Vec::new();

        let api_key = fields.get("api_key").cloned();

        let chain_slug = match fields.get("chain_slug") {
            Some(raw) => match ChainSlug::parse(raw.expose()) {
                Some(slug) => slug,
                None => {
                    errors.push(FieldError::invalid(
                        "chain_slug",
                        ENV_CHAIN_SLUG,
                        "expected `testnet` or `mainnet`",
                    ));
                    ChainSlug::default()
                }
            },
            None => ChainSlug::default(),
        };

        match api_key {
            Some(api_key) if errors.is_empty() => Ok(Self {
                api_key,
                chain_slug,
            }),
            _ => Err(errors),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use berth_platform::MapEnvironment;
    use berth_types::FieldReason;

    use crate::loader::load_settings;

    #[test]
    fn loads_with_default_chain() {
        let env = MapEnvironment::new().with_var(ENV_API_KEY, "UP-abc123");
        let settings: AlloraSettings = load_settings(&env).unwrap();
        assert_eq!(settings.api_key().expose(), "UP-abc123");
        assert_eq!(settings.chain_slug(), ChainSlug::Testnet);
    }

    #[test]
    fn chain_override() {
        let env = MapEnvironment::new()
            .with_var(ENV_API_KEY, "UP-abc123")
            .with_var(ENV_CHAIN_SLUG, "mainnet");
        let settings: AlloraSettings = load_settings(&env).unwrap();
        assert_eq!(settings.chain_slug(), ChainSlug::Mainnet);
    }

    #[test]
    fn missing_api_key_is_reported() {
        let err = load_settings::<AlloraSettings>(&MapEnvironment::new()).unwrap_err();
        assert_eq!(err.connection, "allora");
        assert_eq!(err.errors.len(), 1);
        assert_eq!(err.errors[0].field, "api_key");
        assert_eq!(err.errors[0].reason, FieldReason::Missing);
    }

    #[test]
    fn unknown_chain_slug_is_invalid_even_with_a_valid_key() {
        let env = MapEnvironment::new()
            .with_var(ENV_API_KEY, "UP-abc123")
            .with_var(ENV_CHAIN_SLUG, "betanet");
        let err = load_settings::<AlloraSettings>(&env).unwrap_err();
        assert_eq!(err.errors.len(), 1);
        assert_eq!(err.errors[0].field, "chain_slug");
    }
}

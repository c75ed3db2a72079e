//! Twitter settings schema and typed settings.

use berth_types::{FieldError, SecretString};

use crate::loader::ConnectionSettings;
use crate::schema::{FieldSpec, ResolvedFields};

/// Environment variable holding the app bearer token.
pub const ENV_BEARER_TOKEN: &str = "TWITTER_BEARER_TOKEN";
/// Environment variable holding the user access token
/// (`<numeric user id>-<secret>` shape).
pub const ENV_ACCESS_TOKEN: &str = "TWITTER_ACCESS_TOKEN";

/// Validated Twitter connection settings.
#[derive(Debug, Clone)]
pub struct TwitterSettings {
    bearer_token: SecretString,
    access_token: SecretString,
    user_id: u64,
}

impl TwitterSettings {
    /// The app bearer token used for API authentication.
    pub fn bearer_token(&self) -> &SecretString {
        &self.bearer_token
    }

    /// The user access token.
    pub fn access_token(&self) -> &SecretString {
        &self.access_token
    }

    /// The numeric user id parsed from the access-token prefix.
    /// Deterministic for the same token.
    pub fn user_id(&self) -> u64 {
        self.user_id
    }
}

/// Parse the numeric user id from an access token's `<id>-<secret>` prefix.
fn parse_user_id(token: &str) -> Option<u64> {
    let (prefix, rest) = token.split_once('-')?;
    if rest.is_empty() {
        return None;
    }
    prefix.parse().ok()
}

impl ConnectionSettings for TwitterSettings {
    const CONNECTION: &'static str = "twitter";

    fn schema() -> &'static [FieldSpec] {
        const SCHEMA: &[FieldSpec] = &[
            FieldSpec::required("bearer_token", ENV_BEARER_TOKEN).secret(),
            FieldSpec::required("access_token", ENV_ACCESS_TOKEN).secret(),
        ];
        SCHEMA
    }

    fn decode(fields: &ResolvedFields) -> Result<Self, Vec<FieldError>> {
        let mut errors = Vec::new();

        let bearer_token = fields.get("bearer_token").cloned();

        let access = fields.get("access_token").and_then(|raw| {
            match parse_user_id(raw.expose()) {
                Some(user_id) => Some((raw.clone(), user_id)),
                None => {
                    errors.push(FieldError::invalid(
                        "access_token",
                        ENV_ACCESS_TOKEN,
                        "expected `<numeric user id>-<secret>`",
                    ));
                    None
                }
            }
        });

        match (bearer_token, access) {
            (Some(bearer_token), Some((access_token, user_id))) if errors.is_empty() => Ok(Self {
                bearer_token,
                access_token,
                user_id,
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

    fn valid_env() -> MapEnvironment {
        MapEnvironment::new()
            .with_var(ENV_BEARER_TOKEN, "AAAA-bearer")
            .with_var(ENV_ACCESS_TOKEN, "1466796521412771840-x7Zq")
    }

    #[test]
    fn loads_from_valid_environment() {
        let settings: TwitterSettings = load_settings(&valid_env()).unwrap();
        assert_eq!(settings.bearer_token().expose(), "AAAA-bearer");
        assert_eq!(settings.user_id(), 1466796521412771840);
    }

    #[test]
    fn user_id_is_deterministic() {
        let a: TwitterSettings = load_settings(&valid_env()).unwrap();
        let b: TwitterSettings = load_settings(&valid_env()).unwrap();
        assert_eq!(a.user_id(), b.user_id());
    }

    #[test]
    fn both_missing_tokens_are_reported_together() {
        let err = load_settings::<TwitterSettings>(&MapEnvironment::new()).unwrap_err();
        assert_eq!(err.connection, "twitter");
        assert_eq!(err.errors.len(), 2);
        assert!(err.errors.iter().all(|e| e.reason == FieldReason::Missing));
    }

    #[test]
    fn rejects_access_token_without_numeric_prefix() {
        let env = valid_env().with_var(ENV_ACCESS_TOKEN, "not-numeric-prefix");
        let err = load_settings::<TwitterSettings>(&env).unwrap_err();
        assert_eq!(err.errors.len(), 1);
        assert_eq!(err.errors[0].field, "access_token");
        assert!(matches!(err.errors[0].reason, FieldReason::Invalid(_)));
    }

    #[test]
    fn rejects_access_token_without_secret_half() {
        let env = valid_env().with_var(ENV_ACCESS_TOKEN, "12345-");
        let err = load_settings::<TwitterSettings>(&env).unwrap_err();
        assert_eq!(err.errors[0].field, "access_token");
    }

    #[test]
    fn invalid_detail_never_echoes_the_token() {
        let env = valid_env().with_var(ENV_ACCESS_TOKEN, "secret-but-wrong-shape");
        let err = load_settings::<TwitterSettings>(&env).unwrap_err();
        assert!(!err.report().contains("secret-but-wrong-shape"));
    }
}

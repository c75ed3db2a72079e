//! Generic settings loader.
//!
//! One routine, [`load_settings`], turns a connection's field schema plus
//! the current environment into typed settings -- or into a
//! [`ConfigValidationError`] that names *every* broken field, so an
//! operator fixes configuration in one pass instead of replaying
//! fail-fix-fail cycles.

use berth_platform::Environment;
use berth_types::{ConfigValidationError, FieldError, SecretString};

use crate::schema::{FieldSpec, ResolvedFields};

/// Implemented by each connection type's typed settings struct.
pub trait ConnectionSettings: Sized + Send + Sync {
    /// Connection name this schema belongs to (registry key).
    const CONNECTION: &'static str;

    /// The enumerated field schema.
    fn schema() -> &'static [FieldSpec];

    /// Decode resolved raw values into typed settings.
    ///
    /// Fields that failed resolution are absent from `fields`; report
    /// decode failures only for values that are actually present (the
    /// loader already recorded missing/empty errors). Implementations
    /// must aggregate: decode every field, collect every failure, never
    /// return on the first one.
    fn decode(fields: &ResolvedFields) -> Result<Self, Vec<FieldError>>;
}

/// Resolve and decode settings for `S` from the environment.
///
/// Two passes, both aggregating:
///
/// 1. every schema field is read through `env`; required fields that are
///    unset or blank produce a [`FieldError`];
/// 2. [`ConnectionSettings::decode`] decodes present values and reports
///    malformed ones.
///
/// All errors from both passes land in a single
/// [`ConfigValidationError`]. Nothing is logged here and no secret value
/// appears in any error detail.
pub fn load_settings<S: ConnectionSettings>(
    env: &dyn Environment,
) -> Result<S, ConfigValidationError> {
    let mut errors = Vec::new();
    let mut resolved = ResolvedFields::default();

    for spec in S::schema() {
        match env.get_var(spec.env) {
            Some(value) if !value.trim().is_empty() => {
                resolved.insert(spec.name, SecretString::new(value));
            }
            Some(_) if spec.required => errors.push(FieldError::empty(spec.name, spec.env)),
            None if spec.required => errors.push(FieldError::missing(spec.name, spec.env)),
            // Absent or blank optional fields fall back to their defaults.
            _ => {}
        }
    }

    match S::decode(&resolved) {
        Ok(settings) if errors.is_empty() => Ok(settings),
        Ok(_) => Err(ConfigValidationError::new(S::CONNECTION, errors)),
        Err(decode_errors) => {
            errors.extend(decode_errors);
            Err(ConfigValidationError::new(S::CONNECTION, errors))
        }
    }
}

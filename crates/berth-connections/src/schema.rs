//! Field schema for connection settings.
//!
//! Each connection type declares its settings as an explicit, enumerated
//! list of [`FieldSpec`]s -- field name, environment alias, required
//! flag, secret flag. The generic loader in [`crate::loader`] walks this
//! list; there is no runtime reflection and no shared hardcoded variable
//! names.

use std::collections::HashMap;

use berth_types::SecretString;

/// Declares how one settings field is sourced from the environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// Schema field name (e.g. `private_key`).
    pub name: &'static str,
    /// Environment variable the field is read from.
    pub env: &'static str,
    /// Whether the field must resolve to a non-empty value.
    pub required: bool,
    /// Whether the raw value is secret material.
    pub secret: bool,
}

impl FieldSpec {
    /// A required, non-secret field.
    pub const fn required(name: &'static str, env: &'static str) -> Self {
        Self {
            name,
            env,
            required: true,
            secret: false,
        }
    }

    /// An optional, non-secret field.
    pub const fn optional(name: &'static str, env: &'static str) -> Self {
        Self {
            name,
            env,
            required: false,
            secret: false,
        }
    }

    /// Mark the field as secret material.
    pub const fn secret(mut self) -> Self {
        self.secret = true;
        self
    }
}

/// Raw values resolved from the environment for one connection.
///
/// Keyed by schema field name. Only fields that resolved to a non-empty
/// value are present; every value travels as [`SecretString`] regardless
/// of the secret flag, so nothing leaks before typed decoding.
#[derive(Debug, Default)]
pub struct ResolvedFields {
    values: HashMap<&'static str, SecretString>,
}

impl ResolvedFields {
    pub(crate) fn insert(&mut self, field: &'static str, value: SecretString) {
        self.values.insert(field, value);
    }

    /// The resolved raw value for `field`, if the environment provided one.
    pub fn get(&self, field: &str) -> Option<&SecretString> {
        self.values.get(field)
    }

    /// Number of resolved fields.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` when nothing resolved.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spec_constructors() {
        const SPEC: FieldSpec = FieldSpec::required("private_key", "SOLANA_PRIVATE_KEY").secret();
        assert_eq!(SPEC.name, "private_key");
        assert_eq!(SPEC.env, "SOLANA_PRIVATE_KEY");
        assert!(SPEC.required);
        assert!(SPEC.secret);

        const OPT: FieldSpec = FieldSpec::optional("network", "SOLANA_NETWORK");
        assert!(!OPT.required);
        assert!(!OPT.secret);
    }

    #[test]
    fn resolved_fields_lookup() {
        let mut fields = ResolvedFields::default();
        assert!(fields.is_empty());

        fields.insert("rpc_url", SecretString::new("https://example.org"));
        assert_eq!(fields.len(), 1);
        assert_eq!(fields.get("rpc_url").unwrap().expose(), "https://example.org");
        assert!(fields.get("missing").is_none());
    }
}

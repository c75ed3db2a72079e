//! Opaque wrapper for environment-sourced secret values.
//!
//! [`SecretString`] holds raw secret material (private keys before
//! decoding, API tokens, bearer tokens) from the moment it leaves the
//! environment. It has no `Serialize` impl at all -- putting a secret
//! into a public view or a JSON payload is a compile error, not a
//! code-review catch.

use std::fmt;

/// A string value that must not appear in logs, `Debug` output, or any
/// serialized form.
///
/// - `Debug` and `Display` print `[REDACTED]`
/// - there is intentionally **no** `Serialize`/`Deserialize` impl
/// - [`expose()`](SecretString::expose) returns the inner value for the
///   narrow places that genuinely need it (decoders, auth headers)
#[derive(Clone, Default, PartialEq, Eq)]
pub struct SecretString(String);

impl SecretString {
    /// Wrap a raw secret value.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Get the actual secret value. Use sparingly: decoders and
    /// `Authorization`-style headers only.
    pub fn expose(&self) -> &str {
        &self.0
    }

    /// Returns `true` if the wrapped value is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for SecretString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("\"[REDACTED]\"")
    }
}

impl fmt::Display for SecretString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[REDACTED]")
    }
}

impl From<String> for SecretString {
    fn from(s: String) -> Self {
        SecretString(s)
    }
}

impl From<&str> for SecretString {
    fn from(s: &str) -> Self {
        SecretString(s.to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_redacts() {
        let s = SecretString::new("4xQyZ-super-secret");
        assert_eq!(format!("{s:?}"), "\"[REDACTED]\"");
    }

    #[test]
    fn display_redacts() {
        let s = SecretString::new("4xQyZ-super-secret");
        assert_eq!(s.to_string(), "[REDACTED]");
    }

    #[test]
    fn debug_never_contains_value() {
        let s = SecretString::new("4xQyZ-super-secret");
        assert!(!format!("{s:?}").contains("super-secret"));
        assert!(!format!("{s}").contains("super-secret"));
    }

    #[test]
    fn expose_returns_actual_value() {
        let s = SecretString::new("token-123");
        assert_eq!(s.expose(), "token-123");
    }

    #[test]
    fn is_empty() {
        assert!(SecretString::default().is_empty());
        assert!(!SecretString::new("x").is_empty());
    }

    #[test]
    fn equality() {
        assert_eq!(SecretString::new("same"), SecretString::new("same"));
        assert_ne!(SecretString::new("a"), SecretString::new("b"));
    }
}

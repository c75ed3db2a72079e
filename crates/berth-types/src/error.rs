//! Error types for the berth connection layer.
//!
//! Two families with different propagation rules:
//!
//! - [`ConfigValidationError`] (wrapping one or more [`FieldError`]s) is
//!   produced at startup when a connection's settings fail to resolve.
//!   The registry recovers it -- the connection is recorded as
//!   unavailable and the process keeps starting.
//! - [`ConnectionError`] is produced at capability-call time (requesting
//!   an unavailable connection, identity material, or a remote API) and
//!   propagates to the immediate caller.

use thiserror::Error;

/// Why a single settings field failed validation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FieldReason {
    /// The environment variable is not set.
    #[error("required variable is not set")]
    Missing,

    /// The environment variable is set but blank.
    #[error("variable is set but empty")]
    Empty,

    /// The value is present but could not be decoded.
    #[error("invalid value: {0}")]
    Invalid(String),
}

/// One misconfigured settings field.
///
/// Field errors are always aggregated into a [`ConfigValidationError`]
/// before being reported -- a connection with three broken fields
/// surfaces all three at once, not just the first.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{field} (from `{env_var}`): {reason}")]
pub struct FieldError {
    /// Schema field name (e.g. `private_key`).
    pub field: String,
    /// Environment variable the field is sourced from.
    pub env_var: String,
    /// What went wrong.
    pub reason: FieldReason,
}

impl FieldError {
    /// A required field whose environment variable is unset.
    pub fn missing(field: &str, env_var: &str) -> Self {
        Self {
            field: field.to_owned(),
            env_var: env_var.to_owned(),
            reason: FieldReason::Missing,
        }
    }

    /// A required field whose environment variable is set but blank.
    pub fn empty(field: &str, env_var: &str) -> Self {
        Self {
            field: field.to_owned(),
            env_var: env_var.to_owned(),
            reason: FieldReason::Empty,
        }
    }

    /// A field whose value failed decoding. `detail` must not contain
    /// the raw value itself.
    pub fn invalid(field: &str, env_var: &str, detail: impl Into<String>) -> Self {
        Self {
            field: field.to_owned(),
            env_var: env_var.to_owned(),
            reason: FieldReason::Invalid(detail.into()),
        }
    }
}

/// Aggregated validation failure for one connection type.
///
/// `Display` is a one-line summary suitable for error chains;
/// [`report()`](ConfigValidationError::report) is the multi-line operator
/// form listing every broken field.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("connection `{connection}` failed validation ({} field error(s))", .errors.len())]
pub struct ConfigValidationError {
    /// Connection name (registry key).
    pub connection: String,
    /// Every field that failed, in schema order.
    pub errors: Vec<FieldError>,
}

impl ConfigValidationError {
    /// Build an aggregate for `connection` from the collected field errors.
    pub fn new(connection: impl Into<String>, errors: Vec<FieldError>) -> Self {
        Self {
            connection: connection.into(),
            errors,
        }
    }

    /// Multi-line human-readable report, one line per broken field.
    pub fn report(&self) -> String {
        let mut out = format!("connection `{}` is misconfigured:", self.connection);
        for err in &self.errors {
            out.push_str("\n  - ");
            out.push_str(&err.to_string());
        }
        out
    }
}

/// Capability-time error type.
///
/// Raised when a caller requests an unavailable connection or invokes a
/// capability method that cannot be satisfied. Unlike configuration
/// errors, these propagate to the immediate caller uncaught.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ConnectionError {
    /// No available configuration exists for the requested name.
    #[error("connection `{0}` is not configured")]
    NotConfigured(String),

    /// The connection is available but was asked for the wrong concrete type.
    #[error("connection `{connection}` is not a `{expected}`")]
    WrongType {
        /// Connection name that was requested.
        connection: String,
        /// Concrete type the caller expected.
        expected: &'static str,
    },

    /// The connection carries no identity material.
    #[error("identity unavailable for `{connection}`: {reason}")]
    IdentityUnavailable {
        /// Connection name.
        connection: String,
        /// Why no identity can be derived.
        reason: String,
    },

    /// A request to the remote API failed at the transport level.
    #[error("request failed: {0}")]
    RequestFailed(String),

    /// The remote API returned an error payload.
    #[error("api error: {0}")]
    ApiError(String),
}

/// A convenience alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, ConnectionError>;

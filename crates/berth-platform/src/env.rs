//! Environment variable abstraction.
//!
//! Provides a read-only [`Environment`] trait plus two implementations:
//! [`NativeEnvironment`] over [`std::env`], and [`MapEnvironment`], an
//! in-memory map used by tests and embedders that want to feed settings
//! from somewhere other than the process environment.

use std::collections::HashMap;

/// Read-only access to environment-style key-value configuration.
///
/// The settings loader is the sole consumer; giving it a trait instead
/// of `std::env` directly keeps validation tests off process globals.
pub trait Environment: Send + Sync {
    /// Get the value of a variable, or `None` if it is not set.
    fn get_var(&self, name: &str) -> Option<String>;
}

/// Native environment implementation using [`std::env`].
#[derive(Debug, Default, Clone, Copy)]
pub struct NativeEnvironment;

impl Environment for NativeEnvironment {
    fn get_var(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}

/// In-memory environment backed by a `HashMap`.
#[derive(Debug, Default, Clone)]
pub struct MapEnvironment {
    vars: HashMap<String, String>,
}

impl MapEnvironment {
    /// Create an empty environment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insertion.
    pub fn with_var(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(name.into(), value.into());
        self
    }

    /// Set a variable.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.vars.insert(name.into(), value.into());
    }

    /// Remove a variable.
    pub fn remove(&mut self, name: &str) {
        self.vars.remove(name);
    }
}

impl Environment for MapEnvironment {
    fn get_var(&self, name: &str) -> Option<String> {
        self.vars.get(name).cloned()
    }
}

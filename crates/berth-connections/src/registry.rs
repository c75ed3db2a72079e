//! [`ConnectionRegistry`] -- process-wide catalog of configured connections.
//!
//! The registry is responsible for:
//!
//! - Registering connection factories (ordinary function calls; adding a
//!   connection type never touches existing ones)
//! - Attempting every factory at initialization and recording the
//!   outcome per name: available, or unavailable with the aggregated
//!   validation error
//! - Handing out references to available connections, by trait object or
//!   concrete type
//!
//! A misconfigured connection never aborts initialization: its errors
//! are logged once, the state is recorded, and the build moves on.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::{info, warn};

use berth_platform::Environment;
use berth_types::{ConfigValidationError, ConnectionError};

use crate::traits::Connection;

/// Builds one connection from the environment.
///
/// Factories run at registry initialization only; they read settings,
/// decode them, and construct the (client-less) config. The expensive
/// network clients are built later, on demand, by capability methods.
pub type ConnectionFactory =
    Box<dyn Fn(&dyn Environment) -> Result<Arc<dyn Connection>, ConfigValidationError> + Send + Sync>;

/// Initialization outcome for one registered connection name.
pub enum ConnectionState {
    /// Settings validated; the config is usable.
    Available(Arc<dyn Connection>),
    /// Construction failed; the aggregated field errors are kept for
    /// operator display. No partially-built config exists.
    Unavailable(ConfigValidationError),
}

impl ConnectionState {
    /// Returns `true` for [`ConnectionState::Available`].
    pub fn is_available(&self) -> bool {
        matches!(self, ConnectionState::Available(_))
    }
}

/// Process-wide catalog of configured connections.
///
/// Built once at startup: `register` every factory, then
/// `initialize_all`. Afterwards the registry is read-only and can be
/// shared (e.g. behind an `Arc`) across concurrent callers without
/// locking.
#[derive(Default)]
pub struct ConnectionRegistry {
    /// Registered factories in registration order. Initialization and
    /// logging follow this order, keeping operator output stable.
    factories: Vec<(String, ConnectionFactory)>,
    /// Outcome per name, populated by `initialize_all`.
    states: HashMap<String, ConnectionState>,
}

impl ConnectionRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a connection factory under `name`.
    ///
    /// If a factory with the same name is already registered, it is
    /// replaced.
    pub fn register<F>(&mut self, name: impl Into<String>, factory: F)
    where
        F: Fn(&dyn Environment) -> Result<Arc<dyn Connection>, ConfigValidationError>
            + Send
            + Sync
            + 'static,
    {
        let name = name.into();
        self.factories.retain(|(existing, _)| *existing != name);
        self.factories.push((name, Box::new(factory)));
    }

    /// Attempt to build every registered connection from `env`.
    ///
    /// Each outcome is recorded: `Available` on success, `Unavailable`
    /// with the aggregated error on failure. One connection failing
    /// never aborts the rest. Re-running with an unchanged environment
    /// produces the same states; previous states are discarded first.
    pub fn initialize_all(&mut self, env: &dyn Environment) {
        self.states.clear();
        for (name, factory) in &self.factories {
            match factory(env) {
                Ok(connection) => {
                    info!(connection = %name, "connection available");
                    self.states
                        .insert(name.clone(), ConnectionState::Available(connection));
                }
                Err(err) => {
                    warn!(connection = %name, "{}", err.report());
                    self.states
                        .insert(name.clone(), ConnectionState::Unavailable(err));
                }
            }
        }
    }

    /// Get an available connection by name.
    ///
    /// Fails with [`ConnectionError::NotConfigured`] for unavailable and
    /// unregistered names alike -- callers never see a partially-built
    /// config.
    pub fn get(&self, name: &str) -> Result<&dyn Connection, ConnectionError> {
        match self.states.get(name) {
            Some(ConnectionState::Available(connection)) => Ok(connection.as_ref()),
            _ => Err(ConnectionError::NotConfigured(name.to_owned())),
        }
    }

    /// Get an available connection by name, downcast to its concrete type.
    ///
    /// This is how plugins reach typed capability methods
    /// (`SolanaConnection::jupiter()`, `TwitterConnection::client()`).
    pub fn get_as<T: Connection + 'static>(&self, name: &str) -> Result<&T, ConnectionError> {
        let connection = self.get(name)?;
        connection
            .as_any()
            .downcast_ref::<T>()
            .ok_or(ConnectionError::WrongType {
                connection: name.to_owned(),
                expected: std::any::type_name::<T>(),
            })
    }

    /// The initialization state recorded for `name`, if it was registered
    /// before the last `initialize_all`.
    pub fn state(&self, name: &str) -> Option<&ConnectionState> {
        self.states.get(name)
    }

    /// Names of all available connections, sorted.
    pub fn list_available(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self
            .states
            .iter()
            .filter(|(_, state)| state.is_available())
            .map(|(name, _)| name.as_str())
            .collect();
        names.sort_unstable();
        names
    }

    /// Names and errors of all unavailable connections, sorted by name.
    pub fn list_unavailable(&self) -> Vec<(&str, &ConfigValidationError)> {
        let mut entries: Vec<(&str, &ConfigValidationError)> = self
            .states
            .iter()
            .filter_map(|(name, state)| match state {
                ConnectionState::Unavailable(err) => Some((name.as_str(), err)),
                ConnectionState::Available(_) => None,
            })
            .collect();
        entries.sort_unstable_by_key(|(name, _)| *name);
        entries
    }

    /// Names of all registered connections, in registration order.
    pub fn registered(&self) -> Vec<&str> {
        self.factories.iter().map(|(name, _)| name.as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::any::Any;

    use berth_platform::MapEnvironment;
    use berth_types::{FieldError, PublicView};

    use crate::traits::ConnectionKind;

    /// A minimal connection gated on one env var, for registry tests.
    #[derive(Debug)]
    struct ProbeConnection {
        probe_name: String,
    }

    impl Connection for ProbeConnection {
        fn name(&self) -> &str {
            &self.probe_name
        }

        fn kind(&self) -> ConnectionKind {
            ConnectionKind::Inference
        }

        fn public_view(&self) -> PublicView {
            PublicView {
                connection: self.probe_name.clone(),
                kind: self.kind().as_str().to_owned(),
                endpoint: "https://probe.example".into(),
                identity: None,
                params: Default::default(),
            }
        }

        fn identity(&self) -> Result<String, ConnectionError> {
            Err(ConnectionError::IdentityUnavailable {
                connection: self.probe_name.clone(),
                reason: "probe connections have no identity".into(),
            })
        }

        fn as_any(&self) -> &dyn Any {
            self
        }
    }

    /// Registers a probe factory that requires `env_var` to be set.
    fn register_probe(registry: &mut ConnectionRegistry, name: &'static str, env_var: &'static str) {
        registry.register(name, move |env: &dyn Environment| {
            match env.get_var(env_var) {
                Some(v) if !v.is_empty() => Ok(Arc::new(ProbeConnection {
                    probe_name: name.to_owned(),
                }) as Arc<dyn Connection>),
                _ => Err(ConfigValidationError::new(
                    name,
                    vec![FieldError::missing("token", env_var)],
                )),
            }
        });
    }

    #[test]
    fn valid_connection_becomes_available() {
        let mut registry = ConnectionRegistry::new();
        register_probe(&mut registry, "alpha", "ALPHA_TOKEN");

        let env = MapEnvironment::new().with_var("ALPHA_TOKEN", "x");
        registry.initialize_all(&env);

        assert_eq!(registry.list_available(), vec!["alpha"]);
        assert!(registry.get("alpha").is_ok());
    }

    #[test]
    fn one_broken_connection_does_not_abort_the_rest() {
        let mut registry = ConnectionRegistry::new();
        register_probe(&mut registry, "alpha", "ALPHA_TOKEN");
        register_probe(&mut registry, "beta", "BETA_TOKEN");

        let env = MapEnvironment::new().with_var("beta_wrong", "x").with_var("ALPHA_TOKEN", "x");
        registry.initialize_all(&env);

        assert_eq!(registry.list_available(), vec!["alpha"]);

        let unavailable = registry.list_unavailable();
        assert_eq!(unavailable.len(), 1);
        assert_eq!(unavailable[0].0, "beta");
        assert_eq!(unavailable[0].1.errors.len(), 1);
    }

    #[test]
    fn get_unavailable_or_unregistered_is_not_configured() {
        let mut registry = ConnectionRegistry::new();
        register_probe(&mut registry, "alpha", "ALPHA_TOKEN");
        registry.initialize_all(&MapEnvironment::new());

        let err = registry.get("alpha").unwrap_err();
        assert!(matches!(err, ConnectionError::NotConfigured(name) if name == "alpha"));

        let err = registry.get("never-registered").unwrap_err();
        assert!(matches!(err, ConnectionError::NotConfigured(_)));
    }

    #[test]
    fn get_as_downcasts_to_concrete_type() {
        let mut registry = ConnectionRegistry::new();
        register_probe(&mut registry, "alpha", "ALPHA_TOKEN");
        registry.initialize_all(&MapEnvironment::new().with_var("ALPHA_TOKEN", "x"));

        let probe: &ProbeConnection = registry.get_as("alpha").unwrap();
        assert_eq!(probe.name(), "alpha");
    }

    #[test]
    fn initialize_all_is_idempotent_for_unchanged_environment() {
        let mut registry = ConnectionRegistry::new();
        register_probe(&mut registry, "alpha", "ALPHA_TOKEN");
        register_probe(&mut registry, "beta", "BETA_TOKEN");

        let env = MapEnvironment::new().with_var("ALPHA_TOKEN", "x");

        registry.initialize_all(&env);
        let first: Vec<String> = registry.list_available().iter().map(|s| s.to_string()).collect();

        registry.initialize_all(&env);
        let second: Vec<String> = registry.list_available().iter().map(|s| s.to_string()).collect();

        assert_eq!(first, second);
        assert_eq!(registry.list_unavailable().len(), 1);
    }

    #[test]
    fn reinitialize_picks_up_environment_changes() {
        let mut registry = ConnectionRegistry::new();
        register_probe(&mut registry, "alpha", "ALPHA_TOKEN");

        registry.initialize_all(&MapEnvironment::new());
        assert!(registry.list_available().is_empty());

        registry.initialize_all(&MapEnvironment::new().with_var("ALPHA_TOKEN", "x"));
        assert_eq!(registry.list_available(), vec!["alpha"]);
    }

    #[test]
    fn reregistering_a_name_replaces_the_factory() {
        let mut registry = ConnectionRegistry::new();
        register_probe(&mut registry, "alpha", "ALPHA_TOKEN");
        register_probe(&mut registry, "alpha", "OTHER_TOKEN");

        assert_eq!(registry.registered(), vec!["alpha"]);

        registry.initialize_all(&MapEnvironment::new().with_var("OTHER_TOKEN", "x"));
        assert_eq!(registry.list_available(), vec!["alpha"]);
    }
}

//! The Allora connection config and its capability methods.

use std::any::Any;

use berth_platform::Environment;
use berth_types::{ConfigValidationError, ConnectionError, PublicView};

use crate::loader::load_settings;
use crate::traits::{Connection, ConnectionKind};

use super::client::AlloraClient;
use super::settings::AlloraSettings;

/// A validated Allora connection.
///
/// API-key connections carry no identity material, so [`Connection::identity`]
/// fails with [`ConnectionError::IdentityUnavailable`]. [`Self::client`]
/// rebuilds its client per call; nothing is cached.
#[derive(Debug)]
pub struct AlloraConnection {
    settings: AlloraSettings,
}

impl AlloraConnection {
    /// Registry key for this connection type.
    pub const NAME: &'static str = "allora";

    /// Build from the environment, aggregating every broken field.
    pub fn from_env(env: &dyn Environment) -> Result<Self, ConfigValidationError> {
        let settings = load_settings::<AlloraSettings>(env)?;
        Ok(Self { settings })
    }

    /// The validated settings.
    pub fn settings(&self) -> &AlloraSettings {
        &self.settings
    }

    /// An API client for the configured chain. Rebuilt on every call;
    /// construction performs no I/O.
    pub fn client(&self) -> AlloraClient {
        AlloraClient::new(self.settings.api_key().clone(), self.settings.chain_slug())
    }
}

impl Connection for AlloraConnection {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn kind(&self) -> ConnectionKind {
        ConnectionKind::Inference
    }

    fn public_view(&self) -> PublicView {
        PublicView {
            connection: Self::NAME.to_owned(),
            kind: self.kind().as_str().to_owned(),
            endpoint: self.client().base_url().to_owned(),
            identity: None,
            params: [(
                "chain_slug".to_owned(),
                self.settings.chain_slug().to_string(),
            )]
            .into_iter()
            .collect(),
        }
    }

    fn identity(&self) -> Result<String, ConnectionError> {
        Err(ConnectionError::IdentityUnavailable {
            connection: Self::NAME.to_owned(),
            reason: "api-key connections carry no identity material".into(),
        })
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

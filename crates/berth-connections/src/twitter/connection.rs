//! The Twitter connection config and its capability methods.

use std::any::Any;

use berth_platform::Environment;
use berth_types::{ConfigValidationError, ConnectionError, PublicView};

use crate::loader::load_settings;
use crate::traits::{Connection, ConnectionKind};

use super::client::TwitterClient;
use super::settings::TwitterSettings;

/// A validated Twitter connection.
///
/// The derived identity is the numeric user id parsed from the access
/// token at settings decode time. [`Self::client`] rebuilds its client
/// per call; nothing is cached.
#[derive(Debug)]
pub struct TwitterConnection {
    settings: TwitterSettings,
}

impl TwitterConnection {
    /// Registry key for this connection type.
    pub const NAME: &'static str = "twitter";

    /// Build from the environment, aggregating every broken field.
    pub fn from_env(env: &dyn Environment) -> Result<Self, ConfigValidationError> {
        let settings = load_settings::<TwitterSettings>(env)?;
        Ok(Self { settings })
    }

    /// The validated settings.
    pub fn settings(&self) -> &TwitterSettings {
        &self.settings
    }

    /// A bearer-authenticated API client. Rebuilt on every call;
    /// construction performs no I/O.
    pub fn client(&self) -> TwitterClient {
        TwitterClient::new(self.settings.bearer_token().clone())
    }

    /// The authenticated user's numeric id.
    pub fn user_id(&self) -> u64 {
        self.settings.user_id()
    }
}

impl Connection for TwitterConnection {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn kind(&self) -> ConnectionKind {
        ConnectionKind::Social
    }

    fn public_view(&self) -> PublicView {
        PublicView {
            connection: Self::NAME.to_owned(),
            kind: self.kind().as_str().to_owned(),
            endpoint: self.client().base_url().to_owned(),
            identity: Some(self.user_id().to_string()),
            params: Default::default(),
        }
    }

    fn identity(&self) -> Result<String, ConnectionError> {
        Ok(self.user_id().to_string())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

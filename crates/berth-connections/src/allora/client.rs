//! HTTP client wrapper for the Allora inference API.
//!
//! [`AlloraClient`] sends the API key as an `x-api-key` header and
//! exposes the two calls the command router's plugins use: topic listing
//! and inference fetch. Network errors propagate to the caller.

use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use berth_types::{ConnectionError, SecretString};

use super::settings::ChainSlug;

const DEFAULT_BASE_URL: &str = "https://api.upshot.xyz/v2";

/// An inference topic.
#[derive(Debug, Clone, Deserialize)]
pub struct Topic {
    /// Numeric topic id, used to request inferences.
    pub topic_id: u64,
    /// Human-readable topic name.
    pub topic_name: String,
    /// Whether the topic currently has active workers.
    #[serde(default)]
    pub is_active: bool,
}

/// A network inference for one topic.
#[derive(Debug, Clone, Deserialize)]
pub struct Inference {
    /// The combined network inference value, as a decimal string.
    pub network_inference: String,
    /// Unix timestamp of the inference, when the API provides one.
    #[serde(default)]
    pub timestamp: Option<u64>,
}

/// The API's response envelope.
#[derive(Debug, Deserialize)]
struct Envelope<T> {
    status: bool,
    data: Option<T>,
}

impl<T> Envelope<T> {
    fn into_result(self) -> Result<T, ConnectionError> {
        match self.data {
            Some(data) if self.status => Ok(data),
            _ => Err(ConnectionError::ApiError("inference API returned no data".into())),
        }
    }
}

#[derive(Debug, Deserialize)]
struct TopicsPage {
    topics: Vec<Topic>,
}

/// API-key-authenticated HTTP client for the Allora inference API.
///
/// The base URL can be overridden for testing.
pub struct AlloraClient {
    api_key: SecretString,
    chain_slug: ChainSlug,
    http: Client,
    base_url: String,
}

impl AlloraClient {
    /// Create a new client for the given chain.
    pub fn new(api_key: SecretString, chain_slug: ChainSlug) -> Self {
        Self {
            api_key,
            chain_slug,
            http: Client::new(),
            base_url: DEFAULT_BASE_URL.to_owned(),
        }
    }

    /// Create a client pointing at a custom base URL (for testing).
    #[cfg(test)]
    pub fn with_base_url(api_key: SecretString, chain_slug: ChainSlug, base_url: String) -> Self {
        Self {
            api_key,
            chain_slug,
            http: Client::new(),
            base_url,
        }
    }

    /// Return the base URL used for API requests.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The chain this client queries.
    pub fn chain_slug(&self) -> ChainSlug {
        self.chain_slug
    }

    /// List inference topics for the configured chain.
    pub async fn topics(&self) -> Result<Vec<Topic>, ConnectionError> {
        let url = format!("{}/allora/{}/topics", self.base_url, self.chain_slug);

        debug!(chain = %self.chain_slug, "listing inference topics");

        let resp = self
            .http
            .get(&url)
            .header("x-api-key", self.api_key.expose())
            .send()
            .await
            .map_err(|e| ConnectionError::RequestFailed(e.to_string()))?;

        let body: Envelope<TopicsPage> = resp
            .json()
            .await
            .map_err(|e| ConnectionError::RequestFailed(e.to_string()))?;

        Ok(body.into_result()?.topics)
    }

    /// Fetch the latest network inference for a topic.
    pub async fn inference(&self, topic_id: u64) -> Result<Inference, ConnectionError> {
        let url = format!(
            "{}/allora/consumer/{}?allora_topic_id={topic_id}",
            self.base_url, self.chain_slug,
        );

        debug!(topic_id, "fetching inference");

        let resp = self
            .http
            .get(&url)
            .header("x-api-key", self.api_key.expose())
            .send()
            .await
            .map_err(|e| ConnectionError::RequestFailed(e.to_string()))?;

        let body: Envelope<Inference> = resp
            .json()
            .await
            .map_err(|e| ConnectionError::RequestFailed(e.to_string()))?;

        body.into_result()
    }
}

//! HTTP client wrapper for the Twitter v2 API.
//!
//! [`TwitterClient`] provides typed methods for the subset of the v2 API
//! the command router's plugins use: `users/me`, tweet posting, and a
//! user timeline read. Requests authenticate with the app bearer token;
//! network errors propagate to the caller.

use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use berth_types::{ConnectionError, SecretString};

const DEFAULT_BASE_URL: &str = "https://api.twitter.com/2";

/// A user object returned by the v2 API.
#[derive(Debug, Clone, Deserialize)]
pub struct TwitterUser {
    /// Numeric user id, as the API serializes it (a string).
    pub id: String,
    /// Display name.
    pub name: String,
    /// Handle, without the leading `@`.
    pub username: String,
}

/// A tweet object returned by the v2 API.
#[derive(Debug, Clone, Deserialize)]
pub struct Tweet {
    /// Tweet id.
    pub id: String,
    /// Tweet text.
    pub text: String,
}

/// The v2 API's response envelope: payload under `data`, problem details
/// at the top level on failure.
#[derive(Debug, Deserialize)]
struct Envelope<T> {
    data: Option<T>,
    title: Option<String>,
    detail: Option<String>,
}

impl<T> Envelope<T> {
    fn into_result(self) -> Result<T, ConnectionError> {
        match self.data {
            Some(data) => Ok(data),
            None => {
                let title = self.title.unwrap_or_else(|| "unknown error".into());
                let detail = self.detail.unwrap_or_default();
                Err(ConnectionError::ApiError(format!("{title}: {detail}")))
            }
        }
    }
}

#[derive(Serialize)]
struct PostTweetRequest<'a> {
    text: &'a str,
}

/// Bearer-authenticated HTTP client for the Twitter v2 API.
///
/// The base URL can be overridden for testing.
pub struct TwitterClient {
    bearer: SecretString,
    http: Client,
    base_url: String,
}

impl TwitterClient {
    /// Create a new client with the given bearer token.
    pub fn new(bearer: SecretString) -> Self {
        Self {
            bearer,
            http: Client::new(),
            base_url: DEFAULT_BASE_URL.to_owned(),
        }
    }

    /// Create a client pointing at a custom base URL (for testing).
    #[cfg(test)]
    pub fn with_base_url(bearer: SecretString, base_url: String) -> Self {
        Self {
            bearer,
            http: Client::new(),
            base_url,
        }
    }

    /// Return the base URL used for API requests.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch the authenticated user.
    pub async fn get_me(&self) -> Result<TwitterUser, ConnectionError> {
        let url = format!("{}/users/me", self.base_url);

        debug!("fetching authenticated user");

        let resp = self
            .http
            .get(&url)
            .bearer_auth(self.bearer.expose())
            .send()
            .await
            .map_err(|e| ConnectionError::RequestFailed(e.to_string()))?;

        let body: Envelope<TwitterUser> = resp
            .json()
            .await
            .map_err(|e| ConnectionError::RequestFailed(e.to_string()))?;

        body.into_result()
    }

    /// Post a tweet.
    pub async fn post_tweet(&self, text: &str) -> Result<Tweet, ConnectionError> {
        let url = format!("{}/tweets", self.base_url);

        debug!(len = text.len(), "posting tweet");

        let resp = self
            .http
            .post(&url)
            .bearer_auth(self.bearer.expose())
            .json(&PostTweetRequest { text })
            .send()
            .await
            .map_err(|e| ConnectionError::RequestFailed(e.to_string()))?;

        let body: Envelope<Tweet> = resp
            .json()
            .await
            .map_err(|e| ConnectionError::RequestFailed(e.to_string()))?;

        body.into_result()
    }

    /// Fetch a user's recent tweets.
    pub async fn user_tweets(&self, user_id: u64) -> Result<Vec<Tweet>, ConnectionError> {
        let url = format!("{}/users/{user_id}/tweets", self.base_url);

        let resp = self
            .http
            .get(&url)
            .bearer_auth(self.bearer.expose())
            .send()
            .await
            .map_err(|e| ConnectionError::RequestFailed(e.to_string()))?;

        let body: Envelope<Vec<Tweet>> = resp
            .json()
            .await
            .map_err(|e| ConnectionError::RequestFailed(e.to_string()))?;

        body.into_result()
    }
}

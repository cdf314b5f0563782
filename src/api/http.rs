//! `reqwest`-backed fetcher for the live API.

use std::time::Duration;

use serde_json::Value;
use tracing::debug;

use super::Fetcher;
use crate::error::{FetchError, FetchResult};

const USER_AGENT: &str = concat!("pokedeck/", env!("CARGO_PKG_VERSION"));

/// Fetcher that talks to the real endpoints over HTTPS.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
    timeout: Option<Duration>,
}

impl HttpFetcher {
    /// Build a client. `timeout` caps every request when set.
    pub fn new(timeout: Option<Duration>) -> FetchResult<Self> {
        let mut builder = reqwest::Client::builder().user_agent(USER_AGENT);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(|e| FetchError::Transport {
            url: String::new(),
            message: format!("failed to build HTTP client: {}", e),
        })?;
        Ok(Self { client, timeout })
    }

    async fn send(&self, url: &str) -> FetchResult<reqwest::Response> {
        let response = self.client.get(url).send().await.map_err(|e| {
            if e.is_timeout() {
                FetchError::Timeout {
                    url: url.to_string(),
                    timeout_ms: self.timeout.map_or(0, |t| t.as_millis() as u64),
                }
            } else {
                FetchError::Transport {
                    url: url.to_string(),
                    message: e.to_string(),
                }
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }
        Ok(response)
    }
}

impl Fetcher for HttpFetcher {
    fn name(&self) -> &'static str {
        "http"
    }

    async fn get_json(&self, url: &str) -> FetchResult<Value> {
        debug!(url, "GET json");
        let response = self.send(url).await?;
        response.json::<Value>().await.map_err(|e| FetchError::Decode {
            url: url.to_string(),
            message: e.to_string(),
        })
    }

    async fn probe(&self, url: &str) -> FetchResult<()> {
        let response = self.send(url).await?;
        let body = response.bytes().await.map_err(|e| FetchError::Transport {
            url: url.to_string(),
            message: e.to_string(),
        })?;
        debug!(url, bytes = body.len(), "asset loaded");
        Ok(())
    }
}

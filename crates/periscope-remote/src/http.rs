//! Minimal JSON HTTP client for the settings server.

use std::time::Duration;

use serde::de::DeserializeOwned;

use periscope_core::errors::{PeriscopeResult, RemoteError};

/// Configuration for [`HttpClient`].
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    /// Server root, including the API version path segment.
    pub base_url: String,
    pub timeout: Duration,
}

impl HttpClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: Duration::from_secs(30),
        }
    }
}

/// Thin wrapper over `reqwest` that maps transport failures onto the
/// workspace error taxonomy.
#[derive(Debug, Clone)]
pub struct HttpClient {
    base_url: String,
    inner: reqwest::Client,
}

impl HttpClient {
    pub fn new(config: HttpClientConfig) -> PeriscopeResult<Self> {
        let inner = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| RemoteError::Network {
                reason: e.to_string(),
            })?;
        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            inner,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET a JSON document from a server-relative path.
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> PeriscopeResult<T> {
        let url = format!("{}{path}", self.base_url);
        tracing::debug!(%url, "GET");

        let response = self
            .inner
            .get(&url)
            .send()
            .await
            .map_err(|e| RemoteError::Network {
                reason: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(RemoteError::Http {
                status: status.as_u16(),
                url,
            }
            .into());
        }

        response
            .json::<T>()
            .await
            .map_err(|e| {
                RemoteError::MalformedPayload {
                    reason: e.to_string(),
                }
                .into()
            })
    }
}

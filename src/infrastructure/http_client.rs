//! HTTP client for the spreadsheet values API
//!
//! One GET per call, aborted through a cancellation token when the
//! configured timeout elapses. No retries.

use anyhow::{Context, Result};
use reqwest::{
    Client,
    header::{ACCEPT, HeaderMap, HeaderValue, USER_AGENT},
};
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use url::Url;

use crate::domain::errors::{CatalogError, CatalogResult};

/// HTTP client configuration
#[derive(Debug, Clone, serde::Serialize)]
pub struct HttpClientConfig {
    pub user_agent: String,
    pub follow_redirects: bool,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            user_agent: format!("sheet-catalog/{}", env!("CARGO_PKG_VERSION")),
            follow_redirects: true,
        }
    }
}

pub struct HttpClient {
    client: Client,
    config: HttpClientConfig,
}

impl HttpClient {
    /// Create a new HTTP client with the given configuration
    pub fn new(config: HttpClientConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(
            USER_AGENT,
            HeaderValue::from_str(&config.user_agent).context("Invalid user agent")?,
        );
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .default_headers(headers)
            .redirect(if config.follow_redirects {
                reqwest::redirect::Policy::limited(10)
            } else {
                reqwest::redirect::Policy::none()
            })
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { client, config })
    }

    /// Fetch `url` as text, cancelling the request once `timeout` elapses.
    pub async fn get_text_with_timeout(&self, url: &Url, timeout: Duration) -> CatalogResult<String> {
        let token = CancellationToken::new();
        let timer = tokio::spawn({
            let token = token.clone();
            async move {
                tokio::time::sleep(timeout).await;
                token.cancel();
            }
        });

        let result = self.get_text_with_cancellation(url, token.clone()).await;
        timer.abort();

        match result {
            Err(_) if token.is_cancelled() => Err(CatalogError::Timeout {
                timeout_ms: u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX),
            }),
            other => other,
        }
    }

    /// Fetch `url` as text with cancellation support
    pub async fn get_text_with_cancellation(
        &self,
        url: &Url,
        cancellation_token: CancellationToken,
    ) -> CatalogResult<String> {
        if cancellation_token.is_cancelled() {
            return Err(CatalogError::network("Request cancelled before starting"));
        }

        tracing::info!("Fetching sheet values from: {}", url.path());

        let response = tokio::select! {
            result = self.client.get(url.clone()).send() => {
                result.map_err(|e| CatalogError::network(e.to_string()))?
            },
            () = cancellation_token.cancelled() => {
                tracing::warn!("🛑 HTTP request cancelled for: {}", url.path());
                return Err(CatalogError::network("HTTP request cancelled"));
            }
        };

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::HttpStatus {
                status: status.as_u16(),
                url: url.path().to_string(),
            });
        }

        let text = tokio::select! {
            result = response.text() => {
                result.map_err(|e| CatalogError::network(e.to_string()))?
            },
            () = cancellation_token.cancelled() => {
                tracing::warn!("🛑 Response reading cancelled for: {}", url.path());
                return Err(CatalogError::network("Response reading cancelled"));
            }
        };

        tracing::debug!("Successfully fetched: {} ({} chars)", url.path(), text.len());
        Ok(text)
    }

    /// Get the configuration
    pub const fn config(&self) -> &HttpClientConfig {
        &self.config
    }
}

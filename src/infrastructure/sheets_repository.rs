//! Google Sheets backed product repository
//!
//! One values API call per `fetch_all`. Without an API key the sample
//! catalog is returned directly; after a failed call the sample catalog is
//! returned only when `use_fallback_on_error` is set.

use anyhow::Result;
use async_trait::async_trait;
use std::time::Duration;
use tracing::{info, warn};

use crate::domain::errors::{CatalogError, CatalogResult};
use crate::domain::product::Product;
use crate::domain::repositories::ProductRepository;
use crate::infrastructure::config::{DisplayConfig, SheetsConfig};
use crate::infrastructure::fallback::sample_products;
use crate::infrastructure::http_client::{HttpClient, HttpClientConfig};
use crate::infrastructure::row_mapper::{RowMapper, parse_values_body};

pub struct SheetsProductRepository {
    config: SheetsConfig,
    client: HttpClient,
    mapper: RowMapper,
}

impl SheetsProductRepository {
    pub fn new(config: SheetsConfig, display: &DisplayConfig) -> Result<Self> {
        Self::with_client_config(config, display, HttpClientConfig::default())
    }

    pub fn with_client_config(
        config: SheetsConfig,
        display: &DisplayConfig,
        client_config: HttpClientConfig,
    ) -> Result<Self> {
        let mapper = RowMapper::new(config.columns, display);
        let client = HttpClient::new(client_config)?;
        Ok(Self {
            config,
            client,
            mapper,
        })
    }

    async fn fetch_remote(&self) -> CatalogResult<Vec<Product>> {
        let url = self
            .config
            .values_url()
            .map_err(|e| CatalogError::Configuration {
                message: format!("invalid sheets endpoint: {e}"),
            })?;
        let timeout = Duration::from_millis(self.config.request_timeout_ms);

        let body = self.client.get_text_with_timeout(&url, timeout).await?;
        let rows = parse_values_body(&body)?;
        let products = self.mapper.map_rows(&rows);

        info!(
            "📦 Loaded {} products from {} sheet rows ({})",
            products.len(),
            rows.len().saturating_sub(1),
            self.config.range()
        );
        Ok(products)
    }
}

#[async_trait]
impl ProductRepository for SheetsProductRepository {
    async fn fetch_all(&self) -> CatalogResult<Vec<Product>> {
        if !self.config.has_credentials() {
            info!("No sheets API key configured, serving sample catalog");
            return Ok(sample_products());
        }

        match self.fetch_remote().await {
            Ok(products) => Ok(products),
            Err(e) if self.config.use_fallback_on_error => {
                warn!("⚠️ {}, serving sample catalog: {}", failure_summary(&e), e);
                Ok(sample_products())
            }
            Err(e) => {
                warn!("{}: {}", failure_summary(&e), e);
                Err(e)
            }
        }
    }
}

/// Short log label separating an unreachable sheet from an unusable one.
fn failure_summary(error: &CatalogError) -> &'static str {
    if error.is_transport() {
        "Sheet unreachable"
    } else {
        "Sheet returned unusable data"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_credentials_short_circuits() {
        // The endpoint is unroutable; reaching it would fail the test.
        let config = SheetsConfig {
            api_url: "http://127.0.0.1:9/v4/spreadsheets".to_string(),
            use_fallback_on_error: false,
            ..Default::default()
        };
        let repo = SheetsProductRepository::new(config, &DisplayConfig::default()).unwrap();

        let products = repo.fetch_all().await.unwrap();
        assert_eq!(products.len(), 8);
    }

    #[tokio::test]
    async fn test_invalid_endpoint_is_a_configuration_error() {
        let config = SheetsConfig {
            api_url: "not a url".to_string(),
            api_key: "real-key".to_string(),
            ..Default::default()
        };
        let repo = SheetsProductRepository::new(config, &DisplayConfig::default()).unwrap();

        let err = repo.fetch_all().await.unwrap_err();
        assert!(matches!(err, CatalogError::Configuration { .. }));
        assert_eq!(failure_summary(&err), "Sheet returned unusable data");
    }

    #[test]
    fn test_failure_summary_separates_transport_errors() {
        assert_eq!(
            failure_summary(&CatalogError::Timeout { timeout_ms: 10_000 }),
            "Sheet unreachable"
        );
        assert_eq!(
            failure_summary(&CatalogError::malformed("not json")),
            "Sheet returned unusable data"
        );
    }
}

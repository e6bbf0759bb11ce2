//! Application use cases for the catalog
//!
//! `GetProductsUseCase` is the boundary where repository failures become a
//! plain `RetrievalResult` value. Nothing above it sees an `Err`.

use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::warn;

use crate::domain::product::Product;
use crate::domain::repositories::ProductRepository;

/// Uniform `{success, data, error}` envelope returned by every read operation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RetrievalResult {
    pub success: bool,
    pub data: Vec<Product>,
    pub error: Option<String>,
}

impl RetrievalResult {
    pub const fn ok(data: Vec<Product>) -> Self {
        Self {
            success: true,
            data,
            error: None,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: Vec::new(),
            error: Some(message.into()),
        }
    }

    /// Keep only the products matching `predicate`. Failures pass through.
    #[must_use]
    pub fn retain<F>(mut self, predicate: F) -> Self
    where
        F: FnMut(&Product) -> bool,
    {
        if self.success {
            self.data.retain(predicate);
        }
        self
    }
}

pub struct GetProductsUseCase {
    product_repo: Arc<dyn ProductRepository>,
}

impl GetProductsUseCase {
    pub fn new(product_repo: Arc<dyn ProductRepository>) -> Self {
        Self { product_repo }
    }

    pub async fn execute(&self) -> RetrievalResult {
        match self.product_repo.fetch_all().await {
            Ok(products) => RetrievalResult::ok(products),
            Err(e) => {
                warn!("Product retrieval failed: {}", e);
                RetrievalResult::failure(e.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::{CatalogError, CatalogResult};
    use crate::domain::product::ProductDraft;
    use async_trait::async_trait;

    struct FixedRepository(CatalogResult<Vec<Product>>);

    #[async_trait]
    impl ProductRepository for FixedRepository {
        async fn fetch_all(&self) -> CatalogResult<Vec<Product>> {
            self.0.clone()
        }
    }

    fn product(title: &str) -> Product {
        Product::from(ProductDraft {
            title: Some(title.to_string()),
            price: Some(10.0),
            ..Default::default()
        })
    }

    #[tokio::test]
    async fn test_success_is_wrapped() {
        let repo = Arc::new(FixedRepository(Ok(vec![product("Vela")])));
        let result = GetProductsUseCase::new(repo).execute().await;

        assert!(result.success);
        assert_eq!(result.data.len(), 1);
        assert!(result.error.is_none());
    }

    #[tokio::test]
    async fn test_failure_becomes_envelope() {
        let repo = Arc::new(FixedRepository(Err(CatalogError::HttpStatus {
            status: 500,
            url: "/values".to_string(),
        })));
        let result = GetProductsUseCase::new(repo).execute().await;

        assert!(!result.success);
        assert!(result.data.is_empty());
        assert_eq!(result.error.as_deref(), Some("HTTP error! status: 500"));
    }

    #[test]
    fn test_envelope_json_shape() {
        let json = serde_json::to_value(RetrievalResult::failure("boom")).unwrap();
        assert_eq!(json, serde_json::json!({"success": false, "data": [], "error": "boom"}));

        let json = serde_json::to_value(RetrievalResult::ok(Vec::new())).unwrap();
        assert_eq!(json["error"], serde_json::Value::Null);
    }

    #[test]
    fn test_retain_leaves_failures_untouched() {
        let failure = RetrievalResult::failure("down").retain(|_| true);
        assert_eq!(failure, RetrievalResult::failure("down"));

        let filtered = RetrievalResult::ok(vec![product("a"), product("b")]).retain(|p| p.title() == "b");
        assert_eq!(filtered.data.len(), 1);
    }
}

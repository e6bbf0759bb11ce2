//! Catalog service
//!
//! The entry point for everything that reads the catalog. Each call runs a
//! fresh retrieval; filtering happens on that call's result only.

use std::sync::Arc;
use tracing::debug;

use crate::application::use_cases::{GetProductsUseCase, RetrievalResult};
use crate::domain::matching::{SearchTerm, matches_category};
use crate::domain::repositories::ProductRepository;

pub struct CatalogService {
    get_products: GetProductsUseCase,
}

impl CatalogService {
    pub fn new(product_repo: Arc<dyn ProductRepository>) -> Self {
        Self {
            get_products: GetProductsUseCase::new(product_repo),
        }
    }

    pub async fn get_all_products(&self) -> RetrievalResult {
        self.get_products.execute().await
    }

    /// Products whose category equals `category`, ignoring case and
    /// surrounding whitespace.
    pub async fn get_products_by_category(&self, category: &str) -> RetrievalResult {
        let result = self
            .get_all_products()
            .await
            .retain(|product| matches_category(product, category));
        debug!("Category '{}' matched {} products", category, result.data.len());
        result
    }

    /// Products whose title, description or category contains `term`,
    /// ignoring case. A blank term returns everything.
    pub async fn search_products(&self, term: &str) -> RetrievalResult {
        let term = SearchTerm::new(term);
        let result = self
            .get_all_products()
            .await
            .retain(|product| term.matches(product));
        debug!("Search '{}' matched {} products", term.as_str(), result.data.len());
        result
    }
}

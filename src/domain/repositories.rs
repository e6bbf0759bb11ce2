//! Repository interfaces for the catalog
//!
//! The catalog is read-only: a repository only knows how to produce the full
//! product set for one retrieval.

use async_trait::async_trait;

use crate::domain::errors::CatalogResult;
use crate::domain::product::Product;

#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Fetch every valid product. One outbound request at most, no retries.
    async fn fetch_all(&self) -> CatalogResult<Vec<Product>>;
}

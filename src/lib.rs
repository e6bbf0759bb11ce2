//! Sheet Catalog - product catalog backed by a remote spreadsheet
//!
//! Loads product rows from the Google Sheets values API, validates them into
//! products and answers category and text queries. When the sheet is not
//! configured, or unreachable with fallback enabled, a built-in sample
//! catalog is served instead.

// Module declarations
pub mod application;
pub mod domain;
pub mod infrastructure;

use anyhow::Result;
use std::sync::Arc;

pub use application::{CatalogService, CatalogView, CategoryFilter, RetrievalResult};
pub use domain::{CatalogError, Product};
pub use infrastructure::{CatalogConfig, SheetsProductRepository};

/// Wire a `CatalogService` over the Sheets repository described by `config`.
pub fn build_catalog_service(config: &CatalogConfig) -> Result<CatalogService> {
    let repository = SheetsProductRepository::new(config.sheets.clone(), &config.display)?;
    Ok(CatalogService::new(Arc::new(repository)))
}

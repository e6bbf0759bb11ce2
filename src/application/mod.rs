//! Application layer - Use cases and application services
//!
//! Retrieval use case, the catalog service that filters on top of it, and
//! the cached view used by front-ends.

pub mod catalog_service;
pub mod catalog_view;
pub mod use_cases;

// Re-export commonly used items
pub use catalog_service::CatalogService;
pub use catalog_view::{CatalogView, CategoryFilter};
pub use use_cases::{GetProductsUseCase, RetrievalResult};

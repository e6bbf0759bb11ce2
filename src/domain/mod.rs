//! Domain module - Core catalog entities and rules
//!
//! Products, price formatting, matching rules, error types and the
//! repository interface the application layer depends on.

pub mod errors;
pub mod matching;
pub mod price;
pub mod product;
pub mod repositories;

// Re-export commonly used items
pub use errors::{CatalogError, CatalogResult, RowError};
pub use product::{Product, ProductDraft};
pub use repositories::ProductRepository;

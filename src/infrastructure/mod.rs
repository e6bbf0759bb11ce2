//! Infrastructure layer for configuration, logging and the remote sheet source
//!
//! This module provides the HTTP client, row mapping, the Sheets-backed
//! repository, the built-in sample catalog and process-level setup.

pub mod config;
pub mod fallback;
pub mod http_client;
pub mod logging;
pub mod row_mapper;
pub mod sheets_repository;

// Re-export commonly used items
pub use config::{CatalogConfig, ColumnMapping, ConfigError, DisplayConfig, SheetsConfig};
pub use http_client::{HttpClient, HttpClientConfig};
pub use logging::{get_log_directory, init_logging, init_logging_with_config};
pub use row_mapper::RowMapper;
pub use sheets_repository::SheetsProductRepository;

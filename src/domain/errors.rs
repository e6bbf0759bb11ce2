//! Catalog error types
//!
//! Typed failures for the retrieval path. Row-level errors stay inside the
//! row mapper; `CatalogError` is what the repository hands to the use case.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Request timed out after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },

    #[error("Network error: {message}")]
    Network { message: String },

    #[error("HTTP error! status: {status}")]
    HttpStatus { status: u16, url: String },

    #[error("Malformed sheet response: {reason}")]
    MalformedResponse { reason: String },

    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl CatalogError {
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    pub fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedResponse {
            reason: reason.into(),
        }
    }

    /// True for timeout, network and HTTP status failures.
    pub const fn is_transport(&self) -> bool {
        matches!(
            self,
            Self::Timeout { .. } | Self::Network { .. } | Self::HttpStatus { .. }
        )
    }
}

/// Structural problem with a single raw row. Never leaves the row mapper.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RowError {
    #[error("Unexpected cell in column {column}: {found}")]
    UnexpectedCell { column: usize, found: String },
}

pub type CatalogResult<T> = Result<T, CatalogError>;

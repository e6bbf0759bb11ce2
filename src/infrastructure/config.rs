//! Configuration infrastructure
//!
//! Settings are layered: built-in defaults, then an optional config file
//! (TOML or JSON), then `CATALOG__*` environment variables.
//!
//! Configuration is organized into three sections:
//! 1. `sheets` - remote spreadsheet source and fetch behaviour
//! 2. `display` - presentation defaults applied to products
//! 3. `logging` - tracing output

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;
use url::Url;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load config: {source}")]
    Load {
        #[from]
        source: config::ConfigError,
    },

    #[error("Configuration validation failed: {message}")]
    Validation { message: String },
}

/// Complete catalog configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogConfig {
    pub sheets: SheetsConfig,
    pub display: DisplayConfig,
    pub logging: LoggingConfig,
}

/// Remote spreadsheet source settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SheetsConfig {
    /// Base URL of the values API
    pub api_url: String,

    /// Spreadsheet identifier, taken from the sheet's edit URL
    pub sheet_id: String,

    /// API key for public sheets; a value containing the placeholder marker
    /// counts as "not configured"
    pub api_key: String,

    /// Tab name inside the spreadsheet
    pub sheet_name: String,

    /// Cell range within the tab, e.g. `A:F`
    pub cell_range: String,

    /// Request timeout in milliseconds
    pub request_timeout_ms: u64,

    /// Serve the built-in sample products when the remote fetch fails
    pub use_fallback_on_error: bool,

    pub columns: ColumnMapping,
}

/// Positional layout of a sheet row (0-based column indices)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnMapping {
    pub title: usize,
    pub description: usize,
    pub price: usize,
    pub image_url: usize,
    pub category: usize,
    pub id: usize,
}

/// Presentation defaults
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    pub placeholder_image_url: String,
    pub default_category: String,

    /// Phone number used for product contact links
    pub contact_phone: String,
}

/// Logging configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level: "error", "warn", "info", "debug", "trace"
    pub level: String,

    /// Enable JSON formatted logs
    pub json_format: bool,

    /// Enable console output (stderr, so stdout stays clean for results)
    pub console_output: bool,

    /// Enable file output
    pub file_output: bool,

    /// Directory for log files; defaults to `logs/` beside the executable
    pub log_dir: Option<PathBuf>,
}

impl Default for SheetsConfig {
    fn default() -> Self {
        Self {
            api_url: google_sheets::API_URL.to_string(),
            sheet_id: defaults::SHEET_ID.to_string(),
            api_key: defaults::API_KEY.to_string(),
            sheet_name: defaults::SHEET_NAME.to_string(),
            cell_range: defaults::CELL_RANGE.to_string(),
            request_timeout_ms: defaults::REQUEST_TIMEOUT_MS,
            use_fallback_on_error: defaults::USE_FALLBACK_ON_ERROR,
            columns: ColumnMapping::default(),
        }
    }
}

impl Default for ColumnMapping {
    fn default() -> Self {
        Self {
            title: defaults::columns::TITLE,
            description: defaults::columns::DESCRIPTION,
            price: defaults::columns::PRICE,
            image_url: defaults::columns::IMAGE_URL,
            category: defaults::columns::CATEGORY,
            id: defaults::columns::ID,
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            placeholder_image_url: defaults::PLACEHOLDER_IMAGE_URL.to_string(),
            default_category: defaults::DEFAULT_CATEGORY.to_string(),
            contact_phone: defaults::CONTACT_PHONE.to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: defaults::LOG_LEVEL.to_string(),
            json_format: defaults::LOG_JSON_FORMAT,
            console_output: defaults::LOG_CONSOLE_OUTPUT,
            file_output: defaults::LOG_FILE_OUTPUT,
            log_dir: None,
        }
    }
}

impl SheetsConfig {
    /// Full A1 range, e.g. `Productos!A:F`
    pub fn range(&self) -> String {
        format!("{}!{}", self.sheet_name, self.cell_range)
    }

    /// False when the API key is empty or still the placeholder
    pub fn has_credentials(&self) -> bool {
        let key = self.api_key.trim();
        !key.is_empty() && !key.contains(defaults::CREDENTIAL_PLACEHOLDER)
    }

    /// `<api_url>/<sheet_id>/values/<range>?key=<api_key>`
    pub fn values_url(&self) -> Result<Url, url::ParseError> {
        let mut url = Url::parse(&self.api_url)?;
        url.path_segments_mut()
            .map_err(|()| url::ParseError::RelativeUrlWithCannotBeABaseBase)?
            .pop_if_empty()
            .push(&self.sheet_id)
            .push("values")
            .push(&self.range());
        url.query_pairs_mut().append_pair("key", &self.api_key);
        Ok(url)
    }
}

impl ColumnMapping {
    fn indices(&self) -> [usize; 6] {
        [
            self.title,
            self.description,
            self.price,
            self.image_url,
            self.category,
            self.id,
        ]
    }
}

impl CatalogConfig {
    /// Load defaults, then `path` if given, then the environment.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        Self::load_with_env(path, None)
    }

    /// Same as [`Self::load`], reading environment overrides from `env`
    /// instead of the process environment when provided.
    pub fn load_with_env(
        path: Option<&Path>,
        env: Option<HashMap<String, String>>,
    ) -> Result<Self, ConfigError> {
        let mut builder =
            config::Config::builder().add_source(config::Config::try_from(&Self::default())?);

        if let Some(path) = path {
            info!("Loading configuration from: {:?}", path);
            builder = builder.add_source(config::File::from(path).required(true));
        }

        let settings = builder
            .add_source(
                config::Environment::with_prefix(defaults::ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true)
                    .source(env),
            )
            .build()?;

        let config: Self = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// `<config dir>/sheet-catalog/config.toml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("sheet-catalog").join("config.toml"))
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.sheets.request_timeout_ms == 0 {
            return Err(ConfigError::Validation {
                message: "sheets.request_timeout_ms must be greater than 0".to_string(),
            });
        }

        if self.sheets.api_url.trim().is_empty() {
            return Err(ConfigError::Validation {
                message: "sheets.api_url cannot be empty".to_string(),
            });
        }

        let mut indices = self.sheets.columns.indices();
        indices.sort_unstable();
        if indices.windows(2).any(|pair| pair[0] == pair[1]) {
            return Err(ConfigError::Validation {
                message: "sheets.columns must use distinct column indices".to_string(),
            });
        }

        Ok(())
    }
}

/// Google Sheets API constants
pub mod google_sheets {
    /// Base URL of the Sheets v4 spreadsheets API
    pub const API_URL: &str = "https://sheets.googleapis.com/v4/spreadsheets";

    /// Field of the values response holding the 2-D cell array
    pub const VALUES_FIELD: &str = "values";
}

/// Default configuration values
pub mod defaults {
    use crate::domain::product;

    /// Environment variable prefix (`CATALOG__SHEETS__API_KEY`, ...)
    pub const ENV_PREFIX: &str = "CATALOG";

    /// Marker identifying an unconfigured credential
    pub const CREDENTIAL_PLACEHOLDER: &str = "XXXX";

    pub const SHEET_ID: &str = "YOUR_SHEET_ID";
    pub const API_KEY: &str = "AIzaSyXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXX";
    pub const SHEET_NAME: &str = "Productos";
    pub const CELL_RANGE: &str = "A:F";

    /// Default request timeout in milliseconds
    pub const REQUEST_TIMEOUT_MS: u64 = 10_000;

    pub const USE_FALLBACK_ON_ERROR: bool = false;

    pub const PLACEHOLDER_IMAGE_URL: &str = product::PLACEHOLDER_IMAGE_URL;
    pub const DEFAULT_CATEGORY: &str = product::DEFAULT_CATEGORY;
    pub const CONTACT_PHONE: &str = "5491100000000";

    // Log configuration defaults
    pub const LOG_LEVEL: &str = "info";
    pub const LOG_JSON_FORMAT: bool = false;
    pub const LOG_CONSOLE_OUTPUT: bool = true;
    pub const LOG_FILE_OUTPUT: bool = false;

    /// Title | Description | Price | Image URL | Category | ID
    pub mod columns {
        pub const TITLE: usize = 0;
        pub const DESCRIPTION: usize = 1;
        pub const PRICE: usize = 2;
        pub const IMAGE_URL: usize = 3;
        pub const CATEGORY: usize = 4;
        pub const ID: usize = 5;
    }
}

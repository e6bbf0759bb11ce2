//! Sheet row mapping
//!
//! Turns the raw `values` table of a sheet into valid products:
//! header dropped, rows without a title skipped, structurally broken rows
//! discarded one at a time, invalid products filtered out.

use serde_json::Value;
use tracing::debug;

use crate::domain::errors::{CatalogError, CatalogResult, RowError};
use crate::domain::product::{Product, ProductDraft};
use crate::infrastructure::config::{ColumnMapping, DisplayConfig, google_sheets};

const INFINITY: &str = "Infinity";

/// Extract the row array from a values API response body.
/// A response without the values field is an empty sheet.
pub fn parse_values_body(body: &str) -> CatalogResult<Vec<Value>> {
    let json: Value = serde_json::from_str(body)
        .map_err(|e| CatalogError::malformed(format!("invalid JSON: {e}")))?;

    let object = json
        .as_object()
        .ok_or_else(|| CatalogError::malformed("response is not a JSON object"))?;

    match object.get(google_sheets::VALUES_FIELD) {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(Value::Array(rows)) => Ok(rows.clone()),
        Some(other) => Err(CatalogError::malformed(format!(
            "'{}' is not an array: {other}",
            google_sheets::VALUES_FIELD
        ))),
    }
}

/// Lenient float parse of the leading numeric part of `text`
/// (`"3200 ARS"` → 3200, `"Infinity"` → ∞). Anything unparseable is 0.
pub fn parse_price(text: &str) -> f64 {
    let s = text.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }
    if s[end..].starts_with(INFINITY) {
        return if bytes.first() == Some(&b'-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }
    let int_start = end;
    while bytes.get(end).is_some_and(u8::is_ascii_digit) {
        end += 1;
    }
    let mut digits = end - int_start;

    if bytes.get(end) == Some(&b'.') {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while bytes.get(frac_end).is_some_and(u8::is_ascii_digit) {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        if digits > 0 {
            end = frac_end;
        }
    }

    if digits == 0 {
        return 0.0;
    }

    // exponent only counts when followed by at least one digit
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while bytes.get(exp_end).is_some_and(u8::is_ascii_digit) {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    s[..end].parse::<f64>().unwrap_or(0.0)
}

pub struct RowMapper {
    columns: ColumnMapping,
    placeholder_image_url: String,
    default_category: String,
}

impl RowMapper {
    pub fn new(columns: ColumnMapping, display: &DisplayConfig) -> Self {
        Self {
            columns,
            placeholder_image_url: display.placeholder_image_url.clone(),
            default_category: display.default_category.clone(),
        }
    }

    /// Map a raw table (header row included) to valid products, in order.
    pub fn map_rows(&self, rows: &[Value]) -> Vec<Product> {
        if rows.len() <= 1 {
            return Vec::new();
        }

        let data_rows = &rows[1..];
        let mut structural = 0usize;

        let titled: Vec<&Value> = data_rows.iter().filter(|row| self.has_title(row)).collect();

        let built: Vec<Product> = titled
            .iter()
            .enumerate()
            .filter_map(|(index, row)| match self.build_product(row, index + 1) {
                Ok(product) => Some(product),
                Err(e) => {
                    structural += 1;
                    debug!("Skipping row {}: {}", index + 1, e);
                    None
                }
            })
            .collect();

        let built_count = built.len();
        let products: Vec<Product> = built.into_iter().filter(Product::is_valid).collect();

        debug!(
            "Mapped {} sheet rows: {} titled, {} malformed, {} invalid, {} kept",
            data_rows.len(),
            titled.len(),
            structural,
            built_count - products.len(),
            products.len()
        );

        products
    }

    fn has_title(&self, row: &Value) -> bool {
        cell_text(row, self.columns.title)
            .ok()
            .flatten()
            .is_some_and(|title| !title.is_empty())
    }

    /// `position` is the 1-based index among titled rows.
    fn build_product(&self, row: &Value, position: usize) -> Result<Product, RowError> {
        let cell = |column| cell_text(row, column).map(non_empty);

        let draft = ProductDraft {
            id: cell(self.columns.id)?,
            title: cell(self.columns.title)?,
            description: cell(self.columns.description)?,
            price: Some(cell(self.columns.price)?.as_deref().map_or(0.0, parse_price)),
            image_url: Some(
                cell(self.columns.image_url)?
                    .unwrap_or_else(|| self.placeholder_image_url.clone()),
            ),
            category: Some(
                cell(self.columns.category)?.unwrap_or_else(|| self.default_category.clone()),
            ),
        };

        Ok(Product::from(draft.with_generated_id(position)))
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// Text of one cell. Missing and null cells are absent; scalars are
/// rendered as text; nested arrays or objects are a structural error.
fn cell_text(row: &Value, column: usize) -> Result<Option<String>, RowError> {
    let cells = row.as_array().ok_or_else(|| RowError::UnexpectedCell {
        column,
        found: format!("row is not an array: {row}"),
    })?;

    match cells.get(column) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(Value::Number(n)) => Ok(Some(n.to_string())),
        Some(Value::Bool(b)) => Ok(Some(b.to_string())),
        Some(other) => Err(RowError::UnexpectedCell {
            column,
            found: other.to_string(),
        }),
    }
}

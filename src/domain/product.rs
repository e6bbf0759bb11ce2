use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use serde::{Deserialize, Serialize};

use crate::domain::price::CurrencyFormat;

/// Category assigned when the source leaves it blank
pub const DEFAULT_CATEGORY: &str = "General";

/// Image shown for products without their own picture
pub const PLACEHOLDER_IMAGE_URL: &str =
    "https://images.unsplash.com/photo-1523275335684-37898b6baf30?w=400&h=400&fit=crop";

/// Base of the messaging deep link used by `contact_link`
pub const CONTACT_LINK_BASE: &str = "https://wa.me";

/// Characters a URI component keeps verbatim besides ASCII alphanumerics
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Loosely-typed product record, as read from a sheet row or sample data
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDraft {
    pub id: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub image_url: Option<String>,
    pub category: Option<String>,
}

impl ProductDraft {
    /// Fill a missing or blank id with the sequential form `product-<position>`.
    /// `position` is 1-based.
    #[must_use]
    pub fn with_generated_id(mut self, position: usize) -> Self {
        if self.id.as_deref().is_none_or(str::is_empty) {
            self.id = Some(format!("product-{position}"));
        }
        self
    }
}

/// A catalog item. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "ProductDraft")]
pub struct Product {
    id: String,
    title: String,
    description: String,
    price: f64,
    image_url: String,
    category: String,
}

impl From<ProductDraft> for Product {
    fn from(draft: ProductDraft) -> Self {
        Self {
            id: draft.id.unwrap_or_default(),
            title: draft.title.unwrap_or_default(),
            description: non_empty(draft.description).unwrap_or_default(),
            price: draft.price.unwrap_or(0.0),
            image_url: non_empty(draft.image_url)
                .unwrap_or_else(|| PLACEHOLDER_IMAGE_URL.to_string()),
            category: non_empty(draft.category).unwrap_or_else(|| DEFAULT_CATEGORY.to_string()),
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

impl Product {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub const fn price(&self) -> f64 {
        self.price
    }

    pub fn image_url(&self) -> &str {
        &self.image_url
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    /// A product is shown only with a title and a strictly positive price.
    pub fn is_valid(&self) -> bool {
        !self.title.is_empty() && self.price > 0.0
    }

    pub fn formatted_price(&self) -> String {
        CurrencyFormat::ARS.format(self.price)
    }

    /// Deep link to a chat with `phone_number`, pre-filled with an enquiry
    /// about this product.
    pub fn contact_link(&self, phone_number: &str) -> String {
        let message = format!(
            "Hola! Me interesa el producto: *{}* - {}",
            self.title,
            self.formatted_price()
        );
        format!(
            "{CONTACT_LINK_BASE}/{phone_number}?text={}",
            utf8_percent_encode(&message, URI_COMPONENT)
        )
    }
}

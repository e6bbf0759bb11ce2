//! Product matching rules shared by the catalog service and the cached view.
//!
//! Category: trimmed, case-insensitive, exact.
//! Search: trimmed, case-insensitive substring of title, description or category.
//! A blank search term matches everything.

use crate::domain::product::Product;

fn normalize(value: &str) -> String {
    value.trim().to_lowercase()
}

pub fn matches_category(product: &Product, category: &str) -> bool {
    normalize(product.category()) == normalize(category)
}

/// Pre-normalized search term, so a filter pass lowercases the term once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTerm(String);

impl SearchTerm {
    pub fn new(term: &str) -> Self {
        Self(normalize(term))
    }

    pub fn is_blank(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn matches(&self, product: &Product) -> bool {
        if self.is_blank() {
            return true;
        }
        [product.title(), product.description(), product.category()]
            .iter()
            .any(|field| field.to_lowercase().contains(&self.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::product::ProductDraft;
    use rstest::rstest;

    fn product(title: &str, description: &str, category: &str) -> Product {
        Product::from(ProductDraft {
            id: Some("p".to_string()),
            title: Some(title.to_string()),
            description: Some(description.to_string()),
            price: Some(1.0),
            category: Some(category.to_string()),
            ..Default::default()
        })
    }

    #[rstest]
    #[case("Joyería")]
    #[case("joyería")]
    #[case("JOYERÍA")]
    #[case("  Joyería ")]
    fn test_category_is_case_insensitive_and_trimmed(#[case] query: &str) {
        assert!(matches_category(&product("Aros", "", "Joyería"), query));
    }

    #[test]
    fn test_category_requires_exact_match() {
        let p = product("Aros", "", "Joyería");
        assert!(!matches_category(&p, "Joy"));
        assert!(!matches_category(&p, ""));
    }

    #[test]
    fn test_category_with_trailing_space_in_source() {
        assert!(matches_category(&product("Aros", "", "Hogar "), "hogar"));
    }

    #[rstest]
    #[case("luna", true)]
    #[case("PIEDRAS", true)]
    #[case("joy", true)]
    #[case(" Collar ", true)]
    #[case("madera", false)]
    fn test_search_fields(#[case] term: &str, #[case] expected: bool) {
        let p = product("Collar Artesanal", "piedras naturales y dije de luna", "Joyería");
        assert_eq!(SearchTerm::new(term).matches(&p), expected);
    }

    #[test]
    fn test_blank_term_matches_all() {
        let term = SearchTerm::new("   ");
        assert!(term.is_blank());
        assert!(term.matches(&product("x", "", "General")));
    }
}

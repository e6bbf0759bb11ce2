//! Cached catalog view
//!
//! Holds one full product set and the current category / search selection,
//! so a front-end can re-filter without another retrieval. Uses the same
//! matching rules as [`CatalogService`](crate::application::CatalogService).

use std::collections::HashSet;

use crate::application::use_cases::RetrievalResult;
use crate::domain::matching::{SearchTerm, matches_category};
use crate::domain::product::Product;

const ALL_SENTINEL: &str = "all";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    All,
    Named(String),
}

impl CategoryFilter {
    /// The exact sentinel `"all"` selects every category; anything else,
    /// including `"All"`, names a category.
    pub fn parse(value: &str) -> Self {
        if value == ALL_SENTINEL {
            Self::All
        } else {
            Self::Named(value.to_string())
        }
    }
}

#[derive(Debug, Clone)]
pub struct CatalogView {
    all_products: Vec<Product>,
    category: CategoryFilter,
    search: SearchTerm,
}

impl Default for CatalogView {
    fn default() -> Self {
        Self {
            all_products: Vec::new(),
            category: CategoryFilter::All,
            search: SearchTerm::new(""),
        }
    }
}

impl CatalogView {
    /// Cache the products of a retrieval. A failed retrieval caches nothing.
    pub fn from_result(result: &RetrievalResult) -> Self {
        let mut view = Self::default();
        if result.success {
            view.set_all_products(result.data.clone());
        }
        view
    }

    pub fn set_all_products(&mut self, products: Vec<Product>) {
        self.all_products = products;
    }

    pub fn all_products(&self) -> &[Product] {
        &self.all_products
    }

    /// Distinct categories, sorted. Spellings that differ only in case or
    /// surrounding whitespace collapse to the first one seen.
    pub fn categories(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut categories: Vec<String> = self
            .all_products
            .iter()
            .map(|p| p.category().trim())
            .filter(|c| !c.is_empty() && seen.insert(c.to_lowercase()))
            .map(str::to_string)
            .collect();
        categories.sort_by_key(|c| c.to_lowercase());
        categories
    }

    pub fn filter_by_category(&mut self, category: CategoryFilter) {
        self.category = category;
    }

    /// Set the search term and return how many products are now visible.
    pub fn filter_products(&mut self, term: &str) -> usize {
        self.search = SearchTerm::new(term);
        self.visible().len()
    }

    pub fn has_active_filters(&self) -> bool {
        self.category != CategoryFilter::All || !self.search.is_blank()
    }

    /// Products passing both the category and the search filter, in order.
    pub fn visible(&self) -> Vec<&Product> {
        self.all_products
            .iter()
            .filter(|p| match &self.category {
                CategoryFilter::All => true,
                CategoryFilter::Named(name) => matches_category(p, name),
            })
            .filter(|p| self.search.matches(p))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::product::ProductDraft;
    use crate::infrastructure::fallback::sample_products;

    fn sample_view() -> CatalogView {
        CatalogView::from_result(&RetrievalResult::ok(sample_products()))
    }

    #[test]
    fn test_categories_sorted_and_distinct() {
        assert_eq!(
            sample_view().categories(),
            vec![
                "Accesorios",
                "Cosmética",
                "Decoración",
                "Hogar",
                "Joyería",
                "Papelería"
            ]
        );
    }

    #[test]
    fn test_categories_collapse_case_variants() {
        let mut view = CatalogView::default();
        let make = |category: &str| {
            Product::from(ProductDraft {
                title: Some("x".to_string()),
                price: Some(1.0),
                category: Some(category.to_string()),
                ..Default::default()
            })
        };
        view.set_all_products(vec![make("Hogar"), make("hogar "), make("Arte")]);
        assert_eq!(view.categories(), vec!["Arte", "Hogar"]);
    }

    #[test]
    fn test_combined_filters() {
        let mut view = sample_view();
        assert!(!view.has_active_filters());

        view.filter_by_category(CategoryFilter::parse("decoración"));
        assert_eq!(view.visible().len(), 2);

        assert_eq!(view.filter_products("corcho"), 1);
        assert_eq!(view.visible()[0].title(), "Set de Posavasos Corcho");
        assert!(view.has_active_filters());

        view.filter_by_category(CategoryFilter::All);
        view.filter_products("");
        assert_eq!(view.visible().len(), 8);
        assert!(!view.has_active_filters());
    }

    #[test]
    fn test_category_filter_parse() {
        assert_eq!(CategoryFilter::parse("all"), CategoryFilter::All);
        assert_eq!(
            CategoryFilter::parse("All"),
            CategoryFilter::Named("All".to_string())
        );
        assert_eq!(
            CategoryFilter::parse("Hogar"),
            CategoryFilter::Named("Hogar".to_string())
        );
    }

    #[test]
    fn test_category_literally_named_all_is_selectable() {
        let mut view = CatalogView::default();
        let make = |title: &str, category: &str| {
            Product::from(ProductDraft {
                title: Some(title.to_string()),
                price: Some(1.0),
                category: Some(category.to_string()),
                ..Default::default()
            })
        };
        view.set_all_products(vec![make("Kit", "All"), make("Vela", "Hogar")]);

        view.filter_by_category(CategoryFilter::parse("All"));
        let titles: Vec<&str> = view.visible().iter().map(|p| p.title()).collect();
        assert_eq!(titles, vec!["Kit"]);

        view.filter_by_category(CategoryFilter::parse("all"));
        assert_eq!(view.visible().len(), 2);
    }

    #[test]
    fn test_failed_result_caches_nothing() {
        let view = CatalogView::from_result(&RetrievalResult::failure("down"));
        assert!(view.all_products().is_empty());
        assert!(view.categories().is_empty());
    }
}

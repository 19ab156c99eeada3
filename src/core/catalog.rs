//! Filterable catalogs of products and services.
//!
//! A [`Catalog`] keeps items in fixture order and answers the three
//! questions the catalog pages ask: which categories exist, which items
//! match the selected [`CategoryFilter`], and which item has a given id.

use std::collections::HashSet;

use serde::de::DeserializeOwned;

use super::error::{ContentError, FetchError};
use crate::models::CatalogItem;

/// Category selection on a catalog page.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum CategoryFilter {
    #[default]
    All,
    Category(String),
}

impl CategoryFilter {
    /// Raw value ("all" or the category name).
    pub fn value(&self) -> &str {
        match self {
            Self::All => "all",
            Self::Category(name) => name,
        }
    }

    /// Pill label with the first character upper-cased.
    pub fn label(&self) -> String {
        let value = self.value();
        let mut chars = value.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }

    pub fn matches(&self, category: &str) -> bool {
        match self {
            Self::All => true,
            Self::Category(name) => name == category,
        }
    }
}

/// Summary numbers shown under the products grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CatalogStats {
    pub total: usize,
    /// Distinct categories, not counting "all".
    pub categories: usize,
    pub featured: usize,
}

/// Validated, ordered collection of catalog items.
#[derive(Clone, Debug, PartialEq)]
pub struct Catalog<T> {
    items: Vec<T>,
}

impl<T> Default for Catalog<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T: CatalogItem> Catalog<T> {
    /// Build a catalog, rejecting empty ids, empty categories and duplicates.
    pub fn new(items: Vec<T>) -> Result<Self, ContentError> {
        let mut seen = HashSet::new();
        for (position, item) in items.iter().enumerate() {
            if item.id().trim().is_empty() {
                return Err(ContentError::EmptyId(position));
            }
            if item.category().trim().is_empty() {
                return Err(ContentError::EmptyCategory(item.id().to_string()));
            }
            if !seen.insert(item.id()) {
                return Err(ContentError::DuplicateId(item.id().to_string()));
            }
        }
        Ok(Self { items })
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// `All` followed by each distinct category in first-seen order.
    pub fn categories(&self) -> Vec<CategoryFilter> {
        let mut seen = HashSet::new();
        let mut filters = vec![CategoryFilter::All];
        for item in &self.items {
            if seen.insert(item.category()) {
                filters.push(CategoryFilter::Category(item.category().to_string()));
            }
        }
        filters
    }

    /// Items matching the filter, in catalog order.
    pub fn filter(&self, filter: &CategoryFilter) -> Vec<&T> {
        self.items
            .iter()
            .filter(|item| filter.matches(item.category()))
            .collect()
    }

    pub fn find(&self, id: &str) -> Option<&T> {
        self.items.iter().find(|item| item.id() == id)
    }

    pub fn stats(&self) -> CatalogStats {
        CatalogStats {
            total: self.items.len(),
            categories: self.categories().len() - 1,
            featured: self.items.iter().filter(|item| item.featured()).count(),
        }
    }
}

impl<T: CatalogItem + DeserializeOwned> Catalog<T> {
    /// Parse and validate a JSON array of items.
    pub fn from_json(source_name: &'static str, json: &str) -> Result<Self, ContentError> {
        Self::new(parse_json(source_name, json)?)
    }
}

/// Address of `file` under a remote catalog base URL.
pub fn remote_url(base: &str, file: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), file)
}

/// Decode a downloaded catalog body with the same checks as the fixtures.
pub fn decode_remote<T>(source_name: &'static str, body: &str) -> Result<Catalog<T>, FetchError>
where
    T: CatalogItem + DeserializeOwned,
{
    Ok(Catalog::from_json(source_name, body)?)
}

/// Parse a JSON fixture, tagging errors with the fixture name.
pub fn parse_json<T: DeserializeOwned>(
    source_name: &'static str,
    json: &str,
) -> Result<T, ContentError> {
    serde_json::from_str(json).map_err(|e| ContentError::Parse {
        source_name,
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Service;

    fn service(id: &str, category: &str, featured: bool) -> Service {
        Service {
            id: id.to_string(),
            title: id.to_uppercase(),
            category: category.to_string(),
            summary: String::new(),
            description: String::new(),
            image: String::new(),
            gallery: Vec::new(),
            deliverables: Vec::new(),
            technologies: Vec::new(),
            delivery_time: "2 weeks".to_string(),
            featured,
        }
    }

    fn sample() -> Catalog<Service> {
        Catalog::new(vec![
            service("a", "design", true),
            service("b", "development", false),
            service("c", "design", false),
            service("d", "marketing", true),
        ])
        .unwrap()
    }

    fn category(name: &str) -> CategoryFilter {
        CategoryFilter::Category(name.to_string())
    }

    fn ids(items: Vec<&Service>) -> Vec<&str> {
        items.into_iter().map(|s| s.id.as_str()).collect()
    }

    #[test]
    fn test_categories_first_seen_order() {
        let values: Vec<String> = sample()
            .categories()
            .iter()
            .map(|c| c.value().to_string())
            .collect();
        assert_eq!(values, ["all", "design", "development", "marketing"]);
    }

    #[test]
    fn test_filter_preserves_order() {
        let catalog = sample();
        assert_eq!(ids(catalog.filter(&CategoryFilter::All)), ["a", "b", "c", "d"]);
        assert_eq!(
            ids(catalog.filter(&category("design"))),
            ["a", "c"]
        );
        assert!(catalog.filter(&category("hardware")).is_empty());
    }

    #[test]
    fn test_filter_is_case_sensitive_for_categories() {
        let catalog = sample();
        assert!(catalog.filter(&category("Design")).is_empty());
    }

    #[test]
    fn test_labels_capitalize_first_letter() {
        assert_eq!(CategoryFilter::All.label(), "All");
        assert_eq!(category("web").label(), "Web");
        assert_eq!(category("saas").label(), "Saas");
        assert_eq!(CategoryFilter::Category(String::new()).label(), "");
    }

    #[test]
    fn test_find_and_stats() {
        let catalog = sample();
        assert_eq!(catalog.find("c").map(|s| s.category.as_str()), Some("design"));
        assert!(catalog.find("z").is_none());
        assert_eq!(
            catalog.stats(),
            CatalogStats {
                total: 4,
                categories: 3,
                featured: 2
            }
        );
    }

    #[test]
    fn test_empty_catalog() {
        let catalog: Catalog<Service> = Catalog::new(Vec::new()).unwrap();
        assert_eq!(catalog.categories(), vec![CategoryFilter::All]);
        assert_eq!(catalog.stats().categories, 0);
        assert!(catalog.filter(&CategoryFilter::All).is_empty());
    }

    #[test]
    fn test_validation_errors() {
        let dup = Catalog::new(vec![service("a", "x", false), service("a", "y", false)]);
        assert_eq!(dup, Err(ContentError::DuplicateId("a".to_string())));

        let empty_id = Catalog::new(vec![service("a", "x", false), service(" ", "y", false)]);
        assert_eq!(empty_id, Err(ContentError::EmptyId(1)));

        let empty_cat = Catalog::new(vec![service("a", "", false)]);
        assert_eq!(empty_cat, Err(ContentError::EmptyCategory("a".to_string())));
    }

    #[test]
    fn test_from_json_reports_source() {
        let err = Catalog::<Service>::from_json("services.json", "{ not json").unwrap_err();
        assert!(matches!(
            err,
            ContentError::Parse {
                source_name: "services.json",
                ..
            }
        ));
    }

    const REMOTE_SERVICE: &str = r#"{"id":"ui","title":"UI","category":"design","summary":"x",
        "description":"y","image":"/ui.jpg","delivery_time":"3 weeks"}"#;

    #[test]
    fn test_remote_url_joins_base_and_file() {
        assert_eq!(
            remote_url("https://cdn.nsappsinnovations.com/data/", "products.json"),
            "https://cdn.nsappsinnovations.com/data/products.json"
        );
        assert_eq!(remote_url("https://cdn.example", "services.json"), "https://cdn.example/services.json");
    }

    #[test]
    fn test_decode_remote_accepts_valid_body() {
        let catalog = decode_remote::<Service>("services.json", &format!("[{}]", REMOTE_SERVICE)).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.find("ui").map(|s| s.delivery_time.as_str()), Some("3 weeks"));
    }

    #[test]
    fn test_decode_remote_rejects_malformed_body() {
        let err = decode_remote::<Service>("services.json", "<html>502</html>").unwrap_err();
        assert!(matches!(
            err,
            FetchError::Content(ContentError::Parse {
                source_name: "services.json",
                ..
            })
        ));
    }

    #[test]
    fn test_decode_remote_rejects_invalid_catalog() {
        let body = format!("[{0},{0}]", REMOTE_SERVICE);
        assert_eq!(
            decode_remote::<Service>("services.json", &body).unwrap_err(),
            FetchError::Content(ContentError::DuplicateId("ui".to_string()))
        );
    }
}

//! Catalog entries: products the studio shipped and services it sells.

use serde::{Deserialize, Serialize};

/// Shared view of anything listed in a filterable catalog.
pub trait CatalogItem {
    fn id(&self) -> &str;
    fn title(&self) -> &str;
    fn category(&self) -> &str;
    fn summary(&self) -> &str;
    fn image(&self) -> &str;
    fn technologies(&self) -> &[String];
    fn featured(&self) -> bool;
    /// Short badge text: release year for products, delivery time for services.
    fn meta_label(&self) -> String;

    /// Catalog this item type belongs to.
    fn kind() -> CatalogKind
    where
        Self: Sized;
}

/// A shipped product shown on the products page and the home showcase.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub title: String,
    pub category: String,
    /// One or two sentences for cards and showcase panels.
    pub summary: String,
    /// Markdown body for the detail page.
    pub description: String,
    pub image: String,
    #[serde(default)]
    pub gallery: Vec<String>,
    #[serde(default)]
    pub technologies: Vec<String>,
    pub client: String,
    /// Human-readable delivery date ("October 2025").
    pub date: String,
    pub year: u16,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub live_url: Option<String>,
    #[serde(default)]
    pub source_url: Option<String>,
}

/// A service offering shown on the services page and the home showcase.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Service {
    pub id: String,
    pub title: String,
    pub category: String,
    pub summary: String,
    /// Markdown body for the detail page.
    pub description: String,
    pub image: String,
    #[serde(default)]
    pub gallery: Vec<String>,
    #[serde(default)]
    pub deliverables: Vec<String>,
    #[serde(default)]
    pub technologies: Vec<String>,
    pub delivery_time: String,
    #[serde(default)]
    pub featured: bool,
}

macro_rules! impl_catalog_item {
    ($ty:ty, $kind:expr, |$item:ident| $meta:expr) => {
        impl CatalogItem for $ty {
            fn id(&self) -> &str {
                &self.id
            }
            fn title(&self) -> &str {
                &self.title
            }
            fn category(&self) -> &str {
                &self.category
            }
            fn summary(&self) -> &str {
                &self.summary
            }
            fn image(&self) -> &str {
                &self.image
            }
            fn technologies(&self) -> &[String] {
                &self.technologies
            }
            fn featured(&self) -> bool {
                self.featured
            }
            fn meta_label(&self) -> String {
                let $item = self;
                $meta
            }
            fn kind() -> CatalogKind {
                $kind
            }
        }
    };
}

impl_catalog_item!(Product, CatalogKind::Products, |p| p.year.to_string());
impl_catalog_item!(Service, CatalogKind::Services, |s| s.delivery_time.clone());

/// Which catalog a page or route refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CatalogKind {
    Products,
    Services,
}

impl CatalogKind {
    /// Value of the `type` query parameter on the explore route.
    pub fn query_value(self) -> &'static str {
        match self {
            Self::Products => "product",
            Self::Services => "service",
        }
    }

    pub fn from_query_value(value: &str) -> Option<Self> {
        match value {
            "product" => Some(Self::Products),
            "service" => Some(Self::Services),
            _ => None,
        }
    }

    /// Plural noun used in page copy ("products", "services").
    pub fn noun(self) -> &'static str {
        match self {
            Self::Products => "products",
            Self::Services => "services",
        }
    }

    /// Page title ("Our Products").
    pub fn title(self) -> &'static str {
        match self {
            Self::Products => "Our Products",
            Self::Services => "Our Services",
        }
    }

    /// Overlay label prefix for gallery tiles.
    pub fn gallery_prefix(self) -> &'static str {
        match self {
            Self::Products => "Asset",
            Self::Services => "Case",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_values() {
        for kind in [CatalogKind::Products, CatalogKind::Services] {
            assert_eq!(CatalogKind::from_query_value(kind.query_value()), Some(kind));
        }
        assert_eq!(CatalogKind::from_query_value("Product"), None);
        assert_eq!(CatalogKind::from_query_value(""), None);
    }

    #[test]
    fn test_meta_label() {
        let service: Service = serde_json::from_str(
            r#"{"id":"s","title":"S","category":"design","summary":"x","description":"y",
                "image":"/s.jpg","delivery_time":"4-6 weeks"}"#,
        )
        .unwrap();
        assert_eq!(service.meta_label(), "4-6 weeks");
        assert!(service.gallery.is_empty());
        assert!(!service.featured);
        assert_eq!(Service::kind(), CatalogKind::Services);
    }
}

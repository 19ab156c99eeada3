//! Hash-based routing so the site can be served from any static host.
//!
//! URL format: `#/path?key=value` (e.g. `#/projects/explore?type=service`,
//! `#/product/bihar-eats`, `#/?section=team`).

use super::CatalogKind;
use crate::utils::dom;

/// Application routes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AppRoute {
    /// Home page: `#/`, optionally scrolled to a section (`#/?section=team`).
    Home { section: Option<String> },
    /// `#/about`
    About,
    /// `#/contact`
    Contact,
    /// `#/projects/explore?type=product|service`. `None` when `type` is
    /// missing or unrecognised.
    Explore { kind: Option<CatalogKind> },
    /// `#/projects/products` or `#/projects/services`
    Catalog(CatalogKind),
    /// `#/product/<id>` or `#/service/<id>` (also under `#/projects/`)
    Detail { kind: CatalogKind, id: String },
    /// Anything else; keeps the raw path for the not-found page.
    NotFound { path: String },
}

impl AppRoute {
    pub fn home() -> Self {
        Self::Home { section: None }
    }

    pub fn section(id: &str) -> Self {
        Self::Home {
            section: Some(id.to_string()),
        }
    }

    pub fn explore(kind: CatalogKind) -> Self {
        Self::Explore { kind: Some(kind) }
    }

    pub fn detail(kind: CatalogKind, id: &str) -> Self {
        Self::Detail {
            kind,
            id: id.to_string(),
        }
    }

    /// Parse a URL hash into a route.
    pub fn from_hash(hash: &str) -> Self {
        let trimmed = hash.trim().trim_start_matches('#').trim_start_matches('/');
        let (path, query) = match trimmed.split_once('?') {
            Some((path, query)) => (path, query),
            None => (trimmed, ""),
        };
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            [] => Self::Home {
                section: query_param(query, "section")
                    .filter(|s| !s.is_empty())
                    .map(String::from),
            },
            ["about"] => Self::About,
            ["contact"] => Self::Contact,
            ["projects", "explore"] => Self::Explore {
                kind: query_param(query, "type").and_then(CatalogKind::from_query_value),
            },
            ["projects", "products"] => Self::Catalog(CatalogKind::Products),
            ["projects", "services"] => Self::Catalog(CatalogKind::Services),
            ["product", id] | ["projects", "product", id] => {
                Self::detail(CatalogKind::Products, id)
            }
            ["service", id] | ["projects", "service", id] => {
                Self::detail(CatalogKind::Services, id)
            }
            _ => Self::NotFound {
                path: path.trim_end_matches('/').to_string(),
            },
        }
    }

    /// Convert the route to its canonical URL hash.
    pub fn to_hash(&self) -> String {
        match self {
            Self::Home { section: None } => "#/".to_string(),
            Self::Home {
                section: Some(section),
            } => format!("#/?section={}", section),
            Self::About => "#/about".to_string(),
            Self::Contact => "#/contact".to_string(),
            Self::Explore { kind: Some(kind) } => {
                format!("#/projects/explore?type={}", kind.query_value())
            }
            Self::Explore { kind: None } => "#/projects/explore".to_string(),
            Self::Catalog(kind) => format!("#/projects/{}", kind.noun()),
            Self::Detail { kind, id } => format!("#/{}/{}", kind.query_value(), id),
            Self::NotFound { path } => format!("#/{}", path),
        }
    }

    /// Route that should replace this one without a history entry.
    ///
    /// The explore page with a missing or unknown `type` falls back to the
    /// products catalog.
    pub fn redirect(&self) -> Option<Self> {
        match self {
            Self::Explore { kind: None } => Some(Self::explore(CatalogKind::Products)),
            _ => None,
        }
    }

    /// Home section to scroll into view after navigation, if any.
    pub fn scroll_target(&self) -> Option<&str> {
        match self {
            Self::Home { section } => section.as_deref(),
            _ => None,
        }
    }

    /// Identity used to decide whether a route change swaps the page.
    ///
    /// Moving between home sections keeps the same page mounted.
    pub fn page_key(&self) -> Self {
        match self {
            Self::Home { .. } => Self::home(),
            other => other.clone(),
        }
    }

    /// Get current route from browser URL.
    pub fn current() -> Self {
        Self::from_hash(&dom::get_hash())
    }

    /// Navigate to this route, adding a history entry.
    pub fn push(&self) {
        dom::set_hash(&self.to_hash());
    }

    /// Navigate to this route without adding a history entry.
    pub fn replace(&self) {
        dom::replace_hash(&self.to_hash());
    }
}

/// Look up a `key=value` pair in a query string.
fn query_param<'a>(query: &'a str, key: &str) -> Option<&'a str> {
    query
        .split('&')
        .filter_map(|pair| pair.split_once('=').or(Some((pair, ""))))
        .find(|(k, _)| *k == key)
        .map(|(_, v)| v)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_home_parsing() {
        assert_eq!(AppRoute::from_hash(""), AppRoute::home());
        assert_eq!(AppRoute::from_hash("#"), AppRoute::home());
        assert_eq!(AppRoute::from_hash("#/"), AppRoute::home());
        assert_eq!(AppRoute::from_hash("#/?section=team"), AppRoute::section("team"));
        assert_eq!(AppRoute::from_hash("#/?section="), AppRoute::home());
    }

    #[test]
    fn test_explore_parsing() {
        assert_eq!(
            AppRoute::from_hash("#/projects/explore?type=product"),
            AppRoute::explore(CatalogKind::Products)
        );
        assert_eq!(
            AppRoute::from_hash("#/projects/explore?type=service"),
            AppRoute::explore(CatalogKind::Services)
        );
        assert_eq!(
            AppRoute::from_hash("#/projects/explore?type=widget"),
            AppRoute::Explore { kind: None }
        );
        assert_eq!(
            AppRoute::from_hash("#/projects/explore"),
            AppRoute::Explore { kind: None }
        );
        assert_eq!(
            AppRoute::from_hash("#/projects/explore?foo=1&type=service"),
            AppRoute::explore(CatalogKind::Services)
        );
    }

    #[test]
    fn test_explore_redirect() {
        let invalid = AppRoute::Explore { kind: None };
        assert_eq!(
            invalid.redirect(),
            Some(AppRoute::explore(CatalogKind::Products))
        );
        assert_eq!(AppRoute::explore(CatalogKind::Services).redirect(), None);
        assert_eq!(AppRoute::home().redirect(), None);
    }

    #[test]
    fn test_detail_aliases() {
        let expected = AppRoute::detail(CatalogKind::Products, "bihar-eats");
        assert_eq!(AppRoute::from_hash("#/product/bihar-eats"), expected);
        assert_eq!(AppRoute::from_hash("#/projects/product/bihar-eats"), expected);
        assert_eq!(
            AppRoute::from_hash("#/service/brand-strategy"),
            AppRoute::detail(CatalogKind::Services, "brand-strategy")
        );
        assert_eq!(
            AppRoute::from_hash("#/projects/service/brand-strategy"),
            AppRoute::detail(CatalogKind::Services, "brand-strategy")
        );
    }

    #[test]
    fn test_static_pages_and_not_found() {
        assert_eq!(AppRoute::from_hash("#/about"), AppRoute::About);
        assert_eq!(AppRoute::from_hash("#/contact/"), AppRoute::Contact);
        assert_eq!(
            AppRoute::from_hash("#/projects/products"),
            AppRoute::Catalog(CatalogKind::Products)
        );
        assert_eq!(
            AppRoute::from_hash("#/pricing/enterprise/"),
            AppRoute::NotFound {
                path: "pricing/enterprise".to_string()
            }
        );
        assert!(matches!(
            AppRoute::from_hash("#/product"),
            AppRoute::NotFound { .. }
        ));
    }

    #[test]
    fn test_route_to_hash_round_trips() {
        let routes = [
            AppRoute::home(),
            AppRoute::section("contact"),
            AppRoute::About,
            AppRoute::Contact,
            AppRoute::explore(CatalogKind::Services),
            AppRoute::Catalog(CatalogKind::Products),
            AppRoute::detail(CatalogKind::Services, "uiux-design-kit"),
        ];
        for route in routes {
            assert_eq!(AppRoute::from_hash(&route.to_hash()), route);
        }
        assert_eq!(
            AppRoute::detail(CatalogKind::Products, "x").to_hash(),
            "#/product/x"
        );
    }

    #[test]
    fn test_page_key_ignores_section() {
        assert_eq!(AppRoute::section("team").page_key(), AppRoute::home());
        assert_eq!(AppRoute::section("team").scroll_target(), Some("team"));
        assert_eq!(AppRoute::About.scroll_target(), None);
    }
}

//! Bundled site content.
//!
//! Every fixture is compiled into the binary (see [`crate::config`]) and
//! validated once at startup.

use super::catalog::{Catalog, parse_json};
use super::error::ContentError;
use crate::config::{
    CAPABILITIES_JSON, PRODUCTS_JSON, SERVICES_JSON, TEAM_JSON, TESTIMONIALS_JSON,
};
use crate::models::{Capability, Product, Service, TeamMember, Testimonial};

/// Home page content that never changes after startup.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct HomeContent {
    pub capabilities: Vec<Capability>,
    pub team: Vec<TeamMember>,
    pub testimonials: Vec<Testimonial>,
}

pub fn bundled_products() -> Result<Catalog<Product>, ContentError> {
    Catalog::from_json("products.json", PRODUCTS_JSON)
}

pub fn bundled_services() -> Result<Catalog<Service>, ContentError> {
    Catalog::from_json("services.json", SERVICES_JSON)
}

pub fn bundled_home() -> Result<HomeContent, ContentError> {
    Ok(HomeContent {
        capabilities: parse_json("capabilities.json", CAPABILITIES_JSON)?,
        team: parse_json("team.json", TEAM_JSON)?,
        testimonials: parse_json("testimonials.json", TESTIMONIALS_JSON)?,
    })
}

/// Capabilities whose "EXECUTE" link points at a service that does not exist.
pub fn dangling_capabilities<'a>(
    home: &'a HomeContent,
    services: &Catalog<Service>,
) -> Vec<&'a Capability> {
    home.capabilities
        .iter()
        .filter(|cap| services.find(&cap.service_id).is_none())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::CategoryFilter;

    #[test]
    fn test_bundled_catalogs_load() {
        let products = bundled_products().expect("products.json is valid");
        let services = bundled_services().expect("services.json is valid");
        assert!(!products.is_empty());
        assert!(!services.is_empty());
        assert!(products.find("bihar-eats").is_some());
    }

    #[test]
    fn test_bundled_home_loads() {
        let home = bundled_home().expect("home fixtures are valid");
        assert_eq!(home.capabilities.len(), 4);
        assert_eq!(home.capabilities[0].index, "01");
        assert!(!home.team.is_empty());
        assert_eq!(home.testimonials.len(), 4);
    }

    #[test]
    fn test_capabilities_link_to_existing_services() {
        let home = bundled_home().unwrap();
        let services = bundled_services().unwrap();
        assert!(dangling_capabilities(&home, &services).is_empty());
    }

    #[test]
    fn test_every_category_filter_is_non_empty() {
        let products = bundled_products().unwrap();
        for filter in products.categories() {
            assert!(!products.filter(&filter).is_empty(), "{:?}", filter);
        }
        let all = products.filter(&CategoryFilter::All);
        assert_eq!(all.len(), products.len());
    }
}

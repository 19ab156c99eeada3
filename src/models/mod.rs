//! Data models and types for the application.
//!
//! Contains domain types for:
//! - [`Product`], [`Service`], [`CatalogItem`] - Filterable catalog entries
//! - [`Capability`], [`TeamMember`], [`Testimonial`] - Home page content
//! - [`AppRoute`] - Hash-based navigation

mod catalog;
mod content;
mod route;

pub use catalog::{CatalogItem, CatalogKind, Product, Service};
pub use content::{Capability, CapabilityIcon, TeamMember, Testimonial};
pub use route::AppRoute;

//! Catalog pages: filterable product and service grids and their detail
//! views.

mod card;
mod detail;
mod filter_bar;
mod page;

pub use detail::{ProductDetail, ServiceDetail};
pub use page::ExplorePage;

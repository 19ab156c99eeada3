//! Core logic for the studio site.
//!
//! This module provides:
//! - [`Catalog`] filtering and lookup over products and services
//! - [`content`] loading and validation of the bundled fixtures
//! - [`ContactForm`] validation and `mailto:` composition
//! - [`motion`], [`Carousel`] and [`StringCurve`] state for the interactive sections
//!
//! Nothing here touches the DOM, so all of it runs under `cargo test`.

mod carousel;
mod catalog;
mod contact;
pub mod content;
pub mod curve;
pub mod error;
mod layout;
pub mod motion;

pub use carousel::{Autoplay, Carousel, CarouselLayout};
pub use catalog::{Catalog, CategoryFilter, decode_remote, remote_url};
pub use contact::ContactForm;
pub use curve::{CurveAction, StringCurve};
pub use layout::{BentoTile, bento_tile, tile_label};

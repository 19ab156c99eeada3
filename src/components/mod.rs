//! UI components built with Leptos.
//!
//! - [`router`] - Application routing (main entry point)
//! - [`splash`] - Startup sequence shown before the site mounts
//! - [`chrome`] - Navbar, footer, cursor and shared building blocks
//! - [`home`] - Home page sections
//! - [`catalog`] - Product and service listings and detail pages
//! - [`pages`] - About, contact and not-found pages
//! - [`hooks`] - Scroll-driven motion hooks
//! - [`icons`] - Centralized icon definitions (change theme here)

pub mod catalog;
pub mod chrome;
pub mod home;
pub mod hooks;
pub mod icons;
pub mod pages;
pub mod router;
pub mod splash;

pub use chrome::Cursor;
pub use router::AppRouter;
pub use splash::Splash;

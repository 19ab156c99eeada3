//! Browser, network and formatting helpers.
//!
//! Provides:
//! - [`dom`] - Window, scrolling and hash navigation
//! - [`fetch_text_cached`] - Remote catalog download with timeout and session cache
//! - [`markdown_to_html`] - Markdown rendering with XSS sanitization
//! - [`safe_external_url`] - Outbound link allow-listing

pub mod cache;
pub mod dom;
mod fetch;
pub mod format;
mod markdown;
mod url;

pub use fetch::fetch_text_cached;
pub use markdown::markdown_to_html;
pub use url::{safe_external_url, validate_external_url};

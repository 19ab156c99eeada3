//! Custom error types for the application.
//!
//! Provides structured error handling with meaningful error messages
//! and proper error categorization for each domain:
//!
//! - [`ContentError`] - Bundled or remote content that fails to load
//! - [`FetchError`] - Network/fetch-related errors for HTTP requests
//! - [`ContactError`] - Contact form validation

use thiserror::Error;

/// Errors raised while loading and validating content fixtures.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ContentError {
    /// Fixture is not valid JSON for the expected shape.
    #[error("failed to parse {source_name}: {message}")]
    Parse {
        source_name: &'static str,
        message: String,
    },
    /// Two items share the same id.
    #[error("duplicate id '{0}'")]
    DuplicateId(String),
    /// An item has an empty id.
    #[error("item at position {0} has an empty id")]
    EmptyId(usize),
    /// An item has an empty category.
    #[error("item '{0}' has an empty category")]
    EmptyCategory(String),
}

/// Network/fetch-related errors for HTTP requests.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FetchError {
    /// Browser window not available
    #[error("Browser window not available")]
    NoWindow,
    /// Failed to create HTTP request
    #[error("Failed to create request")]
    RequestCreationFailed,
    /// Network request failed (timeout, CORS, etc.)
    #[error("Network error: {0}")]
    NetworkError(String),
    /// HTTP error response (non-2xx status)
    #[error("HTTP error: {0}")]
    HttpError(u16),
    /// Failed to read response body
    #[error("Failed to read response")]
    ResponseReadFailed,
    /// Invalid response content (not text)
    #[error("Invalid response content")]
    InvalidContent,
    /// Response body did not describe a valid catalog
    #[error(transparent)]
    Content(#[from] ContentError),
    /// Request timed out
    #[error("Request timed out")]
    Timeout,
}

/// Contact form validation errors, one per offending field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContactError {
    #[error("Please tell us your name.")]
    MissingName,
    #[error("Please enter a valid email address.")]
    InvalidEmail,
    #[error("Your message should be at least {0} characters.")]
    MessageTooShort(usize),
    #[error("Your message should be at most {0} characters.")]
    MessageTooLong(usize),
}

//! External link validation.
//!
//! Catalog and team entries carry outbound links (live sites, source
//! repositories, social profiles). Only `https` links to allow-listed
//! domains are rendered as clickable.

use thiserror::Error;

use crate::config::ALLOWED_EXTERNAL_DOMAINS;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UrlError {
    #[error("URL is empty")]
    Empty,
    #[error("URL must start with https://")]
    InvalidProtocol,
    #[error("URL has no host")]
    NoHost,
    #[error("domain '{0}' is not allowed")]
    DomainNotAllowed(String),
}

/// Validate an outbound link, returning the trimmed URL when it may be opened.
pub fn validate_external_url(url: &str) -> Result<String, UrlError> {
    let url = url.trim();
    if url.is_empty() {
        return Err(UrlError::Empty);
    }

    let host = extract_host(url)?;
    if !is_domain_allowed(&host) {
        return Err(UrlError::DomainNotAllowed(host));
    }

    Ok(url.to_string())
}

/// Convenience for views: the link if it is allowed, else `None`.
pub fn safe_external_url(url: Option<&str>) -> Option<String> {
    url.and_then(|u| validate_external_url(u).ok())
}

/// Lower-cased host without `www.` or port.
fn extract_host(url: &str) -> Result<String, UrlError> {
    let scheme_end = url.find("://").ok_or(UrlError::InvalidProtocol)?;
    let scheme = &url[..scheme_end];
    if !scheme.eq_ignore_ascii_case("https") {
        return Err(UrlError::InvalidProtocol);
    }

    let rest = &url[scheme_end + 3..];
    let authority = rest.split(['/', '?', '#']).next().unwrap_or_default();
    // Drop credentials so "https://github.com@evil.com" resolves to evil.com.
    let host_port = authority.rsplit('@').next().unwrap_or_default();
    let host = host_port.split(':').next().unwrap_or_default().to_lowercase();
    let host = host.strip_prefix("www.").unwrap_or(&host);

    if host.is_empty() {
        return Err(UrlError::NoHost);
    }
    Ok(host.to_string())
}

/// Exact or subdomain match against the allow-list.
fn is_domain_allowed(host: &str) -> bool {
    ALLOWED_EXTERNAL_DOMAINS.iter().any(|allowed| {
        host == *allowed
            || host
                .strip_suffix(*allowed)
                .is_some_and(|prefix| prefix.ends_with('.'))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allowed_links() {
        for url in [
            "https://github.com/nsapps/bihar-eats",
            "https://www.linkedin.com/in/someone",
            "https://gist.github.com/x",
            "HTTPS://nsappsinnovations.com/pos",
            "  https://dribbble.com/nsapps  ",
        ] {
            assert!(validate_external_url(url).is_ok(), "{}", url);
        }
        assert_eq!(
            validate_external_url("  https://x.com/nsapps ").unwrap(),
            "https://x.com/nsapps"
        );
    }

    #[test]
    fn test_rejected_links() {
        assert_eq!(validate_external_url(""), Err(UrlError::Empty));
        assert_eq!(
            validate_external_url("javascript:alert(1)"),
            Err(UrlError::InvalidProtocol)
        );
        assert_eq!(
            validate_external_url("http://github.com/nsapps/bihar-eats"),
            Err(UrlError::InvalidProtocol)
        );
        assert_eq!(
            validate_external_url("ftp://github.com/file"),
            Err(UrlError::InvalidProtocol)
        );
        assert_eq!(validate_external_url("https://"), Err(UrlError::NoHost));
        assert_eq!(
            validate_external_url("https://evil.com/phish"),
            Err(UrlError::DomainNotAllowed("evil.com".to_string()))
        );
    }

    #[test]
    fn test_lookalike_domains_rejected() {
        assert!(validate_external_url("https://notgithub.com").is_err());
        assert!(validate_external_url("https://github.com.evil.com").is_err());
        assert!(validate_external_url("https://github.com@evil.com/").is_err());
    }

    #[test]
    fn test_safe_external_url() {
        assert_eq!(safe_external_url(None), None);
        assert_eq!(safe_external_url(Some("https://evil.com")), None);
        assert_eq!(
            safe_external_url(Some("https://github.com/a")),
            Some("https://github.com/a".to_string())
        );
    }
}

//! Public Suffix List integration for apex resolution and host segmentation.

use psl::{List, Psl};

use crate::error::UrlError;
use crate::types::{Segments, Url};

/// Resolve the effective TLD + 1 (registrable domain) of a host.
///
/// The host is expected in lowercase ASCII form, already IDNA-transcoded
/// when applicable. Bare public suffixes ("com", "co.uk") and structurally
/// broken hosts (empty labels, leading or trailing dots) have no apex.
pub fn effective_tld_plus_one(host: &str) -> Result<String, UrlError> {
    let unresolved = || UrlError::ApexUnresolved(host.to_string());

    if host.is_empty() || host.starts_with('.') || host.ends_with('.') || host.contains("..") {
        return Err(unresolved());
    }

    let domain = List.domain(host.as_bytes()).ok_or_else(unresolved)?;
    let apex = std::str::from_utf8(domain.as_bytes()).map_err(|_| unresolved())?;

    if apex.is_empty() || !host.ends_with(apex) {
        return Err(unresolved());
    }

    Ok(apex.to_string())
}

impl Url {
    /// Registrable domain of the host; IP hosts are their own apex.
    pub fn apex(&self) -> Result<String, UrlError> {
        if self.is_ip {
            return Ok(self.host.clone());
        }
        effective_tld_plus_one(&self.host)
    }
}

/// Split a parsed host into its apex and the labels in front of it.
///
/// IP hosts and hosts without a registrable domain yield empty segments.
pub fn segmentize(url: &Url) -> Segments {
    if url.is_ip {
        return Segments::default();
    }

    let apex = match effective_tld_plus_one(&url.host) {
        Ok(apex) => apex,
        Err(err) => {
            log::debug!("segmentize: {}", err);
            return Segments::default();
        }
    };

    // The resolver guarantees the host ends with the apex
    let prefix = &url.host[..url.host.len() - apex.len()];
    let labels = prefix
        .split('.')
        .filter(|label| !label.is_empty())
        .map(|label| label.to_string())
        .collect();

    Segments { apex, labels }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn domain(host: &str) -> Url {
        Url {
            host: host.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_simple_apex() {
        assert_eq!(effective_tld_plus_one("example.com").unwrap(), "example.com");
        assert_eq!(effective_tld_plus_one("www.example.com").unwrap(), "example.com");
    }

    #[test]
    fn test_multi_label_suffix() {
        // co.uk is a multi-label public suffix
        assert_eq!(effective_tld_plus_one("example.co.uk").unwrap(), "example.co.uk");
        assert_eq!(effective_tld_plus_one("api.example.co.uk").unwrap(), "example.co.uk");
    }

    #[test]
    fn test_bare_suffix_fails() {
        assert!(effective_tld_plus_one("com").is_err());
        assert!(effective_tld_plus_one("co.uk").is_err());
    }

    #[test]
    fn test_malformed_hosts_fail() {
        assert!(effective_tld_plus_one("").is_err());
        assert!(effective_tld_plus_one(".example.com").is_err());
        assert!(effective_tld_plus_one("example.com.").is_err());
        assert!(effective_tld_plus_one("www..example.com").is_err());
    }

    #[test]
    fn test_apex_of_ip_is_host() {
        let url = Url {
            host: "10.10.10.10".to_string(),
            is_ip: true,
            ..Default::default()
        };
        assert_eq!(url.apex().unwrap(), "10.10.10.10");
    }

    #[test]
    fn test_segmentize_subdomains() {
        let segments = segmentize(&domain("v2.api.example.com"));
        assert_eq!(segments.apex, "example.com");
        assert_eq!(segments.labels, vec!["v2", "api"]);
    }

    #[test]
    fn test_segmentize_apex_only() {
        let segments = segmentize(&domain("example.co.uk"));
        assert_eq!(segments.apex, "example.co.uk");
        assert!(segments.labels.is_empty());
    }

    #[test]
    fn test_segmentize_ip_is_empty() {
        let url = Url {
            host: "acca::01f9".to_string(),
            is_ip: true,
            is_ipv6: true,
            ..Default::default()
        };
        assert_eq!(segmentize(&url), Segments::default());
    }

    #[test]
    fn test_segmentize_unresolved_is_empty() {
        assert_eq!(segmentize(&domain("com")), Segments::default());
        assert_eq!(segmentize(&Url::default()), Segments::default());
    }
}

//! Core data structures for canonical URLs and their fingerprints.

use std::fmt;
use std::str::FromStr;

use crate::url::psl::effective_tld_plus_one;

/// Canonical, structured form of a URL-like string.
///
/// A value is either fully valid (`host` non-empty) or fully reset
/// (`Url::default()`). Values produced by [`crate::Parser`] never expose
/// anything in between.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Url {
    /// Lowercase host without scheme, brackets, zone id or root dot
    pub host: String,
    /// Port digits; empty when absent or one of the defaults 80/443
    pub port: String,
    /// Directory portion of the path, without the leading slash
    pub path: String,
    /// Final path segment when it looks like a page (`.`, `-`, `_`)
    pub page: String,
    /// Host is an IPv4 or IPv6 literal
    pub is_ip: bool,
    /// Host is an IPv6 literal
    pub is_ipv6: bool,
    /// Host was converted from Unicode to an `xn--` ASCII form
    pub is_transcoded: bool,
    /// Never pass domain labels through the IDNA transcoder
    pub suppress_transcoding: bool,
}

impl Url {
    /// Check if the value holds a usable host.
    pub fn is_valid(&self) -> bool {
        !self.host.is_empty()
    }

    /// Hard reset every field, including `suppress_transcoding`.
    pub fn reset(&mut self) {
        *self = Url::default();
    }

    /// Check if a port is present.
    pub fn has_port(&self) -> bool {
        !self.port.is_empty()
    }

    /// Remove the port.
    pub fn no_port(&mut self) {
        self.port.clear();
    }

    /// Check if the host starts with a `www.` label.
    pub fn has_www(&self) -> bool {
        self.host.starts_with("www.")
    }

    /// Remove a leading `www.` label from the host.
    pub fn no_www(&mut self) {
        if let Some(rest) = self.host.strip_prefix("www.") {
            self.host = rest.to_string();
        }
    }

    /// Check if the host carries labels left of its registrable domain.
    pub fn has_label(&self) -> bool {
        if self.is_ip {
            return false;
        }
        matches!(effective_tld_plus_one(&self.host), Ok(apex) if apex.len() != self.host.len())
    }

    /// Reduce the host to its registrable domain.
    pub fn no_label(&mut self) {
        if self.is_ip {
            return;
        }
        if let Ok(apex) = effective_tld_plus_one(&self.host) {
            if apex.len() != self.host.len() {
                self.host = apex;
            }
        }
    }

    /// Check if a path (or page) is present.
    pub fn has_path(&self) -> bool {
        !self.path.is_empty()
    }

    /// Remove the path together with the page.
    pub fn no_path(&mut self) {
        self.path.clear();
        self.page.clear();
    }

    /// Check if a page is present.
    pub fn has_page(&self) -> bool {
        !self.page.is_empty()
    }

    /// Remove the page, keeping the path.
    pub fn no_page(&mut self) {
        self.page.clear();
    }
}

/// Registrable domain and the labels in front of it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Segments {
    /// Effective TLD + 1 (e.g., "example.co.uk")
    pub apex: String,
    /// Labels left of the apex, left to right (e.g., ["api", "v2"] for
    /// "api.v2.example.co.uk")
    pub labels: Vec<String>,
}

impl Segments {
    /// Check if the host had anything left of its apex.
    pub fn has_labels(&self) -> bool {
        !self.labels.is_empty()
    }
}

/// Which text derived from a [`Url`] gets hashed into a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FingerprintKind {
    /// Registrable domain (eTLD+1)
    Apex,
    /// Host verbatim
    Host,
    /// Full canonical rendering
    Full,
    /// Full rendering with the page replaced by a trailing slash
    FullNoPage,
}

impl FingerprintKind {
    /// All kinds, in key order.
    pub const ALL: [FingerprintKind; 4] = [
        FingerprintKind::Apex,
        FingerprintKind::Host,
        FingerprintKind::Full,
        FingerprintKind::FullNoPage,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FingerprintKind::Apex => "apex",
            FingerprintKind::Host => "host",
            FingerprintKind::Full => "full",
            FingerprintKind::FullNoPage => "full-no-page",
        }
    }
}

impl fmt::Display for FingerprintKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FingerprintKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "apex" => Ok(FingerprintKind::Apex),
            "host" => Ok(FingerprintKind::Host),
            "full" => Ok(FingerprintKind::Full),
            "full-no-page" => Ok(FingerprintKind::FullNoPage),
            other => Err(format!("unknown fingerprint kind: {}", other)),
        }
    }
}

/// Hash space a key is drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeySpace {
    /// 64-bit xxh64, rendered as 16 hex characters
    Fast64,
    /// 256-bit SHA-256, rendered as 64 hex characters
    Digest256,
}

/// The four fingerprint kinds computed together. `None` means the kind
/// had nothing to hash.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fingerprints<T> {
    pub apex: Option<T>,
    pub host: Option<T>,
    pub full: Option<T>,
    pub full_no_page: Option<T>,
}

impl<T> Fingerprints<T> {
    /// Look up the key for one kind.
    pub fn get(&self, kind: FingerprintKind) -> Option<&T> {
        match kind {
            FingerprintKind::Apex => self.apex.as_ref(),
            FingerprintKind::Host => self.host.as_ref(),
            FingerprintKind::Full => self.full.as_ref(),
            FingerprintKind::FullNoPage => self.full_no_page.as_ref(),
        }
    }
}

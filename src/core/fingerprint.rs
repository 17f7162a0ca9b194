//! Apex/Host/Full/FullNoPage keys derived from a canonical [`Url`].
//!
//! Every kind first derives a text from the URL, then hashes that text in
//! one of two key spaces. Nothing here mutates the URL, so computing the
//! kinds one by one or all at once gives the same keys.
//!
//! | kind | text for `www.example.com/path/logo.jpg` |
//! |------|------------------------------------------|
//! | apex | `example.com` |
//! | host | `www.example.com` |
//! | full | `www.example.com/path/logo.jpg` |
//! | full-no-page | `www.example.com/path/` |
//!
//! Without a page, full-no-page is the full text (no slash appended).

use crate::core::hasher::{digest256, hash64, hex256, hex64};
use crate::error::UrlError;
use crate::types::{FingerprintKind, Fingerprints, KeySpace, Url};

/// Derive the text a fingerprint kind hashes.
pub fn key_text(url: &Url, kind: FingerprintKind) -> Result<String, UrlError> {
    let text = match kind {
        FingerprintKind::Apex => url.apex()?,
        FingerprintKind::Host => url.host.clone(),
        FingerprintKind::Full => url.to_string(),
        FingerprintKind::FullNoPage if url.has_page() => {
            let mut dir = url.clone();
            dir.no_page();
            format!("{}/", dir)
        }
        FingerprintKind::FullNoPage => url.to_string(),
    };

    if text.is_empty() {
        return Err(match kind {
            FingerprintKind::Apex => UrlError::ApexUnresolved(url.host.clone()),
            _ => UrlError::EmptyFingerprintInput(kind),
        });
    }

    Ok(text)
}

/// 64-bit fast key.
pub fn fp_uint64(url: &Url, kind: FingerprintKind) -> Result<u64, UrlError> {
    key_text(url, kind).map(|text| hash64(text.as_bytes()))
}

/// 64-bit fast key as 16 hex characters.
pub fn fp_hex64(url: &Url, kind: FingerprintKind) -> Result<String, UrlError> {
    fp_uint64(url, kind).map(hex64)
}

/// 256-bit digest key.
pub fn fp_bytes256(url: &Url, kind: FingerprintKind) -> Result<[u8; 32], UrlError> {
    key_text(url, kind).map(|text| digest256(text.as_bytes()))
}

/// 256-bit digest key as 64 hex characters.
pub fn fp_hex256(url: &Url, kind: FingerprintKind) -> Result<String, UrlError> {
    fp_bytes256(url, kind).map(|key| hex256(&key))
}

/// Hex key of `kind` in the given key space.
///
/// ```
/// use urlfp::{fingerprint, FingerprintKind, KeySpace, Url};
///
/// let url: Url = "www.example.com/path".parse()?;
/// let apex = fingerprint(&url, FingerprintKind::Apex, KeySpace::Fast64)?;
/// assert_eq!(apex, "2883ba7dc9aa3289");
/// # Ok::<(), urlfp::UrlError>(())
/// ```
pub fn fingerprint(url: &Url, kind: FingerprintKind, space: KeySpace) -> Result<String, UrlError> {
    match space {
        KeySpace::Fast64 => fp_hex64(url, kind),
        KeySpace::Digest256 => fp_hex256(url, kind),
    }
}

fn collect<T>(url: &Url, keyer: impl Fn(&Url, FingerprintKind) -> Result<T, UrlError>) -> Fingerprints<T> {
    Fingerprints {
        apex: keyer(url, FingerprintKind::Apex).ok(),
        host: keyer(url, FingerprintKind::Host).ok(),
        full: keyer(url, FingerprintKind::Full).ok(),
        full_no_page: keyer(url, FingerprintKind::FullNoPage).ok(),
    }
}

impl Fingerprints<u64> {
    /// All four fast keys.
    pub fn uint64(url: &Url) -> Self {
        collect(url, fp_uint64)
    }
}

impl Fingerprints<[u8; 32]> {
    /// All four digest keys.
    pub fn bytes256(url: &Url) -> Self {
        collect(url, fp_bytes256)
    }
}

impl Fingerprints<String> {
    /// All four fast keys in hex.
    pub fn hex64(url: &Url) -> Self {
        collect(url, fp_hex64)
    }

    /// All four digest keys in hex.
    pub fn hex256(url: &Url) -> Self {
        collect(url, fp_hex256)
    }

    /// All four hex keys in the given key space.
    pub fn in_space(url: &Url, space: KeySpace) -> Self {
        collect(url, |url, kind| fingerprint(url, kind, space))
    }
}

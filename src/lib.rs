//! urlfp - canonical URL parsing and deterministic URL fingerprints
//!
//! This crate turns URL-like strings ("HTTP://www.Example.com:443/a/logo.jpg?x#y",
//! "10.0.0.1:8080", "[::1]:80", "bücher.example.com") into one canonical
//! structured form, and derives stable keys from that form for caches,
//! crawl frontiers and dedup stores.
//!
//! # Features
//!
//! - **Canonical**: logically equal inputs render to the same string
//! - **All-or-nothing**: a parse either yields a fully valid value or fails
//! - **Four key kinds**: apex (eTLD+1), host, full URL, full URL without its page
//! - **Two key spaces**: xxh64 (64-bit) and SHA-256 (256-bit)
//! - **Standards-aware**: IDNA UTS-46 transcoding and the Public Suffix List
//!
//! # Quick Start
//!
//! ```
//! use urlfp::{fp_hex64, segmentize, is_private, FingerprintKind, Parser};
//!
//! let parser = Parser::new();
//!
//! let url = parser.parse("https://www.example.com/path/logo.jpg?utm=x")?;
//! assert_eq!(url.to_string(), "www.example.com/path/logo.jpg");
//!
//! // Same apex key for every subdomain
//! let other = parser.parse("sub.example.com")?;
//! assert_eq!(
//!     fp_hex64(&url, FingerprintKind::Apex)?,
//!     fp_hex64(&other, FingerprintKind::Apex)?
//! );
//!
//! // Apex and labels
//! let segments = segmentize(&url);
//! assert_eq!(segments.apex, "example.com");
//! assert_eq!(segments.labels, vec!["www"]);
//!
//! // Private address ranges
//! assert!(is_private(&parser.parse("192.168.1.10:8080")?));
//! # Ok::<(), urlfp::UrlError>(())
//! ```
//!
//! # Canonical Form
//!
//! | Input | Host | Port | Path | Page |
//! |-------|------|------|------|------|
//! | `http://example.com/path/logo.jpg` | `example.com` | | `path` | `logo.jpg` |
//! | `example.com:443/` | `example.com` | | | |
//! | `10.10.10.10:454/path` | `10.10.10.10` | `454` | `path` | |
//! | `[acca::01f9]:1500/path` | `acca::01f9` | `1500` | `path` | |
//! | `âbc.com` | `xn--bc-oia.com` | | | |
//!
//! # Error Handling
//!
//! Fallible functions return `Result<T, UrlError>`:
//!
//! - `MalformedInput` when no usable host remains after stripping
//! - `ApexUnresolved` when a host has no registrable domain
//! - `EmptyFingerprintInput` when a key kind has nothing to hash

// Re-export parsing
pub use url::{Parser, Transcoder, UrlStream};
pub use url::{effective_tld_plus_one, segmentize};
pub use url::{is_private, IpInput};

// Re-export fingerprinting
pub use crate::core::{fingerprint, fp_bytes256, fp_hex256, fp_hex64, fp_uint64, key_text};
pub use crate::core::{digest256, hash64};

// Re-export public types
pub use error::UrlError;
pub use types::{FingerprintKind, Fingerprints, KeySpace, Segments, Url};

// Module declarations
pub mod config;
pub mod core;
pub mod error;
pub mod run;
pub mod types;
pub mod url;

//! URL parsing and host classification.
//!
//! This module contains the URL-side functionality:
//! - Parsing and normalization into the canonical [`Url`](crate::Url)
//! - Canonical rendering (`Display`)
//! - IDNA transcoding
//! - Public Suffix List apex resolution and segmentation
//! - Private IP range classification
//! - Line-oriented stream parsing

pub mod parser;
pub mod private;
pub mod psl;
pub mod render;
pub mod stream;
pub mod transcoder;

// Re-export main functionality
pub use parser::{Parser, DEFAULT_PORTS, MAX_HOST_LEN};
pub use private::{is_private, IpInput};
pub use psl::{effective_tld_plus_one, segmentize};
pub use stream::UrlStream;
pub use transcoder::{Transcoder, ACE_PREFIX};

//! IDNA transcoding of Unicode domains to their ASCII-compatible form.

use crate::error::UrlError;

/// ASCII-compatible encoding prefix of a punycode label.
pub const ACE_PREFIX: &str = "xn--";

/// UTS-46 transcoder configured for lookup with transitional processing.
///
/// Built once and shared read-only; `to_ascii` takes `&self`.
#[derive(Clone, Copy)]
pub struct Transcoder {
    config: idna::Config,
}

impl Transcoder {
    /// Create a transcoder mapping for lookup (STD3 rules, transitional
    /// handling of ß and ς).
    pub fn new() -> Self {
        let config = idna::Config::default()
            .use_std3_ascii_rules(true)
            .transitional_processing(true)
            .check_hyphens(false)
            .verify_dns_length(false);
        Self { config }
    }

    /// Convert a domain (`âbc.com`) to ASCII (`xn--bc-oia.com`).
    pub fn to_ascii(&self, domain: &str) -> Result<String, UrlError> {
        self.config
            .to_ascii(domain)
            .map_err(|errors| UrlError::Transcoding(format!("{:?}", errors)))
    }
}

impl Default for Transcoder {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Transcoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Transcoder")
            .field("transitional", &true)
            .field("std3_ascii_rules", &true)
            .finish()
    }
}

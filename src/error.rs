//! Error types for URL parsing and fingerprinting operations.

use thiserror::Error;

use crate::types::FingerprintKind;

/// Errors that can occur while parsing, resolving, or fingerprinting a URL.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum UrlError {
    /// The input does not yield a usable host once scheme, path, query and
    /// fragment have been stripped.
    #[error("Malformed input: {0:?}")]
    MalformedInput(String),

    /// The IDNA transcoder rejected the domain.
    #[error("IDNA transcoding failed: {0}")]
    Transcoding(String),

    /// The host has no registrable domain under the Public Suffix List.
    #[error("No registrable domain for host: {0:?}")]
    ApexUnresolved(String),

    /// The text a fingerprint kind would hash is empty.
    #[error("Nothing to fingerprint for kind {0}")]
    EmptyFingerprintInput(FingerprintKind),

    /// Reading from an input stream failed.
    #[error("I/O error: {0}")]
    Io(String),
}

impl From<std::io::Error> for UrlError {
    fn from(err: std::io::Error) -> Self {
        UrlError::Io(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            UrlError::MalformedInput("bad".to_string()).to_string(),
            "Malformed input: \"bad\""
        );

        assert_eq!(
            UrlError::EmptyFingerprintInput(FingerprintKind::FullNoPage).to_string(),
            "Nothing to fingerprint for kind full-no-page"
        );
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(
            UrlError::ApexUnresolved("com".to_string()),
            UrlError::ApexUnresolved("com".to_string())
        );
        assert_ne!(
            UrlError::ApexUnresolved("com".to_string()),
            UrlError::MalformedInput("com".to_string())
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "eof");
        let url_error: UrlError = io_error.into();

        match url_error {
            UrlError::Io(msg) => assert_eq!(msg, "eof"),
            _ => panic!("Expected Io variant"),
        }
    }
}

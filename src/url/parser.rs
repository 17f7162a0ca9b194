//! Parsing raw URL-like strings into the canonical [`Url`] form.

use std::io::BufRead;
use std::net::Ipv4Addr;
use std::str::FromStr;

use crate::error::UrlError;
use crate::types::Url;
use crate::url::stream::UrlStream;
use crate::url::transcoder::{Transcoder, ACE_PREFIX};

/// Maximum length of a DNS host name.
pub const MAX_HOST_LEN: usize = 253;

/// Ports that never distinguish two URLs.
pub const DEFAULT_PORTS: [&str; 2] = ["80", "443"];

/// Parser configuration, built once and shared read-only.
///
/// # Examples
///
/// ```
/// use urlfp::Parser;
///
/// let parser = Parser::new();
/// let url = parser.parse("http://www.example.com:443/path/logo.jpg?q=1#top")?;
/// assert_eq!(url.host, "www.example.com");
/// assert_eq!(url.port, "");
/// assert_eq!(url.path, "path");
/// assert_eq!(url.page, "logo.jpg");
/// assert_eq!(url.to_string(), "www.example.com/path/logo.jpg");
/// # Ok::<(), urlfp::UrlError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Parser {
    transcoder: Transcoder,
    suppress_transcoding: bool,
}

impl Parser {
    /// Create a parser with the default IDNA transcoder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Turn IDNA transcoding off (or back on) for every parse.
    pub fn suppress_transcoding(mut self, suppress: bool) -> Self {
        self.suppress_transcoding = suppress;
        self
    }

    pub fn is_transcoding_suppressed(&self) -> bool {
        self.suppress_transcoding
    }

    /// Parse `raw` into a fresh canonical value.
    pub fn parse(&self, raw: &str) -> Result<Url, UrlError> {
        self.parse_with(raw, self.suppress_transcoding)
    }

    /// Parse `raw`, overriding the suppress-transcoding setting for this call.
    pub fn parse_with(&self, raw: &str, suppress_transcoding: bool) -> Result<Url, UrlError> {
        match self.build(raw, suppress_transcoding) {
            Some(url) => Ok(url),
            None => {
                log::debug!("rejected input {:?}", raw);
                Err(UrlError::MalformedInput(raw.to_string()))
            }
        }
    }

    /// Parse every line of `reader`.
    pub fn stream<R: BufRead>(&self, reader: R) -> UrlStream<R> {
        UrlStream::new(reader, self.clone())
    }

    fn build(&self, raw: &str, suppress_transcoding: bool) -> Option<Url> {
        let mut rest = raw;

        // fragment and query never reach host classification
        if let Some(idx) = rest.find('#').filter(|&idx| idx > 0) {
            rest = &rest[..idx];
        }
        if let Some(idx) = rest.find('?').filter(|&idx| idx > 0) {
            rest = &rest[..idx];
        }

        // any scheme
        if let Some(idx) = rest.find("://") {
            rest = &rest[idx + 3..];
        }

        let (authority, full_path) = match rest.find('/').filter(|&idx| idx > 0) {
            Some(idx) => (&rest[..idx], &rest[idx + 1..]),
            None => (rest, ""),
        };
        let (path, page) = split_page(full_path);

        let lowered = authority.to_lowercase();
        let candidate = lowered.trim();

        let mut url = Url {
            path: path.to_string(),
            page: page.to_string(),
            suppress_transcoding,
            ..Default::default()
        };

        if candidate.matches(':').count() > 1 {
            let (host, port) = split_ipv6(candidate);
            if host.is_empty() {
                return None;
            }
            log::trace!("{:?}: IPv6 literal {:?}", raw, host);
            url.host = host.to_string();
            url.port = elide_default_port(port);
            url.is_ip = true;
            url.is_ipv6 = true;
            return Some(url);
        }

        let (host, port) = match candidate.find(':') {
            Some(idx) => (&candidate[..idx], &candidate[idx + 1..]),
            None => (candidate, ""),
        };
        url.port = elide_default_port(port);

        if host.parse::<Ipv4Addr>().is_ok() {
            log::trace!("{:?}: IPv4 literal {:?}", raw, host);
            url.host = host.to_string();
            url.is_ip = true;
            return Some(url);
        }

        // DNS root
        let name = host.strip_suffix('.').unwrap_or(host);

        if suppress_transcoding {
            url.host = name.to_string();
        } else {
            match self.transcoder.to_ascii(name) {
                Ok(ascii) => {
                    url.is_transcoded = ascii.starts_with(ACE_PREFIX) && ascii != name;
                    url.host = ascii;
                }
                Err(err) => {
                    log::debug!("{:?}: keeping untranscoded host: {}", raw, err);
                    url.host = name.to_string();
                }
            }
        }

        if url.host.is_empty()
            || url.host.len() > MAX_HOST_LEN
            || !url.host.contains(|c: char| c == '.' || c == ':')
        {
            return None;
        }

        Some(url)
    }
}

/// Split the last path segment off as a page when it looks like one.
fn split_page(full_path: &str) -> (&str, &str) {
    let (dir, last) = match full_path.rfind('/') {
        Some(idx) => (&full_path[..idx], &full_path[idx + 1..]),
        None => ("", full_path),
    };

    if last.contains(|c: char| matches!(c, '.' | '-' | '_')) {
        (dir, last)
    } else {
        (full_path, "")
    }
}

/// Split `[addr%zone]:port` into the bare address and the port.
fn split_ipv6(candidate: &str) -> (&str, &str) {
    let mut rest = candidate;
    let mut port = "";

    if let Some(idx) = rest.find("]:").filter(|&idx| idx > 0) {
        port = &rest[idx + 2..];
        rest = &rest[..idx];
    }
    if let Some(idx) = rest.find('%').filter(|&idx| idx > 0) {
        rest = &rest[..idx];
    }

    (rest.trim_matches(|c: char| c == '[' || c == ']'), port)
}

fn elide_default_port(port: &str) -> String {
    if DEFAULT_PORTS.contains(&port) {
        String::new()
    } else {
        port.to_string()
    }
}

impl Url {
    /// Parse `raw` into this slot.
    ///
    /// On success the slot is replaced by the new value; on failure it is
    /// hard reset and `false` is returned. Transcoding is suppressed when
    /// either the slot or the parser asks for it.
    pub fn parse_into(&mut self, raw: &str, parser: &Parser) -> bool {
        let suppress = self.suppress_transcoding || parser.is_transcoding_suppressed();
        match parser.parse_with(raw, suppress) {
            Ok(url) => {
                *self = url;
                true
            }
            Err(_) => {
                self.reset();
                false
            }
        }
    }
}

impl FromStr for Url {
    type Err = UrlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Parser::new().parse(s)
    }
}

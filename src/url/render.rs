//! Canonical string rendering of a parsed [`Url`].

use std::fmt;

use crate::types::Url;

/// Renders `host[:port][/path][/page]`.
///
/// IPv6 hosts are bracketed when a port follows them. No trailing slash is
/// emitted when both path and page are empty, so `example.com` and
/// `example.com/` render the same.
impl fmt::Display for Url {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.has_port() {
            if self.is_ipv6 {
                write!(f, "[{}]:{}", self.host, self.port)?;
            } else {
                write!(f, "{}:{}", self.host, self.port)?;
            }
        } else {
            f.write_str(&self.host)?;
        }

        if !self.path.is_empty() {
            write!(f, "/{}", self.path)?;
        }
        if !self.page.is_empty() {
            write!(f, "/{}", self.page)?;
        }

        Ok(())
    }
}

//! Classification of IP hosts into private/reserved ranges.

use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

use crate::types::Url;

/// The input shapes accepted by [`is_private`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IpInput<'a> {
    /// A parsed URL; only IP hosts classify
    Url(&'a Url),
    /// Textual IPv4 or IPv6 address ("10.0.0.5", "::1")
    Literal(&'a str),
    /// An address value
    Addr(IpAddr),
}

impl IpInput<'_> {
    /// Convert to an address, or `None` when the input is not an IP.
    pub fn to_ip_addr(&self) -> Option<IpAddr> {
        match self {
            IpInput::Url(url) if url.is_ip => url.host.parse().ok(),
            IpInput::Url(_) => None,
            IpInput::Literal(text) => text.parse().ok(),
            IpInput::Addr(addr) => Some(*addr),
        }
    }
}

impl<'a> From<&'a Url> for IpInput<'a> {
    fn from(url: &'a Url) -> Self {
        IpInput::Url(url)
    }
}

impl<'a> From<&'a str> for IpInput<'a> {
    fn from(text: &'a str) -> Self {
        IpInput::Literal(text)
    }
}

impl From<IpAddr> for IpInput<'_> {
    fn from(addr: IpAddr) -> Self {
        IpInput::Addr(addr)
    }
}

impl From<Ipv4Addr> for IpInput<'_> {
    fn from(addr: Ipv4Addr) -> Self {
        IpInput::Addr(IpAddr::V4(addr))
    }
}

impl From<Ipv6Addr> for IpInput<'_> {
    fn from(addr: Ipv6Addr) -> Self {
        IpInput::Addr(IpAddr::V6(addr))
    }
}

/// Report whether an IP representation is unspecified, loopback, or in an
/// RFC 1918 / RFC 4193 private range. Anything that is not an IP is not
/// private.
///
/// ```
/// use urlfp::is_private;
///
/// assert!(is_private("10.0.0.5"));
/// assert!(!is_private("8.8.8.8"));
/// ```
pub fn is_private<'a>(input: impl Into<IpInput<'a>>) -> bool {
    match input.into().to_ip_addr() {
        Some(IpAddr::V4(v4)) => is_private_v4(&v4),
        Some(IpAddr::V6(v6)) => match v6.to_ipv4_mapped() {
            Some(v4) => is_private_v4(&v4),
            None => is_private_v6(&v6),
        },
        None => false,
    }
}

fn is_private_v4(addr: &Ipv4Addr) -> bool {
    addr.is_unspecified() || addr.is_loopback() || addr.is_private()
}

fn is_private_v6(addr: &Ipv6Addr) -> bool {
    // fc00::/7 unique local
    addr.is_unspecified() || addr.is_loopback() || (addr.segments()[0] & 0xfe00) == 0xfc00
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ipv4_ranges() {
        for private in ["0.0.0.0", "127.0.0.1", "127.8.9.10", "10.0.0.5", "172.16.0.1", "172.31.255.255", "192.168.1.1"] {
            assert!(is_private(private), "{} should be private", private);
        }
        for public in ["8.8.8.8", "172.32.0.1", "192.169.0.1", "169.254.1.1", "11.0.0.1"] {
            assert!(!is_private(public), "{} should not be private", public);
        }
    }

    #[test]
    fn test_ipv6_ranges() {
        for private in ["::", "::1", "fc00::1", "fd12:3456::1", "::ffff:10.1.2.3"] {
            assert!(is_private(private), "{} should be private", private);
        }
        for public in ["2001:4860:4860::8888", "fe80::1", "acca::01f9", "::ffff:8.8.8.8"] {
            assert!(!is_private(public), "{} should not be private", public);
        }
    }

    #[test]
    fn test_non_ip_inputs() {
        assert!(!is_private("example.com"));
        assert!(!is_private(""));
        assert!(!is_private("[::1]"));

        let domain = Url {
            host: "example.com".to_string(),
            ..Default::default()
        };
        assert!(!is_private(&domain));
        assert!(!is_private(&Url::default()));
    }

    #[test]
    fn test_url_input() {
        let url = Url {
            host: "192.168.0.10".to_string(),
            is_ip: true,
            ..Default::default()
        };
        assert!(is_private(&url));

        let v6 = Url {
            host: "fd00::5".to_string(),
            is_ip: true,
            is_ipv6: true,
            ..Default::default()
        };
        assert!(is_private(&v6));
    }

    #[test]
    fn test_addr_input() {
        assert!(is_private(Ipv4Addr::LOCALHOST));
        assert!(is_private(Ipv6Addr::UNSPECIFIED));
        assert!(!is_private(IpAddr::V4(Ipv4Addr::new(1, 1, 1, 1))));
    }
}

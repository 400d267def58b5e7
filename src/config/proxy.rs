//! Proxy URL parsing.

use anyhow::{Result, bail};
use std::fmt;

const SUPPORTED_SCHEMES: &[&str] = &["http", "https", "socks5", "socks5h"];

/// A proxy split into scheme and `host[:port]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProxySpec {
    pub scheme: String,
    pub host: String,
}

impl ProxySpec {
    pub fn url(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ProxySpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}://{}", self.scheme, self.host)
    }
}

/// Parses `scheme://host[:port]`; a missing scheme means `http`.
pub fn parse_proxy(raw: &str) -> Result<ProxySpec> {
    let raw = raw.trim();
    let (scheme, host) = raw.split_once("://").unwrap_or(("http", raw));

    let scheme = scheme.to_lowercase();
    let host = host.trim_end_matches('/');

    if !SUPPORTED_SCHEMES.contains(&scheme.as_str()) {
        bail!(
            "Unsupported proxy scheme: '{scheme}' (expected one of: {})",
            SUPPORTED_SCHEMES.join(", ")
        );
    }
    if host.is_empty() || host.contains(char::is_whitespace) {
        bail!("Invalid proxy host: '{raw}'");
    }

    Ok(ProxySpec {
        scheme,
        host: host.to_string(),
    })
}

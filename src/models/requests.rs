//! Request DTOs for the lookup API
//!
//! Defines how the lookup key is pulled out of an incoming request.

use percent_encoding::percent_decode_str;

/// Query string of a lookup request (`/?ip=8.8.8.8`).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LookupQuery {
    /// Address to look up
    pub ip: Option<String>,
}

impl LookupQuery {
    /// Parses the raw query string.
    ///
    /// Only the first `ip` pair counts; repeated pairs and unrelated
    /// parameters are ignored.
    pub fn parse(query: Option<&str>) -> Self {
        let ip = query.and_then(|q| {
            form_urlencoded::parse(q.as_bytes())
                .find(|(name, _)| name == "ip")
                .map(|(_, value)| value.into_owned())
        });
        Self { ip }
    }

    /// Returns the raw lookup key for this request.
    ///
    /// The `ip` parameter wins when present and non-empty; otherwise the
    /// percent-decoded path with leading and trailing slashes trimmed is used.
    /// No address normalization happens.
    pub fn lookup_key(&self, path: &str) -> String {
        match self.ip.as_deref() {
            Some(ip) if !ip.is_empty() => ip.to_string(),
            _ => percent_decode_str(path)
                .decode_utf8_lossy()
                .trim_matches('/')
                .to_string(),
        }
    }
}

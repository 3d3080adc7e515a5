//! The split URL value and its rendering.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::error::ParseError;
use super::host::split_host;

/// Scheme/host separator consumed by parsing and re-inserted by formatting.
pub(crate) const SCHEME_SEPARATOR: &str = "://";

/// A URL split into scheme, host and path.
///
/// Fields are public and accept any string; nothing is re-validated when they
/// change. `https://foo.com/go` splits as:
///
/// - `scheme`: `"https"`
/// - `host`: `"foo.com"`
/// - `path`: `"go"` (no leading slash)
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Url {
    pub scheme: String,
    /// Authority segment; may carry a `:port` suffix.
    pub host: String,
    pub path: String,
}

impl Url {
    pub fn new(
        scheme: impl Into<String>,
        host: impl Into<String>,
        path: impl Into<String>,
    ) -> Self {
        Self {
            scheme: scheme.into(),
            host: host.into(),
            path: path.into(),
        }
    }

    /// Host without any `:port` suffix.
    pub fn hostname(&self) -> &str {
        split_host(&self.host).0
    }

    /// Text after the first `:` in the host, or `""` when there is none.
    pub fn port(&self) -> &str {
        split_host(&self.host).1
    }

    pub fn with_scheme(mut self, scheme: impl Into<String>) -> Self {
        self.scheme = scheme.into();
        self
    }

    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }

    pub fn set_scheme(&mut self, scheme: impl Into<String>) {
        self.scheme = scheme.into();
    }

    pub fn set_host(&mut self, host: impl Into<String>) {
        self.host = host.into();
    }

    pub fn set_path(&mut self, path: impl Into<String>) {
        self.path = path.into();
    }

    /// True when all three fields are empty (formats to `""`).
    pub fn is_empty(&self) -> bool {
        self.scheme.is_empty() && self.host.is_empty() && self.path.is_empty()
    }
}

/// Empty fields are skipped along with their delimiters, so `Url::default()`
/// renders as `""` rather than `"://"`.
impl fmt::Display for Url {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.scheme.is_empty() {
            write!(f, "{}{}", self.scheme, SCHEME_SEPARATOR)?;
        }
        if !self.host.is_empty() {
            f.write_str(&self.host)?;
        }
        if !self.path.is_empty() {
            write!(f, "/{}", self.path)?;
        }
        Ok(())
    }
}

impl FromStr for Url {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        super::parse(s)
    }
}

//! Flat view of a split URL for display and JSON output.

use anyhow::Result;
use serde::Serialize;

use super::Url;

/// Every stored and derived component of a [`Url`], plus its rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UrlReport<'a> {
    pub scheme: &'a str,
    pub host: &'a str,
    pub hostname: &'a str,
    pub port: &'a str,
    pub path: &'a str,
    pub formatted: String,
}

impl<'a> From<&'a Url> for UrlReport<'a> {
    fn from(url: &'a Url) -> Self {
        Self {
            scheme: &url.scheme,
            host: &url.host,
            hostname: url.hostname(),
            port: url.port(),
            path: &url.path,
            formatted: url.to_string(),
        }
    }
}

impl UrlReport<'_> {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

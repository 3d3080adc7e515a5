//! Splitting a raw string on `://` and the first following `/`.

use serde::{Deserialize, Serialize};

use super::error::ParseError;
use super::url::{Url, SCHEME_SEPARATOR};

/// Whether an empty scheme (input starting with `://`) is accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SchemePolicy {
    /// `://foo.com` is rejected as [`ParseError::MissingScheme`].
    #[default]
    Strict,
    /// `://foo.com` parses with an empty scheme.
    Lenient,
}

/// Splits `raw` into a [`Url`] under [`SchemePolicy::Strict`].
///
/// # Examples
///
/// - `parse("https://foo.com/go")` → `{ scheme: "https", host: "foo.com", path: "go" }`
/// - `parse("foo.com")` → `Err(MissingScheme)`
/// - `parse("://foo.com")` → `Err(MissingScheme)`
pub fn parse(raw: &str) -> Result<Url, ParseError> {
    parse_with(raw, SchemePolicy::Strict)
}

/// Splits `raw` into a [`Url`] under the given scheme policy.
///
/// Only the first `://` and the first `/` after it are significant; any later
/// separators stay verbatim in `path`. Host and path are never validated.
pub fn parse_with(raw: &str, policy: SchemePolicy) -> Result<Url, ParseError> {
    let Some(i) = raw.find(SCHEME_SEPARATOR) else {
        tracing::debug!(raw, "no scheme separator");
        return Err(ParseError::MissingScheme);
    };
    if i == 0 && policy == SchemePolicy::Strict {
        tracing::debug!(raw, "empty scheme rejected");
        return Err(ParseError::MissingScheme);
    }

    let scheme = &raw[..i];
    let rest = &raw[i + SCHEME_SEPARATOR.len()..];
    let (host, path) = rest.split_once('/').unwrap_or((rest, ""));

    tracing::debug!(scheme, host, path, "split url");
    Ok(Url::new(scheme, host, path))
}

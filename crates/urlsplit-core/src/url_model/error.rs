//! Error type for URL splitting.

use thiserror::Error;

/// Reason a raw string could not be split into a [`Url`](super::Url).
///
/// Parsing is all-or-nothing: on error no partial value is produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseError {
    /// No `://` separator in the input, or (under the strict policy) nothing before it.
    #[error("missing scheme")]
    MissingScheme,
}

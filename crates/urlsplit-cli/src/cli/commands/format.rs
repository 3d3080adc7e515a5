//! `urlsplit format` – build a URL string from its parts.

use anyhow::Result;
use urlsplit_core::url_model::{self, Url};

/// Prints the reconstruction; with no parts given, prints an empty line.
pub fn run_format(scheme: Option<&str>, host: Option<&str>, path: Option<&str>) -> Result<()> {
    let url = (scheme.is_some() || host.is_some() || path.is_some()).then(|| {
        Url::new(
            scheme.unwrap_or_default(),
            host.unwrap_or_default(),
            path.unwrap_or_default(),
        )
    });
    println!("{}", url_model::format(url.as_ref()));
    Ok(())
}

//! `urlsplit set-scheme <url> <scheme>` – swap the scheme of a parsed URL.

use anyhow::{Context, Result};
use urlsplit_core::url_model::{self, SchemePolicy};

pub fn run_set_scheme(raw: &str, scheme: &str, policy: SchemePolicy) -> Result<()> {
    let mut url = url_model::parse_with(raw, policy).with_context(|| format!("parsing {raw:?}"))?;
    tracing::debug!(from = %url.scheme, to = scheme, "replacing scheme");
    url.set_scheme(scheme);
    println!("{url}");
    Ok(())
}

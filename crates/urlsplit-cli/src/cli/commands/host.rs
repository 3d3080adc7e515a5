//! `urlsplit hostname <url>` and `urlsplit port <url>`.

use anyhow::{Context, Result};
use urlsplit_core::url_model::{self, SchemePolicy};

pub fn run_hostname(raw: &str, policy: SchemePolicy) -> Result<()> {
    let url = url_model::parse_with(raw, policy).with_context(|| format!("parsing {raw:?}"))?;
    println!("{}", url.hostname());
    Ok(())
}

pub fn run_port(raw: &str, policy: SchemePolicy) -> Result<()> {
    let url = url_model::parse_with(raw, policy).with_context(|| format!("parsing {raw:?}"))?;
    println!("{}", url.port());
    Ok(())
}

//! `urlsplit parse <url>` – split a URL and print its components.

use anyhow::{Context, Result};
use urlsplit_core::config::OutputFormat;
use urlsplit_core::url_model::{self, SchemePolicy, UrlReport};

pub fn run_parse(raw: &str, policy: SchemePolicy, output: OutputFormat) -> Result<()> {
    let url = url_model::parse_with(raw, policy).with_context(|| format!("parsing {raw:?}"))?;
    let report = UrlReport::from(&url);
    match output {
        OutputFormat::Json => println!("{}", report.to_json()?),
        OutputFormat::Text => {
            println!("{:<10} {}", "scheme", report.scheme);
            println!("{:<10} {}", "host", report.host);
            println!("{:<10} {}", "hostname", report.hostname);
            println!("{:<10} {}", "port", report.port);
            println!("{:<10} {}", "path", report.path);
        }
    }
    Ok(())
}

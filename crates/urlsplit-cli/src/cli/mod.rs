//! CLI for the urlsplit URL decomposer.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use urlsplit_core::config::{self, OutputFormat, UrlsplitConfig};
use urlsplit_core::url_model::SchemePolicy;

use commands::{run_bench, run_format, run_hostname, run_parse, run_port, run_set_scheme};

/// Top-level CLI for urlsplit.
#[derive(Debug, Parser)]
#[command(name = "urlsplit")]
#[command(about = "urlsplit: split scheme://host/path URLs and rebuild them", long_about = None)]
pub struct Cli {
    /// Accept URLs with an empty scheme (e.g. "://foo.com"). Overrides the config file.
    #[arg(long, global = true)]
    pub lenient: bool,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Split a URL into scheme, host, hostname, port and path.
    Parse {
        /// URL of the form scheme://host/path.
        url: String,
        /// Print the components as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Print the host of a URL without its port.
    Hostname {
        /// URL of the form scheme://host/path.
        url: String,
    },

    /// Print the port of a URL (empty if none).
    Port {
        /// URL of the form scheme://host/path.
        url: String,
    },

    /// Build a URL string from its parts. Empty parts are omitted.
    Format {
        #[arg(long)]
        scheme: Option<String>,
        #[arg(long)]
        host: Option<String>,
        #[arg(long)]
        path: Option<String>,
    },

    /// Parse a URL, replace its scheme, and print the result.
    SetScheme {
        /// URL of the form scheme://host/path.
        url: String,
        /// New scheme (not validated).
        scheme: String,
    },

    /// Benchmark URL formatting.
    Bench {
        /// URL to format (default https://foo.com/go).
        url: Option<String>,
        /// Number of iterations (default from config).
        #[arg(long, value_name = "N")]
        iterations: Option<u64>,
    },
}

/// `--lenient` wins; otherwise the configured policy applies.
fn resolve_policy(lenient: bool, cfg: &UrlsplitConfig) -> SchemePolicy {
    if lenient {
        SchemePolicy::Lenient
    } else {
        cfg.scheme_policy
    }
}

fn resolve_output(json: bool, cfg: &UrlsplitConfig) -> OutputFormat {
    if json {
        OutputFormat::Json
    } else {
        cfg.output
    }
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);
        let policy = resolve_policy(cli.lenient, &cfg);

        match cli.command {
            CliCommand::Parse { url, json } => {
                run_parse(&url, policy, resolve_output(json, &cfg))?
            }
            CliCommand::Hostname { url } => run_hostname(&url, policy)?,
            CliCommand::Port { url } => run_port(&url, policy)?,
            CliCommand::Format { scheme, host, path } => {
                run_format(scheme.as_deref(), host.as_deref(), path.as_deref())?
            }
            CliCommand::SetScheme { url, scheme } => run_set_scheme(&url, &scheme, policy)?,
            CliCommand::Bench { url, iterations } => {
                let iterations = iterations.unwrap_or(cfg.bench_iterations);
                run_bench(url.as_deref(), iterations, policy)?
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;

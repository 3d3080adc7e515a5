use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::url_model::SchemePolicy;

/// How the CLI prints a split URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Global configuration loaded from `~/.config/urlsplit/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UrlsplitConfig {
    /// Whether `://host` (empty scheme) is rejected ("strict") or accepted ("lenient").
    #[serde(default)]
    pub scheme_policy: SchemePolicy,
    /// Output for `urlsplit parse`: "text" (default) or "json".
    #[serde(default)]
    pub output: OutputFormat,
    /// Iterations for `urlsplit bench` when `--iterations` is not given.
    #[serde(default = "default_bench_iterations")]
    pub bench_iterations: u64,
}

fn default_bench_iterations() -> u64 {
    1_000_000
}

impl Default for UrlsplitConfig {
    fn default() -> Self {
        Self {
            scheme_policy: SchemePolicy::Strict,
            output: OutputFormat::Text,
            bench_iterations: default_bench_iterations(),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("urlsplit")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<UrlsplitConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = UrlsplitConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    load_from(&path)
}

/// Load configuration from an explicit path. Missing keys take their defaults.
pub fn load_from(path: &Path) -> Result<UrlsplitConfig> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    let cfg: UrlsplitConfig =
        toml::from_str(&data).with_context(|| format!("parsing config {}", path.display()))?;
    Ok(cfg)
}

// src/config/io.rs
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use super::types::Config;

/// Reads `path` if it exists. A missing file yields the defaults.
///
/// # Errors
/// Returns error if the file exists but cannot be read or parsed.
pub fn load_toml_config(path: &Path) -> Result<Config> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no config file, using defaults");
        return Ok(Config::default());
    }
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    parse_toml(&content).with_context(|| format!("invalid config in {}", path.display()))
}

/// Parses config text.
///
/// # Errors
/// Returns error on malformed TOML or unknown agent names.
pub fn parse_toml(content: &str) -> Result<Config> {
    let config: Config = toml::from_str(content)?;
    Ok(config)
}

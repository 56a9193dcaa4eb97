// src/config/mod.rs
pub mod io;
pub mod types;

pub use self::types::{Config, DisplayConfig, LoggingConfig, SessionConfig};

use anyhow::{bail, Result};
use std::path::Path;

use crate::status::DisplayOptions;

/// Looked up in the working directory.
pub const CONFIG_FILE: &str = "chatline.toml";

impl Config {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads `chatline.toml` from the working directory, if present.
    ///
    /// # Errors
    /// Returns error if the file is unreadable, malformed or invalid.
    pub fn load() -> Result<Self> {
        Self::load_from(Path::new(CONFIG_FILE))
    }

    /// # Errors
    /// Returns error if the file is unreadable, malformed or invalid.
    pub fn load_from(path: &Path) -> Result<Self> {
        let config = io::load_toml_config(path)?;
        config.validate()?;
        Ok(config)
    }

    /// # Errors
    /// Returns error if the text is malformed or invalid.
    pub fn parse(content: &str) -> Result<Self> {
        let config = io::parse_toml(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validates configuration.
    ///
    /// # Errors
    /// Returns error if `session.pace` is negative or not finite.
    pub fn validate(&self) -> Result<()> {
        let pace = self.session.pace;
        if !pace.is_finite() || pace < 0.0 {
            bail!("session.pace must be a finite, non-negative number (got {pace})");
        }
        Ok(())
    }

    #[must_use]
    pub fn display_options(&self) -> DisplayOptions {
        DisplayOptions {
            hide_cursor: self.display.hide_cursor,
        }
    }
}

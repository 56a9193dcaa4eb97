use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::agent::AgentKind;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub session: SessionConfig,
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    #[serde(default)]
    pub agent: AgentKind,
    /// Multiplier applied to simulated work delays. `0` disables waiting.
    #[serde(default = "default_pace")]
    pub pace: f64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            agent: AgentKind::default(),
            pace: default_pace(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    #[serde(default = "default_true")]
    pub color: bool,
    #[serde(default = "default_true")]
    pub hide_cursor: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self { color: true, hide_cursor: true }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_level")]
    pub level: String,
    /// Per-target overrides, e.g. `chatline_core = "debug"`.
    #[serde(default)]
    pub modules: BTreeMap<String, String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            modules: BTreeMap::new(),
        }
    }
}

impl LoggingConfig {
    /// Filter directive in `EnvFilter` syntax.
    #[must_use]
    pub fn directive(&self) -> String {
        let mut directive = self.level.clone();
        for (module, level) in &self.modules {
            directive.push_str(&format!(",{module}={level}"));
        }
        directive
    }
}

const fn default_true() -> bool { true }
const fn default_pace() -> f64 { 1.0 }
fn default_level() -> String { "warn".to_string() }

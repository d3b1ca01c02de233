//! Configuration loading for the band engine.
//!
//! Balance settings are loaded from a TOML file. Every field has a default,
//! so a partial file only overrides what it names.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::drift::DriftConfig;
use crate::modifiers::VolatilityConfig;
use crate::roller::DEFAULT_MAX_EVENTS;

/// Complete engine configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EngineConfig {
    /// General engine settings
    #[serde(default)]
    pub engine: GeneralConfig,
    /// Weekly drift tuning
    #[serde(default)]
    pub drift: DriftConfig,
    /// Tension volatility tuning
    #[serde(default)]
    pub volatility: VolatilityConfig,
}

impl EngineConfig {
    /// Loads configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Parses configuration from a TOML string.
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Serializes the configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }
}

/// General engine settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Cap on drama events fired by one trigger
    pub max_events_per_trigger: usize,
    /// Extra attempts after a version conflict before giving up
    pub write_retry_limit: u32,
    /// Fixed RNG seed; entropy-seeded when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            max_events_per_trigger: DEFAULT_MAX_EVENTS,
            write_retry_limit: 3,
            seed: None,
        }
    }
}

/// Errors that can occur while loading or writing configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

/// Generates a default configuration file content.
pub fn default_config_toml() -> String {
    r#"# Band Chemistry Engine Configuration

[engine]
max_events_per_trigger = 2
write_retry_limit = 3
# seed = 42

[drift]
conflict_decay = 3
tension_decay = 2
neutral_alignment = 50
alignment_recovery = 2
alignment_erosion = 1
chronic_conflict_threshold = 50
chronic_conflict_erosion = 2

[volatility]
tension_threshold = 50
destabilizing_adjustment = -0.10
electric_adjustment = 0.08
destabilizing_probability = 0.6
"#
    .to_string()
}

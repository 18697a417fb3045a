//! Configuration loading and management.
//!
//! The platform keeps no module-level state: whoever constructs the
//! [`ViewerRegistry`](crate::ViewerRegistry) builds a [`PlatformConfig`]
//! (directly or from a TOML file) and owns its lifecycle.

use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Platform configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PlatformConfig {
    /// Instance label used in log fields.
    pub name: String,
    /// Probe caching policy.
    pub probe: ProbeConfig,
}

impl Default for PlatformConfig {
    fn default() -> Self {
        Self {
            name: "herald".to_string(),
            probe: ProbeConfig::default(),
        }
    }
}

/// Probe caching policy.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ProbeConfig {
    /// Cache the first negative probe result permanently instead of
    /// re-checking availability on each access. Leave off when the optional
    /// provider can load after the registry starts.
    pub cache_absent: bool,
}

impl PlatformConfig {
    /// Load configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: PlatformConfig = toml::from_str(&content)?;
        Ok(config)
    }
}

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::version::comparator::Version;

/// Library configuration
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
    pub compatibility: CompatibilityConfig,
    pub checker: CheckerConfig,
}

/// How version ranges are applied to an application version
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct CompatibilityConfig {
    /// When false, every range is treated as compatible
    pub check_compatibility: bool,
    /// When true, the range's max version is enforced
    pub strict_compatibility: bool,
    /// Outside strict mode, ranges whose max version is older than this are
    /// still rejected
    pub min_compatible_app_version: Option<Version>,
}

impl Default for CompatibilityConfig {
    fn default() -> Self {
        Self {
            check_compatibility: true,
            strict_compatibility: false,
            min_compatible_app_version: None,
        }
    }
}

/// Latest-version lookup settings
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct CheckerConfig {
    /// Skip versions with a tag (`pre`, `a1`, `b2`) when looking for the latest
    pub ignore_prerelease: bool,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config: {0}")]
    Json(#[from] serde_json::Error),
}

impl Config {
    /// Parse configuration from JSON text. Missing fields use defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read configuration from a JSON file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        debug!("Loading config from {:?}", path);
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }
}

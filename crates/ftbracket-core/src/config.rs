//! # Configuration Loading
//!
//! Optional TOML overrides for the policy constants baked into the tools.
//! Every field defaults to the value earlier outputs were produced with,
//! so an absent or empty file changes nothing.

use crate::error::{BracketError, Result};
use crate::qualify::{DEFAULT_AVATAR_FIELD, DEFAULT_TRUSTED_AVATAR_PREFIX, QualifyPolicy};
use crate::serialize::DEFAULT_URI_BASE;
use serde::Deserialize;
use std::path::Path;
use tracing::info;

/// Environment variable naming a TOML config file.
pub const CONFIG_ENV_VAR: &str = "FTBRACKET_CONFIG";

pub const DEFAULT_LEADERBOARD_URL: &str = "https://friendmex.com/api/stats/leaderboard";

/// Root configuration schema.
#[derive(Debug, Deserialize, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct PipelineConfig {
    pub filter: FilterConfig,
    pub output: OutputConfig,
    pub fetch: FetchConfig,
}

/// Qualification predicate settings.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct FilterConfig {
    pub trusted_avatar_prefix: String,
    pub avatar_field: String,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            trusted_avatar_prefix: DEFAULT_TRUSTED_AVATAR_PREFIX.to_string(),
            avatar_field: DEFAULT_AVATAR_FIELD.to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct OutputConfig {
    pub uri_base: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            uri_base: DEFAULT_URI_BASE.to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct FetchConfig {
    pub leaderboard_url: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            leaderboard_url: DEFAULT_LEADERBOARD_URL.to_string(),
        }
    }
}

impl PipelineConfig {
    /// Load configuration from file path
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let config_str = std::fs::read_to_string(path).map_err(|e| {
            BracketError::Config(format!("could not read config file {}: {}", path.display(), e))
        })?;

        Self::from_toml_str(&config_str)
            .map_err(|e| BracketError::Config(format!("{}: {}", path.display(), e)))
    }

    pub fn from_toml_str(s: &str) -> Result<Self> {
        toml::from_str(s).map_err(|e| BracketError::Config(format!("failed to parse config: {}", e)))
    }

    /// Load from `$FTBRACKET_CONFIG` if set, defaults otherwise.
    pub fn from_env() -> Result<Self> {
        match std::env::var_os(CONFIG_ENV_VAR) {
            Some(path) => {
                info!("Loading configuration from: {:?}", path);
                Self::load(path)
            }
            None => Ok(Self::default()),
        }
    }

    /// Trusted-avatar policy built from the `[filter]` section.
    pub fn trusted_policy(&self) -> QualifyPolicy {
        QualifyPolicy {
            prefix: self.filter.trusted_avatar_prefix.clone(),
            avatar_field: self.filter.avatar_field.clone(),
        }
    }
}

pub mod composer_config;
pub mod draft_config;
pub mod observability_config;
pub mod submission_config;

use std::path::Path;

use serde::{Deserialize, Serialize};

pub use composer_config::ComposerConfig;
pub use draft_config::DraftConfig;
pub use observability_config::ObservabilityConfig;
pub use submission_config::SubmissionConfig;

use crate::constants::CONFIG_FILE_NAME;
use crate::errors::ConfigError;

/// Top-level configuration aggregating all subsystem configs.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct LeaseConfig {
    pub composer: ComposerConfig,
    pub submission: SubmissionConfig,
    pub drafts: DraftConfig,
    pub observability: ObservabilityConfig,
}

impl LeaseConfig {
    /// Load config from a TOML string, falling back to defaults for missing fields.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<inline>".to_string(),
            message: e.to_string(),
        })
    }

    /// Load config from a TOML file on disk.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        toml::from_str(&raw).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Load `lease.toml` from `dir` if present, otherwise return defaults.
    pub fn discover(dir: &Path) -> Result<Self, ConfigError> {
        let candidate = dir.join(CONFIG_FILE_NAME);
        if candidate.is_file() {
            tracing::debug!(path = %candidate.display(), "loading lease config");
            Self::from_file(&candidate)
        } else {
            Ok(Self::default())
        }
    }

    /// Serialize back to TOML, e.g. for `lease.toml` scaffolding.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::SerializeError {
            message: e.to_string(),
        })
    }
}

//! Logging configuration.

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_LOG_FILTER;

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// `EnvFilter` directive used when `LEASE_LOG` is unset. Default: "info".
    pub log_filter: Option<String>,
    /// Include module targets in log lines. Default: false.
    pub with_target: Option<bool>,
}

impl ObservabilityConfig {
    pub fn effective_log_filter(&self) -> &str {
        self.log_filter.as_deref().unwrap_or(DEFAULT_LOG_FILTER)
    }

    pub fn effective_with_target(&self) -> bool {
        self.with_target.unwrap_or(false)
    }
}

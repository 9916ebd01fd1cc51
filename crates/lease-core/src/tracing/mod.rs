//! Tracing subscriber setup shared by binaries and tests.

use std::sync::Once;

use tracing_subscriber::EnvFilter;

use crate::config::ObservabilityConfig;
use crate::constants::LOG_ENV_VAR;

static INIT: Once = Once::new();

/// Install a global fmt subscriber. `LEASE_LOG` wins over the configured filter.
/// Safe to call more than once; only the first call has an effect.
pub fn init_tracing(config: &ObservabilityConfig) {
    INIT.call_once(|| {
        let filter = build_filter(config);
        let result = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(config.effective_with_target())
            .try_init();
        if let Err(e) = result {
            // Another subscriber was installed by the host process.
            eprintln!("lease tracing not installed: {e}");
        }
    });
}

/// Build the filter from `LEASE_LOG`, falling back to the configured directive.
pub fn build_filter(config: &ObservabilityConfig) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV_VAR)
        .or_else(|_| EnvFilter::try_new(config.effective_log_filter()))
        .unwrap_or_else(|_| EnvFilter::new(crate::constants::DEFAULT_LOG_FILTER))
}

//! Workspace-wide constants.

/// Environment variable consulted for the tracing filter.
pub const LOG_ENV_VAR: &str = "LEASE_LOG";

/// Filter used when `LEASE_LOG` is unset and no config override is given.
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Base URL of the document backend, matching the development server.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:4000/api";

/// Config file looked up by [`crate::LeaseConfig::discover`].
pub const CONFIG_FILE_NAME: &str = "lease.toml";

/// Default directory for persisted form drafts.
pub const DEFAULT_DRAFT_DIR: &str = ".lease/drafts";

/// Extension used for draft files.
pub const DRAFT_EXTENSION: &str = "json";

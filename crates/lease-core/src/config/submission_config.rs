//! Document submission configuration.

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_API_BASE_URL;

/// Configuration for building document-generation requests.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct SubmissionConfig {
    /// Backend base URL. Default: "http://localhost:4000/api".
    pub api_base_url: Option<String>,
    /// Output format when the caller does not pick one: "pdf" or "docx". Default: "pdf".
    pub default_format: Option<String>,
    /// Refuse to build a request while any clause is incomplete. Default: true.
    pub require_complete: Option<bool>,
}

impl SubmissionConfig {
    /// Returns the base URL without a trailing slash.
    pub fn effective_api_base_url(&self) -> String {
        self.api_base_url
            .as_deref()
            .unwrap_or(DEFAULT_API_BASE_URL)
            .trim_end_matches('/')
            .to_string()
    }

    /// Returns the default format tag, defaulting to "pdf".
    pub fn effective_default_format(&self) -> &str {
        self.default_format.as_deref().unwrap_or("pdf")
    }

    /// Returns whether incomplete clauses block submission, defaulting to true.
    pub fn effective_require_complete(&self) -> bool {
        self.require_complete.unwrap_or(true)
    }
}

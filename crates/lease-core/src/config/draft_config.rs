//! Draft persistence configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_DRAFT_DIR, DRAFT_EXTENSION};
use crate::types::form_type::FormType;

/// Where form drafts are written between sessions.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct DraftConfig {
    /// Draft directory. Default: ".lease/drafts".
    pub directory: Option<String>,
    /// Pretty-print draft JSON. Default: true.
    pub pretty: Option<bool>,
}

impl DraftConfig {
    pub fn effective_directory(&self) -> PathBuf {
        PathBuf::from(self.directory.as_deref().unwrap_or(DEFAULT_DRAFT_DIR))
    }

    pub fn effective_pretty(&self) -> bool {
        self.pretty.unwrap_or(true)
    }

    /// Draft path for a form type, e.g. `.lease/drafts/deed.json`.
    pub fn draft_path(&self, form_type: FormType) -> PathBuf {
        self.effective_directory()
            .join(format!("{}.{}", form_type.as_str(), DRAFT_EXTENSION))
    }
}

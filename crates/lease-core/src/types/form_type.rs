//! Lease form kinds served by the document backend.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// Which lease form a session belongs to. The tag is used verbatim in
/// backend endpoints and download file names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormType {
    Deed,
    Residential,
    Flat,
    Commercial,
    Land,
    Industrial,
}

impl FormType {
    pub const ALL: [FormType; 6] = [
        Self::Deed,
        Self::Residential,
        Self::Flat,
        Self::Commercial,
        Self::Land,
        Self::Industrial,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Deed => "deed",
            Self::Residential => "residential",
            Self::Flat => "flat",
            Self::Commercial => "commercial",
            Self::Land => "land",
            Self::Industrial => "industrial",
        }
    }
}

impl fmt::Display for FormType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FormType {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| ConfigError::UnknownFormType {
                value: s.to_string(),
            })
    }
}

//! Core configuration types
//!
//! This module defines the data structures that represent a project's `.config.json`.

use serde::{Deserialize, Serialize};

/// Project config: default locale plus the frozen and required locale lists
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ProjectConfig {
    /// Locale used when no other locale is selected
    pub default: String,

    /// Locales that are locked against modification
    #[serde(default)]
    pub frozen: Vec<String>,

    /// Locales that must provide every lang item
    #[serde(default)]
    pub require: Vec<String>,
}

impl ProjectConfig {
    /// Create a config with the given default locale and empty lists
    pub fn new(default: impl Into<String>) -> Self {
        ProjectConfig {
            default: default.into(),
            frozen: Vec::new(),
            require: Vec::new(),
        }
    }

    /// Serialize with 2-space indentation, keeping non-ASCII characters as-is
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

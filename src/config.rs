//! Service configuration
//!
//! Page sizes and the listen port, loadable from a YAML file. Every field
//! has a default so an absent or partial file still yields a working config.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Service configuration loaded from YAML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Questions per listing/search page
    #[serde(default = "default_questions_per_page")]
    pub questions_per_page: usize,

    /// Categories per listing page
    #[serde(default = "default_categories_per_page")]
    pub categories_per_page: usize,

    /// Port the HTTP server listens on
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_questions_per_page() -> usize {
    10
}

fn default_categories_per_page() -> usize {
    5
}

fn default_port() -> u16 {
    8080
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            questions_per_page: default_questions_per_page(),
            categories_per_page: default_categories_per_page(),
            port: default_port(),
        }
    }
}

impl ServiceConfig {
    /// Load configuration from a YAML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            Error::config(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        Self::from_str_yaml(&content)
    }

    /// Load configuration from a YAML string
    pub fn from_str_yaml(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)
            .map_err(|e| Error::config(format!("Failed to parse config YAML: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.questions_per_page == 0 {
            return Err(Error::config("questions_per_page must be positive"));
        }
        if self.categories_per_page == 0 {
            return Err(Error::config("categories_per_page must be positive"));
        }
        Ok(())
    }
}

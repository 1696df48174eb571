//! Rendering configuration from blockdoc.toml

use crate::html_renderer::RenderOptions;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Default `<title>` for standalone pages
pub const DEFAULT_PAGE_TITLE: &str = "Document";

/// Top-level configuration from blockdoc.toml
///
/// Every section and key is optional; missing values use the defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlockdocConfig {
    /// HTML rendering options
    pub render: RenderOptions,

    /// Standalone page settings
    pub page: PageConfig,
}

/// Settings for `--standalone` page output
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    /// Page title
    pub title: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_PAGE_TITLE.to_string(),
        }
    }
}

impl BlockdocConfig {
    /// Load configuration from a blockdoc.toml file
    ///
    /// # Parameters
    /// * `path` - Path to the configuration file
    ///
    /// # Returns
    /// * `Ok(BlockdocConfig)` - Successfully loaded configuration
    /// * `Err(ConfigError)` - Error reading or parsing the configuration file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(&path)?;
        Self::from_toml(&content)
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Save configuration to a blockdoc.toml file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;

        fs::write(&path, content)?;

        Ok(())
    }
}

/// Errors that can occur when loading or saving configuration
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)]
pub enum ConfigError {
    /// IO error when reading or writing file
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Error parsing TOML
    #[error("TOML parse error: {0}")]
    ParseError(#[from] toml::de::Error),

    /// Error serializing to TOML
    #[error("TOML serialize error: {0}")]
    SerializeError(#[from] toml::ser::Error),
}

#[cfg(feature = "cli")]
pub mod cli;

#[cfg(feature = "cli")]
pub use cli::{CliConfig, Command};

use crate::core::ConfigProvider;
use crate::domain::model::DEFAULT_CONTAINER_ID;
use crate::utils::error::Result;
use crate::utils::helpers::API_URL;
use crate::utils::validation::{validate_element_id, validate_url, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Shell settings, loadable from a TOML file.
///
/// ```toml
/// container_id = "app"
/// api_url = "https://api.example.com"
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShellConfig {
    pub container_id: String,
    pub api_url: String,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            container_id: DEFAULT_CONTAINER_ID.to_string(),
            api_url: API_URL.to_string(),
        }
    }
}

impl ShellConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: ShellConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        tracing::debug!("Loaded config from {}", path.as_ref().display());
        Self::from_toml_str(&content)
    }
}

impl Validate for ShellConfig {
    fn validate(&self) -> Result<()> {
        validate_element_id("container_id", &self.container_id)?;
        validate_url("api_url", &self.api_url)?;
        Ok(())
    }
}

impl ConfigProvider for ShellConfig {
    fn container_id(&self) -> &str {
        &self.container_id
    }

    fn api_url(&self) -> &str {
        &self.api_url
    }
}

//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the service
//! configuration from YAML.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::{LoggingSection, ServerSection, ServiceConfig};

/// Name of the configuration file inside the configuration directory.
pub const SERVICE_CONFIG_FILE: &str = "service.yaml";

/// Loads and provides access to the service configuration.
///
/// # Directory Structure
///
/// ```text
/// config/
/// └── service.yaml   # Listener and logging settings
/// ```
///
/// # Example
///
/// ```no_run
/// use tip_pool_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config")?;
/// println!("Listening on {}", loader.config().bind_address());
/// # Ok::<(), tip_pool_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: ServiceConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - `service.yaml` is missing (`ConfigNotFound`)
    /// - `service.yaml` contains invalid YAML (`ConfigParseError`)
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let config_path = path.as_ref().join(SERVICE_CONFIG_FILE);
        let path_str = config_path.display().to_string();

        let content = fs::read_to_string(&config_path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        Self::parse(&content, path_str)
    }

    /// Parses configuration from an inline YAML document.
    ///
    /// # Example
    ///
    /// ```
    /// use tip_pool_engine::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::from_yaml_str("server:\n  port: 9000\n").unwrap();
    /// assert_eq!(loader.server().port, 9000);
    /// assert_eq!(loader.server().host, "127.0.0.1");
    /// ```
    pub fn from_yaml_str(content: &str) -> EngineResult<Self> {
        Self::parse(content, "<inline>".to_string())
    }

    fn parse(content: &str, path: String) -> EngineResult<Self> {
        let config: ServiceConfig =
            serde_yaml::from_str(content).map_err(|e| EngineError::ConfigParseError {
                path,
                message: e.to_string(),
            })?;

        Ok(Self { config })
    }

    /// Returns the underlying service configuration.
    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    /// Returns the listener settings.
    pub fn server(&self) -> &ServerSection {
        &self.config.server
    }

    /// Returns the logging settings.
    pub fn logging(&self) -> &LoggingSection {
        &self.config.logging
    }
}

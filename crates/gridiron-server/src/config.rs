//! Configuration loading and typed config structures for the dashboard.
//!
//! The canonical configuration lives in `gridiron-config.yaml` at the
//! project root. This module defines strongly-typed structs that mirror
//! the YAML structure and provides a loader that reads the file. Every
//! field has a default, so a missing file or sparse document still yields
//! a runnable configuration.

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Top-level dashboard configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct DashboardConfig {
    /// HTTP listener settings.
    #[serde(default)]
    pub server: ServerSection,

    /// Catalog data settings.
    #[serde(default)]
    pub data: DataSection,

    /// Static dashboard asset settings.
    #[serde(default)]
    pub assets: AssetsSection,
}

impl DashboardConfig {
    /// Load configuration from a YAML file at the given path.
    ///
    /// The environment variable `GRIDIRON_PORT` overrides `server.port`
    /// when set to a valid port number.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, or
    /// [`ConfigError::Yaml`] if the content is not valid YAML.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let mut config: Self = serde_yml::from_str(&contents)?;
        config.server.apply_env_overrides();
        Ok(config)
    }

    /// Parse configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        let mut config: Self = serde_yml::from_str(yaml)?;
        config.server.apply_env_overrides();
        Ok(config)
    }
}

/// HTTP listener settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ServerSection {
    /// Host address to bind to.
    #[serde(default = "default_host")]
    pub host: String,

    /// TCP port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
}

impl ServerSection {
    /// Apply environment overrides for deployment without editing YAML.
    fn apply_env_overrides(&mut self) {
        if let Ok(port) = std::env::var("GRIDIRON_PORT")
            && let Ok(port) = port.parse::<u16>()
        {
            self.port = port;
        }
    }
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// Catalog data settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DataSection {
    /// Path to the JSON teams fixture.
    #[serde(default = "default_teams_file")]
    pub teams_file: PathBuf,
}

impl Default for DataSection {
    fn default() -> Self {
        Self {
            teams_file: default_teams_file(),
        }
    }
}

/// Static dashboard asset settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AssetsSection {
    /// Directory the static-file fallback serves from.
    #[serde(default = "default_static_dir")]
    pub static_dir: PathBuf,
}

impl Default for AssetsSection {
    fn default() -> Self {
        Self {
            static_dir: default_static_dir(),
        }
    }
}

fn default_host() -> String {
    String::from("0.0.0.0")
}

const fn default_port() -> u16 {
    8000
}

fn default_teams_file() -> PathBuf {
    PathBuf::from("data/teams.json")
}

fn default_static_dir() -> PathBuf {
    PathBuf::from(".")
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn empty_document_yields_defaults() {
        let config = DashboardConfig::parse("{}").unwrap();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8000);
        assert_eq!(config.data.teams_file, PathBuf::from("data/teams.json"));
    }

    #[test]
    fn sparse_sections_fill_in_field_defaults() {
        let config = DashboardConfig::parse("server:\n  port: 9090\n").unwrap();
        assert_eq!(config.server.port, 9090);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.assets.static_dir, PathBuf::from("."));
    }

    #[test]
    fn malformed_yaml_is_an_error() {
        assert!(DashboardConfig::parse("server: [not a map").is_err());
    }
}

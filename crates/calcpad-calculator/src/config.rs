//! TOML configuration shared by the calcpad frontends.
//!
//! ```toml
//! [operations]
//! enabled = ["add", "subtract", "multiply"]
//!
//! [web]
//! host = "127.0.0.1"
//! port = 3000
//! ```
//!
//! Every table and field is optional.

use crate::calculator::DEFAULT_ENABLED;
use calcpad_types::OperationSet;
use serde::Deserialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

/// Environment variable naming the configuration file.
pub const CONFIG_PATH_ENV: &str = "CALCPAD_CONFIG_PATH";

/// File looked up in the working directory when the variable is unset.
pub const DEFAULT_CONFIG_FILE: &str = "calcpad.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read configuration file '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid configuration in '{origin}': {source}")]
    Parse {
        origin: String,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct OperationsConfig {
    #[serde(default = "default_enabled")]
    pub enabled: OperationSet,
}

impl Default for OperationsConfig {
    fn default() -> Self {
        Self { enabled: default_enabled() }
    }
}

#[derive(Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct WebConfig {
    pub host: Option<String>,
    pub port: Option<u16>,
}

#[derive(Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct CalcpadConfig {
    #[serde(default)]
    pub operations: OperationsConfig,
    #[serde(default)]
    pub web: WebConfig,
}

impl CalcpadConfig {
    /// Loads `$CALCPAD_CONFIG_PATH`, falling back to `calcpad.toml`.
    ///
    /// A missing file yields the defaults; a malformed one is an error.
    pub fn load() -> Result<Self, ConfigError> {
        let path = std::env::var(CONFIG_PATH_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_FILE));
        Self::load_or_default(&path)
    }

    /// Like [`CalcpadConfig::from_path`], but a missing file yields the defaults.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        match Self::from_path(path) {
            Err(ConfigError::Read { source, .. }) if source.kind() == io::ErrorKind::NotFound => {
                warn!(
                    "Configuration file '{}' not found. Using default configuration.",
                    path.display()
                );
                Ok(Self::default())
            }
            other => other,
        }
    }

    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)
            .map_err(|source| ConfigError::Read { path: path.to_path_buf(), source })?;
        let config = Self::from_toml_str(&text, &path.display().to_string())?;
        info!(path = %path.display(), enabled = ?config.operations.enabled, "configuration loaded");
        Ok(config)
    }

    /// Parses configuration text; `origin` only labels errors.
    pub fn from_toml_str(text: &str, origin: &str) -> Result<Self, ConfigError> {
        toml::from_str(text)
            .map_err(|source| ConfigError::Parse { origin: origin.to_string(), source })
    }
}

fn default_enabled() -> OperationSet {
    DEFAULT_ENABLED
}

//! TOML configuration for markpaste.
//!
//! A config file holds optional overrides of the engine's
//! [`ConversionOptions`] defaults; missing fields keep their defaults and a
//! missing file is not an error.

use markpaste_engine::ConversionOptions;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub preserve_jira_links: Option<bool>,
    pub sanitize_html: Option<bool>,
    pub max_nesting_level: Option<usize>,
    pub max_input_length: Option<usize>,
}

impl Config {
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        Self::load_from_path(Self::config_path())
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/markpaste");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    /// Applies the overrides present in this config onto `opts`.
    pub fn apply(&self, opts: &mut ConversionOptions) {
        if let Some(v) = self.preserve_jira_links {
            opts.preserve_jira_links = v;
        }
        if let Some(v) = self.sanitize_html {
            opts.sanitize_html = v;
        }
        if let Some(v) = self.max_nesting_level {
            opts.max_nesting_level = v;
        }
        if let Some(v) = self.max_input_length {
            opts.max_input_length = v;
        }
    }

    /// Convenience: engine defaults with this config's overrides applied.
    pub fn to_options(&self) -> ConversionOptions {
        let mut opts = ConversionOptions::default();
        self.apply(&mut opts);
        opts
    }
}

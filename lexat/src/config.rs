//! Configuration module for the lexat CLI.
//!
//! This module handles loading, saving, and resolving settings from
//! `lexat.toml`.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use dirs::{config_dir, home_dir};
use lexa_grammar::Language;
use serde::{Deserialize, Serialize};

use crate::error::{LexatError, Result};

/// Default configuration file name.
pub const CONFIG_FILE_NAME: &str = "lexat.toml";

/// How command output is rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable lines.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
}

/// Application configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Global verbose setting.
    #[serde(default)]
    pub verbose: bool,

    /// Language used when a file's extension is not recognised.
    #[serde(default)]
    pub default_language: Option<String>,

    /// Extra file extensions, mapped to language names.
    #[serde(default)]
    pub extensions: BTreeMap<String, String>,

    /// Output settings.
    #[serde(default)]
    pub output: OutputConfig,
}

/// Output-specific configuration options.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct OutputConfig {
    /// Default output format.
    #[serde(default)]
    pub format: OutputFormat,

    /// Whether `tokens` lists plain-text tokens too.
    #[serde(default)]
    pub show_plain: bool,
}

impl Config {
    /// Load configuration from the default location.
    ///
    /// Searches for configuration in the following order:
    /// 1. Current directory
    /// 2. `~/.config/lexat/`
    /// 3. System configuration directory
    ///
    /// Returns the default configuration if no config file is found.
    pub fn load() -> Result<Self> {
        match Self::find_config_file() {
            Some(path) => Self::load_from_path(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific path.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(LexatError::Config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| LexatError::Config(format!("Failed to parse configuration: {}", e)))?;

        tracing::debug!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    /// Save configuration to a specific path.
    #[cfg(test)]
    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| LexatError::Config(format!("Failed to serialize configuration: {}", e)))?;

        std::fs::write(path, content)?;
        Ok(())
    }

    /// The configured default language, if any.
    pub fn default_language(&self) -> Result<Option<Language>> {
        self.default_language
            .as_deref()
            .map(|name| name.parse::<Language>().map_err(LexatError::from))
            .transpose()
    }

    /// The language an extra extension is mapped to, if any.
    pub fn language_for_extension(&self, ext: &str) -> Result<Option<Language>> {
        let ext = ext.strip_prefix('.').unwrap_or(ext);
        self.extensions
            .iter()
            .find(|(key, _)| key.trim_start_matches('.').eq_ignore_ascii_case(ext))
            .map(|(_, name)| name.parse::<Language>().map_err(LexatError::from))
            .transpose()
    }

    fn check_current_dir_config() -> Option<PathBuf> {
        let path = PathBuf::from(CONFIG_FILE_NAME);
        path.exists().then_some(path)
    }

    fn check_home_config() -> Option<PathBuf> {
        home_dir()
            .map(|dir| dir.join(".config").join("lexat").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    fn check_system_config() -> Option<PathBuf> {
        config_dir()
            .map(|dir| dir.join("lexat").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    fn find_config_file() -> Option<PathBuf> {
        Self::check_current_dir_config()
            .or_else(Self::check_home_config)
            .or_else(Self::check_system_config)
    }
}

//! Configuration management for the application.
//!
//! This module handles loading, validating, and saving application configuration
//! in TOML format with platform-specific directory resolution.

use crate::constants::{CONFIG_DIR_ENV, DEFAULT_COLUMNS, QWERTY_ALPHABET};
use crate::generator::{CommandGenerator, StrategyKind};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Default strategy settings used by `gridnav generate`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Strategy to use when none is given on the command line
    pub strategy: StrategyKind,
    /// Grid width for strategies with a configurable column count
    pub columns: usize,
    /// Ordered alphabet for the `general` strategy
    pub alphabet: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            strategy: StrategyKind::default(),
            columns: DEFAULT_COLUMNS,
            alphabet: QWERTY_ALPHABET.to_string(),
        }
    }
}

impl GeneratorConfig {
    /// Builds the configured generator.
    ///
    /// Call [`Config::validate`] first; a zero column count panics here.
    pub fn build(&self) -> Box<dyn CommandGenerator> {
        self.strategy.build(self.columns, &self.alphabet)
    }
}

/// Application configuration.
///
/// # File Location
///
/// - Linux: `~/.config/GridNav/config.toml`
/// - macOS: `~/Library/Application Support/GridNav/config.toml`
/// - Windows: `%APPDATA%\GridNav\config.toml`
///
/// The directory can be overridden with the `GRIDNAV_CONFIG_DIR` environment variable.
///
/// # Validation
///
/// - `columns` must be at least 1 for strategies that use it
/// - `alphabet` must not be empty for the `general` strategy
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    /// Command generation defaults
    #[serde(default)]
    pub generator: GeneratorConfig,
}

impl Config {
    /// Creates a new Config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the config directory path, honouring `GRIDNAV_CONFIG_DIR`.
    pub fn config_dir() -> Result<PathBuf> {
        if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV).filter(|dir| !dir.is_empty()) {
            return Ok(PathBuf::from(dir));
        }

        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join("GridNav");

        Ok(config_dir)
    }

    /// Gets the full path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Checks if the config file exists on disk.
    #[must_use]
    pub fn exists() -> bool {
        Self::config_file_path()
            .map(|path| path.exists())
            .unwrap_or(false)
    }

    /// Loads configuration from the config file.
    ///
    /// If the file doesn't exist, returns default configuration.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    /// Loads and validates configuration from `path`, or defaults if it doesn't exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        let config = Self::read_from(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads the config file without validating it.
    ///
    /// Used when command-line overrides are applied before validation.
    pub fn read() -> Result<Self> {
        Self::read_from(&Self::config_file_path()?)
    }

    /// Parses configuration from `path` without validating it, or defaults if it doesn't exist.
    pub fn read_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::new());
        }

        let content = fs::read_to_string(path)
            .context(format!("Failed to read config file: {}", path.display()))?;

        toml::from_str(&content)
            .context(format!("Failed to parse config file: {}", path.display()))
    }

    /// Saves configuration to the config file.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_file_path()?)
    }

    /// Saves configuration to `path`, creating parent directories as needed.
    ///
    /// The file is written next to `path` first and renamed into place.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        self.validate()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).context(format!(
                "Failed to create config directory: {}",
                parent.display()
            ))?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;

        let temp_path = path.with_extension("toml.tmp");
        fs::write(&temp_path, content).context(format!(
            "Failed to write temp config file: {}",
            temp_path.display()
        ))?;

        fs::rename(&temp_path, path).context(format!(
            "Failed to rename temp config file to: {}",
            path.display()
        ))?;

        Ok(())
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        let generator = &self.generator;

        if generator.strategy.uses_columns() && generator.columns == 0 {
            anyhow::bail!(
                "Invalid column count 0 for strategy '{}': must be at least 1",
                generator.strategy
            );
        }

        if generator.strategy.uses_alphabet() && generator.alphabet.is_empty() {
            anyhow::bail!(
                "Strategy '{}' requires a non-empty alphabet",
                generator.strategy
            );
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::new();
        assert_eq!(config.generator.strategy, StrategyKind::Qwerty);
        assert_eq!(config.generator.columns, 10);
        assert_eq!(config.generator.alphabet, QWERTY_ALPHABET);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_missing_file_returns_default() {
        let temp_dir = TempDir::new().unwrap();
        let config = Config::load_from(&temp_dir.path().join("config.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("config.toml");

        let mut config = Config::new();
        config.generator.strategy = StrategyKind::General;
        config.generator.columns = 6;
        config.generator.alphabet = "ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789".to_string();
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "[generator]\nstrategy = \"six-by-five\"\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.generator.strategy, StrategyKind::SixByFive);
        assert_eq!(config.generator.columns, DEFAULT_COLUMNS);
        assert_eq!(config.generator.alphabet, QWERTY_ALPHABET);
    }

    #[test]
    fn test_empty_file_is_default() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "").unwrap();

        assert_eq!(Config::load_from(&path).unwrap(), Config::default());
    }

    #[test]
    fn test_invalid_toml_reports_path() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "[generator\nstrategy = ").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }

    #[test]
    fn test_unknown_strategy_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "[generator]\nstrategy = \"hexagonal\"\n").unwrap();

        assert!(Config::load_from(&path).is_err());
    }

    #[test]
    fn test_validate_zero_columns() {
        let mut config = Config::new();
        config.generator.columns = 0;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("column count 0"));

        // Fixed layouts ignore the column count
        config.generator.strategy = StrategyKind::TwoByThirteen;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_general_requires_alphabet() {
        let mut config = Config::new();
        config.generator.strategy = StrategyKind::General;
        config.generator.alphabet.clear();
        assert!(config.validate().is_err());

        config.generator.strategy = StrategyKind::Qwerty;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_save_rejects_invalid() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        let mut config = Config::new();
        config.generator.columns = 0;

        assert!(config.save_to(&path).is_err());
        assert!(!path.exists());
    }

    #[test]
    fn test_read_from_skips_validation() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "[generator]\ncolumns = 0\n").unwrap();

        let config = Config::read_from(&path).unwrap();
        assert_eq!(config.generator.columns, 0);
        assert!(Config::load_from(&path).is_err());
    }

    #[test]
    fn test_save_replaces_file_and_leaves_no_temp() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "stale").unwrap();

        let mut config = Config::new();
        config.generator.strategy = StrategyKind::Linear;
        config.save_to(&path).unwrap();

        assert!(!path.with_extension("toml.tmp").exists());
        assert_eq!(Config::load_from(&path).unwrap(), config);
    }

    #[test]
    fn test_build_uses_settings() {
        let mut config = Config::new();
        config.generator.columns = 3;
        let generator = config.generator.build();
        assert_eq!(generator.name(), "qwerty");
        assert_eq!(generator.columns(), 3);
    }
}

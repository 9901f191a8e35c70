//! Configuration file parser for ~/.config/pedia/config.toml.
//!
//! The config file is optional; a missing file yields `Config::default()`.
//! Unknown keys are silently ignored by serde, so an older binary tolerates
//! a newer file.
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid TOML in config file: {0}")]
    Parse(#[from] toml::de::Error),

    /// Config file exceeds maximum allowed size.
    #[error("Config file too large: {0}")]
    TooLarge(String),
}

// ============================================================================
// Configuration Struct
// ============================================================================

/// Top-level application configuration.
///
/// All fields use `#[serde(default)]` so any subset of keys can be
/// specified; missing keys fall back to `Default::default()`.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Override for the database file location. Defaults to
    /// `pedia.db` inside the config directory.
    pub database_path: Option<PathBuf>,

    /// The fixed category list. Lives in config rather than code so a
    /// future move to user-defined categories only touches this file;
    /// today's UI treats it as read-only.
    pub categories: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_path: None,
            categories: [
                "Sains",
                "Sejarah",
                "Teknologi",
                "Seni",
                "Geografi",
                "Biologi",
                "Pengetahuan Umum",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
        }
    }
}

impl Config {
    /// Maximum config file size (1 MB).
    const MAX_FILE_SIZE: u64 = 1_048_576;

    /// Load configuration from a TOML file.
    ///
    /// - Missing file → `Ok(Config::default())`
    /// - Empty file → `Ok(Config::default())`
    /// - Invalid TOML → `Err(ConfigError::Parse)` with line number info
    /// - Unknown keys → silently accepted (serde default behavior)
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        // Check file size before reading to avoid slurping a corrupted or
        // runaway file into memory.
        match std::fs::metadata(path) {
            Ok(meta) if meta.len() > Self::MAX_FILE_SIZE => {
                return Err(ConfigError::TooLarge(format!(
                    "Config file is {} bytes (max {} bytes)",
                    meta.len(),
                    Self::MAX_FILE_SIZE
                )));
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "No config file found, using defaults");
                return Ok(Self::default());
            }
            Err(e) => return Err(ConfigError::Io(e)),
            Ok(_) => {}
        }

        let raw = std::fs::read_to_string(path)?;
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = toml::from_str(&raw)?;
        tracing::debug!(path = %path.display(), categories = config.categories.len(), "Loaded config");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_carries_seven_categories() {
        let config = Config::default();
        assert_eq!(config.categories.len(), 7);
        assert!(config.categories.iter().any(|c| c == "Pengetahuan Umum"));
        assert!(config.database_path.is_none());
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let config = Config::load(Path::new("/nonexistent/pedia/config.toml")).unwrap();
        assert_eq!(config.categories, Config::default().categories);
    }

    #[test]
    fn test_load_overrides_and_unknown_keys() {
        let dir = std::env::temp_dir().join("pedia_config_test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.toml");
        std::fs::write(
            &path,
            r#"
database_path = "/tmp/custom.db"
categories = ["Alpha", "Beta"]
some_future_key = true
"#,
        )
        .unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.database_path, Some(PathBuf::from("/tmp/custom.db")));
        assert_eq!(config.categories, vec!["Alpha", "Beta"]);

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        let dir = std::env::temp_dir().join("pedia_config_invalid_test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.toml");
        std::fs::write(&path, "categories = [unterminated").unwrap();

        let result = Config::load(&path);
        assert!(matches!(result, Err(ConfigError::Parse(_))));

        std::fs::remove_dir_all(&dir).ok();
    }
}

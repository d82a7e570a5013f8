//! Configuration handling for the TUI

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Default quiet period for registration fields
pub const DEFAULT_FIELD_DEBOUNCE_MS: u64 = 100;

/// Default quiet period for the currency converter
pub const DEFAULT_CONVERTER_DEBOUNCE_MS: u64 = 300;

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    /// Quiet period before a registration field is validated
    pub field_debounce_ms: Option<u64>,
    /// Quiet period before the currency conversion is refreshed
    pub converter_debounce_ms: Option<u64>,
}

impl AppConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "formwatch", "formwatch")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from the user config dir, or defaults if absent
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from `path`; a missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        let config: AppConfig = serde_json::from_str(&content)
            .with_context(|| format!("parsing {}", path.display()))?;
        tracing::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Save configuration to the user config dir
    #[allow(dead_code)]
    pub fn save(&self) -> Result<()> {
        if let Some(path) = Self::config_path() {
            self.save_to(&path)?;
        }
        Ok(())
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    pub fn field_debounce(&self) -> Duration {
        Duration::from_millis(self.field_debounce_ms.unwrap_or(DEFAULT_FIELD_DEBOUNCE_MS))
    }

    pub fn converter_debounce(&self) -> Duration {
        Duration::from_millis(
            self.converter_debounce_ms
                .unwrap_or(DEFAULT_CONVERTER_DEBOUNCE_MS),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert!(config.field_debounce_ms.is_none());
        assert!(config.converter_debounce_ms.is_none());
        assert_eq!(config.field_debounce(), Duration::from_millis(100));
        assert_eq!(config.converter_debounce(), Duration::from_millis(300));
    }

    #[test]
    fn test_overrides() {
        let config = AppConfig {
            field_debounce_ms: Some(250),
            converter_debounce_ms: Some(0),
        };
        assert_eq!(config.field_debounce(), Duration::from_millis(250));
        assert_eq!(config.converter_debounce(), Duration::ZERO);
    }

    #[test]
    fn test_serialization() {
        let config = AppConfig {
            field_debounce_ms: Some(150),
            converter_debounce_ms: Some(500),
        };

        let json = serde_json::to_string(&config).unwrap();
        let parsed: AppConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.field_debounce_ms, Some(150));
        assert_eq!(parsed.converter_debounce_ms, Some(500));
    }

    #[test]
    fn test_deserialize_from_empty_json() {
        let parsed: AppConfig = serde_json::from_str("{}").unwrap();
        assert!(parsed.field_debounce_ms.is_none());
        assert!(parsed.converter_debounce_ms.is_none());
    }

    #[test]
    fn test_deserialize_with_extra_fields() {
        // Should ignore unknown fields
        let json = r#"{"field_debounce_ms": 80, "unknown_field": "value"}"#;
        let parsed: AppConfig = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.field_debounce_ms, Some(80));
    }

    #[test]
    fn test_load_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::load_from(&dir.path().join("config.json")).unwrap();
        assert!(config.field_debounce_ms.is_none());
        assert!(config.converter_debounce_ms.is_none());
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");
        let config = AppConfig {
            field_debounce_ms: Some(120),
            converter_debounce_ms: None,
        };
        config.save_to(&path).unwrap();

        let loaded = AppConfig::load_from(&path).unwrap();
        assert_eq!(loaded.field_debounce_ms, Some(120));
        assert_eq!(loaded.converter_debounce(), Duration::from_millis(300));
    }

    #[test]
    fn test_load_malformed_file_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{ not json").unwrap();

        let err = AppConfig::load_from(&path).unwrap_err();
        assert!(format!("{err:#}").contains("parsing"));
    }
}

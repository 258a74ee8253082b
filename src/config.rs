//! PantryVoice Configuration
//!
//! Persisted JSON settings. A missing file is created with defaults on first
//! load; a corrupt one is moved aside and defaults are used instead.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::core::corrector::DEFAULT_FUZZY_THRESHOLD;
use crate::core::segmenter::DEFAULT_MAX_WINDOW;
use crate::error::{PantryError, PantryResult};
use crate::pipeline::PipelineSettings;

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    // Matching
    pub fuzzy_threshold: f64,
    pub max_window_words: usize,
    pub lexicon_packs: Vec<PathBuf>,

    // Lists
    pub store_path: PathBuf,
    pub default_user: String,

    // Meta
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            fuzzy_threshold: DEFAULT_FUZZY_THRESHOLD,
            max_window_words: DEFAULT_MAX_WINDOW,
            lexicon_packs: Vec::new(),
            store_path: dirs::data_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("pantryvoice")
                .join("lists.json"),
            default_user: "default".to_string(),
            log_level: "INFO".to_string(),
        }
    }
}

impl Config {
    /// Load config from the default location, or defaults
    pub fn load() -> Result<Self> {
        Self::load_from(&config_path())
    }

    /// Load config from `path`; a corrupt file is moved aside and defaults are used
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            let config = Self::default();
            // First run: write defaults so there is a file to edit
            if let Err(e) = config.save_to(path) {
                tracing::warn!("⚠️ Could not write default config: {}", e);
            }
            return Ok(config);
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        match serde_json::from_str::<Config>(&content) {
            Ok(config) => Ok(config),
            Err(e) => {
                // Graceful degradation: log warning and use defaults
                tracing::warn!("⚠️ Config file corrupted or invalid, using defaults: {}", e);
                let backup_path = path.with_extension("json.corrupt");
                let _ = std::fs::rename(path, &backup_path);
                Ok(Self::default())
            }
        }
    }

    /// Save config to `path`, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config {}", path.display()))?;
        Ok(())
    }

    /// Settings for the text pipeline, checked for sane values
    pub fn pipeline_settings(&self) -> PantryResult<PipelineSettings> {
        if !(0.0..1.0).contains(&self.fuzzy_threshold) {
            return Err(PantryError::Config(format!(
                "fuzzy_threshold must be in [0, 1), got {}",
                self.fuzzy_threshold
            )));
        }
        if self.max_window_words == 0 {
            return Err(PantryError::Config(
                "max_window_words must be at least 1".to_string(),
            ));
        }
        Ok(PipelineSettings {
            fuzzy_threshold: self.fuzzy_threshold,
            max_window_words: self.max_window_words,
        })
    }
}

pub fn config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("pantryvoice")
        .join("config.json")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.fuzzy_threshold, 0.85);
        assert_eq!(config.max_window_words, 3);
        assert!(config.lexicon_packs.is_empty());
        assert_eq!(config.log_level, "INFO");
        assert!(config.store_path.ends_with("pantryvoice/lists.json"));
    }

    #[test]
    fn test_config_roundtrip_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");

        let mut config = Config::default();
        config.default_user = "sam".to_string();
        config.fuzzy_threshold = 0.9;
        config.save_to(&path).unwrap();

        let restored = Config::load_from(&path).unwrap();
        assert_eq!(restored.default_user, "sam");
        assert_eq!(restored.fuzzy_threshold, 0.9);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{ "default_user": "kim" }"#).unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.default_user, "kim");
        assert_eq!(config.max_window_words, 3);
    }

    #[test]
    fn test_config_corrupt_json_handling() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{ not valid json").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.log_level, "INFO");
        assert!(!path.exists());
        assert!(dir.path().join("config.json.corrupt").exists());
    }

    #[test]
    fn test_missing_file_gives_defaults_and_is_written() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pantryvoice").join("config.json");

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.default_user, "default");
        assert!(path.exists());

        let reloaded = Config::load_from(&path).unwrap();
        assert_eq!(reloaded.max_window_words, config.max_window_words);
    }

    #[test]
    fn test_pipeline_settings_validation() {
        let mut config = Config::default();
        assert_eq!(
            config.pipeline_settings().unwrap(),
            PipelineSettings::default()
        );

        config.max_window_words = 0;
        assert!(config.pipeline_settings().is_err());

        config.max_window_words = 2;
        config.fuzzy_threshold = 1.5;
        assert!(config.pipeline_settings().is_err());
    }
}

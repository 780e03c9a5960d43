// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, stored in a
//! `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[api]` - Origin of the remote image service and request timeout
//! - `[gallery]` - Refresh display policy and thumbnail cache size
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Set `BANT_MEDIA_CONFIG_DIR` environment variable (or `--config-dir`)
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use bant_media::app::config;
//!
//! let (mut config, _warning) = config::load();
//! config.apply_api_url_override(Some("https://media.example.com".to_string()));
//! assert_eq!(config.api.base_url, "https://media.example.com");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::{Error, Result};
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(
        default = "default_theme_mode",
        deserialize_with = "deserialize_theme_mode"
    )]
    pub theme_mode: ThemeMode,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            language: None,
            theme_mode: default_theme_mode(),
        }
    }
}

/// Remote image service settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiConfig {
    /// Origin of the image service, without the endpoint path.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request timeout in seconds. Unset means requests may wait forever.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: None,
        }
    }
}

/// Gallery display settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GalleryConfig {
    /// Keep the current grid visible while a refresh is in flight instead of
    /// replacing it with the loading indicator.
    #[serde(default)]
    pub keep_content_while_refreshing: bool,

    /// Number of decoded thumbnails kept in memory.
    #[serde(
        default = "default_thumbnail_cache_capacity",
        skip_serializing_if = "Option::is_none"
    )]
    pub thumbnail_cache_capacity: Option<usize>,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            keep_content_while_refreshing: false,
            thumbnail_cache_capacity: default_thumbnail_cache_capacity(),
        }
    }
}

impl GalleryConfig {
    /// Thumbnail cache capacity clamped to the supported range.
    #[must_use]
    pub fn thumbnail_capacity(&self) -> usize {
        self.thumbnail_cache_capacity
            .unwrap_or(DEFAULT_THUMBNAIL_CACHE_CAPACITY)
            .clamp(MIN_THUMBNAIL_CACHE_CAPACITY, MAX_THUMBNAIL_CACHE_CAPACITY)
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub gallery: GalleryConfig,
}

impl Config {
    /// Applies the service origin override from the CLI or the
    /// `BANT_MEDIA_API_URL` environment variable. The CLI value wins.
    pub fn apply_api_url_override(&mut self, cli_url: Option<String>) {
        let env_url = std::env::var(ENV_API_URL)
            .ok()
            .filter(|value| !value.is_empty());

        if let Some(url) = cli_url.or(env_url) {
            self.api.base_url = url;
        }
    }
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_theme_mode() -> ThemeMode {
    ThemeMode::System
}

fn default_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

fn default_thumbnail_cache_capacity() -> Option<usize> {
    Some(DEFAULT_THUMBNAIL_CACHE_CAPACITY)
}

fn deserialize_theme_mode<'de, D>(deserializer: D) -> std::result::Result<ThemeMode, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    match raw.to_lowercase().as_str() {
        "light" => Ok(ThemeMode::Light),
        "dark" => Ok(ThemeMode::Dark),
        "system" => Ok(ThemeMode::System),
        other => Err(D::Error::custom(format!("invalid theme_mode: {}", other))),
    }
}

// =============================================================================
// Config Path Resolution
// =============================================================================

/// Returns the config file path with an optional override.
pub fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with the i18n key of a warning explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    tracing::warn!(path = %path.display(), error = %err, "ignoring unreadable settings");
                    return (
                        Config::default(),
                        Some("notification-config-load-error".to_string()),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

/// Writes a default `settings.toml` when none exists yet, so the available
/// options are discoverable. Existing files are never touched.
pub fn write_defaults_if_missing(base_dir: Option<PathBuf>) -> Result<bool> {
    match get_config_path_with_override(base_dir) {
        Some(path) if !path.exists() => {
            save_to_path(&Config::default(), &path)?;
            Ok(true)
        }
        _ => Ok(false),
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            general: GeneralConfig {
                language: Some("fr".to_string()),
                theme_mode: ThemeMode::Light,
            },
            api: ApiConfig {
                base_url: "https://media.example.com".to_string(),
                timeout_secs: Some(15),
            },
            gallery: GalleryConfig {
                keep_content_while_refreshing: true,
                thumbnail_cache_capacity: Some(64),
            },
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        match load_from_path(&config_path) {
            Err(Error::Config(_)) => {}
            other => panic!("expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn default_config_has_expected_values() {
        let config = Config::default();
        assert_eq!(config.general.theme_mode, ThemeMode::System);
        assert_eq!(config.api.base_url, DEFAULT_API_BASE_URL);
        assert_eq!(config.api.timeout_secs, None);
        assert!(!config.gallery.keep_content_while_refreshing);
        assert_eq!(
            config.gallery.thumbnail_capacity(),
            DEFAULT_THUMBNAIL_CACHE_CAPACITY
        );
    }

    #[test]
    fn partial_file_falls_back_to_section_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(
            &config_path,
            "[api]\nbase_url = \"http://localhost:8080\"\n",
        )
        .expect("write config");

        let loaded = load_from_path(&config_path).expect("should load partial config");
        assert_eq!(loaded.api.base_url, "http://localhost:8080");
        assert_eq!(loaded.api.timeout_secs, None);
        assert_eq!(loaded.general, GeneralConfig::default());
        assert_eq!(loaded.gallery, GalleryConfig::default());
    }

    #[test]
    fn theme_mode_is_case_insensitive() {
        let loaded: Config =
            toml::from_str("[general]\ntheme_mode = \"DARK\"\n").expect("valid config");
        assert_eq!(loaded.general.theme_mode, ThemeMode::Dark);

        let invalid = toml::from_str::<Config>("[general]\ntheme_mode = \"sepia\"\n");
        assert!(invalid.is_err());
    }

    #[test]
    fn thumbnail_capacity_is_clamped() {
        let tiny = GalleryConfig {
            thumbnail_cache_capacity: Some(1),
            ..GalleryConfig::default()
        };
        assert_eq!(tiny.thumbnail_capacity(), MIN_THUMBNAIL_CACHE_CAPACITY);

        let huge = GalleryConfig {
            thumbnail_cache_capacity: Some(1_000_000),
            ..GalleryConfig::default()
        };
        assert_eq!(huge.thumbnail_capacity(), MAX_THUMBNAIL_CACHE_CAPACITY);
    }

    #[test]
    fn cli_api_url_overrides_config() {
        let mut config = Config::default();
        config.apply_api_url_override(Some("http://127.0.0.1:3000".to_string()));
        assert_eq!(config.api.base_url, "http://127.0.0.1:3000");
    }

    #[test]
    fn saved_settings_load_back_from_override_directory() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let base_dir = temp_dir.path().to_path_buf();

        let config = Config {
            api: ApiConfig {
                base_url: "https://other.example.com".to_string(),
                timeout_secs: Some(30),
            },
            ..Config::default()
        };

        save_to_path(&config, &base_dir.join("settings.toml")).expect("save should succeed");
        assert!(base_dir.join("settings.toml").exists());

        let (loaded, warning) = load_with_override(Some(base_dir));
        assert!(warning.is_none(), "load should succeed without warning");
        assert_eq!(loaded.api.base_url, "https://other.example.com");
        assert_eq!(loaded.api.timeout_secs, Some(30));
    }

    #[test]
    fn load_with_override_from_empty_directory_returns_default() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert!(warning.is_none(), "should not warn for missing file");
        assert_eq!(config, Config::default());
    }

    #[test]
    fn load_with_override_from_corrupted_file_returns_default_with_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let base_dir = temp_dir.path().to_path_buf();
        fs::write(base_dir.join("settings.toml"), "not = valid = toml").expect("write file");

        let (config, warning) = load_with_override(Some(base_dir));
        assert_eq!(warning.as_deref(), Some("notification-config-load-error"));
        assert_eq!(config, Config::default());
    }

    #[test]
    fn write_defaults_only_when_missing() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let base_dir = temp_dir.path().join("fresh");

        assert!(write_defaults_if_missing(Some(base_dir.clone())).expect("first write"));
        let path = base_dir.join("settings.toml");
        let content = fs::read_to_string(&path).expect("read config");
        assert!(content.contains("[general]"));
        assert!(content.contains("[api]"));
        assert!(content.contains("[gallery]"));

        fs::write(&path, "[api]\nbase_url = \"http://keep.me\"\n").expect("overwrite");
        assert!(!write_defaults_if_missing(Some(base_dir)).expect("second write"));
        let loaded = load_from_path(&path).expect("load");
        assert_eq!(loaded.api.base_url, "http://keep.me");
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Loading and saving user preferences in `settings.toml`.
//!
//! # Configuration Sections
//!
//! - `[general]` - Theme mode
//! - `[alerts]` - Top alert transition length and top inset
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. `--config-dir` or `TOP_ALERTER_CONFIG_DIR` (see [`paths`](crate::app::paths))
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use top_alerter::app::config;
//! use top_alerter::ui::theming::ThemeMode;
//!
//! let (mut config, _warning) = config::load();
//! config.general.theme_mode = ThemeMode::Dark;
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::{Error, Result};
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
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
            theme_mode: default_theme_mode(),
        }
    }
}

/// Top alert presentation settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AlertsConfig {
    /// Enter/exit transition length in milliseconds.
    #[serde(
        default = "default_transition_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub transition_ms: Option<u64>,

    /// Extra top padding in logical pixels.
    #[serde(default = "default_top_inset", skip_serializing_if = "Option::is_none")]
    pub top_inset: Option<f32>,
}

impl Default for AlertsConfig {
    fn default() -> Self {
        Self {
            transition_ms: default_transition_ms(),
            top_inset: default_top_inset(),
        }
    }
}

impl AlertsConfig {
    /// Transition length, clamped to the supported range.
    #[must_use]
    pub fn transition(&self) -> Duration {
        let raw = self.transition_ms.unwrap_or(DEFAULT_TRANSITION_MS);
        let clamped = raw.clamp(MIN_TRANSITION_MS, MAX_TRANSITION_MS);
        if clamped != raw {
            log::warn!("alerts.transition_ms = {raw} out of range, using {clamped}");
        }
        Duration::from_millis(clamped)
    }

    /// Top inset, clamped to the supported range.
    #[must_use]
    pub fn top_inset(&self) -> f32 {
        let raw = self.top_inset.unwrap_or(DEFAULT_TOP_INSET);
        if !raw.is_finite() {
            log::warn!("alerts.top_inset is not a finite number, using default");
            return DEFAULT_TOP_INSET;
        }
        let clamped = raw.clamp(MIN_TOP_INSET, MAX_TOP_INSET);
        if (clamped - raw).abs() > f32::EPSILON {
            log::warn!("alerts.top_inset = {raw} out of range, using {clamped}");
        }
        clamped
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    /// General application settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Top alert settings.
    #[serde(default)]
    pub alerts: AlertsConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_theme_mode() -> ThemeMode {
    ThemeMode::System
}

fn default_transition_ms() -> Option<u64> {
    Some(DEFAULT_TRANSITION_MS)
}

fn default_top_inset() -> Option<f32> {
    Some(DEFAULT_TOP_INSET)
}

fn deserialize_theme_mode<'de, D>(deserializer: D) -> std::result::Result<ThemeMode, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    ThemeMode::parse(&raw).ok_or_else(|| D::Error::custom(format!("invalid theme_mode: {raw}")))
}

// =============================================================================
// Config Path Resolution
// =============================================================================

fn config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::config_dir_with_override(base_dir).map(|mut path| {
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
/// the default config with a warning explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    return (
                        Config::default(),
                        Some(format!(
                            "could not read {}: {err}; using defaults",
                            path.display()
                        )),
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

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    match config_path_with_override(base_dir) {
        Some(path) => save_to_path(config, &path),
        None => Err(Error::Config("no config directory available".to_string())),
    }
}

/// Saves configuration to a specific path, creating parent directories.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
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
                theme_mode: ThemeMode::Light,
            },
            alerts: AlertsConfig {
                transition_ms: Some(450),
                top_inset: Some(24.0),
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
    fn load_with_override_falls_back_on_corrupt_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "[general]\ntheme_mode = 3")
            .expect("failed to write config");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_some());
    }

    #[test]
    fn missing_file_yields_defaults_without_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().join("absent")));
        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn missing_sections_use_defaults() {
        let config: Config = toml::from_str("[general]\ntheme_mode = \"dark\"\n")
            .expect("failed to parse config");
        assert_eq!(config.general.theme_mode, ThemeMode::Dark);
        assert_eq!(config.alerts, AlertsConfig::default());
    }

    #[test]
    fn theme_mode_is_case_insensitive() {
        let config: Config =
            toml::from_str("[general]\ntheme_mode = \"LIGHT\"\n").expect("failed to parse");
        assert_eq!(config.general.theme_mode, ThemeMode::Light);
    }

    #[test]
    fn invalid_theme_mode_is_rejected() {
        assert!(toml::from_str::<Config>("[general]\ntheme_mode = \"sepia\"\n").is_err());
    }

    #[test]
    fn save_with_override_creates_settings_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let base = temp_dir.path().join("deep").join("path");

        save_with_override(&Config::default(), Some(base.clone())).expect("failed to save");
        assert!(base.join(CONFIG_FILE).exists());
    }

    #[test]
    fn transition_is_clamped() {
        let alerts = AlertsConfig {
            transition_ms: Some(10_000),
            top_inset: None,
        };
        assert_eq!(alerts.transition(), Duration::from_millis(MAX_TRANSITION_MS));

        let alerts = AlertsConfig {
            transition_ms: None,
            top_inset: None,
        };
        assert_eq!(
            alerts.transition(),
            Duration::from_millis(DEFAULT_TRANSITION_MS)
        );
    }

    #[test]
    fn top_inset_is_clamped() {
        let alerts = AlertsConfig {
            transition_ms: None,
            top_inset: Some(-5.0),
        };
        assert_eq!(alerts.top_inset(), MIN_TOP_INSET);

        let alerts = AlertsConfig {
            transition_ms: None,
            top_inset: Some(500.0),
        };
        assert_eq!(alerts.top_inset(), MAX_TOP_INSET);

        let alerts = AlertsConfig {
            transition_ms: None,
            top_inset: Some(f32::NAN),
        };
        assert_eq!(alerts.top_inset(), DEFAULT_TOP_INSET);
    }
}

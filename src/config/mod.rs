// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[service]` - Resize Service endpoint and request timeout
//! - `[form]` - Initial target dimensions and minimum loading time
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. `--config-dir` CLI argument or `ICED_RESIZE_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use iced_resize::config::{self, Config};
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! // Modify a setting
//! config.general.language = Some("en-US".to_string());
//!
//! // Save the modified configuration
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
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// UI language code (e.g., "es", "en-US").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(default)]
    pub theme_mode: ThemeMode,
}

/// Resize Service connection settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ServiceConfig {
    /// URL receiving the multipart upload.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,

    /// Whole-request timeout in seconds.
    #[serde(
        default = "default_timeout_secs",
        skip_serializing_if = "Option::is_none"
    )]
    pub timeout_secs: Option<u64>,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Resize form settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FormConfig {
    /// Initial content of the width field.
    #[serde(default = "default_width", skip_serializing_if = "Option::is_none")]
    pub default_width: Option<u32>,

    /// Initial content of the height field.
    #[serde(default = "default_height", skip_serializing_if = "Option::is_none")]
    pub default_height: Option<u32>,

    /// Minimum time the loading indicator is shown after a fast response.
    #[serde(
        default = "default_min_loading_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub min_loading_ms: Option<u64>,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            default_width: default_width(),
            default_height: default_height(),
            min_loading_ms: default_min_loading_ms(),
        }
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
    pub service: ServiceConfig,

    #[serde(default)]
    pub form: FormConfig,
}

impl Config {
    /// Endpoint to post resize requests to.
    pub fn endpoint(&self) -> &str {
        self.service
            .endpoint
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or(DEFAULT_ENDPOINT)
    }

    /// Request timeout, clamped to the supported range.
    pub fn request_timeout(&self) -> Duration {
        let secs = self
            .service
            .timeout_secs
            .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS)
            .clamp(MIN_REQUEST_TIMEOUT_SECS, MAX_REQUEST_TIMEOUT_SECS);
        Duration::from_secs(secs)
    }

    /// Minimum visible loading duration, clamped to the supported range.
    pub fn min_loading(&self) -> Duration {
        let ms = self
            .form
            .min_loading_ms
            .unwrap_or(DEFAULT_MIN_LOADING_MS)
            .min(MAX_MIN_LOADING_MS);
        Duration::from_millis(ms)
    }

    /// Initial `(width, height)` for the form, clamped to the accepted bounds.
    pub fn initial_dimensions(&self) -> (u32, u32) {
        let clamp = |value: u32| value.clamp(MIN_TARGET_DIMENSION, MAX_TARGET_DIMENSION);
        (
            clamp(self.form.default_width.unwrap_or(DEFAULT_TARGET_WIDTH)),
            clamp(self.form.default_height.unwrap_or(DEFAULT_TARGET_HEIGHT)),
        )
    }
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_timeout_secs() -> Option<u64> {
    Some(DEFAULT_REQUEST_TIMEOUT_SECS)
}

fn default_width() -> Option<u32> {
    Some(DEFAULT_TARGET_WIDTH)
}

fn default_height() -> Option<u32> {
    Some(DEFAULT_TARGET_HEIGHT)
}

fn default_min_loading_ms() -> Option<u64> {
    Some(DEFAULT_MIN_LOADING_MS)
}

// =============================================================================
// Config Path Resolution
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
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
                    tracing::warn!(path = %path.display(), error = %err, "falling back to default config");
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

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================

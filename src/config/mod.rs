// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, read from a
//! `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[document]` - Where page assets live and how many pages there are
//! - `[navigation]` - Gesture tuning
//!
//! The viewer never writes this file; it only reads user preferences.
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()` with an explicit path
//! 2. Set `PAGE_LENS_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use page_lens::config;
//!
//! let (config, _warning) = config::load();
//! println!("{} pages", config.document.total_pages());
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::Result;
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "ar").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(default, deserialize_with = "deserialize_theme_mode")]
    pub theme_mode: ThemeMode,
}

/// Document location and shape.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DocumentConfig {
    /// Directory path or `http(s)://` base URL holding one SVG per page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asset_root: Option<String>,

    /// Number of pages in the document.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_pages: Option<u32>,

    /// Digits the page number is zero-padded to in asset file names.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_number_width: Option<usize>,
}

impl Default for DocumentConfig {
    fn default() -> Self {
        Self {
            asset_root: Some(DEFAULT_ASSET_ROOT.to_string()),
            total_pages: Some(DEFAULT_TOTAL_PAGES),
            page_number_width: Some(DEFAULT_PAGE_NUMBER_WIDTH),
        }
    }
}

impl DocumentConfig {
    /// Asset root with the default applied.
    #[must_use]
    pub fn asset_root(&self) -> &str {
        self.asset_root.as_deref().unwrap_or(DEFAULT_ASSET_ROOT)
    }

    /// Page count, never below [`MIN_TOTAL_PAGES`].
    #[must_use]
    pub fn total_pages(&self) -> u32 {
        self.total_pages
            .unwrap_or(DEFAULT_TOTAL_PAGES)
            .max(MIN_TOTAL_PAGES)
    }

    /// File name padding, clamped to the supported range.
    #[must_use]
    pub fn page_number_width(&self) -> usize {
        self.page_number_width
            .unwrap_or(DEFAULT_PAGE_NUMBER_WIDTH)
            .clamp(MIN_PAGE_NUMBER_WIDTH, MAX_PAGE_NUMBER_WIDTH)
    }
}

/// Navigation settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NavigationConfig {
    /// Horizontal distance a swipe must exceed to turn the page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub swipe_threshold_px: Option<f32>,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            swipe_threshold_px: Some(DEFAULT_SWIPE_THRESHOLD_PX),
        }
    }
}

impl NavigationConfig {
    /// Swipe threshold, clamped to the supported range.
    #[must_use]
    pub fn swipe_threshold_px(&self) -> f32 {
        let raw = self
            .swipe_threshold_px
            .filter(|value| value.is_finite())
            .unwrap_or(DEFAULT_SWIPE_THRESHOLD_PX);
        raw.clamp(MIN_SWIPE_THRESHOLD_PX, MAX_SWIPE_THRESHOLD_PX)
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
    pub document: DocumentConfig,

    #[serde(default)]
    pub navigation: NavigationConfig,
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
/// default config with an i18n warning key explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => {
                    log::debug!("loaded settings from {}", path.display());
                    return (config, None);
                }
                Err(err) => {
                    log::warn!("ignoring unreadable settings {}: {}", path.display(), err);
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
// Tests
// =============================================================================

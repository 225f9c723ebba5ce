// SPDX-License-Identifier: MPL-2.0
//! This module handles the picker's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[picker]` - Placement, size, truncation and interaction settings
//! - `[thumbnails]` - Placeholder image sources and the asset root
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Pass `--config-dir` or set `LAYER_PICKER_CONFIG_DIR`
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use layer_picker::config::{self, Config};
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! // Modify a setting
//! config.picker.max_visible = 6;
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;
pub mod paths;

pub use defaults::*;

use crate::error::{Error, Result};
use crate::picker::{
    HoverCloseDelay, InputMode, LayerItem, PickerOptions, Placeholders, Placement, SelectionMode,
    SizeClass, TileOptions, XEdge, YEdge,
};
use crate::ui::theme::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Colour preset (dark, light, or system).
    #[serde(default)]
    pub theme: ThemeMode,
}

/// Placement, sizing and interaction settings shared by every picker.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PickerConfig {
    /// Offset from the horizontal anchor edge (px).
    pub x: f32,
    /// Offset from the vertical anchor edge (px).
    pub y: f32,
    pub x_rel: XEdge,
    pub y_rel: YEdge,
    pub size: SizeClass,
    /// Maximum number of item tiles; `0` disables truncation.
    pub max_visible: usize,
    /// Delay before a pointer-leave collapses the panel (ms, 0..=2000).
    pub hover_close_delay_ms: u64,
    pub panel_gap: f32,
    pub parent_gap: f32,
    /// Show "more" even when nothing is truncated (requires a handler).
    pub always_show_more: bool,
    pub input_mode: InputMode,
    pub show_default_tile: bool,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            x: DEFAULT_ANCHOR_X,
            y: DEFAULT_ANCHOR_Y,
            x_rel: XEdge::default(),
            y_rel: YEdge::default(),
            size: SizeClass::default(),
            max_visible: DEFAULT_MAX_VISIBLE,
            hover_close_delay_ms: DEFAULT_HOVER_CLOSE_DELAY_MS,
            panel_gap: DEFAULT_PANEL_GAP,
            parent_gap: DEFAULT_PARENT_GAP,
            always_show_more: false,
            input_mode: InputMode::default(),
            show_default_tile: true,
        }
    }
}

/// Placeholder image sources.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ThumbnailConfig {
    pub default_thumb: String,
    pub no_image_thumb: String,
    pub more_thumb: String,
    /// Directory that relative sources resolve against.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asset_root: Option<PathBuf>,
}

impl Default for ThumbnailConfig {
    fn default() -> Self {
        Self {
            default_thumb: DEFAULT_RESET_IMAGE.to_string(),
            no_image_thumb: DEFAULT_NO_IMAGE.to_string(),
            more_thumb: DEFAULT_MORE_IMAGE.to_string(),
            asset_root: None,
        }
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Picker configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub picker: PickerConfig,

    #[serde(default)]
    pub thumbnails: ThumbnailConfig,
}

impl Config {
    /// Builds construction options for one picker instance.
    ///
    /// `more_handler` reports whether the host handles "more"; selection
    /// ownership and the default item are per instance and come from the host.
    #[must_use]
    pub fn picker_options(
        &self,
        selection: SelectionMode,
        default_item: Option<LayerItem>,
        more_handler: bool,
    ) -> PickerOptions {
        let picker = &self.picker;
        PickerOptions {
            selection,
            default_item,
            input_mode: picker.input_mode,
            hover_close_delay: HoverCloseDelay::new(picker.hover_close_delay_ms),
            tiles: TileOptions {
                max_visible: NonZeroUsize::new(picker.max_visible),
                more_handler,
                always_show_more: picker.always_show_more,
                default_tile: picker.show_default_tile,
            },
            placement: Placement {
                x: picker.x,
                y: picker.y,
                x_edge: picker.x_rel,
                y_edge: picker.y_rel,
                panel_gap: picker.panel_gap,
                parent_gap: picker.parent_gap,
            },
            size: picker.size,
            placeholders: Placeholders {
                default_thumb: self.thumbnails.default_thumb.clone(),
                no_image_thumb: self.thumbnails.no_image_thumb.clone(),
                more_thumb: self.thumbnails.more_thumb.clone(),
            },
            ..PickerOptions::default()
        }
    }
}

// =============================================================================
// Config Path Resolution
// =============================================================================

/// Returns the config file path with an optional override.
fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
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
/// default config with the i18n key of a warning to show.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            return match load_from_path(&path) {
                Ok(config) => (config, None),
                Err(_) => (
                    Config::default(),
                    Some("notification-config-load-error".to_string()),
                ),
            };
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
// Item Catalogues
// =============================================================================

#[derive(Debug, Deserialize)]
struct ItemFile {
    #[serde(default)]
    items: Vec<LayerItem>,
}

/// Reads a list of `[[items]]` tables.
pub fn load_items_from_path(path: &Path) -> Result<Vec<LayerItem>> {
    let content = fs::read_to_string(path)?;
    let file: ItemFile = toml::from_str(&content)?;
    Ok(file.items)
}

// =============================================================================
// Tests
// =============================================================================

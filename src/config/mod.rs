//! Configuration module for DSVis-RS
//!
//! This module handles two files kept in the application data directory:
//!
//! - `config.toml` - [`VisConfig`]: geometry, ease rates, array capacity,
//!   value range and optional random seed. Hand-editable; every field has a
//!   default, so a partial file is fine.
//! - `app_state.json` - [`AppState`]: UI preferences and the last selected
//!   mode, written on exit.
//!
//! Structures themselves are never persisted.
//!
//! # App Data Location
//!
//! - **Linux**: `~/.local/share/dev.dsvis.dsvis-rs/`
//! - **macOS**: `~/Library/Application Support/dev.dsvis.dsvis-rs/`
//! - **Windows**: `%APPDATA%\dev.dsvis.dsvis-rs\`
//!
//! # Example
//!
//! ```ignore
//! use dsvis_rs::config::{AppState, VisConfig};
//!
//! let config = VisConfig::load_or_default();
//! let mut state = AppState::load_or_default();
//! state.last_mode = dsvis_rs::Mode::Bst;
//! state.save()?;
//! ```

use crate::animation::Ease;
use crate::error::{Result, ResultExt, VisError};
use crate::layout::LayoutConfig;
use crate::source::ValueRange;
use crate::types::{Mode, StructureKind};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application identifier for data directories
pub const APP_ID: &str = "dev.dsvis.dsvis-rs";

/// Config filename
pub const CONFIG_FILE: &str = "config.toml";

/// App state filename
pub const APP_STATE_FILE: &str = "app_state.json";

/// Default number of status messages kept in the history
pub const DEFAULT_STATUS_HISTORY: usize = 32;

// ==================== App Data Directory ====================

/// Get the application data directory path
pub fn app_data_dir() -> Option<PathBuf> {
    dirs_next::data_dir().map(|p| p.join(APP_ID))
}

/// Ensure the app data directory exists
pub fn ensure_app_data_dir() -> Result<PathBuf> {
    let dir = app_data_dir().ok_or_else(|| {
        VisError::Config("Could not determine app data directory".to_string())
    })?;

    if !dir.exists() {
        std::fs::create_dir_all(&dir).map_err(|e| {
            VisError::Config(format!("Failed to create app data directory: {}", e))
        })?;
    }

    Ok(dir)
}

/// Get the path to the config file
pub fn config_path() -> Option<PathBuf> {
    app_data_dir().map(|p| p.join(CONFIG_FILE))
}

/// Get the path to the app state file
pub fn app_state_path() -> Option<PathBuf> {
    app_data_dir().map(|p| p.join(APP_STATE_FILE))
}

// ==================== Visualizer Config ====================

/// Initial window size
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 800.0,
        }
    }
}

/// Per-structure ease rates (1/seconds)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    pub list_rate: f32,
    pub tree_rate: f32,
    pub array_rate: f32,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            list_rate: 5.0,
            tree_rate: 4.0,
            array_rate: 5.0,
        }
    }
}

impl AnimationConfig {
    pub fn ease_for(&self, kind: StructureKind) -> Ease {
        match kind {
            StructureKind::LinkedList => Ease::new(self.list_rate),
            StructureKind::Tree => Ease::new(self.tree_rate),
            StructureKind::Array => Ease::new(self.array_rate),
        }
    }
}

/// Array bounds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArrayConfig {
    pub capacity: usize,
    /// Element count after a reset
    pub default_size: usize,
}

impl Default for ArrayConfig {
    fn default() -> Self {
        Self {
            capacity: 20,
            default_size: 10,
        }
    }
}

/// Complete visualizer configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VisConfig {
    /// Fixes the value sampler for reproducible sessions
    pub random_seed: Option<u64>,
    /// Number of status messages kept
    pub status_history: usize,
    pub window: WindowConfig,
    pub layout: LayoutConfig,
    pub animation: AnimationConfig,
    pub array: ArrayConfig,
    pub values: ValueRange,
}

impl Default for VisConfig {
    fn default() -> Self {
        Self {
            random_seed: None,
            status_history: DEFAULT_STATUS_HISTORY,
            window: WindowConfig::default(),
            layout: LayoutConfig::default(),
            animation: AnimationConfig::default(),
            array: ArrayConfig::default(),
            values: ValueRange::default(),
        }
    }
}

impl VisConfig {
    /// Check values the rest of the application relies on
    pub fn validate(&self) -> Result<()> {
        if self.array.capacity == 0 {
            return Err(VisError::Config("array.capacity must be at least 1".into()));
        }
        if self.array.default_size > self.array.capacity {
            return Err(VisError::Config(format!(
                "array.default_size ({}) exceeds array.capacity ({})",
                self.array.default_size, self.array.capacity
            )));
        }
        if self.values.min > self.values.max {
            return Err(VisError::Config(format!(
                "values.min ({}) is greater than values.max ({})",
                self.values.min, self.values.max
            )));
        }

        let list = &self.layout.list;
        let tree = &self.layout.tree;
        let array = &self.layout.array;
        let geometry = [
            ("layout.list.node_width", list.node_width),
            ("layout.list.node_height", list.node_height),
            ("layout.list.spacing", list.spacing),
            ("layout.tree.node_radius", tree.node_radius),
            ("layout.tree.level_step", tree.level_step),
            ("layout.array.box_width", array.box_width),
            ("layout.array.box_height", array.box_height),
        ];
        for (name, value) in geometry {
            if value.is_nan() || value <= 0.0 {
                return Err(VisError::Config(format!("{} must be positive", name)));
            }
        }
        let rates = [
            ("animation.list_rate", self.animation.list_rate),
            ("animation.tree_rate", self.animation.tree_rate),
            ("animation.array_rate", self.animation.array_rate),
        ];
        // a zero rate would keep every element moving forever
        for (name, value) in rates {
            if !value.is_finite() || value <= 0.0 {
                return Err(VisError::Config(format!("{} must be positive", name)));
            }
        }
        if list.max_per_row == 0 {
            return Err(VisError::Config("layout.list.max_per_row must be at least 1".into()));
        }
        Ok(())
    }

    /// Load and validate a config file
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            VisError::Config(format!("Failed to read config {:?}: {}", path, e))
        })?;

        let config: VisConfig = toml::from_str(&content).map_err(|e| {
            VisError::Config(format!("Failed to parse config {:?}: {}", path, e))
        })?;
        config
            .validate()
            .with_context(|| format!("Invalid config {:?}", path))?;
        Ok(config)
    }

    /// Load from the default location. A missing file yields defaults.
    pub fn load() -> Result<Self> {
        let path = config_path().ok_or_else(|| {
            VisError::Config("Could not determine config path".to_string())
        })?;

        if !path.exists() {
            return Ok(Self::default());
        }
        Self::load_from(path)
    }

    /// Load config, returning defaults on any error
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_else(|e| {
            tracing::warn!("Failed to load config, using defaults: {}", e);
            Self::default()
        })
    }

    pub fn save_to(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                VisError::Config(format!("Failed to create config directory: {}", e))
            })?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| VisError::Serialization(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(path, content).map_err(|e| {
            VisError::Config(format!("Failed to write config {:?}: {}", path, e))
        })
    }
}

// ==================== App State ====================

/// Persistent application state
///
/// Preferences that carry over between runs, separate from the
/// hand-edited config file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppState {
    /// Version for future migration support
    #[serde(default = "default_app_state_version")]
    pub version: u32,

    /// Mode shown at startup
    #[serde(default)]
    pub last_mode: Mode,

    /// UI preferences that persist across sessions
    #[serde(default)]
    pub ui_preferences: UiPreferences,
}

fn default_app_state_version() -> u32 {
    1
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            version: 1,
            last_mode: Mode::default(),
            ui_preferences: UiPreferences::default(),
        }
    }
}

impl AppState {
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| VisError::Config(format!("Failed to read app state: {}", e)))?;

        serde_json::from_str(&content)
            .map_err(|e| VisError::Config(format!("Failed to parse app state: {}", e)))
    }

    /// Load app state from the default location
    pub fn load() -> Result<Self> {
        let path = app_state_path().ok_or_else(|| {
            VisError::Config("Could not determine app state path".to_string())
        })?;

        if !path.exists() {
            return Ok(Self::default());
        }
        Self::load_from(path)
    }

    /// Load app state, returning defaults on any error
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_else(|e| {
            tracing::warn!("Failed to load app state, using defaults: {}", e);
            Self::default()
        })
    }

    pub fn save_to(&self, path: impl AsRef<Path>) -> Result<()> {
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| VisError::Config(format!("Failed to serialize app state: {}", e)))?;

        std::fs::write(path.as_ref(), content)?;
        Ok(())
    }

    /// Save app state to the default location
    pub fn save(&self) -> Result<()> {
        let dir = ensure_app_data_dir().context("Failed to save app state")?;
        self.save_to(dir.join(APP_STATE_FILE))
    }
}

/// UI preferences that persist across sessions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiPreferences {
    /// Enable dark mode
    #[serde(default = "default_true")]
    pub dark_mode: bool,

    /// Show the pseudocode side panel
    #[serde(default = "default_true")]
    pub show_pseudocode: bool,
}

fn default_true() -> bool {
    true
}

impl Default for UiPreferences {
    fn default() -> Self {
        Self {
            dark_mode: true,
            show_pseudocode: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = VisConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.array.capacity, 20);
        assert_eq!(config.array.default_size, 10);
        assert_eq!(config.values, ValueRange::new(1, 99));
        assert_eq!(config.animation.tree_rate, 4.0);
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: VisConfig = toml::from_str(
            r#"
            random_seed = 7

            [array]
            capacity = 8

            [layout.list]
            max_per_row = 4
            "#,
        )
        .unwrap();

        assert_eq!(config.random_seed, Some(7));
        assert_eq!(config.array.capacity, 8);
        assert_eq!(config.array.default_size, 10);
        assert_eq!(config.layout.list.max_per_row, 4);
        assert_eq!(config.layout.list.spacing, 150.0);
        // default_size above capacity is caught by validation
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = VisConfig::default();
        config.values = ValueRange::new(10, 1);
        assert!(config.validate().is_err());

        let mut config = VisConfig::default();
        config.array.capacity = 0;
        config.array.default_size = 0;
        assert!(config.validate().is_err());

        let mut config = VisConfig::default();
        config.layout.tree.level_step = 0.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_non_positive_rate() {
        for rate in [0.0, -2.0, f32::NAN, f32::INFINITY] {
            let mut config = VisConfig::default();
            config.animation.list_rate = rate;
            assert!(config.validate().is_err(), "list_rate {} accepted", rate);

            let mut config = VisConfig::default();
            config.animation.tree_rate = rate;
            assert!(config.validate().is_err(), "tree_rate {} accepted", rate);

            let mut config = VisConfig::default();
            config.animation.array_rate = rate;
            assert!(config.validate().is_err(), "array_rate {} accepted", rate);
        }
    }

    #[test]
    fn test_config_load_rejects_zero_rate() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(&path, "[animation]\nlist_rate = 0.0\n").unwrap();
        assert!(VisConfig::load_from(&path).is_err());
    }

    #[test]
    fn test_config_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join(CONFIG_FILE);

        let mut config = VisConfig::default();
        config.random_seed = Some(1234);
        config.animation.list_rate = 8.0;
        config.save_to(&path).unwrap();

        let loaded = VisConfig::load_from(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_config_load_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(&path, "array = \"not a table\"").unwrap();
        assert!(matches!(VisConfig::load_from(&path), Err(VisError::Config(_))));
    }

    #[test]
    fn test_config_load_names_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(&path, "[array]\ncapacity = 0\n").unwrap();

        let err = VisConfig::load_from(&path).unwrap_err();
        assert!(matches!(err, VisError::WithContext { .. }));
        assert!(err.to_string().contains(CONFIG_FILE));
    }

    #[test]
    fn test_app_state_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(APP_STATE_FILE);

        let mut state = AppState::default();
        state.last_mode = Mode::Array;
        state.ui_preferences.show_pseudocode = false;
        state.save_to(&path).unwrap();

        assert_eq!(AppState::load_from(&path).unwrap(), state);
    }

    #[test]
    fn test_app_state_missing_fields() {
        let state: AppState = serde_json::from_str("{}").unwrap();
        assert_eq!(state, AppState::default());
    }
}

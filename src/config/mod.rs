// SPDX-License-Identifier: MPL-2.0
//! This module handles user preferences, including loading and saving
//! them to a `settings.toml` file in the platform configuration directory.
//!
//! Missing or unparseable files degrade to defaults rather than erroring;
//! only genuine I/O failures surface as [`Error`](crate::error::Error).
//!
//! # Examples
//!
//! ```no_run
//! use feedglass::config::{self, Preferences};
//! use feedglass::domain::Theme;
//!
//! // Load existing preferences
//! let mut prefs = config::load().unwrap_or_default();
//!
//! // Modify a setting
//! prefs.theme = Some(Theme::Dark);
//!
//! // Save the modified preferences
//! config::save(&prefs).expect("Failed to save preferences");
//! ```

use crate::domain::Theme;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

mod defaults;

pub use defaults::{
    DEFAULT_ACTIVITY_BUFFER_CAPACITY, DEFAULT_AVATAR_PLACEHOLDER, DEFAULT_LOOKAHEAD_MARGIN,
    MAX_ACTIVITY_BUFFER_CAPACITY, MAX_LOOKAHEAD_MARGIN, MIN_ACTIVITY_BUFFER_CAPACITY,
    MIN_LOOKAHEAD_MARGIN,
};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "Feedglass";

/// User-editable preferences persisted across sessions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Preferences {
    /// Saved theme preference. `None` means "follow the system".
    #[serde(default)]
    pub theme: Option<Theme>,

    /// Lookahead margin for infinite scroll, in distance-units.
    #[serde(default)]
    pub lookahead_margin: Option<u32>,

    /// Placeholder image URL used when no avatar is resolvable.
    #[serde(default)]
    pub avatar_placeholder: Option<String>,
}

impl Preferences {
    /// Returns the configured placeholder URL, or the built-in default.
    #[must_use]
    pub fn avatar_placeholder(&self) -> &str {
        self.avatar_placeholder
            .as_deref()
            .unwrap_or(DEFAULT_AVATAR_PLACEHOLDER)
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Preferences> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Preferences::default())
}

pub fn save(prefs: &Preferences) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(prefs, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Preferences> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_default())
}

pub fn save_to_path(prefs: &Preferences, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(prefs)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let prefs = Preferences {
            theme: Some(Theme::Dark),
            lookahead_margin: Some(250),
            avatar_placeholder: Some("/img/ghost.png".to_string()),
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&prefs, &config_path).expect("failed to save preferences");
        let loaded = load_from_path(&config_path).expect("failed to load preferences");

        assert_eq!(loaded, prefs);
    }

    #[test]
    fn load_from_path_returns_default_on_invalid_toml() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        let loaded = load_from_path(&config_path).expect("load should not error");
        assert!(loaded.theme.is_none());
        assert!(loaded.lookahead_margin.is_none());
    }

    #[test]
    fn save_to_path_creates_parent_directories() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let nested_dir = temp_dir.path().join("deep").join("path");
        let config_path = nested_dir.join("settings.toml");

        save_to_path(&Preferences::default(), &config_path)
            .expect("save should create directories");
        assert!(config_path.exists());
    }

    #[test]
    fn default_preferences_fall_back_to_built_in_placeholder() {
        let prefs = Preferences::default();
        assert_eq!(prefs.avatar_placeholder(), DEFAULT_AVATAR_PLACEHOLDER);
    }

    #[test]
    fn theme_preference_serializes_lowercase() {
        let prefs = Preferences {
            theme: Some(Theme::Light),
            ..Preferences::default()
        };
        let toml = toml::to_string(&prefs).expect("failed to serialize");
        assert!(toml.contains("theme = \"light\""));
    }
}

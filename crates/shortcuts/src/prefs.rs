//! User preference cache
//!
//! A thin client-side cache of display and behavior preferences,
//! persisted as JSON in the Whymail config directory. A missing file
//! loads as product defaults, and missing fields in an older file fill
//! in from defaults, so upgrades never fail to load.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Preferences filename in the Whymail config directory
const PREFS_FILE: &str = "preferences.json";

/// Color theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

/// Message list density
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Density {
    Comfortable,
    Compact,
}

/// Persisted user preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Preferences {
    pub theme: Theme,
    pub density: Density,
    /// Master switch for the keystroke dispatcher; feeds
    /// `ShortcutContext::shortcuts_enabled`
    pub keyboard_shortcuts: bool,
    pub notification_sounds: bool,
    pub language: String,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            theme: Theme::Light,
            density: Density::Comfortable,
            keyboard_shortcuts: true,
            notification_sounds: true,
            language: "en".to_string(),
        }
    }
}

impl Preferences {
    /// Load preferences from the Whymail config directory.
    ///
    /// Returns defaults when no file exists yet; an unreadable or
    /// malformed file is an error.
    pub fn load() -> Result<Self> {
        if !config::config_exists(PREFS_FILE) {
            return Ok(Self::default());
        }
        config::load_json(PREFS_FILE)
    }

    /// Load preferences from a specific JSON file
    pub fn load_from(path: &Path) -> Result<Self> {
        config::load_json_file(path)
    }

    /// Parse preferences from a JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Save preferences to the Whymail config directory
    pub fn save(&self) -> Result<()> {
        config::save_json(PREFS_FILE, self)
    }

    /// Save preferences to a specific path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        config::save_json_file(path, self)
    }
}

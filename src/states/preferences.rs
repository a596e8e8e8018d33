//! Preferences
//!
//! Global application preferences, persisted as TOML in the platform
//! config directory.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{error, info};

use crate::error::Result;
use crate::helpers::get_or_create_config_dir;
use crate::i18n::Locale;

const PREFERENCES_FILE_NAME: &str = "satmod-gui.toml";

fn get_config_path() -> Result<PathBuf> {
    let config_dir = get_or_create_config_dir()?;
    Ok(config_dir.join(PREFERENCES_FILE_NAME))
}

/// Persisted application preferences
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Preferences {
    /// Move floating module windows back to their saved position
    restore_module_window_position: bool,
    /// Start sky-at-a-glance charts at real time instead of the module clock
    use_real_time_for_predictions: bool,
    locale: Option<Locale>,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            restore_module_window_position: true,
            use_real_time_for_predictions: false,
            locale: None,
        }
    }
}

impl Preferences {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load preferences from the config directory
    pub fn try_load() -> Result<Self> {
        Self::load_from(&get_config_path()?)
    }

    /// Load preferences from `path`; a missing or empty file gives defaults
    pub fn load_from(path: &Path) -> Result<Self> {
        info!(path = ?path, "Loading preferences");
        if !path.exists() {
            return Ok(Self::new());
        }

        let value = fs::read_to_string(path)?;
        if value.trim().is_empty() {
            return Ok(Self::new());
        }

        let prefs: Self = toml::from_str(&value).map_err(|e| {
            error!(error = %e, path = ?path, "Failed to parse preferences");
            e
        })?;
        Ok(prefs)
    }

    /// Save preferences to the config directory
    pub fn save(&self) -> Result<()> {
        self.save_to(&get_config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        let value = toml::to_string(self)?;
        fs::write(path, value)?;
        Ok(())
    }

    // ==================== Getters ====================

    pub fn restore_module_window_position(&self) -> bool {
        self.restore_module_window_position
    }

    pub fn use_real_time_for_predictions(&self) -> bool {
        self.use_real_time_for_predictions
    }

    /// Configured locale, or the system one
    pub fn locale(&self) -> Locale {
        self.locale.unwrap_or_else(Locale::detect)
    }

    // ==================== Setters ====================

    pub fn set_restore_module_window_position(&mut self, restore: bool) {
        self.restore_module_window_position = restore;
    }

    pub fn set_use_real_time_for_predictions(&mut self, real_time: bool) {
        self.use_real_time_for_predictions = real_time;
    }

    pub fn set_locale(&mut self, locale: Option<Locale>) {
        self.locale = locale;
    }
}

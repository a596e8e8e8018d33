//! ModuleConfig - Persisted Module Configuration
//!
//! A module file is a TOML document of sections, each a flat mapping of
//! keys to scalar values. Key order is kept stable across load/save so a
//! module file only changes where values change.

use hashlink::LinkedHashMap;
use serde::{Deserialize, Serialize};
use snafu::ResultExt;
use std::path::Path;

use crate::error::{FileSnafu, Result};

/// Well-known section and key names
pub mod keys {
    pub const GLOBAL_SECTION: &str = "GLOBAL";

    pub const LAYOUT: &str = "LAYOUT";
    pub const QTH_FILE: &str = "QTHFILE";
    pub const SATELLITES: &str = "SATELLITES";
    pub const STATE: &str = "STATE";
    pub const WIN_POS_X: &str = "WX";
    pub const WIN_POS_Y: &str = "WY";
    pub const WIN_WIDTH: &str = "WWIDTH";
    pub const WIN_HEIGHT: &str = "WHEIGHT";
}

/// A single configuration value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ConfigValue {
    Bool(bool),
    Int(i64),
    IntList(Vec<i64>),
    Text(String),
}

type Section = LinkedHashMap<String, ConfigValue>;

/// Section → key → value store backing one module file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ModuleConfig {
    sections: LinkedHashMap<String, Section>,
}

impl ModuleConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a module document
    pub fn parse(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::new());
        }
        Ok(toml::from_str(content)?)
    }

    /// Load a module file from disk
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).context(FileSnafu { path })?;
        Self::parse(&content)
    }

    /// Serialize to a TOML document
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Write the module file to disk
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = self.to_toml()?;
        std::fs::write(path, content).context(FileSnafu { path })?;
        Ok(())
    }

    // ==================== Getters ====================

    pub fn get(&self, section: &str, key: &str) -> Option<&ConfigValue> {
        self.sections.get(section).and_then(|s| s.get(key))
    }

    pub fn has_key(&self, section: &str, key: &str) -> bool {
        self.get(section, key).is_some()
    }

    pub fn get_int(&self, section: &str, key: &str) -> Option<i64> {
        match self.get(section, key)? {
            ConfigValue::Int(value) => Some(*value),
            _ => None,
        }
    }

    /// Integer value narrowed to `i32`, for pixel geometry
    pub fn get_i32(&self, section: &str, key: &str) -> Option<i32> {
        self.get_int(section, key)
            .and_then(|value| i32::try_from(value).ok())
    }

    pub fn get_bool(&self, section: &str, key: &str) -> Option<bool> {
        match self.get(section, key)? {
            ConfigValue::Bool(value) => Some(*value),
            _ => None,
        }
    }

    pub fn get_str(&self, section: &str, key: &str) -> Option<&str> {
        match self.get(section, key)? {
            ConfigValue::Text(value) => Some(value.as_str()),
            _ => None,
        }
    }

    pub fn get_int_list(&self, section: &str, key: &str) -> Option<&[i64]> {
        match self.get(section, key)? {
            ConfigValue::IntList(values) => Some(values.as_slice()),
            _ => None,
        }
    }

    // ==================== Setters ====================

    pub fn set(&mut self, section: &str, key: &str, value: ConfigValue) {
        if !self.sections.contains_key(section) {
            self.sections.insert(section.to_string(), Section::new());
        }
        if let Some(section) = self.sections.get_mut(section) {
            // replace() keeps the key at its current position
            section.replace(key.to_string(), value);
        }
    }

    pub fn set_int(&mut self, section: &str, key: &str, value: i64) {
        self.set(section, key, ConfigValue::Int(value));
    }

    pub fn set_bool(&mut self, section: &str, key: &str, value: bool) {
        self.set(section, key, ConfigValue::Bool(value));
    }

    pub fn set_str(&mut self, section: &str, key: &str, value: impl Into<String>) {
        self.set(section, key, ConfigValue::Text(value.into()));
    }

    pub fn set_int_list(&mut self, section: &str, key: &str, values: Vec<i64>) {
        self.set(section, key, ConfigValue::IntList(values));
    }

    pub fn remove(&mut self, section: &str, key: &str) -> Option<ConfigValue> {
        self.sections.get_mut(section).and_then(|s| s.remove(key))
    }
}

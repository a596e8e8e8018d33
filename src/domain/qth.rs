//! Qth - Ground Station Reference

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::constants::QTH_FILE_EXTENSION;

/// Ground station (observer location) a module predicts for.
///
/// Only the reference is held here; coordinates live in the `.qth` file
/// owned by the prediction side.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Qth {
    /// Display name, the file stem of the `.qth` file
    pub name: String,
    /// File name as stored under `QTHFILE`
    pub file: String,
}

impl Qth {
    /// Build from the `QTHFILE` value, e.g. `"home.qth"` → `"home"`
    pub fn from_file_name(file: &str) -> Self {
        let path = Path::new(file);
        let name = match path.extension() {
            Some(ext) if ext == QTH_FILE_EXTENSION => path
                .file_stem()
                .map(|s| s.to_string_lossy().to_string())
                .unwrap_or_default(),
            _ => file.to_string(),
        };
        Self {
            name,
            file: file.to_string(),
        }
    }
}

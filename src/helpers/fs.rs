//! File System Utilities
//!
//! Directory management and the module file operations (copy, remove, list).

use crate::constants::{
    HWCONF_DIR_NAME, LEGACY_DIR_NAME, MODULE_FILE_EXTENSION, MODULES_DIR_NAME,
};
use crate::error::{Error, FileSnafu, Result};
use directories::ProjectDirs;
use home::home_dir;
use snafu::ResultExt;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

fn project_dirs() -> Result<ProjectDirs> {
    ProjectDirs::from("org", "gpredict", "satmod-gui").ok_or_else(|| Error::Invalid {
        message: "Could not determine project directories".to_string(),
    })
}

fn ensure_dir(dir: &Path) -> Result<()> {
    if !dir.exists() {
        fs::create_dir_all(dir).context(FileSnafu { path: dir })?;
    }
    Ok(())
}

/// Get or create the application's configuration directory
///
/// Platform-specific locations:
/// - **Linux**: `~/.config/satmod-gui/` or `$XDG_CONFIG_HOME/satmod-gui/`
/// - **macOS**: `~/Library/Application Support/org.gpredict.satmod-gui/`
/// - **Windows**: `C:\Users\<User>\AppData\Roaming\gpredict\satmod-gui\config\`
pub fn get_or_create_config_dir() -> Result<PathBuf> {
    let project_dirs = project_dirs()?;
    let config_dir = project_dirs.config_dir();
    ensure_dir(config_dir)?;
    Ok(config_dir.to_path_buf())
}

/// Get or create the data directory holding modules, hardware config and logs
///
/// Platform-specific locations:
/// - **Linux**: `~/.local/share/satmod-gui/`
/// - **macOS**: `~/Library/Application Support/org.gpredict.satmod-gui/`
/// - **Windows**: `C:\Users\<User>\AppData\Roaming\gpredict\satmod-gui\data\`
pub fn get_or_create_data_dir() -> Result<PathBuf> {
    let project_dirs = project_dirs()?;
    let data_dir = project_dirs.data_dir();
    ensure_dir(data_dir)?;
    Ok(data_dir.to_path_buf())
}

/// Per-user modules directory, `<data>/modules`
///
/// Files from the legacy `~/.gpredict2/modules` are copied over on first use.
pub fn get_or_create_modules_dir() -> Result<PathBuf> {
    get_or_create_data_subdir(MODULES_DIR_NAME)
}

/// Hardware (radio / rotator) configuration directory, `<data>/hwconf`
pub fn get_or_create_hwconf_dir() -> Result<PathBuf> {
    get_or_create_data_subdir(HWCONF_DIR_NAME)
}

/// Log directory, `<data>/logs`
pub fn get_or_create_log_dir() -> Result<PathBuf> {
    let dir = get_or_create_data_dir()?.join("logs");
    ensure_dir(&dir)?;
    Ok(dir)
}

fn get_or_create_data_subdir(name: &str) -> Result<PathBuf> {
    let dir = get_or_create_data_dir()?.join(name);
    ensure_dir(&dir)?;

    if let Some(home) = home_dir() {
        let legacy = home.join(LEGACY_DIR_NAME).join(name);
        if legacy.is_dir() {
            match copy_missing_files(&legacy, &dir) {
                Ok(0) => {}
                Ok(copied) => info!(from = ?legacy, to = ?dir, copied, "Migrated legacy files"),
                Err(e) => warn!(error = %e, from = ?legacy, "Legacy migration failed"),
            }
        }
    }

    Ok(dir)
}

/// Copy files (not directories) that don't exist yet in `dst`
fn copy_missing_files(src: &Path, dst: &Path) -> Result<usize> {
    let mut copied = 0;
    for entry in fs::read_dir(src)? {
        let entry = entry?;

        // Skip subdirectories
        if entry.file_type()?.is_dir() {
            continue;
        }

        let dst_path = dst.join(entry.file_name());
        if dst_path.exists() {
            continue;
        }
        fs::copy(entry.path(), &dst_path)?;
        copied += 1;
    }
    Ok(copied)
}

/// Path of a module file, `<dir>/<name>.mod`
pub fn module_file_path(dir: &Path, name: &str) -> PathBuf {
    dir.join(format!("{name}.{MODULE_FILE_EXTENSION}"))
}

/// Byte-for-byte copy; an existing target is overwritten
pub fn copy_file(source: &Path, target: &Path) -> Result<u64> {
    if source == target {
        return Err(Error::Invalid {
            message: format!("Refusing to copy {} onto itself", source.display()),
        });
    }
    fs::copy(source, target).context(FileSnafu { path: source })
}

/// Remove a file
pub fn remove_file(path: &Path) -> Result<()> {
    fs::remove_file(path).context(FileSnafu { path })
}

/// File stems of all files in `dir` with the given extension, sorted
pub fn list_file_stems(dir: &Path, extension: &str) -> Result<Vec<String>> {
    let mut stems = Vec::new();
    if !dir.is_dir() {
        return Ok(stems);
    }

    for entry in fs::read_dir(dir).context(FileSnafu { path: dir })? {
        let path = entry?.path();
        if !path.is_file() {
            continue;
        }
        if path.extension().is_some_and(|ext| ext == extension) {
            if let Some(stem) = path.file_stem() {
                stems.push(stem.to_string_lossy().to_string());
            }
        }
    }

    stems.sort();
    Ok(stems)
}

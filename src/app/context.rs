//! Application Context
//!
//! Explicit handle passed to every operation that needs the window host,
//! the preferences, the module directories or the UI event channel.

use crossbeam_channel::Sender;
use std::path::PathBuf;
use tracing::warn;

use crate::error::Result;
use crate::eventing::UiEvent;
use crate::helpers::{get_or_create_hwconf_dir, get_or_create_modules_dir};
use crate::host::WindowHost;
use crate::i18n::Locale;
use crate::states::Preferences;

/// Directories the module layer reads and writes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModulePaths {
    /// `<name>.mod` files
    pub modules_dir: PathBuf,
    /// `*.rig` / `*.rot` hardware configuration
    pub hwconf_dir: PathBuf,
}

impl ModulePaths {
    /// Per-user directories, created (and migrated) on first use
    pub fn from_user_dirs() -> Result<Self> {
        Ok(Self {
            modules_dir: get_or_create_modules_dir()?,
            hwconf_dir: get_or_create_hwconf_dir()?,
        })
    }
}

pub struct AppContext<H> {
    pub host: H,
    pub prefs: Preferences,
    pub paths: ModulePaths,
    locale: Locale,
    events: Sender<UiEvent>,
}

impl<H: WindowHost> AppContext<H> {
    pub fn new(host: H, prefs: Preferences, paths: ModulePaths, events: Sender<UiEvent>) -> Self {
        let locale = prefs.locale();
        Self {
            host,
            prefs,
            paths,
            locale,
            events,
        }
    }

    /// Locale resolved at startup
    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Send a notification to the UI; a closed channel is only logged
    pub fn emit(&self, event: UiEvent) {
        if let Err(e) = self.events.send(event) {
            warn!(error = %e, "UI event channel closed");
        }
    }
}

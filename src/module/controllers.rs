//! Radio and Rotator Controllers
//!
//! A module has at most one radio and one rotator controller window. A
//! controller session can only be built when the matching hardware is
//! configured (`*.rig` / `*.rot` files in the hardware directory).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use tracing::{info, warn};

use super::SatModule;
use crate::app::AppContext;
use crate::constants::{ICON_ANTENNA, ICON_RADIO, RADIO_FILE_EXTENSION, ROTATOR_FILE_EXTENSION};
use crate::error::{Error, Result};
use crate::helpers::list_file_stems;
use crate::host::{WindowContent, WindowHost, WindowId, WindowSpec};
use crate::i18n::{t, t_format};

/// Kind of auxiliary hardware controller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ControllerKind {
    Radio,
    Rotator,
}

impl ControllerKind {
    /// Extension of the hardware configuration files
    pub fn file_extension(self) -> &'static str {
        match self {
            ControllerKind::Radio => RADIO_FILE_EXTENSION,
            ControllerKind::Rotator => ROTATOR_FILE_EXTENSION,
        }
    }

    fn title_key(self) -> &'static str {
        match self {
            ControllerKind::Radio => "title-radio-control",
            ControllerKind::Rotator => "title-rotator-control",
        }
    }

    fn missing_config_key(self) -> &'static str {
        match self {
            ControllerKind::Radio => "error-no-radio",
            ControllerKind::Rotator => "error-no-rotator",
        }
    }

    fn icon(self) -> &'static str {
        match self {
            ControllerKind::Radio => ICON_RADIO,
            ControllerKind::Rotator => ICON_ANTENNA,
        }
    }
}

impl fmt::Display for ControllerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ControllerKind::Radio => f.write_str("radio"),
            ControllerKind::Rotator => f.write_str("rotator"),
        }
    }
}

/// Configured devices of one kind and the one being controlled
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControllerSession {
    devices: Vec<String>,
    selected: usize,
}

impl ControllerSession {
    /// Build a session from the hardware configuration directory.
    ///
    /// Fails with [`Error::NoDeviceConfigured`] when no device of this kind
    /// is configured.
    pub fn new(kind: ControllerKind, hwconf_dir: &Path) -> Result<Self> {
        let devices = list_file_stems(hwconf_dir, kind.file_extension()).unwrap_or_else(|e| {
            warn!(error = %e, dir = ?hwconf_dir, "Could not read hardware configuration");
            Vec::new()
        });

        if devices.is_empty() {
            return Err(Error::NoDeviceConfigured { kind });
        }

        Ok(Self {
            devices,
            selected: 0,
        })
    }

    pub fn devices(&self) -> &[String] {
        &self.devices
    }

    /// Currently selected device
    pub fn device(&self) -> &str {
        &self.devices[self.selected]
    }

    /// Select a device by index; false when out of range
    pub fn select(&mut self, index: usize) -> bool {
        if index < self.devices.len() {
            self.selected = index;
            true
        } else {
            false
        }
    }
}

/// A live controller: its session and the window embedding it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControllerSlot {
    pub session: ControllerSession,
    pub window: WindowId,
}

/// Result of asking for an auxiliary window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LaunchOutcome {
    /// A new window was created
    Opened(WindowId),
    /// The existing window was brought to the foreground
    Raised(WindowId),
    /// Nothing configured; the user was told
    NotConfigured,
}

/// Open the module's radio or rotator controller, or raise the existing one
pub fn launch_controller<H: WindowHost>(
    module: &mut SatModule,
    kind: ControllerKind,
    ctx: &mut AppContext<H>,
) -> LaunchOutcome {
    if let Some(slot) = module.controller(kind) {
        let window = slot.window;
        ctx.host.present_window(window);
        return LaunchOutcome::Raised(window);
    }

    let session = match ControllerSession::new(kind, &ctx.paths.hwconf_dir) {
        Ok(session) => session,
        Err(e) => {
            warn!(module = %module.name(), error = %e, "Controller not available");
            let locale = ctx.locale();
            ctx.host
                .show_error(&t(locale, "title-error"), &t(locale, kind.missing_config_key()));
            return LaunchOutcome::NotConfigured;
        }
    };

    let title = t_format(ctx.locale(), kind.title_key(), &[("name", module.name())]);
    let spec = WindowSpec::new(
        title,
        WindowContent::Controller {
            kind,
            module: module.name().to_string(),
            device: session.device().to_string(),
        },
    )
    .icon(kind.icon());

    let window = ctx.host.create_window(spec);
    info!(
        module = %module.name(),
        %kind,
        device = %session.device(),
        configured = session.devices().len(),
        window = %window,
        "Opened controller"
    );
    *module.controller_slot_mut(kind) = Some(ControllerSlot { session, window });
    LaunchOutcome::Opened(window)
}

/// Destroy hook: forget the controller embedded in `window`.
///
/// Returns true when the window belonged to one of the module's controllers.
pub fn on_controller_window_destroyed(module: &mut SatModule, window: WindowId) -> bool {
    for kind in [ControllerKind::Radio, ControllerKind::Rotator] {
        let slot = module.controller_slot_mut(kind);
        if slot.as_ref().is_some_and(|s| s.window == window) {
            *slot = None;
            info!(module = %module.name(), %kind, "Controller window closed");
            return true;
        }
    }
    false
}

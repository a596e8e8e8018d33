//! Module Actions and the Popup Menu
//!
//! Every popup menu entry dispatches one [`ModuleAction`]. The menu itself
//! is a plain list of entries so any toolkit can render it.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::constants::{
    ICON_ANTENNA_SMALL, ICON_APP, ICON_CLOCK_SMALL, ICON_CLOSE, ICON_COPY, ICON_DELETE,
    ICON_FULLSCREEN, ICON_LEAVE_FULLSCREEN, ICON_NOTEBOOK, ICON_PLANNER_SMALL, ICON_PROPERTIES,
    ICON_RADIO_SMALL,
};
use crate::domain::PresentationState;
use crate::error::{Error, Result};
use crate::host::WindowId;
use crate::i18n::{Locale, t};
use crate::module::LaunchOutcome;

/// Popup menu actions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ModuleAction {
    /// Detach / attach the module
    ToggleDock,
    /// Enter / leave fullscreen
    ToggleFullscreen,
    SkyAtGlance,
    TimeController,
    RadioControl,
    AntennaControl,
    Configure,
    Clone,
    Delete,
    Close,
}

impl ModuleAction {
    pub const ALL: [ModuleAction; 10] = [
        ModuleAction::ToggleDock,
        ModuleAction::ToggleFullscreen,
        ModuleAction::SkyAtGlance,
        ModuleAction::TimeController,
        ModuleAction::RadioControl,
        ModuleAction::AntennaControl,
        ModuleAction::Configure,
        ModuleAction::Clone,
        ModuleAction::Delete,
        ModuleAction::Close,
    ];

    /// Name used on the command line
    pub fn name(self) -> &'static str {
        match self {
            ModuleAction::ToggleDock => "toggle-dock",
            ModuleAction::ToggleFullscreen => "toggle-fullscreen",
            ModuleAction::SkyAtGlance => "sky-at-glance",
            ModuleAction::TimeController => "time-controller",
            ModuleAction::RadioControl => "radio-control",
            ModuleAction::AntennaControl => "antenna-control",
            ModuleAction::Configure => "configure",
            ModuleAction::Clone => "clone",
            ModuleAction::Delete => "delete",
            ModuleAction::Close => "close",
        }
    }
}

impl fmt::Display for ModuleAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ModuleAction {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|action| action.name() == s)
            .ok_or_else(|| Error::Invalid {
                message: format!("unknown action '{s}'"),
            })
    }
}

/// What a dispatched action ended up doing
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ActionOutcome {
    /// Module is now in this state
    Presentation { state: PresentationState },
    /// Auxiliary window request (controller, time controller)
    Launched { launch: LaunchOutcome },
    SkyGlanceOpened { window: WindowId },
    ConfigureRequested,
    /// A controller is active
    ConfigureRefused,
    Cloned { target: String, opened: bool },
    CloneCancelled,
    /// The module file could not be copied
    CloneFailed,
    Closed,
    Deleted,
    DeleteCancelled,
    DeleteFailed,
    /// Nothing to act on
    Ignored,
}

/// One popup menu entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuEntry {
    Item {
        action: ModuleAction,
        label: String,
        icon: &'static str,
    },
    Separator,
}

impl MenuEntry {
    fn item(action: ModuleAction, locale: Locale, key: &str, icon: &'static str) -> Self {
        MenuEntry::Item {
            action,
            label: t(locale, key),
            icon,
        }
    }

    pub fn action(&self) -> Option<ModuleAction> {
        match self {
            MenuEntry::Item { action, .. } => Some(*action),
            MenuEntry::Separator => None,
        }
    }
}

/// Popup menu of a module in `state`
pub fn popup_menu(state: PresentationState, locale: Locale) -> Vec<MenuEntry> {
    use ModuleAction as A;

    let dock = match state {
        PresentationState::Docked => MenuEntry::item(A::ToggleDock, locale, "menu-detach", ICON_APP),
        _ => MenuEntry::item(A::ToggleDock, locale, "menu-attach", ICON_NOTEBOOK),
    };
    let fullscreen = match state {
        PresentationState::Fullscreen => MenuEntry::item(
            A::ToggleFullscreen,
            locale,
            "menu-leave-fullscreen",
            ICON_LEAVE_FULLSCREEN,
        ),
        _ => MenuEntry::item(A::ToggleFullscreen, locale, "menu-fullscreen", ICON_FULLSCREEN),
    };

    vec![
        dock,
        fullscreen,
        MenuEntry::Separator,
        MenuEntry::item(A::SkyAtGlance, locale, "menu-sky-at-glance", ICON_PLANNER_SMALL),
        MenuEntry::item(A::TimeController, locale, "menu-time-controller", ICON_CLOCK_SMALL),
        MenuEntry::Separator,
        MenuEntry::item(A::RadioControl, locale, "menu-radio-control", ICON_RADIO_SMALL),
        MenuEntry::item(A::AntennaControl, locale, "menu-antenna-control", ICON_ANTENNA_SMALL),
        MenuEntry::Separator,
        MenuEntry::item(A::Configure, locale, "menu-configure", ICON_PROPERTIES),
        MenuEntry::item(A::Clone, locale, "menu-clone", ICON_COPY),
        MenuEntry::Separator,
        MenuEntry::item(A::Delete, locale, "menu-delete", ICON_DELETE),
        MenuEntry::item(A::Close, locale, "menu-close", ICON_CLOSE),
    ]
}

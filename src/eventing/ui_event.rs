//! UI Events
//!
//! Notifications emitted by the workspace for whatever renders the
//! application: state changes, opened windows, toasts.

use serde::Serialize;

use crate::domain::PresentationState;
use crate::host::WindowId;

/// Workspace → UI notifications
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum UiEvent {
    /// A module was opened in the given state
    ModuleOpened {
        module: String,
        state: PresentationState,
    },

    /// A module moved between docked, windowed and fullscreen
    PresentationChanged {
        module: String,
        from: PresentationState,
        to: PresentationState,
    },

    /// An auxiliary window was opened for a module
    WindowOpened { module: String, window: WindowId },

    /// The external module configuration dialog should be shown
    ConfigureRequested { module: String },

    /// `source` was copied to `target`
    ModuleCloned {
        source: String,
        target: String,
        opened: bool,
    },

    ModuleClosed { module: String },

    ModuleDeleted { module: String },

    /// Display a toast notification
    Toast {
        /// Message to display
        message: String,
        /// Whether this is an error (affects styling)
        is_error: bool,
    },
}

impl UiEvent {
    /// Error toast
    pub fn error_toast(message: impl Into<String>) -> Self {
        Self::Toast {
            message: message.into(),
            is_error: true,
        }
    }
}

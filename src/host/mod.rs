//! Window Host - Toolkit Boundary
//!
//! Everything the presentation layer needs from a windowing toolkit goes
//! through [`WindowHost`]: top-level window lifecycle, the manager notebook
//! that hosts docked module content, divider positions, and modal dialogs.
//! Toolkit events flow back in as [`WindowEvent`]s.

mod headless;

pub use headless::*;

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::app::CloneDialog;
use crate::domain::{PanePositions, Point, Size};
use crate::module::{ControllerKind, SkyGlanceRequest};

/// Opaque handle of a top-level window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct WindowId(Uuid);

impl WindowId {
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }
}

impl Default for WindowId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for WindowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// What a top-level window shows
#[derive(Debug, Clone, PartialEq)]
pub enum WindowContent {
    /// A floating module
    Module { name: String },
    /// Radio or rotator control panel for a module
    Controller {
        kind: ControllerKind,
        module: String,
        device: String,
    },
    /// Sky-at-a-glance pass chart
    SkyGlance(SkyGlanceRequest),
    /// Time controller for a module
    TimeController { module: String },
}

/// Parameters of a new top-level window
#[derive(Debug, Clone, PartialEq)]
pub struct WindowSpec {
    pub title: String,
    pub icon: Option<&'static str>,
    /// Size hint; the toolkit picks one when absent
    pub default_size: Option<Size>,
    /// Initial position; the window manager places it when absent
    pub position: Option<Point>,
    pub fullscreen: bool,
    pub transient_for: Option<WindowId>,
    pub content: WindowContent,
}

impl WindowSpec {
    pub fn new(title: impl Into<String>, content: WindowContent) -> Self {
        Self {
            title: title.into(),
            icon: None,
            default_size: None,
            position: None,
            fullscreen: false,
            transient_for: None,
            content,
        }
    }

    pub fn icon(mut self, icon: &'static str) -> Self {
        self.icon = Some(icon);
        self
    }

    pub fn default_size(mut self, size: Option<Size>) -> Self {
        self.default_size = size;
        self
    }

    pub fn position(mut self, position: Option<Point>) -> Self {
        self.position = position;
        self
    }

    pub fn fullscreen(mut self, fullscreen: bool) -> Self {
        self.fullscreen = fullscreen;
        self
    }

    pub fn transient_for(mut self, parent: WindowId) -> Self {
        self.transient_for = Some(parent);
        self
    }
}

/// Toolkit events routed back into the workspace
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowEvent {
    /// Window was resized or moved
    Configure {
        window: WindowId,
        size: Size,
        maximized: bool,
    },
    /// Window was destroyed (closed by the user or the window manager)
    Destroyed { window: WindowId },
}

/// How a modal dialog was dismissed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DialogResponse {
    Accept,
    Cancel,
    /// Closed without choosing a button
    Interrupted,
}

/// Windowing toolkit seen from the presentation layer
pub trait WindowHost {
    // ==================== Windows ====================

    /// The application's main window, default transient parent
    fn main_window(&self) -> WindowId;

    fn create_window(&mut self, spec: WindowSpec) -> WindowId;

    /// Destroying an unknown or already destroyed window is a no-op
    fn destroy_window(&mut self, window: WindowId);

    /// Raise a window to the foreground
    fn present_window(&mut self, window: WindowId);

    fn set_fullscreen(&mut self, window: WindowId, fullscreen: bool);

    fn set_default_size(&mut self, window: WindowId, size: Size);

    fn move_window(&mut self, window: WindowId, position: Point);

    fn set_transient_for(&mut self, window: WindowId, parent: WindowId);

    fn is_visible(&self, window: WindowId) -> bool;

    /// Position as the toolkit reports it (gravity aware)
    fn window_position(&self, window: WindowId) -> Option<Point>;

    fn screen_size(&self) -> Size;

    // ==================== Module content ====================

    /// Append a module's content to the manager notebook
    fn dock_content(&mut self, module: &str);

    /// Take a module's content out of the manager notebook
    fn undock_content(&mut self, module: &str);

    /// Size currently allocated to a module's content
    fn content_size(&self, module: &str) -> Size;

    fn pane_positions(&self, module: &str) -> PanePositions;

    fn set_pane_positions(&mut self, module: &str, panes: PanePositions);

    // ==================== Dialogs ====================

    /// Modal error message
    fn show_error(&mut self, title: &str, message: &str);

    /// Modal yes/no question; `true` on yes
    fn confirm(&mut self, message: &str) -> bool;

    /// Run the clone dialog until the user dismisses it
    fn run_clone_dialog(&mut self, dialog: &mut CloneDialog) -> DialogResponse;

    /// Audible feedback for rejected input
    fn beep(&mut self);
}

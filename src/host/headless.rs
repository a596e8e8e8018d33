//! Headless Host
//!
//! A [`WindowHost`] without a display. It keeps a model of every window,
//! the notebook and the divider positions, answers dialogs from scripted
//! responses, and lets callers simulate user input (moving, resizing and
//! closing windows). Used by the command line driver and throughout the
//! tests.

use ahash::AHashMap;
use std::collections::VecDeque;
use tracing::debug;

use super::{DialogResponse, WindowContent, WindowEvent, WindowHost, WindowId, WindowSpec};
use crate::app::CloneDialog;
use crate::domain::{PanePositions, Point, Size};

/// Live state of a headless window
#[derive(Debug, Clone)]
pub struct WindowRecord {
    pub spec: WindowSpec,
    pub fullscreen: bool,
    pub default_size: Option<Size>,
    pub position: Option<Point>,
    pub transient_for: Option<WindowId>,
    pub visible: bool,
    /// Number of times the window was raised
    pub presented: usize,
}

/// Scripted user interaction with one clone dialog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CloneScript {
    /// Keystrokes typed after clearing the name entry
    pub typed: String,
    pub open_when_created: bool,
    pub response: DialogResponse,
}

impl CloneScript {
    /// Type `name`, keep "open when created", press OK
    pub fn accept(name: &str) -> Self {
        Self {
            typed: name.to_string(),
            open_when_created: true,
            response: DialogResponse::Accept,
        }
    }
}

/// Error dialog shown through the host
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShownError {
    pub title: String,
    pub message: String,
}

#[derive(Debug)]
pub struct HeadlessHost {
    main_window: WindowId,
    screen: Size,
    default_content_size: Size,
    windows: AHashMap<WindowId, WindowRecord>,
    notebook: Vec<String>,
    content_sizes: AHashMap<String, Size>,
    panes: AHashMap<String, PanePositions>,
    confirm_answers: VecDeque<bool>,
    clone_scripts: VecDeque<CloneScript>,
    /// Questions asked through `confirm`
    pub confirmations: Vec<String>,
    /// Error dialogs shown
    pub errors: Vec<ShownError>,
    /// Final entry text of every clone dialog run
    pub clone_entries: Vec<String>,
    pub beeps: usize,
}

impl HeadlessHost {
    pub fn new(screen: Size) -> Self {
        Self {
            main_window: WindowId::new(),
            screen,
            default_content_size: Size::new(640, 480),
            windows: AHashMap::new(),
            notebook: Vec::new(),
            content_sizes: AHashMap::new(),
            panes: AHashMap::new(),
            confirm_answers: VecDeque::new(),
            clone_scripts: VecDeque::new(),
            confirmations: Vec::new(),
            errors: Vec::new(),
            clone_entries: Vec::new(),
            beeps: 0,
        }
    }

    // ==================== Scripting ====================

    /// Answer the next `confirm` with `answer`; unscripted questions get "no"
    pub fn push_confirm(&mut self, answer: bool) {
        self.confirm_answers.push_back(answer);
    }

    /// Drive the next clone dialog; unscripted dialogs are cancelled
    pub fn push_clone_script(&mut self, script: CloneScript) {
        self.clone_scripts.push_back(script);
    }

    pub fn set_content_size(&mut self, module: &str, size: Size) {
        self.content_sizes.insert(module.to_string(), size);
    }

    // ==================== Simulated user input ====================

    /// User drags a divider
    pub fn drag_panes(&mut self, module: &str, panes: PanePositions) {
        self.panes.insert(module.to_string(), panes);
    }

    /// User moves and resizes a window; returns the toolkit event
    pub fn configure(&mut self, window: WindowId, position: Point, size: Size) -> WindowEvent {
        if let Some(record) = self.windows.get_mut(&window) {
            record.position = Some(position);
        }
        WindowEvent::Configure {
            window,
            size,
            maximized: false,
        }
    }

    /// User maximizes a window; returns the toolkit event
    pub fn maximize(&mut self, window: WindowId) -> WindowEvent {
        if let Some(record) = self.windows.get_mut(&window) {
            record.position = Some(Point::new(0, 0));
        }
        WindowEvent::Configure {
            window,
            size: self.screen,
            maximized: true,
        }
    }

    pub fn set_visible(&mut self, window: WindowId, visible: bool) {
        if let Some(record) = self.windows.get_mut(&window) {
            record.visible = visible;
        }
    }

    /// User closes a window through the window manager
    pub fn close_by_user(&mut self, window: WindowId) -> WindowEvent {
        self.windows.remove(&window);
        WindowEvent::Destroyed { window }
    }

    // ==================== Inspection ====================

    pub fn window(&self, window: WindowId) -> Option<&WindowRecord> {
        self.windows.get(&window)
    }

    pub fn is_live(&self, window: WindowId) -> bool {
        self.windows.contains_key(&window)
    }

    pub fn window_count(&self) -> usize {
        self.windows.len()
    }

    /// Live windows whose content matches `pred`
    pub fn windows_with<F>(&self, pred: F) -> Vec<WindowId>
    where
        F: Fn(&WindowContent) -> bool,
    {
        let mut ids: Vec<WindowId> = self
            .windows
            .iter()
            .filter(|(_, record)| pred(&record.spec.content))
            .map(|(id, _)| *id)
            .collect();
        ids.sort();
        ids
    }

    pub fn notebook(&self) -> &[String] {
        &self.notebook
    }
}

impl Default for HeadlessHost {
    fn default() -> Self {
        Self::new(Size::new(1920, 1080))
    }
}

impl WindowHost for HeadlessHost {
    fn main_window(&self) -> WindowId {
        self.main_window
    }

    fn create_window(&mut self, spec: WindowSpec) -> WindowId {
        let id = WindowId::new();
        debug!(window = %id, title = %spec.title, "create window");
        let record = WindowRecord {
            fullscreen: spec.fullscreen,
            default_size: spec.default_size,
            position: spec.position,
            transient_for: spec.transient_for,
            visible: true,
            presented: 0,
            spec,
        };
        self.windows.insert(id, record);
        id
    }

    fn destroy_window(&mut self, window: WindowId) {
        debug!(window = %window, "destroy window");
        self.windows.remove(&window);
    }

    fn present_window(&mut self, window: WindowId) {
        if let Some(record) = self.windows.get_mut(&window) {
            record.visible = true;
            record.presented += 1;
        }
    }

    fn set_fullscreen(&mut self, window: WindowId, fullscreen: bool) {
        if let Some(record) = self.windows.get_mut(&window) {
            record.fullscreen = fullscreen;
        }
    }

    fn set_default_size(&mut self, window: WindowId, size: Size) {
        if let Some(record) = self.windows.get_mut(&window) {
            record.default_size = Some(size);
        }
    }

    fn move_window(&mut self, window: WindowId, position: Point) {
        if let Some(record) = self.windows.get_mut(&window) {
            record.position = Some(position);
        }
    }

    fn set_transient_for(&mut self, window: WindowId, parent: WindowId) {
        if let Some(record) = self.windows.get_mut(&window) {
            record.transient_for = Some(parent);
        }
    }

    fn is_visible(&self, window: WindowId) -> bool {
        self.windows.get(&window).is_some_and(|r| r.visible)
    }

    fn window_position(&self, window: WindowId) -> Option<Point> {
        self.windows
            .get(&window)
            .map(|r| r.position.unwrap_or_default())
    }

    fn screen_size(&self) -> Size {
        self.screen
    }

    fn dock_content(&mut self, module: &str) {
        if !self.notebook.iter().any(|m| m == module) {
            self.notebook.push(module.to_string());
        }
    }

    fn undock_content(&mut self, module: &str) {
        self.notebook.retain(|m| m != module);
    }

    fn content_size(&self, module: &str) -> Size {
        self.content_sizes
            .get(module)
            .copied()
            .unwrap_or(self.default_content_size)
    }

    fn pane_positions(&self, module: &str) -> PanePositions {
        self.panes.get(module).copied().unwrap_or_default()
    }

    fn set_pane_positions(&mut self, module: &str, panes: PanePositions) {
        self.panes.insert(module.to_string(), panes);
    }

    fn show_error(&mut self, title: &str, message: &str) {
        self.errors.push(ShownError {
            title: title.to_string(),
            message: message.to_string(),
        });
    }

    fn confirm(&mut self, message: &str) -> bool {
        self.confirmations.push(message.to_string());
        self.confirm_answers.pop_front().unwrap_or(false)
    }

    fn run_clone_dialog(&mut self, dialog: &mut CloneDialog) -> DialogResponse {
        let Some(script) = self.clone_scripts.pop_front() else {
            return DialogResponse::Cancel;
        };

        dialog.clear_name();
        for c in script.typed.chars() {
            let mut buf = [0u8; 4];
            if dialog.type_text(c.encode_utf8(&mut buf)).rejected > 0 {
                self.beep();
            }
        }
        dialog.set_open_when_created(script.open_when_created);
        self.clone_entries.push(dialog.name().to_string());

        // OK can't be pressed while it is insensitive
        match script.response {
            DialogResponse::Accept if !dialog.accept_enabled() => DialogResponse::Cancel,
            response => response,
        }
    }

    fn beep(&mut self) {
        self.beeps += 1;
    }
}

//! Workspace - Open Modules and Action Dispatch
//!
//! The workspace owns the application context and every open module. Popup
//! menu actions are routed through a dispatch table to the module
//! operations; toolkit window events are routed back to the module owning
//! the window.

use tracing::{error, info, warn};

use super::{AppContext, ModuleManager};
use crate::domain::{PanePositions, PresentationState, Size};
use crate::error::{Error, Result};
use crate::eventing::{ActionOutcome, MenuEntry, ModuleAction, UiEvent, popup_menu};
use crate::helpers::{module_file_path, remove_file};
use crate::host::{WindowEvent, WindowHost, WindowId};
use crate::i18n::{t, t_format};
use crate::module::{
    ControllerKind, LaunchOutcome, SatModule, float_module, launch_controller,
    on_controller_window_destroyed, open_sky_at_glance, open_time_controller, restore_position,
    toggle_dock, toggle_fullscreen, track_configure,
};

/// Handler of one popup action on the named module
type ActionHandler<H> = fn(&mut Workspace<H>, &str) -> Result<ActionOutcome>;

/// Dispatch table: popup action → handler
fn handler_for<H: WindowHost>(action: ModuleAction) -> ActionHandler<H> {
    match action {
        ModuleAction::ToggleDock => on_toggle_dock,
        ModuleAction::ToggleFullscreen => on_toggle_fullscreen,
        ModuleAction::SkyAtGlance => on_sky_at_glance,
        ModuleAction::TimeController => on_time_controller,
        ModuleAction::RadioControl => on_radio_control,
        ModuleAction::AntennaControl => on_antenna_control,
        ModuleAction::Configure => on_configure,
        ModuleAction::Clone => Workspace::clone_module,
        ModuleAction::Delete => Workspace::delete_module,
        ModuleAction::Close => on_close,
    }
}

pub struct Workspace<H> {
    pub ctx: AppContext<H>,
    pub(crate) manager: ModuleManager,
}

impl<H: WindowHost> Workspace<H> {
    pub fn new(ctx: AppContext<H>) -> Self {
        Self {
            ctx,
            manager: ModuleManager::new(),
        }
    }

    pub fn manager(&self) -> &ModuleManager {
        &self.manager
    }

    pub fn module(&self, name: &str) -> Option<&SatModule> {
        self.manager.get(name)
    }

    /// Popup menu for the named module
    pub fn popup_menu(&self, name: &str) -> Option<Vec<MenuEntry>> {
        let module = self.manager.get(name)?;
        Some(popup_menu(module.state(), self.ctx.locale()))
    }

    /// Run a popup action on the named module
    pub fn dispatch(&mut self, name: &str, action: ModuleAction) -> ActionOutcome {
        if !self.manager.contains(name) {
            error!(bug = true, module = name, %action, "Action for a module that is not open");
            return ActionOutcome::Ignored;
        }

        let handler = handler_for::<H>(action);
        match handler(self, name) {
            Ok(outcome) => outcome,
            Err(e) => {
                error!(module = name, %action, error = %e, "Action failed");
                ActionOutcome::Ignored
            }
        }
    }

    // ==================== Opening ====================

    /// Open `<modules dir>/<name>.mod` in its persisted presentation state.
    ///
    /// An already open module is only raised.
    pub fn open_module(&mut self, name: &str) -> Result<PresentationState> {
        if let Some(module) = self.manager.get(name) {
            if let Some(window) = module.host_window() {
                self.ctx.host.present_window(window);
            }
            return Ok(module.state());
        }

        let path = module_file_path(&self.ctx.paths.modules_dir, name);
        if !path.exists() {
            return Err(Error::ModuleNotFound {
                name: name.to_string(),
            });
        }

        let module = SatModule::load(name, &self.ctx.paths.modules_dir)?;
        let state = module.persisted_state();
        Ok(self.present_module(module, state, PanePositions::UNSET, None))
    }

    /// Show a freshly loaded module in `state` and take ownership of it.
    ///
    /// Floating windows are sized from `size`, else from the persisted
    /// geometry. Set pane positions are applied to the module content.
    pub(crate) fn present_module(
        &mut self,
        mut module: SatModule,
        state: PresentationState,
        panes: PanePositions,
        size: Option<Size>,
    ) -> PresentationState {
        match state {
            PresentationState::Docked => {
                self.manager
                    .notebook_mut()
                    .dock(module.name(), &mut self.ctx.host);
                module.saved_panes = panes;
            }
            PresentationState::Windowed | PresentationState::Fullscreen => {
                let size = size.unwrap_or_else(|| module.persisted_size_or_default());
                let position = restore_position(&module, &self.ctx.prefs);
                let fullscreen = state == PresentationState::Fullscreen;
                float_module(&mut module, &mut self.ctx, Some(size), position, fullscreen);
            }
        }
        if !panes.is_unset() {
            self.ctx.host.set_pane_positions(module.name(), panes);
        }

        module.persist_state();
        info!(module = %module.name(), %state, "Opened module");
        self.ctx.emit(UiEvent::ModuleOpened {
            module: module.name().to_string(),
            state,
        });
        self.manager.insert(module);
        state
    }

    // ==================== Closing ====================

    /// Close the module: auxiliary windows first, then save, then remove it
    /// from its host.
    pub fn close_module(&mut self, name: &str) -> ActionOutcome {
        let Some(mut module) = self.manager.remove(name) else {
            error!(bug = true, module = name, "Close requested for a module that is not open");
            return ActionOutcome::Ignored;
        };

        for window in module.take_auxiliary_windows() {
            self.ctx.host.destroy_window(window);
        }

        if let Err(e) = module.save() {
            error!(module = name, error = %e, "Failed to save module");
        }

        match module.host_window() {
            Some(window) => self.ctx.host.destroy_window(window),
            None => self
                .manager
                .notebook_mut()
                .undock(module.name(), &mut self.ctx.host),
        }

        info!(module = name, "Closed module");
        self.ctx.emit(UiEvent::ModuleClosed {
            module: name.to_string(),
        });
        ActionOutcome::Closed
    }

    /// Close every open module
    pub fn close_all(&mut self) {
        for name in self.manager.names() {
            self.close_module(&name);
        }
    }

    /// Close the module, then remove its file after confirmation
    pub fn delete_module(&mut self, name: &str) -> Result<ActionOutcome> {
        let file = match self.manager.get(name) {
            Some(module) => module.file().to_path_buf(),
            None => module_file_path(&self.ctx.paths.modules_dir, name),
        };
        self.close_module(name);

        let locale = self.ctx.locale();
        let file_name = file.display().to_string();
        let question = t_format(locale, "confirm-delete", &[("file", &file_name)]);
        if !self.ctx.host.confirm(&question) {
            info!(module = name, "Delete cancelled by user");
            return Ok(ActionOutcome::DeleteCancelled);
        }

        if let Err(e) = remove_file(&file) {
            error!(module = name, path = ?file, error = %e, "Failed to delete module file");
            self.ctx.emit(UiEvent::error_toast(t_format(
                locale,
                "toast-delete-failed",
                &[("file", &file_name)],
            )));
            return Ok(ActionOutcome::DeleteFailed);
        }

        info!(module = name, path = ?file, "Module deleted permanently");
        self.ctx.emit(UiEvent::ModuleDeleted {
            module: name.to_string(),
        });
        Ok(ActionOutcome::Deleted)
    }

    // ==================== Window events ====================

    pub fn handle_window_event(&mut self, event: WindowEvent) {
        match event {
            WindowEvent::Configure {
                window,
                size,
                maximized,
            } => {
                let Some(name) = self.owner_of_host_window(window) else {
                    return;
                };
                if let Some(module) = self.manager.get_mut(&name) {
                    track_configure(module, &self.ctx.host, window, size, maximized);
                }
            }
            WindowEvent::Destroyed { window } => self.on_window_destroyed(window),
        }
    }

    fn owner_of_host_window(&self, window: WindowId) -> Option<String> {
        self.manager.find_by_host_window(window).map(str::to_string)
    }

    fn on_window_destroyed(&mut self, window: WindowId) {
        // Closing a floating module window closes the module
        if let Some(name) = self.owner_of_host_window(window) {
            self.close_module(&name);
            return;
        }

        let Some(name) = self
            .manager
            .find_by_auxiliary_window(window)
            .map(str::to_string)
        else {
            return;
        };
        if let Some(module) = self.manager.get_mut(&name) {
            if !on_controller_window_destroyed(module, window)
                && module.time_controller_mut().on_window_destroyed(window)
            {
                info!(module = %name, "Time controller closed");
            }
        }
    }
}

// ==================== Handlers ====================

fn module_mut<'a>(manager: &'a mut ModuleManager, name: &str) -> Result<&'a mut SatModule> {
    manager.get_mut(name).ok_or_else(|| Error::ModuleNotFound {
        name: name.to_string(),
    })
}

fn on_toggle_dock<H: WindowHost>(ws: &mut Workspace<H>, name: &str) -> Result<ActionOutcome> {
    let (module, notebook) = ws
        .manager
        .module_and_notebook(name)
        .ok_or_else(|| Error::ModuleNotFound {
            name: name.to_string(),
        })?;
    let state = toggle_dock(module, notebook, &mut ws.ctx);
    Ok(ActionOutcome::Presentation { state })
}

fn on_toggle_fullscreen<H: WindowHost>(
    ws: &mut Workspace<H>,
    name: &str,
) -> Result<ActionOutcome> {
    let (module, notebook) = ws
        .manager
        .module_and_notebook(name)
        .ok_or_else(|| Error::ModuleNotFound {
            name: name.to_string(),
        })?;
    let state = toggle_fullscreen(module, notebook, &mut ws.ctx);
    Ok(ActionOutcome::Presentation { state })
}

fn on_sky_at_glance<H: WindowHost>(ws: &mut Workspace<H>, name: &str) -> Result<ActionOutcome> {
    let module = module_mut(&mut ws.manager, name)?;
    let window = open_sky_at_glance(module, &mut ws.ctx);
    ws.ctx.emit(UiEvent::WindowOpened {
        module: name.to_string(),
        window,
    });
    Ok(ActionOutcome::SkyGlanceOpened { window })
}

fn on_time_controller<H: WindowHost>(ws: &mut Workspace<H>, name: &str) -> Result<ActionOutcome> {
    let module = module_mut(&mut ws.manager, name)?;
    let launch = open_time_controller(module, &mut ws.ctx);
    announce_launch(ws, name, launch);
    Ok(ActionOutcome::Launched { launch })
}

fn on_radio_control<H: WindowHost>(ws: &mut Workspace<H>, name: &str) -> Result<ActionOutcome> {
    launch(ws, name, ControllerKind::Radio)
}

fn on_antenna_control<H: WindowHost>(ws: &mut Workspace<H>, name: &str) -> Result<ActionOutcome> {
    launch(ws, name, ControllerKind::Rotator)
}

fn launch<H: WindowHost>(
    ws: &mut Workspace<H>,
    name: &str,
    kind: ControllerKind,
) -> Result<ActionOutcome> {
    let module = module_mut(&mut ws.manager, name)?;
    let launch = launch_controller(module, kind, &mut ws.ctx);
    announce_launch(ws, name, launch);
    Ok(ActionOutcome::Launched { launch })
}

fn announce_launch<H: WindowHost>(ws: &Workspace<H>, name: &str, launch: LaunchOutcome) {
    if let LaunchOutcome::Opened(window) = launch {
        ws.ctx.emit(UiEvent::WindowOpened {
            module: name.to_string(),
            window,
        });
    }
}

fn on_close<H: WindowHost>(ws: &mut Workspace<H>, name: &str) -> Result<ActionOutcome> {
    Ok(ws.close_module(name))
}

fn on_configure<H: WindowHost>(ws: &mut Workspace<H>, name: &str) -> Result<ActionOutcome> {
    let module = module_mut(&mut ws.manager, name)?;
    if module.has_active_controller() {
        warn!(module = name, "Refusing to configure a module with an active controller");
        let locale = ws.ctx.locale();
        ws.ctx
            .host
            .show_error(&t(locale, "title-error"), &t(locale, "error-configure-busy"));
        return Ok(ActionOutcome::ConfigureRefused);
    }

    ws.ctx.emit(UiEvent::ConfigureRequested {
        module: name.to_string(),
    });
    Ok(ActionOutcome::ConfigureRequested)
}

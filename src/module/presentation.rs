//! Presentation State Machine
//!
//! ```text
//!             toggle dock                 toggle fullscreen
//!   Docked ─────────────▶ Windowed ◀──────────────────────▶ Fullscreen
//!     ▲  ◀─────────────────┘                                  │  ▲
//!     │                    toggle dock                        │  │
//!     └───────────────────────────────────────────────────────┘  │
//!     └──────────────────── toggle fullscreen ───────────────────┘
//! ```
//!
//! The module content is owned by the manager notebook while docked and by
//! the module's own window otherwise. Every transition persists the new
//! state and re-parents the time controller window to the new host.

use tracing::info;

use super::SatModule;
use crate::app::{AppContext, Notebook};
use crate::constants::{DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_WIDTH, ICON_APP};
use crate::domain::{PanePositions, Point, Presentation, PresentationState, Size};
use crate::eventing::UiEvent;
use crate::host::{WindowContent, WindowHost, WindowId, WindowSpec};
use crate::states::Preferences;

/// "Detach module" / "Attach module"
pub fn toggle_dock<H: WindowHost>(
    module: &mut SatModule,
    notebook: &mut Notebook,
    ctx: &mut AppContext<H>,
) -> PresentationState {
    let from = module.state();

    match module.presentation {
        Presentation::Docked => {
            // Without a stored size use what the notebook gave the module
            let size = module.persisted_size(ctx.host.content_size(module.name()));
            let position = restore_position(module, &ctx.prefs);

            module.saved_panes = PanePositions::UNSET;
            notebook.undock(module.name(), &mut ctx.host);
            float_module(module, ctx, Some(size), position, false);
        }
        Presentation::Windowed(window) | Presentation::Fullscreen(window) => {
            capture_panes(module, &ctx.host);
            module
                .time_controller
                .reparent(ctx.host.main_window(), &mut ctx.host);

            ctx.host.destroy_window(window);
            module.presentation = Presentation::Docked;
            notebook.dock(module.name(), &mut ctx.host);
            if !module.saved_panes.is_unset() {
                ctx.host
                    .set_pane_positions(module.name(), module.saved_panes);
            }
        }
    }

    finish_transition(module, ctx, from)
}

/// "Fullscreen" / "Leave fullscreen"
pub fn toggle_fullscreen<H: WindowHost>(
    module: &mut SatModule,
    notebook: &mut Notebook,
    ctx: &mut AppContext<H>,
) -> PresentationState {
    let from = module.state();

    match module.presentation {
        Presentation::Docked => {
            module.saved_panes = PanePositions::UNSET;
            notebook.undock(module.name(), &mut ctx.host);
            float_module(module, ctx, None, None, true);
        }
        Presentation::Windowed(window) => {
            module.saved_panes = PanePositions::UNSET;
            ctx.host.set_fullscreen(window, true);
            // Size to fall back to once the window leaves fullscreen
            ctx.host
                .set_default_size(window, Size::new(DEFAULT_WINDOW_WIDTH, DEFAULT_WINDOW_HEIGHT));
            module.presentation = Presentation::Fullscreen(window);
        }
        Presentation::Fullscreen(window) => {
            capture_panes(module, &ctx.host);
            ctx.host.set_fullscreen(window, false);
            ctx.host
                .set_default_size(window, module.persisted_size_or_default());
            if let Some(position) = restore_position(module, &ctx.prefs) {
                ctx.host.move_window(window, position);
            }
            module.presentation = Presentation::Windowed(window);
        }
    }

    finish_transition(module, ctx, from)
}

/// Give a module its own top-level window.
///
/// The module must not be in the notebook anymore.
pub(crate) fn float_module<H: WindowHost>(
    module: &mut SatModule,
    ctx: &mut AppContext<H>,
    size: Option<Size>,
    position: Option<Point>,
    fullscreen: bool,
) -> WindowId {
    let spec = WindowSpec::new(
        module.window_title(),
        WindowContent::Module {
            name: module.name().to_string(),
        },
    )
    .icon(ICON_APP)
    .default_size(size)
    .position(position)
    .fullscreen(fullscreen);

    let window = ctx.host.create_window(spec);
    module.presentation = if fullscreen {
        Presentation::Fullscreen(window)
    } else {
        Presentation::Windowed(window)
    };
    module.time_controller.reparent(window, &mut ctx.host);
    window
}

/// Stored position, when the preference asks for it and both coordinates exist
pub(crate) fn restore_position(module: &SatModule, prefs: &Preferences) -> Option<Point> {
    if prefs.restore_module_window_position() {
        module.persisted_position()
    } else {
        None
    }
}

/// Remember the live divider positions before the module leaves its window
fn capture_panes(module: &mut SatModule, host: &impl WindowHost) {
    let layout = module.layout();
    if layout.uses_panes() {
        module.saved_panes = layout.restrict(host.pane_positions(module.name()));
    }
}

fn finish_transition<H: WindowHost>(
    module: &mut SatModule,
    ctx: &AppContext<H>,
    from: PresentationState,
) -> PresentationState {
    module.persist_state();
    let to = module.state();
    info!(module = %module.name(), %from, %to, "Presentation changed");
    ctx.emit(UiEvent::PresentationChanged {
        module: module.name().to_string(),
        from,
        to,
    });
    to
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::tests::test_context;
    use crate::domain::module_config::keys;
    use crate::host::HeadlessHost;
    use crate::module::open_time_controller;
    use crate::module::sat_module::tests::sample_module;

    fn docked(ctx: &mut AppContext<HeadlessHost>, notebook: &mut Notebook) -> SatModule {
        let module = sample_module("SAT");
        notebook.dock(module.name(), &mut ctx.host);
        module
    }

    fn assert_window_invariant(module: &SatModule, host: &HeadlessHost) {
        match module.state() {
            PresentationState::Docked => {
                assert!(module.host_window().is_none());
                assert!(host.notebook().iter().any(|m| m == module.name()));
            }
            _ => {
                let window = module.host_window().expect("floating module has a window");
                assert!(host.is_live(window));
                assert!(!host.notebook().iter().any(|m| m == module.name()));
            }
        }
    }

    fn stored_state(module: &SatModule) -> Option<i64> {
        module.config().get_int(keys::GLOBAL_SECTION, keys::STATE)
    }

    #[test]
    fn window_exists_iff_not_docked_across_all_transitions() {
        let (mut ctx, _rx, _dir) = test_context();
        let mut notebook = Notebook::default();
        let mut module = docked(&mut ctx, &mut notebook);

        let steps: [fn(&mut SatModule, &mut Notebook, &mut AppContext<HeadlessHost>) -> PresentationState; 6] = [
            toggle_dock,       // Docked -> Windowed
            toggle_fullscreen, // Windowed -> Fullscreen
            toggle_fullscreen, // Fullscreen -> Windowed
            toggle_dock,       // Windowed -> Docked
            toggle_fullscreen, // Docked -> Fullscreen
            toggle_dock,       // Fullscreen -> Docked
        ];
        let expected = [
            PresentationState::Windowed,
            PresentationState::Fullscreen,
            PresentationState::Windowed,
            PresentationState::Docked,
            PresentationState::Fullscreen,
            PresentationState::Docked,
        ];

        for (step, want) in steps.iter().zip(expected) {
            let got = step(&mut module, &mut notebook, &mut ctx);
            assert_eq!(got, want);
            assert_window_invariant(&module, &ctx.host);
            assert_eq!(stored_state(&module), Some(want.as_config_value()));
        }
        // Only the notebook is left, every module window was destroyed
        assert_eq!(ctx.host.window_count(), 0);
    }

    #[test]
    fn undock_uses_persisted_size_and_position() {
        let (mut ctx, _rx, _dir) = test_context();
        let mut notebook = Notebook::default();
        let mut module = docked(&mut ctx, &mut notebook);
        module.persist_geometry(Point::new(40, 60), Size::new(1000, 700));

        toggle_dock(&mut module, &mut notebook, &mut ctx);
        let window = module.host_window().expect("window");
        let record = ctx.host.window(window).expect("live");
        assert_eq!(record.default_size, Some(Size::new(1000, 700)));
        assert_eq!(record.position, Some(Point::new(40, 60)));
        assert!(!record.fullscreen);
        assert_eq!(record.spec.title, "GPREDICT: SAT (home)");
    }

    #[test]
    fn undock_falls_back_to_allocated_size_and_skips_position_when_disabled() {
        let (mut ctx, _rx, _dir) = test_context();
        ctx.prefs.set_restore_module_window_position(false);
        let mut notebook = Notebook::default();
        let mut module = docked(&mut ctx, &mut notebook);
        module.config.set_int(keys::GLOBAL_SECTION, keys::WIN_POS_X, 40);
        module.config.set_int(keys::GLOBAL_SECTION, keys::WIN_POS_Y, 60);
        ctx.host.set_content_size("SAT", Size::new(512, 384));

        toggle_dock(&mut module, &mut notebook, &mut ctx);
        let record = ctx.host.window(module.host_window().expect("window")).expect("live");
        assert_eq!(record.default_size, Some(Size::new(512, 384)));
        assert_eq!(record.position, None);
    }

    #[test]
    fn pane_positions_unset_on_float_and_captured_before_leaving() {
        let (mut ctx, _rx, _dir) = test_context();
        let mut notebook = Notebook::default();
        let mut module = docked(&mut ctx, &mut notebook);
        module.saved_panes = PanePositions::new(1, 2);

        toggle_dock(&mut module, &mut notebook, &mut ctx);
        assert!(module.saved_panes().is_unset());

        ctx.host.drag_panes("SAT", PanePositions::new(220, 310));
        toggle_dock(&mut module, &mut notebook, &mut ctx);
        assert_eq!(module.saved_panes(), PanePositions::new(220, 310));
        // Reapplied after docking
        assert_eq!(ctx.host.pane_positions("SAT"), PanePositions::new(220, 310));

        toggle_fullscreen(&mut module, &mut notebook, &mut ctx);
        assert!(module.saved_panes().is_unset());

        ctx.host.drag_panes("SAT", PanePositions::new(180, 260));
        toggle_fullscreen(&mut module, &mut notebook, &mut ctx);
        assert_eq!(module.saved_panes(), PanePositions::new(180, 260));
    }

    #[test]
    fn single_view_layout_never_captures_panes() {
        let (mut ctx, _rx, _dir) = test_context();
        let mut notebook = Notebook::default();
        let config = crate::domain::ModuleConfig::parse("[GLOBAL]\nLAYOUT = 0\n").expect("parse");
        let mut module =
            SatModule::from_config("ONE", std::path::PathBuf::from("/tmp/ONE.mod"), config);
        notebook.dock("ONE", &mut ctx.host);

        toggle_dock(&mut module, &mut notebook, &mut ctx);
        ctx.host.drag_panes("ONE", PanePositions::new(10, 20));
        toggle_dock(&mut module, &mut notebook, &mut ctx);
        assert!(module.saved_panes().is_unset());
    }

    #[test]
    fn two_pane_layout_captures_primary_only() {
        let (mut ctx, _rx, _dir) = test_context();
        let mut notebook = Notebook::default();
        let config = crate::domain::ModuleConfig::parse("[GLOBAL]\nLAYOUT = 1\n").expect("parse");
        let mut module =
            SatModule::from_config("TWO", std::path::PathBuf::from("/tmp/TWO.mod"), config);
        notebook.dock("TWO", &mut ctx.host);

        toggle_dock(&mut module, &mut notebook, &mut ctx);
        ctx.host.drag_panes("TWO", PanePositions::new(10, 20));
        toggle_dock(&mut module, &mut notebook, &mut ctx);
        assert_eq!(
            module.saved_panes(),
            PanePositions {
                primary: Some(10),
                secondary: None
            }
        );
    }

    #[test]
    fn windowed_to_fullscreen_keeps_window_and_sets_fallback_size() {
        let (mut ctx, _rx, _dir) = test_context();
        let mut notebook = Notebook::default();
        let mut module = docked(&mut ctx, &mut notebook);

        toggle_dock(&mut module, &mut notebook, &mut ctx);
        let window = module.host_window().expect("window");
        toggle_fullscreen(&mut module, &mut notebook, &mut ctx);

        assert_eq!(module.host_window(), Some(window));
        let record = ctx.host.window(window).expect("live");
        assert!(record.fullscreen);
        assert_eq!(record.default_size, Some(Size::new(800, 600)));
    }

    #[test]
    fn leaving_fullscreen_restores_persisted_geometry() {
        let (mut ctx, _rx, _dir) = test_context();
        let mut notebook = Notebook::default();
        let mut module = docked(&mut ctx, &mut notebook);

        toggle_fullscreen(&mut module, &mut notebook, &mut ctx);
        let window = module.host_window().expect("window");
        assert!(ctx.host.window(window).expect("live").fullscreen);

        module.persist_geometry(Point::new(5, 6), Size::new(700, 500));
        toggle_fullscreen(&mut module, &mut notebook, &mut ctx);
        let record = ctx.host.window(window).expect("live");
        assert!(!record.fullscreen);
        assert_eq!(record.default_size, Some(Size::new(700, 500)));
        assert_eq!(record.position, Some(Point::new(5, 6)));
        assert_eq!(module.state(), PresentationState::Windowed);
    }

    #[test]
    fn time_controller_follows_the_module_host() {
        let (mut ctx, _rx, _dir) = test_context();
        let mut notebook = Notebook::default();
        let mut module = docked(&mut ctx, &mut notebook);
        open_time_controller(&mut module, &mut ctx);
        let tmg = module.time_controller().window().expect("open");

        toggle_dock(&mut module, &mut notebook, &mut ctx);
        let window = module.host_window().expect("window");
        assert_eq!(ctx.host.window(tmg).expect("live").transient_for, Some(window));

        toggle_dock(&mut module, &mut notebook, &mut ctx);
        assert_eq!(
            ctx.host.window(tmg).expect("live").transient_for,
            Some(ctx.host.main_window())
        );
    }

    #[test]
    fn transitions_are_announced() {
        let (mut ctx, rx, _dir) = test_context();
        let mut notebook = Notebook::default();
        let mut module = docked(&mut ctx, &mut notebook);

        toggle_fullscreen(&mut module, &mut notebook, &mut ctx);
        let event = rx.try_recv().expect("event");
        assert!(matches!(
            event,
            UiEvent::PresentationChanged {
                from: PresentationState::Docked,
                to: PresentationState::Fullscreen,
                ..
            }
        ));
    }
}

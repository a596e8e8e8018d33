//! Time Controller
//!
//! Each module runs on its own clock, real time shifted by an offset the
//! user sets in the time controller window. That window stays transient for
//! whatever window currently hosts the module.

use chrono::{DateTime, TimeDelta, Utc};
use tracing::{info, warn};

use super::{LaunchOutcome, SatModule};
use crate::app::AppContext;
use crate::constants::ICON_CLOCK;
use crate::host::{WindowContent, WindowHost, WindowId, WindowSpec};
use crate::i18n::t_format;

#[derive(Debug, Clone, Default)]
pub struct TimeController {
    window: Option<WindowId>,
    offset: TimeDelta,
}

impl TimeController {
    pub fn is_active(&self) -> bool {
        self.window.is_some()
    }

    pub fn window(&self) -> Option<WindowId> {
        self.window
    }

    pub fn offset(&self) -> TimeDelta {
        self.offset
    }

    pub fn set_offset(&mut self, offset: TimeDelta) {
        self.offset = offset;
    }

    /// Back to real time
    pub fn reset(&mut self) {
        self.offset = TimeDelta::zero();
    }

    /// Current module time; real time when the offset leaves the
    /// representable range
    pub fn now(&self) -> DateTime<Utc> {
        let now = Utc::now();
        now.checked_add_signed(self.offset).unwrap_or_else(|| {
            warn!(offset = %self.offset, "Module time out of range, using real time");
            now
        })
    }

    /// Make the controller window transient for `parent`, if it is open
    pub fn reparent(&self, parent: WindowId, host: &mut impl WindowHost) {
        if let Some(window) = self.window {
            host.set_transient_for(window, parent);
        }
    }

    pub(crate) fn take_window(&mut self) -> Option<WindowId> {
        self.window.take()
    }

    /// Forget the window if it is `window`; true when it was
    pub(crate) fn on_window_destroyed(&mut self, window: WindowId) -> bool {
        if self.window == Some(window) {
            self.window = None;
            true
        } else {
            false
        }
    }
}

/// Open the module's time controller, or raise it when already open
pub fn open_time_controller<H: WindowHost>(
    module: &mut SatModule,
    ctx: &mut AppContext<H>,
) -> LaunchOutcome {
    if let Some(window) = module.time_controller.window {
        ctx.host.present_window(window);
        return LaunchOutcome::Raised(window);
    }

    let parent = module
        .host_window()
        .unwrap_or_else(|| ctx.host.main_window());
    let title = t_format(
        ctx.locale(),
        "title-time-controller",
        &[("name", module.name())],
    );
    let spec = WindowSpec::new(
        title,
        WindowContent::TimeController {
            module: module.name().to_string(),
        },
    )
    .icon(ICON_CLOCK)
    .transient_for(parent);

    let window = ctx.host.create_window(spec);
    module.time_controller.window = Some(window);
    info!(module = %module.name(), window = %window, "Opened time controller");
    LaunchOutcome::Opened(window)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::tests::test_context;
    use crate::module::sat_module::tests::sample_module;

    #[test]
    fn module_clock_applies_offset() {
        let mut tc = TimeController::default();
        tc.set_offset(TimeDelta::hours(2));
        let diff = tc.now() - Utc::now();
        assert!(diff > TimeDelta::minutes(119));
        tc.reset();
        assert_eq!(tc.offset(), TimeDelta::zero());
    }

    #[test]
    fn out_of_range_offset_falls_back_to_real_time() {
        let mut tc = TimeController::default();
        tc.set_offset(TimeDelta::MAX);
        let diff = tc.now() - Utc::now();
        assert!(diff.abs() < TimeDelta::seconds(5));
        tc.set_offset(TimeDelta::MIN);
        let diff = tc.now() - Utc::now();
        assert!(diff.abs() < TimeDelta::seconds(5));
    }

    #[test]
    fn docked_module_controller_is_transient_for_main_window() {
        let (mut ctx, _rx, _dir) = test_context();
        let mut module = sample_module("SAT");

        let LaunchOutcome::Opened(window) = open_time_controller(&mut module, &mut ctx) else {
            panic!("expected a new window");
        };
        let record = ctx.host.window(window).expect("live");
        assert_eq!(record.transient_for, Some(ctx.host.main_window()));
        assert!(module.time_controller().is_active());
    }

    #[test]
    fn second_open_raises_existing_window() {
        let (mut ctx, _rx, _dir) = test_context();
        let mut module = sample_module("SAT");

        let first = open_time_controller(&mut module, &mut ctx);
        let second = open_time_controller(&mut module, &mut ctx);
        let LaunchOutcome::Opened(window) = first else {
            panic!("expected a new window");
        };
        assert_eq!(second, LaunchOutcome::Raised(window));
        assert_eq!(ctx.host.window(window).expect("live").presented, 1);
        assert_eq!(ctx.host.window_count(), 1);
    }

    #[test]
    fn destroyed_window_is_forgotten() {
        let mut tc = TimeController::default();
        let window = WindowId::new();
        tc.window = Some(window);
        assert!(!tc.on_window_destroyed(WindowId::new()));
        assert!(tc.on_window_destroyed(window));
        assert!(!tc.is_active());
    }
}

//! Window geometry tracking
//!
//! Configure events of a floating module window are captured into the
//! module config so the window comes back where the user left it.

use tracing::debug;

use super::SatModule;
use crate::domain::{Size, WindowGeometry};
use crate::host::{WindowHost, WindowId};

/// Record the geometry of `window` if it is worth keeping.
///
/// Ignored while the window is hidden or maximized, and when the window
/// would lie entirely off screen. Returns true when the config was updated.
pub fn track_configure(
    module: &mut SatModule,
    host: &impl WindowHost,
    window: WindowId,
    size: Size,
    maximized: bool,
) -> bool {
    if module.host_window() != Some(window) || !host.is_visible(window) {
        return false;
    }

    // Spurious events are fired while maximizing
    if maximized {
        return false;
    }

    let Some(origin) = host.window_position(window) else {
        return false;
    };

    let geometry = WindowGeometry::new(origin, size);
    if !geometry.is_on_screen(host.screen_size()) {
        debug!(module = %module.name(), ?geometry, "Ignoring off-screen geometry");
        return false;
    }

    module.persist_geometry(origin, size);
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::module_config::keys;
    use crate::domain::{Point, Presentation};
    use crate::host::{HeadlessHost, WindowContent, WindowHost, WindowSpec};
    use crate::module::sat_module::tests::sample_module;

    fn floating(host: &mut HeadlessHost) -> (SatModule, WindowId) {
        let mut module = sample_module("SAT");
        let window = host.create_window(WindowSpec::new(
            module.window_title(),
            WindowContent::Module {
                name: "SAT".to_string(),
            },
        ));
        module.presentation = Presentation::Windowed(window);
        (module, window)
    }

    fn stored(module: &SatModule, key: &str) -> Option<i64> {
        module.config().get_int(keys::GLOBAL_SECTION, key)
    }

    #[test]
    fn visible_on_screen_geometry_is_persisted() {
        let mut host = HeadlessHost::default();
        let (mut module, window) = floating(&mut host);

        host.configure(window, Point::new(100, 50), Size::new(900, 700));
        assert!(track_configure(&mut module, &host, window, Size::new(900, 700), false));
        assert_eq!(stored(&module, keys::WIN_POS_X), Some(100));
        assert_eq!(stored(&module, keys::WIN_POS_Y), Some(50));
        assert_eq!(stored(&module, keys::WIN_WIDTH), Some(900));
        assert_eq!(stored(&module, keys::WIN_HEIGHT), Some(700));
    }

    #[test]
    fn off_screen_geometry_is_not_persisted() {
        let mut host = HeadlessHost::default();
        let (mut module, window) = floating(&mut host);

        host.configure(window, Point::new(-5000, 10), Size::new(800, 600));
        assert!(!track_configure(&mut module, &host, window, Size::new(800, 600), false));
        for key in [keys::WIN_POS_X, keys::WIN_POS_Y, keys::WIN_WIDTH, keys::WIN_HEIGHT] {
            assert_eq!(stored(&module, key), None);
        }
    }

    #[test]
    fn hidden_or_maximized_windows_are_ignored() {
        let mut host = HeadlessHost::default();
        let (mut module, window) = floating(&mut host);

        host.set_visible(window, false);
        host.configure(window, Point::new(10, 10), Size::new(800, 600));
        assert!(!track_configure(&mut module, &host, window, Size::new(800, 600), false));

        host.set_visible(window, true);
        let event = host.maximize(window);
        let crate::host::WindowEvent::Configure { size, maximized, .. } = event else {
            panic!("expected configure");
        };
        assert!(!track_configure(&mut module, &host, window, size, maximized));
        assert_eq!(stored(&module, keys::WIN_WIDTH), None);
    }

    #[test]
    fn foreign_window_is_ignored() {
        let mut host = HeadlessHost::default();
        let (mut module, _window) = floating(&mut host);
        let other = host.create_window(WindowSpec::new(
            "other",
            WindowContent::TimeController {
                module: "SAT".to_string(),
            },
        ));
        assert!(!track_configure(&mut module, &host, other, Size::new(300, 200), false));
    }
}

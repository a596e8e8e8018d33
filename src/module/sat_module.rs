//! SatModule - One Satellite Tracking Module
//!
//! The module owns its persisted configuration and the presentation-side
//! state (how it is shown, saved divider positions, auxiliary windows).
//! Orbit propagation and the views themselves live elsewhere; this side only
//! needs the satellite catalogue numbers and the ground station reference.

use std::path::{Path, PathBuf};
use parking_lot::RwLock;
use std::sync::Arc;
use tracing::{error, info, warn};

use super::{ControllerKind, ControllerSlot, TimeController};
use crate::constants::{DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_WIDTH, MODULE_WINDOW_TITLE_PREFIX};
use crate::domain::module_config::keys;
use crate::domain::{
    ModuleConfig, ModuleLayout, PanePositions, Point, Presentation, PresentationState, Qth, Size,
};
use crate::error::Result;
use crate::helpers::module_file_path;

/// Shared satellite list; writers (the prediction side) and readers
/// (sky at a glance) go through the lock.
pub type SatelliteList = Arc<RwLock<Vec<u32>>>;

#[derive(Debug)]
pub struct SatModule {
    name: String,
    file: PathBuf,
    qth: Qth,
    layout: ModuleLayout,
    satellites: SatelliteList,
    pub(crate) config: ModuleConfig,
    pub(crate) presentation: Presentation,
    pub(crate) saved_panes: PanePositions,
    pub(crate) radio: Option<ControllerSlot>,
    pub(crate) rotator: Option<ControllerSlot>,
    pub(crate) time_controller: TimeController,
}

impl SatModule {
    /// Load `<dir>/<name>.mod`
    pub fn load(name: &str, modules_dir: &Path) -> Result<Self> {
        let file = module_file_path(modules_dir, name);
        let config = ModuleConfig::load(&file)?;
        info!(module = %name, path = ?file, "Loaded module");
        Ok(Self::from_config(name, file, config))
    }

    /// Build a module from an already parsed configuration.
    ///
    /// Unknown layout values fall back to a single view.
    pub fn from_config(name: &str, file: PathBuf, config: ModuleConfig) -> Self {
        let layout = match config.get_int(keys::GLOBAL_SECTION, keys::LAYOUT) {
            Some(value) => ModuleLayout::try_from(value).unwrap_or_else(|e| {
                error!(bug = true, module = %name, error = %e, "Invalid layout in module file");
                ModuleLayout::Single
            }),
            None => ModuleLayout::Single,
        };

        let qth = Qth::from_file_name(
            config
                .get_str(keys::GLOBAL_SECTION, keys::QTH_FILE)
                .unwrap_or("default.qth"),
        );

        let satellites = config
            .get_int_list(keys::GLOBAL_SECTION, keys::SATELLITES)
            .unwrap_or_default()
            .iter()
            .filter_map(|&catnum| u32::try_from(catnum).ok())
            .collect();

        Self {
            name: name.to_string(),
            file,
            qth,
            layout,
            satellites: Arc::new(RwLock::new(satellites)),
            config,
            presentation: Presentation::Docked,
            saved_panes: PanePositions::UNSET,
            radio: None,
            rotator: None,
            time_controller: TimeController::default(),
        }
    }

    /// Write the configuration back to the module file
    pub fn save(&mut self) -> Result<()> {
        let satellites = self.satellites().into_iter().map(i64::from).collect();
        self.config
            .set_int_list(keys::GLOBAL_SECTION, keys::SATELLITES, satellites);
        self.config.save(&self.file)
    }

    // ==================== Getters ====================

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn file(&self) -> &Path {
        &self.file
    }

    pub fn qth(&self) -> &Qth {
        &self.qth
    }

    pub fn layout(&self) -> ModuleLayout {
        self.layout
    }

    pub fn config(&self) -> &ModuleConfig {
        &self.config
    }

    pub fn presentation(&self) -> Presentation {
        self.presentation
    }

    pub fn state(&self) -> PresentationState {
        self.presentation.state()
    }

    /// Top-level window hosting the module, present iff not docked
    pub fn host_window(&self) -> Option<crate::host::WindowId> {
        self.presentation.window()
    }

    pub fn saved_panes(&self) -> PanePositions {
        self.saved_panes
    }

    pub fn controller(&self, kind: ControllerKind) -> Option<&ControllerSlot> {
        match kind {
            ControllerKind::Radio => self.radio.as_ref(),
            ControllerKind::Rotator => self.rotator.as_ref(),
        }
    }

    pub(crate) fn controller_slot_mut(&mut self, kind: ControllerKind) -> &mut Option<ControllerSlot> {
        match kind {
            ControllerKind::Radio => &mut self.radio,
            ControllerKind::Rotator => &mut self.rotator,
        }
    }

    pub fn has_active_controller(&self) -> bool {
        self.radio.is_some() || self.rotator.is_some()
    }

    pub fn time_controller(&self) -> &TimeController {
        &self.time_controller
    }

    pub fn time_controller_mut(&mut self) -> &mut TimeController {
        &mut self.time_controller
    }

    /// Handle for the prediction side to update the satellite list
    pub fn satellite_list(&self) -> SatelliteList {
        Arc::clone(&self.satellites)
    }

    /// Consistent snapshot of the satellite list
    pub fn satellites(&self) -> Vec<u32> {
        self.satellites.read().clone()
    }

    /// Title of the module's own window
    pub fn window_title(&self) -> String {
        format!("{MODULE_WINDOW_TITLE_PREFIX}: {} ({})", self.name, self.qth.name)
    }

    // ==================== Persisted presentation ====================

    /// Presentation state stored in the module file.
    ///
    /// Unrecognized values are a bug in whatever wrote the file; they are
    /// logged and the module starts docked.
    pub fn persisted_state(&self) -> PresentationState {
        let Some(value) = self.config.get_int(keys::GLOBAL_SECTION, keys::STATE) else {
            return PresentationState::Docked;
        };
        PresentationState::try_from(value).unwrap_or_else(|e| {
            error!(bug = true, module = %self.name, error = %e, "Unknown module state");
            PresentationState::Docked
        })
    }

    pub(crate) fn persist_state(&mut self) {
        let value = self.state().as_config_value();
        self.config
            .set_int(keys::GLOBAL_SECTION, keys::STATE, value);
    }

    /// Persisted window size, each dimension falling back to `fallback`
    pub fn persisted_size(&self, fallback: Size) -> Size {
        Size::new(
            self.config
                .get_i32(keys::GLOBAL_SECTION, keys::WIN_WIDTH)
                .unwrap_or(fallback.width),
            self.config
                .get_i32(keys::GLOBAL_SECTION, keys::WIN_HEIGHT)
                .unwrap_or(fallback.height),
        )
    }

    /// Persisted window size or the 800x600 default
    pub fn persisted_size_or_default(&self) -> Size {
        self.persisted_size(Size::new(DEFAULT_WINDOW_WIDTH, DEFAULT_WINDOW_HEIGHT))
    }

    /// Persisted window position, only when both coordinates exist
    pub fn persisted_position(&self) -> Option<Point> {
        let x = self.config.get_i32(keys::GLOBAL_SECTION, keys::WIN_POS_X)?;
        let y = self.config.get_i32(keys::GLOBAL_SECTION, keys::WIN_POS_Y)?;
        Some(Point::new(x, y))
    }

    pub(crate) fn persist_geometry(&mut self, position: Point, size: Size) {
        let section = keys::GLOBAL_SECTION;
        self.config.set_int(section, keys::WIN_POS_X, position.x.into());
        self.config.set_int(section, keys::WIN_POS_Y, position.y.into());
        self.config.set_int(section, keys::WIN_WIDTH, size.width.into());
        self.config.set_int(section, keys::WIN_HEIGHT, size.height.into());
    }

    /// Close every auxiliary window and forget the sessions.
    ///
    /// Returns the windows the caller must destroy.
    pub(crate) fn take_auxiliary_windows(&mut self) -> Vec<crate::host::WindowId> {
        let mut windows = Vec::new();
        if let Some(slot) = self.radio.take() {
            windows.push(slot.window);
        }
        if let Some(slot) = self.rotator.take() {
            windows.push(slot.window);
        }
        if let Some(window) = self.time_controller.take_window() {
            windows.push(window);
        }
        if !windows.is_empty() {
            warn!(module = %self.name, count = windows.len(), "Closing auxiliary windows");
        }
        windows
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) const SAMPLE_MODULE: &str = r#"
[GLOBAL]
LAYOUT = 2
QTHFILE = "home.qth"
SATELLITES = [25544, 33591, 28654]
STATE = 0
"#;

    pub(crate) fn sample_module(name: &str) -> SatModule {
        let config = ModuleConfig::parse(SAMPLE_MODULE).expect("parse");
        SatModule::from_config(name, PathBuf::from(format!("/tmp/{name}.mod")), config)
    }

    #[test]
    fn from_config_reads_global_section() {
        let module = sample_module("SAT");
        assert_eq!(module.layout(), ModuleLayout::ThreePane);
        assert_eq!(module.qth().name, "home");
        assert_eq!(module.satellites(), vec![25544, 33591, 28654]);
        assert_eq!(module.persisted_state(), PresentationState::Docked);
        assert_eq!(module.state(), PresentationState::Docked);
        assert!(module.host_window().is_none());
        assert_eq!(module.window_title(), "GPREDICT: SAT (home)");
    }

    #[test]
    fn unknown_persisted_state_starts_docked() {
        let mut module = sample_module("SAT");
        module.config.set_int(keys::GLOBAL_SECTION, keys::STATE, 42);
        assert_eq!(module.persisted_state(), PresentationState::Docked);
    }

    #[test]
    fn unknown_layout_falls_back_to_single() {
        let config = ModuleConfig::parse("[GLOBAL]\nLAYOUT = 9\n").expect("parse");
        let module = SatModule::from_config("X", PathBuf::from("/tmp/X.mod"), config);
        assert_eq!(module.layout(), ModuleLayout::Single);
    }

    #[test]
    fn persisted_size_falls_back_per_dimension() {
        let mut module = sample_module("SAT");
        module.config.set_int(keys::GLOBAL_SECTION, keys::WIN_WIDTH, 1024);
        assert_eq!(
            module.persisted_size(Size::new(300, 200)),
            Size::new(1024, 200)
        );
        assert_eq!(module.persisted_size_or_default(), Size::new(1024, 600));
    }

    #[test]
    fn persisted_position_needs_both_coordinates() {
        let mut module = sample_module("SAT");
        module.config.set_int(keys::GLOBAL_SECTION, keys::WIN_POS_X, 5);
        assert_eq!(module.persisted_position(), None);
        module.config.set_int(keys::GLOBAL_SECTION, keys::WIN_POS_Y, 7);
        assert_eq!(module.persisted_position(), Some(Point::new(5, 7)));
    }

    #[test]
    fn satellite_list_is_shared() {
        let module = sample_module("SAT");
        let handle = module.satellite_list();
        handle.write().push(40069);
        assert_eq!(module.satellites().len(), 4);
    }

    #[test]
    fn save_and_reload() {
        let dir = tempfile::TempDir::new().expect("tempdir");
        let path = module_file_path(dir.path(), "SAT");
        std::fs::write(&path, SAMPLE_MODULE).expect("write");

        let mut module = SatModule::load("SAT", dir.path()).expect("load");
        module.persist_geometry(Point::new(10, 20), Size::new(640, 480));
        module.satellite_list().write().retain(|&c| c != 33591);
        module.save().expect("save");

        let reloaded = SatModule::load("SAT", dir.path()).expect("reload");
        assert_eq!(reloaded.persisted_position(), Some(Point::new(10, 20)));
        assert_eq!(reloaded.persisted_size(Size::default()), Size::new(640, 480));
        assert_eq!(reloaded.satellites(), vec![25544, 28654]);
    }
}

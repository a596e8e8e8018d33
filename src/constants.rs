//! Constants
//!
//! Centralized defaults shared by the presentation layer.

/// Window size used when a fullscreen module has no persisted size
pub const DEFAULT_WINDOW_WIDTH: i32 = 800;
pub const DEFAULT_WINDOW_HEIGHT: i32 = 600;

/// Maximum length of a module name typed into the clone dialog
pub const MODULE_NAME_MAX_LEN: usize = 25;

/// Module file extension (`<name>.mod`)
pub const MODULE_FILE_EXTENSION: &str = "mod";

/// Hardware configuration file extensions
pub const RADIO_FILE_EXTENSION: &str = "rig";
pub const ROTATOR_FILE_EXTENSION: &str = "rot";

/// Ground station file extension referenced by `QTHFILE`
pub const QTH_FILE_EXTENSION: &str = "qth";

/// Prefix of every module window title
pub const MODULE_WINDOW_TITLE_PREFIX: &str = "GPREDICT";

/// Sub directories of the application data directory
pub const MODULES_DIR_NAME: &str = "modules";
pub const HWCONF_DIR_NAME: &str = "hwconf";

/// Legacy per-user directory migrated on first start
pub const LEGACY_DIR_NAME: &str = ".gpredict2";

/// Icons
pub const ICON_APP: &str = "gpredict-icon.png";
pub const ICON_NOTEBOOK: &str = "gpredict-notebook.png";
pub const ICON_FULLSCREEN: &str = "view-fullscreen";
pub const ICON_LEAVE_FULLSCREEN: &str = "view-restore";
pub const ICON_PLANNER: &str = "gpredict-planner.png";
pub const ICON_PLANNER_SMALL: &str = "gpredict-planner-small.png";
pub const ICON_CLOCK: &str = "gpredict-clock.png";
pub const ICON_CLOCK_SMALL: &str = "gpredict-clock-small.png";
pub const ICON_RADIO: &str = "gpredict-oscilloscope.png";
pub const ICON_RADIO_SMALL: &str = "gpredict-oscilloscope-small.png";
pub const ICON_ANTENNA: &str = "gpredict-antenna.png";
pub const ICON_ANTENNA_SMALL: &str = "gpredict-antenna-small.png";
pub const ICON_PROPERTIES: &str = "document-properties";
pub const ICON_COPY: &str = "edit-copy";
pub const ICON_DELETE: &str = "edit-delete";
pub const ICON_CLOSE: &str = "window-close";

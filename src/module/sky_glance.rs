//! Sky at a Glance
//!
//! Opens a pass chart for the module's satellites. The satellite list is
//! snapshotted under its lock, so a concurrent update from the prediction
//! side can't be observed half-applied.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::info;

use super::SatModule;
use crate::app::AppContext;
use crate::constants::ICON_PLANNER;
use crate::domain::Qth;
use crate::host::{WindowContent, WindowHost, WindowId, WindowSpec};
use crate::i18n::t_format;

/// Input of a sky-at-a-glance chart
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkyGlanceRequest {
    pub module: String,
    pub satellites: Vec<u32>,
    pub qth: Qth,
    /// Start of the chart
    pub t0: DateTime<Utc>,
}

impl SkyGlanceRequest {
    /// Snapshot the module. `real_time` starts the chart now instead of at
    /// the module clock.
    pub fn from_module(module: &SatModule, real_time: bool) -> Self {
        let t0 = if real_time {
            Utc::now()
        } else {
            module.time_controller().now()
        };
        Self {
            module: module.name().to_string(),
            satellites: module.satellites(),
            qth: module.qth().clone(),
            t0,
        }
    }
}

/// Open a sky-at-a-glance window for the module
pub fn open_sky_at_glance<H: WindowHost>(module: &SatModule, ctx: &mut AppContext<H>) -> WindowId {
    let request =
        SkyGlanceRequest::from_module(module, ctx.prefs.use_real_time_for_predictions());
    let title = t_format(ctx.locale(), "title-sky-at-glance", &[("name", module.name())]);
    let satellites = request.satellites.len();

    let window = ctx
        .host
        .create_window(WindowSpec::new(title, WindowContent::SkyGlance(request)).icon(ICON_PLANNER));
    info!(module = %module.name(), satellites, window = %window, "Opened sky at a glance");
    window
}

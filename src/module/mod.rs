//! Module Layer
//!
//! A satellite tracking module and everything that happens to it from the
//! popup menu: presentation changes, auxiliary windows and geometry
//! tracking.

mod controllers;
mod geometry;
mod presentation;
pub(crate) mod sat_module;
mod sky_glance;
mod time_controller;

pub use controllers::*;
pub use geometry::*;
pub use presentation::{toggle_dock, toggle_fullscreen};
pub(crate) use presentation::{float_module, restore_position};
pub use sat_module::*;
pub use sky_glance::*;
pub use time_controller::*;

//! satmod-gui Library
//!
//! Presentation layer of a satellite tracking module: the popup menu, the
//! docked / windowed / fullscreen state machine, auxiliary windows (radio
//! and rotator control, sky at a glance, time controller), cloning and
//! deleting modules, and window geometry persistence. The windowing toolkit
//! sits behind the [`host::WindowHost`] trait.

pub mod app;
pub mod constants;
pub mod domain;
pub mod error;
pub mod eventing;
pub mod helpers;
pub mod host;
pub mod i18n;
pub mod module;
pub mod states;

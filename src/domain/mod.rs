//! Domain - Pure Data Structures
//!
//! These types don't depend on any window toolkit and describe a module's
//! persisted and presented shape.

pub mod geometry;
pub mod layout;
pub mod module_config;
pub mod presentation;
pub mod qth;

pub use geometry::{Point, Size, WindowGeometry};
pub use layout::{ModuleLayout, PanePositions};
pub use module_config::{ConfigValue, ModuleConfig};
pub use presentation::{Presentation, PresentationState};
pub use qth::Qth;

//! Eventing Layer
//!
//! Actions flowing in from the popup menu and notifications flowing out to
//! the UI.

mod action;
mod ui_event;

pub use action::*;
pub use ui_event::*;

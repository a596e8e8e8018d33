//! Application Layer
//!
//! Application context, the module manager, the clone dialog and the
//! workspace routing popup actions and window events.

mod clone;
mod context;
mod manager;
mod workspace;

pub use clone::*;
pub use context::*;
pub use manager::*;
pub use workspace::*;

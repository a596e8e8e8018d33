//! Helper Utilities
//!
//! Common utilities used across the crate.

mod fs;
mod name;

pub use fs::*;
pub use name::*;

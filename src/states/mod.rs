//! State Layer
//!
//! Persisted application-wide state.

mod preferences;

pub use preferences::*;

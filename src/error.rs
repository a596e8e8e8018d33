//! Error types for satmod-gui
//!
//! Centralized error handling using snafu for ergonomic error definitions.

use snafu::Snafu;
use std::path::PathBuf;

use crate::module::ControllerKind;

/// Main error type for the crate
#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum Error {
    /// Invalid input or configuration
    #[snafu(display("Invalid: {message}"))]
    Invalid { message: String },

    /// IO error (file operations)
    #[snafu(display("IO error: {source}"))]
    Io { source: std::io::Error },

    /// IO error bound to a specific file
    #[snafu(display("IO error on {}: {source}", path.display()))]
    File {
        path: PathBuf,
        source: std::io::Error,
    },

    /// TOML deserialization error
    #[snafu(display("TOML parse error: {source}"))]
    TomlDe { source: toml::de::Error },

    /// TOML serialization error
    #[snafu(display("TOML serialize error: {source}"))]
    TomlSe { source: toml::ser::Error },

    /// No open module with this name
    #[snafu(display("Module not found: {name}"))]
    ModuleNotFound { name: String },

    /// Persisted presentation state outside the known range
    #[snafu(display("Unknown module state: {value}"))]
    UnknownState { value: i64 },

    /// Persisted layout outside the known range
    #[snafu(display("Unknown module layout: {value}"))]
    UnknownLayout { value: i64 },

    /// A controller was requested but no device of that kind is configured
    #[snafu(display("No {kind} configuration found"))]
    NoDeviceConfigured { kind: ControllerKind },
}

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io { source }
    }
}

impl From<toml::de::Error> for Error {
    fn from(source: toml::de::Error) -> Self {
        Error::TomlDe { source }
    }
}

impl From<toml::ser::Error> for Error {
    fn from(source: toml::ser::Error) -> Self {
        Error::TomlSe { source }
    }
}

/// Result type alias for convenience
pub type Result<T, E = Error> = std::result::Result<T, E>;

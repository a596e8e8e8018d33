//! Presentation - Docked / Windowed / Fullscreen

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{Error, Result};
use crate::host::WindowId;

/// Persisted presentation state of a module
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PresentationState {
    /// Embedded in the manager notebook
    #[default]
    Docked,
    /// Own top-level window
    Windowed,
    /// Own top-level window, fullscreen
    Fullscreen,
}

impl PresentationState {
    /// Value stored under the `STATE` config key
    pub fn as_config_value(self) -> i64 {
        match self {
            PresentationState::Docked => 0,
            PresentationState::Windowed => 1,
            PresentationState::Fullscreen => 2,
        }
    }

    pub fn is_floating(self) -> bool {
        !matches!(self, PresentationState::Docked)
    }
}

impl TryFrom<i64> for PresentationState {
    type Error = Error;

    fn try_from(value: i64) -> Result<Self> {
        match value {
            0 => Ok(PresentationState::Docked),
            1 => Ok(PresentationState::Windowed),
            2 => Ok(PresentationState::Fullscreen),
            value => Err(Error::UnknownState { value }),
        }
    }
}

impl fmt::Display for PresentationState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PresentationState::Docked => "docked",
            PresentationState::Windowed => "windowed",
            PresentationState::Fullscreen => "fullscreen",
        };
        f.write_str(label)
    }
}

/// Live presentation of a module.
///
/// The floating variants own the id of the top-level window hosting the
/// module content, so a module has a host window exactly when it is not
/// docked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Presentation {
    #[default]
    Docked,
    Windowed(WindowId),
    Fullscreen(WindowId),
}

impl Presentation {
    pub fn state(&self) -> PresentationState {
        match self {
            Presentation::Docked => PresentationState::Docked,
            Presentation::Windowed(_) => PresentationState::Windowed,
            Presentation::Fullscreen(_) => PresentationState::Fullscreen,
        }
    }

    /// Host window, present iff not docked
    pub fn window(&self) -> Option<WindowId> {
        match self {
            Presentation::Docked => None,
            Presentation::Windowed(id) | Presentation::Fullscreen(id) => Some(*id),
        }
    }
}

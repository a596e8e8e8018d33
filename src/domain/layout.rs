//! Layout - Pane Layout and Divider Positions

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Number of split panes used by a module's content
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ModuleLayout {
    /// Single view, no dividers
    #[default]
    Single,
    /// Two views, one vertical divider
    TwoPane,
    /// Three views, vertical and horizontal divider
    ThreePane,
    /// Four views, vertical and horizontal divider
    FourPane,
}

impl ModuleLayout {
    /// Value stored under the `LAYOUT` config key
    pub fn as_config_value(self) -> i64 {
        match self {
            ModuleLayout::Single => 0,
            ModuleLayout::TwoPane => 1,
            ModuleLayout::ThreePane => 2,
            ModuleLayout::FourPane => 3,
        }
    }

    pub fn uses_panes(self) -> bool {
        !matches!(self, ModuleLayout::Single)
    }

    /// Keep only the divider positions this layout actually has
    pub fn restrict(self, panes: PanePositions) -> PanePositions {
        match self {
            ModuleLayout::Single => PanePositions::UNSET,
            ModuleLayout::TwoPane => PanePositions {
                primary: panes.primary,
                secondary: None,
            },
            ModuleLayout::ThreePane | ModuleLayout::FourPane => panes,
        }
    }
}

impl TryFrom<i64> for ModuleLayout {
    type Error = Error;

    fn try_from(value: i64) -> Result<Self> {
        match value {
            0 => Ok(ModuleLayout::Single),
            1 => Ok(ModuleLayout::TwoPane),
            2 => Ok(ModuleLayout::ThreePane),
            3 => Ok(ModuleLayout::FourPane),
            value => Err(Error::UnknownLayout { value }),
        }
    }
}

/// Divider positions in pixels; `None` is the unset sentinel
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PanePositions {
    /// Vertical split
    pub primary: Option<i32>,
    /// Horizontal split (three and four pane layouts)
    pub secondary: Option<i32>,
}

impl PanePositions {
    pub const UNSET: PanePositions = PanePositions {
        primary: None,
        secondary: None,
    };

    pub fn new(primary: i32, secondary: i32) -> Self {
        Self {
            primary: Some(primary),
            secondary: Some(secondary),
        }
    }

    pub fn is_unset(&self) -> bool {
        self.primary.is_none() && self.secondary.is_none()
    }
}

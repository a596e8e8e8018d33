//! Geometry - Window Position and Size

use serde::{Deserialize, Serialize};

/// Screen position in pixels
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Size in pixels
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

/// Position plus size of a top-level window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowGeometry {
    pub origin: Point,
    pub size: Size,
}

impl WindowGeometry {
    pub fn new(origin: Point, size: Size) -> Self {
        Self { origin, size }
    }

    /// Whether any part of the window may be visible on a screen of `screen` size.
    ///
    /// Rejects windows lying entirely left of or above the origin, and
    /// windows starting beyond the right or bottom screen edge.
    pub fn is_on_screen(&self, screen: Size) -> bool {
        let Point { x, y } = self.origin;
        let right = i64::from(x) + i64::from(self.size.width);
        let bottom = i64::from(y) + i64::from(self.size.height);
        !(right < 0 || bottom < 0 || x > screen.width || y > screen.height)
    }
}

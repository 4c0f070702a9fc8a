//! Geometric primitives used by the plotting pipeline.
//!
//! [`Point`] lives in user space (the caller's coordinates, y up).
//! [`ScreenPoint`] lives in device space (pixels, origin top-left, y down).

use serde::{Deserialize, Serialize};

/// A point in user space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// X value in user coordinates.
    pub x: f64,
    /// Y value in user coordinates.
    pub y: f64,
}

impl Point {
    /// Create a new user-space point.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub(crate) fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

/// A point in device space (pixel coordinates).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenPoint {
    /// X value in device pixels.
    pub x: f32,
    /// Y value in device pixels.
    pub y: f32,
}

impl ScreenPoint {
    /// Create a new device-space point.
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

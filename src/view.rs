//! Plot bounds and the device viewport.

use std::fmt;

use serde::{Deserialize, Serialize};

/// User-space rectangle mapped onto the viewport.
///
/// `top` is the greater y value: y grows upward in user space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    /// Smallest visible x.
    pub left: f64,
    /// Largest visible y.
    pub top: f64,
    /// Largest visible x.
    pub right: f64,
    /// Smallest visible y.
    pub bottom: f64,
}

impl Bounds {
    /// Create bounds from their four edges.
    pub fn new(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Horizontal extent in user units.
    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    /// Vertical extent in user units.
    pub fn height(&self) -> f64 {
        self.top - self.bottom
    }

    /// Check whether every edge is finite.
    pub fn is_finite(&self) -> bool {
        self.left.is_finite()
            && self.top.is_finite()
            && self.right.is_finite()
            && self.bottom.is_finite()
    }

    /// Check that the edges are finite and `left < right`, `bottom < top`.
    pub fn is_valid(&self) -> bool {
        self.is_finite() && self.left < self.right && self.bottom < self.top
    }
}

impl fmt::Display for Bounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "left {} top {} right {} bottom {}",
            self.left, self.top, self.right, self.bottom
        )
    }
}

/// A possibly partial bounds update.
///
/// Absent or non-finite fields keep the value currently in effect.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoundsUpdate {
    /// New left edge.
    pub left: Option<f64>,
    /// New top edge.
    pub top: Option<f64>,
    /// New right edge.
    pub right: Option<f64>,
    /// New bottom edge.
    pub bottom: Option<f64>,
}

impl BoundsUpdate {
    /// Create an empty update.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the left edge.
    pub fn left(mut self, value: f64) -> Self {
        self.left = Some(value);
        self
    }

    /// Set the top edge.
    pub fn top(mut self, value: f64) -> Self {
        self.top = Some(value);
        self
    }

    /// Set the right edge.
    pub fn right(mut self, value: f64) -> Self {
        self.right = Some(value);
        self
    }

    /// Set the bottom edge.
    pub fn bottom(mut self, value: f64) -> Self {
        self.bottom = Some(value);
        self
    }

    /// Merge this update over `current`.
    ///
    /// Returns `None` when a field is neither supplied (finite) nor present in
    /// `current`. The result is not validated.
    pub(crate) fn merge(&self, current: Option<Bounds>) -> Option<Bounds> {
        let pick = |incoming: Option<f64>, prior: Option<f64>| {
            incoming.filter(|value| value.is_finite()).or(prior)
        };
        Some(Bounds {
            left: pick(self.left, current.map(|b| b.left))?,
            top: pick(self.top, current.map(|b| b.top))?,
            right: pick(self.right, current.map(|b| b.right))?,
            bottom: pick(self.bottom, current.map(|b| b.bottom))?,
        })
    }
}

impl From<Bounds> for BoundsUpdate {
    fn from(bounds: Bounds) -> Self {
        Self {
            left: Some(bounds.left),
            top: Some(bounds.top),
            right: Some(bounds.right),
            bottom: Some(bounds.bottom),
        }
    }
}

/// Device viewport size in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Viewport {
    /// Create a viewport of the given size.
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Check whether the viewport has zero area.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

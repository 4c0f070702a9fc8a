//! Coordinate transforms between user and device space.

use crate::error::BoundsError;
use crate::geom::{Point, ScreenPoint};
use crate::view::{Bounds, BoundsUpdate, Viewport};

/// Pixels per user unit along each axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scale {
    /// Horizontal pixels per unit.
    pub x: f64,
    /// Vertical pixels per unit.
    pub y: f64,
}

impl Scale {
    fn from_bounds(bounds: Bounds, viewport: Viewport) -> Option<Self> {
        if viewport.is_empty() {
            return None;
        }
        let x = viewport.width as f64 / bounds.width();
        let y = viewport.height as f64 / bounds.height();
        (x.is_finite() && y.is_finite() && x > 0.0 && y > 0.0).then_some(Self { x, y })
    }
}

/// Affine map from user coordinates into device coordinates.
///
/// The transform starts uninitialized. It becomes ready on the first accepted
/// [`Transform::set_bounds`] with a non-empty viewport, and stays ready from
/// then on: rejected updates never disturb the bounds or scale in effect.
#[derive(Debug, Clone)]
pub struct Transform {
    viewport: Viewport,
    bounds: Option<Bounds>,
    scale: Option<Scale>,
}

impl Transform {
    /// Create an uninitialized transform for a fixed viewport.
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            bounds: None,
            scale: None,
        }
    }

    /// Access the viewport.
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Access the bounds in effect, if any were accepted.
    pub fn bounds(&self) -> Option<Bounds> {
        self.bounds
    }

    /// Access the scale in effect.
    pub fn scale(&self) -> Option<Scale> {
        self.scale
    }

    /// Check whether points can be mapped.
    pub fn is_ready(&self) -> bool {
        self.bounds.is_some() && self.scale.is_some()
    }

    /// Merge a possibly partial update into the bounds.
    ///
    /// Non-finite or absent fields keep their prior value. The merged bounds
    /// are committed only if they satisfy `left < right` and `bottom < top`;
    /// otherwise nothing changes. The scale is recomputed on success unless
    /// the viewport has zero area, in which case the prior scale remains.
    /// Bounds so narrow that the scale overflows are rejected as well.
    pub fn set_bounds(&mut self, update: impl Into<BoundsUpdate>) -> Result<Bounds, BoundsError> {
        let update = update.into();
        let merged = update.merge(self.bounds).ok_or(BoundsError::Incomplete)?;
        if !merged.is_valid() {
            return Err(BoundsError::Inverted(merged));
        }
        if !self.viewport.is_empty() {
            let scale =
                Scale::from_bounds(merged, self.viewport).ok_or(BoundsError::Degenerate(merged))?;
            self.scale = Some(scale);
        }
        self.bounds = Some(merged);
        Ok(merged)
    }

    /// Map a user point into device space.
    ///
    /// Points outside the bounds map outside the viewport.
    pub fn to_device(&self, point: Point) -> Option<ScreenPoint> {
        let bounds = self.bounds?;
        let scale = self.scale?;
        let px = (point.x - bounds.left) * scale.x;
        let py = (bounds.top - point.y) * scale.y;
        Some(ScreenPoint::new(px as f32, py as f32))
    }

    /// Map a device point back into user space.
    pub fn to_user(&self, point: ScreenPoint) -> Option<Point> {
        let bounds = self.bounds?;
        let scale = self.scale?;
        let x = bounds.left + point.x as f64 / scale.x;
        let y = bounds.top - point.y as f64 / scale.y;
        Some(Point::new(x, y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Transform {
        let mut transform = Transform::new(Viewport::new(300, 300));
        transform
            .set_bounds(Bounds::new(-5.0, 5.0, 5.0, -5.0))
            .expect("valid bounds");
        transform
    }

    #[test]
    fn corners_map_to_viewport_corners() {
        let transform = square();
        let top_left = transform.to_device(Point::new(-5.0, 5.0)).unwrap();
        let bottom_right = transform.to_device(Point::new(5.0, -5.0)).unwrap();
        assert_eq!(top_left, ScreenPoint::new(0.0, 0.0));
        assert!((bottom_right.x - 300.0).abs() < 1e-4);
        assert!((bottom_right.y - 300.0).abs() < 1e-4);
    }

    #[test]
    fn scale_matches_viewport_over_span() {
        let scale = square().scale().unwrap();
        assert!((scale.x - 30.0).abs() < 1e-12);
        assert!((scale.y - 30.0).abs() < 1e-12);
    }

    #[test]
    fn y_axis_is_flipped() {
        let transform = square();
        let low = transform.to_device(Point::new(0.0, -1.0)).unwrap();
        let high = transform.to_device(Point::new(0.0, 1.0)).unwrap();
        assert!(high.y < low.y);
        let left = transform.to_device(Point::new(-1.0, 0.0)).unwrap();
        let right = transform.to_device(Point::new(1.0, 0.0)).unwrap();
        assert!(right.x > left.x);
    }

    #[test]
    fn uninitialized_transform_maps_nothing() {
        let transform = Transform::new(Viewport::new(300, 300));
        assert!(!transform.is_ready());
        assert!(transform.to_device(Point::new(0.0, 0.0)).is_none());
    }

    #[test]
    fn inverted_update_is_discarded_atomically() {
        let mut transform = square();
        let before = transform.to_device(Point::new(1.0, 2.0));
        let result = transform.set_bounds(BoundsUpdate::new().left(1.0).right(0.5));
        assert!(matches!(result, Err(BoundsError::Inverted(_))));
        assert_eq!(transform.bounds(), Some(Bounds::new(-5.0, 5.0, 5.0, -5.0)));
        assert_eq!(transform.to_device(Point::new(1.0, 2.0)), before);
    }

    #[test]
    fn partial_update_merges_with_prior_bounds() {
        let mut transform = square();
        let bounds = transform
            .set_bounds(BoundsUpdate::new().right(15.0).bottom(f64::NAN))
            .unwrap();
        assert_eq!(bounds, Bounds::new(-5.0, 5.0, 15.0, -5.0));
        assert!((transform.scale().unwrap().x - 15.0).abs() < 1e-12);
    }

    #[test]
    fn first_update_must_be_complete() {
        let mut transform = Transform::new(Viewport::new(100, 100));
        let result = transform.set_bounds(BoundsUpdate::new().left(0.0).right(1.0));
        assert_eq!(result, Err(BoundsError::Incomplete));
        assert!(transform.bounds().is_none());
    }

    #[test]
    fn empty_viewport_never_gets_a_scale() {
        let mut transform = Transform::new(Viewport::new(0, 200));
        assert!(transform.set_bounds(Bounds::new(0.0, 1.0, 1.0, 0.0)).is_ok());
        assert!(transform.scale().is_none());
        assert!(!transform.is_ready());
    }

    #[test]
    fn overflowing_scale_is_rejected() {
        let mut transform = square();
        let narrow = BoundsUpdate::new().left(0.0).right(f64::MIN_POSITIVE / 4.0);
        let result = transform.set_bounds(narrow);
        assert!(matches!(result, Err(BoundsError::Degenerate(_))));
        assert!((transform.scale().unwrap().x - 30.0).abs() < 1e-12);
    }

    #[test]
    fn device_roundtrip() {
        let transform = square();
        let point = Point::new(2.5, -1.25);
        let screen = transform.to_device(point).unwrap();
        let back = transform.to_user(screen).unwrap();
        assert!((back.x - point.x).abs() < 1e-5);
        assert!((back.y - point.y).abs() < 1e-5);
    }
}

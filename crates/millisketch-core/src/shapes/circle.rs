//! Circle shape.

use super::{Rectangle, ShapeError, ShapeTrait};
use crate::geometry::WorldPoint;

/// A circle with a strictly positive radius.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Circle {
    /// Center point in world space.
    pub(crate) center: WorldPoint,
    /// Radius in world units, always > 0.
    pub(crate) radius: i32,
}

impl Circle {
    /// Create a circle, rejecting a radius <= 0.
    pub fn new(center: WorldPoint, radius: i32) -> Result<Self, ShapeError> {
        if radius <= 0 {
            return Err(ShapeError::NonPositiveRadius(radius));
        }
        Ok(Self { center, radius })
    }

    pub fn center(&self) -> WorldPoint {
        self.center
    }

    pub fn radius(&self) -> i32 {
        self.radius
    }
}

impl ShapeTrait for Circle {
    fn bounds(&self) -> Rectangle {
        let r = self.radius;
        Rectangle::from_corners(
            WorldPoint::new(self.center.x.saturating_sub(r), self.center.y.saturating_sub(r)),
            WorldPoint::new(self.center.x.saturating_add(r), self.center.y.saturating_add(r)),
        )
    }

    fn hit_test(&self, point: WorldPoint) -> bool {
        // Squared distances in i128 stay exact for any pair of i32 points.
        let dx = i128::from(point.x) - i128::from(self.center.x);
        let dy = i128::from(point.y) - i128::from(self.center.y);
        let r = i128::from(self.radius);
        dx * dx + dy * dy <= r * r
    }
}

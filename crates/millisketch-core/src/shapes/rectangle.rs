//! Rectangle shape.

use super::ShapeTrait;
use crate::geometry::WorldPoint;

/// An axis-aligned rectangle stored as normalized min/max corners.
///
/// `min.x <= max.x` and `min.y <= max.y` always hold. Zero-area rectangles
/// are allowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rectangle {
    /// Bottom-left corner in world space.
    pub(crate) min: WorldPoint,
    /// Top-right corner in world space.
    pub(crate) max: WorldPoint,
}

impl Rectangle {
    /// Create a rectangle from any two opposite corners.
    pub fn from_corners(a: WorldPoint, b: WorldPoint) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    pub fn min(&self) -> WorldPoint {
        self.min
    }

    pub fn max(&self) -> WorldPoint {
        self.max
    }

    /// Width in world units.
    pub fn width(&self) -> i64 {
        i64::from(self.max.x) - i64::from(self.min.x)
    }

    /// Height in world units.
    pub fn height(&self) -> i64 {
        i64::from(self.max.y) - i64::from(self.min.y)
    }

    /// Smallest rectangle containing both.
    pub fn union(&self, other: &Rectangle) -> Rectangle {
        Rectangle {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    /// Closed containment test.
    pub fn contains(&self, point: WorldPoint) -> bool {
        self.min.x <= point.x && point.x <= self.max.x && self.min.y <= point.y && point.y <= self.max.y
    }
}

impl ShapeTrait for Rectangle {
    fn bounds(&self) -> Rectangle {
        *self
    }

    fn hit_test(&self, point: WorldPoint) -> bool {
        self.contains(point)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rectangle_from_corners() {
        let rect = Rectangle::from_corners(WorldPoint::new(100, 100), WorldPoint::new(50, 50));
        assert_eq!(rect.min(), WorldPoint::new(50, 50));
        assert_eq!(rect.max(), WorldPoint::new(100, 100));
        assert_eq!(rect.width(), 50);
        assert_eq!(rect.height(), 50);
    }

    #[test]
    fn test_corner_order_does_not_matter() {
        let pairs = [
            ((10, 10), (50, 40)),
            ((50, 40), (10, 10)),
            ((10, 40), (50, 10)),
            ((50, 10), (10, 40)),
        ];
        for (a, b) in pairs {
            let rect = Rectangle::from_corners(a.into(), b.into());
            assert_eq!(rect.min(), WorldPoint::new(10, 10));
            assert_eq!(rect.max(), WorldPoint::new(50, 40));
        }
    }

    #[test]
    fn test_degenerate_rectangle() {
        let rect = Rectangle::from_corners(WorldPoint::new(7, 7), WorldPoint::new(7, 7));
        assert_eq!(rect.width(), 0);
        assert!(rect.hit_test(WorldPoint::new(7, 7)));
        assert!(!rect.hit_test(WorldPoint::new(8, 7)));
    }

    #[test]
    fn test_hit_test_edges() {
        let rect = Rectangle::from_corners(WorldPoint::new(0, 0), WorldPoint::new(100, 50));
        assert!(rect.hit_test(WorldPoint::new(50, 25)));
        assert!(rect.hit_test(WorldPoint::new(0, 0)));
        assert!(rect.hit_test(WorldPoint::new(100, 50)));
        assert!(rect.hit_test(WorldPoint::new(100, 10)));
        assert!(!rect.hit_test(WorldPoint::new(101, 10)));
        assert!(!rect.hit_test(WorldPoint::new(50, -1)));
    }

    #[test]
    fn test_extreme_corners() {
        let rect = Rectangle::from_corners(WorldPoint::new(i32::MAX, i32::MIN), WorldPoint::new(i32::MIN, i32::MAX));
        assert_eq!(rect.width(), i64::from(u32::MAX));
    }

    #[test]
    fn test_union() {
        let a = Rectangle::from_corners(WorldPoint::new(0, 0), WorldPoint::new(10, 10));
        let b = Rectangle::from_corners(WorldPoint::new(-5, 20), WorldPoint::new(5, 30));
        let u = a.union(&b);
        assert_eq!(u.min(), WorldPoint::new(-5, 0));
        assert_eq!(u.max(), WorldPoint::new(10, 30));
    }
}

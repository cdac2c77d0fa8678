//! Shape definitions for the scene.

mod circle;
mod rectangle;

pub use circle::Circle;
pub use rectangle::Rectangle;

use crate::geometry::WorldPoint;
use thiserror::Error;

/// Rejected shape parameters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShapeError {
    #[error("Circle radius must be positive, got {0}")]
    NonPositiveRadius(i32),
}

/// The two primitive kinds a scene stores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Rectangle,
    Circle,
}

/// Common trait for all shapes.
pub trait ShapeTrait {
    /// Axis-aligned bounds in world coordinates.
    fn bounds(&self) -> Rectangle;

    /// Check if a world point hits this shape. Boundaries count as hits.
    fn hit_test(&self, point: WorldPoint) -> bool;
}

/// Owned shape of either kind, used where both kinds travel together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Shape {
    Rectangle(Rectangle),
    Circle(Circle),
}

impl Shape {
    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Rectangle(_) => ShapeKind::Rectangle,
            Shape::Circle(_) => ShapeKind::Circle,
        }
    }

    pub fn bounds(&self) -> Rectangle {
        match self {
            Shape::Rectangle(s) => s.bounds(),
            Shape::Circle(s) => s.bounds(),
        }
    }

    pub fn hit_test(&self, point: WorldPoint) -> bool {
        match self {
            Shape::Rectangle(s) => s.hit_test(point),
            Shape::Circle(s) => s.hit_test(point),
        }
    }
}

impl From<Rectangle> for Shape {
    fn from(rect: Rectangle) -> Self {
        Shape::Rectangle(rect)
    }
}

impl From<Circle> for Shape {
    fn from(circle: Circle) -> Self {
        Shape::Circle(circle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_dispatch() {
        let rect: Shape = Rectangle::from_corners(WorldPoint::new(0, 0), WorldPoint::new(10, 10)).into();
        let circle: Shape = Circle::new(WorldPoint::new(0, 0), 5).unwrap().into();

        assert_eq!(rect.kind(), ShapeKind::Rectangle);
        assert_eq!(circle.kind(), ShapeKind::Circle);
        assert!(rect.hit_test(WorldPoint::new(10, 10)));
        assert!(!circle.hit_test(WorldPoint::new(5, 5)));
        assert_eq!(circle.bounds().min, WorldPoint::new(-5, -5));
    }

    #[test]
    fn test_error_message() {
        let err = Circle::new(WorldPoint::ORIGIN, -2).unwrap_err();
        assert_eq!(err.to_string(), "Circle radius must be positive, got -2");
    }
}

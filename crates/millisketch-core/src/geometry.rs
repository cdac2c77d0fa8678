//! Integer points and sizes for the two coordinate spaces.
//!
//! World space is y-up with one unit per millimetre. Device space is y-down
//! with the origin at the viewport's top-left corner. The two spaces get
//! separate types so a point cannot be fed to the wrong side of a transform.

/// A point in world space (y increases upward).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct WorldPoint {
    pub x: i32,
    pub y: i32,
}

impl WorldPoint {
    pub const ORIGIN: Self = Self { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Componentwise minimum.
    pub fn min(self, other: Self) -> Self {
        Self::new(self.x.min(other.x), self.y.min(other.y))
    }

    /// Componentwise maximum.
    pub fn max(self, other: Self) -> Self {
        Self::new(self.x.max(other.x), self.y.max(other.y))
    }
}

impl From<(i32, i32)> for WorldPoint {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

/// A point in device space (y increases downward).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DevicePoint {
    pub x: i32,
    pub y: i32,
}

impl DevicePoint {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl From<(i32, i32)> for DevicePoint {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl From<DevicePoint> for kurbo::Point {
    fn from(p: DevicePoint) -> Self {
        kurbo::Point::new(f64::from(p.x), f64::from(p.y))
    }
}

/// Size of the drawable area in device units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Viewport {
    pub width: i32,
    pub height: i32,
}

impl Viewport {
    /// Smallest useful drawing area.
    pub const MINIMUM: Self = Self { width: 400, height: 300 };

    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    pub fn to_kurbo(self) -> kurbo::Size {
        kurbo::Size::new(f64::from(self.width), f64::from(self.height))
    }

    /// Device rectangle covering the whole viewport.
    pub fn rect(self) -> kurbo::Rect {
        kurbo::Rect::from_origin_size(kurbo::Point::ZERO, self.to_kurbo())
    }
}

//! World/device coordinate mapping anchored at the viewport's bottom-left.

use crate::geometry::{DevicePoint, Viewport, WorldPoint};

/// Inset of world (0,0) from the viewport's left and bottom edges.
pub const ANCHOR_MARGIN: i32 = 40;

/// Inset of the axis ends from the viewport's right and top edges.
pub const AXIS_END_MARGIN: i32 = 20;

/// Distance between axis ticks in world units.
pub const TICK_INTERVAL: i32 = 100;

/// Device-space point where world (0,0) lands for a viewport.
pub fn anchor(viewport: Viewport) -> DevicePoint {
    DevicePoint::new(ANCHOR_MARGIN, viewport.height.saturating_sub(ANCHOR_MARGIN))
}

/// World-to-device mapping for one viewport size.
///
/// This is a pure reflection of the y axis plus a translation, so it is
/// exact on integers. Build one with [`ViewTransform::for_viewport`] every
/// time it is needed instead of keeping one across resizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewTransform {
    anchor: DevicePoint,
}

impl ViewTransform {
    pub fn for_viewport(viewport: Viewport) -> Self {
        Self {
            anchor: anchor(viewport),
        }
    }

    pub fn anchor(&self) -> DevicePoint {
        self.anchor
    }

    /// Convert a world point to device coordinates.
    ///
    /// Arithmetic wraps so the mapping stays a bijection over all of `i32`.
    pub fn to_device(&self, world: WorldPoint) -> DevicePoint {
        DevicePoint::new(
            self.anchor.x.wrapping_add(world.x),
            self.anchor.y.wrapping_sub(world.y),
        )
    }

    /// Convert a device point to world coordinates.
    pub fn to_world(&self, device: DevicePoint) -> WorldPoint {
        WorldPoint::new(
            device.x.wrapping_sub(self.anchor.x),
            self.anchor.y.wrapping_sub(device.y),
        )
    }
}

/// A tick mark on one of the axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tick {
    /// Where the tick crosses its axis, in device space.
    pub position: DevicePoint,
    /// World distance from the anchor along the axis.
    pub value: i32,
}

/// Axis geometry for a viewport, in device space.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AxisLayout {
    pub origin: DevicePoint,
    pub x_end: DevicePoint,
    pub y_end: DevicePoint,
    pub x_ticks: Vec<Tick>,
    pub y_ticks: Vec<Tick>,
}

impl AxisLayout {
    /// Whether there is room to draw the x axis.
    pub fn has_x_axis(&self) -> bool {
        self.x_end.x > self.origin.x
    }

    /// Whether there is room to draw the y axis.
    pub fn has_y_axis(&self) -> bool {
        self.y_end.y < self.origin.y
    }
}

/// Compute axis lines and ticks for a viewport.
pub fn axis_layout(viewport: Viewport) -> AxisLayout {
    let transform = ViewTransform::for_viewport(viewport);
    let origin = transform.anchor();
    let x_end = DevicePoint::new(viewport.width.saturating_sub(AXIS_END_MARGIN), origin.y);
    let y_end = DevicePoint::new(origin.x, AXIS_END_MARGIN);

    let x_ticks = (1..)
        .map_while(|i: i32| i.checked_mul(TICK_INTERVAL))
        .take_while(|&v| origin.x.saturating_add(v) <= x_end.x)
        .map(|v| Tick {
            position: transform.to_device(WorldPoint::new(v, 0)),
            value: v,
        })
        .collect();

    let y_ticks = (1..)
        .map_while(|i: i32| i.checked_mul(TICK_INTERVAL))
        .take_while(|&v| origin.y.saturating_sub(v) >= y_end.y)
        .map(|v| Tick {
            position: transform.to_device(WorldPoint::new(0, v)),
            value: v,
        })
        .collect();

    AxisLayout {
        origin,
        x_end,
        y_end,
        x_ticks,
        y_ticks,
    }
}

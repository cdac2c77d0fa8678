//! Runtime canvas state: the scene plus the viewport it is shown in.

use crate::geometry::{DevicePoint, Viewport};
use crate::scene::Scene;
use crate::selection::Selection;
use crate::shapes::Shape;
use crate::transform::{ANCHOR_MARGIN, AXIS_END_MARGIN, ViewTransform};

/// Runtime canvas state (not persisted).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    /// The scene being edited.
    pub scene: Scene,
    viewport: Viewport,
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new()
    }
}

impl Canvas {
    /// Create a new canvas with an empty scene.
    pub fn new() -> Self {
        Self::with_scene(Scene::new())
    }

    /// Create a canvas with an existing scene.
    pub fn with_scene(scene: Scene) -> Self {
        Self {
            scene,
            viewport: Viewport::new(800, 600),
        }
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Set the viewport size.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    /// Transform for the current viewport, rebuilt on every call.
    pub fn transform(&self) -> ViewTransform {
        ViewTransform::for_viewport(self.viewport)
    }

    /// Select the topmost shape under a device point.
    pub fn select_at_device(&mut self, point: DevicePoint) -> Selection {
        let world = self.transform().to_world(point);
        self.scene.select_at(world)
    }

    /// Delete selected shape.
    pub fn delete_selected(&mut self) -> Option<Shape> {
        self.scene.delete_selected()
    }

    /// Device size that shows the whole viewport and every shape's right
    /// and top extent when rendered from the anchor.
    ///
    /// Shapes left of or below world (0,0) are cut off the same way they
    /// are on screen.
    pub fn print_extent(&self) -> Viewport {
        let Some(bounds) = self.scene.bounds() else {
            return self.viewport;
        };
        let margins = ANCHOR_MARGIN + AXIS_END_MARGIN;
        let needed_width = bounds.max().x.max(0).saturating_add(margins);
        let needed_height = bounds.max().y.max(0).saturating_add(margins);
        Viewport::new(
            self.viewport.width.max(needed_width),
            self.viewport.height.max(needed_height),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::WorldPoint;

    #[test]
    fn test_select_at_device() {
        let mut canvas = Canvas::new();
        canvas.set_viewport(Viewport::new(800, 600));
        canvas.scene.add_rectangle(WorldPoint::new(10, 10), WorldPoint::new(50, 40));

        // World (20, 20) is device (60, 540) with the anchor at (40, 560).
        assert_eq!(canvas.select_at_device(DevicePoint::new(60, 540)), Selection::Rectangle(0));
        assert_eq!(canvas.select_at_device(DevicePoint::new(10, 10)), Selection::None);
    }

    #[test]
    fn test_resize_moves_anchor() {
        let mut canvas = Canvas::new();
        canvas.scene.add_circle(WorldPoint::new(0, 0), 5).unwrap();

        canvas.set_viewport(Viewport::new(800, 600));
        assert_eq!(canvas.select_at_device(DevicePoint::new(40, 560)), Selection::Circle(0));

        canvas.set_viewport(Viewport::new(800, 300));
        assert_eq!(canvas.select_at_device(DevicePoint::new(40, 560)), Selection::None);
        assert_eq!(canvas.select_at_device(DevicePoint::new(40, 260)), Selection::Circle(0));
    }

    #[test]
    fn test_delete_selected() {
        let mut canvas = Canvas::new();
        canvas.scene.add_circle(WorldPoint::new(100, 100), 20).unwrap();
        let device = canvas.transform().to_device(WorldPoint::new(100, 100));
        canvas.select_at_device(device);
        assert!(canvas.delete_selected().is_some());
        assert!(canvas.scene.is_empty());
        assert!(canvas.scene.selection().is_none());
    }

    #[test]
    fn test_print_extent() {
        let mut canvas = Canvas::new();
        canvas.set_viewport(Viewport::new(400, 300));
        assert_eq!(canvas.print_extent(), Viewport::new(400, 300));

        canvas.scene.add_rectangle(WorldPoint::new(0, 0), WorldPoint::new(1000, 100));
        assert_eq!(canvas.print_extent(), Viewport::new(1060, 300));

        canvas.scene.add_circle(WorldPoint::new(0, 500), 20).unwrap();
        assert_eq!(canvas.print_extent(), Viewport::new(1060, 580));
    }
}

//! Scene document: shapes in world space, the current selection, and the
//! persisted JSON format.

use crate::geometry::WorldPoint;
use crate::selection::Selection;
use crate::shapes::{Circle, Rectangle, Shape, ShapeError, ShapeTrait};
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

/// Errors reading the persisted scene format.
#[derive(Debug, Error)]
pub enum SceneFormatError {
    #[error("Invalid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("Expected a JSON object at the top level, found {0}")]
    NotAnObject(&'static str),
}

/// The shapes of a drawing plus the current selection.
///
/// Rectangles and circles are kept in insertion order. Later shapes draw on
/// top of earlier ones of the same kind and win hit tests against them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Scene {
    rectangles: Vec<Rectangle>,
    circles: Vec<Circle>,
    selection: Selection,
}

impl Scene {
    /// Create a new empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a rectangle given any two opposite corners. Returns its index.
    pub fn add_rectangle(&mut self, a: WorldPoint, b: WorldPoint) -> usize {
        self.push_rectangle(Rectangle::from_corners(a, b))
    }

    /// Append a circle. A radius <= 0 leaves the scene unchanged.
    pub fn add_circle(&mut self, center: WorldPoint, radius: i32) -> Result<usize, ShapeError> {
        match Circle::new(center, radius) {
            Ok(circle) => Ok(self.push_circle(circle)),
            Err(e) => {
                log::warn!("Rejected circle at ({}, {}): {}", center.x, center.y, e);
                Err(e)
            }
        }
    }

    fn push_rectangle(&mut self, rect: Rectangle) -> usize {
        log::debug!(
            "Added rectangle ({}, {})-({}, {})",
            rect.min.x,
            rect.min.y,
            rect.max.x,
            rect.max.y
        );
        self.rectangles.push(rect);
        self.rectangles.len() - 1
    }

    fn push_circle(&mut self, circle: Circle) -> usize {
        log::debug!(
            "Added circle at ({}, {}) r={}",
            circle.center.x,
            circle.center.y,
            circle.radius
        );
        self.circles.push(circle);
        self.circles.len() - 1
    }

    /// Rectangles in insertion order.
    pub fn rectangles(&self) -> &[Rectangle] {
        &self.rectangles
    }

    /// Circles in insertion order.
    pub fn circles(&self) -> &[Circle] {
        &self.circles
    }

    /// Get the selected shape, if any.
    pub fn selected_shape(&self) -> Option<Shape> {
        match self.selection {
            Selection::None => None,
            Selection::Rectangle(i) => self.rectangles.get(i).copied().map(Shape::Rectangle),
            Selection::Circle(i) => self.circles.get(i).copied().map(Shape::Circle),
        }
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    /// Set the selection. An index past the end of its sequence is refused
    /// and clears the selection instead. Returns whether it was accepted.
    pub fn select(&mut self, selection: Selection) -> bool {
        let valid = match selection {
            Selection::None => true,
            Selection::Rectangle(i) => i < self.rectangles.len(),
            Selection::Circle(i) => i < self.circles.len(),
        };
        self.selection = if valid { selection } else { Selection::None };
        valid
    }

    /// Clear selection.
    pub fn clear_selection(&mut self) {
        self.selection = Selection::None;
    }

    /// Find the topmost shape at a world point.
    ///
    /// Circles are searched first, newest to oldest, then rectangles newest
    /// to oldest. A circle therefore wins over a rectangle at the same point
    /// even when the rectangle was added later.
    pub fn hit_test(&self, point: WorldPoint) -> Selection {
        if let Some(i) = self.circles.iter().rposition(|c| c.hit_test(point)) {
            return Selection::Circle(i);
        }
        if let Some(i) = self.rectangles.iter().rposition(|r| r.hit_test(point)) {
            return Selection::Rectangle(i);
        }
        Selection::None
    }

    /// Hit test and store the result as the selection. A miss clears it.
    pub fn select_at(&mut self, point: WorldPoint) -> Selection {
        self.selection = self.hit_test(point);
        self.selection
    }

    /// Delete the selected shape, if any. The selection is always cleared.
    pub fn delete_selected(&mut self) -> Option<Shape> {
        let removed = match std::mem::take(&mut self.selection) {
            Selection::None => None,
            Selection::Rectangle(i) if i < self.rectangles.len() => Some(Shape::Rectangle(self.rectangles.remove(i))),
            Selection::Circle(i) if i < self.circles.len() => Some(Shape::Circle(self.circles.remove(i))),
            _ => None,
        };
        if let Some(shape) = &removed {
            log::debug!("Deleted {:?}", shape.kind());
        }
        removed
    }

    /// Remove every shape and clear the selection.
    pub fn clear(&mut self) {
        self.rectangles.clear();
        self.circles.clear();
        self.selection = Selection::None;
    }

    /// Check if the scene is empty.
    pub fn is_empty(&self) -> bool {
        self.rectangles.is_empty() && self.circles.is_empty()
    }

    /// Get the number of shapes.
    pub fn len(&self) -> usize {
        self.rectangles.len() + self.circles.len()
    }

    /// Get the bounding box of all shapes.
    pub fn bounds(&self) -> Option<Rectangle> {
        self.rectangles
            .iter()
            .map(|r| r.bounds())
            .chain(self.circles.iter().map(|c| c.bounds()))
            .reduce(|acc, b| acc.union(&b))
    }

    /// Serialize the shapes to the persisted JSON format.
    ///
    /// The selection is not part of the format.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        let persisted = PersistedScene {
            rectangles: self.rectangles.iter().map(PersistedRectangle::from).collect(),
            circles: self.circles.iter().map(PersistedCircle::from).collect(),
        };
        serde_json::to_string_pretty(&persisted)
    }

    /// Parse the persisted JSON format.
    ///
    /// Only a non-object top level (or invalid JSON) is an error. Missing
    /// arrays read as empty, missing or non-integer fields read as 0,
    /// rectangles are re-normalized and circles with radius <= 0 are dropped.
    pub fn from_json(json: &str) -> Result<Self, SceneFormatError> {
        let data: Value = serde_json::from_str(json)?;
        let root = match data {
            Value::Object(map) => map,
            other => return Err(SceneFormatError::NotAnObject(json_type_name(&other))),
        };

        let mut scene = Self::new();
        for entry in array_entries(root.get("rectangles")) {
            let bl = WorldPoint::new(int_field(entry, "bl_x"), int_field(entry, "bl_y"));
            let tr = WorldPoint::new(int_field(entry, "tr_x"), int_field(entry, "tr_y"));
            scene.rectangles.push(Rectangle::from_corners(bl, tr));
        }

        let mut dropped = 0usize;
        for entry in array_entries(root.get("circles")) {
            let center = WorldPoint::new(int_field(entry, "cx"), int_field(entry, "cy"));
            match Circle::new(center, int_field(entry, "r")) {
                Ok(circle) => scene.circles.push(circle),
                Err(_) => dropped += 1,
            }
        }
        if dropped > 0 {
            log::warn!("Dropped {} circle(s) with non-positive radius", dropped);
        }

        Ok(scene)
    }

    /// Replace all shapes with the content of `json`.
    ///
    /// On failure the scene is left untouched. On success the selection is
    /// cleared.
    pub fn load_json(&mut self, json: &str) -> Result<(), SceneFormatError> {
        *self = Self::from_json(json)?;
        Ok(())
    }
}

#[derive(Serialize)]
struct PersistedScene {
    rectangles: Vec<PersistedRectangle>,
    circles: Vec<PersistedCircle>,
}

#[derive(Serialize)]
struct PersistedRectangle {
    bl_x: i32,
    bl_y: i32,
    tr_x: i32,
    tr_y: i32,
}

impl From<&Rectangle> for PersistedRectangle {
    fn from(rect: &Rectangle) -> Self {
        Self {
            bl_x: rect.min.x,
            bl_y: rect.min.y,
            tr_x: rect.max.x,
            tr_y: rect.max.y,
        }
    }
}

#[derive(Serialize)]
struct PersistedCircle {
    cx: i32,
    cy: i32,
    r: i32,
}

impl From<&Circle> for PersistedCircle {
    fn from(circle: &Circle) -> Self {
        Self {
            cx: circle.center.x,
            cy: circle.center.y,
            r: circle.radius,
        }
    }
}

/// Entries of a JSON array, or nothing when the value is absent or not an array.
fn array_entries(value: Option<&Value>) -> impl Iterator<Item = &Value> {
    value.and_then(Value::as_array).into_iter().flatten()
}

/// Read an `i32` field, defaulting to 0 when missing, fractional or out of range.
fn int_field(entry: &Value, key: &str) -> i32 {
    let Some(value) = entry.get(key) else {
        return 0;
    };
    value
        .as_i64()
        .and_then(|n| i32::try_from(n).ok())
        .or_else(|| {
            value
                .as_f64()
                .filter(|f| f.fract() == 0.0 && *f >= f64::from(i32::MIN) && *f <= f64::from(i32::MAX))
                .map(|f| f as i32)
        })
        .unwrap_or(0)
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

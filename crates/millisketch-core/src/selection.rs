//! Single-shape selection.

use crate::shapes::ShapeKind;

/// Reference to at most one selected shape.
///
/// The index points into the scene's sequence for that kind. The scene is the
/// only place a selection is stored and it never holds an index past the end
/// of its sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Selection {
    #[default]
    None,
    Rectangle(usize),
    Circle(usize),
}

impl Selection {
    pub fn is_none(&self) -> bool {
        matches!(self, Selection::None)
    }

    pub fn is_some(&self) -> bool {
        !self.is_none()
    }

    /// Kind of the referenced shape.
    pub fn kind(&self) -> Option<ShapeKind> {
        match self {
            Selection::None => None,
            Selection::Rectangle(_) => Some(ShapeKind::Rectangle),
            Selection::Circle(_) => Some(ShapeKind::Circle),
        }
    }

    /// Index into the sequence of [`Self::kind`].
    pub fn index(&self) -> Option<usize> {
        match *self {
            Selection::None => None,
            Selection::Rectangle(i) | Selection::Circle(i) => Some(i),
        }
    }

    /// Whether this refers to the rectangle at `index`.
    pub fn is_rectangle(&self, index: usize) -> bool {
        *self == Selection::Rectangle(index)
    }

    /// Whether this refers to the circle at `index`.
    pub fn is_circle(&self, index: usize) -> bool {
        *self == Selection::Circle(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_none() {
        let selection = Selection::default();
        assert!(selection.is_none());
        assert_eq!(selection.kind(), None);
        assert_eq!(selection.index(), None);
    }

    #[test]
    fn test_kind_and_index() {
        let selection = Selection::Circle(3);
        assert!(selection.is_some());
        assert_eq!(selection.kind(), Some(ShapeKind::Circle));
        assert_eq!(selection.index(), Some(3));
        assert!(selection.is_circle(3));
        assert!(!selection.is_rectangle(3));
    }
}

//! Axis-aligned bounding rectangle.

use serde::{Deserialize, Serialize};

use crate::point::Position;

/// A 2D axis-aligned bounding box, defined by its minimum and maximum corners.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Box2D {
    /// Corner with the smallest x and y.
    pub min: Position,
    /// Corner with the largest x and y.
    pub max: Position,
}

impl Box2D {
    /// Does not validate that min <= max.
    #[inline]
    pub fn new(min: Position, max: Position) -> Self {
        Self { min, max }
    }

    /// Degenerate box covering a single position.
    #[inline]
    pub fn from_point(p: Position) -> Self {
        Self { min: p, max: p }
    }

    /// Returns the smallest box covering both `self` and `p`.
    #[inline]
    pub fn expand_to_include(self, p: Position) -> Self {
        Self {
            min: Position::new(self.min.x.min(p.x), self.min.y.min(p.y)),
            max: Position::new(self.max.x.max(p.x), self.max.y.max(p.y)),
        }
    }

    #[inline]
    pub fn contains_point(self, p: Position) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }

    #[inline]
    pub fn width(self) -> f64 {
        self.max.x - self.min.x
    }

    #[inline]
    pub fn height(self) -> f64 {
        self.max.y - self.min.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expand_to_include() {
        let mut bbox = Box2D::from_point(Position::new(1.0, 2.0));
        bbox = bbox.expand_to_include(Position::new(-3.0, 5.0));
        bbox = bbox.expand_to_include(Position::new(4.0, -1.0));
        assert_eq!(bbox.min.x, -3.0);
        assert_eq!(bbox.min.y, -1.0);
        assert_eq!(bbox.max.x, 4.0);
        assert_eq!(bbox.max.y, 5.0);
    }

    #[test]
    fn dimensions() {
        let bbox = Box2D::new(Position::new(0.0, 0.0), Position::new(10.0, 5.0));
        assert_eq!(bbox.width(), 10.0);
        assert_eq!(bbox.height(), 5.0);
    }

    #[test]
    fn contains_point() {
        let bbox = Box2D::new(Position::new(0.0, 0.0), Position::new(10.0, 10.0));

        assert!(bbox.contains_point(Position::new(5.0, 5.0)));
        assert!(bbox.contains_point(Position::new(0.0, 0.0))); // On boundary
        assert!(bbox.contains_point(Position::new(10.0, 10.0))); // On boundary
        assert!(!bbox.contains_point(Position::new(-1.0, 5.0)));
        assert!(!bbox.contains_point(Position::new(5.0, 11.0)));
    }
}

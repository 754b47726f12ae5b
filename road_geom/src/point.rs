//! 2D position in the road's inertial frame.

use libm::sqrt;
use serde::{Deserialize, Serialize};

#[derive(Default, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn from_array(p: [f64; 2]) -> Self {
        Self { x: p[0], y: p[1] }
    }

    #[inline]
    pub fn as_array(&self) -> [f64; 2] {
        [self.x, self.y]
    }

    /// Euclidean distance to another position.
    pub fn distance(&self, other: &Position) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        sqrt(dx * dx + dy * dy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn array_round_trip() {
        let p = Position::from_array([3.5, -2.0]);
        assert_eq!(p.x, 3.5);
        assert_eq!(p.y, -2.0);
        assert_eq!(p.as_array(), [3.5, -2.0]);
    }

    #[test]
    fn distance() {
        let a = Position::new(1.0, 2.0);
        let b = Position::new(4.0, 6.0);
        assert_eq!(a.distance(&b), 5.0);
        assert_eq!(b.distance(&a), 5.0);
        assert_eq!(a.distance(&a), 0.0);
    }
}

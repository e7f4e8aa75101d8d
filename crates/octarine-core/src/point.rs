//! Integer lattice points.

use crate::dir;
use smallvec::SmallVec;
use std::fmt;

/// A point on the integer plane.
///
/// Immutable value type with no identity beyond its coordinates;
/// equality is exact integer equality on both.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: i64,
    /// Vertical coordinate.
    pub y: i64,
}

impl Point {
    /// Create a point from its coordinates.
    #[inline]
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// The point one unit step away along template direction `i`
    /// (taken modulo 8). Saturates at the `i64` limits.
    #[inline]
    pub fn step(self, i: usize) -> Point {
        let (dx, dy) = dir::vector(i);
        Point::new(self.x.saturating_add(dx), self.y.saturating_add(dy))
    }

    /// All eight unit-step neighbours, in template order.
    pub fn neighbours(self) -> SmallVec<[Point; 8]> {
        (0..dir::COUNT).map(|i| self.step(i)).collect()
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neighbours_follow_the_template() {
        let p = Point::new(10, -4);
        let n = p.neighbours();
        assert_eq!(n.len(), 8);
        for (i, q) in n.iter().enumerate() {
            let (dx, dy) = dir::vector(i);
            assert_eq!(*q, Point::new(10 + dx, -4 + dy));
        }
    }

    #[test]
    fn step_saturates_at_the_representation_limit() {
        let p = Point::new(i64::MAX, i64::MIN);
        assert_eq!(p.step(1), Point::new(i64::MAX, i64::MIN + 1));
        assert_eq!(p.step(5), Point::new(i64::MAX - 1, i64::MIN));
    }

    #[test]
    fn display_is_coordinate_pair() {
        assert_eq!(Point::new(-3, 7).to_string(), "(-3, 7)");
    }
}

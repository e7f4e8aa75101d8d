//! The fixed eight-direction template.
//!
//! Directions are indexed counter-clockwise from `+x`; even indices are
//! the axis directions, odd indices the diagonals. Each direction `i`
//! names the half-plane constraint `vector(i) · p <= l[i]` of an
//! octagon. The helpers here take indices modulo 8, so internal callers
//! never need a range check; caller-supplied 1-indexed directions are
//! validated at the engine's public boundary instead.

use crate::Point;

/// Number of template directions.
pub const COUNT: usize = 8;

/// Direction vectors, counter-clockwise from `+x`:
/// `+x, +x+y, +y, -x+y, -x, -x-y, -y, +x-y`.
pub const VECTORS: [(i64, i64); COUNT] = [
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
    (0, -1),
    (1, -1),
];

/// Vector for direction `i` (taken modulo 8).
#[inline]
pub fn vector(i: usize) -> (i64, i64) {
    VECTORS[i % COUNT]
}

/// The direction opposite to `i`.
#[inline]
pub fn opposite(i: usize) -> usize {
    (i + 4) % COUNT
}

/// Counter-clockwise neighbour of `i`.
#[inline]
pub fn next(i: usize) -> usize {
    (i + 1) % COUNT
}

/// Second counter-clockwise neighbour of `i`.
#[inline]
pub fn next2(i: usize) -> usize {
    (i + 2) % COUNT
}

/// Clockwise neighbour of `i`.
#[inline]
pub fn prev(i: usize) -> usize {
    (i + COUNT - 1) % COUNT
}

/// Second clockwise neighbour of `i`.
#[inline]
pub fn prev2(i: usize) -> usize {
    (i + COUNT - 2) % COUNT
}

/// Whether `i` is an axis direction (`±x` or `±y`).
#[inline]
pub fn is_axis(i: usize) -> bool {
    i % 2 == 0
}

/// Directional projection of a point: the dot product `vector(i) · p`.
///
/// Saturates at the `i64` limits rather than wrapping.
#[inline]
pub fn project(i: usize, p: Point) -> i64 {
    let (dx, dy) = vector(i);
    dx.saturating_mul(p.x).saturating_add(dy.saturating_mul(p.y))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn index_helpers_wrap() {
        assert_eq!(next(7), 0);
        assert_eq!(next2(7), 1);
        assert_eq!(prev(0), 7);
        assert_eq!(prev2(0), 6);
        assert_eq!(prev2(1), 7);
        assert_eq!(opposite(0), 4);
        assert_eq!(opposite(5), 1);
        for i in 0..COUNT {
            assert_eq!(opposite(opposite(i)), i);
            assert_eq!(prev(next(i)), i);
            assert_eq!(prev2(next2(i)), i);
        }
    }

    #[test]
    fn opposite_vectors_negate() {
        for i in 0..COUNT {
            let (dx, dy) = vector(i);
            let (ox, oy) = vector(opposite(i));
            assert_eq!((ox, oy), (-dx, -dy));
        }
    }

    #[test]
    fn axis_and_diagonal_alternate() {
        for i in 0..COUNT {
            assert_eq!(is_axis(i), i % 2 == 0);
            let (dx, dy) = vector(i);
            if is_axis(i) {
                assert_eq!(dx.abs() + dy.abs(), 1);
            } else {
                assert_eq!((dx.abs(), dy.abs()), (1, 1));
            }
        }
    }

    #[test]
    fn projection_of_known_point() {
        let p = Point::new(3, -2);
        assert_eq!(project(0, p), 3); // +x
        assert_eq!(project(1, p), 1); // +x+y
        assert_eq!(project(2, p), -2); // +y
        assert_eq!(project(3, p), -5); // -x+y
        assert_eq!(project(4, p), -3); // -x
        assert_eq!(project(5, p), -1); // -x-y
        assert_eq!(project(6, p), 2); // -y
        assert_eq!(project(7, p), 5); // +x-y
    }

    proptest! {
        #[test]
        fn projection_antisymmetric_under_opposite(
            x in -1_000_000i64..1_000_000,
            y in -1_000_000i64..1_000_000,
            i in 0usize..COUNT,
        ) {
            let p = Point::new(x, y);
            prop_assert_eq!(project(opposite(i), p), -project(i, p));
        }
    }
}

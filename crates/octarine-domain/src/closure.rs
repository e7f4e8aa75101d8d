//! Bound tightening (closure) and the algebraic emptiness test.
//!
//! The closure pass propagates tightening between dependent directions
//! using only index arithmetic over the fixed template, the geometric
//! analogue of shortest-path closure in a difference-bound matrix
//! specialized to eight directions. For an axis direction the three
//! relational candidates arrive doubled (each is a sum of two adjacent
//! bounds), so the minimum is halved with the `v/2 + v%2` rounding rule:
//! truncating division rounds the halved bound toward the region for
//! positive odd sums (never cutting a real point) and to the integer
//! lattice for negative odd sums.
//!
//! Emptiness is decided without search. The twelve comparisons in
//! [`infeasible`] cover every minimal unsatisfiable subsystem the
//! template admits: an opposite pair of half-planes, a two-diagonal
//! band that misses the axis rectangle, or a diagonal that cuts off
//! the whole axis rectangle. A system failing all twelve has a common
//! point, so the test is exact for any bound vector, closed or not.

use octarine_core::dir;

/// The eight bounds of a populated octagon, in template order.
pub(crate) type Bounds = [i64; dir::COUNT];

#[inline]
fn dbl(v: i64) -> i64 {
    v.saturating_mul(2)
}

#[inline]
fn add(a: i64, b: i64) -> i64 {
    a.saturating_add(b)
}

/// Halve a doubled bound: truncating division plus remainder, so odd
/// positive values round up and odd negative values round down.
#[inline]
fn half(v: i64) -> i64 {
    v / 2 + v % 2
}

/// One tightening sweep over all eight directions, in place.
///
/// Returns whether any bound changed. Each new bound takes the minimum
/// of the current value and three candidates derived from neighbouring
/// bounds, so the sweep is monotone non-increasing.
fn tighten(l: &mut Bounds) -> bool {
    let mut changed = false;
    for i in 0..dir::COUNT {
        let n = l[dir::next(i)];
        let n2 = l[dir::next2(i)];
        let p = l[dir::prev(i)];
        let p2 = l[dir::prev2(i)];
        let tightened = if dir::is_axis(i) {
            // Candidates are doubled axis projections.
            let v = dbl(add(n2, p))
                .min(add(n, p))
                .min(dbl(add(p2, n)))
                .min(dbl(l[i]));
            half(v)
        } else {
            add(n2, dbl(p)).min(add(n, p)).min(add(dbl(n), p2)).min(l[i])
        };
        if tightened != l[i] {
            l[i] = tightened;
            changed = true;
        }
    }
    changed
}

/// Normalize `l` in place: repeat the tightening sweep until it is a
/// fixpoint.
///
/// Satisfiable vectors stabilize within a few sweeps because every
/// bound is non-increasing and bounded below by its tight value. An
/// unsatisfiable vector has no finite fixpoint, so the loop stops as
/// soon as the vector tests empty; the bounds it carries from there on
/// are unobservable, since every query on an empty octagon is defined
/// without consulting them.
pub(crate) fn close(l: &mut Bounds) {
    while tighten(l) {
        if infeasible(l) {
            break;
        }
    }
}

/// Exact emptiness of the half-plane system `vector(i) · p <= l[i]`.
pub(crate) fn infeasible(l: &Bounds) -> bool {
    // A half-plane excluded by its opposite.
    for i in 0..dir::COUNT / 2 {
        if l[dir::opposite(i)].saturating_neg() > l[i] {
            return true;
        }
    }

    // Doubled rectangle implied by the diagonal bounds versus the
    // doubled axis rectangle: disjoint on either coordinate is empty.
    let x_right = add(l[1], l[7]);
    let x_left = add(l[3], l[5]).saturating_neg();
    let y_up = add(l[1], l[3]);
    let y_down = add(l[5], l[7]).saturating_neg();
    if x_right < dbl(l[4]).saturating_neg()
        || x_left > dbl(l[0])
        || y_up < dbl(l[6]).saturating_neg()
        || y_down > dbl(l[2])
    {
        return true;
    }

    // Corner cuts: each diagonal checked at the axis-rectangle corner
    // where it is slackest. A violation there means the diagonal cuts
    // off the entire rectangle.
    add(l[4], l[6]).saturating_neg() > l[1]
        || add(l[0], l[6]).saturating_neg() > l[3]
        || add(l[0], l[2]).saturating_neg() > l[5]
        || add(l[4], l[2]).saturating_neg() > l[7]
}

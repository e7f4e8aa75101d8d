//! Binary set operations over pairs of octagons.

use crate::closure::Bounds;
use crate::octagon::Octagon;
use octarine_core::dir;

/// The intersection of two octagons.
///
/// The meet takes the element-wise minimum of the two bound vectors
/// and re-closes it, since combining bounds from different octagons
/// can leave relational slack between directions. Returns `None` when
/// either input is empty or when the meet itself has no points.
pub fn intersection(a: &Octagon, b: &Octagon) -> Option<Octagon> {
    if a.is_empty() || b.is_empty() {
        return None;
    }
    let la = a.raw_bounds()?;
    let lb = b.raw_bounds()?;
    let mut meet: Bounds = [0; dir::COUNT];
    for i in 0..dir::COUNT {
        meet[i] = la[i].min(lb[i]);
    }
    let oct = Octagon::from_limits(meet);
    if oct.is_empty() {
        None
    } else {
        Some(oct)
    }
}

/// Whether two octagons share at least one point.
///
/// Defined as "the intersection is non-empty", not as an independent
/// geometric test, so the two operations can never disagree.
pub fn has_intersection(a: &Octagon, b: &Octagon) -> bool {
    intersection(a, b).is_some()
}

//! The octagon: eight half-plane bounds over the integer plane.

use crate::closure::{self, Bounds};
use crate::error::OctagonError;
use octarine_core::{dir, Point};

/// Where a point sits relative to an octagon.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Placement {
    /// At least one directional projection strictly exceeds its bound,
    /// or the octagon is empty.
    Outside,
    /// Every projection within bounds, at least one exactly on its bound.
    Boundary,
    /// Every projection strictly below its bound.
    Inside,
}

/// A convex region of the integer plane, bounded along the eight
/// template directions: the point set satisfying
/// `vector(i) · p <= limit(i)` for all `i`.
///
/// An octagon is either *unpopulated* (the default; no bounds at all)
/// or *populated* with exactly eight bounds kept in closed form. It
/// becomes populated through [`Octagon::from_points`],
/// [`Octagon::from_limits`], or [`Octagon::cover_point`], and reverts
/// to unpopulated only through [`Octagon::clear`].
///
/// Emptiness is derived, not stored: a populated octagon whose bounds
/// are jointly unsatisfiable reports [`Octagon::is_empty`] just like
/// an unpopulated one. Cloning duplicates the bounds; instances never
/// share mutable state.
#[derive(Clone, Debug, Default)]
pub struct Octagon {
    bounds: Option<Bounds>,
}

impl Octagon {
    /// Create an unpopulated (empty) octagon.
    pub fn new() -> Self {
        Self { bounds: None }
    }

    /// Tightest octagon covering every point in `points`.
    ///
    /// Bounds start from the first point's eight projections; the
    /// remaining points are folded in through [`Octagon::cover_point`].
    /// An empty slice yields an unpopulated octagon.
    pub fn from_points(points: &[Point]) -> Self {
        let Some((first, rest)) = points.split_first() else {
            return Self::new();
        };
        let mut oct = Self {
            bounds: Some(projections(*first)),
        };
        for p in rest {
            oct.cover_point(*p);
        }
        oct
    }

    /// Octagon with the given bounds in template order, normalized.
    ///
    /// The bounds need not be closed or even jointly satisfiable;
    /// closure runs here, and an unsatisfiable system simply reports
    /// [`Octagon::is_empty`] afterwards.
    pub fn from_limits(limits: [i64; dir::COUNT]) -> Self {
        let mut bounds = limits;
        closure::close(&mut bounds);
        Self {
            bounds: Some(bounds),
        }
    }

    /// Whether the octagon contains no points.
    ///
    /// Recomputed from the bounds on every call: true for an
    /// unpopulated octagon, and for a populated one whose eight
    /// half-planes have no common point.
    pub fn is_empty(&self) -> bool {
        match &self.bounds {
            None => true,
            Some(l) => closure::infeasible(l),
        }
    }

    /// Revert to the unpopulated state.
    pub fn clear(&mut self) {
        self.bounds = None;
    }

    /// The bound for 1-indexed direction `direction` in `[1, 8]`.
    pub fn limit(&self, direction: i32) -> Result<i64, OctagonError> {
        let l = self.occupied_bounds()?;
        Ok(l[validate_direction(direction)?])
    }

    /// The corner where the bound lines at template indices
    /// `(direction + 1) % 8` and `(direction + 2) % 8` meet, for
    /// 1-indexed `direction` in `[1, 8]`.
    ///
    /// One of the two lines is always an axis line, which fixes one
    /// coordinate; substituting it into the adjacent diagonal line
    /// yields the other. No general linear solve is needed.
    pub fn vertex(&self, direction: i32) -> Result<Point, OctagonError> {
        let l = self.occupied_bounds()?;
        validate_direction(direction)?;
        let mut axis = (direction as usize + 1) % dir::COUNT;
        let mut diag = dir::next(axis);
        if !dir::is_axis(axis) {
            std::mem::swap(&mut axis, &mut diag);
        }
        let (ax, ay) = dir::vector(axis);
        let (dx, dy) = dir::vector(diag);
        let point = if axis % 4 == 0 {
            let x = ax.saturating_mul(l[axis]);
            let y = dy.saturating_mul(l[diag].saturating_sub(dx.saturating_mul(x)));
            Point::new(x, y)
        } else {
            let y = ay.saturating_mul(l[axis]);
            let x = dx.saturating_mul(l[diag].saturating_sub(dy.saturating_mul(y)));
            Point::new(x, y)
        };
        Ok(point)
    }

    /// Classify a point against the region.
    ///
    /// An empty octagon places every point [`Placement::Outside`].
    pub fn classify(&self, point: Point) -> Placement {
        let Some(l) = &self.bounds else {
            return Placement::Outside;
        };
        if closure::infeasible(l) {
            return Placement::Outside;
        }
        let mut on_boundary = false;
        for (i, bound) in l.iter().enumerate() {
            let v = dir::project(i, point);
            if v > *bound {
                return Placement::Outside;
            }
            if v == *bound {
                on_boundary = true;
            }
        }
        if on_boundary {
            Placement::Boundary
        } else {
            Placement::Inside
        }
    }

    /// Widen the region to cover `point`, then re-close.
    ///
    /// On an unpopulated octagon this populates the bounds directly
    /// from the point's projections. Widening a single bound can
    /// desynchronize the relational tightness between directions,
    /// which is why closure re-runs afterwards.
    pub fn cover_point(&mut self, point: Point) {
        match &mut self.bounds {
            None => self.bounds = Some(projections(point)),
            Some(l) => {
                for (i, bound) in l.iter_mut().enumerate() {
                    *bound = (*bound).max(dir::project(i, point));
                }
                closure::close(l);
            }
        }
    }

    /// Uniform expansion (positive `amount`) or contraction (negative)
    /// of the region.
    ///
    /// Axis bounds move by `amount`; diagonal bounds move by
    /// `amount·√2` truncated, plus a unit nudge away from zero so that
    /// `inflate(d)` followed by `inflate(-d)` restores the original
    /// bounds exactly. A uniform offset in this ratio keeps the bounds
    /// in closed form, so no re-closure is needed.
    pub fn inflate(&mut self, amount: i64) -> Result<(), OctagonError> {
        let l = match &mut self.bounds {
            Some(l) if !closure::infeasible(l) => l,
            _ => return Err(OctagonError::EmptyDomain),
        };
        if amount == 0 {
            return Ok(());
        }
        let diagonal = diagonal_offset(amount);
        for (i, bound) in l.iter_mut().enumerate() {
            let d = if dir::is_axis(i) { amount } else { diagonal };
            *bound = bound.saturating_add(d);
        }
        Ok(())
    }

    /// Bounds of a populated octagon, for in-crate set operations.
    pub(crate) fn raw_bounds(&self) -> Option<&Bounds> {
        self.bounds.as_ref()
    }

    /// Bounds, or `EmptyDomain` if the octagon is empty.
    fn occupied_bounds(&self) -> Result<&Bounds, OctagonError> {
        match &self.bounds {
            Some(l) if !closure::infeasible(l) => Ok(l),
            _ => Err(OctagonError::EmptyDomain),
        }
    }
}

/// Bound-wise equality of closed representations.
///
/// An empty octagon compares unequal to everything, itself included,
/// which is why `Eq` is deliberately not implemented.
impl PartialEq for Octagon {
    fn eq(&self, other: &Self) -> bool {
        match (&self.bounds, &other.bounds) {
            (Some(a), Some(b)) => {
                !closure::infeasible(a) && !closure::infeasible(b) && a == b
            }
            _ => false,
        }
    }
}

/// The eight directional projections of a point: the bounds of the
/// octagon containing exactly that point.
fn projections(p: Point) -> Bounds {
    std::array::from_fn(|i| dir::project(i, p))
}

/// Map a public 1-indexed direction to a template index.
fn validate_direction(direction: i32) -> Result<usize, OctagonError> {
    if (1..=dir::COUNT as i32).contains(&direction) {
        Ok((direction - 1) as usize)
    } else {
        Err(OctagonError::InvalidDirection { dir: direction })
    }
}

/// Diagonal step for [`Octagon::inflate`]: `amount·√2` truncated, plus
/// one unit away from zero. The nudge makes the step an exact odd
/// function of `amount`, which gives inflate its inverse property
/// under integer truncation.
fn diagonal_offset(amount: i64) -> i64 {
    let scaled = amount as f64 * std::f64::consts::SQRT_2;
    let nudge = if amount > 0 { 1.0 } else { -1.0 };
    (scaled + nudge) as i64
}

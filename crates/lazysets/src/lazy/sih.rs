//! Symmetric interval hull: the smallest origin-centered box containing a set.
//!
//! Purpose
//! - Enclose an arbitrary set `X` in `[-r, r]` without materializing it. Each
//!   radius `r_i = max(σ_X(e_i)_i, |σ_X(-e_i)_i|)` costs two support queries
//!   of `X`, so radii are computed on demand and memoized.
//!
//! Invariants
//! - One cache slot per dimension; a slot is either unknown (`None`) or holds
//!   the true radius. Once filled it is never recomputed or overwritten.
//! - A failed computation leaves its slot unknown.
//! - The cache lives in a `RefCell`, so a hull is `!Sync`. Build one hull per
//!   thread (or wrap it in a lock) to share the enclosure across threads.

use std::cell::RefCell;

use nalgebra::DVector;
use tracing::debug;

use crate::error::{SetError, SetResult};
use crate::linalg::unit_vector;
use crate::num::{max, Number};
use crate::sets::{
    box_constraints, box_contains, box_vertices, check_direction, Centered, ConvexSet, HalfSpace,
    Hyperrectangular,
};

/// Lazy box `[-r, r]` around the origin enclosing `set`.
///
/// `S` may be an owned set or any pointer to one (`&T`, `Box`, `Rc`, `Arc`).
#[derive(Clone, Debug)]
pub struct SymmetricIntervalHull<N: Number, S: ConvexSet<N>> {
    set: S,
    cache: RefCell<Vec<Option<N>>>,
}

impl<N: Number, S: ConvexSet<N>> SymmetricIntervalHull<N, S> {
    /// Wrap `set` with an empty cache.
    pub fn new(set: S) -> Self {
        let n = set.dim();
        Self {
            set,
            cache: RefCell::new(vec![None; n]),
        }
    }

    /// The wrapped set.
    #[inline]
    pub fn set(&self) -> &S {
        &self.set
    }

    pub fn into_inner(self) -> S {
        self.set
    }

    /// Dimensions whose radius is already known, ascending.
    pub fn cached_dims(&self) -> Vec<usize> {
        self.cache
            .borrow()
            .iter()
            .enumerate()
            .filter_map(|(i, r)| r.map(|_| i))
            .collect()
    }

    /// Radius of dimension `i`, computing and caching it on first use.
    fn radius_at(&self, i: usize) -> SetResult<N> {
        if let Some(r) = self.cache.borrow()[i] {
            return Ok(r);
        }
        let r = self.compute_radius(i)?;
        self.cache.borrow_mut()[i] = Some(r);
        Ok(r)
    }

    fn compute_radius(&self, i: usize) -> SetResult<N> {
        let n = self.set.dim();
        let e = unit_vector::<N>(n, i);
        let right = self.set.support_vector(&e)?;
        let left = self.set.support_vector(&-e)?;
        let r = max(right[i], left[i].abs());
        debug!(dim = i, radius = %r, "symmetric interval hull radius");
        Ok(r)
    }

    /// All box corners; flat dimensions contribute no duplicates.
    pub fn vertices(&self) -> SetResult<Vec<DVector<N>>> {
        let r = self.radius_vector()?;
        box_vertices(&DVector::zeros(self.dim()), &r)
    }
}

impl<N: Number, S: ConvexSet<N>> ConvexSet<N> for SymmetricIntervalHull<N, S> {
    fn dim(&self) -> usize {
        self.set.dim()
    }

    /// `sign(d_i) r_i` where `d_i != 0`; zero directions do not trigger a radius computation.
    ///
    /// Signed zeros (`-0.0`) count as zero.
    fn support_vector(&self, d: &DVector<N>) -> SetResult<DVector<N>> {
        check_direction(d, self.dim())?;
        let mut v = DVector::zeros(self.dim());
        for (i, &di) in d.iter().enumerate() {
            if di > N::zero() {
                v[i] = self.radius_at(i)?;
            } else if di < N::zero() {
                v[i] = -self.radius_at(i)?;
            }
        }
        Ok(v)
    }

    /// `Σ_i |d_i| r_i`.
    fn support_function(&self, d: &DVector<N>) -> SetResult<N> {
        check_direction(d, self.dim())?;
        let mut acc = N::zero();
        for (i, di) in d.iter().enumerate() {
            if !di.is_zero() {
                acc += di.abs() * self.radius_at(i)?;
            }
        }
        Ok(acc)
    }

    fn is_empty(&self) -> bool {
        self.set.is_empty()
    }

    fn is_bounded(&self) -> bool {
        self.set.is_bounded()
    }

    fn constraints(&self) -> Option<Vec<HalfSpace<N>>> {
        let r = self.radius_vector().ok()?;
        Some(box_constraints(&DVector::zeros(self.dim()), &r))
    }

    fn contains(&self, x: &DVector<N>) -> SetResult<bool> {
        check_direction(x, self.dim())?;
        let r = self.radius_vector()?;
        Ok(box_contains(&DVector::zeros(self.dim()), &r, x, N::default_ztol()))
    }
}

impl<N: Number, S: ConvexSet<N>> Centered<N> for SymmetricIntervalHull<N, S> {
    fn center(&self) -> DVector<N> {
        DVector::zeros(self.dim())
    }
}

impl<N: Number, S: ConvexSet<N>> Hyperrectangular<N> for SymmetricIntervalHull<N, S> {
    fn radius_hyperrectangle(&self, i: usize) -> SetResult<N> {
        let dim = self.dim();
        if i >= dim {
            return Err(SetError::IndexOutOfRange { index: i, dim });
        }
        self.radius_at(i)
    }

    /// Fills every unknown slot, sharing the cache with the single-dimension accessor.
    fn radius_vector(&self) -> SetResult<DVector<N>> {
        let mut r = DVector::zeros(self.dim());
        for i in 0..self.dim() {
            r[i] = self.radius_at(i)?;
        }
        Ok(r)
    }
}

/// Result of [`symmetric_interval_hull`]: the empty input itself, or a lazy hull.
#[derive(Clone, Debug)]
pub enum IntervalHullOf<N: Number, S: ConvexSet<N>> {
    Absorbed(S),
    Lazy(SymmetricIntervalHull<N, S>),
}

impl<N: Number, S: ConvexSet<N>> IntervalHullOf<N, S> {
    pub fn is_absorbed(&self) -> bool {
        matches!(self, IntervalHullOf::Absorbed(_))
    }

    pub fn as_lazy(&self) -> Option<&SymmetricIntervalHull<N, S>> {
        match self {
            IntervalHullOf::Lazy(h) => Some(h),
            IntervalHullOf::Absorbed(_) => None,
        }
    }
}

/// Symmetric interval hull of `set`; the empty set is its own hull.
pub fn symmetric_interval_hull<N: Number, S: ConvexSet<N>>(set: S) -> IntervalHullOf<N, S> {
    if set.is_empty() {
        IntervalHullOf::Absorbed(set)
    } else {
        IntervalHullOf::Lazy(SymmetricIntervalHull::new(set))
    }
}

impl<N: Number, S: ConvexSet<N>> ConvexSet<N> for IntervalHullOf<N, S> {
    fn dim(&self) -> usize {
        match self {
            IntervalHullOf::Absorbed(s) => s.dim(),
            IntervalHullOf::Lazy(h) => h.dim(),
        }
    }

    fn support_vector(&self, d: &DVector<N>) -> SetResult<DVector<N>> {
        match self {
            IntervalHullOf::Absorbed(s) => s.support_vector(d),
            IntervalHullOf::Lazy(h) => h.support_vector(d),
        }
    }

    fn support_function(&self, d: &DVector<N>) -> SetResult<N> {
        match self {
            IntervalHullOf::Absorbed(s) => s.support_function(d),
            IntervalHullOf::Lazy(h) => h.support_function(d),
        }
    }

    fn is_empty(&self) -> bool {
        match self {
            IntervalHullOf::Absorbed(s) => s.is_empty(),
            IntervalHullOf::Lazy(h) => h.is_empty(),
        }
    }

    fn is_bounded(&self) -> bool {
        match self {
            IntervalHullOf::Absorbed(s) => s.is_bounded(),
            IntervalHullOf::Lazy(h) => h.is_bounded(),
        }
    }

    fn constraints(&self) -> Option<Vec<HalfSpace<N>>> {
        match self {
            IntervalHullOf::Absorbed(s) => s.constraints(),
            IntervalHullOf::Lazy(h) => h.constraints(),
        }
    }

    fn contains(&self, x: &DVector<N>) -> SetResult<bool> {
        match self {
            IntervalHullOf::Absorbed(s) => s.contains(x),
            IntervalHullOf::Lazy(h) => h.contains(x),
        }
    }
}

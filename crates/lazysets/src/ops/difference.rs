//! Minkowski (Pontryagin) difference of a polyhedral set and a bounded set.
//!
//! `P ⊖ Q = {z : z + v ∈ P for all v ∈ Q}`. For `P = {x : A x <= b}` this is
//! `{z : a_i · z <= b_i - ρ(a_i, Q)}`: every half-space of `P` is shifted
//! inwards by the support function of `Q` along its normal.
//!
//! Invariants
//! - Preconditions are checked in a fixed order: matching dimensions, `P`
//!   polyhedral, `Q` bounded.
//! - A singleton `Q = {v}` and the zero set are exact identities (translation
//!   by `-v`, identity) and never take the support-function path.
//! - The output keeps `P`'s constraint order; only offsets change.

use nalgebra::DVector;
use tracing::debug;

use crate::error::{ensure_dim, SetError, SetResult};
use crate::num::Number;
use crate::sets::{delegate_convex_set, ConvexSet, HPolyhedron, HPolytope, HalfSpace};

/// Half-space result tagged by boundedness.
#[derive(Clone, Debug, PartialEq)]
pub enum PolyhedralSet<N: Number> {
    Bounded(HPolytope<N>),
    Unbounded(HPolyhedron<N>),
}

delegate_convex_set!(PolyhedralSet { Bounded, Unbounded });

impl<N: Number> PolyhedralSet<N> {
    fn build(dim: usize, bounded: bool, constraints: Vec<HalfSpace<N>>) -> SetResult<Self> {
        Ok(if bounded {
            PolyhedralSet::Bounded(HPolytope::new(dim, constraints)?)
        } else {
            PolyhedralSet::Unbounded(HPolyhedron::new(dim, constraints)?)
        })
    }

    pub fn constraints_list(&self) -> &[HalfSpace<N>] {
        match self {
            PolyhedralSet::Bounded(p) => p.constraints_list(),
            PolyhedralSet::Unbounded(p) => p.constraints_list(),
        }
    }

    /// The bounded result, if `P` was bounded.
    pub fn as_polytope(&self) -> Option<&HPolytope<N>> {
        match self {
            PolyhedralSet::Bounded(p) => Some(p),
            PolyhedralSet::Unbounded(_) => None,
        }
    }
}

/// `P ⊖ Q` for polyhedral `P` and bounded `Q`.
///
/// Returns `PolyhedralSet::Bounded` iff `P` is bounded. An empty `Q` gives the
/// whole space (no constraints).
pub fn minkowski_difference<N, P, Q>(p: &P, q: &Q) -> SetResult<PolyhedralSet<N>>
where
    N: Number,
    P: ConvexSet<N> + ?Sized,
    Q: ConvexSet<N> + ?Sized,
{
    let n = p.dim();
    ensure_dim("the dimensions of the sets", n, q.dim())?;
    let constraints = p
        .constraints()
        .ok_or(SetError::NotPolyhedral { argument: "first" })?;
    if !q.is_bounded() {
        return Err(SetError::Unbounded { argument: "second" });
    }

    if q.is_empty() {
        debug!(dim = n, "minkowski difference with an empty set is the whole space");
        return PolyhedralSet::build(n, false, Vec::new());
    }
    let bounded = p.is_bounded();
    if q.is_zero_set() {
        debug!(dim = n, "minkowski difference with the zero set");
        return PolyhedralSet::build(n, bounded, constraints);
    }
    if let Some(v) = q.singleton_element() {
        debug!(dim = n, "minkowski difference with a singleton");
        let shift: DVector<N> = -v;
        let translated = constraints.iter().map(|h| h.translate(&shift)).collect();
        return PolyhedralSet::build(n, bounded, translated);
    }

    debug!(dim = n, constraints = constraints.len(), bounded, "minkowski difference");
    let mut shifted = Vec::with_capacity(constraints.len());
    for h in constraints {
        let rho = q.support_function(&h.a)?;
        let b = h.b - rho;
        shifted.push(HalfSpace::new(h.a, b));
    }
    PolyhedralSet::build(n, bounded, shifted)
}

/// Alias of [`minkowski_difference`] under its other common name.
#[inline]
pub fn pontryagin_difference<N, P, Q>(p: &P, q: &Q) -> SetResult<PolyhedralSet<N>>
where
    N: Number,
    P: ConvexSet<N> + ?Sized,
    Q: ConvexSet<N> + ?Sized,
{
    minkowski_difference(p, q)
}

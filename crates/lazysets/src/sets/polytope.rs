//! Generic operations written purely against the capability traits.
//!
//! Purpose
//! - Concrete representations implement only their primitives (support,
//!   vertices, constraints); emptiness, universality, and linear maps come from
//!   here.
//! - Linear maps pick their output representation from the output dimension in
//!   one place (`OutputKind::of`): 1 → interval, 2 → polygon, otherwise a
//!   general polytope/polyhedron.

use nalgebra::{DMatrix, DVector};
use tracing::trace;

use super::boxes::{EmptySet, Interval};
use super::halfspace::{HPolyhedron, HPolytope, HalfSpace};
use super::traits::{delegate_convex_set, ConvexSet, Polytope};
use super::vrep::{VPolygon, VPolytope};
use crate::error::{ensure_dim, SetError, SetResult};
use crate::linalg::{inverse, unit_vector};
use crate::num::{max, min, Number, Tolerance};

/// Emptiness of a polytope: no vertices.
///
/// A vertex list too large to enumerate is not empty.
pub fn is_empty<N: Number, P: Polytope<N> + ?Sized>(p: &P) -> bool {
    p.vertices_list().is_ok_and(|vs| vs.is_empty())
}

/// Every polytope is bounded.
pub fn is_bounded<N: Number, P: Polytope<N> + ?Sized>(_p: &P) -> bool {
    true
}

/// Universality check for a polytope.
///
/// A polytope is never universal, with one special case kept on purpose: a
/// representation with zero constraints reports `true`, and the witness is the
/// empty vector. Otherwise the witness (if requested) is a point outside `p`:
/// just beyond the first constraint with a nonzero normal, or one step past the
/// support vector along `e_1` when every normal is zero.
pub fn is_universal<N: Number, P: Polytope<N> + ?Sized>(
    p: &P,
    witness: bool,
) -> (bool, Option<DVector<N>>) {
    if let Some(constraints) = p.constraints() {
        if constraints.is_empty() {
            return (true, witness.then(|| DVector::from_vec(Vec::new())));
        }
        if !witness {
            return (false, None);
        }
        // a · x = b + 1
        if let Some(h) = constraints.iter().find(|h| !h.a.iter().all(|x| x.is_zero())) {
            let s = (h.b + N::one()) / h.a.dot(&h.a);
            return (false, Some(&h.a * s));
        }
    }
    if !witness {
        return (false, None);
    }
    let n = p.dim();
    if n == 0 {
        return (false, Some(DVector::zeros(0)));
    }
    let e1 = unit_vector(n, 0);
    let outside = match p.support_vector(&e1) {
        Ok(v) => v + e1,
        Err(_) => DVector::zeros(n),
    };
    (false, Some(outside))
}

/// Output representation selected from the output dimension.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputKind {
    Interval,
    Polygon,
    General,
}

impl OutputKind {
    #[inline]
    pub fn of(dim: usize) -> Self {
        match dim {
            1 => OutputKind::Interval,
            2 => OutputKind::Polygon,
            _ => OutputKind::General,
        }
    }
}

/// Image of a vertex representation under a linear map.
#[derive(Clone, Debug, PartialEq)]
pub enum VrepImage<N: Number> {
    Empty(EmptySet<N>),
    Interval(Interval<N>),
    Polygon(VPolygon<N>),
    Polytope(VPolytope<N>),
}

delegate_convex_set!(VrepImage {
    Empty,
    Interval,
    Polygon,
    Polytope
});

/// `M · P` for a polytope, computed on vertices.
///
/// With `reduce`, the general (≥3D) output keeps only extreme points.
pub fn linear_map_vrep<N: Number, P: Polytope<N> + ?Sized>(
    m: &DMatrix<N>,
    p: &P,
    reduce: bool,
) -> SetResult<VrepImage<N>> {
    ensure_dim("the matrix columns and set dimension", m.ncols(), p.dim())?;
    let out_dim = m.nrows();
    let mapped: Vec<DVector<N>> = p.vertices_list()?.iter().map(|v| m * v).collect();
    if mapped.is_empty() {
        return Ok(VrepImage::Empty(EmptySet::new(out_dim)));
    }
    let kind = OutputKind::of(out_dim);
    trace!(?kind, out_dim, vertices = mapped.len(), "linear map (vertex representation)");
    Ok(match kind {
        OutputKind::Interval => {
            let (lo, hi) = mapped
                .iter()
                .skip(1)
                .fold((mapped[0][0], mapped[0][0]), |(lo, hi), v| (min(lo, v[0]), max(hi, v[0])));
            VrepImage::Interval(Interval::new(lo, hi)?)
        }
        OutputKind::Polygon => VrepImage::Polygon(VPolygon::new(&mapped)?),
        OutputKind::General => {
            let poly = VPolytope::new(out_dim, mapped)?;
            VrepImage::Polytope(if reduce {
                poly.remove_redundant_vertices()
            } else {
                poly
            })
        }
    })
}

/// Collaborator computing the image of a half-space system under `x ↦ M x`.
pub trait ConstraintMap<N: Number> {
    fn map_constraints(
        &self,
        m: &DMatrix<N>,
        constraints: &[HalfSpace<N>],
    ) -> SetResult<Vec<HalfSpace<N>>>;
}

/// Default collaborator for invertible square maps.
///
/// With `y = M x`: `a · x <= b` ⇔ `(M^{-T} a) · y <= b`.
#[derive(Clone, Copy, Debug)]
pub struct InverseConstraintMap<N> {
    pub tol: Tolerance<N>,
}

impl<N: Number> Default for InverseConstraintMap<N> {
    fn default() -> Self {
        Self {
            tol: Tolerance::default(),
        }
    }
}

impl<N: Number> ConstraintMap<N> for InverseConstraintMap<N> {
    fn map_constraints(
        &self,
        m: &DMatrix<N>,
        constraints: &[HalfSpace<N>],
    ) -> SetResult<Vec<HalfSpace<N>>> {
        if m.nrows() != m.ncols() {
            return Err(SetError::Unsupported {
                operation: "inverse-based linear map of constraints for a non-square matrix",
            });
        }
        let minv = inverse(m, self.tol.ztol).ok_or(SetError::Singular {
            context: "linear map of constraints",
        })?;
        Ok(constraints
            .iter()
            .map(|h| HalfSpace::new(minv.tr_mul(&h.a), h.b))
            .collect())
    }
}

/// Image of a half-space representation under a linear map.
#[derive(Clone, Debug, PartialEq)]
pub enum HrepImage<N: Number> {
    Empty(EmptySet<N>),
    Interval(Interval<N>),
    Polygon(HPolytope<N>),
    Polytope(HPolytope<N>),
    Polyhedron(HPolyhedron<N>),
}

delegate_convex_set!(HrepImage {
    Empty,
    Interval,
    Polygon,
    Polytope,
    Polyhedron
});

/// Bounds of a 1D constraint system: `(lower, upper, feasible)`.
///
/// A zero coefficient (either sign) only checks feasibility of `0 <= b`.
fn interval_bounds<N: Number>(
    constraints: &[HalfSpace<N>],
    ztol: N,
) -> (Option<N>, Option<N>, bool) {
    let mut lo: Option<N> = None;
    let mut hi: Option<N> = None;
    let mut feasible = true;
    for h in constraints {
        let a = h.a[0];
        if a > N::zero() {
            let bound = h.b / a;
            hi = Some(hi.map_or(bound, |x| min(x, bound)));
        } else if a < N::zero() {
            let bound = h.b / a;
            lo = Some(lo.map_or(bound, |x| max(x, bound)));
        } else if h.b < -ztol {
            feasible = false;
        }
    }
    (lo, hi, feasible)
}

/// `M · P` for a polyhedral set, computed on its constraints by `mapper`.
pub fn linear_map_hrep<N, P, C>(m: &DMatrix<N>, p: &P, mapper: &C) -> SetResult<HrepImage<N>>
where
    N: Number,
    P: ConvexSet<N> + ?Sized,
    C: ConstraintMap<N> + ?Sized,
{
    ensure_dim("the matrix columns and set dimension", m.ncols(), p.dim())?;
    let constraints = p
        .constraints()
        .ok_or(SetError::NotPolyhedral { argument: "second" })?;
    let mapped = mapper.map_constraints(m, &constraints)?;
    let out_dim = m.nrows();
    let bounded = p.is_bounded();
    let kind = OutputKind::of(out_dim);
    trace!(?kind, out_dim, constraints = mapped.len(), bounded, "linear map (half-space representation)");
    match kind {
        OutputKind::Interval => {
            match interval_bounds(&mapped, N::default_ztol()) {
                (_, _, false) => return Ok(HrepImage::Empty(EmptySet::new(1))),
                (Some(lo), Some(hi), true) => {
                    return Ok(if lo > hi {
                        HrepImage::Empty(EmptySet::new(1))
                    } else {
                        HrepImage::Interval(Interval::new(lo, hi)?)
                    });
                }
                _ => {}
            }
            Ok(HrepImage::Polyhedron(HPolyhedron::new(out_dim, mapped)?))
        }
        OutputKind::Polygon if bounded => Ok(HrepImage::Polygon(HPolytope::new(out_dim, mapped)?)),
        OutputKind::General if bounded => Ok(HrepImage::Polytope(HPolytope::new(out_dim, mapped)?)),
        _ => Ok(HrepImage::Polyhedron(HPolyhedron::new(out_dim, mapped)?)),
    }
}

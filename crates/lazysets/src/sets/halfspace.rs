//! Half-spaces and H-representation polyhedra.
//!
//! Assumptions and conventions
//! - A half-space is `a · x <= b`; `a` is not normalized and `b` is any value.
//!   Callers' scaling is preserved.
//! - `HPolytope` is bounded by contract (it is produced by algorithms that
//!   know the result is bounded); `HPolyhedron` may be unbounded.
//! - Vertices are recovered by enumerating `n`-tuples of constraints, so these
//!   types are meant for moderate constraint counts.

use nalgebra::DVector;

use super::hull::{h_to_vertices, positively_spans};
use super::traits::{check_direction, ConvexSet, Polytope};
use crate::error::{SetError, SetResult};
use crate::num::{approx_leq, is_approx, Number, Tolerance};

/// Closed half-space `a · x <= b`.
#[derive(Clone, Debug, PartialEq)]
pub struct HalfSpace<N: Number> {
    pub a: DVector<N>,
    pub b: N,
}

impl<N: Number> HalfSpace<N> {
    #[inline]
    pub fn new(a: DVector<N>, b: N) -> Self {
        Self { a, b }
    }

    #[inline]
    pub fn dim(&self) -> usize {
        self.a.len()
    }

    /// Membership with absolute slack `ztol`.
    #[inline]
    pub fn satisfies(&self, x: &DVector<N>, ztol: N) -> bool {
        approx_leq(self.a.dot(x), self.b, ztol)
    }

    /// The half-space shifted by `v`: `a · (x - v) <= b`.
    #[inline]
    pub fn translate(&self, v: &DVector<N>) -> Self {
        Self::new(self.a.clone(), self.b + self.a.dot(v))
    }

    /// Same constraint scaled so that `max |a_i| == 1` (exact for exact types).
    ///
    /// Returns `None` for the zero normal.
    pub fn normalize_inf(&self) -> Option<Self> {
        let s = self
            .a
            .iter()
            .fold(N::zero(), |acc, &x| if x.abs() > acc { x.abs() } else { acc });
        if s.is_zero() {
            return None;
        }
        Some(Self::new(self.a.map(|x| x / s), self.b / s))
    }

    /// Same point set up to positive scaling and tolerance.
    pub fn is_equivalent(&self, other: &Self, tol: &Tolerance<N>) -> bool {
        match (self.normalize_inf(), other.normalize_inf()) {
            (Some(p), Some(q)) => {
                p.a.len() == q.a.len()
                    && p.a.iter().zip(q.a.iter()).all(|(&x, &y)| is_approx(x, y, tol))
                    && is_approx(p.b, q.b, tol)
            }
            _ => false,
        }
    }

    /// The complementary direction `-a · x <= -b`.
    #[inline]
    pub fn flip(&self) -> Self {
        Self::new(-&self.a, -self.b)
    }
}

fn check_constraints<N: Number>(dim: usize, constraints: &[HalfSpace<N>]) -> SetResult<()> {
    match constraints.iter().position(|h| h.dim() != dim) {
        Some(i) => Err(SetError::Invalid(format!(
            "constraint {i} has dimension {} but the set has dimension {dim}",
            constraints[i].dim()
        ))),
        None => Ok(()),
    }
}

pub(crate) fn translate_constraints<N: Number>(
    constraints: &[HalfSpace<N>],
    v: &DVector<N>,
) -> Vec<HalfSpace<N>> {
    constraints.iter().map(|h| h.translate(v)).collect()
}

fn hrep_contains<N: Number>(constraints: &[HalfSpace<N>], x: &DVector<N>) -> bool {
    let ztol = N::default_ztol();
    constraints.iter().all(|h| h.satisfies(x, ztol))
}

/// Support vector by maximizing over a vertex list; `EmptySet` if the list is empty.
pub(crate) fn support_vector_from_vertices<N: Number>(
    vertices: &[DVector<N>],
    d: &DVector<N>,
) -> SetResult<DVector<N>> {
    let mut best: Option<(N, &DVector<N>)> = None;
    for v in vertices {
        let val = d.dot(v);
        match best {
            Some((b, _)) if b >= val => {}
            _ => best = Some((val, v)),
        }
    }
    best.map(|(_, v)| v.clone()).ok_or(SetError::EmptySet)
}

/// Bounded polyhedron in H-representation.
///
/// Invariants:
/// - Every constraint has dimension `dim`.
/// - The intersection is bounded (caller contract; not verified).
#[derive(Clone, Debug, PartialEq)]
pub struct HPolytope<N: Number> {
    dim: usize,
    constraints: Vec<HalfSpace<N>>,
}

impl<N: Number> HPolytope<N> {
    pub fn new(dim: usize, constraints: Vec<HalfSpace<N>>) -> SetResult<Self> {
        check_constraints(dim, &constraints)?;
        Ok(Self { dim, constraints })
    }

    #[inline]
    pub fn constraints_list(&self) -> &[HalfSpace<N>] {
        &self.constraints
    }

    /// `self + v`.
    pub fn translate(&self, v: &DVector<N>) -> SetResult<Self> {
        check_direction(v, self.dim)?;
        Ok(Self {
            dim: self.dim,
            constraints: translate_constraints(&self.constraints, v),
        })
    }

    fn vertices(&self) -> Vec<DVector<N>> {
        h_to_vertices(self.dim, &self.constraints, &Tolerance::default())
    }
}

impl<N: Number> ConvexSet<N> for HPolytope<N> {
    fn dim(&self) -> usize {
        self.dim
    }

    fn support_vector(&self, d: &DVector<N>) -> SetResult<DVector<N>> {
        check_direction(d, self.dim)?;
        support_vector_from_vertices(&self.vertices(), d)
    }

    fn is_empty(&self) -> bool {
        self.vertices().is_empty()
    }

    fn is_bounded(&self) -> bool {
        true
    }

    fn constraints(&self) -> Option<Vec<HalfSpace<N>>> {
        Some(self.constraints.clone())
    }

    fn contains(&self, x: &DVector<N>) -> SetResult<bool> {
        check_direction(x, self.dim)?;
        Ok(hrep_contains(&self.constraints, x))
    }
}

impl<N: Number> Polytope<N> for HPolytope<N> {
    fn vertices_list(&self) -> SetResult<Vec<DVector<N>>> {
        Ok(self.vertices())
    }
}

/// Polyhedron in H-representation, possibly unbounded.
///
/// Support queries are answered by vertex enumeration and therefore only for
/// bounded instances; unbounded ones need an LP backend.
#[derive(Clone, Debug, PartialEq)]
pub struct HPolyhedron<N: Number> {
    dim: usize,
    constraints: Vec<HalfSpace<N>>,
}

impl<N: Number> HPolyhedron<N> {
    pub fn new(dim: usize, constraints: Vec<HalfSpace<N>>) -> SetResult<Self> {
        check_constraints(dim, &constraints)?;
        Ok(Self { dim, constraints })
    }

    #[inline]
    pub fn constraints_list(&self) -> &[HalfSpace<N>] {
        &self.constraints
    }

    /// `self + v`.
    pub fn translate(&self, v: &DVector<N>) -> SetResult<Self> {
        check_direction(v, self.dim)?;
        Ok(Self {
            dim: self.dim,
            constraints: translate_constraints(&self.constraints, v),
        })
    }

    /// Reinterpret as a polytope if the constraint normals positively span the space.
    pub fn to_polytope(&self) -> Option<HPolytope<N>> {
        if self.is_bounded() {
            Some(HPolytope {
                dim: self.dim,
                constraints: self.constraints.clone(),
            })
        } else {
            None
        }
    }
}

impl<N: Number> ConvexSet<N> for HPolyhedron<N> {
    fn dim(&self) -> usize {
        self.dim
    }

    fn support_vector(&self, d: &DVector<N>) -> SetResult<DVector<N>> {
        check_direction(d, self.dim)?;
        if !self.is_bounded() {
            return Err(SetError::Unsupported {
                operation: "support vector of a possibly unbounded polyhedron",
            });
        }
        let vertices = h_to_vertices(self.dim, &self.constraints, &Tolerance::default());
        support_vector_from_vertices(&vertices, d)
    }

    /// Exact for bounded instances; unbounded ones are reported non-empty.
    fn is_empty(&self) -> bool {
        self.is_bounded()
            && h_to_vertices(self.dim, &self.constraints, &Tolerance::default()).is_empty()
    }

    /// Bounded iff the nonzero normals positively span `R^n`.
    fn is_bounded(&self) -> bool {
        let normals: Vec<DVector<N>> = self
            .constraints
            .iter()
            .filter(|h| h.a.iter().any(|x| !x.is_zero()))
            .map(|h| h.a.clone())
            .collect();
        positively_spans(self.dim, &normals, &Tolerance::default())
    }

    fn constraints(&self) -> Option<Vec<HalfSpace<N>>> {
        Some(self.constraints.clone())
    }

    fn contains(&self, x: &DVector<N>) -> SetResult<bool> {
        check_direction(x, self.dim)?;
        Ok(hrep_contains(&self.constraints, x))
    }
}

//! Vertex representations: general `VPolytope` and planar `VPolygon`.

use nalgebra::{DMatrix, DVector};

use super::halfspace::{support_vector_from_vertices, HalfSpace};
use super::hull::{constraints_from_points, convex_hull_2d, extreme_points};
use super::traits::{check_direction, ConvexSet, Polytope};
use crate::error::{ensure_dim, SetError, SetResult};
use crate::num::{approx_geq, is_approx_vec, is_approx_zero, Number, Tolerance};

fn check_points<N: Number>(dim: usize, points: &[DVector<N>]) -> SetResult<()> {
    match points.iter().position(|p| p.len() != dim) {
        Some(i) => Err(SetError::Invalid(format!(
            "vertex {i} has dimension {} but the set has dimension {dim}",
            points[i].len()
        ))),
        None => Ok(()),
    }
}

/// Convex hull of a finite point list (not necessarily minimal).
#[derive(Clone, Debug, PartialEq)]
pub struct VPolytope<N: Number> {
    dim: usize,
    vertices: Vec<DVector<N>>,
}

impl<N: Number> VPolytope<N> {
    pub fn new(dim: usize, vertices: Vec<DVector<N>>) -> SetResult<Self> {
        check_points(dim, &vertices)?;
        Ok(Self { dim, vertices })
    }

    /// Same set with non-extreme and duplicate points removed.
    pub fn remove_redundant_vertices(&self) -> Self {
        Self {
            dim: self.dim,
            vertices: extreme_points(&self.vertices, &Tolerance::default()),
        }
    }

    /// Image under `x ↦ M x` (kept in vertex form).
    pub fn linear_map(&self, m: &DMatrix<N>) -> SetResult<Self> {
        ensure_dim("the matrix columns and set dimension", m.ncols(), self.dim)?;
        Ok(Self {
            dim: m.nrows(),
            vertices: self.vertices.iter().map(|v| m * v).collect(),
        })
    }
}

impl<N: Number> ConvexSet<N> for VPolytope<N> {
    fn dim(&self) -> usize {
        self.dim
    }

    fn support_vector(&self, d: &DVector<N>) -> SetResult<DVector<N>> {
        check_direction(d, self.dim)?;
        support_vector_from_vertices(&self.vertices, d)
    }

    fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    fn is_bounded(&self) -> bool {
        true
    }

    /// Facets of the hull; flat point sets add their affine-hull equalities.
    fn constraints(&self) -> Option<Vec<HalfSpace<N>>> {
        if self.vertices.is_empty() {
            return None;
        }
        Some(constraints_from_points(&self.vertices, &Tolerance::default()))
    }

    fn singleton_element(&self) -> Option<DVector<N>> {
        match extreme_points(&self.vertices, &Tolerance::default()).as_slice() {
            [only] => Some(only.clone()),
            _ => None,
        }
    }
}

impl<N: Number> Polytope<N> for VPolytope<N> {
    fn vertices_list(&self) -> SetResult<Vec<DVector<N>>> {
        Ok(self.vertices.clone())
    }
}

/// Convex polygon stored as its hull vertices in counter-clockwise order.
#[derive(Clone, Debug, PartialEq)]
pub struct VPolygon<N: Number> {
    vertices: Vec<DVector<N>>,
}

impl<N: Number> VPolygon<N> {
    /// Convex hull of planar points.
    pub fn new(points: &[DVector<N>]) -> SetResult<Self> {
        check_points(2, points)?;
        Ok(Self {
            vertices: convex_hull_2d(points, &Tolerance::default()),
        })
    }
}

impl<N: Number> ConvexSet<N> for VPolygon<N> {
    fn dim(&self) -> usize {
        2
    }

    fn support_vector(&self, d: &DVector<N>) -> SetResult<DVector<N>> {
        check_direction(d, 2)?;
        support_vector_from_vertices(&self.vertices, d)
    }

    fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    fn is_bounded(&self) -> bool {
        true
    }

    /// Edge half-spaces in vertex order; points and segments use their
    /// affine-hull equalities plus end caps.
    fn constraints(&self) -> Option<Vec<HalfSpace<N>>> {
        match self.vertices.len() {
            0 => return None,
            1 | 2 => return Some(constraints_from_points(&self.vertices, &Tolerance::default())),
            _ => {}
        }
        let k = self.vertices.len();
        Some(
            (0..k)
                .map(|i| {
                    let p = &self.vertices[i];
                    let q = &self.vertices[(i + 1) % k];
                    // outward normal of a CCW edge is the edge rotated clockwise
                    let n = DVector::from_vec(vec![q[1] - p[1], p[0] - q[0]]);
                    let b = n[0] * p[0] + n[1] * p[1];
                    HalfSpace::new(n, b)
                })
                .collect(),
        )
    }

    fn singleton_element(&self) -> Option<DVector<N>> {
        match self.vertices.as_slice() {
            [only] => Some(only.clone()),
            _ => None,
        }
    }

    /// Left-of-every-edge test; degenerate hulls fall back to segment/point checks.
    fn contains(&self, x: &DVector<N>) -> SetResult<bool> {
        check_direction(x, 2)?;
        let tol = Tolerance::default();
        let v = &self.vertices;
        let inside = match v.len() {
            0 => false,
            1 => is_approx_vec(x, &v[0], &tol),
            2 => {
                let (p, q) = (&v[0], &v[1]);
                let cross = (q[0] - p[0]) * (x[1] - p[1]) - (q[1] - p[1]) * (x[0] - p[0]);
                let t = (x[0] - p[0]) * (q[0] - p[0]) + (x[1] - p[1]) * (q[1] - p[1]);
                let len2 = (q[0] - p[0]) * (q[0] - p[0]) + (q[1] - p[1]) * (q[1] - p[1]);
                is_approx_zero(cross, tol.ztol)
                    && approx_geq(t, N::zero(), tol.ztol)
                    && approx_geq(len2, t, tol.ztol)
            }
            k => (0..k).all(|i| {
                let p = &v[i];
                let q = &v[(i + 1) % k];
                let cross = (q[0] - p[0]) * (x[1] - p[1]) - (q[1] - p[1]) * (x[0] - p[0]);
                approx_geq(cross, N::zero(), tol.ztol)
            }),
        };
        Ok(inside)
    }
}

impl<N: Number> Polytope<N> for VPolygon<N> {
    fn vertices_list(&self) -> SetResult<Vec<DVector<N>>> {
        Ok(self.vertices.clone())
    }
}

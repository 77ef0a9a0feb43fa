//! Zonotopes `{c + G ξ : ξ ∈ [-1,1]^p}`.

use nalgebra::{DMatrix, DVector};

use super::halfspace::HalfSpace;
use super::hull::{constraints_from_points, extreme_points};
use super::traits::{check_direction, corner_count, Centered, ConvexSet, Polytope, ZonotopeLike};
use crate::error::{SetError, SetResult};
use crate::linalg::rank;
use crate::num::{Number, Tolerance};
use crate::ops::zonotope_difference::facet_constraints;

/// `c + Σ_j s_j g_j` with `s_j = sign(g_j · d)`, taking `+1` where the product vanishes.
fn support_vector_from_generators<N: Number>(
    center: &DVector<N>,
    generators: &DMatrix<N>,
    d: &DVector<N>,
) -> DVector<N> {
    let mut v = center.clone();
    for g in generators.column_iter() {
        if g.dot(d) < N::zero() {
            v -= g;
        } else {
            v += g;
        }
    }
    v
}

/// Center plus generator matrix.
///
/// Invariants:
/// - `generators.nrows() == center.len()`.
#[derive(Clone, Debug, PartialEq)]
pub struct Zonotope<N: Number> {
    center: DVector<N>,
    generators: DMatrix<N>,
}

impl<N: Number> Zonotope<N> {
    pub fn new(center: DVector<N>, generators: DMatrix<N>) -> SetResult<Self> {
        if generators.nrows() != center.len() {
            return Err(SetError::Invalid(format!(
                "generator matrix has {} rows but the center has length {}",
                generators.nrows(),
                center.len()
            )));
        }
        Ok(Self { center, generators })
    }

    pub fn translate(&self, v: &DVector<N>) -> SetResult<Self> {
        check_direction(v, self.dim())?;
        Ok(Self {
            center: &self.center + v,
            generators: self.generators.clone(),
        })
    }

    /// Generator matrix has full row rank (the zonotope is full-dimensional).
    pub fn is_full_dimensional(&self) -> bool {
        let n = self.dim();
        let rows: Vec<Vec<N>> = (0..n)
            .map(|i| (0..self.generators.ncols()).map(|j| self.generators[(i, j)]).collect())
            .collect();
        rank(rows, N::default_ztol()) == n
    }
}

impl<N: Number> ConvexSet<N> for Zonotope<N> {
    fn dim(&self) -> usize {
        self.center.len()
    }

    fn support_vector(&self, d: &DVector<N>) -> SetResult<DVector<N>> {
        check_direction(d, self.dim())?;
        Ok(support_vector_from_generators(&self.center, &self.generators, d))
    }

    /// `c · d + Σ_j |g_j · d|`.
    fn support_function(&self, d: &DVector<N>) -> SetResult<N> {
        check_direction(d, self.dim())?;
        let spread = self
            .generators
            .column_iter()
            .fold(N::zero(), |acc, g| acc + g.dot(d).abs());
        Ok(self.center.dot(d) + spread)
    }

    fn is_bounded(&self) -> bool {
        true
    }

    /// Facet half-spaces from generator tuples. Flat zonotopes fall back to the
    /// vertex hull (affine-hull equalities plus relative facets), which needs
    /// the `2^p` sign combinations.
    fn constraints(&self) -> Option<Vec<HalfSpace<N>>> {
        if !self.is_full_dimensional() {
            let vertices = self.vertices_list().ok()?;
            return Some(constraints_from_points(&vertices, &Tolerance::default()));
        }
        let none = DMatrix::from_element(self.dim(), 0, N::zero());
        Some(facet_constraints(
            &self.generators,
            &none,
            &self.center,
            &Tolerance::default(),
        ))
    }

    fn singleton_element(&self) -> Option<DVector<N>> {
        self.generators
            .iter()
            .all(|g| g.is_zero())
            .then(|| self.center.clone())
    }
}

impl<N: Number> Centered<N> for Zonotope<N> {
    fn center(&self) -> DVector<N> {
        self.center.clone()
    }
}

impl<N: Number> ZonotopeLike<N> for Zonotope<N> {
    fn genmat(&self) -> DMatrix<N> {
        self.generators.clone()
    }
}

impl<N: Number> Polytope<N> for Zonotope<N> {
    /// All `2^p` sign combinations reduced to extreme points.
    fn vertices_list(&self) -> SetResult<Vec<DVector<N>>> {
        let count = corner_count(self.generators.ncols())?;
        let mut points = Vec::with_capacity(count);
        for mask in 0..count {
            let mut v = self.center.clone();
            for (j, g) in self.generators.column_iter().enumerate() {
                if mask & (1 << j) != 0 {
                    v += g;
                } else {
                    v -= g;
                }
            }
            points.push(v);
        }
        Ok(extreme_points(&points, &Tolerance::default()))
    }
}

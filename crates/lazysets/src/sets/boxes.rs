//! Axis-aligned representations: empty set, zero set, singleton, interval,
//! hyperrectangle.
//!
//! All of them answer support queries in closed form from a center and a
//! radius vector; the shared helpers live in `traits`.

use std::marker::PhantomData;

use nalgebra::{DMatrix, DVector};

use super::halfspace::HalfSpace;
use super::traits::{
    box_constraints, box_contains, box_support_vector, box_vertices, check_direction, Centered,
    ConvexSet, Hyperrectangular, Polytope, SingletonLike, ZonotopeLike,
};
use crate::error::{SetError, SetResult};
use crate::num::{is_approx_vec, Number, Tolerance};

#[inline]
fn check_index(i: usize, dim: usize) -> SetResult<()> {
    if i < dim {
        Ok(())
    } else {
        Err(SetError::IndexOutOfRange { index: i, dim })
    }
}

/// The empty set in `R^dim`; absorbing for hulls, sums, and maps.
#[derive(Clone, Debug, PartialEq)]
pub struct EmptySet<N: Number> {
    dim: usize,
    _scalar: PhantomData<N>,
}

impl<N: Number> EmptySet<N> {
    pub fn new(dim: usize) -> Self {
        Self {
            dim,
            _scalar: PhantomData,
        }
    }
}

impl<N: Number> ConvexSet<N> for EmptySet<N> {
    fn dim(&self) -> usize {
        self.dim
    }

    fn support_vector(&self, d: &DVector<N>) -> SetResult<DVector<N>> {
        check_direction(d, self.dim)?;
        Err(SetError::EmptySet)
    }

    fn is_empty(&self) -> bool {
        true
    }

    fn is_bounded(&self) -> bool {
        true
    }

    fn contains(&self, x: &DVector<N>) -> SetResult<bool> {
        check_direction(x, self.dim)?;
        Ok(false)
    }
}

impl<N: Number> Polytope<N> for EmptySet<N> {
    fn vertices_list(&self) -> SetResult<Vec<DVector<N>>> {
        Ok(Vec::new())
    }
}

/// The origin of `R^dim` as a set.
///
/// Distinct from `Singleton(0)`: it is the identity of Minkowski sum and
/// difference, and operators short-circuit on it.
#[derive(Clone, Debug, PartialEq)]
pub struct ZeroSet<N: Number> {
    dim: usize,
    _scalar: PhantomData<N>,
}

impl<N: Number> ZeroSet<N> {
    pub fn new(dim: usize) -> Self {
        Self {
            dim,
            _scalar: PhantomData,
        }
    }
}

impl<N: Number> ConvexSet<N> for ZeroSet<N> {
    fn dim(&self) -> usize {
        self.dim
    }

    fn support_vector(&self, d: &DVector<N>) -> SetResult<DVector<N>> {
        check_direction(d, self.dim)?;
        Ok(DVector::zeros(self.dim))
    }

    fn support_function(&self, d: &DVector<N>) -> SetResult<N> {
        check_direction(d, self.dim)?;
        Ok(N::zero())
    }

    fn is_bounded(&self) -> bool {
        true
    }

    fn constraints(&self) -> Option<Vec<HalfSpace<N>>> {
        Some(box_constraints(&DVector::zeros(self.dim), &DVector::zeros(self.dim)))
    }

    fn singleton_element(&self) -> Option<DVector<N>> {
        Some(DVector::zeros(self.dim))
    }

    fn is_zero_set(&self) -> bool {
        true
    }

    fn contains(&self, x: &DVector<N>) -> SetResult<bool> {
        check_direction(x, self.dim)?;
        Ok(is_approx_vec(x, &DVector::zeros(self.dim), &Tolerance::default()))
    }
}

impl<N: Number> Centered<N> for ZeroSet<N> {
    fn center(&self) -> DVector<N> {
        DVector::zeros(self.dim)
    }
}

impl<N: Number> Hyperrectangular<N> for ZeroSet<N> {
    fn radius_hyperrectangle(&self, i: usize) -> SetResult<N> {
        check_index(i, self.dim)?;
        Ok(N::zero())
    }
}

impl<N: Number> SingletonLike<N> for ZeroSet<N> {
    fn element(&self) -> DVector<N> {
        DVector::zeros(self.dim)
    }
}

impl<N: Number> ZonotopeLike<N> for ZeroSet<N> {
    fn genmat(&self) -> DMatrix<N> {
        DMatrix::from_element(self.dim, 0, N::zero())
    }
}

impl<N: Number> Polytope<N> for ZeroSet<N> {
    fn vertices_list(&self) -> SetResult<Vec<DVector<N>>> {
        Ok(vec![DVector::zeros(self.dim)])
    }
}

/// A single point.
#[derive(Clone, Debug, PartialEq)]
pub struct Singleton<N: Number> {
    element: DVector<N>,
}

impl<N: Number> Singleton<N> {
    pub fn new(element: DVector<N>) -> Self {
        Self { element }
    }

    pub fn translate(&self, v: &DVector<N>) -> SetResult<Self> {
        check_direction(v, self.element.len())?;
        Ok(Self::new(&self.element + v))
    }
}

impl<N: Number> ConvexSet<N> for Singleton<N> {
    fn dim(&self) -> usize {
        self.element.len()
    }

    fn support_vector(&self, d: &DVector<N>) -> SetResult<DVector<N>> {
        check_direction(d, self.dim())?;
        Ok(self.element.clone())
    }

    fn is_bounded(&self) -> bool {
        true
    }

    fn constraints(&self) -> Option<Vec<HalfSpace<N>>> {
        Some(box_constraints(&self.element, &DVector::zeros(self.dim())))
    }

    fn singleton_element(&self) -> Option<DVector<N>> {
        Some(self.element.clone())
    }

    fn contains(&self, x: &DVector<N>) -> SetResult<bool> {
        check_direction(x, self.dim())?;
        Ok(is_approx_vec(x, &self.element, &Tolerance::default()))
    }
}

impl<N: Number> Centered<N> for Singleton<N> {
    fn center(&self) -> DVector<N> {
        self.element.clone()
    }
}

impl<N: Number> Hyperrectangular<N> for Singleton<N> {
    fn radius_hyperrectangle(&self, i: usize) -> SetResult<N> {
        check_index(i, self.dim())?;
        Ok(N::zero())
    }
}

impl<N: Number> SingletonLike<N> for Singleton<N> {
    fn element(&self) -> DVector<N> {
        self.element.clone()
    }
}

impl<N: Number> ZonotopeLike<N> for Singleton<N> {
    fn genmat(&self) -> DMatrix<N> {
        DMatrix::from_element(self.dim(), 0, N::zero())
    }
}

impl<N: Number> Polytope<N> for Singleton<N> {
    fn vertices_list(&self) -> SetResult<Vec<DVector<N>>> {
        Ok(vec![self.element.clone()])
    }
}

/// Closed interval `[lo, hi]` in `R^1`.
#[derive(Clone, Debug, PartialEq)]
pub struct Interval<N: Number> {
    lo: N,
    hi: N,
}

impl<N: Number> Interval<N> {
    pub fn new(lo: N, hi: N) -> SetResult<Self> {
        if lo > hi {
            return Err(SetError::Invalid(format!(
                "interval bounds out of order: [{lo}, {hi}]"
            )));
        }
        Ok(Self { lo, hi })
    }

    #[inline]
    pub fn min(&self) -> N {
        self.lo
    }

    #[inline]
    pub fn max(&self) -> N {
        self.hi
    }

    #[inline]
    fn half_width(&self) -> N {
        (self.hi - self.lo) / (N::one() + N::one())
    }
}

impl<N: Number> ConvexSet<N> for Interval<N> {
    fn dim(&self) -> usize {
        1
    }

    fn support_vector(&self, d: &DVector<N>) -> SetResult<DVector<N>> {
        check_direction(d, 1)?;
        let x = if d[0] > N::zero() { self.hi } else { self.lo };
        Ok(DVector::from_element(1, x))
    }

    fn is_bounded(&self) -> bool {
        true
    }

    fn constraints(&self) -> Option<Vec<HalfSpace<N>>> {
        Some(vec![
            HalfSpace::new(DVector::from_element(1, N::one()), self.hi),
            HalfSpace::new(DVector::from_element(1, -N::one()), -self.lo),
        ])
    }

    fn singleton_element(&self) -> Option<DVector<N>> {
        (self.lo == self.hi).then(|| DVector::from_element(1, self.lo))
    }

    fn contains(&self, x: &DVector<N>) -> SetResult<bool> {
        check_direction(x, 1)?;
        let r = DVector::from_element(1, self.half_width());
        Ok(box_contains(&self.center(), &r, x, N::default_ztol()))
    }
}

impl<N: Number> Centered<N> for Interval<N> {
    fn center(&self) -> DVector<N> {
        DVector::from_element(1, self.lo + self.half_width())
    }
}

impl<N: Number> Hyperrectangular<N> for Interval<N> {
    fn radius_hyperrectangle(&self, i: usize) -> SetResult<N> {
        check_index(i, 1)?;
        Ok(self.half_width())
    }
}

impl<N: Number> ZonotopeLike<N> for Interval<N> {
    fn genmat(&self) -> DMatrix<N> {
        let r = self.half_width();
        if r.is_zero() {
            DMatrix::from_element(1, 0, N::zero())
        } else {
            DMatrix::from_element(1, 1, r)
        }
    }
}

impl<N: Number> Polytope<N> for Interval<N> {
    fn vertices_list(&self) -> SetResult<Vec<DVector<N>>> {
        Ok(if self.lo == self.hi {
            vec![DVector::from_element(1, self.lo)]
        } else {
            vec![DVector::from_element(1, self.lo), DVector::from_element(1, self.hi)]
        })
    }
}

/// Axis-aligned box `center ± radius`.
///
/// Invariants:
/// - `center` and `radius` have the same length.
/// - Every radius entry is non-negative.
#[derive(Clone, Debug, PartialEq)]
pub struct Hyperrectangle<N: Number> {
    center: DVector<N>,
    radius: DVector<N>,
}

impl<N: Number> Hyperrectangle<N> {
    pub fn new(center: DVector<N>, radius: DVector<N>) -> SetResult<Self> {
        if center.len() != radius.len() {
            return Err(SetError::Invalid(format!(
                "center has length {} but radius has length {}",
                center.len(),
                radius.len()
            )));
        }
        if let Some(i) = radius.iter().position(|&r| r < N::zero()) {
            return Err(SetError::Invalid(format!(
                "radius entry {i} is negative: {}",
                radius[i]
            )));
        }
        Ok(Self { center, radius })
    }

    /// Box from its lower and upper corners.
    pub fn from_bounds(low: DVector<N>, high: DVector<N>) -> SetResult<Self> {
        if low.len() != high.len() {
            return Err(SetError::Invalid(format!(
                "low has length {} but high has length {}",
                low.len(),
                high.len()
            )));
        }
        let two = N::one() + N::one();
        let center = low.zip_map(&high, |l, h| (l + h) / two);
        let radius = low.zip_map(&high, |l, h| (h - l) / two);
        Self::new(center, radius)
    }

    pub fn translate(&self, v: &DVector<N>) -> SetResult<Self> {
        check_direction(v, self.dim())?;
        Ok(Self {
            center: &self.center + v,
            radius: self.radius.clone(),
        })
    }
}

impl<N: Number> ConvexSet<N> for Hyperrectangle<N> {
    fn dim(&self) -> usize {
        self.center.len()
    }

    fn support_vector(&self, d: &DVector<N>) -> SetResult<DVector<N>> {
        check_direction(d, self.dim())?;
        Ok(box_support_vector(&self.center, &self.radius, d))
    }

    fn is_bounded(&self) -> bool {
        true
    }

    fn constraints(&self) -> Option<Vec<HalfSpace<N>>> {
        Some(box_constraints(&self.center, &self.radius))
    }

    fn singleton_element(&self) -> Option<DVector<N>> {
        self.radius
            .iter()
            .all(|r| r.is_zero())
            .then(|| self.center.clone())
    }

    fn contains(&self, x: &DVector<N>) -> SetResult<bool> {
        check_direction(x, self.dim())?;
        Ok(box_contains(&self.center, &self.radius, x, N::default_ztol()))
    }
}

impl<N: Number> Centered<N> for Hyperrectangle<N> {
    fn center(&self) -> DVector<N> {
        self.center.clone()
    }
}

impl<N: Number> Hyperrectangular<N> for Hyperrectangle<N> {
    fn radius_hyperrectangle(&self, i: usize) -> SetResult<N> {
        check_index(i, self.dim())?;
        Ok(self.radius[i])
    }

    fn radius_vector(&self) -> SetResult<DVector<N>> {
        Ok(self.radius.clone())
    }
}

impl<N: Number> ZonotopeLike<N> for Hyperrectangle<N> {
    /// One generator `r_i e_i` per dimension with nonzero radius.
    fn genmat(&self) -> DMatrix<N> {
        let active: Vec<usize> = (0..self.dim()).filter(|&i| !self.radius[i].is_zero()).collect();
        let mut g = DMatrix::from_element(self.dim(), active.len(), N::zero());
        for (j, &i) in active.iter().enumerate() {
            g[(i, j)] = self.radius[i];
        }
        g
    }
}

impl<N: Number> Polytope<N> for Hyperrectangle<N> {
    fn vertices_list(&self) -> SetResult<Vec<DVector<N>>> {
        box_vertices(&self.center, &self.radius)
    }
}

//! Lazy Minkowski sum `X ⊕ Y`.

use std::marker::PhantomData;

use nalgebra::DVector;

use crate::error::{ensure_dim, SetResult};
use crate::num::Number;
use crate::sets::{check_direction, ConvexSet};

/// `{x + y : x ∈ X, y ∈ Y}`, answered through the operands' support queries.
#[derive(Clone, Debug)]
pub struct MinkowskiSum<N: Number, X: ConvexSet<N>, Y: ConvexSet<N>> {
    x: X,
    y: Y,
    _scalar: PhantomData<N>,
}

impl<N: Number, X: ConvexSet<N>, Y: ConvexSet<N>> MinkowskiSum<N, X, Y> {
    pub fn new(x: X, y: Y) -> SetResult<Self> {
        ensure_dim("the dimensions of the summands", x.dim(), y.dim())?;
        Ok(Self {
            x,
            y,
            _scalar: PhantomData,
        })
    }

    #[inline]
    pub fn first(&self) -> &X {
        &self.x
    }

    #[inline]
    pub fn second(&self) -> &Y {
        &self.y
    }
}

impl<N: Number, X: ConvexSet<N>, Y: ConvexSet<N>> ConvexSet<N> for MinkowskiSum<N, X, Y> {
    fn dim(&self) -> usize {
        self.x.dim()
    }

    fn support_vector(&self, d: &DVector<N>) -> SetResult<DVector<N>> {
        check_direction(d, self.dim())?;
        Ok(self.x.support_vector(d)? + self.y.support_vector(d)?)
    }

    fn support_function(&self, d: &DVector<N>) -> SetResult<N> {
        check_direction(d, self.dim())?;
        Ok(self.x.support_function(d)? + self.y.support_function(d)?)
    }

    fn is_empty(&self) -> bool {
        self.x.is_empty() || self.y.is_empty()
    }

    fn is_bounded(&self) -> bool {
        self.is_empty() || (self.x.is_bounded() && self.y.is_bounded())
    }

    fn singleton_element(&self) -> Option<DVector<N>> {
        Some(self.x.singleton_element()? + self.y.singleton_element()?)
    }
}

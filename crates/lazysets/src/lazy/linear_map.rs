//! Lazy linear map `M · X`.

use nalgebra::{DMatrix, DVector};

use crate::error::{ensure_dim, SetError, SetResult};
use crate::linalg::inverse;
use crate::num::Number;
use crate::sets::{check_direction, ConvexSet};

/// `{M x : x ∈ X}` with `M` of shape `m × dim(X)`.
///
/// Support queries pull the direction back: `σ(d) = M σ_X(Mᵀ d)`.
#[derive(Clone, Debug)]
pub struct LinearMap<N: Number, S: ConvexSet<N>> {
    matrix: DMatrix<N>,
    set: S,
}

impl<N: Number, S: ConvexSet<N>> LinearMap<N, S> {
    pub fn new(matrix: DMatrix<N>, set: S) -> SetResult<Self> {
        ensure_dim(
            "the matrix columns and set dimension",
            matrix.ncols(),
            set.dim(),
        )?;
        Ok(Self { matrix, set })
    }

    #[inline]
    pub fn matrix(&self) -> &DMatrix<N> {
        &self.matrix
    }

    #[inline]
    pub fn set(&self) -> &S {
        &self.set
    }
}

impl<N: Number, S: ConvexSet<N>> ConvexSet<N> for LinearMap<N, S> {
    fn dim(&self) -> usize {
        self.matrix.nrows()
    }

    fn support_vector(&self, d: &DVector<N>) -> SetResult<DVector<N>> {
        check_direction(d, self.dim())?;
        let v = self.set.support_vector(&self.matrix.tr_mul(d))?;
        Ok(&self.matrix * v)
    }

    fn support_function(&self, d: &DVector<N>) -> SetResult<N> {
        check_direction(d, self.dim())?;
        self.set.support_function(&self.matrix.tr_mul(d))
    }

    fn is_empty(&self) -> bool {
        self.set.is_empty()
    }

    fn is_bounded(&self) -> bool {
        self.set.is_bounded()
    }

    fn singleton_element(&self) -> Option<DVector<N>> {
        self.set
            .singleton_element()
            .map(|x| &self.matrix * x)
    }

    /// Pulls `x` back through `M` when `M` is invertible.
    fn contains(&self, x: &DVector<N>) -> SetResult<bool> {
        check_direction(x, self.dim())?;
        if self.matrix.nrows() != self.matrix.ncols() {
            return Err(SetError::Unsupported {
                operation: "membership in the image of a non-square map",
            });
        }
        let minv = inverse(&self.matrix, N::default_ztol()).ok_or(
            SetError::Singular {
                context: "membership in a linear map",
            },
        )?;
        self.set.contains(&(minv * x))
    }
}

//! Lazy reset map: selected coordinates are overwritten by constants.
//!
//! `ResetMap(X, resets)` is the affine map `x ↦ M x + r` applied to `X`, where
//! `M` is diagonal with `0` on reset dimensions and `1` elsewhere, and `r`
//! holds the reset values (zero elsewhere).

use std::collections::BTreeMap;

use nalgebra::{DMatrix, DVector};

use crate::error::{SetError, SetResult};
use crate::num::Number;
use crate::sets::{check_direction, ConvexSet};

#[derive(Clone, Debug)]
pub struct ResetMap<N: Number, S: ConvexSet<N>> {
    set: S,
    resets: BTreeMap<usize, N>,
}

impl<N: Number, S: ConvexSet<N>> ResetMap<N, S> {
    /// Fails with `IndexOutOfRange` if a reset dimension is not below `set.dim()`.
    pub fn new(set: S, resets: BTreeMap<usize, N>) -> SetResult<Self> {
        let dim = set.dim();
        if let Some((&index, _)) = resets.iter().find(|&(&i, _)| i >= dim) {
            return Err(SetError::IndexOutOfRange { index, dim });
        }
        Ok(Self { set, resets })
    }

    #[inline]
    pub fn set(&self) -> &S {
        &self.set
    }

    #[inline]
    pub fn resets(&self) -> &BTreeMap<usize, N> {
        &self.resets
    }

    /// Diagonal `M`: `0` on reset dimensions, `1` elsewhere.
    pub fn matrix(&self) -> DMatrix<N> {
        let n = self.set.dim();
        DMatrix::from_fn(n, n, |i, j| {
            if i == j && !self.resets.contains_key(&i) {
                N::one()
            } else {
                N::zero()
            }
        })
    }

    /// Translation `r`: reset values on reset dimensions, `0` elsewhere.
    pub fn vector(&self) -> DVector<N> {
        let mut r = DVector::zeros(self.set.dim());
        for (&i, &v) in &self.resets {
            r[i] = v;
        }
        r
    }

    /// `M d`, i.e. `d` with its reset coordinates zeroed.
    fn project(&self, d: &DVector<N>) -> DVector<N> {
        let mut md = d.clone();
        for &i in self.resets.keys() {
            md[i] = N::zero();
        }
        md
    }
}

impl<N: Number, S: ConvexSet<N>> ConvexSet<N> for ResetMap<N, S> {
    fn dim(&self) -> usize {
        self.set.dim()
    }

    /// `M σ(M d, X) + r`.
    fn support_vector(&self, d: &DVector<N>) -> SetResult<DVector<N>> {
        check_direction(d, self.dim())?;
        let mut v = self.set.support_vector(&self.project(d))?;
        for (&i, &value) in &self.resets {
            v[i] = value;
        }
        Ok(v)
    }

    /// `ρ(M d, X) + d · r`.
    fn support_function(&self, d: &DVector<N>) -> SetResult<N> {
        check_direction(d, self.dim())?;
        Ok(self.set.support_function(&self.project(d))? + d.dot(&self.vector()))
    }

    fn is_empty(&self) -> bool {
        self.set.is_empty()
    }

    /// Bounded if `X` is, or if every dimension is reset.
    fn is_bounded(&self) -> bool {
        self.resets.len() == self.dim() || self.set.is_bounded()
    }

    fn singleton_element(&self) -> Option<DVector<N>> {
        if self.resets.len() == self.dim() && !self.set.is_empty() {
            return Some(self.vector());
        }
        let mut x = self.set.singleton_element()?;
        for (&i, &value) in &self.resets {
            x[i] = value;
        }
        Some(x)
    }
}

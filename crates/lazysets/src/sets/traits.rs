//! Capability traits shared by every set representation.
//!
//! Design
//! - One base trait (`ConvexSet`) carries the queries every set answers:
//!   dimension, support vector, support function, emptiness, boundedness.
//! - Narrower capabilities refine it without forming a subtype chain:
//!   `Polytope` (vertex listing), `Centered` + `Hyperrectangular` (boxes),
//!   `SingletonLike` (one point), `ZonotopeLike` (center + generators).
//! - Capabilities an algorithm only needs at run time (a half-space system, a
//!   single element, the zero set) are queried through methods on `ConvexSet`
//!   that default to "absent", so operators can take any set and check.

use std::rc::Rc;
use std::sync::Arc;

use nalgebra::{DMatrix, DVector};

use super::halfspace::HalfSpace;
use crate::error::{ensure_dim, SetError, SetResult};
use crate::linalg::unit_vector;
use crate::num::{approx_geq, approx_leq, Number};

/// A closed convex set in `R^n` queried through its support function.
///
/// Invariants:
/// - `support_function(d) == dot(d, support_vector(d))` up to tolerance.
/// - Directions must have length `dim()`; otherwise queries fail with
///   `DimensionMismatch`.
pub trait ConvexSet<N: Number> {
    fn dim(&self) -> usize;

    /// A point of the set maximizing `d · x`.
    fn support_vector(&self, d: &DVector<N>) -> SetResult<DVector<N>>;

    /// `sup { d · x : x ∈ X }`.
    fn support_function(&self, d: &DVector<N>) -> SetResult<N> {
        let v = self.support_vector(d)?;
        Ok(d.dot(&v))
    }

    fn is_empty(&self) -> bool {
        false
    }

    fn is_bounded(&self) -> bool;

    /// Half-space representation, if the set is polyhedral and this
    /// representation can produce one.
    fn constraints(&self) -> Option<Vec<HalfSpace<N>>> {
        None
    }

    /// The single element, if the set is known to be a singleton.
    fn singleton_element(&self) -> Option<DVector<N>> {
        None
    }

    /// True only for the dedicated zero set (origin singleton with identity semantics).
    fn is_zero_set(&self) -> bool {
        false
    }

    /// Point membership.
    fn contains(&self, _x: &DVector<N>) -> SetResult<bool> {
        Err(SetError::Unsupported {
            operation: "point membership",
        })
    }
}

/// Check that a direction (or point) matches the set dimension.
#[inline]
pub(crate) fn check_direction<N: Number>(d: &DVector<N>, dim: usize) -> SetResult<()> {
    ensure_dim("the direction and set dimensions", d.len(), dim)
}

macro_rules! forward_convex_set_through_pointer {
    ($($ptr:ty),* $(,)?) => {
        $(
            impl<N: Number, S: ConvexSet<N> + ?Sized> ConvexSet<N> for $ptr {
                #[inline]
                fn dim(&self) -> usize {
                    (**self).dim()
                }
                #[inline]
                fn support_vector(&self, d: &DVector<N>) -> SetResult<DVector<N>> {
                    (**self).support_vector(d)
                }
                #[inline]
                fn support_function(&self, d: &DVector<N>) -> SetResult<N> {
                    (**self).support_function(d)
                }
                #[inline]
                fn is_empty(&self) -> bool {
                    (**self).is_empty()
                }
                #[inline]
                fn is_bounded(&self) -> bool {
                    (**self).is_bounded()
                }
                #[inline]
                fn constraints(&self) -> Option<Vec<HalfSpace<N>>> {
                    (**self).constraints()
                }
                #[inline]
                fn singleton_element(&self) -> Option<DVector<N>> {
                    (**self).singleton_element()
                }
                #[inline]
                fn is_zero_set(&self) -> bool {
                    (**self).is_zero_set()
                }
                #[inline]
                fn contains(&self, x: &DVector<N>) -> SetResult<bool> {
                    (**self).contains(x)
                }
            }
        )*
    };
}

forward_convex_set_through_pointer!(&S, Box<S>, Rc<S>, Arc<S>);

/// Implement `ConvexSet` for an enum whose variants all wrap a `ConvexSet`.
macro_rules! delegate_convex_set {
    ($enum:ident { $($variant:ident),+ $(,)? }) => {
        impl<N: $crate::num::Number> $crate::sets::ConvexSet<N> for $enum<N> {
            fn dim(&self) -> usize {
                match self { $($enum::$variant(s) => $crate::sets::ConvexSet::dim(s),)+ }
            }
            fn support_vector(
                &self,
                d: &nalgebra::DVector<N>,
            ) -> $crate::error::SetResult<nalgebra::DVector<N>> {
                match self { $($enum::$variant(s) => $crate::sets::ConvexSet::support_vector(s, d),)+ }
            }
            fn support_function(&self, d: &nalgebra::DVector<N>) -> $crate::error::SetResult<N> {
                match self { $($enum::$variant(s) => $crate::sets::ConvexSet::support_function(s, d),)+ }
            }
            fn is_empty(&self) -> bool {
                match self { $($enum::$variant(s) => $crate::sets::ConvexSet::is_empty(s),)+ }
            }
            fn is_bounded(&self) -> bool {
                match self { $($enum::$variant(s) => $crate::sets::ConvexSet::is_bounded(s),)+ }
            }
            fn constraints(&self) -> Option<Vec<$crate::sets::HalfSpace<N>>> {
                match self { $($enum::$variant(s) => $crate::sets::ConvexSet::constraints(s),)+ }
            }
            fn singleton_element(&self) -> Option<nalgebra::DVector<N>> {
                match self { $($enum::$variant(s) => $crate::sets::ConvexSet::singleton_element(s),)+ }
            }
            fn is_zero_set(&self) -> bool {
                match self { $($enum::$variant(s) => $crate::sets::ConvexSet::is_zero_set(s),)+ }
            }
            fn contains(&self, x: &nalgebra::DVector<N>) -> $crate::error::SetResult<bool> {
                match self { $($enum::$variant(s) => $crate::sets::ConvexSet::contains(s, x),)+ }
            }
        }
    };
}
pub(crate) use delegate_convex_set;

/// Bounded set with finitely many vertices.
///
/// `vertices_list` is unordered and may contain duplicates. It fails only when
/// the vertex count is not addressable (`2^k` corners with `k >= usize::BITS`).
pub trait Polytope<N: Number>: ConvexSet<N> {
    fn vertices_list(&self) -> SetResult<Vec<DVector<N>>>;
}

/// Set with a distinguished center point.
pub trait Centered<N: Number>: ConvexSet<N> {
    fn center(&self) -> DVector<N>;
}

/// Axis-aligned box given by a center and per-dimension radii.
pub trait Hyperrectangular<N: Number>: Centered<N> {
    /// Radius in dimension `i` (0-based); fails with `IndexOutOfRange`.
    fn radius_hyperrectangle(&self, i: usize) -> SetResult<N>;

    fn radius_vector(&self) -> SetResult<DVector<N>> {
        let mut r = DVector::zeros(self.dim());
        for i in 0..self.dim() {
            r[i] = self.radius_hyperrectangle(i)?;
        }
        Ok(r)
    }

    /// Lower corner `center - radius`.
    fn low(&self) -> SetResult<DVector<N>> {
        let r = self.radius_vector()?;
        Ok(self.center() - r)
    }

    /// Upper corner `center + radius`.
    fn high(&self) -> SetResult<DVector<N>> {
        let r = self.radius_vector()?;
        Ok(self.center() + r)
    }
}

/// Set consisting of exactly one point.
pub trait SingletonLike<N: Number>: Hyperrectangular<N> {
    fn element(&self) -> DVector<N>;

    /// Coordinate `i` (0-based) of the element.
    fn element_at(&self, i: usize) -> SetResult<N> {
        let dim = self.dim();
        if i >= dim {
            return Err(SetError::IndexOutOfRange { index: i, dim });
        }
        Ok(self.element()[i])
    }
}

/// `{c + G ξ : ξ ∈ [-1,1]^p}` with `G` of shape `n × p`.
pub trait ZonotopeLike<N: Number>: Centered<N> {
    fn genmat(&self) -> DMatrix<N>;

    fn ngens(&self) -> usize {
        self.genmat().ncols()
    }
}

/// Support vector of a box: `c_i + sign(d_i) r_i`, and `c_i` where `d_i == 0`
/// (either signed zero).
pub(crate) fn box_support_vector<N: Number>(
    center: &DVector<N>,
    radius: &DVector<N>,
    d: &DVector<N>,
) -> DVector<N> {
    DVector::from_fn(center.len(), |i, _| {
        if d[i] > N::zero() {
            center[i] + radius[i]
        } else if d[i] < N::zero() {
            center[i] - radius[i]
        } else {
            center[i]
        }
    })
}

/// Box half-spaces: all upper faces `e_i · x <= c_i + r_i`, then all lower faces
/// `-e_i · x <= r_i - c_i`.
pub(crate) fn box_constraints<N: Number>(
    center: &DVector<N>,
    radius: &DVector<N>,
) -> Vec<HalfSpace<N>> {
    let n = center.len();
    let mut out = Vec::with_capacity(2 * n);
    for i in 0..n {
        out.push(HalfSpace::new(unit_vector(n, i), center[i] + radius[i]));
    }
    for i in 0..n {
        out.push(HalfSpace::new(-unit_vector::<N>(n, i), radius[i] - center[i]));
    }
    out
}

/// `2^k` as a count of corners, or `Unsupported` once it leaves `usize`.
pub(crate) fn corner_count(k: usize) -> SetResult<usize> {
    u32::try_from(k)
        .ok()
        .and_then(|k| 1usize.checked_shl(k))
        .ok_or(SetError::Unsupported {
            operation: "vertex enumeration with 64 or more independent directions",
        })
}

/// Corners of a box; flat dimensions (zero radius) do not duplicate corners.
pub(crate) fn box_vertices<N: Number>(
    center: &DVector<N>,
    radius: &DVector<N>,
) -> SetResult<Vec<DVector<N>>> {
    let active: Vec<usize> = (0..center.len()).filter(|&i| !radius[i].is_zero()).collect();
    let count = corner_count(active.len())?;
    let mut out = Vec::with_capacity(count);
    for mask in 0..count {
        let mut v = center.clone();
        for (bit, &i) in active.iter().enumerate() {
            if mask & (1 << bit) != 0 {
                v[i] = v[i] + radius[i];
            } else {
                v[i] = v[i] - radius[i];
            }
        }
        out.push(v);
    }
    Ok(out)
}

/// `|x_i - c_i| <= r_i` in every dimension, up to `ztol`.
pub(crate) fn box_contains<N: Number>(
    center: &DVector<N>,
    radius: &DVector<N>,
    x: &DVector<N>,
    ztol: N,
) -> bool {
    (0..center.len()).all(|i| {
        approx_leq(x[i], center[i] + radius[i], ztol)
            && approx_geq(x[i], center[i] - radius[i], ztol)
    })
}

//! Scalar abstraction and tolerance-aware comparisons.
//!
//! Purpose
//! - Every geometric predicate in the crate goes through these helpers, so the
//!   choice of tolerance lives in one place.
//! - Exact scalars (`Rational64`) compare exactly by default; floating scalars use
//!   `sqrt(machine epsilon)`.
//!
//! Why explicit tolerances
//! - Defaults are resolved from the scalar type at the call site
//!   (`Tolerance::<N>::default()`), never from mutable global state. Callers that
//!   need a different slack pass their own value.

use std::fmt;

use nalgebra::{ClosedAddAssign, ClosedDivAssign, ClosedMulAssign, ClosedSubAssign, DVector, Scalar};
use num_rational::Rational64;
use num_traits::{One, Signed, Zero};

/// Scalar type usable as a set coordinate.
///
/// Implemented for `f32`, `f64` and the exact `Rational64`. The closed-operator
/// bounds are what `nalgebra` needs for `dot`, `M * v`, `tr_mul` and friends.
pub trait Number:
    Scalar
    + Copy
    + PartialOrd
    + Signed
    + ClosedAddAssign
    + ClosedSubAssign
    + ClosedMulAssign
    + ClosedDivAssign
    + fmt::Display
{
    /// Absolute tolerance for "is this zero".
    fn default_ztol() -> Self;
    /// Relative tolerance for approximate equality.
    fn default_rtol() -> Self;
    /// Absolute tolerance for approximate equality of non-zero values.
    fn default_atol() -> Self;
    /// Divisor bringing a vector with squared Euclidean norm `norm_sq` to unit length.
    ///
    /// Exact types return one and keep the unscaled vector.
    fn unit_scale(norm_sq: Self) -> Self;
}

macro_rules! impl_float_number {
    ($ty:ty) => {
        impl Number for $ty {
            #[inline]
            fn default_ztol() -> Self {
                <$ty>::EPSILON.sqrt()
            }
            #[inline]
            fn default_rtol() -> Self {
                <$ty>::EPSILON.sqrt()
            }
            #[inline]
            fn default_atol() -> Self {
                <$ty>::EPSILON.sqrt()
            }
            #[inline]
            fn unit_scale(norm_sq: Self) -> Self {
                norm_sq.sqrt()
            }
        }
    };
}

impl_float_number!(f32);
impl_float_number!(f64);

impl Number for Rational64 {
    #[inline]
    fn default_ztol() -> Self {
        Rational64::zero()
    }
    #[inline]
    fn default_rtol() -> Self {
        Rational64::zero()
    }
    #[inline]
    fn default_atol() -> Self {
        Rational64::zero()
    }
    #[inline]
    fn unit_scale(_norm_sq: Self) -> Self {
        Rational64::one()
    }
}

/// Tolerances for approximate comparisons.
///
/// Invariants:
/// - All three values are non-negative.
/// - `Default` resolves from the scalar type: zero for exact types,
///   `sqrt(eps)` for floating types.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tolerance<N> {
    pub rtol: N,
    pub ztol: N,
    pub atol: N,
}

impl<N: Number> Default for Tolerance<N> {
    fn default() -> Self {
        Self {
            rtol: N::default_rtol(),
            ztol: N::default_ztol(),
            atol: N::default_atol(),
        }
    }
}

impl<N: Number> Tolerance<N> {
    /// Zero slack everywhere (exact comparison for any scalar type).
    #[inline]
    pub fn exact() -> Self {
        Self {
            rtol: N::zero(),
            ztol: N::zero(),
            atol: N::zero(),
        }
    }

    /// Same tolerances with a different zero tolerance.
    #[inline]
    pub fn with_ztol(self, ztol: N) -> Self {
        Self { ztol, ..self }
    }
}

#[inline]
pub(crate) fn max<N: Number>(a: N, b: N) -> N {
    if a >= b {
        a
    } else {
        b
    }
}

#[inline]
pub(crate) fn min<N: Number>(a: N, b: N) -> N {
    if a <= b {
        a
    } else {
        b
    }
}

/// `x <= y` up to the absolute tolerance `ztol`.
#[inline]
pub fn approx_leq<N: Number>(x: N, y: N, ztol: N) -> bool {
    x <= y || (x - y).abs() <= ztol
}

/// `x >= y` up to the absolute tolerance `ztol`.
#[inline]
pub fn approx_geq<N: Number>(x: N, y: N, ztol: N) -> bool {
    x >= y || (x - y).abs() <= ztol
}

/// `|x| <= ztol`.
#[inline]
pub fn is_approx_zero<N: Number>(x: N, ztol: N) -> bool {
    x.abs() <= ztol
}

/// Combined absolute/relative approximate equality.
///
/// Two values that are both approximately zero are equal; otherwise
/// `|x - y| <= max(atol, rtol * max(|x|, |y|))`.
pub fn is_approx<N: Number>(x: N, y: N, tol: &Tolerance<N>) -> bool {
    if x == y {
        return true;
    }
    if is_approx_zero(x, tol.ztol) && is_approx_zero(y, tol.ztol) {
        return true;
    }
    let scale = max(x.abs(), y.abs());
    (x - y).abs() <= max(tol.atol, tol.rtol * scale)
}

/// Elementwise [`is_approx`]; vectors of different length are never equal.
pub fn is_approx_vec<N: Number>(a: &DVector<N>, b: &DVector<N>, tol: &Tolerance<N>) -> bool {
    a.len() == b.len() && a.iter().zip(b.iter()).all(|(&x, &y)| is_approx(x, y, tol))
}

/// Every entry approximately zero.
pub fn is_approx_zero_vec<N: Number>(v: &DVector<N>, ztol: N) -> bool {
    v.iter().all(|&x| is_approx_zero(x, ztol))
}

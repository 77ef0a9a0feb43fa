//! Set representations and their capability interface.
//!
//! Purpose
//! - Define the uniform contract (`ConvexSet` plus narrow refinements) and the
//!   concrete catalog every operator in the crate consumes.
//! - Keep representation-independent defaults (emptiness, universality, linear
//!   maps) in one module (`polytope`) instead of repeating them per type.
//!
//! Why capability traits
//! - A set is a box, a zonotope, or a polytope because it implements the
//!   corresponding trait, not because it sits in a type hierarchy. Operators
//!   ask for the narrowest capability they need.
//! - Run-time capability queries (`constraints`, `singleton_element`,
//!   `is_zero_set`) let generic algorithms pick exact special cases.
//!
//! Code cross-refs: `ConvexSet`, `Polytope`, `Hyperrectangular`, `SingletonLike`,
//! `ZonotopeLike`, `ConcreteSet`, `HalfSpace`.

mod boxes;
mod halfspace;
pub mod hull;
pub mod polytope;
mod traits;
mod vrep;
mod zonotope;

use nalgebra::DVector;

pub use boxes::{EmptySet, Hyperrectangle, Interval, Singleton, ZeroSet};
pub use halfspace::{HPolyhedron, HPolytope, HalfSpace};
pub use polytope::{
    is_universal, linear_map_hrep, linear_map_vrep, ConstraintMap, HrepImage,
    InverseConstraintMap, OutputKind, VrepImage,
};
pub(crate) use traits::{box_constraints, box_contains, box_vertices, check_direction};
pub(crate) use traits::delegate_convex_set;
pub use traits::{Centered, ConvexSet, Hyperrectangular, Polytope, SingletonLike, ZonotopeLike};
pub use vrep::{VPolygon, VPolytope};
pub use zonotope::Zonotope;

use crate::error::{SetError, SetResult};
use crate::num::Number;

/// Closed union of the concrete representations.
///
/// Useful where a set is chosen at run time (deserialized input, operator
/// results) but callers still want a single owned type.
#[derive(Clone, Debug, PartialEq)]
pub enum ConcreteSet<N: Number> {
    Empty(EmptySet<N>),
    Zero(ZeroSet<N>),
    Singleton(Singleton<N>),
    Interval(Interval<N>),
    Hyperrectangle(Hyperrectangle<N>),
    Zonotope(Zonotope<N>),
    HPolytope(HPolytope<N>),
    HPolyhedron(HPolyhedron<N>),
    VPolytope(VPolytope<N>),
    VPolygon(VPolygon<N>),
}

delegate_convex_set!(ConcreteSet {
    Empty,
    Zero,
    Singleton,
    Interval,
    Hyperrectangle,
    Zonotope,
    HPolytope,
    HPolyhedron,
    VPolytope,
    VPolygon
});

macro_rules! impl_from_for_concrete {
    ($($variant:ident => $ty:ident),+ $(,)?) => {
        $(
            impl<N: Number> From<$ty<N>> for ConcreteSet<N> {
                fn from(s: $ty<N>) -> Self {
                    ConcreteSet::$variant(s)
                }
            }
        )+
    };
}

impl_from_for_concrete!(
    Empty => EmptySet,
    Zero => ZeroSet,
    Singleton => Singleton,
    Interval => Interval,
    Hyperrectangle => Hyperrectangle,
    Zonotope => Zonotope,
    HPolytope => HPolytope,
    HPolyhedron => HPolyhedron,
    VPolytope => VPolytope,
    VPolygon => VPolygon,
);

impl<N: Number> ConcreteSet<N> {
    /// Short name of the representation (for logs and reports).
    pub fn kind(&self) -> &'static str {
        match self {
            ConcreteSet::Empty(_) => "empty",
            ConcreteSet::Zero(_) => "zero",
            ConcreteSet::Singleton(_) => "singleton",
            ConcreteSet::Interval(_) => "interval",
            ConcreteSet::Hyperrectangle(_) => "hyperrectangle",
            ConcreteSet::Zonotope(_) => "zonotope",
            ConcreteSet::HPolytope(_) => "hpolytope",
            ConcreteSet::HPolyhedron(_) => "hpolyhedron",
            ConcreteSet::VPolytope(_) => "vpolytope",
            ConcreteSet::VPolygon(_) => "vpolygon",
        }
    }

    /// Center and generators, for the representations that are zonotopes.
    pub fn as_zonotope(&self) -> Option<Zonotope<N>> {
        let (c, g) = match self {
            ConcreteSet::Zero(s) => (s.center(), s.genmat()),
            ConcreteSet::Singleton(s) => (s.center(), s.genmat()),
            ConcreteSet::Interval(s) => (s.center(), s.genmat()),
            ConcreteSet::Hyperrectangle(s) => (s.center(), s.genmat()),
            ConcreteSet::Zonotope(s) => return Some(s.clone()),
            _ => return None,
        };
        Zonotope::new(c, g).ok()
    }
}

/// Left operand of a membership query.
///
/// Only points can be members; asking whether a set is a member of another set
/// is a usage error (use an inclusion check instead).
#[derive(Clone, Copy)]
pub enum Member<'a, N: Number> {
    Point(&'a DVector<N>),
    Set(&'a dyn ConvexSet<N>),
}

/// `x ∈ X` for a point; `MembershipMisuse` for a set on the left.
pub fn is_member<N: Number, S: ConvexSet<N> + ?Sized>(x: Member<'_, N>, set: &S) -> SetResult<bool> {
    match x {
        Member::Point(p) => set.contains(p),
        Member::Set(_) => Err(SetError::MembershipMisuse),
    }
}

#[cfg(test)]
mod tests;

//! Curated import surface (UNSTABLE).
//!
//! - Groups the crate's entry points by concern so callers (the CLI, benches,
//!   demos) import from one place.
//! - Breaking changes here follow the modules; nothing is frozen.

// Scalars and comparisons
pub use crate::num::{
    approx_geq, approx_leq, is_approx, is_approx_vec, is_approx_zero, Number, Tolerance,
};
// Capability traits
pub use crate::sets::{
    Centered, ConvexSet, Hyperrectangular, Polytope, SingletonLike, ZonotopeLike,
};
// Concrete representations
pub use crate::sets::{
    ConcreteSet, EmptySet, HPolyhedron, HPolytope, HalfSpace, Hyperrectangle, Interval, Singleton,
    VPolygon, VPolytope, ZeroSet, Zonotope,
};
// Generic operations
pub use crate::sets::hull::{convex_hull_2d, extreme_points, h_to_vertices, supporting_hyperplanes};
pub use crate::sets::polytope::{is_empty as polytope_is_empty, is_universal};
pub use crate::sets::{
    is_member, linear_map_hrep, linear_map_vrep, ConstraintMap, HrepImage, InverseConstraintMap,
    Member, OutputKind, VrepImage,
};
// Lazy operators
pub use crate::lazy::{
    symmetric_interval_hull, IntervalHullOf, LinearMap, MinkowskiSum, ResetMap,
    SymmetricIntervalHull,
};
// Differences
pub use crate::ops::{
    minkowski_difference, minkowski_difference_zonotopes, pontryagin_difference, PolyhedralSet,
};

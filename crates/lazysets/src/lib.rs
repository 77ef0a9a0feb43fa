//! Lazy convex sets: support-function queries over boxes, zonotopes, polytopes,
//! and symbolic combinations of them.
//!
//! Layout (leaves first)
//! - `num`: the `Number` scalar abstraction, `Tolerance`, approximate comparisons.
//! - `linalg`: what `nalgebra` leaves to `ComplexField` scalars, generic over
//!   `Number` (elimination, determinants, null spaces, generalized cross
//!   products, combinations).
//! - `sets`: capability traits (`ConvexSet`, `Polytope`, `Hyperrectangular`, ...)
//!   and the concrete representations.
//! - `lazy`: operators answered on demand (`SymmetricIntervalHull`, `ResetMap`,
//!   `MinkowskiSum`, `LinearMap`).
//! - `ops`: Minkowski/Pontryagin difference, general and zonotope-specific.
//!
//! API Policy
//! - The crate is young; names follow the geometry rather than compatibility.
//!   `api` and `prelude` are the curated import surfaces.

pub mod api;
pub mod error;
pub mod lazy;
pub mod linalg;
pub mod num;
pub mod ops;
pub mod sets;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::{SetError, SetResult};
pub use num::{Number, Tolerance};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::error::{SetError, SetResult};
    pub use crate::lazy::{symmetric_interval_hull, LinearMap, MinkowskiSum, ResetMap, SymmetricIntervalHull};
    pub use crate::num::{Number, Tolerance};
    pub use crate::ops::{minkowski_difference, minkowski_difference_zonotopes, pontryagin_difference};
    pub use crate::sets::{
        Centered, ConcreteSet, ConvexSet, HPolyhedron, HPolytope, HalfSpace, Hyperrectangle,
        Hyperrectangular, Interval, Polytope, Singleton, SingletonLike, Zonotope, ZonotopeLike,
    };
    pub use nalgebra::{DMatrix, DVector};
}

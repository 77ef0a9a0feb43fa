//! Concrete geometric operators producing new half-space sets.
//!
//! - `minkowski_difference` / `pontryagin_difference`: general polyhedral
//!   minuend, any bounded subtrahend with a support function.
//! - `minkowski_difference_zonotopes`: both operands zonotopes; facets come from
//!   combinations of generators instead of a constraint system.
//!
//! On shared inputs (boxes) both algorithms describe the same set.

mod difference;
pub(crate) mod zonotope_difference;

pub use difference::{minkowski_difference, pontryagin_difference, PolyhedralSet};
pub use zonotope_difference::minkowski_difference_zonotopes;

#[cfg(test)]
mod tests;

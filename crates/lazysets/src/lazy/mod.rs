//! Lazy composite operators.
//!
//! Purpose
//! - Represent an operation on sets symbolically and answer queries through the
//!   operands' support queries, deferring any materialization.
//! - Every operator is itself a `ConvexSet`, so operators nest freely.
//!
//! Operands are held by value; pass `&X`, `Rc<X>`, `Arc<X>`, or `Box<X>` to share
//! one operand between several operators.

mod linear_map;
mod minkowski_sum;
mod reset_map;
mod sih;

pub use linear_map::LinearMap;
pub use minkowski_sum::MinkowskiSum;
pub use reset_map::ResetMap;
pub use sih::{symmetric_interval_hull, IntervalHullOf, SymmetricIntervalHull};

//! Distance matrices and distance providers.
//!
//! Provides a dense positional matrix, a labeled matrix for opaque point
//! ids, a closure adapter, and the [`DistanceSource`] trait the planner
//! consumes.

mod labeled;
mod matrix;
mod source;

pub use labeled::LabeledDistanceMatrix;
pub use matrix::DistanceMatrix;
pub use source::{DistanceFn, DistanceSource};

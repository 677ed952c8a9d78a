//! Error types for tour planning.
//!
//! Every error is local to one call: nothing is retried and no state is left
//! behind. Point identifiers are rendered with `Debug` so the error type does
//! not carry the caller's id type around.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, PlanError>;

/// Why a selection of points was rejected before any work started.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    /// The same point id appears twice in the selection.
    #[error("point {0} is selected more than once")]
    Duplicate(String),

    /// The selection exceeds what the exact solver accepts.
    #[error("{size} points selected, at most {limit} supported")]
    TooLarge {
        /// Number of selected points.
        size: usize,
        /// Configured upper bound.
        limit: usize,
    },

    /// A required point is not part of the selection.
    #[error("required point {0} is not in the selection")]
    RequiredNotSelected(String),
}

/// Errors surfaced by projection, optimization, and planning.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlanError {
    /// A selected point has no row in the distance source.
    #[error("unknown point: {0}")]
    UnknownPoint(String),

    /// Duplicate ids, oversized selection, or stray required points.
    #[error("invalid selection: {0}")]
    InvalidSelection(#[from] SelectionError),

    /// Negative, NaN, or infinite budget.
    #[error("invalid budget: {0}")]
    InvalidBudget(String),

    /// A distance between two selected points is negative, NaN, or infinite.
    #[error("invalid distance from {from} to {to}: {value}")]
    InvalidDistance {
        /// Origin id.
        from: String,
        /// Destination id.
        to: String,
        /// Offending value.
        value: String,
    },

    /// The distance data itself is inconsistent (shape, labels).
    #[error("malformed distance matrix: {0}")]
    MalformedMatrix(String),

    /// Planner configuration outside its supported range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// No path within budget visits every required point.
    #[error("required points cannot all be visited within budget")]
    RequiredUnreachable,
}

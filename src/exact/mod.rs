//! Exact budget-constrained path optimization.
//!
//! - [`PathOptimizer`] — Held-Karp sweep over `(visited mask, last point)`
//!   cells with budget pruning, and lexicographic terminal selection
//! - [`PathReconstructor`] — backward walk from the terminal cell
//! - [`HeldKarpTable`] — the flat cost/predecessor arena both share

mod optimizer;
mod reconstruct;
mod table;

pub use optimizer::{
    estimated_bytes, estimated_work, Optimum, PathOptimizer, TerminalState, MAX_POINTS,
};
pub use reconstruct::PathReconstructor;
pub use table::HeldKarpTable;

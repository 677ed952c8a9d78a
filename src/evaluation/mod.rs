//! Path cost evaluation and shape checks.
//!
//! Used to recompute a planned route against the global distance source and
//! to verify optimizer output.

mod evaluator;

pub use evaluator::{is_simple, path_cost, RouteEvaluator};

//! Heuristic path construction.
//!
//! - [`nearest_neighbor_path`] — multi-start greedy nearest neighbor under a
//!   budget, O(k³). Not exact; see [`crate::exact`] for the optimal solver.

mod nearest_neighbor;

pub use nearest_neighbor::{nearest_neighbor_path, GreedyPath};

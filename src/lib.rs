//! # u-tour
//!
//! Budget-constrained tour planning: given points of interest, a travel-cost
//! matrix, and a maximum travel budget, find the simple open path that visits
//! the most points and, among those, costs the least.
//!
//! ## Modules
//!
//! - [`cost`] — Numeric contract for travel costs (integers or floats)
//! - [`distance`] — Distance matrices and the [`DistanceSource`](distance::DistanceSource) seam
//! - [`projection`] — Selection → dense local matrix and id mapping
//! - [`exact`] — Held-Karp optimizer and path reconstruction
//! - [`heuristic`] — Multi-start nearest neighbor (non-exact alternative)
//! - [`evaluation`] — Path cost and feasibility checks
//! - [`models`] — Route result type
//! - [`planner`] — Request validation and solver dispatch
//! - [`error`] — Error taxonomy

pub mod cost;
pub mod distance;
pub mod error;
pub mod evaluation;
pub mod exact;
pub mod heuristic;
pub mod models;
pub mod planner;
pub mod projection;

pub use cost::Cost;
pub use error::{PlanError, Result, SelectionError};
pub use models::Route;
pub use planner::{optimize_path, PlannerConfig, RoutePlanner, SolveMode};

//! Route planning: the caller-facing boundary.
//!
//! - [`RoutePlanner`] — validates a request, projects the selection, runs
//!   the configured solver, and maps the result back to caller ids
//! - [`optimize_path`] — one-shot planning over a distance closure
//! - [`PlannerConfig`] / [`SolveMode`] — exact vs greedy, selection limits

mod config;
mod route_planner;

pub use config::{PlannerConfig, SolveMode};
pub use route_planner::{optimize_path, RoutePlanner};

//! Planner configuration.

use serde::{Deserialize, Serialize};

use crate::error::{PlanError, Result};
use crate::exact::MAX_POINTS;

/// Which algorithm answers a planning request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SolveMode {
    /// Held-Karp sweep: provably best path, exponential in the selection size.
    #[default]
    Exact,
    /// Multi-start nearest neighbor: fast, not optimal.
    Greedy,
}

/// Configuration for [`RoutePlanner`](super::RoutePlanner).
///
/// # Examples
///
/// ```
/// use u_tour::planner::{PlannerConfig, SolveMode};
///
/// let config = PlannerConfig::default().with_max_points(12);
/// assert_eq!(config.mode, SolveMode::Exact);
/// assert!(config.validate().is_ok());
///
/// let parsed: PlannerConfig = serde_json::from_str(r#"{"mode":"greedy"}"#).unwrap();
/// assert_eq!(parsed.mode, SolveMode::Greedy);
/// assert_eq!(parsed.max_points, 20);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    /// Algorithm used for every request.
    pub mode: SolveMode,
    /// Largest selection the exact mode accepts. Must lie in
    /// `1..=MAX_POINTS`; ignored in greedy mode.
    pub max_points: usize,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            mode: SolveMode::Exact,
            max_points: MAX_POINTS,
        }
    }
}

impl PlannerConfig {
    /// Sets the algorithm.
    pub fn with_mode(mut self, mode: SolveMode) -> Self {
        self.mode = mode;
        self
    }

    /// Sets the exact-mode selection limit.
    pub fn with_max_points(mut self, max_points: usize) -> Self {
        self.max_points = max_points;
        self
    }

    /// Checks that `max_points` lies in `1..=MAX_POINTS`.
    pub fn validate(&self) -> Result<()> {
        if self.max_points == 0 || self.max_points > MAX_POINTS {
            return Err(PlanError::InvalidConfig(format!(
                "max_points must be between 1 and {MAX_POINTS}, got {}",
                self.max_points
            )));
        }
        Ok(())
    }
}

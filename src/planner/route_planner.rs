//! Route planning over a global distance source.

use std::fmt::Debug;
use std::hash::Hash;

use log::{debug, warn};

use super::{PlannerConfig, SolveMode};
use crate::cost::Cost;
use crate::distance::{DistanceFn, DistanceSource};
use crate::error::{PlanError, Result, SelectionError};
use crate::evaluation::RouteEvaluator;
use crate::exact::PathOptimizer;
use crate::heuristic::nearest_neighbor_path;
use crate::models::Route;
use crate::projection::{check_distinct, project};

/// Plans budget-constrained routes through selections of points.
///
/// Holds a borrowed distance source and a [`PlannerConfig`]; every call is
/// independent and allocates its own working state, so one planner can serve
/// concurrent requests from several threads.
///
/// # Examples
///
/// ```
/// use u_tour::distance::{DistanceMatrix, LabeledDistanceMatrix};
/// use u_tour::planner::RoutePlanner;
///
/// let dm = DistanceMatrix::from_rows(vec![
///     vec![0, 950, 400, 250],
///     vec![950, 0, 800, 850],
///     vec![400, 800, 0, 200],
///     vec![250, 850, 200, 0],
/// ])
/// .expect("square");
/// let sights = LabeledDistanceMatrix::new(vec!["museum", "bridge", "church", "cathedral"], dm)
///     .expect("labels");
///
/// let planner = RoutePlanner::new(&sights);
/// let route = planner.plan(&["museum", "church", "cathedral"], 500).expect("valid request");
/// assert_eq!(route.path(), &["museum", "cathedral", "church"]);
/// assert_eq!(route.total_cost(), 450);
/// ```
pub struct RoutePlanner<'a, S: ?Sized> {
    source: &'a S,
    config: PlannerConfig,
}

impl<'a, S: ?Sized> RoutePlanner<'a, S> {
    /// Creates a planner with the default configuration (exact mode).
    pub fn new(source: &'a S) -> Self {
        Self {
            source,
            config: PlannerConfig::default(),
        }
    }

    /// Creates a planner with a validated configuration.
    pub fn with_config(source: &'a S, config: PlannerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { source, config })
    }

    /// The active configuration.
    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Plans the best route through `selection` within `budget`.
    ///
    /// The route visits as many selected points as possible and, among
    /// those, costs the least. An empty selection yields an empty route.
    pub fn plan<Id>(&self, selection: &[Id], budget: S::Cost) -> Result<Route<Id, S::Cost>>
    where
        S: DistanceSource<Id>,
        Id: Eq + Hash + Clone + Debug,
    {
        self.plan_with_required(selection, &[], budget)
    }

    /// Like [`plan`](Self::plan), but the route must visit every id in
    /// `required`.
    ///
    /// Required ids must be part of the selection. In exact mode the best
    /// route among those covering them is returned; in greedy mode the
    /// heuristic route is checked after the fact. Either way
    /// [`PlanError::RequiredUnreachable`] reports a miss.
    pub fn plan_with_required<Id>(
        &self,
        selection: &[Id],
        required: &[Id],
        budget: S::Cost,
    ) -> Result<Route<Id, S::Cost>>
    where
        S: DistanceSource<Id>,
        Id: Eq + Hash + Clone + Debug,
    {
        if !budget.is_valid() {
            return Err(PlanError::InvalidBudget(format!("{budget:?}")));
        }
        if selection.is_empty() {
            if let Some(r) = required.first() {
                return Err(SelectionError::RequiredNotSelected(format!("{r:?}")).into());
            }
            return Ok(Route::empty());
        }
        check_distinct(selection)?;
        if self.config.mode == SolveMode::Exact && selection.len() > self.config.max_points {
            warn!(
                "rejecting {} points for exact planning, limit is {}",
                selection.len(),
                self.config.max_points
            );
            return Err(SelectionError::TooLarge {
                size: selection.len(),
                limit: self.config.max_points,
            }
            .into());
        }

        let projection = project(self.source, selection)?;
        let mut required_local = Vec::with_capacity(required.len());
        for r in required {
            let i = projection
                .local_index(r)
                .ok_or_else(|| SelectionError::RequiredNotSelected(format!("{r:?}")))?;
            required_local.push(i);
        }

        let (local_path, cost) = match self.config.mode {
            SolveMode::Exact => {
                let optimum = PathOptimizer::new(projection.matrix(), budget)?
                    .with_required(&required_local)?
                    .optimize()
                    .ok_or(PlanError::RequiredUnreachable)?;
                (optimum.path(), optimum.terminal().cost)
            }
            SolveMode::Greedy => {
                let walk = nearest_neighbor_path(projection.matrix(), budget).ok_or_else(|| {
                    PlanError::MalformedMatrix("projection has no points".to_string())
                })?;
                if !required_local.iter().all(|i| walk.path.contains(i)) {
                    return Err(PlanError::RequiredUnreachable);
                }
                (walk.path, walk.cost)
            }
        };

        let path = projection.to_global(&local_path);
        let recomputed = RouteEvaluator::new(self.source).cost(&path);
        debug_assert_eq!(recomputed, Some(cost), "distance source changed between calls");
        let total_cost = recomputed.unwrap_or(cost);
        debug!(
            "planned {:?} route: {} of {} points, cost {:?}",
            self.config.mode,
            path.len(),
            selection.len(),
            total_cost
        );
        Ok(Route::new(path, total_cost))
    }
}

/// Plans the best route through `points` given a distance function.
///
/// `distance(a, b)` returns the travel cost from `a` to `b`, or `None` if
/// either point is unknown. Uses exact mode with the default limits.
///
/// # Examples
///
/// ```
/// use u_tour::optimize_path;
///
/// let d = [[0, 1, 9, 9], [1, 0, 1, 9], [9, 1, 0, 1], [9, 9, 1, 0]];
/// let dist = |a: &usize, b: &usize| d.get(*a).and_then(|row| row.get(*b)).copied();
///
/// let route = optimize_path(&[0, 1, 2, 3], dist, 100).expect("valid request");
/// assert_eq!(route.path(), &[0, 1, 2, 3]);
/// assert_eq!(route.total_cost(), 3);
///
/// let route = optimize_path(&[2], dist, 0).expect("valid request");
/// assert_eq!(route.path(), &[2]);
/// assert_eq!(route.total_cost(), 0);
/// ```
pub fn optimize_path<Id, C, F>(points: &[Id], distance: F, budget: C) -> Result<Route<Id, C>>
where
    Id: Eq + Hash + Clone + Debug,
    C: Cost,
    F: Fn(&Id, &Id) -> Option<C>,
{
    let source: DistanceFn<F, C> = DistanceFn::new(distance);
    RoutePlanner::new(&source).plan(points, budget)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::{DistanceMatrix, LabeledDistanceMatrix};
    use crate::exact::MAX_POINTS;

    fn chain() -> DistanceMatrix<u32> {
        DistanceMatrix::from_rows(vec![
            vec![0, 1, 9, 9],
            vec![1, 0, 1, 9],
            vec![9, 1, 0, 1],
            vec![9, 9, 1, 0],
        ])
        .expect("square")
    }

    #[test]
    fn test_plan_chain() {
        let dm = chain();
        let planner = RoutePlanner::new(&dm);
        let route = planner.plan(&[0, 1, 2, 3], 100).expect("valid");
        assert_eq!(route.path(), &[0, 1, 2, 3]);
        assert_eq!(route.total_cost(), 3);

        let route = planner.plan(&[0, 1, 2, 3], 1).expect("valid");
        assert_eq!(route.len(), 2);
        assert_eq!(route.total_cost(), 1);
    }

    #[test]
    fn test_plan_maps_back_to_global_ids() {
        let dm = chain();
        let planner = RoutePlanner::new(&dm);
        // local order 3, 2, 0: 0 is 9 away from both
        let route = planner.plan(&[3, 2, 0], 5).expect("valid");
        assert_eq!(route.path(), &[3, 2]);
        assert_eq!(route.total_cost(), 1);
    }

    #[test]
    fn test_plan_empty_selection() {
        let dm = chain();
        let none: [usize; 0] = [];
        let route = RoutePlanner::new(&dm).plan(&none, 5).expect("valid");
        assert!(route.is_empty());
        assert_eq!(route.total_cost(), 0);
    }

    #[test]
    fn test_plan_single_point_any_budget() {
        let dm = chain();
        let planner = RoutePlanner::new(&dm);
        for budget in [0, 1, 1000] {
            let route = planner.plan(&[2], budget).expect("valid");
            assert_eq!(route.path(), &[2]);
            assert_eq!(route.total_cost(), 0);
        }
    }

    #[test]
    fn test_plan_errors() {
        let dm = chain();
        let planner = RoutePlanner::new(&dm);
        assert_eq!(
            planner.plan(&[0, 9], 5).unwrap_err(),
            PlanError::UnknownPoint("9".to_string())
        );
        assert_eq!(
            planner.plan(&[0, 1, 0], 5).unwrap_err(),
            PlanError::InvalidSelection(SelectionError::Duplicate("0".to_string()))
        );
    }

    #[test]
    fn test_plan_invalid_budget() {
        let dm = DistanceMatrix::<f64>::new(3);
        let planner = RoutePlanner::new(&dm);
        assert!(matches!(
            planner.plan(&[0, 1], -0.5).unwrap_err(),
            PlanError::InvalidBudget(_)
        ));
        // budget is checked before the empty shortcut
        let none: [usize; 0] = [];
        assert!(matches!(
            planner.plan(&none, f64::NAN).unwrap_err(),
            PlanError::InvalidBudget(_)
        ));
    }

    #[test]
    fn test_plan_size_limit() {
        let dm = DistanceMatrix::<u32>::new(30);
        let config = PlannerConfig::default().with_max_points(3);
        let planner = RoutePlanner::with_config(&dm, config).expect("valid config");
        assert_eq!(
            planner.plan(&[0, 1, 2, 3], 10).unwrap_err(),
            PlanError::InvalidSelection(SelectionError::TooLarge { size: 4, limit: 3 })
        );

        let all: Vec<usize> = (0..30).collect();
        let planner = RoutePlanner::new(&dm);
        assert_eq!(
            planner.plan(&all, 10).unwrap_err(),
            PlanError::InvalidSelection(SelectionError::TooLarge {
                size: 30,
                limit: MAX_POINTS
            })
        );
    }

    #[test]
    fn test_duplicates_reported_before_size_limit() {
        let dm = chain();
        let config = PlannerConfig::default().with_max_points(2);
        let planner = RoutePlanner::with_config(&dm, config).expect("valid config");
        assert_eq!(
            planner.plan(&[0, 0, 1], 3).unwrap_err(),
            PlanError::InvalidSelection(SelectionError::Duplicate("0".to_string()))
        );
    }

    #[test]
    fn test_greedy_mode_has_no_size_limit() {
        let dm = DistanceMatrix::<u32>::new(30);
        let config = PlannerConfig::default().with_mode(SolveMode::Greedy);
        let planner = RoutePlanner::with_config(&dm, config).expect("valid config");
        let all: Vec<usize> = (0..30).collect();
        let route = planner.plan(&all, 0).expect("valid");
        assert_eq!(route.len(), 30);
        assert_eq!(route.total_cost(), 0);
    }

    #[test]
    fn test_invalid_config() {
        let dm = chain();
        let config = PlannerConfig::default().with_max_points(0);
        assert!(matches!(
            RoutePlanner::with_config(&dm, config).err(),
            Some(PlanError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_required_points_exact() {
        let dm = chain();
        let planner = RoutePlanner::new(&dm);
        let route = planner
            .plan_with_required(&[0, 1, 2, 3], &[3], 1)
            .expect("reachable");
        assert_eq!(route.path(), &[2, 3]);
        assert_eq!(route.total_cost(), 1);

        assert_eq!(
            planner
                .plan_with_required(&[0, 1, 2, 3], &[0, 3], 2)
                .unwrap_err(),
            PlanError::RequiredUnreachable
        );
    }

    #[test]
    fn test_required_point_must_be_selected() {
        let dm = chain();
        let planner = RoutePlanner::new(&dm);
        assert_eq!(
            planner.plan_with_required(&[0, 1], &[3], 10).unwrap_err(),
            PlanError::InvalidSelection(SelectionError::RequiredNotSelected("3".to_string()))
        );
        let none: [usize; 0] = [];
        assert!(planner.plan_with_required(&none, &[3], 10).is_err());
    }

    #[test]
    fn test_required_points_greedy() {
        let dm = chain();
        let config = PlannerConfig::default().with_mode(SolveMode::Greedy);
        let planner = RoutePlanner::with_config(&dm, config).expect("valid config");
        let route = planner
            .plan_with_required(&[0, 1, 2, 3], &[1], 2)
            .expect("covered");
        assert_eq!(route.path(), &[0, 1, 2]);
        assert_eq!(
            planner
                .plan_with_required(&[0, 1, 2, 3], &[3], 2)
                .unwrap_err(),
            PlanError::RequiredUnreachable
        );
    }

    #[test]
    fn test_labeled_float_source() {
        let dm = DistanceMatrix::from_rows(vec![
            vec![0.0, 0.95, 0.4, 0.25],
            vec![0.95, 0.0, 0.8, 0.85],
            vec![0.4, 0.8, 0.0, 0.2],
            vec![0.25, 0.85, 0.2, 0.0],
        ])
        .expect("square");
        let labeled =
            LabeledDistanceMatrix::new(vec!["museum", "bridge", "church", "cathedral"], dm)
                .expect("labels");
        let planner = RoutePlanner::new(&labeled);
        let route = planner
            .plan(&["bridge", "museum", "church", "cathedral"], 1.5)
            .expect("valid");
        assert_eq!(route.len(), 4);
        assert!(route.total_cost() <= 1.5);
        assert_eq!(route.path(), &["bridge", "church", "cathedral", "museum"]);
        assert!((route.total_cost() - 1.25f64).abs() < 1e-12);
    }

    #[test]
    fn test_concurrent_plans_are_independent() {
        let dm = chain();
        let planner = RoutePlanner::new(&dm);
        let results: Vec<Route<usize, u32>> = std::thread::scope(|s| {
            let handles: Vec<_> = (0..4u32)
                .map(|b| {
                    let planner = &planner;
                    s.spawn(move || planner.plan(&[0, 1, 2, 3], b).expect("valid"))
                })
                .collect();
            handles
                .into_iter()
                .map(|h| h.join().expect("thread"))
                .collect()
        });
        let lens: Vec<usize> = results.iter().map(|r| r.len()).collect();
        assert_eq!(lens, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_optimize_path_closure() {
        let pos = [0i64, 3, 7, 20];
        let dist = |a: &usize, b: &usize| Some(pos.get(*a)?.abs_diff(*pos.get(*b)?));
        let route = optimize_path(&[3, 0, 2, 1], dist, 10).expect("valid");
        assert_eq!(route.path(), &[0, 1, 2]);
        assert_eq!(route.total_cost(), 7);
        assert_eq!(
            optimize_path(&[0, 4], dist, 10).unwrap_err(),
            PlanError::UnknownPoint("4".to_string())
        );
    }
}

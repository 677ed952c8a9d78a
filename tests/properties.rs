use proptest::prelude::*;
use u_tour::distance::DistanceMatrix;
use u_tour::evaluation::{is_simple, path_cost};
use u_tour::exact::PathOptimizer;
use u_tour::heuristic::nearest_neighbor_path;
use u_tour::planner::{PlannerConfig, RoutePlanner, SolveMode};

fn matrix_strategy(max_k: usize) -> impl Strategy<Value = DistanceMatrix<u32>> {
    (1usize..=max_k).prop_flat_map(|k| {
        prop::collection::vec(0u32..25, k * k)
            .prop_map(move |data| DistanceMatrix::from_data(k, data).expect("k*k entries"))
    })
}

fn plan(dm: &DistanceMatrix<u32>, budget: u32) -> (Vec<usize>, u32) {
    let selection: Vec<usize> = (0..dm.size()).collect();
    RoutePlanner::new(dm)
        .plan(&selection, budget)
        .expect("valid request")
        .into_parts()
}

proptest! {
    #[test]
    fn route_is_feasible_simple_and_costed_exactly(dm in matrix_strategy(7), budget in 0u32..80) {
        let (path, cost) = plan(&dm, budget);
        prop_assert!(!path.is_empty());
        prop_assert!(cost <= budget);
        prop_assert!(is_simple(&path));
        prop_assert_eq!(path_cost(&dm, &path), Some(cost));
    }

    #[test]
    fn single_point_is_free_for_any_budget(d in 0u32..100, budget in 0u32..10) {
        let dm = DistanceMatrix::from_data(1, vec![d]).expect("1x1");
        let (path, cost) = plan(&dm, budget);
        prop_assert_eq!(path, vec![0]);
        prop_assert_eq!(cost, 0);
    }

    #[test]
    fn zero_distances_visit_everything(k in 1usize..9, budget in 0u32..5) {
        let dm = DistanceMatrix::<u32>::new(k);
        let (path, cost) = plan(&dm, budget);
        prop_assert_eq!(path.len(), k);
        prop_assert_eq!(cost, 0);
    }

    #[test]
    fn larger_budget_never_visits_fewer(dm in matrix_strategy(6), b1 in 0u32..60, extra in 0u32..40) {
        let (small_path, small_cost) = plan(&dm, b1);
        let (big_path, big_cost) = plan(&dm, b1 + extra);
        prop_assert!(big_path.len() >= small_path.len());
        if big_path.len() == small_path.len() {
            prop_assert!(big_cost <= small_cost);
        }
    }

    #[test]
    fn repeated_calls_agree(dm in matrix_strategy(6), budget in 0u32..60) {
        prop_assert_eq!(plan(&dm, budget), plan(&dm, budget));
    }

    #[test]
    fn terminal_matches_reconstruction(dm in matrix_strategy(7), budget in 0u32..80) {
        let best = PathOptimizer::new(&dm, budget)
            .expect("valid")
            .optimize()
            .expect("k >= 1");
        let path = best.path();
        prop_assert_eq!(path.len(), best.terminal().len());
        prop_assert_eq!(*path.last().expect("non-empty"), best.terminal().last);
        prop_assert_eq!(path_cost(&dm, &path), Some(best.terminal().cost));
        let mask = path.iter().fold(0u32, |m, &i| m | 1 << i);
        prop_assert_eq!(mask, best.terminal().mask);
    }

    #[test]
    fn greedy_never_beats_exact(dm in matrix_strategy(7), budget in 0u32..80) {
        let (exact_path, exact_cost) = plan(&dm, budget);
        let walk = nearest_neighbor_path(&dm, budget).expect("k >= 1");
        prop_assert!(walk.cost <= budget);
        prop_assert!(is_simple(&walk.path));
        prop_assert!(walk.path.len() <= exact_path.len());
        if walk.path.len() == exact_path.len() {
            prop_assert!(walk.cost >= exact_cost);
        }
    }

    #[test]
    fn greedy_planner_returns_feasible_route(dm in matrix_strategy(7), budget in 0u32..80) {
        let selection: Vec<usize> = (0..dm.size()).collect();
        let config = PlannerConfig::default().with_mode(SolveMode::Greedy);
        let route = RoutePlanner::with_config(&dm, config)
            .expect("valid config")
            .plan(&selection, budget)
            .expect("valid request");
        prop_assert!(route.total_cost() <= budget);
        prop_assert_eq!(path_cost(&dm, route.path()), Some(route.total_cost()));
    }

    #[test]
    fn required_points_are_always_visited(dm in matrix_strategy(6), budget in 0u32..80, pick in 0usize..6) {
        let selection: Vec<usize> = (0..dm.size()).collect();
        let required = [pick % dm.size()];
        let planner = RoutePlanner::new(&dm);
        let route = planner
            .plan_with_required(&selection, &required, budget)
            .expect("a singleton always covers one required point");
        prop_assert!(route.path().contains(&required[0]));
        prop_assert!(route.total_cost() <= budget);
        let free = planner.plan(&selection, budget).expect("valid");
        prop_assert!(route.len() <= free.len());
    }
}

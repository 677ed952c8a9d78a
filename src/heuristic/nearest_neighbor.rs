//! Multi-start nearest-neighbor path under a budget.
//!
//! From every start point, greedily walk to the nearest unvisited point whose
//! leg still fits the remaining budget, until none fits. The best walk over all
//! starts wins: most points first, then lowest cost.
//!
//! This is **not** exact. It can return fewer points, or a costlier path,
//! than [`PathOptimizer`](crate::exact::PathOptimizer). It exists for
//! selections too large for the exact sweep.
//!
//! # Complexity
//!
//! O(k³) for k points (k starts × O(k²) walk).

use log::debug;

use crate::cost::Cost;
use crate::distance::DistanceMatrix;

/// A greedy walk: local indices in visiting order and their total cost.
#[derive(Debug, Clone, PartialEq)]
pub struct GreedyPath<C> {
    /// Local indices in visiting order.
    pub path: Vec<usize>,
    /// Accumulated travel cost.
    pub cost: C,
}

/// Builds a budget-constrained path with the multi-start nearest-neighbor
/// heuristic.
///
/// Starts are tried in index order; a later start replaces the incumbent only
/// if strictly better. Distance ties pick the lowest index. Returns `None` for
/// an empty matrix.
///
/// # Examples
///
/// ```
/// use u_tour::distance::DistanceMatrix;
/// use u_tour::heuristic::nearest_neighbor_path;
///
/// let dm = DistanceMatrix::from_rows(vec![
///     vec![0, 1, 9, 9],
///     vec![1, 0, 1, 9],
///     vec![9, 1, 0, 1],
///     vec![9, 9, 1, 0],
/// ])
/// .expect("square");
///
/// let walk = nearest_neighbor_path(&dm, 100).expect("non-empty");
/// assert_eq!(walk.path, vec![0, 1, 2, 3]);
/// assert_eq!(walk.cost, 3);
/// ```
pub fn nearest_neighbor_path<C: Cost>(
    matrix: &DistanceMatrix<C>,
    budget: C,
) -> Option<GreedyPath<C>> {
    let k = matrix.size();
    let mut best: Option<GreedyPath<C>> = None;

    for start in 0..k {
        let walk = walk_from(matrix, start, budget);
        let better = match &best {
            None => true,
            Some(b) => {
                walk.path.len() > b.path.len()
                    || (walk.path.len() == b.path.len() && walk.cost < b.cost)
            }
        };
        if better {
            best = Some(walk);
        }
    }

    if let Some(b) = &best {
        debug!(
            "nearest-neighbor: {} of {k} points from start {}, cost {:?}",
            b.path.len(),
            b.path[0],
            b.cost
        );
    }
    best
}

fn walk_from<C: Cost>(matrix: &DistanceMatrix<C>, start: usize, budget: C) -> GreedyPath<C> {
    let k = matrix.size();
    let mut visited = vec![false; k];
    visited[start] = true;
    let mut path = vec![start];
    let mut cost = C::ZERO;
    let mut current = start;

    loop {
        // Find nearest unvisited point whose leg stays within budget
        let candidates: Vec<usize> = (0..k)
            .filter(|&i| !visited[i])
            .filter(|&i| {
                cost.checked_add(matrix.get(current, i))
                    .is_some_and(|c| c <= budget)
            })
            .collect();

        match matrix.nearest_neighbor(current, &candidates) {
            Some(next) => {
                // candidates only hold legs whose sum is defined
                if let Some(c) = cost.checked_add(matrix.get(current, next)) {
                    cost = c;
                }
                visited[next] = true;
                path.push(next);
                current = next;
            }
            None => break,
        }
    }

    GreedyPath { path, cost }
}

//! Path evaluator that recomputes travel cost and checks path shape.

use std::collections::HashSet;
use std::hash::Hash;

use crate::cost::Cost;
use crate::distance::{DistanceMatrix, DistanceSource};

/// Total cost of walking `path` over a positional matrix.
///
/// Returns `None` if the sum overflows. An empty or one-point path costs zero.
///
/// ```
/// use u_tour::distance::DistanceMatrix;
/// use u_tour::evaluation::path_cost;
///
/// let dm = DistanceMatrix::from_rows(vec![vec![0, 2, 5], vec![2, 0, 1], vec![5, 1, 0]])
///     .expect("square");
/// assert_eq!(path_cost(&dm, &[0, 1, 2]), Some(3));
/// assert_eq!(path_cost(&dm, &[2]), Some(0));
/// ```
pub fn path_cost<C: Cost>(matrix: &DistanceMatrix<C>, path: &[usize]) -> Option<C> {
    path.windows(2)
        .try_fold(C::ZERO, |acc, leg| acc.checked_add(matrix.get(leg[0], leg[1])))
}

/// Returns `true` if no element of `path` repeats.
pub fn is_simple<Id: Eq + Hash>(path: &[Id]) -> bool {
    let mut seen = HashSet::with_capacity(path.len());
    path.iter().all(|id| seen.insert(id))
}

/// Evaluates id paths against a global distance source.
///
/// # Examples
///
/// ```
/// use u_tour::distance::{DistanceMatrix, LabeledDistanceMatrix};
/// use u_tour::evaluation::RouteEvaluator;
///
/// let dm = DistanceMatrix::from_rows(vec![vec![0.0, 1.5], vec![1.5, 0.0]]).expect("square");
/// let labeled = LabeledDistanceMatrix::new(vec!["bridge", "gallery"], dm).expect("labels");
/// let evaluator = RouteEvaluator::new(&labeled);
/// assert_eq!(evaluator.cost(&["bridge", "gallery"]), Some(1.5));
/// assert_eq!(evaluator.cost(&["bridge", "pier"]), None);
/// ```
pub struct RouteEvaluator<'a, S: ?Sized> {
    source: &'a S,
}

impl<'a, S: ?Sized> RouteEvaluator<'a, S> {
    /// Creates an evaluator over the given source.
    pub fn new(source: &'a S) -> Self {
        Self { source }
    }

    /// Total cost of `path`, or `None` if a leg is unknown or the sum overflows.
    pub fn cost<Id>(&self, path: &[Id]) -> Option<S::Cost>
    where
        S: DistanceSource<Id>,
    {
        path.windows(2).try_fold(<S::Cost as Cost>::ZERO, |acc, leg| {
            acc.checked_add(self.source.distance(&leg[0], &leg[1])?)
        })
    }

    /// Returns `true` if `path` is simple, every leg is known, and the total
    /// stays within `budget`.
    pub fn is_feasible<Id>(&self, path: &[Id], budget: S::Cost) -> bool
    where
        S: DistanceSource<Id>,
        Id: Eq + Hash,
    {
        is_simple(path) && self.cost(path).is_some_and(|c| c <= budget)
    }
}

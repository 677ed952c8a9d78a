//! Planned route type.

use serde::{Deserialize, Serialize};

use crate::cost::Cost;

/// An ordered visit of points of interest and the distance it accumulates.
///
/// The route is an open path: it starts at the first point and ends at the
/// last, with no return leg.
///
/// # Examples
///
/// ```
/// use u_tour::models::Route;
///
/// let route = Route::new(vec![4, 1, 7], 1250);
/// assert_eq!(route.len(), 3);
/// assert_eq!(route.path(), &[4, 1, 7]);
/// assert_eq!(route.total_cost(), 1250);
///
/// let empty: Route<u32, u32> = Route::empty();
/// assert!(empty.is_empty());
/// assert_eq!(empty.total_cost(), 0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Route<Id, C> {
    path: Vec<Id>,
    total_cost: C,
}

impl<Id, C: Cost> Route<Id, C> {
    /// Creates a route from an ordered path and its total cost.
    pub fn new(path: Vec<Id>, total_cost: C) -> Self {
        Self { path, total_cost }
    }

    /// The route of an empty selection: no points, zero cost.
    pub fn empty() -> Self {
        Self::new(Vec::new(), C::ZERO)
    }

    /// Point ids in visiting order.
    pub fn path(&self) -> &[Id] {
        &self.path
    }

    /// Total travel cost of the path.
    pub fn total_cost(&self) -> C {
        self.total_cost
    }

    /// Number of points visited.
    pub fn len(&self) -> usize {
        self.path.len()
    }

    /// Returns `true` if the route visits nothing.
    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    /// First point of the route.
    pub fn start(&self) -> Option<&Id> {
        self.path.first()
    }

    /// Last point of the route.
    pub fn end(&self) -> Option<&Id> {
        self.path.last()
    }

    /// Splits the route into its path and total cost.
    pub fn into_parts(self) -> (Vec<Id>, C) {
        (self.path, self.total_cost)
    }
}

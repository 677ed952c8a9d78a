//! The distance provider seam.

use std::fmt;
use std::marker::PhantomData;

use super::DistanceMatrix;
use crate::cost::Cost;

/// Supplies travel costs between points of interest addressed by `Id`.
///
/// A source may be backed by a precomputed table or by a formula over
/// coordinates; the planner only needs a value for every ordered pair of
/// requested points.
pub trait DistanceSource<Id> {
    /// Numeric type of the costs this source yields.
    type Cost: Cost;

    /// Returns `true` if the source has a row for `id`.
    fn contains(&self, id: &Id) -> bool;

    /// Travel cost from `from` to `to`, or `None` if either id is unknown.
    fn distance(&self, from: &Id, to: &Id) -> Option<Self::Cost>;
}

/// Positions `0..size` address rows and columns directly.
impl<C: Cost> DistanceSource<usize> for DistanceMatrix<C> {
    type Cost = C;

    fn contains(&self, id: &usize) -> bool {
        *id < self.size()
    }

    fn distance(&self, from: &usize, to: &usize) -> Option<C> {
        if self.contains(from) && self.contains(to) {
            Some(self.get(*from, *to))
        } else {
            None
        }
    }
}

impl<Id, S: DistanceSource<Id> + ?Sized> DistanceSource<Id> for &S {
    type Cost = S::Cost;

    fn contains(&self, id: &Id) -> bool {
        (**self).contains(id)
    }

    fn distance(&self, from: &Id, to: &Id) -> Option<Self::Cost> {
        (**self).distance(from, to)
    }
}

/// Adapts a closure `(from, to) -> Option<cost>` into a [`DistanceSource`].
///
/// A point is considered known when its distance to itself is defined.
///
/// # Examples
///
/// ```
/// use u_tour::distance::{DistanceFn, DistanceSource};
///
/// let line = DistanceFn::new(|a: &i64, b: &i64| {
///     if (0..10).contains(a) && (0..10).contains(b) {
///         Some((a - b).unsigned_abs())
///     } else {
///         None
///     }
/// });
/// assert_eq!(line.distance(&2, &7), Some(5));
/// assert!(!line.contains(&12));
/// ```
pub struct DistanceFn<F, C> {
    f: F,
    _cost: PhantomData<fn() -> C>,
}

impl<F, C> DistanceFn<F, C> {
    /// Wraps the given closure.
    pub fn new(f: F) -> Self {
        Self {
            f,
            _cost: PhantomData,
        }
    }
}

impl<F, C> fmt::Debug for DistanceFn<F, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DistanceFn").finish_non_exhaustive()
    }
}

impl<Id, C, F> DistanceSource<Id> for DistanceFn<F, C>
where
    C: Cost,
    F: Fn(&Id, &Id) -> Option<C>,
{
    type Cost = C;

    fn contains(&self, id: &Id) -> bool {
        (self.f)(id, id).is_some()
    }

    fn distance(&self, from: &Id, to: &Id) -> Option<C> {
        (self.f)(from, to)
    }
}

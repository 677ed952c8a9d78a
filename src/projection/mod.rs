//! Sub-matrix projection.
//!
//! Turns a caller selection of global point ids into a dense local matrix
//! indexed `0..k` plus the local→global mapping. Local index `i` is the
//! `i`-th selected id, in input order.

use std::collections::HashSet;
use std::fmt::Debug;
use std::hash::Hash;

use crate::distance::{DistanceMatrix, DistanceSource};
use crate::error::{PlanError, Result, SelectionError};

/// A selection projected onto local indices.
#[derive(Debug, Clone)]
pub struct Projection<Id, C> {
    matrix: DistanceMatrix<C>,
    local_to_global: Vec<Id>,
}

impl<Id: Clone, C> Projection<Id, C> {
    /// Dense local distances, `matrix[i][j] = d(selection[i], selection[j])`.
    pub fn matrix(&self) -> &DistanceMatrix<C> {
        &self.matrix
    }

    /// Global id of every local index.
    pub fn local_to_global(&self) -> &[Id] {
        &self.local_to_global
    }

    /// Maps a sequence of local indices back to global ids.
    ///
    /// # Panics
    ///
    /// Panics if an index is not below the selection size.
    pub fn to_global(&self, local_path: &[usize]) -> Vec<Id> {
        local_path
            .iter()
            .map(|&i| self.local_to_global[i].clone())
            .collect()
    }

    /// Local index of a global id, if selected.
    pub fn local_index(&self, id: &Id) -> Option<usize>
    where
        Id: PartialEq,
    {
        self.local_to_global.iter().position(|g| g == id)
    }

    /// Number of projected points.
    pub fn len(&self) -> usize {
        self.local_to_global.len()
    }

    /// Returns `true` if nothing was selected.
    pub fn is_empty(&self) -> bool {
        self.local_to_global.is_empty()
    }
}

/// Rejects selections that repeat an id.
pub fn check_distinct<Id>(selection: &[Id]) -> Result<()>
where
    Id: Eq + Hash + Debug,
{
    let mut seen = HashSet::with_capacity(selection.len());
    for id in selection {
        if !seen.insert(id) {
            return Err(SelectionError::Duplicate(format!("{id:?}")).into());
        }
    }
    Ok(())
}

/// Projects `selection` out of `source`.
///
/// Fails with [`PlanError::InvalidSelection`] on duplicate ids,
/// [`PlanError::UnknownPoint`] if an id has no row in the source, and
/// [`PlanError::InvalidDistance`] if a projected entry is negative, NaN, or
/// infinite.
///
/// # Examples
///
/// ```
/// use u_tour::distance::DistanceMatrix;
/// use u_tour::projection::project;
///
/// let global = DistanceMatrix::from_rows(vec![
///     vec![0, 1, 9, 9],
///     vec![1, 0, 1, 9],
///     vec![9, 1, 0, 1],
///     vec![9, 9, 1, 0],
/// ])
/// .expect("square");
///
/// let local = project(&global, &[3, 1]).expect("known points");
/// assert_eq!(local.local_to_global(), &[3, 1]);
/// assert_eq!(local.matrix().get(0, 1), 9);
/// assert_eq!(local.matrix().get(1, 1), 0);
/// ```
pub fn project<Id, S>(source: &S, selection: &[Id]) -> Result<Projection<Id, S::Cost>>
where
    Id: Eq + Hash + Clone + Debug,
    S: DistanceSource<Id> + ?Sized,
{
    check_distinct(selection)?;
    if let Some(missing) = selection.iter().find(|id| !source.contains(id)) {
        return Err(PlanError::UnknownPoint(format!("{missing:?}")));
    }

    let k = selection.len();
    let mut matrix = DistanceMatrix::new(k);
    for (i, from) in selection.iter().enumerate() {
        for (j, to) in selection.iter().enumerate() {
            let d = source
                .distance(from, to)
                .ok_or_else(|| PlanError::UnknownPoint(format!("{to:?}")))?;
            matrix.set(i, j, d);
        }
    }

    if let Some((i, j, value)) = matrix.first_invalid() {
        return Err(PlanError::InvalidDistance {
            from: format!("{:?}", selection[i]),
            to: format!("{:?}", selection[j]),
            value: format!("{value:?}"),
        });
    }

    Ok(Projection {
        matrix,
        local_to_global: selection.to_vec(),
    })
}

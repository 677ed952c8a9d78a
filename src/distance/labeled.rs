//! Distance matrix addressed by opaque point ids.

use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use super::{DistanceMatrix, DistanceSource};
use crate::cost::Cost;
use crate::error::{PlanError, Result};

/// A [`DistanceMatrix`] whose rows are labeled with caller ids.
///
/// # Examples
///
/// ```
/// use u_tour::distance::{DistanceMatrix, DistanceSource, LabeledDistanceMatrix};
///
/// let dm = DistanceMatrix::from_rows(vec![
///     vec![0, 250, 150],
///     vec![250, 0, 200],
///     vec![150, 200, 0],
/// ])
/// .expect("square");
/// let labeled = LabeledDistanceMatrix::new(vec!["museum", "cathedral", "house"], dm)
///     .expect("one label per row");
/// assert_eq!(labeled.distance(&"museum", &"house"), Some(150));
/// assert_eq!(labeled.distance(&"museum", &"theatre"), None);
/// ```
#[derive(Debug, Clone)]
pub struct LabeledDistanceMatrix<Id, C> {
    ids: Vec<Id>,
    index: HashMap<Id, usize>,
    matrix: DistanceMatrix<C>,
}

impl<Id, C> LabeledDistanceMatrix<Id, C>
where
    Id: Eq + Hash + Clone + Debug,
    C: Cost,
{
    /// Labels the rows of `matrix` with `ids`, in order.
    ///
    /// Fails with [`PlanError::MalformedMatrix`] if the label count differs
    /// from the matrix size or a label repeats.
    pub fn new(ids: Vec<Id>, matrix: DistanceMatrix<C>) -> Result<Self> {
        if ids.len() != matrix.size() {
            return Err(PlanError::MalformedMatrix(format!(
                "{} labels for a {}x{} matrix",
                ids.len(),
                matrix.size(),
                matrix.size()
            )));
        }
        let mut index = HashMap::with_capacity(ids.len());
        for (row, id) in ids.iter().enumerate() {
            if index.insert(id.clone(), row).is_some() {
                return Err(PlanError::MalformedMatrix(format!("label {id:?} repeats")));
            }
        }
        Ok(Self { ids, index, matrix })
    }

    /// Row of `id`, if known.
    pub fn row_of(&self, id: &Id) -> Option<usize> {
        self.index.get(id).copied()
    }

    /// Labels in row order.
    pub fn ids(&self) -> &[Id] {
        &self.ids
    }

    /// The underlying positional matrix.
    pub fn matrix(&self) -> &DistanceMatrix<C> {
        &self.matrix
    }
}

impl<Id, C> DistanceSource<Id> for LabeledDistanceMatrix<Id, C>
where
    Id: Eq + Hash + Clone + Debug,
    C: Cost,
{
    type Cost = C;

    fn contains(&self, id: &Id) -> bool {
        self.index.contains_key(id)
    }

    fn distance(&self, from: &Id, to: &Id) -> Option<C> {
        Some(self.matrix.get(self.row_of(from)?, self.row_of(to)?))
    }
}

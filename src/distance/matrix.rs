//! Dense distance matrix.

use serde::{Deserialize, Serialize};

use crate::cost::Cost;

/// A dense n×n distance matrix stored in row-major order.
///
/// Rows and columns are addressed by position. Entries need not be symmetric;
/// the diagonal is conventionally zero.
///
/// # Examples
///
/// ```
/// use u_tour::distance::DistanceMatrix;
///
/// let dm = DistanceMatrix::from_rows(vec![
///     vec![0, 950, 400],
///     vec![950, 0, 800],
///     vec![400, 800, 0],
/// ])
/// .expect("square");
/// assert_eq!(dm.get(0, 2), 400);
/// assert_eq!(dm.size(), 3);
/// assert!(dm.is_symmetric());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistanceMatrix<C> {
    data: Vec<C>,
    size: usize,
}

impl<C: Cost> DistanceMatrix<C> {
    /// Creates a distance matrix of the given size, initialized to zero.
    pub fn new(size: usize) -> Self {
        Self {
            data: vec![C::ZERO; size * size],
            size,
        }
    }

    /// Creates a distance matrix from an explicit row-major grid.
    ///
    /// Returns `None` if the data length doesn't match `size * size`.
    pub fn from_data(size: usize, data: Vec<C>) -> Option<Self> {
        if data.len() != size * size {
            return None;
        }
        Some(Self { data, size })
    }

    /// Creates a distance matrix from nested rows.
    ///
    /// Returns `None` unless every row has exactly as many entries as there
    /// are rows.
    pub fn from_rows(rows: Vec<Vec<C>>) -> Option<Self> {
        let size = rows.len();
        if rows.iter().any(|r| r.len() != size) {
            return None;
        }
        Some(Self {
            data: rows.into_iter().flatten().collect(),
            size,
        })
    }

    /// Returns the distance from location `from` to location `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> C {
        self.data[from * self.size + to]
    }

    /// Sets the distance from location `from` to location `to`.
    pub fn set(&mut self, from: usize, to: usize, distance: C) {
        self.data[from * self.size + to] = distance;
    }

    /// Number of locations in this matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` if `d(i, j) == d(j, i)` for every pair.
    pub fn is_symmetric(&self) -> bool {
        for i in 0..self.size {
            for j in (i + 1)..self.size {
                if self.get(i, j) != self.get(j, i) {
                    return false;
                }
            }
        }
        true
    }

    /// Returns the first entry that is negative, NaN, or infinite, as
    /// `(from, to, value)`.
    pub fn first_invalid(&self) -> Option<(usize, usize, C)> {
        self.data
            .iter()
            .position(|d| !d.is_valid())
            .map(|p| (p / self.size, p % self.size, self.data[p]))
    }

    /// Returns the nearest neighbor of `from` among the given candidates.
    ///
    /// Ties go to the candidate listed first. Returns `None` if `candidates`
    /// is empty.
    pub fn nearest_neighbor(&self, from: usize, candidates: &[usize]) -> Option<usize> {
        let mut best: Option<usize> = None;
        for &c in candidates {
            match best {
                Some(b) if self.get(from, c) >= self.get(from, b) => {}
                _ => best = Some(c),
            }
        }
        best
    }
}

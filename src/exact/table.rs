//! Flat `(mask, last)` arena for the Held-Karp sweep.

use crate::cost::Cost;

/// Dynamic-programming table over `2^k` visited masks × `k` endpoints.
///
/// Cells live in two contiguous arrays indexed by `mask * k + last`. An
/// unreached cell holds `None`, never a sentinel cost, so sums can't overflow
/// into something that looks like a valid path.
#[derive(Debug, Clone)]
pub struct HeldKarpTable<C> {
    points: usize,
    costs: Vec<Option<C>>,
    predecessors: Vec<Option<u8>>,
}

impl<C: Cost> HeldKarpTable<C> {
    /// Allocates an all-unreached table for `points` local points.
    pub(crate) fn new(points: usize) -> Self {
        let cells = (1usize << points) * points;
        Self {
            points,
            costs: vec![None; cells],
            predecessors: vec![None; cells],
        }
    }

    fn cell(&self, mask: u32, last: usize) -> usize {
        mask as usize * self.points + last
    }

    /// Marks `{i}` ending at `i` as a zero-cost path start.
    pub(crate) fn seed(&mut self, i: usize) {
        let cell = self.cell(1 << i, i);
        self.costs[cell] = Some(C::ZERO);
        self.predecessors[cell] = None;
    }

    /// Stores `cost` reached from `from` if it beats the current value.
    ///
    /// Returns `true` if the cell changed. Equal costs keep the earlier entry.
    pub(crate) fn relax(&mut self, mask: u32, last: usize, cost: C, from: usize) -> bool {
        let cell = self.cell(mask, last);
        match self.costs[cell] {
            Some(current) if cost >= current => false,
            _ => {
                self.costs[cell] = Some(cost);
                self.predecessors[cell] = Some(from as u8);
                true
            }
        }
    }

    /// Minimal known cost of a path visiting exactly `mask` and ending at
    /// `last`, or `None` if no such path fits the budget.
    pub fn cost(&self, mask: u32, last: usize) -> Option<C> {
        self.costs[self.cell(mask, last)]
    }

    /// Point visited just before `last` on the best path for `(mask, last)`,
    /// or `None` when `last` is where the path starts.
    pub fn predecessor(&self, mask: u32, last: usize) -> Option<usize> {
        self.predecessors[self.cell(mask, last)].map(usize::from)
    }

    /// Number of local points `k`.
    pub fn num_points(&self) -> usize {
        self.points
    }

    /// Number of masks, `2^k`.
    pub fn num_masks(&self) -> usize {
        1 << self.points
    }

    /// Number of reached cells.
    pub fn num_reached(&self) -> usize {
        self.costs.iter().filter(|c| c.is_some()).count()
    }
}

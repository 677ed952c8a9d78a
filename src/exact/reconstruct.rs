//! Backward walk over the predecessor table.

use super::{HeldKarpTable, TerminalState};
use crate::cost::Cost;

/// Rebuilds the visiting order of a terminal cell from a swept table.
///
/// Starting at `(mask, last)`, records `last`, steps to its predecessor and
/// clears `last` from the mask, until a path start is reached. The result
/// visits each local point at most once, has one entry per bit of the
/// terminal mask, and its cost under the swept matrix equals the terminal
/// cost.
pub struct PathReconstructor<'t, C> {
    table: &'t HeldKarpTable<C>,
}

impl<'t, C: Cost> PathReconstructor<'t, C> {
    /// Creates a reconstructor over a finished sweep.
    pub fn new(table: &'t HeldKarpTable<C>) -> Self {
        Self { table }
    }

    /// Local indices from the path start to `terminal.last`.
    pub fn reconstruct(&self, terminal: &TerminalState<C>) -> Vec<usize> {
        let mut path = Vec::with_capacity(terminal.len());
        let mut mask = terminal.mask;
        let mut current = Some(terminal.last);

        while let Some(last) = current {
            debug_assert!(mask & (1 << last) != 0, "point {last} not in mask {mask:#b}");
            path.push(last);
            current = self.table.predecessor(mask, last);
            mask &= !(1u32 << last);
        }

        path.reverse();
        path
    }
}

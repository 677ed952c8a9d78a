//! Budget-constrained Held-Karp path optimizer.
//!
//! # Algorithm
//!
//! Cells `(mask, last)` hold the cheapest in-budget cost of a simple path
//! that visits exactly `mask` and ends at `last`. Every singleton `{i}` starts
//! at cost zero. Masks are swept in increasing numeric order, which visits
//! every subset before its supersets, and each reached cell is extended by
//! every unvisited point:
//!
//! ```text
//! cost(mask | {next}, next) = min(cost(mask, last) + d(last, next))   if ≤ budget
//! ```
//!
//! Dropping candidates over budget is exact because distances are
//! non-negative, so a path never gets cheaper by extending it.
//!
//! The terminal cell maximizes the number of visited points, then minimizes
//! cost. Ties go to the first cell met scanning masks upward and, within a
//! mask, endpoints downward.
//!
//! # Complexity
//!
//! O(2^k · k²) time, O(2^k · k) space. This is an exact solver: callers
//! bound `k` (see [`MAX_POINTS`], [`estimated_work`] and [`estimated_bytes`]).
//!
//! # Reference
//!
//! Held, M., Karp, R.M. (1962). "A dynamic programming approach to
//! sequencing problems", *J. SIAM* 10(1), 196-210.

use log::{debug, trace};

use super::{HeldKarpTable, PathReconstructor};
use crate::cost::Cost;
use crate::distance::DistanceMatrix;
use crate::error::{PlanError, Result, SelectionError};

/// Largest number of points the exact solver accepts.
pub const MAX_POINTS: usize = 20;

/// Number of relaxation steps the sweep performs for `k` points, `2^k · k²`.
///
/// Lets a host reject a request before allocating anything.
///
/// ```
/// use u_tour::exact::estimated_work;
///
/// assert_eq!(estimated_work(0), 0);
/// assert_eq!(estimated_work(4), 256);
/// assert_eq!(estimated_work(20), 1_048_576 * 400);
/// ```
pub fn estimated_work(k: usize) -> u128 {
    if k >= 100 {
        return u128::MAX;
    }
    (1u128 << k) * (k as u128) * (k as u128)
}

/// Bytes the sweep's table occupies for `k` points with cost type `C`.
///
/// Every one of the `2^k · k` cells stores an `Option<C>` and an
/// `Option<u8>`. With `f64` costs and `k = 20` that is about 377 MB.
///
/// ```
/// use u_tour::exact::estimated_bytes;
///
/// assert_eq!(estimated_bytes::<u32>(0), 0);
/// assert_eq!(estimated_bytes::<f64>(4), 16 * 4 * (16 + 2));
/// ```
pub fn estimated_bytes<C: Cost>(k: usize) -> u128 {
    if k >= 100 {
        return u128::MAX;
    }
    let cell = (std::mem::size_of::<Option<C>>() + std::mem::size_of::<Option<u8>>()) as u128;
    (1u128 << k) * (k as u128) * cell
}

/// The cell chosen as the overall answer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TerminalState<C> {
    /// Visited local points.
    pub mask: u32,
    /// Local point the path ends at.
    pub last: usize,
    /// Accumulated travel cost.
    pub cost: C,
}

impl<C> TerminalState<C> {
    /// Number of points the path visits.
    pub fn len(&self) -> usize {
        self.mask.count_ones() as usize
    }

    /// Returns `true` for an empty mask; a selected terminal never is.
    pub fn is_empty(&self) -> bool {
        self.mask == 0
    }
}

/// A finished sweep together with its chosen terminal cell.
#[derive(Debug, Clone)]
pub struct Optimum<C> {
    table: HeldKarpTable<C>,
    terminal: TerminalState<C>,
}

impl<C: Cost> Optimum<C> {
    /// The chosen terminal cell.
    pub fn terminal(&self) -> TerminalState<C> {
        self.terminal
    }

    /// The full table, for inspection.
    pub fn table(&self) -> &HeldKarpTable<C> {
        &self.table
    }

    /// Local indices of the optimal path, in visiting order.
    pub fn path(&self) -> Vec<usize> {
        PathReconstructor::new(&self.table).reconstruct(&self.terminal)
    }
}

/// Exact solver for the longest-then-cheapest simple path within a budget.
///
/// Each call owns its own table; optimizers over different matrices may run
/// on separate threads freely.
///
/// # Examples
///
/// ```
/// use u_tour::distance::DistanceMatrix;
/// use u_tour::exact::PathOptimizer;
///
/// let dm = DistanceMatrix::from_rows(vec![
///     vec![0, 1, 9, 9],
///     vec![1, 0, 1, 9],
///     vec![9, 1, 0, 1],
///     vec![9, 9, 1, 0],
/// ])
/// .expect("square");
///
/// let best = PathOptimizer::new(&dm, 100).expect("valid").optimize().expect("k > 0");
/// assert_eq!(best.path(), vec![0, 1, 2, 3]);
/// assert_eq!(best.terminal().cost, 3);
///
/// let short = PathOptimizer::new(&dm, 2).expect("valid").optimize().expect("k > 0");
/// assert_eq!(short.path(), vec![0, 1, 2]);
/// assert_eq!(short.terminal().cost, 2);
/// ```
#[derive(Debug, Clone)]
pub struct PathOptimizer<'a, C> {
    matrix: &'a DistanceMatrix<C>,
    budget: C,
    required: u32,
}

impl<'a, C: Cost> PathOptimizer<'a, C> {
    /// Creates an optimizer over a local matrix.
    ///
    /// Fails if the budget is negative, NaN, or infinite, if the matrix has
    /// more than [`MAX_POINTS`] rows, or if an entry is invalid.
    pub fn new(matrix: &'a DistanceMatrix<C>, budget: C) -> Result<Self> {
        if !budget.is_valid() {
            return Err(PlanError::InvalidBudget(format!("{budget:?}")));
        }
        if matrix.size() > MAX_POINTS {
            return Err(SelectionError::TooLarge {
                size: matrix.size(),
                limit: MAX_POINTS,
            }
            .into());
        }
        if let Some((from, to, value)) = matrix.first_invalid() {
            return Err(PlanError::InvalidDistance {
                from: from.to_string(),
                to: to.to_string(),
                value: format!("{value:?}"),
            });
        }
        Ok(Self {
            matrix,
            budget,
            required: 0,
        })
    }

    /// Only accept terminal paths that visit every listed local point.
    pub fn with_required(mut self, required: &[usize]) -> Result<Self> {
        for &i in required {
            if i >= self.matrix.size() {
                return Err(SelectionError::RequiredNotSelected(format!("local index {i}")).into());
            }
            self.required |= 1 << i;
        }
        Ok(self)
    }

    /// The travel budget.
    pub fn budget(&self) -> C {
        self.budget
    }

    /// Fills the table for every in-budget `(mask, last)` cell.
    pub fn sweep(&self) -> HeldKarpTable<C> {
        let k = self.matrix.size();
        let mut table: HeldKarpTable<C> = HeldKarpTable::new(k);
        debug!(
            "held-karp sweep: {k} points, {} cells, budget {:?}",
            table.num_masks() * k,
            self.budget
        );

        for i in 0..k {
            table.seed(i);
        }

        let masks = 1u32 << k;
        for mask in 1..masks {
            for last in 0..k {
                let Some(cost) = table.cost(mask, last) else {
                    continue;
                };
                for next in 0..k {
                    let bit = 1u32 << next;
                    if mask & bit != 0 {
                        continue;
                    }
                    let Some(candidate) = cost.checked_add(self.matrix.get(last, next)) else {
                        continue;
                    };
                    if candidate <= self.budget {
                        table.relax(mask | bit, next, candidate, last);
                    }
                }
            }
        }

        trace!("held-karp sweep reached {} cells", table.num_reached());
        table
    }

    /// Picks the terminal cell: most points, then lowest cost.
    ///
    /// Only masks covering the required points qualify. Returns `None` if no
    /// cell qualifies, which for an unconstrained optimizer happens only when
    /// `k == 0`.
    pub fn select_terminal(&self, table: &HeldKarpTable<C>) -> Option<TerminalState<C>> {
        let k = table.num_points();
        let mut best: Option<TerminalState<C>> = None;

        for mask in 1..(1u32 << k) {
            if mask & self.required != self.required {
                continue;
            }
            for last in (0..k).rev() {
                let Some(cost) = table.cost(mask, last) else {
                    continue;
                };
                if cost > self.budget {
                    continue;
                }
                let better = match best {
                    None => true,
                    Some(b) => {
                        let (count, best_count) = (mask.count_ones(), b.mask.count_ones());
                        count > best_count || (count == best_count && cost < b.cost)
                    }
                };
                if better {
                    best = Some(TerminalState { mask, last, cost });
                }
            }
        }

        if let Some(t) = &best {
            debug!(
                "held-karp terminal: {} of {k} points, ends at {}, cost {:?}",
                t.len(),
                t.last,
                t.cost
            );
        }
        best
    }

    /// Runs the sweep and selects the terminal cell.
    ///
    /// Returns `None` for an empty matrix (without sweeping) or when no
    /// in-budget path covers the required points.
    pub fn optimize(&self) -> Option<Optimum<C>> {
        if self.matrix.size() == 0 {
            return None;
        }
        let table = self.sweep();
        let terminal = self.select_terminal(&table)?;
        Some(Optimum { table, terminal })
    }
}

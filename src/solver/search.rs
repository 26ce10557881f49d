//! The backtracking search driver.
//!
//! Each recursion frame recomputes the empty-cell list and candidate map
//! from the grid as it currently stands, asks the selector for the next
//! cell, and tries that cell's candidates in ascending order. Assignments
//! are written straight into the shared grid; undo is a single clear of the
//! cell, either by the forward checker (failed check) or by the driver
//! (failed subtree).

use crate::solver::candidates::empty_cells_and_candidates;
use crate::solver::forward_check::{ForwardPolicy, forward_check};
use crate::solver::grid::Grid;
use crate::solver::selection::{CellSelection, MrvDegree};
use itertools::Itertools;
use smallvec::SmallVec;

/// Counters accumulated over one solve.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Tentative assignments attempted.
    pub decisions: usize,
    /// Assignments undone after a failed subtree.
    pub backtracks: usize,
    /// Assignments rejected by the forward checker.
    pub rejections: usize,
}

/// A backtracking search over one exclusively held grid.
#[derive(Debug, Clone)]
pub struct Search<S: CellSelection = MrvDegree> {
    selector: S,
    policy: ForwardPolicy,
    stats: SearchStats,
}

impl Default for Search {
    fn default() -> Self {
        Self::new(MrvDegree, ForwardPolicy::default())
    }
}

impl<S: CellSelection> Search<S> {
    /// Creates a driver with the given cell-selection heuristic and
    /// forward-checking policy.
    #[must_use]
    pub fn new(selector: S, policy: ForwardPolicy) -> Self {
        Self {
            selector,
            policy,
            stats: SearchStats::default(),
        }
    }

    /// Attempts to complete the grid in place.
    ///
    /// Returns `true` with the grid fully assigned on success. On failure
    /// the grid is left exactly as it was passed in: every tentative
    /// assignment made below this frame has been reverted.
    pub fn solve(&mut self, grid: &mut Grid) -> bool {
        let (empty, candidate_map) = empty_cells_and_candidates(grid);

        let Some(cell) = self.selector.pick(&empty, &candidate_map, grid) else {
            return true;
        };

        let values: SmallVec<[usize; 16]> =
            candidate_map[&cell].iter().copied().sorted().collect();
        if values.is_empty() {
            log::trace!("dead end at ({}, {})", cell.row, cell.col);
            return false;
        }

        for value in values {
            self.stats.decisions += 1;
            log::trace!("try {value} at ({}, {})", cell.row, cell.col);
            grid.set(cell.row, cell.col, value);

            if !forward_check(grid, cell.row, cell.col, value, self.policy) {
                self.stats.rejections += 1;
                continue;
            }

            if self.solve(grid) {
                return true;
            }

            grid.clear(cell.row, cell.col);
            self.stats.backtracks += 1;
        }

        false
    }

    /// The counters accumulated so far.
    #[must_use]
    pub const fn stats(&self) -> SearchStats {
        self.stats
    }
}

//! Post-assignment forward checking.
//!
//! [`forward_check`] runs after a tentative value has been written to the
//! grid and decides whether the branch is worth descending into. On failure
//! it reverts the tentative cell itself; the caller only undoes the
//! assignment when a *successful* check is later followed by a failed
//! recursive search.

use crate::solver::candidates::candidates;
use crate::solver::grid::Grid;

/// The rule applied to each empty peer of the tentatively assigned cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ForwardPolicy {
    /// Reject when a peer's recomputed candidate set still contains the
    /// tentative value.
    ///
    /// With the tentative value already on the board, every peer scanned
    /// here shares a row, column or block with it and therefore excludes
    /// that value from its recomputed set; the rule can only fire when the
    /// probed value is absent from the queried cell.
    /// [`ForwardPolicy::Classic`] is the pruning variant.
    #[default]
    Sibling,

    /// Reject when a peer's recomputed candidate set has become empty.
    Classic,
}

/// Validates the tentative assignment of `value` at (row, col).
///
/// Every *other* empty cell in the same row, column or block has its
/// candidate set recomputed against the current grid and tested under
/// `policy`. The first offending peer resets (row, col) to empty and fails
/// the check; otherwise the assignment stays in place.
pub fn forward_check(
    grid: &mut Grid,
    row: usize,
    col: usize,
    value: usize,
    policy: ForwardPolicy,
) -> bool {
    let size = grid.size();
    let block = grid.block_size();

    for i in 0..size {
        if i != col && grid.is_empty_at(row, i) && rejects(grid, row, i, value, policy) {
            grid.clear(row, col);
            return false;
        }
        if i != row && grid.is_empty_at(i, col) && rejects(grid, i, col, value, policy) {
            grid.clear(row, col);
            return false;
        }
    }

    let (start_row, start_col) = (block * (row / block), block * (col / block));
    for r in start_row..start_row + block {
        for c in start_col..start_col + block {
            if (r, c) != (row, col)
                && grid.is_empty_at(r, c)
                && rejects(grid, r, c, value, policy)
            {
                grid.clear(row, col);
                return false;
            }
        }
    }

    true
}

fn rejects(grid: &Grid, row: usize, col: usize, value: usize, policy: ForwardPolicy) -> bool {
    let options = candidates(grid, row, col);
    match policy {
        ForwardPolicy::Sibling => options.contains(&value),
        ForwardPolicy::Classic => options.is_empty(),
    }
}

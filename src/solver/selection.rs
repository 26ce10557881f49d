#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! Cell-ordering heuristics for the search.

use crate::solver::candidates::CandidateMap;
use crate::solver::grid::{Cell, Grid};

/// Picks the next empty cell to assign.
///
/// Implementations must be deterministic for a fixed empty-cell ordering so
/// that repeated runs over the same grid visit the same cells.
pub trait CellSelection {
    /// Returns the next cell to branch on, or `None` when no empty cells
    /// remain. A returned cell may have an empty candidate set; the driver
    /// treats that as a dead end.
    fn pick(&self, empty: &[Cell], candidates: &CandidateMap, grid: &Grid) -> Option<Cell>;
}

/// Minimum-remaining-values ordering with a degree-heuristic tie-break.
///
/// The cell with the fewest candidates wins. Among cells tied on candidate
/// count, the one constrained by the most other empty cells (row + column +
/// block, each constraint counted separately) wins; remaining ties resolve
/// to the earliest cell in the row-major empty-cell order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MrvDegree;

/// Naive ordering that branches on the first empty cell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FirstEmpty;

impl CellSelection for MrvDegree {
    fn pick(&self, empty: &[Cell], candidates: &CandidateMap, grid: &Grid) -> Option<Cell> {
        let min_count = empty.iter().map(|cell| candidates[cell].len()).min()?;

        let tied: Vec<Cell> = empty
            .iter()
            .copied()
            .filter(|cell| candidates[cell].len() == min_count)
            .collect();

        let mut best = *tied.first()?;
        if tied.len() == 1 {
            return Some(best);
        }

        let mut best_degree = degree(best, candidates, grid);
        for &cell in &tied[1..] {
            let count = degree(cell, candidates, grid);
            if count > best_degree {
                best = cell;
                best_degree = count;
            }
        }
        Some(best)
    }
}

impl CellSelection for FirstEmpty {
    fn pick(&self, empty: &[Cell], _candidates: &CandidateMap, _grid: &Grid) -> Option<Cell> {
        empty.first().copied()
    }
}

/// Counts the other empty cells sharing a constraint group with `cell`.
///
/// A block neighbour that also shares the row or column is counted once per
/// group. Membership is probed against the candidate map, whose keys are
/// exactly the empty cells of the current frame.
fn degree(cell: Cell, candidates: &CandidateMap, grid: &Grid) -> usize {
    let size = grid.size();
    let block = grid.block_size();
    let mut count = 0;

    for i in 0..size {
        if i != cell.col && candidates.contains_key(&Cell::new(cell.row, i)) {
            count += 1;
        }
        if i != cell.row && candidates.contains_key(&Cell::new(i, cell.col)) {
            count += 1;
        }
    }

    let (start_row, start_col) = (block * (cell.row / block), block * (cell.col / block));
    for r in start_row..start_row + block {
        for c in start_col..start_col + block {
            if (r, c) != (cell.row, cell.col) && candidates.contains_key(&Cell::new(r, c)) {
                count += 1;
            }
        }
    }

    count
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::candidates::empty_cells_and_candidates;

    fn grid_of<const N: usize>(board: [[usize; N]; N]) -> Grid {
        Grid::new(board.iter().map(|row| row.to_vec()).collect()).unwrap()
    }

    #[test]
    fn test_pick_none_when_solved() {
        let grid = grid_of([[1, 2, 3, 4], [3, 4, 1, 2], [2, 1, 4, 3], [4, 3, 2, 1]]);
        let (empty, map) = empty_cells_and_candidates(&grid);
        assert_eq!(MrvDegree.pick(&empty, &map, &grid), None);
        assert_eq!(FirstEmpty.pick(&empty, &map, &grid), None);
    }

    #[test]
    fn test_mrv_prefers_fewest_candidates() {
        // (1, 0) sees 1 and 3 in its column and 1 and 2 in its block,
        // leaving {4} as the only single-candidate cell on the board.
        let grid = grid_of([[1, 2, 0, 0], [0, 0, 0, 0], [3, 0, 0, 0], [0, 0, 0, 0]]);
        let (empty, map) = empty_cells_and_candidates(&grid);

        let picked = MrvDegree.pick(&empty, &map, &grid).unwrap();
        assert_eq!(picked, Cell::new(1, 0));
        assert_eq!(map[&picked].len(), 1);
    }

    #[test]
    fn test_degree_counts_each_constraint_group() {
        let grid = grid_of([[1, 2, 0, 0], [0, 0, 0, 0], [3, 0, 0, 0], [0, 0, 0, 0]]);
        let (_, map) = empty_cells_and_candidates(&grid);

        // Row 3 has three other empties, column 0 only (1, 0), and the
        // south-west block contributes (2, 1) and (3, 1).
        assert_eq!(degree(Cell::new(3, 0), &map, &grid), 6);
    }

    #[test]
    fn test_degree_breaks_mrv_ties() {
        // Every empty cell except those in row 0, column 0 and the top-left
        // block has candidate count 4; the rest tie at 3. Within that tie,
        // (0, 1) comes first in row-major order but has degree 7, while
        // (0, 2) reaches degree 8 through its fully empty block.
        let grid = grid_of([[4, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]]);
        let (empty, map) = empty_cells_and_candidates(&grid);

        assert_eq!(map[&Cell::new(0, 1)].len(), map[&Cell::new(0, 2)].len());
        assert!(degree(Cell::new(0, 1), &map, &grid) < degree(Cell::new(0, 2), &map, &grid));
        assert_eq!(MrvDegree.pick(&empty, &map, &grid), Some(Cell::new(0, 2)));
    }

    #[test]
    fn test_tie_resolves_to_first_in_order() {
        // A fully empty grid: every cell ties on count and degree, so the
        // row-major first cell must win, run after run.
        let grid = grid_of([[0; 4]; 4]);
        let (empty, map) = empty_cells_and_candidates(&grid);

        for _ in 0..3 {
            assert_eq!(MrvDegree.pick(&empty, &map, &grid), Some(Cell::new(0, 0)));
        }
    }

    #[test]
    fn test_zero_candidate_cell_is_a_legal_winner() {
        // (0, 3) has no options left: row {1, 2, 3}, column {4}.
        let grid = grid_of([[1, 2, 3, 0], [0, 0, 0, 4], [0, 0, 0, 0], [0, 0, 0, 0]]);
        let (empty, map) = empty_cells_and_candidates(&grid);

        let picked = MrvDegree.pick(&empty, &map, &grid).unwrap();
        assert_eq!(picked, Cell::new(0, 3));
        assert!(map[&picked].is_empty());
    }

    #[test]
    fn test_first_empty_ignores_counts() {
        let grid = grid_of([[1, 2, 3, 0], [0, 0, 0, 4], [0, 0, 0, 0], [0, 0, 0, 0]]);
        let (empty, map) = empty_cells_and_candidates(&grid);
        assert_eq!(FirstEmpty.pick(&empty, &map, &grid), Some(Cell::new(0, 3)));
    }
}

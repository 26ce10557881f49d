//! Candidate-value computation.
//!
//! A cell's candidate set is `{1..N}` minus every value already placed in its
//! row, its column, and its block. The empty-cell list and the full
//! candidate map are rebuilt from the grid at the top of every search frame
//! rather than maintained incrementally, so they always reflect the grid
//! exactly as it stands.

use crate::solver::grid::{Cell, Grid};
use bit_vec::BitVec;
use rustc_hash::{FxHashMap, FxHashSet};

/// Candidate sets keyed by empty cell.
pub type CandidateMap = FxHashMap<Cell, FxHashSet<usize>>;

/// Computes the admissible values for (row, col) against the current grid.
///
/// The scan covers the whole row, the whole column, and the whole block,
/// including (row, col) itself, so the function is well-defined on filled
/// cells: the queried cell's own value is excluded like any peer value.
/// The grid is never mutated.
#[must_use]
pub fn candidates(grid: &Grid, row: usize, col: usize) -> FxHashSet<usize> {
    let size = grid.size();
    let block = grid.block_size();
    let mut seen = BitVec::from_elem(size + 1, false);

    for i in 0..size {
        seen.set(grid.get(row, i), true);
        seen.set(grid.get(i, col), true);
    }

    let (start_row, start_col) = (block * (row / block), block * (col / block));
    for r in start_row..start_row + block {
        for c in start_col..start_col + block {
            seen.set(grid.get(r, c), true);
        }
    }

    (1..=size).filter(|&value| !seen[value]).collect()
}

/// Collects the empty cells in row-major order together with their candidate
/// sets.
#[must_use]
pub fn empty_cells_and_candidates(grid: &Grid) -> (Vec<Cell>, CandidateMap) {
    let mut empty = Vec::new();
    let mut map = CandidateMap::default();

    for row in 0..grid.size() {
        for col in 0..grid.size() {
            if grid.is_empty_at(row, col) {
                let cell = Cell::new(row, col);
                empty.push(cell);
                map.insert(cell, candidates(grid, row, col));
            }
        }
    }

    (empty, map)
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;

    fn grid_of<const N: usize>(board: [[usize; N]; N]) -> Grid {
        Grid::new(board.iter().map(|row| row.to_vec()).collect()).unwrap()
    }

    #[test]
    fn test_candidates_exclude_row_col_and_block() {
        let grid = grid_of([[1, 0, 0, 4], [0, 0, 1, 0], [0, 1, 0, 0], [4, 0, 0, 1]]);

        // Row 0 holds {1, 4}, column 1 holds {1}, block (0,0) holds {1}.
        let options = candidates(&grid, 0, 1);
        assert_eq!(options.into_iter().sorted().collect_vec(), vec![2, 3]);
    }

    #[test]
    fn test_candidates_on_filled_cell_is_well_defined() {
        let grid = grid_of([[1, 0, 0, 4], [0, 0, 1, 0], [0, 1, 0, 0], [4, 0, 0, 1]]);

        // The queried cell's own value is excluded like any other peer value.
        let options = candidates(&grid, 0, 0);
        assert_eq!(options.into_iter().sorted().collect_vec(), vec![2, 3]);
    }

    #[test]
    fn test_candidates_idempotent_on_unmodified_grid() {
        let grid = grid_of([[1, 0, 0, 4], [0, 0, 1, 0], [0, 1, 0, 0], [4, 0, 0, 1]]);
        assert_eq!(candidates(&grid, 1, 3), candidates(&grid, 1, 3));
    }

    #[test]
    fn test_empty_cells_row_major_order() {
        let grid = grid_of([[1, 0, 0, 4], [0, 0, 1, 0], [0, 1, 0, 0], [4, 0, 0, 1]]);
        let (empty, map) = empty_cells_and_candidates(&grid);

        let expected = vec![
            Cell::new(0, 1),
            Cell::new(0, 2),
            Cell::new(1, 0),
            Cell::new(1, 1),
            Cell::new(1, 3),
            Cell::new(2, 0),
            Cell::new(2, 2),
            Cell::new(2, 3),
            Cell::new(3, 1),
            Cell::new(3, 2),
        ];
        assert_eq!(empty, expected);
        assert_eq!(map.len(), expected.len());
        assert!(empty.iter().all(|cell| map.contains_key(cell)));
    }

    #[test]
    fn test_full_grid_has_no_empty_cells() {
        let grid = grid_of([[1, 2, 3, 4], [3, 4, 1, 2], [2, 1, 4, 3], [4, 3, 2, 1]]);
        let (empty, map) = empty_cells_and_candidates(&grid);
        assert!(empty.is_empty());
        assert!(map.is_empty());
    }
}

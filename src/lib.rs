#![warn(missing_docs)]
//! This crate solves Sudoku puzzles of arbitrary square size (9×9, 16×16,
//! and so on) using backtracking search with minimum-remaining-values and
//! degree-heuristic cell ordering plus forward checking.

/// The `puzzle` module reads and writes grids in the text file format.
pub mod puzzle;

/// The `solver` module implements the constraint-satisfaction search engine.
pub mod solver;

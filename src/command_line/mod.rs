//! Command-line surface of the `sudoku-csp` binary.

pub(crate) mod cli;

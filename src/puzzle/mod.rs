#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! Reading and writing puzzles in the whitespace-delimited text format.

/// The `text` module parses puzzle files and writes solution artifacts.
pub mod text;

/// A 4×4 puzzle with block size 2.
pub const EXAMPLE_FOUR: [[usize; 4]; 4] = [[1, 0, 0, 4], [0, 0, 1, 0], [0, 1, 0, 0], [4, 0, 0, 1]];

/// The classic 9×9 puzzle with a unique solution.
pub const EXAMPLE_NINE: [[usize; 9]; 9] = [
    [5, 3, 0, 0, 7, 0, 0, 0, 0],
    [6, 0, 0, 1, 9, 5, 0, 0, 0],
    [0, 9, 8, 0, 0, 0, 0, 6, 0],
    [8, 0, 0, 0, 6, 0, 0, 0, 3],
    [4, 0, 0, 8, 0, 3, 0, 0, 1],
    [7, 0, 0, 0, 2, 0, 0, 0, 6],
    [0, 6, 0, 0, 0, 0, 2, 8, 0],
    [0, 0, 0, 4, 1, 9, 0, 0, 5],
    [0, 0, 0, 0, 8, 0, 0, 7, 9],
];

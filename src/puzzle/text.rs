#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! A parser and writer for the whitespace-delimited puzzle format.
//!
//! A puzzle file holds one row per line, values separated by spaces, with 0
//! marking an empty cell. The grid dimension is inferred from the number of
//! lines; there is no size header. The solved counterpart of an input file
//! is written next to it as `<base>_output.txt`, where `<base>` is the file
//! name up to its first `.`, and contains either the grid in the same
//! format or the literal text `No Solution`.

use crate::solver::grid::{Grid, ShapeError};
use std::fs;
use std::io::{self, BufRead};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Failures while turning a text source into a [`Grid`].
#[derive(Debug, Error)]
pub enum ParseError {
    /// The source could not be read.
    #[error("io error: {0}")]
    Io(#[from] io::Error),

    /// A token was not a non-negative integer.
    #[error("line {line}: '{token}' is not a cell value")]
    InvalidToken {
        /// One-based line number.
        line: usize,
        /// The offending token.
        token: String,
    },

    /// The rows did not form a well-shaped board.
    #[error(transparent)]
    Shape(#[from] ShapeError),
}

/// Parses whitespace-delimited rows from a `BufRead` source into a [`Grid`].
///
/// Blank lines are not skipped: they parse as zero-length rows and surface
/// as a shape error rather than silently shifting the grid.
///
/// # Errors
///
/// Returns a [`ParseError`] on I/O failure, a non-integer token, or a board
/// that fails [`Grid::new`] validation.
pub fn parse_grid<R: BufRead>(reader: R) -> Result<Grid, ParseError> {
    let mut rows = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let row = line
            .split_whitespace()
            .map(|token| {
                token.parse::<usize>().map_err(|_| ParseError::InvalidToken {
                    line: index + 1,
                    token: token.to_owned(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        rows.push(row);
    }

    Ok(Grid::new(rows)?)
}

/// Parses the puzzle file at `path`.
///
/// # Errors
///
/// See [`parse_grid`]; file-open failures surface as [`ParseError::Io`].
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<Grid, ParseError> {
    let file = fs::File::open(path)?;
    parse_grid(io::BufReader::new(file))
}

/// Derives the output artifact path for an input puzzle path.
///
/// Only the file name is split on `.`; the parent directory is preserved,
/// so `puzzles/easy.v2.txt` maps to `puzzles/easy_output.txt`.
#[must_use]
pub fn output_path(input: &Path) -> PathBuf {
    let name = input
        .file_name()
        .map_or_else(String::new, |name| name.to_string_lossy().into_owned());
    let base = name.split('.').next().unwrap_or_default();
    input.with_file_name(format!("{base}_output.txt"))
}

/// Writes the solve outcome next to the input file.
///
/// A solved grid is written in the input format; an unsolvable puzzle
/// produces the literal text `No Solution`. A partially filled grid is
/// never written.
///
/// # Errors
///
/// Propagates the underlying write failure.
pub fn write_solution(input: &Path, solution: Option<&Grid>) -> io::Result<PathBuf> {
    let path = output_path(input);
    let contents = solution.map_or_else(|| String::from("No Solution"), ToString::to_string);
    fs::write(&path, contents)?;
    Ok(path)
}

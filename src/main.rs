//! # sudoku-csp
//!
//! A command-line Sudoku solver. Puzzles are read from whitespace-delimited
//! text files (one row per line, 0 for an empty cell, dimension inferred
//! from the line count) and solved with backtracking search driven by the
//! minimum-remaining-values heuristic, a degree-heuristic tie-break, and
//! forward checking after each tentative assignment.
//!
//! ## Usage
//!
//! ```sh
//! # Solve a single puzzle; the result lands next to it as <base>_output.txt
//! sudoku-csp puzzle.txt
//!
//! # Solve a whole directory of .txt puzzles
//! sudoku-csp dir --path puzzles/
//!
//! # Switch heuristics
//! sudoku-csp puzzle.txt --selection first-empty --forward-check classic
//! ```
//!
//! Unsolvable puzzles are reported as such and produce an output file
//! containing the text `No Solution`; a partially filled grid is never
//! written.

mod command_line;

use clap::Parser;
use command_line::cli::{self, Cli, Commands};

/// Global allocator using `tikv-jemallocator`, which also backs the memory
/// figures in the statistics report.
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

fn main() {
    let args = Cli::parse();

    let debug = match &args.command {
        Some(Commands::Dir { common, .. }) => common.debug,
        _ => args.common.debug,
    };
    init_logger(debug);

    let result = match args.command {
        Some(Commands::Dir { path, common }) => cli::solve_dir(&path, &common),
        Some(Commands::Completions { shell }) => {
            cli::completions(shell);
            Ok(())
        }
        None => match args.path.as_deref() {
            Some(path) => cli::solve_path(path, &args.common),
            None => {
                eprintln!("Usage: sudoku-csp <input_file>");
                std::process::exit(1);
            }
        },
    };

    if let Err(message) = result {
        eprintln!("{message}");
        std::process::exit(1);
    }
}

fn init_logger(debug: bool) {
    let level = if debug { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

//! Defines the command-line interface and drives solving from it.
//!
//! Uses `clap` for parsing arguments.

use clap::{Args, Parser, Subcommand};
use std::fmt::{self, Display, Formatter};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use sudoku_csp::puzzle::text::{parse_file, write_solution};
use sudoku_csp::solver::forward_check::ForwardPolicy;
use sudoku_csp::solver::grid::Grid;
use sudoku_csp::solver::search::{Search, SearchStats};
use sudoku_csp::solver::selection::{CellSelection, FirstEmpty, MrvDegree};
use tikv_jemalloc_ctl::{epoch, stats};

/// Defines the command-line interface for the solver.
#[derive(Parser, Debug)]
#[command(name = "sudoku-csp", version, about = "A heuristic backtracking Sudoku solver")]
pub(crate) struct Cli {
    /// Path to a puzzle file: one row per line, space-separated values,
    /// 0 for an empty cell.
    pub(crate) path: Option<PathBuf>,

    /// Specifies the subcommand to execute (e.g. `dir`, `completions`).
    #[clap(subcommand)]
    pub(crate) command: Option<Commands>,

    /// Common options applicable to all commands.
    #[command(flatten)]
    pub(crate) common: CommonOptions,
}

/// Enumerates the available subcommands.
#[derive(Subcommand, Debug)]
pub(crate) enum Commands {
    /// Solve every `.txt` puzzle under a directory.
    Dir {
        /// Directory to scan recursively. Previously written `_output.txt`
        /// artifacts are skipped.
        #[arg(long)]
        path: PathBuf,

        /// Common options for this subcommand.
        #[command(flatten)]
        common: CommonOptions,
    },

    /// Generate shell completion scripts.
    Completions {
        /// The shell to generate completions for.
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Defines common command-line options shared across different subcommands.
#[derive(Args, Debug, Default, Clone)]
pub(crate) struct CommonOptions {
    /// Enable debug logging from the search.
    #[arg(short, long, default_value_t = false)]
    pub(crate) debug: bool,

    /// Enable printing of solve statistics after each puzzle.
    #[arg(short, long, default_value_t = true)]
    pub(crate) stats: bool,

    /// Print the solved grid to stdout in addition to the output file.
    #[arg(short, long, default_value_t = false)]
    pub(crate) print_solution: bool,

    /// Cell-ordering heuristic.
    #[arg(long, value_enum, default_value_t = SelectionType::MrvDegree)]
    pub(crate) selection: SelectionType,

    /// Forward-checking rule applied after each tentative assignment.
    #[arg(long, value_enum, default_value_t = ForwardCheckType::Sibling)]
    pub(crate) forward_check: ForwardCheckType,
}

/// Selectable cell-ordering heuristics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub(crate) enum SelectionType {
    /// Fewest candidates first, ties broken by constraint degree.
    #[default]
    MrvDegree,
    /// First empty cell in row-major order.
    FirstEmpty,
}

impl Display for SelectionType {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::MrvDegree => "mrv-degree",
            Self::FirstEmpty => "first-empty",
        })
    }
}

/// Selectable forward-checking rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub(crate) enum ForwardCheckType {
    /// Reject when a peer could still take the value just placed.
    #[default]
    Sibling,
    /// Reject when a peer's candidate set becomes empty.
    Classic,
}

impl Display for ForwardCheckType {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Sibling => "sibling",
            Self::Classic => "classic",
        })
    }
}

impl ForwardCheckType {
    pub(crate) const fn to_policy(self) -> ForwardPolicy {
        match self {
            Self::Sibling => ForwardPolicy::Sibling,
            Self::Classic => ForwardPolicy::Classic,
        }
    }
}

/// Parses, solves and reports a single puzzle file, writing the output
/// artifact next to it.
///
/// # Errors
///
/// On a missing file, a parse failure, or a write failure.
pub(crate) fn solve_path(path: &Path, common: &CommonOptions) -> Result<(), String> {
    if !path.exists() {
        return Err(format!("Puzzle file does not exist: {}", path.display()));
    }

    if !path.is_file() {
        return Err(format!("Provided path is not a file: {}", path.display()));
    }

    println!("Solving: {}", path.display());

    let time = Instant::now();
    let mut grid =
        parse_file(path).map_err(|e| format!("Error parsing {}: {e}", path.display()))?;
    let parse_time = time.elapsed();

    log::debug!(
        "parsed {0}x{0} grid, block size {1}",
        grid.size(),
        grid.block_size()
    );

    let (solved, elapsed, search_stats) = solve(&mut grid, common);

    println!("Search finished in {:.4} ms", elapsed.as_secs_f64() * 1000.0);

    if common.stats {
        print_stats(parse_time, elapsed, &grid, &search_stats);
    }

    let solution = solved.then_some(&grid);
    if let Some(solution) = solution {
        if common.print_solution {
            println!("Solution:\n{solution}");
        }
    } else {
        println!("No solution found");
    }

    let out = write_solution(path, solution)
        .map_err(|e| format!("Unable to write output for {}: {e}", path.display()))?;
    println!("Output written to: {}", out.display());

    Ok(())
}

/// Solves every `.txt` file under `path`, skipping artifacts written by
/// earlier runs.
///
/// # Errors
///
/// On a non-directory argument or the first failing puzzle.
pub(crate) fn solve_dir(path: &Path, common: &CommonOptions) -> Result<(), String> {
    if !path.is_dir() {
        return Err(format!("Provided path is not a directory: {}", path.display()));
    }

    for entry in walkdir::WalkDir::new(path)
        .into_iter()
        .filter_map(Result::ok)
    {
        let file_path = entry.path();
        if !file_path.is_file() {
            continue;
        }

        if file_path.extension().is_none_or(|ext| ext != "txt") {
            log::debug!("skipping non-puzzle file: {}", file_path.display());
            continue;
        }

        let name = file_path
            .file_name()
            .map_or_else(String::new, |name| name.to_string_lossy().into_owned());
        if name.ends_with("_output.txt") {
            continue;
        }

        solve_path(file_path, common)?;
    }

    Ok(())
}

/// Writes a completion script for `shell` to stdout.
pub(crate) fn completions(shell: clap_complete::Shell) {
    let mut cmd = <Cli as clap::CommandFactory>::command();
    clap_complete::generate(shell, &mut cmd, "sudoku-csp", &mut std::io::stdout());
}

fn solve(grid: &mut Grid, common: &CommonOptions) -> (bool, Duration, SearchStats) {
    epoch::advance().unwrap();

    let policy = common.forward_check.to_policy();
    match common.selection {
        SelectionType::MrvDegree => run(Search::new(MrvDegree, policy), grid),
        SelectionType::FirstEmpty => run(Search::new(FirstEmpty, policy), grid),
    }
}

fn run<S: CellSelection>(mut search: Search<S>, grid: &mut Grid) -> (bool, Duration, SearchStats) {
    let time = Instant::now();
    let solved = search.solve(grid);
    (solved, time.elapsed(), search.stats())
}

/// Helper function to print a single statistic line in a formatted table row.
fn stat_line(label: &str, value: impl Display) {
    println!("|  {label:<28} {value:>18}  |");
}

/// Prints a summary of parse, search and memory statistics.
fn print_stats(parse_time: Duration, elapsed: Duration, grid: &Grid, s: &SearchStats) {
    epoch::advance().unwrap();

    let allocated_bytes = stats::allocated::mib().unwrap().read().unwrap();
    let resident_bytes = stats::resident::mib().unwrap().read().unwrap();

    #[allow(clippy::cast_precision_loss)]
    let allocated_mib = allocated_bytes as f64 / (1024.0 * 1024.0);
    #[allow(clippy::cast_precision_loss)]
    let resident_mib = resident_bytes as f64 / (1024.0 * 1024.0);

    println!("\n====================[ Solve Statistics ]====================");
    stat_line("Grid size", format!("{0}x{0}", grid.size()));
    stat_line(
        "Parse time (ms)",
        format!("{:.4}", parse_time.as_secs_f64() * 1000.0),
    );
    stat_line(
        "Solve time (ms)",
        format!("{:.4}", elapsed.as_secs_f64() * 1000.0),
    );
    stat_line("Decisions", s.decisions);
    stat_line("Backtracks", s.backtracks);
    stat_line("Forward-check rejections", s.rejections);
    stat_line("Memory usage (MiB)", format!("{allocated_mib:.2}"));
    stat_line("Resident memory (MiB)", format!("{resident_mib:.2}"));
    println!("============================================================");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_matches_value_enum_names() {
        assert_eq!(SelectionType::MrvDegree.to_string(), "mrv-degree");
        assert_eq!(SelectionType::FirstEmpty.to_string(), "first-empty");
        assert_eq!(ForwardCheckType::Sibling.to_string(), "sibling");
        assert_eq!(ForwardCheckType::Classic.to_string(), "classic");
    }

    #[test]
    fn test_policy_mapping() {
        assert_eq!(ForwardCheckType::Sibling.to_policy(), ForwardPolicy::Sibling);
        assert_eq!(ForwardCheckType::Classic.to_policy(), ForwardPolicy::Classic);
    }

    #[test]
    fn test_cli_verifies() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}

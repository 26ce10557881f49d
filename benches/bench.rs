use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use sudoku_csp::puzzle::{EXAMPLE_FOUR, EXAMPLE_NINE};
use sudoku_csp::solver::forward_check::ForwardPolicy;
use sudoku_csp::solver::grid::Grid;
use sudoku_csp::solver::search::Search;
use sudoku_csp::solver::selection::{CellSelection, FirstEmpty, MrvDegree};

fn grid_of<const N: usize>(board: [[usize; N]; N]) -> Grid {
    Grid::new(board.iter().map(|row| row.to_vec()).collect()).expect("example board is well-formed")
}

fn solve<S: CellSelection>(grid: &Grid, selector: S, policy: ForwardPolicy) -> bool {
    let mut grid = grid.clone();
    Search::new(selector, policy).solve(&mut grid)
}

fn bench_four(c: &mut Criterion) {
    let grid = grid_of(EXAMPLE_FOUR);

    c.bench_function("4x4 - mrv degree", |b| {
        b.iter(|| black_box(solve(&grid, MrvDegree, ForwardPolicy::Sibling)));
    });
}

fn bench_nine(c: &mut Criterion) {
    let grid = grid_of(EXAMPLE_NINE);

    c.bench_function("9x9 - mrv degree", |b| {
        b.iter(|| black_box(solve(&grid, MrvDegree, ForwardPolicy::Sibling)));
    });

    c.bench_function("9x9 - mrv degree, classic forward check", |b| {
        b.iter(|| black_box(solve(&grid, MrvDegree, ForwardPolicy::Classic)));
    });

    c.bench_function("9x9 - first empty", |b| {
        b.iter(|| black_box(solve(&grid, FirstEmpty, ForwardPolicy::Sibling)));
    });
}

criterion_group!(benches, bench_four, bench_nine);
criterion_main!(benches);

#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! The constraint-satisfaction search engine.
//!
//! Solving is a single-threaded backtracking search over one mutable
//! [`grid::Grid`]: the [`candidates`] module computes admissible values,
//! [`selection`] orders the empty cells (MRV with a degree tie-break),
//! [`forward_check`] prunes tentative assignments, and [`search`] drives
//! the recursion and the undo-on-failure bookkeeping.

pub mod candidates;
pub mod forward_check;
pub mod grid;
pub mod search;
pub mod selection;

#![warn(missing_docs)]
//! A sudoku solver library combining constraint propagation with
//! backtracking search
//!
//! ## Overview
//!
//! Solving starts from a candidate map that binds every cell to the set of
//! digits it could still hold. Three local-consistency rules (elimination,
//! only-choice and naked twins) shrink the sets until they reach a fixed
//! point; if ambiguity remains, a depth-first search guesses a digit for the
//! most constrained cell and propagates again on a clone of the map. The
//! same engine solves classic boards and the diagonal variant, where both
//! main diagonals must also contain each digit exactly once.
//!
//! ## Example
//!
//! ```
//! use sudoku_csp::{solve, Variant};
//!
//! let line = "..3.2.6..9..3.5..1..18.64....81.29..7.......8..67.82....26.95..8..2.3..9..5.1.3..";
//!
//! let solution = solve(line, Variant::Standard).unwrap();
//! assert!(solution.is_solved(Variant::Standard));
//! println!("{}", solution);
//! println!("{}", solution.to_str_line());
//! ```
//!
//! Unsolvable and malformed inputs are kept apart:
//!
//! ```
//! use sudoku_csp::{solve, SolveError, Variant};
//!
//! // two 5s in the first row
//! let no_solution = format!("55{}", ".".repeat(79));
//! assert_eq!(solve(&no_solution, Variant::Standard), Err(SolveError::NoSolution));
//!
//! // only 80 cells
//! let malformed = ".".repeat(80);
//! assert!(matches!(solve(&malformed, Variant::Standard), Err(SolveError::Parse(_))));
//! ```

pub mod bitset;
mod board;
mod candidates;
mod consts;
pub mod errors;
mod helper;
mod rules;
mod solver;
mod topology;
mod trace;

pub use crate::board::{Cell, Digit, Grid};
pub use crate::candidates::Candidates;
pub use crate::errors::{Contradiction, GridParseError, SolveError};
pub use crate::solver::Solver;
pub use crate::topology::{Topology, Unit, UnitKind, Variant};
pub use crate::trace::AssignmentLog;

/// Parses an 81-character grid line and finds a solution under the given
/// variant.
///
/// See [`Grid::from_str_line`] for the accepted format and
/// [`Solver::solve_one`] for the search behavior.
pub fn solve(line: &str, variant: Variant) -> Result<Grid, SolveError> {
    let grid = Grid::from_str_line(line)?;
    Solver::new(variant).solve_one(&grid)
}

/// Like [`solve`], but records a snapshot of the candidate map into
/// `assignments` every time a cell is solved.
pub fn solve_traced(
    line: &str,
    variant: Variant,
    assignments: &mut AssignmentLog,
) -> Result<Grid, SolveError> {
    let grid = Grid::from_str_line(line)?;
    Solver::new(variant).solve_one_traced(&grid, assignments)
}

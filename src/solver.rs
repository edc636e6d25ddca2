//! Fixed-point propagation and depth-first search.

use crate::board::Grid;
use crate::candidates::Candidates;
use crate::errors::{Contradiction, SolveError};
use crate::rules;
use crate::topology::{Topology, Variant};
use crate::trace::AssignmentLog;
use log::{debug, trace};

/// A solver for one board [`Variant`].
///
/// The solver holds no per-solve state; a single instance can solve any
/// number of grids. Solving alternates two phases: the propagation rules
/// shrink candidate sets until they reach a fixed point, and when ambiguity
/// remains, the search engine guesses a digit for the most constrained cell
/// and recurses on a clone of the map. The first branch that reaches a fully
/// solved map wins; a branch that empties any candidate set is abandoned.
/// Both phases iterate cells, units and digits in fixed ascending order, so
/// solving the same grid twice does exactly the same work.
///
/// ```
/// use sudoku_csp::{Grid, Solver, Variant};
///
/// let grid = Grid::from_str_line(
///     "..3.2.6..9..3.5..1..18.64....81.29..7.......8..67.82....26.95..8..2.3..9..5.1.3..",
/// )
/// .unwrap();
/// let solution = Solver::new(Variant::Standard).solve_one(&grid).unwrap();
/// assert!(solution.is_solved(Variant::Standard));
/// ```
#[derive(Copy, Clone, Debug)]
pub struct Solver {
    topology: &'static Topology,
    guess_limit: Option<u64>,
}

struct SearchState<'a> {
    solutions: Vec<Grid>,
    limit: usize,
    n_guesses: u64,
    assignments: &'a mut AssignmentLog,
}

impl Solver {
    /// Creates a solver for the given variant.
    pub fn new(variant: Variant) -> Solver {
        Solver {
            topology: Topology::get(variant),
            guess_limit: None,
        }
    }

    /// Bounds the number of guesses the search may try. Valid puzzles stay
    /// far below any sensible bound; exceeding it aborts the solve with
    /// [`SolveError::GuessLimitReached`].
    pub fn with_guess_limit(mut self, limit: u64) -> Solver {
        self.guess_limit = Some(limit);
        self
    }

    /// Returns the variant this solver solves under.
    pub fn variant(&self) -> Variant {
        self.topology.variant()
    }

    /// Applies elimination, only-choice and naked-twins repeatedly until a
    /// full pass changes nothing.
    ///
    /// Returns `Err(Contradiction)` as soon as any cell runs out of
    /// candidates. On success the map is either fully solved or has reached
    /// a fixed point that only guessing can break.
    pub fn propagate(
        &self,
        candidates: &mut Candidates,
        assignments: &mut AssignmentLog,
    ) -> Result<(), Contradiction> {
        loop {
            let mut changed = false;
            changed |= rules::eliminate(candidates, self.topology, assignments)?;
            changed |= rules::only_choice(candidates, self.topology, assignments)?;
            changed |= rules::naked_twins(candidates, self.topology, assignments)?;
            if !changed {
                return Ok(());
            }
        }
    }

    /// Finds a solution to the sudoku. If multiple solutions exist, it stops
    /// at the first one in search order.
    pub fn solve_one(&self, grid: &Grid) -> Result<Grid, SolveError> {
        self.solve_one_traced(grid, &mut AssignmentLog::disabled())
    }

    /// Like [`solve_one`](Solver::solve_one), but records every cell
    /// assignment into the caller's log.
    pub fn solve_one_traced(
        &self,
        grid: &Grid,
        assignments: &mut AssignmentLog,
    ) -> Result<Grid, SolveError> {
        let mut solutions = self.solve_at_most_impl(grid, 1, assignments)?;
        solutions.pop().ok_or(SolveError::NoSolution)
    }

    /// Solves the sudoku and returns the solution iff it is unique.
    pub fn solve_unique(&self, grid: &Grid) -> Result<Grid, SolveError> {
        let mut solutions = self.solve_at_most_impl(grid, 2, &mut AssignmentLog::disabled())?;
        match solutions.len() {
            1 => Ok(solutions.remove(0)),
            0 => Err(SolveError::NoSolution),
            _ => Err(SolveError::MultipleSolutions),
        }
    }

    /// Returns the first `limit` solutions in search order, or fewer if
    /// fewer exist. No ordering beyond determinism is promised.
    pub fn solve_at_most(&self, grid: &Grid, limit: usize) -> Result<Vec<Grid>, SolveError> {
        self.solve_at_most_impl(grid, limit, &mut AssignmentLog::disabled())
    }

    fn solve_at_most_impl(
        &self,
        grid: &Grid,
        limit: usize,
        assignments: &mut AssignmentLog,
    ) -> Result<Vec<Grid>, SolveError> {
        debug!(
            "solving {} clue grid ({:?} variant, limit {})",
            grid.n_clues(),
            self.variant(),
            limit,
        );
        let mut state = SearchState {
            solutions: Vec::new(),
            limit,
            n_guesses: 0,
            assignments,
        };
        self.search(Candidates::from_grid(grid), &mut state)?;
        debug!(
            "search finished with {} solution(s) after {} guesses",
            state.solutions.len(),
            state.n_guesses,
        );
        Ok(state.solutions)
    }

    fn search(
        &self,
        mut candidates: Candidates,
        state: &mut SearchState<'_>,
    ) -> Result<(), SolveError> {
        if state.solutions.len() >= state.limit {
            return Ok(());
        }
        if self.propagate(&mut candidates, state.assignments).is_err() {
            trace!("dead branch, backtracking");
            return Ok(());
        }

        if candidates.is_solved() {
            if let Some(solution) = candidates.to_grid() {
                state.solutions.push(solution);
            }
            return Ok(());
        }

        let cell = match candidates.cell_with_fewest_candidates() {
            Some(cell) => cell,
            // unreachable after a contradiction-free, unsolved propagation
            None => return Ok(()),
        };

        for digit in candidates.at(cell) {
            if state.solutions.len() >= state.limit {
                break;
            }
            if let Some(limit) = self.guess_limit {
                if state.n_guesses >= limit {
                    return Err(SolveError::GuessLimitReached(limit));
                }
            }
            state.n_guesses += 1;
            trace!("guessing {} at {}", digit, cell);

            let mut branch = candidates.clone();
            branch.set(cell, digit.as_set());
            state.assignments.record(&branch);
            self.search(branch, state)?;
        }
        Ok(())
    }
}

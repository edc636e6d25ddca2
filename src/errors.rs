//! Errors that may be encountered when parsing or solving a sudoku

/// An invalid character encountered while parsing a grid line.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, thiserror::Error)]
#[error("cell {cell} contains invalid character '{ch}'")]
pub struct InvalidEntry {
    /// Cell number goes from 0..=80, 0..=8 for the first row, 9..=17 for the 2nd and so on
    pub cell: u8,
    /// The offending char
    pub ch: char,
}

impl InvalidEntry {
    /// Row index from 0..=8, topmost row is 0
    #[inline]
    pub fn row(self) -> u8 {
        self.cell / 9
    }

    /// Column index from 0..=8, leftmost col is 0
    #[inline]
    pub fn col(self) -> u8 {
        self.cell % 9
    }
}

/// Error for [`Grid::from_str_line`](crate::Grid::from_str_line).
///
/// Accepted cell values are the digits `1..=9` and `'0'`, `'.'` or `'_'`
/// for empty cells; the input must decode to exactly 81 cells.
#[derive(Clone, Debug, PartialEq, Eq, Hash, thiserror::Error)]
pub enum GridParseError {
    /// Non-digit, non-placeholder encountered
    #[error(transparent)]
    InvalidEntry(InvalidEntry),
    /// Input ends before 81 cells were read. Contains the number of cells found.
    #[error("grid contains {0} cells instead of required 81")]
    NotEnoughCells(u8),
    /// More than 81 valid cells are supplied
    #[error("grid contains more than 81 cells")]
    TooManyCells,
}

/// Error for the solve entry points.
#[derive(Clone, Debug, PartialEq, Eq, Hash, thiserror::Error)]
pub enum SolveError {
    /// The grid string did not decode to exactly 81 cells
    #[error(transparent)]
    Parse(#[from] GridParseError),
    /// The grid is well-formed but admits no solution
    #[error("sudoku has no solution")]
    NoSolution,
    /// `solve_unique` found a second solution
    #[error("sudoku has more than one solution")]
    MultipleSolutions,
    /// The configured guess budget ran out before the search finished
    #[error("search aborted after {0} guesses")]
    GuessLimitReached(u64),
}

/// A cell's candidate set became empty.
///
/// This is a control-flow signal, not a user-facing failure: the search
/// engine abandons the branch it is exploring and backtracks. It is only
/// public because [`Solver::propagate`](crate::Solver::propagate) is.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, thiserror::Error)]
#[error("a cell has no remaining candidates")]
pub struct Contradiction;

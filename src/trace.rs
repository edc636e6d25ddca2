//! Recording of cell assignments for external consumers.

use crate::candidates::Candidates;
use std::slice;

/// An ordered journal of full-board snapshots, one taken every time a cell's
/// candidate set collapses to exactly one digit.
///
/// The engine only ever appends to the log and never reads it back; it exists
/// for consumers such as animated visualizations of the solving process. The
/// log is owned by the caller and passed into the traced solve entry points;
/// the untraced entry points record nothing. Snapshots from
/// abandoned search branches are retained: the journal shows the solving
/// process as it happened, not just the winning line.
///
/// ```
/// use sudoku_csp::{AssignmentLog, Grid, Solver, Variant};
///
/// let grid = Grid::from_str_line(
///     "..3.2.6..9..3.5..1..18.64....81.29..7.......8..67.82....26.95..8..2.3..9..5.1.3..",
/// )
/// .unwrap();
/// let mut log = AssignmentLog::new();
/// Solver::new(Variant::Standard)
///     .solve_one_traced(&grid, &mut log)
///     .unwrap();
/// assert!(log.snapshots().last().unwrap().is_solved());
/// ```
#[derive(Clone, Debug)]
pub struct AssignmentLog {
    snapshots: Vec<Candidates>,
    enabled: bool,
}

impl AssignmentLog {
    /// Creates an empty, recording log.
    pub fn new() -> AssignmentLog {
        AssignmentLog {
            snapshots: Vec::new(),
            enabled: true,
        }
    }

    // The no-op log backing the untraced entry points.
    pub(crate) fn disabled() -> AssignmentLog {
        AssignmentLog {
            snapshots: Vec::new(),
            enabled: false,
        }
    }

    pub(crate) fn record(&mut self, candidates: &Candidates) {
        if self.enabled {
            self.snapshots.push(candidates.clone());
        }
    }

    /// Returns the recorded snapshots, oldest first.
    pub fn snapshots(&self) -> &[Candidates] {
        &self.snapshots
    }

    /// Returns the number of recorded snapshots.
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Checks whether nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }
}

impl Default for AssignmentLog {
    fn default() -> AssignmentLog {
        AssignmentLog::new()
    }
}

impl<'a> IntoIterator for &'a AssignmentLog {
    type Item = &'a Candidates;
    type IntoIter = slice::Iter<'a, Candidates>;

    fn into_iter(self) -> Self::IntoIter {
        self.snapshots.iter()
    }
}

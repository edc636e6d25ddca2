//! The mutable per-solve state: a candidate set for every cell.

use crate::bitset::Set;
use crate::board::{Cell, Digit, Grid};
use crate::helper::CellArray;
use std::fmt;
use std::fmt::Formatter;

/// The candidate map of one solve attempt.
///
/// Every cell is bound to the set of digits it could still hold. A cell with
/// exactly one candidate is solved; a cell with none proves the current
/// branch contradictory. The map is created fresh from a [`Grid`], shrunk in
/// place by the propagation rules and cloned at every branch point of the
/// search, so a failed guess can never leak into a sibling branch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Candidates {
    cells: CellArray<Set<Digit>>,
}

impl Candidates {
    /// Builds the initial candidate map for a grid: givens are bound to
    /// their digit, every other cell to the full digit set.
    pub fn from_grid(grid: &Grid) -> Candidates {
        let mut cells = CellArray([Set::ALL; 81]);
        for cell in Cell::all() {
            if let Some(digit) = grid.digit(cell) {
                cells[cell] = digit.as_set();
            }
        }
        Candidates { cells }
    }

    /// Returns the candidate set of `cell`.
    pub fn at(&self, cell: Cell) -> Set<Digit> {
        self.cells[cell]
    }

    pub(crate) fn set(&mut self, cell: Cell, digits: Set<Digit>) {
        self.cells[cell] = digits;
    }

    /// Checks whether every cell is down to exactly one candidate.
    pub fn is_solved(&self) -> bool {
        self.cells.iter().all(|digits| digits.len() == 1)
    }

    /// Returns the unsolved cell with the fewest candidates, ties broken by
    /// first encounter in row-major order. `None` iff every cell is solved
    /// or the map contains an empty cell.
    pub(crate) fn cell_with_fewest_candidates(&self) -> Option<Cell> {
        let mut best: Option<(Cell, u8)> = None;
        for cell in Cell::all() {
            let len = self.cells[cell].len();
            if len > 1 && best.map_or(true, |(_, best_len)| len < best_len) {
                if len == 2 {
                    // nothing beats a two-candidate cell
                    return Some(cell);
                }
                best = Some((cell, len));
            }
        }
        best.map(|(cell, _)| cell)
    }

    /// Converts a fully solved map into a grid. `None` if any cell is not
    /// down to exactly one candidate.
    pub fn to_grid(&self) -> Option<Grid> {
        let mut grid = Grid::unfilled();
        for cell in Cell::all() {
            match self.cells[cell].unique() {
                Ok(Some(digit)) => grid.set_digit(cell, digit),
                _ => return None,
            }
        }
        Some(grid)
    }
}

impl From<&Grid> for Candidates {
    fn from(grid: &Grid) -> Candidates {
        Candidates::from_grid(grid)
    }
}

/* Example output
┌───────────────┬───────────────┬───────────────┐
│ 4    4578 9   │ 47   1    6   │ 357  27   3   │
│ 457  457  2   │ 3    57   57  │ 9    6    1   │
│ 1    57   6   │ 9    2    57  │ 357  4    8   │
├───────────────┼───────────────┼───────────────┤
...
└───────────────┴───────────────┴───────────────┘
*/
impl fmt::Display for Candidates {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut column_widths = [0usize; 9];
        for (col, width) in column_widths.iter_mut().enumerate() {
            *width = (0..9)
                .map(|row| self.cells[Cell::new((row * 9 + col) as u8)].len().max(1) as usize)
                .max()
                .unwrap();
        }

        let stack_width = |stack_nr: usize| {
            column_widths[stack_nr * 3..stack_nr * 3 + 3]
                .iter()
                .sum::<usize>()
                + 6 // spaces in between cells and walls
        };

        let print_horizontal_delimiter =
            |f: &mut Formatter<'_>, leftmost: char, middle: char, rightmost: &str| {
                write!(
                    f,
                    "{left}{0:─<1$}{middle}{0:─<2$}{middle}{0:─<3$}{right}",
                    "",
                    stack_width(0),
                    stack_width(1),
                    stack_width(2),
                    left = leftmost,
                    middle = middle,
                    right = rightmost,
                )
            };
        let print_minirow = |f: &mut Formatter<'_>, row: usize, stack: usize| {
            let base_col = stack * 3;
            let base_idx = row * 9 + stack * 3;
            write!(
                f,
                " {:width1$}  {:width2$}  {:width3$} │",
                self.cells[Cell::new(base_idx as u8)],
                self.cells[Cell::new((base_idx + 1) as u8)],
                self.cells[Cell::new((base_idx + 2) as u8)],
                width1 = column_widths[base_col],
                width2 = column_widths[base_col + 1],
                width3 = column_widths[base_col + 2],
            )
        };

        let print_band = |f: &mut Formatter<'_>, band: usize| {
            for row in band * 3..band * 3 + 3 {
                write!(f, "│")?;
                for stack in 0..3 {
                    print_minirow(f, row, stack)?;
                }
                writeln!(f)?;
            }
            Ok(())
        };

        print_horizontal_delimiter(f, '┌', '┬', "┐\n")?;
        print_band(f, 0)?;
        print_horizontal_delimiter(f, '├', '┼', "┤\n")?;
        print_band(f, 1)?;
        print_horizontal_delimiter(f, '├', '┼', "┤\n")?;
        print_band(f, 2)?;
        print_horizontal_delimiter(f, '└', '┴', "┘")
    }
}

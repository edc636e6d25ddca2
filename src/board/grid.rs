use crate::bitset::Set;
use crate::board::{Cell, Digit};
use crate::consts::N_CELLS;
use crate::errors::{GridParseError, InvalidEntry};
use crate::topology::{Topology, Variant};
use std::{fmt, str};

/// The given digits of a sudoku, one slot per cell with empty cells marked.
///
/// A `Grid` carries no candidate information. It is the parsed form of an
/// 81-character puzzle line and the fully determined form of a solution;
/// everything in between lives in [`Candidates`](crate::Candidates).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Grid([u8; N_CELLS]);

impl Grid {
    /// Creates a sudoku from a line of 81 cell characters.
    ///
    /// Accepted are the digits `1..=9` for givens and `'0'`, `'.'` or `'_'`
    /// for empty cells. Trailing whitespace is ignored.
    ///
    /// ```
    /// use sudoku_csp::Grid;
    ///
    /// let line = "..3.2.6..9..3.5..1..18.64....81.29..7.......8..67.82....26.95..8..2.3..9..5.1.3..";
    /// let grid = Grid::from_str_line(line).unwrap();
    /// assert_eq!(grid.to_str_line(), line);
    /// ```
    pub fn from_str_line(s: &str) -> Result<Grid, GridParseError> {
        let mut cells = [0; N_CELLS];
        let mut n_cells = 0;
        for ch in s.trim_end().chars() {
            if n_cells == N_CELLS {
                return Err(GridParseError::TooManyCells);
            }
            match Digit::from_char(ch) {
                Some(digit) => cells[n_cells] = digit.get(),
                None if ch == '.' || ch == '0' || ch == '_' => cells[n_cells] = 0,
                None => {
                    return Err(GridParseError::InvalidEntry(InvalidEntry {
                        cell: n_cells as u8,
                        ch,
                    }))
                }
            }
            n_cells += 1;
        }
        if n_cells < N_CELLS {
            return Err(GridParseError::NotEnoughCells(n_cells as u8));
        }
        Ok(Grid(cells))
    }

    /// Returns the grid as a line of 81 characters with `'.'` for empty cells.
    pub fn to_str_line(&self) -> String {
        self.0
            .iter()
            .map(|&num| match num {
                0 => '.',
                _ => (b'0' + num) as char,
            })
            .collect()
    }

    pub(crate) fn unfilled() -> Grid {
        Grid([0; N_CELLS])
    }

    /// Returns the digit in `cell`, if the cell is filled.
    pub fn digit(&self, cell: Cell) -> Option<Digit> {
        Digit::new_checked(self.0[cell.as_index()])
    }

    pub(crate) fn set_digit(&mut self, cell: Cell, digit: Digit) {
        self.0[cell.as_index()] = digit.get();
    }

    /// Returns an iterator over the grid, going from left to right, top to bottom.
    pub fn iter(&self) -> impl Iterator<Item = Option<Digit>> + '_ {
        self.0.iter().map(|&num| Digit::new_checked(num))
    }

    /// Returns the number of filled cells.
    pub fn n_clues(&self) -> usize {
        self.0.iter().filter(|&&num| num != 0).count()
    }

    /// Checks whether the grid is a solution under the given variant:
    /// completely filled, with every unit containing each digit exactly once.
    pub fn is_solved(&self, variant: Variant) -> bool {
        Topology::get(variant).units().all(|unit| {
            let mut seen = Set::<Digit>::NONE;
            for &cell in unit.cells().iter() {
                match self.digit(cell) {
                    Some(digit) => seen |= digit,
                    None => return false,
                }
            }
            seen == Set::ALL
        })
    }
}

impl str::FromStr for Grid {
    type Err = GridParseError;

    fn from_str(s: &str) -> Result<Grid, GridParseError> {
        Grid::from_str_line(s)
    }
}

impl fmt::Display for Grid {
    /// The grid in block layout, `'_'` for empty cells, blocks separated
    /// by spaces and blank lines.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cell in Cell::all() {
            match (cell.row(), cell.col()) {
                (0, 0) => {}
                (_, 3) | (_, 6) => write!(f, " ")?,
                (3, 0) | (6, 0) => write!(f, "\n\n")?,
                (_, 0) => writeln!(f)?,
                _ => {}
            }
            match self.digit(cell) {
                Some(digit) => write!(f, "{}", digit)?,
                None => write!(f, "_")?,
            }
        }
        Ok(())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Grid {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_str_line())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Grid {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Grid, D::Error> {
        let line = <String as serde::Deserialize>::deserialize(deserializer)?;
        Grid::from_str_line(&line).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LINE: &str =
        "..3.2.6..9..3.5..1..18.64....81.29..7.......8..67.82....26.95..8..2.3..9..5.1.3..";

    #[test]
    fn line_roundtrip() {
        let grid = Grid::from_str_line(LINE).unwrap();
        assert_eq!(grid.to_str_line(), LINE);
        assert_eq!(grid.n_clues(), 32);
    }

    #[test]
    fn placeholders_are_equivalent() {
        let dots = Grid::from_str_line(LINE).unwrap();
        let zeros = Grid::from_str_line(&LINE.replace('.', "0")).unwrap();
        let scores = Grid::from_str_line(&LINE.replace('.', "_")).unwrap();
        assert_eq!(dots, zeros);
        assert_eq!(dots, scores);
    }

    #[test]
    fn trailing_whitespace_is_ignored() {
        let with_newline = format!("{}\n", LINE);
        assert_eq!(
            Grid::from_str_line(&with_newline).unwrap(),
            Grid::from_str_line(LINE).unwrap(),
        );
    }

    #[test]
    fn rejects_short_input() {
        let err = Grid::from_str_line(&LINE[..80]).unwrap_err();
        assert_eq!(err, GridParseError::NotEnoughCells(80));
    }

    #[test]
    fn rejects_long_input() {
        let long = format!("{}5", LINE);
        let err = Grid::from_str_line(&long).unwrap_err();
        assert_eq!(err, GridParseError::TooManyCells);
    }

    #[test]
    fn rejects_invalid_character() {
        let bad = format!("X{}", &LINE[1..]);
        let err = Grid::from_str_line(&bad).unwrap_err();
        assert_eq!(
            err,
            GridParseError::InvalidEntry(InvalidEntry { cell: 0, ch: 'X' })
        );
    }

    #[test]
    fn block_display() {
        let grid = Grid::from_str_line(LINE).unwrap();
        let shown = grid.to_string();
        assert!(shown.starts_with("__3 _2_ 6__\n9__ 3_5 __1\n__1 8_6 4__\n\n"));
        assert_eq!(shown.lines().count(), 11);
    }
}

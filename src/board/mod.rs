//! Types for cells, digits and grids on a sudoku board
mod cell;
mod digit;
mod grid;

pub use self::{cell::Cell, digit::Digit, grid::Grid};

//! The static structure of the board: units and peers.
//!
//! A unit is a group of 9 cells that must collectively contain each digit
//! exactly once. The classic board has 27 units (9 rows, 9 columns, 9 blocks);
//! the diagonal variant adds the two main diagonals for 29. [`Topology`]
//! derives, once per process and per variant, which units each cell belongs
//! to and which cells it therefore constrains.

use crate::bitset::Set;
use crate::board::Cell;
use crate::consts::{BLOCK_OFFSET, COL_OFFSET, N_BASE_UNITS, N_DIAG_UNITS};
use crate::helper::CellArray;
use lazy_static::lazy_static;
use std::fmt;

/// The rule set a board is solved under.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Variant {
    /// Rows, columns and blocks only
    Standard,
    /// Rows, columns, blocks and both main diagonals
    Diagonal,
}

impl Variant {
    /// All variants, mainly for test purposes
    pub const ALL: [Variant; 2] = [Variant::Standard, Variant::Diagonal];

    pub(crate) fn n_units(self) -> u8 {
        match self {
            Variant::Standard => N_BASE_UNITS,
            Variant::Diagonal => N_DIAG_UNITS,
        }
    }
}

/// One of the up to 29 units of a board.
///
/// Units are numbered rows first (0..=8, top to bottom), then columns
/// (9..=17, left to right), then blocks (18..=26, row-major), then the main
/// and anti diagonal (27, 28).
#[derive(Copy, Clone, Eq, PartialEq, PartialOrd, Ord, Debug, Hash)]
pub struct Unit(u8);

/// What kind of cell group a [`Unit`] is.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
#[allow(missing_docs)]
pub enum UnitKind {
    Row(u8),
    Col(u8),
    Block(u8),
    MainDiagonal,
    AntiDiagonal,
}

impl Unit {
    pub(crate) fn new(index: u8) -> Self {
        debug_assert!(index < N_DIAG_UNITS);
        Unit(index)
    }

    /// Returns the index of this unit.
    pub fn get(self) -> u8 {
        self.0
    }

    /// Returns the index of this unit as `usize`.
    pub fn as_index(self) -> usize {
        self.0 as usize
    }

    /// Splits the unit index into the kind of cell group it stands for.
    pub fn categorize(self) -> UnitKind {
        match self.0 {
            0..=8 => UnitKind::Row(self.0),
            9..=17 => UnitKind::Col(self.0 - COL_OFFSET),
            18..=26 => UnitKind::Block(self.0 - BLOCK_OFFSET),
            27 => UnitKind::MainDiagonal,
            _ => UnitKind::AntiDiagonal,
        }
    }

    /// Returns the 9 cells of this unit in a fixed order.
    pub fn cells(self) -> [Cell; 9] {
        let mut cells = [Cell::new(0); 9];
        for (i, slot) in cells.iter_mut().enumerate() {
            let i = i as u8;
            *slot = match self.categorize() {
                UnitKind::Row(row) => Cell::from_row_col(row, i),
                UnitKind::Col(col) => Cell::from_row_col(i, col),
                UnitKind::Block(block) => {
                    Cell::from_row_col(block / 3 * 3 + i / 3, block % 3 * 3 + i % 3)
                }
                UnitKind::MainDiagonal => Cell::from_row_col(i, i),
                UnitKind::AntiDiagonal => Cell::from_row_col(i, 8 - i),
            };
        }
        cells
    }

    pub(crate) fn cell_set(self) -> Set<Cell> {
        let mut set = Set::NONE;
        for &cell in self.cells().iter() {
            set |= cell;
        }
        set
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.categorize() {
            UnitKind::Row(row) => write!(f, "row {}", (b'A' + row) as char),
            UnitKind::Col(col) => write!(f, "column {}", col + 1),
            UnitKind::Block(block) => write!(f, "block {}", block + 1),
            UnitKind::MainDiagonal => f.write_str("main diagonal"),
            UnitKind::AntiDiagonal => f.write_str("anti diagonal"),
        }
    }
}

/// The fixed constraint structure of a board under one [`Variant`].
///
/// Derived deterministically with no runtime input and shared read-only for
/// the life of the process; a solve never mutates it.
#[derive(Debug)]
pub struct Topology {
    variant: Variant,
    units_of: CellArray<Set<Unit>>,
    peers: CellArray<Set<Cell>>,
}

lazy_static! {
    static ref STANDARD: Topology = Topology::derive(Variant::Standard);
    static ref DIAGONAL: Topology = Topology::derive(Variant::Diagonal);
}

impl Topology {
    /// Returns the shared topology of the given variant.
    pub fn get(variant: Variant) -> &'static Topology {
        match variant {
            Variant::Standard => &*STANDARD,
            Variant::Diagonal => &*DIAGONAL,
        }
    }

    fn derive(variant: Variant) -> Topology {
        let mut units_of = CellArray([Set::NONE; 81]);
        for index in 0..variant.n_units() {
            let unit = Unit::new(index);
            for &cell in unit.cells().iter() {
                units_of[cell] |= unit;
            }
        }

        let mut peers = CellArray([Set::NONE; 81]);
        for cell in Cell::all() {
            let mut set = Set::NONE;
            for unit in units_of[cell] {
                set |= unit.cell_set();
            }
            set.remove(cell.as_set());
            peers[cell] = set;
        }

        Topology {
            variant,
            units_of,
            peers,
        }
    }

    /// Returns the variant this topology belongs to.
    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// Returns an iterator over all units of this topology.
    pub fn units(&self) -> impl Iterator<Item = Unit> {
        (0..self.variant.n_units()).map(Unit::new)
    }

    /// Returns the units containing `cell`: 3 in the standard variant,
    /// 4 or 5 for diagonal cells in the diagonal variant.
    pub fn units_of(&self, cell: Cell) -> Set<Unit> {
        self.units_of[cell]
    }

    /// Returns every cell sharing a unit with `cell`, excluding `cell` itself.
    pub fn peers(&self, cell: Cell) -> Set<Cell> {
        self.peers[cell]
    }
}

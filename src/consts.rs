// Board geometry constants shared across the crate.

pub(crate) const N_CELLS: usize = 81;
pub(crate) const N_DIGITS: usize = 9;

// Unit indices are laid out as rows, columns, blocks, diagonals.
pub(crate) const COL_OFFSET: u8 = 9;
pub(crate) const BLOCK_OFFSET: u8 = 18;

pub(crate) const N_BASE_UNITS: u8 = 27;
pub(crate) const N_DIAG_UNITS: u8 = 29;

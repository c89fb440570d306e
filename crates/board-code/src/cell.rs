//! Grid cell coordinates.

use std::fmt;

/// A cell on the 8x8 grid, addressed by row and column (both 0-7).
///
/// Rows are counted top to bottom and columns left to right, matching the
/// order in which a matrix is written out. The cell at row 0, column 0 maps
/// to the most significant bit of a board code:
/// - (0, 0) = bit 63, (0, 7) = bit 56
/// - (7, 0) = bit 7, (7, 7) = bit 0
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell(u8);

impl Cell {
    /// Number of cells on the grid.
    pub const COUNT: usize = 64;

    /// All cells in row-major order.
    pub const ALL: [Cell; 64] = {
        let mut cells = [Cell(0); 64];
        let mut i = 0;
        while i < 64 {
            cells[i] = Cell(i as u8);
            i += 1;
        }
        cells
    };

    /// Creates a cell from row and column, or None if either is out of range.
    #[inline]
    pub const fn new(row: u8, col: u8) -> Option<Self> {
        if row < 8 && col < 8 {
            Some(Cell(row * 8 + col))
        } else {
            None
        }
    }

    /// Creates a cell from its row-major position (0-63).
    #[inline]
    pub const fn from_position(position: u8) -> Option<Self> {
        if position < 64 {
            Some(Cell(position))
        } else {
            None
        }
    }

    /// Creates a cell from a bit index counted from the least significant
    /// bit of a board code (0-63).
    #[inline]
    pub const fn from_bit_index(bit: u8) -> Option<Self> {
        if bit < 64 {
            Some(Cell(63 - bit))
        } else {
            None
        }
    }

    #[inline]
    pub const fn row(self) -> u8 {
        self.0 / 8
    }

    #[inline]
    pub const fn col(self) -> u8 {
        self.0 % 8
    }

    /// Returns the row-major position (0-63).
    #[inline]
    pub const fn position(self) -> u8 {
        self.0
    }

    /// Returns the bit index of this cell, counted from the least significant
    /// bit: `63 - (row * 8 + col)`.
    #[inline]
    pub const fn bit_index(self) -> u8 {
        63 - self.0
    }

    /// Returns a mask with only this cell's bit set.
    #[inline]
    pub const fn mask(self) -> u64 {
        1u64 << self.bit_index()
    }
}

impl fmt::Debug for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Cell({}, {})", self.row(), self.col())
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row(), self.col())
    }
}

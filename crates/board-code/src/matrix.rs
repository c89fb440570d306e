//! The 8x8 bit matrix.

use crate::cell::Cell;
use crate::code::BoardCode;
use crate::error::BoardCodeError;
use serde::de::{self, Deserializer};
use serde::ser::{SerializeSeq, Serializer};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Number of rows (and columns) in a matrix.
pub const SIZE: usize = 8;

/// An 8x8 grid of bits, stored row by row.
///
/// Externally a matrix is written as 8 rows of 8 `'0'`/`'1'` characters,
/// top row first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct BitMatrix {
    rows: [[bool; SIZE]; SIZE],
}

impl BitMatrix {
    /// Matrix with every cell clear.
    pub const EMPTY: BitMatrix = BitMatrix {
        rows: [[false; SIZE]; SIZE],
    };

    /// Matrix with every cell set.
    pub const FULL: BitMatrix = BitMatrix {
        rows: [[true; SIZE]; SIZE],
    };

    /// Creates a matrix from a grid of booleans.
    #[inline]
    pub const fn new(rows: [[bool; SIZE]; SIZE]) -> Self {
        BitMatrix { rows }
    }

    /// Builds a matrix from exactly 8 rows of exactly 8 `'0'`/`'1'` symbols.
    ///
    /// # Errors
    ///
    /// Returns [`BoardCodeError::InvalidRowCount`] or
    /// [`BoardCodeError::InvalidRowLength`] for a malformed shape, and
    /// [`BoardCodeError::InvalidBit`] for any other symbol.
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self, BoardCodeError> {
        if rows.len() != SIZE {
            return Err(BoardCodeError::InvalidRowCount(rows.len()));
        }

        let mut matrix = BitMatrix::EMPTY;
        for (row, symbols) in rows.iter().enumerate() {
            let symbols = symbols.as_ref();
            let len = symbols.chars().count();
            if len != SIZE {
                return Err(BoardCodeError::InvalidRowLength { row, len });
            }

            for (col, found) in symbols.chars().enumerate() {
                matrix.rows[row][col] = match found {
                    '0' => false,
                    '1' => true,
                    _ => return Err(BoardCodeError::InvalidBit { row, col, found }),
                };
            }
        }

        Ok(matrix)
    }

    /// Builds the matrix encoded by a board code.
    pub fn from_code(code: BoardCode) -> Self {
        let mut matrix = BitMatrix::EMPTY;
        for cell in Cell::ALL {
            matrix.rows[cell.row() as usize][cell.col() as usize] = code.contains(cell);
        }
        matrix
    }

    /// Encodes the matrix, reading cells in row-major order with the first
    /// cell as the most significant bit.
    pub fn to_code(&self) -> BoardCode {
        let mut value = 0u64;
        for row in &self.rows {
            for &bit in row {
                value = (value << 1) | u64::from(bit);
            }
        }
        BoardCode::new(value)
    }

    /// Returns the rows as `'0'`/`'1'` strings.
    pub fn to_rows(&self) -> [String; SIZE] {
        std::array::from_fn(|row| {
            self.rows[row]
                .iter()
                .map(|&bit| if bit { '1' } else { '0' })
                .collect()
        })
    }

    /// Returns the underlying grid.
    #[inline]
    pub const fn as_grid(&self) -> &[[bool; SIZE]; SIZE] {
        &self.rows
    }

    #[inline]
    pub const fn get(&self, cell: Cell) -> bool {
        self.rows[cell.row() as usize][cell.col() as usize]
    }

    #[inline]
    pub fn set(&mut self, cell: Cell, value: bool) {
        self.rows[cell.row() as usize][cell.col() as usize] = value;
    }

    #[inline]
    pub fn toggle(&mut self, cell: Cell) {
        let bit = &mut self.rows[cell.row() as usize][cell.col() as usize];
        *bit = !*bit;
    }

    /// Returns the number of set cells.
    pub fn count(&self) -> u32 {
        self.rows.iter().flatten().filter(|&&bit| bit).count() as u32
    }

    /// Renders the grid using the given glyphs, cells separated by spaces.
    pub fn render(&self, set: &str, unset: &str) -> String {
        self.rows
            .iter()
            .map(|row| {
                row.iter()
                    .map(|&bit| if bit { set } else { unset })
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl From<BoardCode> for BitMatrix {
    fn from(code: BoardCode) -> Self {
        BitMatrix::from_code(code)
    }
}

impl FromStr for BitMatrix {
    type Err = BoardCodeError;

    /// Parses 8 rows separated by `/`, whitespace or newlines.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<&str> = s
            .split(|c: char| c == '/' || c.is_whitespace())
            .filter(|part| !part.is_empty())
            .collect();
        BitMatrix::from_rows(&rows)
    }
}

impl fmt::Display for BitMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.to_rows().iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{row}")?;
        }
        Ok(())
    }
}

impl Serialize for BitMatrix {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(SIZE))?;
        for row in self.to_rows() {
            seq.serialize_element(&row)?;
        }
        seq.end()
    }
}

impl<'de> Deserialize<'de> for BitMatrix {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let rows = Vec::<String>::deserialize(deserializer)?;
        BitMatrix::from_rows(&rows).map_err(de::Error::custom)
    }
}

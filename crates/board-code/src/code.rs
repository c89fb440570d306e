//! Board code representation and operations.
//!
//! A board code is a 64-bit integer where each bit represents one cell of an
//! 8x8 matrix. The top-left cell is the most significant bit, so the binary
//! form of the integer, zero-padded to 64 digits, reads like the matrix
//! written out row by row.

use crate::cell::Cell;
use crate::error::BoardCodeError;
use crate::matrix::BitMatrix;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::IntErrorKind;
use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not};
use std::str::FromStr;

/// A 64-bit encoding of a [`BitMatrix`].
///
/// Bit `63 - (row * 8 + col)` holds the cell at `(row, col)`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BoardCode(pub u64);

impl BoardCode {
    /// Empty code (no cells set).
    pub const EMPTY: BoardCode = BoardCode(0);

    /// Full code (all cells set).
    pub const FULL: BoardCode = BoardCode(!0);

    /// Creates a code from a raw u64.
    #[inline]
    pub const fn new(bits: u64) -> Self {
        BoardCode(bits)
    }

    /// Returns the raw u64.
    #[inline]
    pub const fn bits(self) -> u64 {
        self.0
    }

    /// Creates a code with a single cell set.
    #[inline]
    pub const fn from_cell(cell: Cell) -> Self {
        BoardCode(cell.mask())
    }

    /// Decodes into a matrix.
    #[inline]
    pub fn to_matrix(self) -> BitMatrix {
        BitMatrix::from_code(self)
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns the number of set cells.
    #[inline]
    pub const fn count(self) -> u32 {
        self.0.count_ones()
    }

    /// Returns true if the given cell is set.
    #[inline]
    pub const fn contains(self, cell: Cell) -> bool {
        (self.0 & cell.mask()) != 0
    }

    #[inline]
    pub fn set(&mut self, cell: Cell) {
        self.0 |= cell.mask();
    }

    #[inline]
    pub fn clear(&mut self, cell: Cell) {
        self.0 &= !cell.mask();
    }

    #[inline]
    pub fn toggle(&mut self, cell: Cell) {
        self.0 ^= cell.mask();
    }

    /// Pops and returns the first set cell in row-major order.
    #[inline]
    pub fn pop_first(&mut self) -> Option<Cell> {
        if self.0 == 0 {
            return None;
        }
        let bit = 63 - self.0.leading_zeros() as u8;
        self.0 &= !(1u64 << bit);
        Cell::from_bit_index(bit)
    }

    /// Iterates over set cells in row-major order.
    #[inline]
    pub fn cells(self) -> CellIter {
        CellIter(self)
    }

    /// Returns the 64-digit zero-padded binary form.
    pub fn to_binary_string(self) -> String {
        format!("{:064b}", self.0)
    }

    /// Returns `0x` followed by 16 uppercase hex digits.
    pub fn to_hex_string(self) -> String {
        format!("0x{:016X}", self.0)
    }
}

impl From<u64> for BoardCode {
    fn from(bits: u64) -> Self {
        BoardCode(bits)
    }
}

impl From<BoardCode> for u64 {
    fn from(code: BoardCode) -> Self {
        code.0
    }
}

impl From<BitMatrix> for BoardCode {
    fn from(matrix: BitMatrix) -> Self {
        matrix.to_code()
    }
}

impl TryFrom<i128> for BoardCode {
    type Error = BoardCodeError;

    fn try_from(value: i128) -> Result<Self, Self::Error> {
        u64::try_from(value)
            .map(BoardCode)
            .map_err(|_| BoardCodeError::ValueOutOfRange(value.to_string()))
    }
}

impl FromStr for BoardCode {
    type Err = BoardCodeError;

    /// Parses a decimal, `0x` hexadecimal or `0b` binary number. Underscores
    /// between digits are ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim();

        if let Some(magnitude) = input.strip_prefix('-') {
            // Only zero survives negation; any other well-formed magnitude is
            // below the range.
            return match parse_unsigned(magnitude) {
                Ok(0) => Ok(BoardCode::EMPTY),
                Ok(_) | Err(NumberError::Overflow) => {
                    Err(BoardCodeError::ValueOutOfRange(input.to_string()))
                }
                Err(NumberError::Invalid) => Err(BoardCodeError::InvalidNumber(input.to_string())),
            };
        }

        match parse_unsigned(input) {
            Ok(bits) => Ok(BoardCode(bits)),
            Err(NumberError::Overflow) => Err(BoardCodeError::ValueOutOfRange(input.to_string())),
            Err(NumberError::Invalid) => Err(BoardCodeError::InvalidNumber(input.to_string())),
        }
    }
}

enum NumberError {
    Overflow,
    Invalid,
}

fn parse_unsigned(input: &str) -> Result<u64, NumberError> {
    let (digits, radix) = if let Some(rest) = input
        .strip_prefix("0x")
        .or_else(|| input.strip_prefix("0X"))
    {
        (rest, 16)
    } else if let Some(rest) = input
        .strip_prefix("0b")
        .or_else(|| input.strip_prefix("0B"))
    {
        (rest, 2)
    } else {
        (input, 10)
    };

    if digits.starts_with('_') || digits.ends_with('_') || digits.starts_with('+') {
        return Err(NumberError::Invalid);
    }
    let digits: String = digits.chars().filter(|&c| c != '_').collect();

    u64::from_str_radix(&digits, radix).map_err(|e| match e.kind() {
        IntErrorKind::PosOverflow => NumberError::Overflow,
        _ => NumberError::Invalid,
    })
}

impl BitAnd for BoardCode {
    type Output = Self;
    #[inline]
    fn bitand(self, rhs: Self) -> Self::Output {
        BoardCode(self.0 & rhs.0)
    }
}

impl BitAndAssign for BoardCode {
    #[inline]
    fn bitand_assign(&mut self, rhs: Self) {
        self.0 &= rhs.0;
    }
}

impl BitOr for BoardCode {
    type Output = Self;
    #[inline]
    fn bitor(self, rhs: Self) -> Self::Output {
        BoardCode(self.0 | rhs.0)
    }
}

impl BitOrAssign for BoardCode {
    #[inline]
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl BitXor for BoardCode {
    type Output = Self;
    #[inline]
    fn bitxor(self, rhs: Self) -> Self::Output {
        BoardCode(self.0 ^ rhs.0)
    }
}

impl BitXorAssign for BoardCode {
    #[inline]
    fn bitxor_assign(&mut self, rhs: Self) {
        self.0 ^= rhs.0;
    }
}

impl Not for BoardCode {
    type Output = Self;
    #[inline]
    fn not(self) -> Self::Output {
        BoardCode(!self.0)
    }
}

impl fmt::Display for BoardCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex_string())
    }
}

impl fmt::Binary for BoardCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Binary::fmt(&self.0, f)
    }
}

impl fmt::LowerHex for BoardCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&self.0, f)
    }
}

impl fmt::UpperHex for BoardCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::UpperHex::fmt(&self.0, f)
    }
}

impl fmt::Debug for BoardCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "BoardCode({})", self.to_hex_string())?;
        for row in 0..8 {
            for col in 0..8 {
                let bit = 63 - (row * 8 + col);
                if (self.0 >> bit) & 1 == 1 {
                    write!(f, "1 ")?;
                } else {
                    write!(f, ". ")?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Iterator over set cells of a board code, in row-major order.
pub struct CellIter(BoardCode);

impl Iterator for CellIter {
    type Item = Cell;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.0.pop_first()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let count = self.0.count() as usize;
        (count, Some(count))
    }
}

impl ExactSizeIterator for CellIter {}

impl IntoIterator for BoardCode {
    type Item = Cell;
    type IntoIter = CellIter;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        CellIter(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cell(row: u8, col: u8) -> Cell {
        Cell::new(row, col).unwrap()
    }

    #[test]
    fn code_from_cell() {
        let code = BoardCode::from_cell(cell(3, 6));
        assert_eq!(code.bits(), 0x0000_0002_0000_0000);
        assert!(code.contains(cell(3, 6)));
        assert!(!code.contains(cell(3, 5)));
    }

    #[test]
    fn code_count() {
        assert_eq!(BoardCode::EMPTY.count(), 0);
        assert_eq!(BoardCode::FULL.count(), 64);
        assert!(BoardCode::EMPTY.is_empty());
        assert!(!BoardCode::FULL.is_empty());
    }

    #[test]
    fn code_set_clear_toggle() {
        let mut code = BoardCode::EMPTY;
        code.set(cell(0, 0));
        assert_eq!(code.bits(), 1 << 63);
        code.toggle(cell(7, 7));
        assert_eq!(code.bits(), (1 << 63) | 1);
        code.clear(cell(0, 0));
        assert_eq!(code.bits(), 1);
    }

    #[test]
    fn code_operators() {
        let a = BoardCode::new(0b1100);
        let b = BoardCode::new(0b1010);
        assert_eq!((a & b).bits(), 0b1000);
        assert_eq!((a | b).bits(), 0b1110);
        assert_eq!((a ^ b).bits(), 0b0110);
        assert_eq!(!BoardCode::EMPTY, BoardCode::FULL);

        let mut c = a;
        c |= b;
        c &= BoardCode::new(0b0110);
        c ^= BoardCode::new(0b0010);
        assert_eq!(c.bits(), 0b0100);
    }

    #[test]
    fn cells_iterate_row_major() {
        let code = BoardCode::from_cell(cell(6, 1)) | BoardCode::from_cell(cell(0, 7))
            | BoardCode::from_cell(cell(3, 3));
        let cells: Vec<Cell> = code.cells().collect();
        assert_eq!(cells, vec![cell(0, 7), cell(3, 3), cell(6, 1)]);
        assert_eq!(code.into_iter().len(), 3);
    }

    #[test]
    fn pop_first() {
        let mut code = BoardCode::new(0b101);
        assert_eq!(code.pop_first(), Some(cell(7, 5)));
        assert_eq!(code.pop_first(), Some(cell(7, 7)));
        assert_eq!(code.pop_first(), None);
    }

    #[test]
    fn string_forms() {
        let code = BoardCode::new(0x0000_0000_0200_0000);
        assert_eq!(code.to_hex_string(), "0x0000000002000000");
        assert_eq!(code.to_string(), "0x0000000002000000");
        let binary = code.to_binary_string();
        assert_eq!(binary.len(), 64);
        assert_eq!(binary.find('1'), Some(38));
        assert_eq!(format!("{code:b}"), "10000000000000000000000000");
        assert_eq!(format!("{code:x}"), "2000000");
        assert_eq!(BoardCode::FULL.to_hex_string(), "0xFFFFFFFFFFFFFFFF");
    }

    #[test]
    fn parse_radix_prefixes() {
        assert_eq!("4112".parse::<BoardCode>(), Ok(BoardCode(4112)));
        assert_eq!("0x1010".parse::<BoardCode>(), Ok(BoardCode(4112)));
        assert_eq!("0X1010".parse::<BoardCode>(), Ok(BoardCode(4112)));
        assert_eq!(
            "0b0001_0000_0001_0000".parse::<BoardCode>(),
            Ok(BoardCode(4112))
        );
        assert_eq!(
            " 0x8040_0010_0804 ".parse::<BoardCode>(),
            Ok(BoardCode(0x804000100804))
        );
        assert_eq!(
            "0xFFFFFFFFFFFFFFFF".parse::<BoardCode>(),
            Ok(BoardCode::FULL)
        );
    }

    #[test]
    fn parse_rejects_out_of_range() {
        assert_eq!(
            "18446744073709551616".parse::<BoardCode>(),
            Err(BoardCodeError::ValueOutOfRange(
                "18446744073709551616".to_string()
            ))
        );
        assert_eq!(
            "0x1_0000_0000_0000_0000".parse::<BoardCode>(),
            Err(BoardCodeError::ValueOutOfRange(
                "0x1_0000_0000_0000_0000".to_string()
            ))
        );
        assert_eq!(
            "-1".parse::<BoardCode>(),
            Err(BoardCodeError::ValueOutOfRange("-1".to_string()))
        );
        assert_eq!("-0".parse::<BoardCode>(), Ok(BoardCode::EMPTY));
    }

    #[test]
    fn parse_rejects_garbage() {
        for input in ["", "0x", "0b102", "twelve", "-x", "_1", "1_", "0x+1"] {
            assert!(
                matches!(
                    input.parse::<BoardCode>(),
                    Err(BoardCodeError::InvalidNumber(_))
                ),
                "expected InvalidNumber for {input:?}"
            );
        }
    }

    #[test]
    fn try_from_i128() {
        assert_eq!(BoardCode::try_from(4112i128), Ok(BoardCode(4112)));
        assert_eq!(
            BoardCode::try_from(u64::MAX as i128),
            Ok(BoardCode::FULL)
        );
        assert_eq!(
            BoardCode::try_from(-1i128),
            Err(BoardCodeError::ValueOutOfRange("-1".to_string()))
        );
        assert_eq!(
            BoardCode::try_from(u64::MAX as i128 + 1),
            Err(BoardCodeError::ValueOutOfRange(
                "18446744073709551616".to_string()
            ))
        );
    }

    #[test]
    fn debug_shows_grid() {
        let debug = format!("{:?}", BoardCode::from_cell(cell(0, 0)));
        let mut lines = debug.lines();
        assert_eq!(lines.next(), Some("BoardCode(0x8000000000000000)"));
        assert_eq!(lines.next(), Some("1 . . . . . . . "));
    }

    #[test]
    fn serde_as_integer() {
        let code = BoardCode::new(4112);
        assert_eq!(serde_json::to_string(&code).unwrap(), "4112");
        assert_eq!(serde_json::from_str::<BoardCode>("4112").unwrap(), code);
    }
}

//! Conversion between row strings and raw `u64` codes.
//!
//! These are the plain-data entry points: rows in, integer out, and back.
//! [`BitMatrix`] and [`BoardCode`] offer the same conversions on typed values.

use crate::code::BoardCode;
use crate::error::BoardCodeError;
use crate::matrix::{BitMatrix, SIZE};

/// Encodes 8 rows of 8 `'0'`/`'1'` symbols into a `u64`.
///
/// Cells are read row by row, left to right; the first cell becomes the most
/// significant bit.
///
/// # Errors
///
/// Fails with a shape error if there are not exactly 8 rows of exactly 8
/// symbols, or with [`BoardCodeError::InvalidBit`] if a symbol is not `'0'`
/// or `'1'`.
///
/// # Example
///
/// ```
/// use board_code::matrix_to_u64;
///
/// let rows = [
///     "00000000", "00000000", "00000000", "00000010",
///     "00000000", "00000000", "00000000", "00000000",
/// ];
/// assert_eq!(matrix_to_u64(&rows).unwrap(), 0x0000_0002_0000_0000);
/// ```
pub fn matrix_to_u64<S: AsRef<str>>(rows: &[S]) -> Result<u64, BoardCodeError> {
    BitMatrix::from_rows(rows).map(|matrix| matrix.to_code().bits())
}

/// Decodes a `u64` into 8 rows of 8 `'0'`/`'1'` characters.
///
/// # Example
///
/// ```
/// use board_code::u64_to_matrix;
///
/// let rows = u64_to_matrix(4112);
/// assert_eq!(rows[6], "00010000");
/// assert_eq!(rows[7], "00010000");
/// ```
pub fn u64_to_matrix(number: u64) -> [String; SIZE] {
    let bits = BoardCode::new(number).to_binary_string();
    std::array::from_fn(|row| bits[row * SIZE..(row + 1) * SIZE].to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const ZERO_ROW: &str = "00000000";

    #[test]
    fn boundaries() {
        assert_eq!(matrix_to_u64(&[ZERO_ROW; 8]).unwrap(), 0);
        assert_eq!(matrix_to_u64(&["11111111"; 8]).unwrap(), u64::MAX);
        assert_eq!(u64_to_matrix(0), [ZERO_ROW; 8].map(String::from));
        assert_eq!(u64_to_matrix(u64::MAX), ["11111111"; 8].map(String::from));
    }

    #[test]
    fn single_cell_maps_to_its_bit() {
        let mut rows = [ZERO_ROW; 8];
        rows[3] = "00000010";
        let value = matrix_to_u64(&rows).unwrap();
        assert_eq!(value, 0x0000_0002_0000_0000);
        assert_eq!(value, 1u64 << (64 - (3 * 8 + 6) - 1));
        assert_eq!(format!("{value:064b}").find('1'), Some(3 * 8 + 6));

        let mut rows = [ZERO_ROW; 8];
        rows[4] = "00000010";
        assert_eq!(matrix_to_u64(&rows).unwrap(), 0x0000_0000_0200_0000);
    }

    #[test]
    fn decodes_sample_integer() {
        assert_eq!(
            u64_to_matrix(0x8040_0010_0804),
            [
                "00000000", "00000000", "10000000", "01000000", "00000000", "00010000",
                "00001000", "00000100",
            ]
            .map(String::from)
        );
    }

    #[test]
    fn decodes_low_order_bits() {
        let rows = u64_to_matrix(4112);
        for (i, row) in rows.iter().enumerate() {
            let expected = if i >= 6 { "00010000" } else { ZERO_ROW };
            assert_eq!(row, expected, "row {i}");
        }
    }

    #[test]
    fn rows_match_padded_binary() {
        let number = 0x8040_0010_0804u64;
        let padded = format!("{number:064b}");
        assert_eq!(u64_to_matrix(number).concat(), padded);
    }

    #[test]
    fn malformed_rows_fail_fast() {
        assert_eq!(
            matrix_to_u64(&[ZERO_ROW; 7]),
            Err(BoardCodeError::InvalidRowCount(7))
        );
        let mut rows = [ZERO_ROW; 8];
        rows[0] = "0000000000";
        assert_eq!(
            matrix_to_u64(&rows),
            Err(BoardCodeError::InvalidRowLength { row: 0, len: 10 })
        );
        rows[0] = "0000000 ";
        assert_eq!(
            matrix_to_u64(&rows),
            Err(BoardCodeError::InvalidBit {
                row: 0,
                col: 7,
                found: ' '
            })
        );
    }

    fn row_strategy() -> impl Strategy<Value = String> {
        "[01]{8}"
    }

    proptest! {
        #[test]
        fn integer_round_trips(number in any::<u64>()) {
            let rows = u64_to_matrix(number);
            prop_assert_eq!(matrix_to_u64(&rows).unwrap(), number);
        }

        #[test]
        fn matrix_round_trips(rows in prop::array::uniform8(row_strategy())) {
            let number = matrix_to_u64(&rows).unwrap();
            prop_assert_eq!(u64_to_matrix(number), rows);
        }

        #[test]
        fn every_row_is_eight_binary_digits(number in any::<u64>()) {
            for row in u64_to_matrix(number) {
                prop_assert_eq!(row.len(), 8);
                prop_assert!(row.chars().all(|c| c == '0' || c == '1'));
            }
        }
    }
}

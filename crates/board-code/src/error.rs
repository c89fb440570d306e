//! Errors produced while building matrices and board codes.

use thiserror::Error;

/// Errors that can occur when parsing or converting board codes.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BoardCodeError {
    #[error("invalid matrix shape: expected 8 rows, got {0}")]
    InvalidRowCount(usize),

    #[error("invalid matrix shape: row {row} has {len} cells, expected 8")]
    InvalidRowLength { row: usize, len: usize },

    #[error("invalid bit '{found}' at row {row}, column {col}: expected '0' or '1'")]
    InvalidBit { row: usize, col: usize, found: char },

    #[error("value out of range for a 64-bit board code: {0}")]
    ValueOutOfRange(String),

    #[error("invalid number: {0}")]
    InvalidNumber(String),
}

impl BoardCodeError {
    /// Returns true for errors caused by a matrix with the wrong number of
    /// rows or columns.
    pub fn is_shape_error(&self) -> bool {
        matches!(
            self,
            BoardCodeError::InvalidRowCount(_) | BoardCodeError::InvalidRowLength { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shape_errors_are_classified() {
        assert!(BoardCodeError::InvalidRowCount(7).is_shape_error());
        assert!(BoardCodeError::InvalidRowLength { row: 2, len: 9 }.is_shape_error());
        assert!(!BoardCodeError::InvalidBit {
            row: 0,
            col: 0,
            found: '2'
        }
        .is_shape_error());
        assert!(!BoardCodeError::ValueOutOfRange("-1".into()).is_shape_error());
    }

    #[test]
    fn messages_name_the_location() {
        let err = BoardCodeError::InvalidBit {
            row: 3,
            col: 6,
            found: 'x',
        };
        assert_eq!(
            err.to_string(),
            "invalid bit 'x' at row 3, column 6: expected '0' or '1'"
        );
    }
}

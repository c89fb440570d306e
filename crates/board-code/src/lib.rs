//! Board codes: 8x8 bit matrices packed into 64-bit integers.
//!
//! This crate provides:
//! - [`matrix_to_u64`] and [`u64_to_matrix`] for converting between row
//!   strings and raw integers
//! - [`BitMatrix`] for the grid itself, with parsing and rendering
//! - [`BoardCode`] for the packed form, with bitwise operations
//! - [`Cell`] for addressing a single square of the grid
//!
//! The encoding is row-major with the top-left cell as the most significant
//! bit, so the zero-padded binary form of a code reads like the matrix:
//!
//! ```
//! use board_code::{BitMatrix, BoardCode};
//!
//! let matrix: BitMatrix = "10000000/00000000/00000000/00000000/00000000/00000000/00000000/00000001"
//!     .parse()
//!     .unwrap();
//! assert_eq!(matrix.to_code(), BoardCode::new((1 << 63) | 1));
//! assert_eq!(matrix.to_code().to_hex_string(), "0x8000000000000001");
//! ```

mod cell;
mod code;
mod convert;
mod error;
mod matrix;

pub use cell::Cell;
pub use code::{BoardCode, CellIter};
pub use convert::{matrix_to_u64, u64_to_matrix};
pub use error::BoardCodeError;
pub use matrix::{BitMatrix, SIZE};

//! Output produced by the tool's commands.
//!
//! Every report has a plain-text rendering for the terminal and a JSON form
//! for `--json`.

use crate::config::{DisplayConfig, Sample};
use board_code::{BitMatrix, BoardCode};
use serde::Serialize;

/// Result of encoding a matrix.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct EncodeReport {
    /// Input rows, top first.
    pub rows: BitMatrix,
    /// Zero-padded 64-digit binary form.
    pub binary: String,
    /// `0x` plus 16 uppercase hex digits.
    pub hex: String,
    pub decimal: u64,
}

impl EncodeReport {
    pub fn new(matrix: BitMatrix) -> Self {
        let code = matrix.to_code();
        Self {
            rows: matrix,
            binary: code.to_binary_string(),
            hex: code.to_hex_string(),
            decimal: code.bits(),
        }
    }

    pub fn to_text(&self) -> String {
        format!(
            "Binary: {}\nHex   : {}\nDecimal: {}",
            self.binary, self.hex, self.decimal
        )
    }
}

/// Result of decoding a number.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct DecodeReport {
    pub hex: String,
    pub decimal: u64,
    /// Number of set cells.
    pub count: u32,
    pub rows: BitMatrix,
}

impl DecodeReport {
    pub fn new(code: BoardCode) -> Self {
        Self {
            hex: code.to_hex_string(),
            decimal: code.bits(),
            count: code.count(),
            rows: code.to_matrix(),
        }
    }

    /// One row of `'0'`/`'1'` per line.
    pub fn to_text(&self) -> String {
        self.rows.to_string()
    }

    /// The grid drawn with the configured glyphs.
    pub fn to_grid(&self, display: &DisplayConfig) -> String {
        self.rows.render(&display.set, &display.unset)
    }

    /// The grid with row and column numbers along the edges.
    pub fn to_board(&self, display: &DisplayConfig) -> String {
        let width = display.set.chars().count().max(display.unset.chars().count());
        let header: Vec<String> = (0..8).map(|col| format!("{col:<width$}")).collect();
        let mut lines = vec![format!("  {}", header.join(" ").trim_end())];

        for (row, cells) in self.rows.as_grid().iter().enumerate() {
            let glyphs: Vec<String> = cells
                .iter()
                .map(|&bit| {
                    let glyph = if bit { &display.set } else { &display.unset };
                    format!("{glyph:<width$}")
                })
                .collect();
            lines.push(format!("{row} {}", glyphs.join(" ").trim_end()));
        }

        lines.push(format!("  {} ({} set)", self.hex, self.count));
        lines.join("\n")
    }
}

/// Output of the demonstration: one encoding and one decoding.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct DemoReport {
    pub encoded: EncodeReport,
    pub decoded: DecodeReport,
}

impl DemoReport {
    pub fn new(sample: &Sample) -> Self {
        Self {
            encoded: EncodeReport::new(sample.matrix),
            decoded: DecodeReport::new(sample.code),
        }
    }

    pub fn to_text(&self) -> String {
        format!(
            "From matrix to number\nBinary: {}\nHex   : {}\n\nFrom number to matrix\n{}",
            self.encoded.binary,
            self.encoded.hex,
            self.decoded.to_text()
        )
    }
}

/// Renders a report as pretty-printed JSON.
pub fn to_json<T: Serialize>(report: &T) -> serde_json::Result<String> {
    serde_json::to_string_pretty(report)
}

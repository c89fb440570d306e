//! Board Tool - a command-line helper for board codes.
//!
//! This crate backs the `board-tool` binary, which encodes 8x8 bit matrices
//! into 64-bit board codes, decodes them back, and prints a demonstration.
//!
//! # Modules
//!
//! - [`config`] - TOML configuration with display glyphs and sample presets
//! - [`report`] - Text and JSON output for each command

pub mod config;
pub mod report;

//! The tools module provides the helpers around the core coder.
//!
//! The tools are:
//! - cli: Command line interface and run options.
//! - freq_count: Character frequency count.
//! - report: Frequency table, code table, tree dump and size statistics.
//! - text_io: Reading the source text and writing results.
//!
pub mod cli;
pub mod freq_count;
pub mod report;
pub mod text_io;

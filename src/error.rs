//! Error types for huffcode.
//!
//! Every failure aborts the current encode or decode. Nothing is retried: the
//! transformations are pure, so running them again on the same input fails the same way.

use thiserror::Error;

/// Top-level error type for tree construction, encoding, decoding and file I/O.
#[derive(Debug, Error)]
pub enum HuffError {
    /// The frequency table had no symbols, so there is nothing to build a tree from.
    #[error("cannot build a code tree from an empty frequency table")]
    Construction,

    /// A character in the text has no code in the code book.
    #[error("character {symbol:?} at position {position} has no associated code")]
    UnknownSymbol { symbol: char, position: usize },

    /// The bitstream ended in the middle of a code.
    #[error("bitstream ended mid-code after {position} bits ({depth} bits into an unfinished code)")]
    TruncatedStream { position: usize, depth: usize },

    /// The bitstream held something other than '0' or '1', or a bit with no path in the tree.
    #[error("invalid bit {symbol:?} at position {position}")]
    InvalidBit { symbol: char, position: usize },

    /// A self check decoded something other than the text that was encoded.
    #[error("round trip differs from the original at character {position}")]
    Mismatch { position: usize },

    /// Reading the source or writing the sink failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Type alias for Result with our Error type
pub type Result<T> = std::result::Result<T, HuffError>;

//! BitReader: reads a textual bitstream one '0'/'1' character at a time.
//!
//! Anything other than '0' or '1' is an error carrying the symbol and its position.

use std::str::Chars;

use crate::error::{HuffError, Result};

/// Reads a bitstream held in a string.
#[derive(Debug, Clone)]
pub struct BitReader<'a> {
    source: Chars<'a>,
    position: usize,
}

impl<'a> BitReader<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            source: source.chars(),
            position: 0,
        }
    }

    /// Return *true* if the next bit is 1, *false* if 0, consuming the bit, or None if
    /// there is no more data to read.
    pub fn bool_bit(&mut self) -> Result<Option<bool>> {
        let symbol = match self.source.next() {
            Some(symbol) => symbol,
            None => return Ok(None),
        };
        let position = self.position;
        self.position += 1;
        match symbol {
            '0' => Ok(Some(false)),
            '1' => Ok(Some(true)),
            _ => Err(HuffError::InvalidBit { symbol, position }),
        }
    }

    /// Count of bits consumed so far.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Debugging function. Report current position in the stream.
    pub fn loc(&self) -> String {
        format!("[{}]", self.position)
    }
}

//! Encoder: rewrite a text as the concatenation of its characters' codes.

use log::trace;

use crate::bitstream::bitwriter::BitWriter;
use crate::error::{HuffError, Result};
use crate::huffman_coding::code_book::CodeBook;

/// Encode `text` through the code book. Fails on the first character without a code,
/// which only happens when the book was derived from a different text.
pub fn encode(text: &str, book: &CodeBook) -> Result<String> {
    // Most codes in real text are well under 8 bits; this avoids most regrowth.
    let mut bw = BitWriter::new(text.len() * 4);
    for (position, symbol) in text.chars().enumerate() {
        let code = book
            .code(symbol)
            .ok_or(HuffError::UnknownSymbol { symbol, position })?;
        bw.out_code(code);
    }
    trace!("Encoded {} characters, bitstream at {}", text.chars().count(), bw.loc());
    Ok(bw.into_string())
}

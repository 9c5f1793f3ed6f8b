//! huffcode: a symbol-frequency prefix-code text encoder and decoder.
//!
//! Counts the characters of a source text, builds a code tree by repeatedly merging the
//! two lightest nodes, gives every character the bit path to its leaf, and rewrites text
//! as those paths. Bits are stored as the characters '0' and '1', one per bit.
//!
//! The encoded file carries no tree. Decoding needs the tree built from the very same
//! source text, so the source acts as a shared key between the two sides.
//!
//! Basic usage to encode a file is as follows:
//!
//! `$> huffcode -s book.txt -i begin.txt -o encrypted.txt`
//!
//! and to decode it again:
//!
//! `$> huffcode -d -s book.txt -i encrypted.txt -o decrypted.txt`
//!
pub mod bitstream;
pub mod compression;
pub mod error;
pub mod huffman_coding;
pub mod tools;

pub use compression::codec::Codec;
pub use error::{HuffError, Result};
pub use huffman_coding::code_book::CodeBook;
pub use huffman_coding::tree::{CodeTree, MergeStrategy};
pub use tools::freq_count::FrequencyTable;

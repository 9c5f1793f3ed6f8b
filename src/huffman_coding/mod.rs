//! The huffman_coding module builds the code tree and the code book.
//!
//! - tree: greedy construction of the code tree from a frequency table.
//! - code_book: the character to bit-string mapping derived from a finished tree.
//!
//! Both are built once and only read afterwards.

pub mod code_book;
pub mod tree;

//! The compression module turns text into a bitstream and back.
//!
//! Encoding:
//! - Count the characters of the source text.
//! - Build the code tree by repeatedly merging the two lightest nodes.
//! - Derive each character's code from its path in the tree.
//! - Replace every character of the input with its code.
//!
//! Decoding rebuilds the same tree from the same source, then walks it one bit at a time.
//! Everything here is sequential; only the frequency count may run in parallel.
//!

pub mod codec;
pub mod compress;
pub mod decode;
pub mod encode;

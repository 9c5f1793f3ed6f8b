//! The bitstream module reads and writes the textual bitstream.
//!
//! Each code bit is stored as the character '0' or '1'. The stream carries no header, no
//! symbol count and no tree, so it can only be decoded with the tree that produced it.
//!
pub mod bitreader;
pub mod bitwriter;

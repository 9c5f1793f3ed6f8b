use log::{debug, info};

use crate::error::Result;
use crate::huffman_coding::code_book::CodeBook;
use crate::huffman_coding::tree::{CodeTree, MergeStrategy};
use crate::tools::freq_count::FrequencyTable;

use super::{decode::decode, encode::encode};

/// Everything derived from one source text: its frequency table, the code tree built from
/// it and the code book derived from the tree.
///
/// The bitstream carries no tree, so encoder and decoder must each build a codec from the
/// same source text.
#[derive(Debug, Clone)]
pub struct Codec {
    freqs: FrequencyTable,
    tree: CodeTree,
    book: CodeBook,
}

impl Codec {
    /// Count, build and derive in one go. Fails on an empty source.
    pub fn from_text(source: &str, strategy: MergeStrategy) -> Result<Self> {
        let freqs = FrequencyTable::from_text(source);
        debug!(
            "Counted {} characters, {} distinct",
            freqs.total(),
            freqs.len()
        );
        Self::from_frequencies(freqs, strategy)
    }

    pub fn from_frequencies(freqs: FrequencyTable, strategy: MergeStrategy) -> Result<Self> {
        let tree = CodeTree::build_with(&freqs, strategy)?;
        let book = CodeBook::from_tree(&tree);
        info!(
            "Code tree built: {} leaves, {} internal nodes, depth {}",
            tree.leaf_count(),
            tree.internal_count(),
            tree.depth()
        );
        Ok(Codec { freqs, tree, book })
    }

    pub fn encode(&self, text: &str) -> Result<String> {
        encode(text, &self.book)
    }

    pub fn decode(&self, bits: &str) -> Result<String> {
        decode(bits, &self.tree)
    }

    pub fn frequencies(&self) -> &FrequencyTable {
        &self.freqs
    }

    pub fn tree(&self) -> &CodeTree {
        &self.tree
    }

    pub fn code_book(&self) -> &CodeBook {
        &self.book
    }
}

//! Human readable reports: the frequency table, the code table, a tree dump and the
//! compression statistics. Characters are shown with Rust escapes so whitespace is visible.

use std::fmt::{Display, Formatter};

use log::info;

use crate::huffman_coding::code_book::CodeBook;
use crate::huffman_coding::tree::{CodeTree, Node, NodeData};
use crate::tools::freq_count::FrequencyTable;

/// One line per character, most frequent first.
pub fn frequency_lines(freqs: &FrequencyTable) -> Vec<String> {
    freqs
        .sorted_by_count()
        .into_iter()
        .map(|(c, n)| format!("{:?}: {}", c, n))
        .collect()
}

/// One line per character, shortest codes first.
pub fn code_lines(book: &CodeBook) -> Vec<String> {
    book.entries()
        .into_iter()
        .map(|(c, code)| format!("Character: {:?}, Code: {}", c, code))
        .collect()
}

/// Indented dump of the tree, two spaces per level, left subtree before right.
pub fn tree_lines(tree: &CodeTree) -> Vec<String> {
    let mut lines = vec![];
    let mut stack: Vec<(&Node, usize, &str)> = vec![(tree.root(), 0, "root")];
    while let Some((node, depth, label)) = stack.pop() {
        let indent = "  ".repeat(depth);
        match &node.node_data {
            NodeData::Leaf(c) => {
                lines.push(format!(
                    "{}{}-> Leaf: {:?} [weight: {}]",
                    indent, label, c, node.weight
                ));
            }
            NodeData::Kids(left, right) => {
                lines.push(format!(
                    "{}{}-> Internal [weight: {}]",
                    indent, label, node.weight
                ));
                stack.push((&**right, depth + 1, "R"));
                stack.push((&**left, depth + 1, "L"));
            }
        }
    }
    lines
}

/// Log the frequency table and the code table at info level.
pub fn log_tables(freqs: &FrequencyTable, book: &CodeBook) {
    info!("Character frequencies:");
    frequency_lines(freqs).iter().for_each(|line| info!("{}", line));
    info!("Huffman Codes:");
    code_lines(book).iter().for_each(|line| info!("{}", line));
}

/// Size figures for one encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stats {
    /// Characters in the encoded text
    pub chars: usize,
    /// Distinct characters in the code book
    pub symbols: usize,
    /// Code bits produced
    pub bits: usize,
}

impl Stats {
    pub fn avg_bits(&self) -> f64 {
        if self.chars == 0 {
            return 0.0;
        }
        self.bits as f64 / self.chars as f64
    }

    /// Bits used against a plain 8 bits per character.
    pub fn ratio(&self) -> f64 {
        if self.chars == 0 {
            return 0.0;
        }
        self.bits as f64 / (self.chars * 8) as f64
    }
}

impl Display for Stats {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} chars, {} symbols, {} bits ({:.3} bits/char, {:.1}% of 8-bit)",
            self.chars,
            self.symbols,
            self.bits,
            self.avg_bits(),
            self.ratio() * 100.0
        )
    }
}

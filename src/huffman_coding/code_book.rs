//! Code book derivation: walk the finished tree and record the path to every leaf.
//!
//! Left edges contribute a '0', right edges a '1'. A tree whose root is a leaf (text with a
//! single distinct character) has no edges at all, so that one character is given the code "0".

use log::debug;
use rustc_hash::FxHashMap;

use super::tree::{CodeTree, Node, NodeData};

/// Code given to the only character of a single-symbol text.
pub const SINGLE_SYMBOL_CODE: &str = "0";

/// Character to bit-string mapping. Prefix-free by construction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodeBook {
    codes: FxHashMap<char, String>,
}

impl CodeBook {
    /// Derive the code of every leaf in the tree.
    pub fn from_tree(tree: &CodeTree) -> Self {
        let mut codes = FxHashMap::default();

        if let NodeData::Leaf(c) = tree.root().node_data {
            codes.insert(c, SINGLE_SYMBOL_CODE.to_string());
            debug!("Single symbol tree, {:?} gets code {}", c, SINGLE_SYMBOL_CODE);
            return CodeBook { codes };
        }

        let mut stack: Vec<(&Node, String)> = vec![(tree.root(), String::new())];
        while let Some((node, prefix)) = stack.pop() {
            match &node.node_data {
                NodeData::Kids(left, right) => {
                    let mut right_prefix = prefix.clone();
                    right_prefix.push('1');
                    stack.push((&**right, right_prefix));
                    let mut left_prefix = prefix;
                    left_prefix.push('0');
                    stack.push((&**left, left_prefix));
                }
                NodeData::Leaf(c) => {
                    codes.insert(*c, prefix);
                }
            }
        }
        debug!("Derived {} codes", codes.len());
        CodeBook { codes }
    }

    pub fn code(&self, c: char) -> Option<&str> {
        self.codes.get(&c).map(String::as_str)
    }

    /// Number of characters with a code.
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// All (character, code) pairs, shortest codes first, then in code order.
    pub fn entries(&self) -> Vec<(char, &str)> {
        let mut entries: Vec<(char, &str)> =
            self.codes.iter().map(|(c, code)| (*c, code.as_str())).collect();
        entries.sort_by(|a, b| a.1.len().cmp(&b.1.len()).then_with(|| a.1.cmp(b.1)));
        entries
    }

    /// True when no code is a prefix of another.
    pub fn is_prefix_free(&self) -> bool {
        // In lexical order a prefix sorts directly ahead of the codes that extend it.
        let mut codes: Vec<&str> = self.codes.values().map(String::as_str).collect();
        codes.sort_unstable();
        codes.windows(2).all(|pair| !pair[1].starts_with(pair[0]))
    }
}

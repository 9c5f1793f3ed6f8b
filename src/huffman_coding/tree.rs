//! Code tree construction by greedy minimum-weight merging.
//!
//! Leaves enter the working collection in the frequency table's first-appearance order.
//! Each round takes the two lightest nodes, joins them under a new parent (first taken on
//! the left) and puts the parent back at the end of the collection.

use log::{debug, trace};
use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::fmt::{Display, Formatter};

use crate::error::{HuffError, Result};
use crate::tools::freq_count::FrequencyTable;

#[derive(Eq, PartialEq, Debug, Clone)]
pub enum NodeData {
    Kids(Box<Node>, Box<Node>),
    Leaf(char),
}

#[derive(Eq, PartialEq, Debug, Clone)]
pub struct Node {
    pub weight: usize,
    pub node_data: NodeData,
}

impl Node {
    /// Create a new leaf
    pub fn leaf(c: char, weight: usize) -> Node {
        Node {
            weight,
            node_data: NodeData::Leaf(c),
        }
    }

    /// Join two nodes under a new parent. `left` is the one taken first.
    pub fn merge(left: Node, right: Node) -> Node {
        Node {
            weight: left.weight + right.weight,
            node_data: NodeData::Kids(Box::new(left), Box::new(right)),
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self.node_data, NodeData::Leaf(_))
    }

    /// The character on a leaf, None on an internal node.
    pub fn symbol(&self) -> Option<char> {
        match self.node_data {
            NodeData::Leaf(c) => Some(c),
            NodeData::Kids(..) => None,
        }
    }

    pub fn left(&self) -> Option<&Node> {
        match &self.node_data {
            NodeData::Kids(left, _) => Some(&**left),
            NodeData::Leaf(_) => None,
        }
    }

    pub fn right(&self) -> Option<&Node> {
        match &self.node_data {
            NodeData::Kids(_, right) => Some(&**right),
            NodeData::Leaf(_) => None,
        }
    }
}

/// How the two lightest nodes are found on each round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum MergeStrategy {
    /// Stable full sort of the working collection after every merge. O(n² log n).
    StableResort,
    /// Binary heap keyed by (weight, insertion sequence). O(n log n).
    Heap,
}

impl Default for MergeStrategy {
    fn default() -> Self {
        MergeStrategy::StableResort
    }
}

impl Display for MergeStrategy {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            MergeStrategy::StableResort => write!(f, "stable-resort"),
            MergeStrategy::Heap => write!(f, "heap"),
        }
    }
}

/// A finished code tree. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeTree {
    root: Node,
}

impl CodeTree {
    /// Build a tree from the frequency table using the default (stable re-sort) strategy.
    pub fn build(freqs: &FrequencyTable) -> Result<Self> {
        Self::build_with(freqs, MergeStrategy::default())
    }

    /// Build a tree from the frequency table. Fails if the table is empty.
    pub fn build_with(freqs: &FrequencyTable, strategy: MergeStrategy) -> Result<Self> {
        if freqs.is_empty() {
            return Err(HuffError::Construction);
        }
        let leaves: Vec<Node> = freqs.iter().map(|(c, n)| Node::leaf(c, n)).collect();
        debug!(
            "Building code tree from {} symbols ({:?})",
            leaves.len(),
            strategy
        );
        let root = match strategy {
            MergeStrategy::StableResort => merge_by_resort(leaves),
            MergeStrategy::Heap => merge_by_heap(leaves),
        }
        .ok_or(HuffError::Construction)?;
        Ok(CodeTree { root })
    }

    pub fn root(&self) -> &Node {
        &self.root
    }

    /// Sum of all symbol counts.
    pub fn weight(&self) -> usize {
        self.root.weight
    }

    pub fn leaf_count(&self) -> usize {
        self.nodes().filter(|(node, _)| node.is_leaf()).count()
    }

    pub fn internal_count(&self) -> usize {
        self.nodes().filter(|(node, _)| !node.is_leaf()).count()
    }

    /// Length of the longest root-to-leaf path.
    pub fn depth(&self) -> usize {
        self.nodes().map(|(_, depth)| depth).max().unwrap_or(0)
    }

    /// Pre-order walk over every node with its depth. Left before right.
    pub fn nodes(&self) -> Nodes<'_> {
        Nodes {
            stack: vec![(&self.root, 0)],
        }
    }
}

/// Iterator returned by [`CodeTree::nodes`]. Uses an explicit stack so lopsided trees can't
/// exhaust the call stack.
pub struct Nodes<'a> {
    stack: Vec<(&'a Node, usize)>,
}

impl<'a> Iterator for Nodes<'a> {
    type Item = (&'a Node, usize);

    fn next(&mut self) -> Option<Self::Item> {
        let (node, depth) = self.stack.pop()?;
        if let NodeData::Kids(left, right) = &node.node_data {
            // Right goes on first so left comes off first.
            self.stack.push((&**right, depth + 1));
            self.stack.push((&**left, depth + 1));
        }
        Some((node, depth))
    }
}

/// Pare the collection down to one node, fully re-sorting by weight after each merge.
/// `sort_by_key` is stable, so equal weights stay in collection order.
fn merge_by_resort(mut tree: Vec<Node>) -> Option<Node> {
    tree.sort_by_key(|node| node.weight);
    while tree.len() > 1 {
        // Pull off the two lightest nodes and make a new parent at the back
        let right = tree.remove(1);
        let left = tree.remove(0);
        trace!("merge {} + {}", left.weight, right.weight);
        tree.push(Node::merge(left, right));
        tree.sort_by_key(|node| node.weight);
    }
    tree.pop()
}

/// Heap entry. Ordered so the lightest, oldest entry is popped first.
struct Pending {
    seq: usize,
    node: Node,
}

impl PartialEq for Pending {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Pending {}

impl PartialOrd for Pending {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Pending {
    /// Reversed for the max-heap: lower weight, then lower sequence, is greater.
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .node
            .weight
            .cmp(&self.node.weight)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// Same merge order as the stable re-sort. The sorted collection is always ordered by
/// (weight, insertion sequence): leaves are inserted first in order and every parent is
/// appended behind all existing nodes.
fn merge_by_heap(leaves: Vec<Node>) -> Option<Node> {
    let mut seq = leaves.len();
    let mut heap: BinaryHeap<Pending> = leaves
        .into_iter()
        .enumerate()
        .map(|(seq, node)| Pending { seq, node })
        .collect();
    loop {
        let left = heap.pop()?.node;
        let right = match heap.pop() {
            Some(pending) => pending.node,
            None => return Some(left),
        };
        trace!("merge {} + {}", left.weight, right.weight);
        heap.push(Pending {
            seq,
            node: Node::merge(left, right),
        });
        seq += 1;
    }
}

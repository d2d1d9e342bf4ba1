//! Huffman tree construction.
//!
//! The tree is built with the classic greedy merge over a min-priority
//! queue. Ties are broken by insertion order: leaves are queued in ascending
//! symbol order and every merged node is queued after everything before it,
//! so the same frequencies always produce the same tree.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use tracing::debug;

use crate::frequency::FrequencyTable;

/// Huffman tree node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Leaf {
        symbol: u8,
        freq: u64,
    },
    Internal {
        freq: u64,
        left: Box<Node>,
        right: Box<Node>,
    },
}

impl Node {
    /// Aggregate frequency of the subtree.
    #[inline]
    pub fn freq(&self) -> u64 {
        match self {
            Node::Leaf { freq, .. } => *freq,
            Node::Internal { freq, .. } => *freq,
        }
    }

    /// Check if this is a leaf.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf { .. })
    }

    /// Join two subtrees under a new internal node.
    pub fn merge(left: Node, right: Node) -> Node {
        Node::Internal {
            freq: left.freq() + right.freq(),
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    fn depth(&self) -> usize {
        match self {
            Node::Leaf { .. } => 0,
            Node::Internal { left, right, .. } => 1 + left.depth().max(right.depth()),
        }
    }

    fn leaf_count(&self) -> usize {
        match self {
            Node::Leaf { .. } => 1,
            Node::Internal { left, right, .. } => left.leaf_count() + right.leaf_count(),
        }
    }
}

/// Priority queue entry, ordered so that `BinaryHeap` pops the lowest
/// frequency first and the earliest queued node among equals.
struct QueueEntry {
    freq: u64,
    order: usize,
    node: Node,
}

impl PartialEq for QueueEntry {
    fn eq(&self, other: &Self) -> bool {
        self.freq == other.freq && self.order == other.order
    }
}

impl Eq for QueueEntry {}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed for a min-heap
        other
            .freq
            .cmp(&self.freq)
            .then_with(|| other.order.cmp(&self.order))
    }
}

/// A Huffman tree owned from its root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HuffmanTree {
    root: Node,
}

impl HuffmanTree {
    /// Build the tree for a frequency table.
    ///
    /// Returns `None` when the table is empty. A table with one distinct
    /// symbol yields a tree whose root is that symbol's leaf.
    pub fn build(frequencies: &FrequencyTable) -> Option<Self> {
        let mut heap = BinaryHeap::with_capacity(frequencies.distinct_symbols());
        let mut order = 0usize;

        for (symbol, freq) in frequencies.iter() {
            heap.push(QueueEntry {
                freq,
                order,
                node: Node::Leaf { symbol, freq },
            });
            order += 1;
        }

        loop {
            let first = heap.pop()?;
            let Some(second) = heap.pop() else {
                let tree = HuffmanTree { root: first.node };
                debug!(
                    leaves = tree.leaf_count(),
                    depth = tree.depth(),
                    weight = tree.weight(),
                    "built huffman tree"
                );
                return Some(tree);
            };

            // First removed goes left (bit 0)
            let merged = Node::merge(first.node, second.node);
            heap.push(QueueEntry {
                freq: merged.freq(),
                order,
                node: merged,
            });
            order += 1;
        }
    }

    /// Root node.
    pub fn root(&self) -> &Node {
        &self.root
    }

    /// Length of the longest root-to-leaf path.
    pub fn depth(&self) -> usize {
        self.root.depth()
    }

    /// Number of leaves (distinct symbols).
    pub fn leaf_count(&self) -> usize {
        self.root.leaf_count()
    }

    /// Total frequency, i.e. the input length.
    pub fn weight(&self) -> u64 {
        self.root.freq()
    }
}

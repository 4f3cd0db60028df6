//! Frequency analysis and Huffman tree construction.
//!
//! Trees are built greedily: the two lightest nodes in the working list are
//! merged until one root remains. Ties are resolved by the current order of
//! the working list, which starts in first-occurrence order of the input
//! bytes and receives each merged node at its end. The list is re-sorted
//! with a stable sort before every merge, so equal weights keep that order.

use oxipack_core::error::{OxiPackError, Result};

/// Occurrence counts for the byte values present in an input.
#[derive(Debug, Clone)]
pub struct FrequencyTable {
    /// Count per byte value.
    counts: [u64; 256],
    /// Distinct byte values in order of first occurrence.
    order: Vec<u8>,
}

impl FrequencyTable {
    /// Count byte occurrences. Fails on empty input.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        if data.is_empty() {
            return Err(OxiPackError::EmptyInput);
        }

        let mut counts = [0u64; 256];
        let mut order = Vec::new();
        for &byte in data {
            if counts[byte as usize] == 0 {
                order.push(byte);
            }
            counts[byte as usize] += 1;
        }

        Ok(Self { counts, order })
    }

    /// Count for a byte value (0 if absent).
    pub fn count(&self, byte: u8) -> u64 {
        self.counts[byte as usize]
    }

    /// Number of distinct byte values.
    pub fn distinct(&self) -> usize {
        self.order.len()
    }

    /// Total number of bytes counted.
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// `(byte, count)` pairs in first-occurrence order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, u64)> + '_ {
        self.order
            .iter()
            .map(move |&byte| (byte, self.counts[byte as usize]))
    }
}

/// A node of a Huffman tree.
///
/// Trees rebuilt from a container carry zero weights; only the shape and the
/// leaf values are stored on the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HuffmanNode {
    /// A coded byte value.
    Leaf {
        /// The byte value.
        value: u8,
        /// Occurrence count.
        weight: u64,
    },
    /// A branch; `0` selects `left`, `1` selects `right`.
    Internal {
        /// Sum of both children's weights.
        weight: u64,
        /// Child reached by a `0` bit.
        left: Box<HuffmanNode>,
        /// Child reached by a `1` bit.
        right: Box<HuffmanNode>,
    },
}

impl HuffmanNode {
    /// Create a leaf.
    pub fn leaf(value: u8, weight: u64) -> Self {
        Self::Leaf { value, weight }
    }

    /// Combine two subtrees under a new internal node.
    pub fn merge(left: HuffmanNode, right: HuffmanNode) -> Self {
        Self::Internal {
            weight: left.weight() + right.weight(),
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// Weight of this subtree.
    pub fn weight(&self) -> u64 {
        match self {
            Self::Leaf { weight, .. } | Self::Internal { weight, .. } => *weight,
        }
    }

    /// Whether this node is a leaf.
    pub fn is_leaf(&self) -> bool {
        matches!(self, Self::Leaf { .. })
    }
}

/// A Huffman tree owned by a single compression or decompression call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HuffmanTree {
    root: HuffmanNode,
}

impl HuffmanTree {
    /// Wrap an existing root node.
    pub fn from_root(root: HuffmanNode) -> Self {
        Self { root }
    }

    /// Build a tree from the byte statistics of `data`.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        let frequencies = FrequencyTable::from_bytes(data)?;
        Self::from_frequencies(&frequencies)
    }

    /// Build a tree from a frequency table.
    pub fn from_frequencies(frequencies: &FrequencyTable) -> Result<Self> {
        let mut nodes: Vec<HuffmanNode> = frequencies
            .iter()
            .map(|(byte, count)| HuffmanNode::leaf(byte, count))
            .collect();

        while nodes.len() > 1 {
            nodes.sort_by_key(HuffmanNode::weight);
            let left = nodes.remove(0);
            let right = nodes.remove(0);
            nodes.push(HuffmanNode::merge(left, right));
        }

        let root = nodes.pop().ok_or(OxiPackError::EmptyInput)?;
        Ok(Self { root })
    }

    /// The root node.
    pub fn root(&self) -> &HuffmanNode {
        &self.root
    }

    /// Number of leaves.
    pub fn leaf_count(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![&self.root];
        while let Some(node) = stack.pop() {
            match node {
                HuffmanNode::Leaf { .. } => count += 1,
                HuffmanNode::Internal { left, right, .. } => {
                    stack.push(right);
                    stack.push(left);
                }
            }
        }
        count
    }

    /// Length of the longest root-to-leaf path.
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut stack = vec![(&self.root, 0usize)];
        while let Some((node, depth)) = stack.pop() {
            match node {
                HuffmanNode::Leaf { .. } => deepest = deepest.max(depth),
                HuffmanNode::Internal { left, right, .. } => {
                    stack.push((&**right, depth + 1));
                    stack.push((&**left, depth + 1));
                }
            }
        }
        deepest
    }
}

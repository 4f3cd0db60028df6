//! Preorder tree serialization.
//!
//! A leaf is written as `1, value` and an internal node as a single `0`
//! followed by its left and then its right subtree. Nothing marks where a
//! subtree ends; the grammar alone determines the shape.
//!
//! Parsing is iterative: an explicit stack holds the internal nodes whose
//! children are still being read, so the read position is a plain local.

use crate::tree::{HuffmanNode, HuffmanTree};
use oxipack_core::error::{OxiPackError, Result};

/// Flag byte introducing a leaf.
pub const LEAF_FLAG: u8 = 1;

/// Flag byte introducing an internal node.
pub const INTERNAL_FLAG: u8 = 0;

/// Maximum number of leaves: one per byte value.
pub const MAX_LEAVES: usize = 256;

impl HuffmanTree {
    /// Serialize the tree in preorder.
    pub fn serialize(&self) -> Vec<u8> {
        let mut buffer = Vec::new();
        write_node(self.root(), &mut buffer);
        buffer
    }

    /// Rebuild a tree from its preorder encoding.
    ///
    /// The buffer must hold exactly one complete tree. Truncation, unknown
    /// flag bytes, trailing bytes and trees with more than 256 leaves are
    /// reported as [`OxiPackError::MalformedTree`].
    pub fn deserialize(buffer: &[u8]) -> Result<Self> {
        // Each entry is an internal node awaiting its children; it holds the
        // left child once that subtree is complete.
        let mut pending: Vec<Option<HuffmanNode>> = Vec::new();
        let mut pos = 0;
        let mut leaves = 0;

        loop {
            let flag = *buffer
                .get(pos)
                .ok_or_else(|| OxiPackError::malformed_tree(pos, "tree buffer exhausted"))?;
            pos += 1;

            let mut node = match flag {
                LEAF_FLAG => {
                    let value = *buffer.get(pos).ok_or_else(|| {
                        OxiPackError::malformed_tree(pos, "leaf is missing its value byte")
                    })?;
                    pos += 1;
                    leaves += 1;
                    if leaves > MAX_LEAVES {
                        return Err(OxiPackError::malformed_tree(
                            pos - 2,
                            format!("more than {} leaves", MAX_LEAVES),
                        ));
                    }
                    HuffmanNode::leaf(value, 0)
                }
                INTERNAL_FLAG => {
                    if pending.len() >= MAX_LEAVES - 1 {
                        return Err(OxiPackError::malformed_tree(
                            pos - 1,
                            "tree deeper than any 256-leaf tree",
                        ));
                    }
                    pending.push(None);
                    continue;
                }
                other => {
                    return Err(OxiPackError::malformed_tree(
                        pos - 1,
                        format!("invalid node flag {:#04x}", other),
                    ));
                }
            };

            // Attach the finished subtree to its parent, closing every
            // internal node whose right child this completes.
            loop {
                match pending.pop() {
                    None => {
                        if pos != buffer.len() {
                            return Err(OxiPackError::malformed_tree(
                                pos,
                                format!("{} trailing bytes after tree", buffer.len() - pos),
                            ));
                        }
                        return Ok(HuffmanTree::from_root(node));
                    }
                    Some(None) => {
                        pending.push(Some(node));
                        break;
                    }
                    Some(Some(left)) => {
                        node = HuffmanNode::Internal {
                            weight: 0,
                            left: Box::new(left),
                            right: Box::new(node),
                        };
                    }
                }
            }
        }
    }
}

fn write_node(node: &HuffmanNode, buffer: &mut Vec<u8>) {
    match node {
        HuffmanNode::Leaf { value, .. } => buffer.extend_from_slice(&[LEAF_FLAG, *value]),
        HuffmanNode::Internal { left, right, .. } => {
            buffer.push(INTERNAL_FLAG);
            write_node(left, buffer);
            write_node(right, buffer);
        }
    }
}

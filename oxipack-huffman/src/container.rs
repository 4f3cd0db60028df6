//! HUF container layout.
//!
//! ```text
//! +-------+----------------+-----------+-----+------------------+
//! | "HUF" | tree size u32  | tree      | pad | packed bitstream |
//! |  3 B  | big-endian, 4B | tree size | 1 B | remainder        |
//! +-------+----------------+-----------+-----+------------------+
//! ```

use crate::tree::HuffmanTree;
use oxipack_core::HUFFMAN_MAGIC;
use oxipack_core::error::{OxiPackError, Result};

/// Size of the fixed header: magic plus tree size field.
pub const HEADER_SIZE: usize = 7;

/// Borrowed view of the sections of a HUF container.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Sections<'a> {
    pub tree: &'a [u8],
    pub pad: u8,
    pub payload: &'a [u8],
}

impl<'a> Sections<'a> {
    /// Split a container into its sections, checking sizes only.
    pub fn split(data: &'a [u8]) -> Result<Self> {
        if !data.starts_with(&HUFFMAN_MAGIC) {
            return Err(OxiPackError::invalid_container(
                HUFFMAN_MAGIC.to_vec(),
                &data[..data.len().min(HUFFMAN_MAGIC.len())],
            ));
        }

        if data.len() < HEADER_SIZE {
            return Err(OxiPackError::invalid_header(format!(
                "container is {} bytes, header needs {}",
                data.len(),
                HEADER_SIZE
            )));
        }

        let tree_size = u32::from_be_bytes([data[3], data[4], data[5], data[6]]) as usize;
        let remaining = data.len() - HEADER_SIZE;
        if tree_size > remaining {
            return Err(OxiPackError::malformed_tree(
                remaining,
                format!(
                    "declared tree size {} exceeds the {} bytes remaining",
                    tree_size, remaining
                ),
            ));
        }

        let tree_end = HEADER_SIZE + tree_size;
        let pad = *data
            .get(tree_end)
            .ok_or_else(|| OxiPackError::invalid_header("missing pad byte after tree"))?;

        Ok(Self {
            tree: &data[HEADER_SIZE..tree_end],
            pad,
            payload: &data[tree_end + 1..],
        })
    }
}

/// Summary of a HUF container, read without decoding the payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainerInfo {
    /// Length of the serialized tree in bytes.
    pub tree_size: usize,
    /// Number of distinct byte values in the tree.
    pub leaf_count: usize,
    /// Longest code length in bits.
    pub max_code_len: usize,
    /// Pad bits at the end of the payload.
    pub pad: u8,
    /// Packed payload length in bytes.
    pub payload_size: usize,
    /// Meaningful payload bits.
    pub bit_len: u64,
}

impl ContainerInfo {
    /// Parse the header and tree of a HUF container.
    pub fn parse(data: &[u8]) -> Result<Self> {
        let sections = Sections::split(data)?;
        let tree = HuffmanTree::deserialize(sections.tree)?;

        if sections.pad > 7 {
            return Err(OxiPackError::invalid_header(format!(
                "pad bit count {} exceeds 7",
                sections.pad
            )));
        }
        let total_bits = sections.payload.len() as u64 * 8;
        let bit_len = total_bits
            .checked_sub(sections.pad as u64)
            .ok_or_else(|| OxiPackError::invalid_header("pad exceeds payload"))?;

        Ok(Self {
            tree_size: sections.tree.len(),
            leaf_count: tree.leaf_count(),
            max_code_len: tree.depth().max(1),
            pad: sections.pad,
            payload_size: sections.payload.len(),
            bit_len,
        })
    }
}

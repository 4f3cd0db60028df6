//! Huffman decompression.

use crate::config::HuffmanConfig;
use crate::container::Sections;
use crate::tree::{HuffmanNode, HuffmanTree};
use oxipack_core::error::{OxiPackError, Result};
use oxipack_core::{BitReader, ensure_non_empty};

impl HuffmanTree {
    /// Decode a bitstream by walking the tree from the root.
    ///
    /// A `0` bit moves to the left child and a `1` bit to the right child;
    /// reaching a leaf emits its value and restarts at the root. A tree made
    /// of a single leaf emits its value once per bit.
    pub fn decode(&self, mut reader: BitReader<'_>, config: HuffmanConfig) -> Result<Vec<u8>> {
        let root = self.root();

        if let HuffmanNode::Leaf { value, .. } = root {
            return Ok(vec![*value; reader.bits_remaining() as usize]);
        }

        let mut output = Vec::with_capacity(reader.bits_remaining() as usize / 4);
        let mut node = root;
        let mut code_start = 0;

        while let Some(bit) = reader.read_bit() {
            if let HuffmanNode::Internal { left, right, .. } = node {
                node = if bit { &**right } else { &**left };
            }

            if let HuffmanNode::Leaf { value, .. } = node {
                output.push(*value);
                node = root;
                code_start = reader.bit_position();
            }
        }

        if config.strict_trailing_bits && code_start != reader.bit_position() {
            return Err(OxiPackError::corrupt_stream(code_start));
        }

        Ok(output)
    }
}

/// Decompress a HUF container with the default (strict) configuration.
pub fn decompress(input: &[u8]) -> Result<Vec<u8>> {
    decompress_with_config(input, HuffmanConfig::default())
}

/// Decompress a HUF container.
///
/// # Errors
///
/// - [`OxiPackError::EmptyInput`] for a zero-length buffer
/// - [`OxiPackError::InvalidContainer`] if the magic is not `HUF`
/// - [`OxiPackError::InvalidHeader`] for a truncated header or bad pad byte
/// - [`OxiPackError::MalformedTree`] if the tree cannot be rebuilt
/// - [`OxiPackError::CorruptStream`] for an unfinished trailing code in strict mode
pub fn decompress_with_config(input: &[u8], config: HuffmanConfig) -> Result<Vec<u8>> {
    ensure_non_empty(input)?;

    let sections = Sections::split(input)?;
    let tree = HuffmanTree::deserialize(sections.tree)?;
    let reader = BitReader::new(sections.payload, sections.pad)?;

    tree.decode(reader, config)
}

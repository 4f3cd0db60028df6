//! # OxiPack-Huffman: Pure Rust Huffman Coding
//!
//! Lossless byte-stream compression with a per-input Huffman tree embedded in
//! a self-describing `HUF` container.
//!
//! ## Container Format
//!
//! ```text
//! [0:3)            magic "HUF"
//! [3:7)            big-endian u32 tree size
//! [7:7+size)       preorder tree: 1,value for a leaf, 0 for an internal node
//! [7+size]         pad bit count (0-7)
//! [7+size+1:end)   MSB-first packed codes
//! ```
//!
//! ## Example
//!
//! ```rust
//! use oxipack_huffman::{compress, decompress};
//!
//! let original = b"abracadabra";
//! let compressed = compress(original).unwrap();
//! assert_eq!(&compressed[..3], b"HUF");
//!
//! let decompressed = decompress(&compressed).unwrap();
//! assert_eq!(decompressed, original);
//! ```
//!
//! ## Single-Symbol Inputs
//!
//! An input made of one repeated byte produces a tree with a single leaf.
//! That byte is coded as the one-bit code `0`, so `[7, 7, 7, 7]` packs into
//! four bits and decodes back to four bytes.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

mod codes;
mod config;
mod container;
mod decode;
mod encode;
mod serialize;
mod tree;

pub use codes::{Code, CodeTable};
pub use config::HuffmanConfig;
pub use container::{ContainerInfo, HEADER_SIZE};
pub use decode::{decompress, decompress_with_config};
pub use encode::{compress, pack};
pub use serialize::{INTERNAL_FLAG, LEAF_FLAG, MAX_LEAVES};
pub use tree::{FrequencyTable, HuffmanNode, HuffmanTree};

use oxipack_core::{Algorithm, Codec, Result};

/// Huffman codec implementing the shared [`Codec`] contract.
#[derive(Debug, Clone, Copy, Default)]
pub struct HuffmanCodec {
    config: HuffmanConfig,
}

impl HuffmanCodec {
    /// Create a codec with the given decoder configuration.
    pub fn new(config: HuffmanConfig) -> Self {
        Self { config }
    }

    /// The decoder configuration.
    pub fn config(&self) -> HuffmanConfig {
        self.config
    }
}

impl Codec for HuffmanCodec {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Huffman
    }

    fn compress(&self, input: &[u8]) -> Result<Vec<u8>> {
        compress(input)
    }

    fn decompress(&self, input: &[u8]) -> Result<Vec<u8>> {
        decompress_with_config(input, self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use oxipack_core::OxiPackError;

    #[test]
    fn test_roundtrip_text() {
        let original = b"It was the best of times, it was the worst of times.";
        let compressed = compress(original).unwrap();
        assert_eq!(decompress(&compressed).unwrap(), original);
    }

    #[test]
    fn test_single_distinct_byte() {
        let compressed = compress(&[7, 7, 7, 7]).unwrap();
        assert_eq!(decompress(&compressed).unwrap(), vec![7, 7, 7, 7]);
    }

    #[test]
    fn test_single_byte() {
        let compressed = compress(b"A").unwrap();
        assert_eq!(decompress(&compressed).unwrap(), b"A");
    }

    #[test]
    fn test_codec_trait() {
        let codec = HuffmanCodec::default();
        assert_eq!(codec.algorithm(), Algorithm::Huffman);
        assert_eq!(codec.config(), HuffmanConfig::STRICT);

        let compressed = codec.compress(b"hello hello").unwrap();
        assert_eq!(codec.decompress(&compressed).unwrap(), b"hello hello");
        assert!(matches!(
            codec.decompress(b"RLE\x01\x02"),
            Err(OxiPackError::InvalidContainer { .. })
        ));
    }
}

//! Compression algorithm selector.

use crate::error::OxiPackError;
use std::str::FromStr;

/// Magic marker opening a Huffman container.
pub const HUFFMAN_MAGIC: [u8; 3] = *b"HUF";

/// Magic marker opening a run-length container.
pub const RLE_MAGIC: [u8; 3] = *b"RLE";

/// Supported compression algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// Huffman entropy coding with an embedded tree.
    Huffman,
    /// Byte-oriented run-length coding.
    Rle,
}

impl Algorithm {
    /// All supported algorithms.
    pub const ALL: [Algorithm; 2] = [Algorithm::Huffman, Algorithm::Rle];

    /// Selector name accepted by [`FromStr`].
    pub fn name(&self) -> &'static str {
        match self {
            Self::Huffman => "huffman",
            Self::Rle => "rle",
        }
    }

    /// File extension of compressed output, without the dot.
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Huffman => "huf",
            Self::Rle => "rle",
        }
    }

    /// Magic marker at the start of the container.
    pub fn magic(&self) -> &'static [u8; 3] {
        match self {
            Self::Huffman => &HUFFMAN_MAGIC,
            Self::Rle => &RLE_MAGIC,
        }
    }

    /// Detect the algorithm from the leading bytes of a container.
    pub fn from_magic(data: &[u8]) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|algorithm| data.starts_with(algorithm.magic()))
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Algorithm {
    type Err = OxiPackError;

    /// Selectors are matched exactly; `"Huffman"` is rejected like any other
    /// unknown name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "huffman" => Ok(Self::Huffman),
            "rle" => Ok(Self::Rle),
            other => Err(OxiPackError::unsupported_algorithm(other)),
        }
    }
}

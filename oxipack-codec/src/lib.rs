//! # OxiPack Codec
//!
//! One entry point for every OxiPack algorithm: select a codec by
//! [`Algorithm`] or by selector name, detect a container's algorithm from its
//! magic, and derive file names for compressed and restored output.
//!
//! ## Example
//!
//! ```rust
//! use oxipack_codec::{Algorithm, compress, decompress, detect};
//!
//! let data = b"hello hello hello";
//! let packed = compress(data, Algorithm::Huffman).unwrap();
//! assert_eq!(detect(&packed), Some(Algorithm::Huffman));
//! assert_eq!(decompress(&packed, Algorithm::Huffman).unwrap(), data);
//! ```
//!
//! Selector strings follow the same rules:
//!
//! ```rust
//! use oxipack_codec::{OxiPackError, compress_named};
//!
//! assert!(compress_named(b"abc", "rle").is_ok());
//! assert!(matches!(
//!     compress_named(b"abc", "zip"),
//!     Err(OxiPackError::UnsupportedAlgorithm { .. })
//! ));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod batch;
pub mod naming;

pub use batch::{compress_batch, compress_batch_with, decompress_batch, decompress_batch_with};
pub use naming::{algorithm_from_file_name, compressed_file_name, restored_file_name};
pub use oxipack_core::{Algorithm, Codec, OxiPackError, Result};
pub use oxipack_huffman::{HuffmanCodec, HuffmanConfig};
pub use oxipack_rle::{RleCodec, RleConfig};

use oxipack_core::ensure_non_empty;

/// Per-algorithm configuration used when building codecs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CodecOptions {
    /// Huffman decoder configuration.
    pub huffman: HuffmanConfig,
    /// Run-length encoder configuration.
    pub rle: RleConfig,
}

impl CodecOptions {
    /// Build the codec for `algorithm` with these options.
    pub fn codec(&self, algorithm: Algorithm) -> Box<dyn Codec + Send + Sync> {
        match algorithm {
            Algorithm::Huffman => Box::new(HuffmanCodec::new(self.huffman)),
            Algorithm::Rle => Box::new(RleCodec::new(self.rle)),
        }
    }
}

/// Codec for an algorithm with default configuration.
pub fn codec_for(algorithm: Algorithm) -> Box<dyn Codec + Send + Sync> {
    CodecOptions::default().codec(algorithm)
}

/// Compress `data` with `algorithm`.
pub fn compress(data: &[u8], algorithm: Algorithm) -> Result<Vec<u8>> {
    ensure_non_empty(data)?;
    codec_for(algorithm).compress(data)
}

/// Decompress `data` with `algorithm`.
pub fn decompress(data: &[u8], algorithm: Algorithm) -> Result<Vec<u8>> {
    ensure_non_empty(data)?;
    codec_for(algorithm).decompress(data)
}

/// Compress `data` with the algorithm named `selector` (`"huffman"` or `"rle"`).
///
/// Empty input is rejected before the selector is looked at.
pub fn compress_named(data: &[u8], selector: &str) -> Result<Vec<u8>> {
    ensure_non_empty(data)?;
    compress(data, selector.parse()?)
}

/// Decompress `data` with the algorithm named `selector`.
pub fn decompress_named(data: &[u8], selector: &str) -> Result<Vec<u8>> {
    ensure_non_empty(data)?;
    decompress(data, selector.parse()?)
}

/// Detect the algorithm of a container from its magic.
pub fn detect(data: &[u8]) -> Option<Algorithm> {
    Algorithm::from_magic(data)
}

/// Detect the algorithm of a container, failing for unknown magic.
pub fn require_detect(data: &[u8]) -> Result<Algorithm> {
    ensure_non_empty(data)?;
    detect(data).ok_or_else(|| {
        OxiPackError::invalid_container(b"HUF|RLE".to_vec(), &data[..data.len().min(3)])
    })
}

/// Decompress a container whose algorithm is taken from its magic.
pub fn decompress_auto(data: &[u8]) -> Result<Vec<u8>> {
    decompress(data, require_detect(data)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dispatch_roundtrip() {
        let data = b"mississippi river";
        for algorithm in Algorithm::ALL {
            let packed = compress(data, algorithm).unwrap();
            assert_eq!(&packed[..3], algorithm.magic());
            assert_eq!(decompress(&packed, algorithm).unwrap(), data);
            assert_eq!(decompress_auto(&packed).unwrap(), data);
        }
    }

    #[test]
    fn test_named_selectors() {
        let packed = compress_named(b"aaaa", "rle").unwrap();
        assert_eq!(decompress_named(&packed, "rle").unwrap(), b"aaaa");
        assert!(matches!(
            decompress_named(&packed, "lz77"),
            Err(OxiPackError::UnsupportedAlgorithm { .. })
        ));
    }

    #[test]
    fn test_empty_checked_before_dispatch() {
        assert!(matches!(compress_named(&[], "bogus"), Err(OxiPackError::EmptyInput)));
        assert!(matches!(decompress_named(&[], "bogus"), Err(OxiPackError::EmptyInput)));
        assert!(matches!(decompress_auto(&[]), Err(OxiPackError::EmptyInput)));
    }

    #[test]
    fn test_options_reach_codec() {
        let options = CodecOptions {
            rle: RleConfig::new(2),
            ..CodecOptions::default()
        };
        let packed = options.codec(Algorithm::Rle).compress(b"xxxxx").unwrap();
        assert_eq!(&packed[3..], &[2, b'x', 2, b'x', 1, b'x']);
    }

    #[test]
    fn test_wrong_codec_rejected() {
        let packed = compress(b"abcabc", Algorithm::Rle).unwrap();
        assert!(matches!(
            decompress(&packed, Algorithm::Huffman),
            Err(OxiPackError::InvalidContainer { .. })
        ));
        assert!(matches!(
            decompress_auto(b"PK\x03\x04"),
            Err(OxiPackError::InvalidContainer { .. })
        ));
    }
}
